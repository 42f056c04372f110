#![warn(missing_docs)]

pub mod counter;
pub mod error;
pub mod option;
pub mod panic;
pub mod result;
