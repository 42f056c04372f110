//! A module containing [`Option`] and associated types.
//!
//! This Option is separate from [`std::option::Option`], though the two convert freely between
//! each other. It exists so that [`Either`](crate::Either) projections have a closed,
//! two-variant type of their own to project into.
//!
//! [`Option`] is also re-exported at the crate root.

mod iter;
mod option;
mod tests;

pub use iter::*;
pub use option::*;
