use derive_more::{Display, Error};

/// Indexing a collection past its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The requested index.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

/// Building a non-empty collection from a source without any elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unable to construct a non-empty collection from an empty source!")]
pub struct EmptyCollection;
