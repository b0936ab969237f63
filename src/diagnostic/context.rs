//! Failure contexts handed to handlers.
//!
//! A context is whatever data a compiler stage needs to describe one failure
//! instance. Each [`Handler`](super::Handler) names the context shape it
//! accepts, so the pairing is checked at compile time.

/// Marker for data describing one failure instance
pub trait Context {}

/// A context for when there's only one item to carry; saves declaring a
/// whole new type for simple failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleItemContext<T> {
    pub item: T,
}

impl<T> SingleItemContext<T> {
    pub fn new(item: T) -> Self {
        Self { item }
    }

    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> Context for SingleItemContext<T> {}

impl<T> From<T> for SingleItemContext<T> {
    fn from(item: T) -> Self {
        Self::new(item)
    }
}
