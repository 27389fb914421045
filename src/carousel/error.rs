use thiserror::Error;

/// A type alias for results returned while building a carousel.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// An error that prevents a carousel from being created.
///
/// Runtime index changes never produce one of these; they are clamped instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// The initial external index does not point at an item.
    #[error("index '{index}' is out of bounds for a carousel with {len} item(s)")]
    IndexOutOfBounds { index: usize, len: usize },
}
