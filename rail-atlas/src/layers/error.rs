//! Layer composition error types.

use crate::frame::FrameError;
use crate::map::MapError;

/// Errors propagated by the layer builders.
///
/// Both variants are transparent: the message and source are exactly
/// those of the underlying dataset or map error.
#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    /// A row could not be read as the expected record
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// The mapping layer rejected a primitive
    #[error(transparent)]
    Map(#[from] MapError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_pass_through() {
        let err = LayerError::from(MapError::EmptyLocations);
        assert_eq!(err.to_string(), MapError::EmptyLocations.to_string());

        let err = LayerError::from(FrameError::MissingGeometry { row: 2 });
        assert_eq!(err.to_string(), "row 2: missing geometry");
    }
}
