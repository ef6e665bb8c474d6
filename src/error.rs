//! Recoverable errors reported by [`CircularBuffer`](crate::CircularBuffer).

use thiserror::Error;

/// Returned by the bounds-checked accessors (`at`, `at_mut`) when `index >= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("index {index} out of range for circular buffer of length {len}")]
pub struct OutOfRange {
    /// The requested logical index.
    pub index: usize,
    /// The buffer length at the time of the call.
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = OutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 7 out of range for circular buffer of length 3"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
