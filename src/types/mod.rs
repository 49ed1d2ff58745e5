#![forbid(unsafe_code)]
//! Shared identifier and error types.

pub mod checksum;

/// Unsigned 64-bit node identifier; the atom of every posting list.
pub type Uid = u64;

/// Errors surfaced by the codec when handed bytes it cannot trust.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UidError {
    /// Encoded pack data failed an integrity check.
    #[error("corruption: {0}")]
    Corruption(&'static str),
}

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, UidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_reason() {
        let err = UidError::Corruption("pack checksum mismatch");
        assert_eq!(err.to_string(), "corruption: pack checksum mismatch");
        assert_eq!(err.clone(), err);
    }
}
