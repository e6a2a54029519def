//! Error types for filterbank construction.

use thiserror::Error;

/// Result type for filterbank operations.
pub type FilterbankResult<T> = Result<T, FilterbankError>;

/// Errors that can occur during filterbank construction.
#[derive(Debug, Error)]
pub enum FilterbankError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: f64,
    },

    /// Invalid filter duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Duration too short for the sample rate to produce any taps.
    #[error("duration {duration} seconds yields no taps at {rate} Hz")]
    EmptyImpulseResponse {
        /// The requested duration.
        duration: f64,
        /// The requested sample rate.
        rate: f64,
    },

    /// Invalid filter count.
    #[error("invalid filter count {count}: {message}")]
    InvalidFilterCount {
        /// The invalid filter count.
        count: usize,
        /// Error message.
        message: String,
    },
}

impl FilterbankError {
    /// Creates an invalid filter count error.
    pub fn invalid_filter_count(count: usize, message: impl Into<String>) -> Self {
        Self::InvalidFilterCount {
            count,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_count_helper() {
        let err = FilterbankError::invalid_filter_count(7, "must be even");
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains("must be even"));
    }

    #[test]
    fn test_empty_impulse_response_message() {
        let err = FilterbankError::EmptyImpulseResponse {
            duration: 0.0001,
            rate: 100.0,
        };
        assert!(err.to_string().contains("no taps"));
    }
}
