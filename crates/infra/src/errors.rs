//! Infrastructure error wrapper

use marquee_domain::MarqueeError;
use thiserror::Error;

/// Error type for infrastructure operations
///
/// Newtype over the domain error so infra signatures stay distinct while
/// converting freely at the boundary.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InfraError(pub MarqueeError);

impl From<MarqueeError> for InfraError {
    fn from(err: MarqueeError) -> Self {
        Self(err)
    }
}

impl From<InfraError> for MarqueeError {
    fn from(err: InfraError) -> Self {
        err.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_transparent() {
        let err = InfraError(MarqueeError::NotFound("rsvp".into()));
        assert_eq!(err.to_string(), "Not found: rsvp");
    }

    #[test]
    fn converts_both_ways() {
        let domain = MarqueeError::Internal("boom".into());
        let infra: InfraError = domain.into();
        let back: MarqueeError = infra.into();
        assert!(matches!(back, MarqueeError::Internal(_)));
    }
}
