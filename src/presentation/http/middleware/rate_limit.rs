// src/presentation/http/middleware/rate_limit.rs
use crate::config::ContactRateLimit;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type ContactRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP token bucket for anonymous form submissions. Returns `None`
/// when the limit cannot be expressed, e.g. a zero refill rate.
pub fn contact_rate_limit_layer(limit: ContactRateLimit) -> Option<ContactRateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(limit.per_second);
    builder.burst_size(limit.burst.get());
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    #[test]
    fn default_limit_builds_a_layer() {
        assert!(contact_rate_limit_layer(ContactRateLimit::default()).is_some());
    }

    #[test]
    fn zero_refill_rate_is_rejected() {
        let limit = ContactRateLimit {
            per_second: 0,
            burst: NonZeroU32::MIN,
        };
        assert!(contact_rate_limit_layer(limit).is_none());
    }
}
