//! Fixed-window request limiter keyed by route and client IP.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use axum::http::HeaderMap;
use tokio::time::Instant;

/// Buckets kept before expired ones are pruned.
const PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub limit: u32,
    pub window: Duration,
}

pub const IMPORT_LIMIT: RateLimit = RateLimit {
    limit: 20,
    window: Duration::from_secs(60),
};

pub const ENRICH_LIMIT: RateLimit = RateLimit {
    limit: 12,
    window: Duration::from_secs(60),
};

#[derive(Debug)]
struct Bucket {
    count: u32,
    reset_at: Instant,
}

#[derive(Debug, Default)]
pub struct RateLimiter {
    buckets: Mutex<HashMap<String, Bucket>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hit for `key`. Returns `true` when the caller is over the limit.
    pub fn check(&self, key: &str, rule: RateLimit) -> bool {
        let now = Instant::now();
        let mut buckets = self
            .buckets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if buckets.len() >= PRUNE_THRESHOLD {
            buckets.retain(|_, bucket| bucket.reset_at > now);
        }

        match buckets.get_mut(key) {
            Some(bucket) if now < bucket.reset_at => {
                if bucket.count >= rule.limit {
                    return true;
                }
                bucket.count += 1;
                false
            }
            _ => {
                buckets.insert(
                    key.to_string(),
                    Bucket {
                        count: 1,
                        reset_at: now + rule.window,
                    },
                );
                false
            }
        }
    }
}

/// First `x-forwarded-for` entry, then `x-real-ip`, then `"unknown"`.
pub fn client_ip(headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
    };

    forwarded
        .or_else(real_ip)
        .unwrap_or("unknown")
        .to_string()
}

pub fn rate_limit_key(route: &str, headers: &HeaderMap) -> String {
    format!("{route}:{}", client_ip(headers))
}
