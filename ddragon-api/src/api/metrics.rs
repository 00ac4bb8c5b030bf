use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters of CDN requests issued by a client.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    count: AtomicU64,
    failures: AtomicU64,
}

impl RequestMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Requests issued since creation.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Requests which ended in a transport, status or decoding error.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}
