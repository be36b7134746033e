use std::cell::Cell;

/// A metrics-only counter that can be bumped through `&self`.
///
/// Needed for read-path operations (`peek`, `peek_lru`, `recency_rank`)
/// which take `&self` but still count.
///
/// # Safety
/// This type is only safe if all accesses are externally synchronized.
/// In this crate it is protected by the `ConcurrentLruCache` lock (or by
/// single-threaded use of `LruCache`).
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}

// SAFETY:
// All access to MetricsCell is externally synchronized by the cache lock.
// Metrics are observational and do not affect correctness.
unsafe impl Sync for MetricsCell {}
unsafe impl Send for MetricsCell {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incr_through_shared_ref() {
        let cell = MetricsCell::new();
        assert_eq!(cell.get(), 0);
        cell.incr();
        cell.incr();
        assert_eq!(cell.get(), 2);
    }
}
