use crate::metrics::cell::MetricsCell;

/// Counters for every LRU cache operation.
///
/// Mutating operations bump plain `u64` fields; read-path operations that
/// only hold `&self` go through [`MetricsCell`].
#[derive(Debug, Default)]
pub struct LruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evicted_entries: u64,

    pub remove_calls: u64,
    pub remove_found: u64,

    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
    pub peek_lru_calls: MetricsCell,
    pub peek_lru_found: MetricsCell,

    pub touch_calls: u64,
    pub touch_found: u64,

    pub recency_rank_calls: MetricsCell,
    pub recency_rank_found: MetricsCell,
    pub recency_rank_scan_steps: MetricsCell,
}

impl LruMetrics {
    #[inline]
    pub fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    #[inline]
    pub fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    #[inline]
    pub fn record_insert_update(&mut self) {
        self.insert_calls += 1;
        self.insert_updates += 1;
    }

    #[inline]
    pub fn record_insert_new(&mut self) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }

    #[inline]
    pub fn record_eviction(&mut self) {
        self.evicted_entries += 1;
    }

    #[inline]
    pub fn record_remove(&mut self, found: bool) {
        self.remove_calls += 1;
        if found {
            self.remove_found += 1;
        }
    }

    #[inline]
    pub fn record_pop_lru(&mut self, found: bool) {
        self.pop_lru_calls += 1;
        if found {
            self.pop_lru_found += 1;
        }
    }

    #[inline]
    pub fn record_touch(&mut self, found: bool) {
        self.touch_calls += 1;
        if found {
            self.touch_found += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut metrics = LruMetrics::default();
        metrics.record_get_hit();
        metrics.record_get_miss();
        metrics.record_get_miss();
        assert_eq!(metrics.get_calls, 3);
        assert_eq!(metrics.get_hits, 1);
        assert_eq!(metrics.get_misses, 2);

        metrics.record_insert_new();
        metrics.record_insert_update();
        assert_eq!(metrics.insert_calls, 2);

        metrics.record_pop_lru(true);
        metrics.record_pop_lru(false);
        assert_eq!(metrics.pop_lru_calls, 2);
        assert_eq!(metrics.pop_lru_found, 1);
    }
}
