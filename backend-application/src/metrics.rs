use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    ingest_events: AtomicU64,
    ingest_errors: AtomicU64,
    stats_queries: AtomicU64,
    stats_not_found: AtomicU64,
    auth_rejections: AtomicU64,
}

impl Metrics {
    pub fn record_ingest(&self) {
        self.ingest_events.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ingest_error(&self) {
        self.ingest_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stats_query(&self, found: bool) {
        self.stats_queries.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.stats_not_found.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_auth_rejection(&self) {
        self.auth_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let events = self.ingest_events.load(Ordering::Relaxed);
        let errors = self.ingest_errors.load(Ordering::Relaxed);
        let queries = self.stats_queries.load(Ordering::Relaxed);
        let not_found = self.stats_not_found.load(Ordering::Relaxed);
        let rejections = self.auth_rejections.load(Ordering::Relaxed);

        format!(
            "# TYPE killstats_ingest_events_total counter\n\
killstats_ingest_events_total {}\n\
# TYPE killstats_ingest_errors_total counter\n\
killstats_ingest_errors_total {}\n\
# TYPE killstats_stats_queries_total counter\n\
killstats_stats_queries_total {}\n\
# TYPE killstats_stats_not_found_total counter\n\
killstats_stats_not_found_total {}\n\
# TYPE killstats_auth_rejections_total counter\n\
killstats_auth_rejections_total {}\n",
            events, errors, queries, not_found, rejections
        )
    }
}
