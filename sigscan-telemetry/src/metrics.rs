//! ## sigscan-telemetry::metrics
//! **Prometheus exporter for matcher dispatch/verify counters**

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

#[derive(Clone)]
pub struct MatchMetrics {
    pub registry: Registry,
    pub candidates_total: Counter,
    pub verified_total: Counter,
    pub depth_dispatch_seconds: Histogram,
}

impl MatchMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let candidates_total = Counter::new(
            "sigscan_candidates_total",
            "Candidates emitted by the kernel across all depths",
        )
        .expect("metric description is valid");

        let verified_total = Counter::new(
            "sigscan_verify_total",
            "Candidates that passed host verification",
        )
        .expect("metric description is valid");

        let depth_dispatch_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "sigscan_depth_dispatch_seconds",
                "Per-depth dispatch + readback latency",
            )
            .buckets(vec![0.0001, 0.001, 0.01, 0.1, 1.0]),
        )
        .expect("histogram description is valid");

        // Registration can fail only on name collision; this struct owns
        // a fresh registry so that never happens, but a process that
        // builds more than one MatchMetrics (e.g. test suites) should
        // not crash over it either.
        let _ = registry.register(Box::new(candidates_total.clone()));
        let _ = registry.register(Box::new(verified_total.clone()));
        let _ = registry.register(Box::new(depth_dispatch_seconds.clone()));

        Self {
            registry,
            candidates_total,
            verified_total,
            depth_dispatch_seconds,
        }
    }

    pub fn gather(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }
}

impl Default for MatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_increment() {
        let metrics = MatchMetrics::new();
        metrics.candidates_total.inc_by(3.0);
        metrics.verified_total.inc();
        let text = metrics.gather().unwrap();
        assert!(text.contains("sigscan_candidates_total"));
    }
}
