use prometheus_client::{
    encoding::text::encode,
    metrics::{counter::Counter, family::Family, gauge::Gauge},
    registry::Registry,
};
use prometheus_client_derive_encode::EncodeLabelSet;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    pub method: String,
    pub status: String,
}

#[derive(Debug)]
pub struct Metrics {
    registry: Registry,
    requests: Family<RequestLabels, Counter>,
    tracked_users: Gauge,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let requests = Family::<RequestLabels, Counter>::default();
        registry.register(
            "point_requests",
            "Point operations by method and outcome",
            requests.clone(),
        );

        let tracked_users = Gauge::default();
        registry.register(
            "point_tracked_users",
            "Users holding a lock token",
            tracked_users.clone(),
        );

        Self {
            registry,
            requests,
            tracked_users,
        }
    }

    pub fn record<T, E>(&self, method: &str, result: &Result<T, E>) {
        let status = if result.is_ok() { "success" } else { "error" };

        self.requests
            .get_or_create(&RequestLabels {
                method: method.to_string(),
                status: status.to_string(),
            })
            .inc();
    }

    pub fn set_tracked_users(&self, count: usize) {
        self.tracked_users
            .set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    pub fn encode(&self) -> Result<String, std::fmt::Error> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_outcomes_per_method() {
        let metrics = Metrics::new();

        metrics.record::<(), ()>("charge", &Ok(()));
        metrics.record::<(), ()>("charge", &Ok(()));
        metrics.record::<(), ()>("use", &Err(()));
        metrics.set_tracked_users(3);

        let text = metrics.encode().unwrap();

        assert!(text.contains(r#"point_requests_total{method="charge",status="success"} 2"#));
        assert!(text.contains(r#"point_requests_total{method="use",status="error"} 1"#));
        assert!(text.contains("point_tracked_users 3"));
    }
}
