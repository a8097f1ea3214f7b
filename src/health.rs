use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingStatus {
    Serving,
    NotServing,
}

impl ServingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ServingStatus::Serving => "SERVING",
            ServingStatus::NotServing => "NOT_SERVING",
        }
    }
}

/// Process-wide serving flag, shared between the router and the shutdown hook
#[derive(Debug, Clone, Default)]
pub struct HealthStatus {
    serving: Arc<AtomicBool>,
}

impl HealthStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_serving(&self) {
        self.serving.store(true, Ordering::Release);
    }

    pub fn set_not_serving(&self) {
        self.serving.store(false, Ordering::Release);
    }

    pub fn status(&self) -> ServingStatus {
        if self.serving.load(Ordering::Acquire) {
            ServingStatus::Serving
        } else {
            ServingStatus::NotServing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_serving_and_clones_share_state() {
        let health = HealthStatus::new();
        assert_eq!(health.status(), ServingStatus::NotServing);

        let shared = health.clone();
        health.set_serving();
        assert_eq!(shared.status(), ServingStatus::Serving);

        shared.set_not_serving();
        assert_eq!(health.status().as_str(), "NOT_SERVING");
    }
}
