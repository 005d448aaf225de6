use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use super::gateway::{SubmissionError, SubmissionGateway};

/// Which payment backend to submit to, and how long to wait for it.
///
/// Built from the `[submission]` section of the CLI config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub backend: String,
    /// Latency the mock backend adds before answering.
    pub simulated_delay: Duration,
    /// Longest a donor is left in `Submitting` before the attempt fails.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend: "mock".to_string(),
            simulated_delay: Duration::ZERO,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Builds the gateway for one payment backend.
#[async_trait]
pub trait GatewayFactory: Send + Sync {
    fn backend_name(&self) -> &'static str;

    async fn create(
        &self,
        config: &GatewayConfig,
    ) -> Result<Box<dyn SubmissionGateway>, SubmissionError>;
}

/// Payment backends the binary knows about, by name.
#[derive(Default)]
pub struct GatewayRegistry {
    factories: HashMap<&'static str, Box<dyn GatewayFactory>>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A later registration under the same name wins.
    pub fn register(
        &mut self,
        factory: Box<dyn GatewayFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Builds the gateway named by `config.backend`.
    ///
    /// A misspelt backend in the config is a [`SubmissionError::Configuration`]
    /// listing the names that would have worked.
    pub async fn create(
        &self,
        config: &GatewayConfig,
    ) -> Result<Box<dyn SubmissionGateway>, SubmissionError> {
        match self.factories.get(config.backend.as_str()) {
            Some(factory) => factory.create(config).await,
            None => Err(SubmissionError::Configuration(format!(
                "unknown payment backend '{}' (available: {})",
                config.backend,
                self.available_backends().join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::submission::MockGatewayFactory;

    /// A backend whose credentials are missing.
    struct UnconfiguredFactory;

    #[async_trait]
    impl GatewayFactory for UnconfiguredFactory {
        fn backend_name(&self) -> &'static str {
            "stripe"
        }

        async fn create(
            &self,
            _config: &GatewayConfig,
        ) -> Result<Box<dyn SubmissionGateway>, SubmissionError> {
            Err(SubmissionError::Configuration(
                "stripe secret key not set".to_string(),
            ))
        }
    }

    fn config_for(backend: &str) -> GatewayConfig {
        GatewayConfig {
            backend: backend.to_string(),
            ..GatewayConfig::default()
        }
    }

    #[tokio::test]
    async fn mock_backend_is_built_from_config() {
        let mut registry = GatewayRegistry::new();
        registry.register(Box::new(MockGatewayFactory));
        let config = GatewayConfig {
            simulated_delay: Duration::from_millis(1),
            ..GatewayConfig::default()
        };

        let gateway = registry.create(&config).await.unwrap();

        assert_eq!(gateway.backend_name(), "mock");
    }

    #[tokio::test]
    async fn misspelt_backend_lists_the_known_ones() {
        let mut registry = GatewayRegistry::new();
        registry.register(Box::new(MockGatewayFactory));
        registry.register(Box::new(UnconfiguredFactory));

        let result = registry.create(&config_for("moc")).await;

        match result {
            Err(SubmissionError::Configuration(message)) => {
                assert_eq!(message, "unknown payment backend 'moc' (available: mock, stripe)");
            }
            Err(other) => panic!("expected a configuration error, got {other:?}"),
            Ok(_) => panic!("expected a configuration error"),
        }
    }

    #[tokio::test]
    async fn factory_errors_are_passed_through() {
        let mut registry = GatewayRegistry::new();
        registry.register(Box::new(UnconfiguredFactory));

        let result = registry.create(&config_for("stripe")).await;

        assert!(matches!(
            result,
            Err(SubmissionError::Configuration(ref m)) if m == "stripe secret key not set"
        ));
    }

    #[test]
    fn default_config_waits_thirty_seconds_on_the_mock() {
        let config = GatewayConfig::default();

        assert_eq!(config.backend, "mock");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.simulated_delay.is_zero());
    }
}
