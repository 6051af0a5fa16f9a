//! Configuration for the Courier client

use crate::types::Headers;
use courier_transport::HttpTransportConfig;
use std::time::Duration;

/// Configuration for a [`TransportClient`](crate::TransportClient) backed by
/// the reqwest transport.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Settings of the underlying HTTP transport
    pub transport: HttpTransportConfig,

    /// Headers sent with every request; per-call headers take precedence
    pub default_headers: Headers,
}

impl ClientConfig {
    /// Start building a configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        let defaults = HttpTransportConfig::default();
        if other.transport.timeout != defaults.timeout {
            self.transport.timeout = other.transport.timeout;
        }
        if other.transport.connect_timeout != defaults.connect_timeout {
            self.transport.connect_timeout = other.transport.connect_timeout;
        }
        if other.transport.user_agent != defaults.user_agent {
            self.transport.user_agent = other.transport.user_agent;
        }
        self.default_headers.extend(other.default_headers);
        self
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.transport.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.transport.connect_timeout = timeout;
        self
    }

    /// Set the `User-Agent` header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.transport.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request.
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
