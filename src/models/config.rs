//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Connection settings for the remote Vigilio gRPC service. Read once at
/// startup; there is no runtime reconfiguration.
#[derive(Clone, Debug, Deserialize)]
pub struct GatewayConfig {
    /// Remote host and port, e.g. `127.0.0.1:50051`.
    #[serde(default = "default_grpc_host")]
    pub host: String,
    /// Use TLS with a trust-anchored certificate.
    #[serde(default)]
    pub secure: bool,
    /// Path to the CA certificate. Must be readable when `secure` is true.
    #[serde(default)]
    pub ca_cert: Option<String>,
}

fn default_grpc_host() -> String {
    "127.0.0.1:50051".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_grpc_host(),
            secure: false,
            ca_cert: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub grpc: GatewayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_config_defaults_to_local_plaintext() {
        let config = GatewayConfig::default();
        assert_eq!(config.host, "127.0.0.1:50051");
        assert!(!config.secure);
        assert!(config.ca_cert.is_none());
    }

    #[test]
    fn server_config_deserializes_with_partial_grpc_section() {
        let yaml = "address: 0.0.0.0\nport: 8000\ngrpc:\n  host: vigilio:50051\n";
        let config: ServerConfig = serde_yaml_from_str(yaml);
        assert_eq!(config.port, 8000);
        assert_eq!(config.grpc.host, "vigilio:50051");
        assert!(!config.grpc.secure);
    }

    // Minimal YAML parsing through the `config` crate, the same path `main`
    // uses, so the test exercises the real deserializer.
    fn serde_yaml_from_str(yaml: &str) -> ServerConfig {
        let source = config::File::from_str(yaml, config::FileFormat::Yaml);
        config::Config::builder()
            .add_source(source)
            .build()
            .expect("config should build")
            .try_deserialize()
            .expect("config should deserialize")
    }
}
