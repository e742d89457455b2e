//! Transport channel construction for the Vigilio gRPC service.

use std::fs;

use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};

use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::models::config::GatewayConfig;

/// Builds a lazily-connecting channel to the configured endpoint.
///
/// In secure mode the CA certificate must be readable, otherwise construction
/// fails with [`GatewayError::Configuration`] before any network activity.
/// The TCP connection is established on first use and released when the last
/// clone of the channel is dropped, so a per-request channel never outlives
/// its request.
pub fn open(config: &GatewayConfig) -> GatewayResult<Channel> {
    let scheme = if config.secure { "https" } else { "http" };
    let uri = format!("{scheme}://{}", config.host);

    let mut endpoint =
        Endpoint::from_shared(uri).map_err(|e| GatewayError::InvalidUri(e.to_string()))?;

    if config.secure {
        let ca_cert = config.ca_cert.as_deref().ok_or_else(|| {
            GatewayError::Configuration(
                "secure mode requires a CA certificate path".to_string(),
            )
        })?;
        let pem = fs::read(ca_cert).map_err(|e| {
            GatewayError::Configuration(format!("cannot read CA certificate {ca_cert}: {e}"))
        })?;
        let tls = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(pem));
        endpoint = endpoint
            .tls_config(tls)
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;
    }

    Ok(endpoint.connect_lazy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn plaintext_channel_builds_without_network() {
        let config = GatewayConfig {
            host: "127.0.0.1:50051".to_string(),
            secure: false,
            ca_cert: None,
        };
        assert!(open(&config).is_ok());
    }

    #[test]
    fn secure_without_trust_material_fails_fast() {
        let config = GatewayConfig {
            host: "127.0.0.1:50051".to_string(),
            secure: true,
            ca_cert: None,
        };
        assert!(matches!(
            open(&config),
            Err(GatewayError::Configuration(_))
        ));
    }

    #[test]
    fn secure_with_unreadable_trust_material_fails_fast() {
        let config = GatewayConfig {
            host: "127.0.0.1:50051".to_string(),
            secure: true,
            ca_cert: Some("/nonexistent/ca.pem".to_string()),
        };
        assert!(matches!(
            open(&config),
            Err(GatewayError::Configuration(_))
        ));
    }

    #[test]
    fn malformed_host_is_rejected() {
        let config = GatewayConfig {
            host: "not a host".to_string(),
            secure: false,
            ca_cert: None,
        };
        assert!(matches!(open(&config), Err(GatewayError::InvalidUri(_))));
    }
}
