use thiserror::Error;
use tonic::Status;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Invalid or missing connection settings. Fatal at construction.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Any failure surfaced by a remote call. Never retried at this layer.
    #[error("gRPC error: {code:?} - {detail}")]
    Transport { code: tonic::Code, detail: String },

    /// Local filesystem failure while persisting an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed endpoint address.
    #[error("Invalid endpoint: {0}")]
    InvalidUri(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<Status> for GatewayError {
    fn from(status: Status) -> Self {
        GatewayError::Transport {
            code: status.code(),
            detail: status.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_transport_with_code_and_detail() {
        let status = Status::unavailable("connection refused");
        let err = GatewayError::from(status);
        match err {
            GatewayError::Transport { code, detail } => {
                assert_eq!(code, tonic::Code::Unavailable);
                assert_eq!(detail, "connection refused");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn io_error_is_not_a_transport_error() {
        let err: GatewayError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, GatewayError::Io(_)));
    }
}
