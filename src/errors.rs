/// Failures talking to the upstream task API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} returned an unreadable body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} returned status {status}")]
    Status {
        operation: &'static str,
        status: reqwest::StatusCode,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } | Self::Decode { source, .. } => source.status(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_operation() {
        let err = ClientError::Status {
            operation: "delete task",
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "delete task returned status 404 Not Found");
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }
}
