use thiserror::Error;

use crate::client::ClientError;
use crate::tag::TagNameError;

/// Errors surfaced to the orchestrator by the resource handlers.
///
/// Every message names the operation and the workspace or tag involved.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Error retrieving workspace {workspace}: {source}")]
    WorkspaceNotFound {
        workspace: String,
        source: ClientError,
    },

    #[error("could not find tag {tag} on workspace {workspace}")]
    TagNotFound { tag: String, workspace: String },

    #[error("invalid tag input format: {input} (expected {expected})")]
    InvalidImportFormat {
        input: String,
        expected: &'static str,
    },

    #[error("Error {operation} on workspace {workspace}: {source}")]
    RemoteCall {
        operation: String,
        workspace: String,
        source: ClientError,
    },

    #[error(transparent)]
    InvalidTagName(#[from] TagNameError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ResourceError {
    pub(crate) fn remote(operation: impl Into<String>, workspace: &str, source: ClientError) -> Self {
        Self::RemoteCall {
            operation: operation.into(),
            workspace: workspace.to_string(),
            source,
        }
    }

    /// Whether this error means the managed object is gone from the remote,
    /// which an orchestrator treats as drift rather than failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WorkspaceNotFound { .. } | Self::TagNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_embed_identifiers() {
        let err = ResourceError::TagNotFound {
            tag: "red".to_string(),
            workspace: "ws-1".to_string(),
        };
        assert_eq!(err.to_string(), "could not find tag red on workspace ws-1");

        let err = ResourceError::remote(
            "creating tag red",
            "ws-1",
            ClientError::Api {
                status: 500,
                message: "internal".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Error creating tag red on workspace ws-1: API error (HTTP 500): internal"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(ResourceError::TagNotFound {
            tag: "red".to_string(),
            workspace: "ws-1".to_string(),
        }
        .is_not_found());
        assert!(ResourceError::WorkspaceNotFound {
            workspace: "ws-1".to_string(),
            source: ClientError::NotFound("workspaces/ws-1".to_string()),
        }
        .is_not_found());
        assert!(!ResourceError::InvalidConfig("x".to_string()).is_not_found());
    }
}
