//! Pipeline failure kinds.

use serde::Serialize;

/// Boxed cause attached to a failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Reasons a handler can abort the pipeline.
///
/// Both kinds are terminal for the item being processed; nothing retries.
#[derive(Debug, thiserror::Error)]
pub enum InspectionError {
    #[error("Illegal package content{}", describe(.message))]
    IllegalContent {
        message: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Package tampering detected{}", describe(.message))]
    Tampered {
        message: Option<String>,
        #[source]
        source: Option<BoxError>,
    },
}

fn describe(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

/// Discriminant of an [`InspectionError`], for callers that report or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    IllegalContent,
    Tampered,
}

impl FailureKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IllegalContent => "illegal_content",
            Self::Tampered => "tampered",
        }
    }
}

impl InspectionError {
    /// Illegal content with a diagnostic message.
    pub fn illegal_content(message: impl Into<String>) -> Self {
        Self::IllegalContent {
            message: Some(message.into()),
            source: None,
        }
    }

    /// Tampering with a diagnostic message.
    pub fn tampered(message: impl Into<String>) -> Self {
        Self::Tampered {
            message: Some(message.into()),
            source: None,
        }
    }

    /// Attach a cause, replacing any previous one.
    pub fn with_source(self, cause: impl Into<BoxError>) -> Self {
        let cause = Some(cause.into());
        match self {
            Self::IllegalContent { message, .. } => Self::IllegalContent {
                message,
                source: cause,
            },
            Self::Tampered { message, .. } => Self::Tampered {
                message,
                source: cause,
            },
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::IllegalContent { .. } => FailureKind::IllegalContent,
            Self::Tampered { .. } => FailureKind::Tampered,
        }
    }

    /// The diagnostic message, if one was given.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::IllegalContent { message, .. } | Self::Tampered { message, .. } => {
                message.as_deref()
            }
        }
    }
}
