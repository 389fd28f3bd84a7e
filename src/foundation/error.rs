/// Convenience result type used across the planner.
pub type QuestResult<T> = Result<T, QuestError>;

/// Top-level error taxonomy. Every variant is raised while planning, before any
/// descriptor reaches the animation engine.
#[derive(thiserror::Error, Debug)]
pub enum QuestError {
    /// A selector matched no element, or an element handle is unknown to the layout.
    #[error("target not found: {0}")]
    TargetNotFound(String),

    /// Stagger math was asked to spread over a party with no participants.
    #[error("empty party: stagger requires at least one participant")]
    EmptyParty,

    /// Unrecognized path or split name.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuestError {
    /// Build a [`QuestError::TargetNotFound`] value.
    pub fn target_not_found(selector: impl Into<String>) -> Self {
        Self::TargetNotFound(selector.into())
    }

    /// Build a [`QuestError::InvalidMode`] value.
    pub fn invalid_mode(name: impl Into<String>) -> Self {
        Self::InvalidMode(name.into())
    }

    /// Build a [`QuestError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QuestError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
