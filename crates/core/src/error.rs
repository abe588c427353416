use std::fmt;

use crate::messages;

/// Entities that can be looked up by key and reported missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Review,
    Comment,
    User,
}

impl Entity {
    /// The message a client sees when this entity is absent.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Entity::Review => messages::ID_NOT_FOUND,
            Entity::Comment => messages::COMMENT_NOT_FOUND,
            Entity::User => messages::USERNAME_NOT_FOUND,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Review => "Review",
            Entity::Comment => "Comment",
            Entity::User => "User",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: Entity, key: String },

    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid reference: {0}")]
    InvalidReference(&'static str),

    #[error("Unknown filter value: {0}")]
    UnknownFilterValue(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: Entity, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// The stable message shown to clients. Never carries internal detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            CoreError::NotFound { entity, .. } => entity.not_found_message(),
            CoreError::InvalidInput(msg)
            | CoreError::InvalidReference(msg)
            | CoreError::UnknownFilterValue(msg) => msg,
            CoreError::MissingField(_) => messages::MISSING_FIELD,
            CoreError::Internal(_) => messages::INTERNAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_depends_on_entity() {
        assert_eq!(
            CoreError::not_found(Entity::Review, 7).public_message(),
            "ID not found"
        );
        assert_eq!(
            CoreError::not_found(Entity::Comment, 7).public_message(),
            "Not a valid comment"
        );
    }

    #[test]
    fn internal_message_hides_detail() {
        let err = CoreError::Internal("connection reset by peer".into());
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn missing_field_names_the_field_only_in_display() {
        let err = CoreError::MissingField("body");
        assert_eq!(err.public_message(), "Missing required field");
        assert_eq!(err.to_string(), "Missing required field: body");
    }
}
