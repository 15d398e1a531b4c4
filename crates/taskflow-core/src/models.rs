//! Toggle Models
//!
//! Identity of a toggleable entity and the server's JSON answer.

use serde::Deserialize;

use crate::error::ToggleError;

/// Which collection an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Task,
    Project,
}

impl EntityKind {
    /// URL path segment for the collection
    pub fn segment(&self) -> &'static str {
        match self {
            EntityKind::Task => "tasks",
            EntityKind::Project => "projects",
        }
    }

    /// Data attribute carrying the entity id on toggle buttons
    pub fn id_attribute(&self) -> &'static str {
        match self {
            EntityKind::Task => "data-task-id",
            EntityKind::Project => "data-project-id",
        }
    }
}

/// A single entity addressed by a toggle control
///
/// Equality and hashing cover identity only; `current_completed` is the state
/// the page showed when the control was clicked and is never trusted.
#[derive(Debug, Clone)]
pub struct ToggleTarget {
    kind: EntityKind,
    entity_id: String,
    current_completed: bool,
}

impl PartialEq for ToggleTarget {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.entity_id == other.entity_id
    }
}

impl Eq for ToggleTarget {}

impl std::hash::Hash for ToggleTarget {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.entity_id.hash(state);
    }
}

impl ToggleTarget {
    /// Build a target from the raw attribute value; blank ids are rejected
    pub fn new(kind: EntityKind, entity_id: impl Into<String>) -> Result<Self, ToggleError> {
        let entity_id = entity_id.into().trim().to_string();
        if entity_id.is_empty() {
            return Err(ToggleError::MissingEntityId);
        }
        Ok(Self {
            kind,
            entity_id,
            current_completed: false,
        })
    }

    /// Record the completion state the page currently shows
    pub fn with_current_completed(mut self, completed: bool) -> Self {
        self.current_completed = completed;
        self
    }

    pub fn current_completed(&self) -> bool {
        self.current_completed
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// `/tasks/{id}/toggle/` or `/projects/{id}/toggle/`
    pub fn endpoint(&self) -> String {
        format!("/{}/{}/toggle/", self.kind.segment(), self.entity_id)
    }
}

/// Body returned by the toggle endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub message: String,
}

impl ToggleResponse {
    pub fn confirmed(completed: bool, message: impl Into<String>) -> Self {
        Self {
            success: true,
            completed: Some(completed),
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            completed: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_per_kind() {
        let task = ToggleTarget::new(EntityKind::Task, "42").unwrap();
        let project = ToggleTarget::new(EntityKind::Project, " 7 ").unwrap();
        assert_eq!(task.endpoint(), "/tasks/42/toggle/");
        assert_eq!(project.endpoint(), "/projects/7/toggle/");
    }

    #[test]
    fn test_identity_ignores_displayed_state() {
        let shown_done = ToggleTarget::new(EntityKind::Task, "3")
            .unwrap()
            .with_current_completed(true);
        let shown_open = ToggleTarget::new(EntityKind::Task, "3").unwrap();
        assert_eq!(shown_done, shown_open);
        assert!(shown_done.current_completed());
    }

    #[test]
    fn test_blank_id_rejected() {
        assert_eq!(
            ToggleTarget::new(EntityKind::Task, "  "),
            Err(ToggleError::MissingEntityId)
        );
    }

    #[test]
    fn test_rejection_body_without_completed() {
        let body: ToggleResponse = serde_json::from_str(r#"{"success": false, "message": "X"}"#).unwrap();
        assert_eq!(body, ToggleResponse::rejected("X"));
    }

    #[test]
    fn test_confirmation_body() {
        let body: ToggleResponse =
            serde_json::from_str(r#"{"success": true, "completed": true, "message": "Task completed"}"#).unwrap();
        assert_eq!(body, ToggleResponse::confirmed(true, "Task completed"));
    }
}
