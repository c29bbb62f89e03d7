use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Body returned by a successful project creation.
///
/// The backend's response schema is not part of the client contract, so the
/// decoded JSON is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCreationResult(pub Value);

impl ProjectCreationResult {
    /// Borrow the decoded JSON body.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// View the body as the backend's project representation, if it has
    /// that shape.
    #[must_use]
    pub fn project(&self) -> Option<ProjectSummary> {
        ProjectSummary::deserialize(&self.0).ok()
    }
}

impl From<Value> for ProjectCreationResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl PartialEq<Value> for ProjectCreationResult {
    fn eq(&self, other: &Value) -> bool {
        &self.0 == other
    }
}

/// A project as the backend describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: Uuid,
    pub name: String,
    pub language: Option<String>,
    #[serde(default)]
    pub files: Vec<ProjectFile>,
    /// Live editing session attached to the project, if any.
    #[serde(default)]
    pub active_session_id: Option<String>,
}

/// A file entry inside a [`ProjectSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub id: Uuid,
    pub name: String,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn opaque_body_is_preserved() {
        let body = json!({"id": "p1", "extra": [1, 2, 3]});
        let result = ProjectCreationResult::from(body.clone());
        assert_eq!(result, body);
        assert_eq!(result.as_value()["extra"][2], 3);
        assert_eq!(result.into_value(), body);
    }

    #[test]
    fn serializes_as_bare_json() {
        let result = ProjectCreationResult(json!({"id": "p1"}));
        assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"id":"p1"}"#);
    }

    #[test]
    fn project_view_parses_backend_shape() {
        let result = ProjectCreationResult(json!({
            "id": "6f1c1b7e-3a51-4d0e-9a55-2f5f0d5b7a10",
            "name": "scratchpad",
            "language": "rust",
            "files": [{
                "id": "0a9d5c3e-8d2b-4c9f-a1d4-7b1f2e3c4d5e",
                "name": "main.rs",
                "path": "src/main.rs"
            }],
            "activeSessionId": null
        }));

        let project = result.project().expect("backend shape");
        assert_eq!(project.name, "scratchpad");
        assert_eq!(project.language.as_deref(), Some("rust"));
        assert_eq!(project.files.len(), 1);
        assert_eq!(project.files[0].path, "src/main.rs");
        assert_eq!(project.active_session_id, None);
    }

    #[test]
    fn project_view_is_none_for_other_shapes() {
        let result = ProjectCreationResult(json!({"id": "p1"}));
        assert!(result.project().is_none());
        assert_eq!(result, json!({"id": "p1"}));
    }
}
