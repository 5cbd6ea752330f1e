use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One planning artifact produced from a submission.
///
/// Many documents may reference one submission. Revision locates the latest
/// document for a `(submission, kind)` pair and overwrites its `content` in
/// place; no prior version is retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub kind: DocumentKind,
    /// Copied from the submission at generation time.
    pub domain: Option<String>,
    /// Full generated text, replaced wholesale on revision.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The fixed document categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Requirements,
    Technical,
    Lifecycle,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requirements => "requirements",
            Self::Technical => "technical",
            Self::Lifecycle => "lifecycle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "requirements" => Some(Self::Requirements),
            "technical" => Some(Self::Technical),
            "lifecycle" => Some(Self::Lifecycle),
            _ => None,
        }
    }

    pub const ALL: [DocumentKind; 3] = [Self::Requirements, Self::Technical, Self::Lifecycle];
}

/// Input for the revision endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviseDocumentInput {
    /// The caller's change instruction, passed to the provider verbatim.
    #[serde(rename = "revisionPrompt")]
    pub revision_prompt: String,
}
