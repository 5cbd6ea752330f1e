//! Document generation and revision orchestration.
//!
//! [`DocumentService`] ties the record store, the prompt catalog, and the
//! generation provider together. Each operation is one synchronous chain of
//! store read, provider call, store write; there is no retry, no internal
//! parallelism, and no partial persistence on failure.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::db::Database;
use crate::generator::{GeneratorError, TextGenerator};
use crate::models::{DocumentKind, Domain, GeneratedDocument, Submission};
use crate::prompts;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("User input not found")]
    SubmissionNotFound,

    #[error("Document not found")]
    DocumentNotFound,

    #[error("Invalid domain or document type")]
    InvalidTemplate,

    #[error("Document generation failed: {0}")]
    Generation(#[from] GeneratorError),

    #[error("Storage error: {0}")]
    Store(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct DocumentService {
    db: Database,
    generator: Arc<dyn TextGenerator>,
}

impl DocumentService {
    pub fn new(db: Database, generator: Arc<dyn TextGenerator>) -> Self {
        Self { db, generator }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Generate a document of `kind` for an existing submission.
    ///
    /// Resolves the template for (kind, submission.domain), interpolates the
    /// idea text, calls the provider, and persists a new document record
    /// tagged with the submission id, kind, and domain. Nothing is written if
    /// any step before the save fails.
    pub async fn generate(
        &self,
        submission_id: Uuid,
        kind: DocumentKind,
    ) -> Result<GeneratedDocument, ServiceError> {
        let submission = self.fetch_submission(submission_id)?;
        let prompt = self.build_prompt(&submission, kind)?;

        tracing::debug!(
            submission_id = %submission_id,
            kind = kind.as_str(),
            "generating document"
        );
        let content = self.generator.generate(&prompt).await?;

        let document =
            self.db
                .insert_document(submission_id, kind, submission.domain.clone(), &content)?;

        tracing::info!(
            document_id = %document.id,
            submission_id = %submission_id,
            kind = kind.as_str(),
            "document generated"
        );
        Ok(document)
    }

    /// Regenerate an existing document with a revision instruction.
    ///
    /// The provider sees the original interpolated template, the current
    /// document content verbatim, and the instruction; the whole document is
    /// regenerated and the record's content is overwritten in place. The
    /// prior text is not retained.
    pub async fn revise(
        &self,
        submission_id: Uuid,
        kind: DocumentKind,
        instruction: &str,
    ) -> Result<GeneratedDocument, ServiceError> {
        let document = self
            .db
            .find_document(submission_id, kind)?
            .ok_or(ServiceError::DocumentNotFound)?;
        let submission = self.fetch_submission(submission_id)?;

        let original_prompt = self.build_prompt(&submission, kind)?;
        let prompt = format!(
            "{}\n\nCurrent document content:\n{}\n\nRevision request: {}\n\n\
             Please provide a revised version of the document incorporating the requested \
             changes while maintaining the overall structure and completeness of the \
             original document.",
            original_prompt, document.content, instruction
        );

        tracing::debug!(
            document_id = %document.id,
            kind = kind.as_str(),
            "revising document"
        );
        let content = self.generator.generate(&prompt).await?;

        if !self.db.update_document_content(document.id, &content)? {
            // Deleted between the read and the write; last-writer-wins races
            // on content are accepted, but a vanished row is not.
            return Err(ServiceError::DocumentNotFound);
        }

        tracing::info!(
            document_id = %document.id,
            submission_id = %submission_id,
            kind = kind.as_str(),
            "document revised"
        );
        Ok(GeneratedDocument { content, ..document })
    }

    fn fetch_submission(&self, id: Uuid) -> Result<Submission, ServiceError> {
        self.db
            .get_submission(id)?
            .ok_or(ServiceError::SubmissionNotFound)
    }

    /// Resolve the submission's template and interpolate its idea text.
    ///
    /// The stored domain tag is free text; a tag that names no registered
    /// vertical is a template lookup failure, not a fallback to the generic
    /// template.
    fn build_prompt(
        &self,
        submission: &Submission,
        kind: DocumentKind,
    ) -> Result<String, ServiceError> {
        let domain = match submission.domain.as_deref() {
            None => None,
            Some(tag) => Some(Domain::from_str(tag).ok_or(ServiceError::InvalidTemplate)?),
        };
        let template = prompts::resolve(kind, domain).ok_or(ServiceError::InvalidTemplate)?;
        Ok(prompts::render(template, &submission.idea))
    }
}
