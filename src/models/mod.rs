//! Domain models for ideaforge.
//!
//! Two persisted record types:
//!
//! - [`Submission`]: a user's raw product idea with an optional industry
//!   domain tag. Written once at intake, never mutated.
//! - [`GeneratedDocument`]: one planning artifact produced from a submission
//!   by the generation provider. Its `content` is replaced wholesale when the
//!   document is revised.

mod document;
mod submission;

pub use document::*;
pub use submission::*;
