mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::*;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        if let Ok(path) = std::env::var("IDEAFORGE_DB") {
            return Self::open(PathBuf::from(path));
        }
        let dirs = directories::ProjectDirs::from("", "", "ideaforge")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("ideaforge.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    // ============================================================
    // Submission operations
    // ============================================================

    pub fn insert_submission(&self, input: SubmitIdeaInput) -> Result<Submission> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO submissions (id, idea, domain, created_at) VALUES (?, ?, ?, ?)",
            (
                id.to_string(),
                &input.idea,
                &input.domain,
                now.to_rfc3339(),
            ),
        )?;

        Ok(Submission {
            id,
            idea: input.idea,
            domain: input.domain,
            created_at: now,
        })
    }

    pub fn get_submission(&self, id: Uuid) -> Result<Option<Submission>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt =
            conn.prepare("SELECT id, idea, domain, created_at FROM submissions WHERE id = ?")?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Submission {
                id: parse_uuid(row.get::<_, String>(0)?),
                idea: row.get(1)?,
                domain: row.get(2)?,
                created_at: parse_datetime(row.get::<_, String>(3)?),
            }))
        } else {
            Ok(None)
        }
    }

    // ============================================================
    // Document operations
    // ============================================================

    pub fn insert_document(
        &self,
        submission_id: Uuid,
        kind: DocumentKind,
        domain: Option<String>,
        content: &str,
    ) -> Result<GeneratedDocument> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO generated_documents (id, submission_id, kind, domain, content, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            (
                id.to_string(),
                submission_id.to_string(),
                kind.as_str(),
                &domain,
                content,
                now.to_rfc3339(),
            ),
        )?;

        Ok(GeneratedDocument {
            id,
            submission_id,
            kind,
            domain,
            content: content.to_string(),
            created_at: now,
        })
    }

    /// Latest document for a (submission, kind) pair.
    ///
    /// Generate inserts a new record per call, so more than one may exist;
    /// revision always targets the most recent.
    pub fn find_document(
        &self,
        submission_id: Uuid,
        kind: DocumentKind,
    ) -> Result<Option<GeneratedDocument>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, submission_id, kind, domain, content, created_at
             FROM generated_documents WHERE submission_id = ? AND kind = ?
             ORDER BY created_at DESC LIMIT 1",
        )?;

        let mut rows = stmt.query((submission_id.to_string(), kind.as_str()))?;
        if let Some(row) = rows.next()? {
            Ok(Some(GeneratedDocument {
                id: parse_uuid(row.get::<_, String>(0)?),
                submission_id: parse_uuid(row.get::<_, String>(1)?),
                kind: DocumentKind::from_str(&row.get::<_, String>(2)?)
                    .unwrap_or(DocumentKind::Requirements),
                domain: row.get(3)?,
                content: row.get(4)?,
                created_at: parse_datetime(row.get::<_, String>(5)?),
            }))
        } else {
            Ok(None)
        }
    }

    /// Overwrite a document's content in place. The prior text is destroyed.
    pub fn update_document_content(&self, id: Uuid, content: &str) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute(
            "UPDATE generated_documents SET content = ? WHERE id = ?",
            (content, id.to_string()),
        )?;
        Ok(rows > 0)
    }

    pub fn count_documents(&self, submission_id: Uuid) -> Result<i64> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM generated_documents WHERE submission_id = ?",
            [submission_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn parse_uuid(s: String) -> Uuid {
    Uuid::parse_str(&s).unwrap_or_else(|_| Uuid::nil())
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
