use ideaforge::db::Database;
use ideaforge::models::*;
use uuid::Uuid;

fn setup() -> Database {
    let db = Database::open_memory().expect("Failed to create database");
    db.migrate().expect("Failed to migrate");
    db
}

mod submissions {
    use super::*;

    #[test]
    fn insert_assigns_id_and_timestamp() {
        let db = setup();

        let submission = db
            .insert_submission(SubmitIdeaInput {
                idea: "A meal-planning app".to_string(),
                domain: Some("Software Technology".to_string()),
            })
            .unwrap();

        assert_ne!(submission.id, Uuid::nil());
        assert_eq!(submission.idea, "A meal-planning app");
    }

    #[test]
    fn get_round_trips_idea_and_domain() {
        let db = setup();

        let created = db
            .insert_submission(SubmitIdeaInput {
                idea: "An idea".to_string(),
                domain: Some("Renewable Energy".to_string()),
            })
            .unwrap();

        let fetched = db.get_submission(created.id).unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.idea, "An idea");
        assert_eq!(fetched.domain.as_deref(), Some("Renewable Energy"));
    }

    #[test]
    fn get_round_trips_missing_domain() {
        let db = setup();

        let created = db
            .insert_submission(SubmitIdeaInput {
                idea: "An idea".to_string(),
                domain: None,
            })
            .unwrap();

        let fetched = db.get_submission(created.id).unwrap().unwrap();
        assert!(fetched.domain.is_none());
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let db = setup();

        assert!(db.get_submission(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn records_survive_reopening_the_database_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("data").join("ideaforge.db");

        let created = {
            let db = Database::open(path.clone()).unwrap();
            db.migrate().unwrap();
            db.insert_submission(SubmitIdeaInput {
                idea: "An idea".to_string(),
                domain: None,
            })
            .unwrap()
        };

        let db = Database::open(path).unwrap();
        db.migrate().unwrap();
        let fetched = db.get_submission(created.id).unwrap().unwrap();
        assert_eq!(fetched.idea, "An idea");
    }
}

mod documents {
    use super::*;

    fn submission(db: &Database) -> Submission {
        db.insert_submission(SubmitIdeaInput {
            idea: "An idea".to_string(),
            domain: Some("Software Technology".to_string()),
        })
        .unwrap()
    }

    #[test]
    fn insert_and_find_by_submission_and_kind() {
        let db = setup();
        let sub = submission(&db);

        let created = db
            .insert_document(
                sub.id,
                DocumentKind::Requirements,
                sub.domain.clone(),
                "Document body",
            )
            .unwrap();

        let found = db
            .find_document(sub.id, DocumentKind::Requirements)
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.content, "Document body");
        assert_eq!(found.domain.as_deref(), Some("Software Technology"));
    }

    #[test]
    fn find_filters_by_kind() {
        let db = setup();
        let sub = submission(&db);

        db.insert_document(sub.id, DocumentKind::Requirements, None, "Requirements")
            .unwrap();

        assert!(db
            .find_document(sub.id, DocumentKind::Technical)
            .unwrap()
            .is_none());
    }

    #[test]
    fn find_filters_by_submission() {
        let db = setup();
        let first = submission(&db);
        let second = submission(&db);

        db.insert_document(first.id, DocumentKind::Requirements, None, "First's doc")
            .unwrap();

        assert!(db
            .find_document(second.id, DocumentKind::Requirements)
            .unwrap()
            .is_none());
    }

    #[test]
    fn find_returns_latest_when_pair_has_multiple_records() {
        let db = setup();
        let sub = submission(&db);

        db.insert_document(sub.id, DocumentKind::Technical, None, "Older")
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        db.insert_document(sub.id, DocumentKind::Technical, None, "Newer")
            .unwrap();

        let found = db
            .find_document(sub.id, DocumentKind::Technical)
            .unwrap()
            .unwrap();
        assert_eq!(found.content, "Newer");
    }

    #[test]
    fn update_overwrites_content_in_place() {
        let db = setup();
        let sub = submission(&db);

        let doc = db
            .insert_document(sub.id, DocumentKind::Lifecycle, None, "Before")
            .unwrap();

        assert!(db.update_document_content(doc.id, "After").unwrap());

        let found = db
            .find_document(sub.id, DocumentKind::Lifecycle)
            .unwrap()
            .unwrap();
        assert_eq!(found.id, doc.id);
        assert_eq!(found.content, "After");
        assert_eq!(db.count_documents(sub.id).unwrap(), 1);
    }

    #[test]
    fn update_returns_false_for_unknown_id() {
        let db = setup();

        assert!(!db.update_document_content(Uuid::new_v4(), "Text").unwrap());
    }

    #[test]
    fn count_tracks_inserts_per_submission() {
        let db = setup();
        let sub = submission(&db);

        assert_eq!(db.count_documents(sub.id).unwrap(), 0);
        db.insert_document(sub.id, DocumentKind::Requirements, None, "One")
            .unwrap();
        db.insert_document(sub.id, DocumentKind::Requirements, None, "Two")
            .unwrap();
        assert_eq!(db.count_documents(sub.id).unwrap(), 2);
    }
}
