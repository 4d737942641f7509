//! Repository behaviour against a fresh in-memory database per test.

use chrono::Utc;
use frontdesk_core::{Gender, NewVisitor, RegistrationId, VisitorId};
use frontdesk_store::{open_in_memory, SqliteVisitorRepository, StoreError, VisitorRepository};
use rstest::rstest;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn visitor(name: &str, email: &str) -> NewVisitor {
    NewVisitor {
        name: name.to_string(),
        gender: Gender::Male,
        email: email.to_string(),
        contact: "12345".to_string(),
        host_employee_details: "Reception".to_string(),
        company_name: "Acme".to_string(),
        country: "NL".to_string(),
        registration_id: RegistrationId::generate(),
        image_name: None,
        registered_at: Utc::now(),
    }
}

fn seed(repo: &SqliteVisitorRepository<'_>) {
    for (name, email) in [
        ("John Smith", "john@acme.com"),
        ("Jane Doe", "jane.smith@corp.io"),
        ("Bob Stone", "bob@stone.dev"),
    ] {
        repo.insert(&visitor(name, email)).expect("seed insert");
    }
}

fn names(visitors: &[frontdesk_core::Visitor]) -> Vec<&str> {
    visitors.iter().map(|v| v.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// 1. Insert and read back
// ---------------------------------------------------------------------------

#[test]
fn insert_assigns_increasing_ids() {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    let a = repo.insert(&visitor("A", "a@x")).expect("insert a");
    let b = repo.insert(&visitor("B", "b@x")).expect("insert b");
    assert!(b > a);
}

#[test]
fn inserted_visitor_reads_back_intact() {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    let mut new = visitor("Ada", "ada@example.com");
    new.gender = Gender::Female;
    new.image_name = Some("ada@example.com.png".to_string());
    let id = repo.insert(&new).expect("insert");

    let stored = repo.find_by_id(id).expect("find").expect("present");
    assert_eq!(stored.id, id);
    assert_eq!(stored.gender, Gender::Female);
    assert_eq!(stored.registration_id, new.registration_id);
    assert_eq!(stored.image_name.as_deref(), Some("ada@example.com.png"));
    assert_eq!(stored.registered_at, new.registered_at);
}

#[test]
fn missing_image_reads_back_as_none() {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    let id = repo.insert(&visitor("NoPic", "nopic@x")).expect("insert");
    let stored = repo.find_by_id(id).expect("find").expect("present");
    assert!(stored.image_name.is_none());
}

#[test]
fn find_by_unknown_id_is_none() {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    assert!(repo.find_by_id(VisitorId(42)).expect("find").is_none());
}

// ---------------------------------------------------------------------------
// 2. Email uniqueness
// ---------------------------------------------------------------------------

#[test]
fn exists_by_email_is_exact() {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    repo.insert(&visitor("A", "a@b.com")).expect("insert");

    assert!(repo.exists_by_email("a@b.com").expect("exists"));
    assert!(!repo.exists_by_email("a@b.co").expect("exists"));
    assert!(!repo.exists_by_email("A@B.COM").expect("exists"));
}

#[test]
fn storage_rejects_duplicate_email_without_precheck() {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    repo.insert(&visitor("First", "dup@x.com")).expect("first insert");

    let err = repo.insert(&visitor("Second", "dup@x.com")).unwrap_err();
    assert!(
        matches!(err, StoreError::DuplicateEmail { ref email } if email == "dup@x.com"),
        "got: {err}"
    );
    assert_eq!(repo.find_all().expect("all").len(), 1);
}

// ---------------------------------------------------------------------------
// 3. Search
// ---------------------------------------------------------------------------

#[test]
fn find_all_returns_every_row_in_insert_order() {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    seed(&repo);
    assert_eq!(
        names(&repo.find_all().expect("all")),
        vec!["John Smith", "Jane Doe", "Bob Stone"]
    );
}

#[rstest]
#[case("smith", vec!["John Smith", "Jane Doe"])]
#[case("SMITH", vec!["John Smith", "Jane Doe"])]
#[case("stone.dev", vec!["Bob Stone"])]
#[case("@", vec!["John Smith", "Jane Doe", "Bob Stone"])]
#[case("nobody", vec![])]
#[case("", vec!["John Smith", "Jane Doe", "Bob Stone"])]
fn substring_search(#[case] term: &str, #[case] expected: Vec<&str>) {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    seed(&repo);
    let found = repo.find_by_name_or_email_substring(term).expect("search");
    assert_eq!(names(&found), expected);
}

#[rstest]
#[case("%")]
#[case("_")]
#[case("' OR '1'='1")]
fn search_treats_sql_metacharacters_literally(#[case] term: &str) {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    seed(&repo);
    let found = repo.find_by_name_or_email_substring(term).expect("search");
    assert!(found.is_empty(), "term {term:?} matched {:?}", names(&found));
}

#[test]
fn search_finds_literal_percent_when_present() {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    seed(&repo);
    repo.insert(&visitor("100% Real", "real@x")).expect("insert");
    let found = repo.find_by_name_or_email_substring("0%").expect("search");
    assert_eq!(names(&found), vec!["100% Real"]);
}

// ---------------------------------------------------------------------------
// 4. Failures
// ---------------------------------------------------------------------------

#[test]
fn corrupt_gender_is_reported_not_panicked() {
    let conn = open_in_memory().expect("open");
    let repo = SqliteVisitorRepository::new(&conn);
    let id = repo.insert(&visitor("X", "x@y")).expect("insert");
    conn.execute("UPDATE visitors SET gender = 'Unknown' WHERE id = ?1", [id.0])
        .expect("corrupt row");

    let err = repo.find_all().unwrap_err();
    assert!(matches!(err, StoreError::CorruptRow { id: row, .. } if row == id.0), "got: {err}");
}

#[test]
fn missing_table_is_storage_unavailable() {
    let conn = rusqlite::Connection::open_in_memory().expect("open unmigrated");
    let repo = SqliteVisitorRepository::new(&conn);
    let err = repo.find_all().unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)), "got: {err}");
}
