//! On-disk round-trip tests for the catalog store.

use natyakosh::{Catalog, CatalogError, FilterCriteria, Gatekeeper, Language, Play, PlayEdit};
use std::fs;
use tempfile::tempdir;

const PASS: &str = "naatak_adman";

fn sample_play(title: &str) -> Play {
    Play::builder()
        .title_marathi("नाटक")
        .title_english(title)
        .author_marathi("लेखक")
        .author_english("Author")
        .acts(3.0)
        .genre("Drama")
        .first_performance_year(1987)
        .build()
}

#[test]
fn test_open_seeds_and_reload_preserves_seed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plays.csv");

    let catalog = Catalog::open(&path).expect("open");
    assert_eq!(catalog.len(), 1);
    assert!(path.exists(), "seed must be persisted immediately");

    let reopened = Catalog::open(&path).expect("reopen");
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.plays()[0], catalog.plays()[0]);
}

#[test]
fn test_append_survives_reload() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plays.csv");

    let mut catalog = Catalog::open(&path).expect("open");
    let play = sample_play("Play 1");
    let id = play.id;
    catalog.append(play, None).expect("append");

    let reopened = Catalog::open(&path).expect("reopen");
    assert_eq!(reopened.len(), 2);
    let found = reopened.find(id).expect("resolve by id after reload");
    assert_eq!(found.title_english, "Play 1");
    assert_eq!(found.acts, Some(3.0));
    assert_eq!(found.genres.as_slice(), ["Drama"]);
}

#[test]
fn test_append_missing_mandatory_field_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plays.csv");
    let mut catalog = Catalog::open(&path).expect("open");
    let before_len = catalog.len();
    let before_bytes = fs::read(&path).expect("read file");

    let incomplete = Play::builder()
        .title_marathi("नाटक")
        .title_english("Play 1")
        .author_english("Author")
        .build();
    let err = catalog.append(incomplete, None).unwrap_err();

    assert!(matches!(err, CatalogError::Validation(_)));
    assert_eq!(catalog.len(), before_len);
    assert_eq!(fs::read(&path).expect("re-read file"), before_bytes);
}

#[test]
fn test_resolve_then_update_roundtrip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plays.csv");

    let mut catalog = Catalog::open(&path)
        .expect("open")
        .with_gate(Gatekeeper::new(PASS));
    let play = sample_play("Play 1");
    let id = play.id;
    catalog.append(play, Some(PASS)).expect("append");

    let edit = PlayEdit::new().acts(2.0).first_performance_year(1970);
    catalog
        .update(id, &edit, Language::English, Some(PASS))
        .expect("update");

    // Reload from disk: exactly one row with the title, carrying the edit.
    let reopened = Catalog::open(&path).expect("reopen");
    let matches: Vec<_> = reopened
        .plays()
        .iter()
        .filter(|p| p.title_english == "Play 1")
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].acts, Some(2.0));
    assert_eq!(matches[0].first_performance_year, Some(1970));
}

#[test]
fn test_update_wrong_passphrase_leaves_file_byte_identical() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plays.csv");

    let mut catalog = Catalog::open(&path)
        .expect("open")
        .with_gate(Gatekeeper::new(PASS));
    let id = catalog.plays()[0].id;
    let before = fs::read(&path).expect("read file");

    let edit = PlayEdit::new().acts(4.0).title("Tampered");
    let err = catalog
        .update(id, &edit, Language::English, Some("wrong"))
        .unwrap_err();

    assert!(matches!(err, CatalogError::Unauthorized));
    assert_eq!(fs::read(&path).expect("re-read file"), before);
    assert_ne!(catalog.plays()[0].acts, Some(4.0));
}

#[test]
fn test_update_routes_title_to_language_column() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plays.csv");

    let mut catalog = Catalog::open(&path).expect("open");
    let play = sample_play("Play 1");
    let id = play.id;
    let marathi_title = play.title_marathi.clone();
    catalog.append(play, None).expect("append");

    let edit = PlayEdit::new().title("Play One");
    catalog
        .update(id, &edit, Language::English, None)
        .expect("update");

    let reopened = Catalog::open(&path).expect("reopen");
    let found = reopened.find(id).expect("find");
    assert_eq!(found.title_english, "Play One");
    assert_eq!(found.title_marathi, marathi_title, "other language untouched");
}

#[test]
fn test_duplicate_titles_resolve_to_first_by_table_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plays.csv");
    let mut catalog = Catalog::open(&path).expect("open");

    let first = sample_play("Play 1");
    let first_id = first.id;
    catalog.append(first, None).expect("append first");
    catalog.append(sample_play("Play 1"), None).expect("append second");

    // Legacy title lookup is first-match, not an error.
    let found = catalog.find_by_title("Play 1").expect("found");
    assert_eq!(found.id, first_id);

    // Each duplicate keeps a distinct identity for mutation.
    let reopened = Catalog::open(&path).expect("reopen");
    let ids: Vec<_> = reopened
        .plays()
        .iter()
        .filter(|p| p.title_english == "Play 1")
        .map(|p| p.id)
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn test_legacy_file_gains_ids_on_first_persist() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plays.csv");
    fs::write(
        &path,
        "Title_Marathi,Title_English,Author_Marathi,Author_English,Number of Acts,Genre\n\
         नाटक,Play 1,लेखक,Author,3,Drama\n",
    )
    .expect("write legacy file");

    let mut catalog = Catalog::open(&path).expect("open legacy file");
    assert_eq!(catalog.len(), 1);
    let id = catalog.plays()[0].id;

    catalog.persist().expect("persist upgraded schema");
    let reopened = Catalog::open(&path).expect("reopen");
    assert_eq!(reopened.plays()[0].id, id, "backfilled id is stable once written");
}

#[test]
fn test_filtered_view_over_loaded_table() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plays.csv");
    let mut catalog = Catalog::open(&path).expect("open");

    catalog.append(sample_play("Play 1"), None).expect("append");
    let mut comedy = sample_play("Play 2");
    comedy.genres = ["Comedy".to_string()].into_iter().collect();
    comedy.acts = Some(2.0);
    catalog.append(comedy, None).expect("append");

    let reopened = Catalog::open(&path).expect("reopen");
    let rows = FilterCriteria::new()
        .genre("Comedy")
        .acts_exactly(2.0)
        .apply(reopened.plays());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title_english, "Play 2");
}
