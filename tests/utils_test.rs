use chartspot::Error;
use chartspot::utils::*;
use serde_json::json;

#[test]
fn test_truncate_name_long() {
    let name = "Twenty Characters!!!";
    assert_eq!(name.chars().count(), 20);

    let short = truncate_name(name);
    assert_eq!(short, "Twenty Characte...");
    assert_eq!(short.chars().count(), 18);
}

#[test]
fn test_truncate_name_short_and_boundary() {
    // 10 characters stay as they are
    assert_eq!(truncate_name("Ten chars!"), "Ten chars!");

    // Exactly 15 characters are not cut
    assert_eq!(truncate_name("Fifteen chars!!"), "Fifteen chars!!");

    // 16 characters are
    assert_eq!(truncate_name("Sixteen chars!!!"), "Sixteen chars!!...");

    assert_eq!(truncate_name(""), "");
}

#[test]
fn test_truncate_name_counts_characters_not_bytes() {
    let name = "Ça plane pour moi, vraiment";
    let short = truncate_name(name);
    assert_eq!(short, "Ça plane pour m...");
}

#[test]
fn test_coerce_int_accepts_numbers_and_numeric_strings() {
    let record = json!({
        "int": 12,
        "string": "7",
        "padded": " 42 ",
        "float": 3.0,
        "negative": "-2",
    });

    assert_eq!(coerce_int(&record, "int").unwrap(), 12);
    assert_eq!(coerce_int(&record, "string").unwrap(), 7);
    assert_eq!(coerce_int(&record, "padded").unwrap(), 42);
    assert_eq!(coerce_int(&record, "float").unwrap(), 3);
    assert_eq!(coerce_int(&record, "negative").unwrap(), -2);
}

#[test]
fn test_coerce_int_rejects_non_numeric() {
    let record = json!({ "rank": "first", "flag": true, "none": null, "decimal": "1.5" });

    for field in ["rank", "flag", "none", "decimal"] {
        match coerce_int(&record, field) {
            Err(Error::Coercion { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected coercion error for {}, got {:?}", field, other),
        }
    }
}

#[test]
fn test_coerce_int_missing_field() {
    let record = json!({ "song_name": "Stronger" });

    assert!(matches!(
        coerce_int(&record, "highest_rank"),
        Err(Error::MissingField { field }) if field == "highest_rank"
    ));
}

#[test]
fn test_coerce_text() {
    let record = json!({ "song_name": "Stronger", "year": 2007, "none": null });

    assert_eq!(coerce_text(&record, "song_name").unwrap(), "Stronger");
    assert_eq!(coerce_text(&record, "year").unwrap(), "2007");
    assert!(coerce_text(&record, "none").is_err());
    assert!(coerce_text(&record, "missing").is_err());
}

#[tokio::test]
async fn test_write_output_creates_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("chartspot-test-{}", std::process::id()));
    let path = dir.join("nested/plot.json");

    write_output(&path, "{}").await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_file_url_percent_encodes() {
    let dir = std::env::temp_dir().join("chartspot plots #1");
    let url = file_url(&dir.join("kanye.html")).unwrap();

    assert!(url.starts_with("file://"));
    assert!(url.ends_with("/chartspot%20plots%20%231/kanye.html"));
    assert!(!url.contains(' '));
    assert!(!url.contains('#'));
}

#[test]
fn test_file_url_resolves_relative_paths() {
    let url = file_url(std::path::Path::new("plot.html")).unwrap();

    assert!(url.starts_with("file:///"));
    assert!(url.ends_with("/plot.html"));
}
