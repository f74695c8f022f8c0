use std::fs;
use std::path::Path;

use link_extractor_engine::{
    format_url_list, read_url_list, with_default_extension, write_url_list, PersistError, UrlSet,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn saving_replaces_an_existing_list() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("urls.txt");
    fs::write(&path, "https://old.example\n").unwrap();

    let written = write_url_list(&path, ["https://new.example"]).unwrap();

    assert_eq!(written, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "https://new.example\n");
    let leftovers: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn write_error_names_the_chosen_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing_dir/urls.txt");

    let err = write_url_list(&path, ["https://a.com"]).unwrap_err();

    assert!(matches!(err, PersistError::Write { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("missing_dir"));
    assert!(!temp.path().join("missing_dir").exists());
}

#[test]
fn url_with_line_break_is_written_verbatim() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("urls.txt");

    write_url_list(&path, ["https://a.com/x\ny"]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "https://a.com/x\ny\n");
    assert_eq!(read_url_list(&path).unwrap().len(), 2);
}

#[test]
fn reading_a_missing_list_names_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gone.txt");

    let err = read_url_list(&path).unwrap_err();

    assert!(matches!(err, PersistError::Read { .. }));
    assert!(err.to_string().contains("gone.txt"));
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let result = write_url_list(&file_path.join("urls.txt"), ["https://a.com"]);
    assert!(result.is_err());
    assert!(!file_path.with_file_name("urls.txt").exists());
}

#[test]
fn url_list_is_one_per_line_with_trailing_newline() {
    assert_eq!(
        format_url_list(["https://a.com", "https://b.com"]),
        "https://a.com\nhttps://b.com\n"
    );
    assert_eq!(format_url_list(Vec::<String>::new()), "");
}

#[test]
fn saved_list_reads_back_as_same_set() {
    let temp = TempDir::new().unwrap();
    let urls: UrlSet = ["https://a.com", "https://b.com/path?q=1", "tg://resolve?domain=x"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let path = write_url_list(&temp.path().join("extracted_urls.txt"), &urls).unwrap();

    assert_eq!(read_url_list(&path).unwrap(), urls);
}

#[test]
fn crlf_lists_read_back_without_carriage_returns() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("crlf.txt");
    fs::write(&path, "https://a.com\r\nhttps://b.com\r\n").unwrap();

    let urls = read_url_list(&path).unwrap();
    assert!(urls.contains("https://a.com"));
    assert!(urls.contains("https://b.com"));
    assert_eq!(urls.len(), 2);
}

#[test]
fn default_extension_only_applies_when_missing() {
    assert_eq!(
        with_default_extension(Path::new("out/links"), "txt"),
        Path::new("out/links.txt")
    );
    assert_eq!(
        with_default_extension(Path::new("out/links.csv"), "txt"),
        Path::new("out/links.csv")
    );
}
