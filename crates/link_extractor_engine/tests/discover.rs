use std::fs;

use link_extractor_engine::{find_json_files, has_json_suffix, DiscoverError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn finds_json_at_any_depth_and_ignores_other_suffixes() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("a.json"), "{}").unwrap();
    fs::write(root.join("b.txt"), "{}").unwrap();
    fs::create_dir_all(root.join("sub/deeper")).unwrap();
    fs::write(root.join("sub/c.json"), "{}").unwrap();
    fs::write(root.join("sub/deeper/d.json"), "{}").unwrap();
    fs::write(root.join("sub/deeper/e.JSON"), "{}").unwrap();
    fs::write(root.join("sub/result.json.bak"), "{}").unwrap();

    let found = find_json_files(root).unwrap();

    assert_eq!(
        found,
        vec![
            root.join("a.json"),
            root.join("sub/c.json"),
            root.join("sub/deeper/d.json"),
        ]
    );
}

#[test]
fn files_of_a_folder_come_before_its_subfolders() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("a_dir")).unwrap();
    fs::write(root.join("a_dir/inner.json"), "{}").unwrap();
    fs::write(root.join("z.json"), "{}").unwrap();

    let found = find_json_files(root).unwrap();

    assert_eq!(found, vec![root.join("z.json"), root.join("a_dir/inner.json")]);
}

#[test]
fn directories_named_like_json_are_not_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("export.json")).unwrap();
    fs::write(root.join("export.json/result.json"), "{}").unwrap();

    let found = find_json_files(root).unwrap();

    assert_eq!(found, vec![root.join("export.json/result.json")]);
}

#[test]
fn empty_folder_yields_no_files() {
    let temp = TempDir::new().unwrap();
    assert!(find_json_files(temp.path()).unwrap().is_empty());
}

#[test]
fn missing_folder_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let err = find_json_files(&missing).unwrap_err();
    let DiscoverError::ReadDir { path, .. } = err;
    assert_eq!(path, missing);
}

#[test]
fn suffix_match_is_case_sensitive() {
    assert!(has_json_suffix("result.json".as_ref()));
    assert!(has_json_suffix("dir/.json".as_ref()));
    assert!(!has_json_suffix("result.Json".as_ref()));
    assert!(!has_json_suffix("result.jsonl".as_ref()));
}

#[cfg(unix)]
#[test]
fn symlinked_folders_are_not_followed() {
    use std::os::unix::fs::symlink;

    let temp = TempDir::new().unwrap();
    let outside = temp.path().join("outside");
    let root = temp.path().join("root");
    fs::create_dir(&outside).unwrap();
    fs::create_dir(&root).unwrap();
    fs::write(outside.join("x.json"), "{}").unwrap();
    fs::write(root.join("a.json"), "{}").unwrap();
    symlink(&outside, root.join("linked")).unwrap();
    symlink(outside.join("x.json"), root.join("link.json")).unwrap();

    let found = find_json_files(&root).unwrap();

    assert_eq!(found, vec![root.join("a.json"), root.join("link.json")]);
}

#[cfg(unix)]
#[test]
fn unreadable_subfolder_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let locked = root.join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("hidden.json"), "{}").unwrap();
    fs::write(root.join("a.json"), "{}").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not bind root.
    let readable_anyway = fs::read_dir(&locked).is_ok();
    let found = find_json_files(root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if readable_anyway {
        return;
    }

    assert_eq!(found.unwrap(), vec![root.join("a.json")]);
}
