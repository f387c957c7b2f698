use super::*;
use crate::constants::MAX_OPEN_DIRS;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, len: usize) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; len]).unwrap();
}

fn paths(list: &FileList) -> Vec<PathBuf> {
    list.iter().map(|e| e.path().to_path_buf()).collect()
}

#[test]
fn test_directory_is_sorted_and_totalled() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("b");
    write_file(&root, "2.txt", 10);
    write_file(&root, "1.txt", 5);

    let list = FileList::from_target(&root).unwrap();

    assert_eq!(list.layout(), Layout::Directory);
    assert_eq!(paths(&list), vec![PathBuf::from("1.txt"), PathBuf::from("2.txt")]);
    assert_eq!(list.total_length(), 15);
    assert_eq!(list.base(), root.as_path());
}

#[test]
fn test_order_is_bytewise_not_componentwise() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(root, "a/b", 1);
    write_file(root, "a-b", 2);
    write_file(root, "a0", 3);

    let list = FileList::from_directory(root, MAX_OPEN_DIRS).unwrap();

    // '-' (0x2d) < '/' (0x2f) < '0' (0x30)
    assert_eq!(
        paths(&list),
        vec![PathBuf::from("a-b"), PathBuf::from("a/b"), PathBuf::from("a0")]
    );
    assert_eq!(list.total_length(), 6);
}

#[test]
fn test_nested_directories_are_relative_to_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("content");
    write_file(&root, "x/y/z.bin", 7);
    write_file(&root, "top.bin", 1);

    let list = FileList::from_target(&root).unwrap();

    assert_eq!(
        paths(&list),
        vec![PathBuf::from("top.bin"), PathBuf::from("x/y/z.bin")]
    );
    let segments: Vec<_> = list.entries()[1]
        .segments()
        .map(|s| s.to_str().unwrap())
        .collect();
    assert_eq!(segments, vec!["x", "y", "z.bin"]);
    assert_eq!(list.disk_path(&list.entries()[1]), root.join("x/y/z.bin"));
}

#[test]
fn test_single_open_handle_walks_deep_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let mut deep = String::new();
    for level in 0..12 {
        deep.push_str(&format!("d{level}/"));
        write_file(root, &format!("{deep}f{level}"), level + 1);
    }
    write_file(root, "d0/sibling", 100);

    let list = FileList::from_directory(root, 1).unwrap();

    assert_eq!(list.len(), 13);
    assert_eq!(list.total_length(), (1..=12).sum::<usize>() as u64 + 100);
}

#[test]
fn test_empty_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("empty")).unwrap();

    let list = FileList::from_target(temp.path()).unwrap();

    assert!(list.is_empty());
    assert_eq!(list.total_length(), 0);
    assert_eq!(list.piece_count(1 << 15), 0);
}

#[test]
fn test_single_file_target() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", 300000);

    let list = FileList::from_target(&temp.path().join("a.txt")).unwrap();

    assert!(list.is_single_file());
    assert_eq!(paths(&list), vec![PathBuf::from("a.txt")]);
    assert_eq!(list.total_length(), 300000);
    assert_eq!(list.piece_count(1 << 18), 2);
    assert_eq!(list.disk_path(&list.entries()[0]), temp.path().join("a.txt"));
}

#[test]
fn test_single_file_without_parent_uses_current_dir() {
    let list = FileList::single_file(Path::new("a.txt"), 3).unwrap();
    assert_eq!(list.base(), Path::new("."));
}

#[test]
fn test_insert_keeps_order_and_rejects_duplicates() {
    let mut list = FileList::new("/data", Layout::Directory);
    assert!(list.insert(PathBuf::from("c"), 3));
    assert!(list.insert(PathBuf::from("a"), 1));
    assert!(list.insert(PathBuf::from("b"), 2));
    assert!(!list.insert(PathBuf::from("b"), 50));

    assert_eq!(
        paths(&list),
        vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]
    );
    assert_eq!(list.total_length(), 6);
}

#[test]
fn test_missing_target_is_fatal() {
    let temp = TempDir::new().unwrap();
    let err = FileList::from_target(&temp.path().join("nope")).unwrap_err();
    assert!(matches!(err, FilesError::Stat { .. }));
}

#[test]
fn test_walk_requires_directory() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "f", 1);

    let err = walk(&temp.path().join("f"), MAX_OPEN_DIRS, |_, _| {}).unwrap_err();
    assert!(matches!(err, FilesError::NotADirectory(_)));
}

#[test]
fn test_walk_visits_each_file_once() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "one", 1);
    write_file(temp.path(), "sub/two", 2);
    write_file(temp.path(), "sub/deeper/three", 3);

    let mut seen = Vec::new();
    walk(temp.path(), 2, |path, metadata| {
        seen.push((path.to_path_buf(), metadata.len()));
    })
    .unwrap();
    seen.sort();

    assert_eq!(
        seen,
        vec![
            (PathBuf::from("one"), 1),
            (PathBuf::from("sub/deeper/three"), 3),
            (PathBuf::from("sub/two"), 2),
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_skipped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    write_file(&root, "real", 4);
    write_file(temp.path(), "outside", 1000);
    std::os::unix::fs::symlink(temp.path().join("outside"), root.join("link")).unwrap();
    std::os::unix::fs::symlink(temp.path(), root.join("loop")).unwrap();

    let list = FileList::from_target(&root).unwrap();

    assert_eq!(paths(&list), vec![PathBuf::from("real")]);
    assert_eq!(list.total_length(), 4);
}

#[cfg(unix)]
#[test]
fn test_unreadable_entries_are_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    write_file(&root, "ok.txt", 3);
    write_file(&root, "locked.txt", 50);
    write_file(&root, "sealed/inner.txt", 70);
    write_file(&root, "open/visible.txt", 5);

    let locked = root.join("locked.txt");
    let sealed = root.join("sealed");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    fs::set_permissions(&sealed, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read regardless of mode.
    let privileged = fs::File::open(&locked).is_ok();

    let list = FileList::from_target(&root);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    fs::set_permissions(&sealed, fs::Permissions::from_mode(0o755)).unwrap();

    if privileged {
        return;
    }

    let list = list.unwrap();
    assert_eq!(
        paths(&list),
        vec![PathBuf::from("ok.txt"), PathBuf::from("open/visible.txt")]
    );
    assert_eq!(list.total_length(), 8);
}
