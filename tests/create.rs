use std::fs;
use std::path::Path;

use mktorrent::bencode::{decode, Value};
use mktorrent::{create_torrent, CreateError, FilesError, MetainfoConfig};
use sha1::{Digest, Sha1};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, data: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, data).unwrap();
}

fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(13).wrapping_add(seed)).collect()
}

fn strings(value: &Value) -> Vec<&str> {
    value
        .as_list()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}

#[test]
fn single_file_torrent() {
    let temp = TempDir::new().unwrap();
    let data = pattern(300000, 1);
    write(temp.path(), "a.txt", &data);
    let output = temp.path().join("a.torrent");

    let config = MetainfoConfig::builder("a.txt")
        .announce("http://t1")
        .unwrap()
        .output(&output)
        .build()
        .unwrap();

    let summary = create_torrent(&config, &temp.path().join("a.txt")).unwrap();
    assert_eq!(summary.piece_count, 2);
    assert_eq!(summary.total_length, 300000);

    let metainfo = decode(&fs::read(&output).unwrap()).unwrap();
    let info = metainfo.get(b"info").unwrap();

    assert_eq!(info.get(b"length").and_then(Value::as_integer), Some(300000));
    assert!(info.get(b"files").is_none());
    assert!(metainfo.get(b"creation date").is_some());

    let mut expected = Vec::new();
    expected.extend_from_slice(&Sha1::digest(&data[..262144]));
    expected.extend_from_slice(&Sha1::digest(&data[262144..]));
    assert_eq!(
        info.get(b"pieces").and_then(Value::as_bytes).unwrap().as_ref(),
        expected.as_slice()
    );
}

#[test]
fn directory_torrent_round_trips() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("b");
    write(&root, "2.txt", &pattern(10, 2));
    write(&root, "1.txt", &pattern(5, 3));
    write(&root, "nested/deep/3.bin", &pattern(40000, 4));
    let output = temp.path().join("b.torrent");

    let config = MetainfoConfig::builder("b")
        .announce("http://t1")
        .unwrap()
        .announce("http://t2a,http://t2b")
        .unwrap()
        .piece_length_exp(15)
        .output(&output)
        .build()
        .unwrap();

    let summary = create_torrent(&config, &root).unwrap();
    assert_eq!(summary.file_count, 3);
    assert_eq!(summary.total_length, 40015);
    assert_eq!(summary.piece_count, 2);

    let metainfo = decode(&fs::read(&output).unwrap()).unwrap();
    assert_eq!(metainfo.get(b"announce").and_then(Value::as_str), Some("http://t1"));
    let tiers = metainfo.get(b"announce-list").and_then(Value::as_list).unwrap();
    assert_eq!(strings(&tiers[0]), ["http://t1"]);
    assert_eq!(strings(&tiers[1]), ["http://t2a", "http://t2b"]);

    let info = metainfo.get(b"info").unwrap();
    assert_eq!(info.get(b"name").and_then(Value::as_str), Some("b"));
    assert_eq!(info.get(b"piece length").and_then(Value::as_integer), Some(32768));
    assert_eq!(info.get(b"pieces").and_then(Value::as_bytes).unwrap().len(), 40);

    let files = info.get(b"files").and_then(Value::as_list).unwrap();
    let listed: Vec<(Vec<&str>, i64)> = files
        .iter()
        .map(|f| {
            (
                strings(f.get(b"path").unwrap()),
                f.get(b"length").and_then(Value::as_integer).unwrap(),
            )
        })
        .collect();
    assert_eq!(
        listed,
        vec![
            (vec!["1.txt"], 5),
            (vec!["2.txt"], 10),
            (vec!["nested", "deep", "3.bin"], 40000),
        ]
    );
}

#[test]
fn output_is_identical_for_any_thread_count() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("content");
    for i in 0..7 {
        write(&root, &format!("part{i}"), &pattern(30000 + i * 1111, i as u8));
    }

    let mut outputs = Vec::new();
    for threads in [1, 2, 3, 8, 20] {
        let output = temp.path().join(format!("t{threads}.torrent"));
        let config = MetainfoConfig::builder("content")
            .announce("http://t1")
            .unwrap()
            .no_creation_date(true)
            .piece_length_exp(15)
            .threads(threads)
            .output(&output)
            .build()
            .unwrap();
        create_torrent(&config, &root).unwrap();
        outputs.push(fs::read(&output).unwrap());
    }

    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn empty_directory_produces_empty_pieces() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("empty");
    fs::create_dir(&root).unwrap();
    let output = temp.path().join("empty.torrent");

    let config = MetainfoConfig::builder("empty")
        .announce("http://t1")
        .unwrap()
        .output(&output)
        .build()
        .unwrap();

    let summary = create_torrent(&config, &root).unwrap();
    assert_eq!(summary.piece_count, 0);

    let metainfo = decode(&fs::read(&output).unwrap()).unwrap();
    let info = metainfo.get(b"info").unwrap();
    assert!(info.get(b"pieces").and_then(Value::as_bytes).unwrap().is_empty());
    assert!(info.get(b"files").and_then(Value::as_list).unwrap().is_empty());
}

#[test]
fn missing_target_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("x.torrent");
    let config = MetainfoConfig::builder("x")
        .announce("http://t1")
        .unwrap()
        .output(&output)
        .build()
        .unwrap();

    let err = create_torrent(&config, &temp.path().join("missing")).unwrap_err();

    assert!(matches!(err, CreateError::Files(FilesError::Stat { .. })));
    assert!(!output.exists());
}
