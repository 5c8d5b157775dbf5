use std::fs;
use std::io::{Cursor, Write};

use bytes::Bytes;
use planrun_archive::{Error, extract_archive, extract_latest};
use planrun_fetch::{DownloadRecord, Ledger};
use zip::write::SimpleFileOptions;

const URL: &str = "https://x/doc.zip";

fn build_zip() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    writer.add_directory("docs/", options).unwrap();
    writer.start_file("docs/guide.md", options).unwrap();
    writer.write_all(b"# Guide\n").unwrap();
    writer.add_directory("docs/sub/", options).unwrap();
    writer.start_file("docs/sub/deep.md", options).unwrap();
    writer.write_all(b"deep\n").unwrap();
    writer.start_file("README.md", options).unwrap();
    writer.write_all(b"readme\n").unwrap();

    writer.finish().unwrap().into_inner()
}

fn ledger_with(record: DownloadRecord) -> Ledger {
    [record].into_iter().collect()
}

#[test]
fn extracts_latest_zip_into_destination() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out");
    let ledger = ledger_with(DownloadRecord::payload(
        URL,
        "application/zip",
        Bytes::from(build_zip()),
    ));

    let report = extract_latest(&ledger, &destination).unwrap();

    assert_eq!(report.entry_count, 5);
    assert_eq!(report.directory_count, 2);
    assert_eq!(report.file_count, 3);
    assert_eq!(
        report.total_bytes,
        (b"# Guide\n".len() + b"deep\n".len() + b"readme\n".len()) as u64
    );
    assert_eq!(fs::read_to_string(destination.join("docs/guide.md")).unwrap(), "# Guide\n");
    assert_eq!(fs::read_to_string(destination.join("docs/sub/deep.md")).unwrap(), "deep\n");
    assert_eq!(fs::read_to_string(destination.join("README.md")).unwrap(), "readme\n");
}

#[test]
fn entries_are_reported_in_archive_order() {
    let dir = tempfile::tempdir().unwrap();
    let report = extract_archive(Cursor::new(build_zip()), dir.path()).unwrap();

    let names: Vec<String> = report
        .entries
        .iter()
        .map(|e| e.original_path.to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(names, vec!["docs", "docs/guide.md", "docs/sub", "docs/sub/deep.md", "README.md"]);
    assert!(report.entries[0].is_directory);
    assert!(!report.entries[1].is_directory);
}

#[test]
fn existing_destination_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_with(DownloadRecord::payload(
        URL,
        "application/zip",
        Bytes::from(build_zip()),
    ));

    extract_latest(&ledger, dir.path()).unwrap();
    let again = extract_latest(&ledger, dir.path()).unwrap();
    assert_eq!(again.file_count, 3);
}

#[test]
fn file_without_directory_entries_gets_parents() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file("a/b/c.txt", options).unwrap();
    writer.write_all(b"c").unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let dir = tempfile::tempdir().unwrap();
    extract_archive(Cursor::new(bytes), dir.path()).unwrap();
    assert_eq!(fs::read(dir.path().join("a/b/c.txt")).unwrap(), b"c");
}

#[test]
fn empty_ledger_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out");

    let err = extract_latest(&Ledger::new(), &destination).unwrap_err();
    assert!(matches!(err, Error::EmptyLedger));
    assert!(!destination.exists());
}

#[test]
fn expired_record_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out");
    let ledger = ledger_with(DownloadRecord::expired(
        URL,
        "application/json",
        Some("contact support".into()),
    ));

    let err = extract_latest(&ledger, &destination).unwrap_err();
    assert!(matches!(err, Error::MissingPayload { expired: true, .. }));
    assert!(!destination.exists());
}

#[test]
fn non_archive_media_type_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out");
    let ledger = ledger_with(DownloadRecord::payload(
        URL,
        "application/octet-stream",
        Bytes::from(build_zip()),
    ));

    let err = extract_latest(&ledger, &destination).unwrap_err();
    assert!(matches!(err, Error::UnsupportedMediaType { .. }));
    assert!(!destination.exists());
}

#[test]
fn only_the_latest_record_counts() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out");
    let ledger: Ledger = [
        DownloadRecord::payload(URL, "application/zip", Bytes::from(build_zip())),
        DownloadRecord::rejected("https://x/missing.zip", "text/html"),
    ]
    .into_iter()
    .collect();

    assert!(matches!(
        extract_latest(&ledger, &destination),
        Err(Error::MissingPayload { expired: false, .. })
    ));
    assert!(!destination.exists());
}

#[test]
fn corrupted_payload_fails() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_with(DownloadRecord::payload(
        URL,
        "application/zip",
        Bytes::from_static(b"not a zip"),
    ));

    assert!(matches!(
        extract_latest(&ledger, dir.path()),
        Err(Error::Corrupted(_))
    ));
}

#[test]
fn failing_entry_stops_and_keeps_earlier_files() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for name in ["first.md", "../escape.md", "third.md"] {
        writer.start_file(name, options).unwrap();
        writer.write_all(name.as_bytes()).unwrap();
    }
    let archive = writer.finish().unwrap().into_inner();

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out");

    let result = extract_archive(Cursor::new(archive), &destination);

    assert!(matches!(result, Err(Error::InvalidPath { .. })));
    assert_eq!(fs::read_to_string(destination.join("first.md")).unwrap(), "first.md");
    assert!(!destination.join("third.md").exists());
    assert!(!dir.path().join("escape.md").exists());
}
