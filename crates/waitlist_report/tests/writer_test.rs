use chrono::{DateTime, FixedOffset, TimeZone};
use waitlist_error::{StorageErrorKind, WaitlistErrorKind};
use waitlist_report::{Report, ReportTemplate, ReportWriter, render};

fn at(day: u32, hour: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2024, 10, day, hour, 0, 0)
        .unwrap()
}

#[test]
fn test_writes_current_and_archive() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let writer = ReportWriter::new(dir.path().join("list.md"), dir.path().join("archive"));
    let generated_at = at(16, 8);
    let document = render(&Report::new(generated_at, 2, Vec::new()), &ReportTemplate::default());

    let written = writer.write(&document, &generated_at).expect("Write report");

    assert_eq!(written.current(), &dir.path().join("list.md"));
    assert_eq!(written.archive(), &dir.path().join("archive").join("2024-10-16.md"));
    assert_eq!(std::fs::read_to_string(written.current()).unwrap(), document);
    assert_eq!(std::fs::read_to_string(written.archive()).unwrap(), document);
}

#[test]
fn test_same_day_overwrites_archive() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let writer = ReportWriter::new(dir.path().join("list.md"), dir.path().join("archive"));

    writer.write("morning\n", &at(16, 8)).expect("First write");
    let written = writer.write("evening\n", &at(16, 20)).expect("Second write");

    assert_eq!(std::fs::read_to_string(written.current()).unwrap(), "evening\n");
    assert_eq!(std::fs::read_to_string(written.archive()).unwrap(), "evening\n");
    let archived = std::fs::read_dir(dir.path().join("archive")).unwrap().count();
    assert_eq!(archived, 1);
}

#[test]
fn test_new_day_adds_archive_file() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let writer = ReportWriter::new(dir.path().join("list.md"), dir.path().join("archive"));

    writer.write("day one\n", &at(15, 12)).expect("First write");
    writer.write("day two\n", &at(16, 12)).expect("Second write");

    let day_one = dir.path().join("archive").join("2024-10-15.md");
    assert_eq!(std::fs::read_to_string(day_one).unwrap(), "day one\n");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("list.md")).unwrap(),
        "day two\n"
    );
}

#[test]
fn test_archive_date_follows_report_offset() {
    let writer = ReportWriter::default();
    // 23:30 UTC on the 15th is already the 16th at UTC+1.
    let generated_at = FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2024, 10, 16, 0, 30, 0)
        .unwrap();

    assert_eq!(
        writer.archive_path(&generated_at),
        std::path::Path::new("archive").join("2024-10-16.md")
    );
}

#[test]
fn test_unwritable_archive_is_storage_error() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    // A regular file where the archive directory should be.
    let blocker = dir.path().join("archive");
    std::fs::write(&blocker, "not a directory").unwrap();
    let writer = ReportWriter::new(dir.path().join("list.md"), &blocker);

    let err = writer.write("report\n", &at(16, 8)).expect_err("archive blocked");

    match err.kind() {
        WaitlistErrorKind::Storage(storage) => {
            assert!(matches!(storage.kind, StorageErrorKind::CreateDir { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}
