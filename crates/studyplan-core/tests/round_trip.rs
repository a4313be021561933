use std::fs;
use std::path::Path;

use studyplan_core::{
    generate, AlwaysOverwrite, FileKeyStore, Format, KeyStore, MemoryKeyStore, NeverOverwrite,
    PlannerError, Schedule, ScheduleStore,
};
use tempfile::tempdir;

fn sample_schedules() -> Vec<Schedule> {
    vec![
        generate(&["Math", "History"], 6.0, 2).unwrap(),
        generate(&["Physics", "Chemistry", "Biology"], 7.0, 5).unwrap(),
        generate(&["Reading, Writing", "Art \"Studio\""], 3.3, 1).unwrap(),
        generate(&["Solo"], 0.01, 3).unwrap(),
    ]
}

#[test]
fn test_every_format_round_trips_through_files() {
    let dir = tempdir().unwrap();
    let store = ScheduleStore::new(FileKeyStore::in_dir(dir.path()));

    for (index, schedule) in sample_schedules().into_iter().enumerate() {
        for format in Format::ALL {
            let name = dir.path().join(format!("plan_{}", index));
            let path = store
                .save(&schedule, &name, format, &mut AlwaysOverwrite)
                .expect("save should succeed");
            assert_eq!(path.extension().unwrap(), format.extension());

            let loaded = store.load(&path).expect("load should succeed");
            assert_eq!(loaded, schedule, "format {} changed the schedule", format);
        }
    }
}

#[test]
fn test_formats_are_mutually_compatible() {
    let dir = tempdir().unwrap();
    let store = ScheduleStore::new(FileKeyStore::in_dir(dir.path()));
    let original = generate(&["Math", "History", "Music"], 5.0, 3).unwrap();

    // json -> xlsx -> csv -> json, each hop through a file on disk
    let mut current = original.clone();
    let mut previous: Option<std::path::PathBuf> = None;
    for format in [
        Format::EncryptedDocument,
        Format::Spreadsheet,
        Format::Delimited,
        Format::EncryptedDocument,
    ] {
        if let Some(path) = previous.take() {
            current = store.load(&path).unwrap();
        }
        let path = store
            .save(
                &current,
                &dir.path().join("hop"),
                format,
                &mut AlwaysOverwrite,
            )
            .unwrap();
        previous = Some(path);
    }
    let last = store.load(&previous.unwrap()).unwrap();
    assert_eq!(last, original);
}

#[test]
fn test_delimited_example_rows() {
    let dir = tempdir().unwrap();
    let store = ScheduleStore::new(MemoryKeyStore::new().unwrap());
    let schedule = generate(&["Math", "History"], 6.0, 2).unwrap();

    let path = store
        .save(
            &schedule,
            &dir.path().join("example"),
            Format::Delimited,
            &mut NeverOverwrite,
        )
        .unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Day,Subject,Hours",
            "1,Math,3.0",
            "1,History,3.0",
            "2,Math,3.0",
            "2,History,3.0",
        ]
    );
}

#[test]
fn test_key_persists_across_store_instances() {
    let dir = tempdir().unwrap();
    let schedule = generate(&["Math"], 2.0, 2).unwrap();

    let path = ScheduleStore::new(FileKeyStore::in_dir(dir.path()))
        .save(
            &schedule,
            &dir.path().join("secure"),
            Format::EncryptedDocument,
            &mut NeverOverwrite,
        )
        .unwrap();

    let reopened = ScheduleStore::new(FileKeyStore::in_dir(dir.path()));
    assert_eq!(reopened.load(&path).unwrap(), schedule);
}

#[test]
fn test_encrypted_file_hides_plaintext() {
    let dir = tempdir().unwrap();
    let store = ScheduleStore::new(FileKeyStore::in_dir(dir.path()));
    let schedule = generate(&["PLAINTEXT_MARKER_123"], 2.0, 1).unwrap();

    let path = store
        .save(
            &schedule,
            &dir.path().join("secret"),
            Format::EncryptedDocument,
            &mut NeverOverwrite,
        )
        .unwrap();
    let on_disk = fs::read(&path).unwrap();
    assert!(!String::from_utf8_lossy(&on_disk).contains("PLAINTEXT_MARKER_123"));
}

#[test]
fn test_tampered_ciphertext_is_rejected() {
    let dir = tempdir().unwrap();
    let store = ScheduleStore::new(FileKeyStore::in_dir(dir.path()));
    let schedule = generate(&["Math", "History"], 6.0, 2).unwrap();
    let path = store
        .save(
            &schedule,
            &dir.path().join("secure"),
            Format::EncryptedDocument,
            &mut NeverOverwrite,
        )
        .unwrap();
    let pristine = fs::read(&path).unwrap();

    for position in [pristine.len() / 2, pristine.len() - 1] {
        let mut tampered = pristine.clone();
        tampered[position] ^= 0x01;
        fs::write(&path, &tampered).unwrap();

        let result = store.load(&path);
        assert!(
            matches!(result, Err(PlannerError::Decryption(_))),
            "flip at {} was not detected",
            position
        );
    }

    fs::write(&path, &pristine[..pristine.len() - 10]).unwrap();
    assert!(matches!(store.load(&path), Err(PlannerError::Decryption(_))));
}

#[test]
fn test_lost_key_invalidates_encrypted_schedules() {
    let dir = tempdir().unwrap();
    let keys = FileKeyStore::in_dir(dir.path());
    let store = ScheduleStore::new(keys.clone());
    let schedule = generate(&["Math"], 1.0, 1).unwrap();
    let path = store
        .save(
            &schedule,
            &dir.path().join("secure"),
            Format::EncryptedDocument,
            &mut NeverOverwrite,
        )
        .unwrap();

    let original_key = keys.get_or_create_key().unwrap();
    fs::remove_file(keys.path()).unwrap();

    let result = store.load(&path);
    assert!(matches!(result, Err(PlannerError::Decryption(_))));

    let regenerated = keys.get_or_create_key().unwrap();
    assert_ne!(original_key.as_bytes(), regenerated.as_bytes());
}

#[test]
fn test_corrupt_key_file_surfaces_key_error_on_load() {
    let dir = tempdir().unwrap();
    let keys = FileKeyStore::in_dir(dir.path());
    let store = ScheduleStore::new(keys.clone());
    let schedule = generate(&["Math"], 1.0, 1).unwrap();
    let path = store
        .save(
            &schedule,
            &dir.path().join("secure"),
            Format::EncryptedDocument,
            &mut NeverOverwrite,
        )
        .unwrap();

    fs::write(keys.path(), b"not a key").unwrap();
    assert!(matches!(store.load(&path), Err(PlannerError::KeyIo { .. })));
}

#[test]
fn test_skipped_day_reconstruction_from_files() {
    let dir = tempdir().unwrap();
    let store = ScheduleStore::new(MemoryKeyStore::new().unwrap());
    let path = dir.path().join("gappy.csv");
    fs::write(&path, "Day,Subject,Hours\n1,Math,3.0\n1,History,3.0\n3,Math,3.0\n").unwrap();

    let schedule = store.load(&path).unwrap();
    let days: Vec<(u32, usize)> = schedule
        .days()
        .iter()
        .map(|day| (day.day_number, day.subjects.len()))
        .collect();
    assert_eq!(days, vec![(1, 2), (2, 0), (3, 1)]);

    // The reconstructed schedule survives the other formats unchanged.
    for format in [Format::Spreadsheet, Format::EncryptedDocument] {
        let saved = store
            .save(
                &schedule,
                &dir.path().join("gappy_copy"),
                format,
                &mut AlwaysOverwrite,
            )
            .unwrap();
        assert_eq!(store.load(&saved).unwrap(), schedule);
    }
}

#[test]
fn test_failed_load_reports_each_error_kind() {
    let dir = tempdir().unwrap();
    let store = ScheduleStore::new(MemoryKeyStore::new().unwrap());

    assert!(matches!(
        store.load(Path::new("/definitely/not/here.csv")),
        Err(PlannerError::FileNotFound(_))
    ));

    let odd = dir.path().join("plan.pdf");
    fs::write(&odd, b"%PDF").unwrap();
    assert!(matches!(
        store.load(&odd),
        Err(PlannerError::UnsupportedFormat(_))
    ));

    let unsorted = dir.path().join("unsorted.csv");
    fs::write(&unsorted, "Day,Subject,Hours\n2,Math,1\n1,Math,1\n").unwrap();
    assert!(matches!(store.load(&unsorted), Err(PlannerError::Format(_))));
}
