use std::fs;
use std::io::Cursor;

use student_roster::backend::io::console::{session::SessionEnd, ConsoleSession, ProgressLoader};
use student_roster::backend::{initialize_backend, StartupLoad};
use student_roster::config::{AppConfig, LoaderConfig};
use tempfile::TempDir;

fn run_session(config: &AppConfig, script: &str) -> (String, SessionEnd) {
    let state = initialize_backend(config);
    let mut output = Vec::new();
    let mut session = ConsoleSession::new(
        Cursor::new(script.to_string()),
        &mut output,
        state,
        ProgressLoader::new(config.loader.clone()),
    );
    let end = session.run().expect("session should complete");
    drop(session);
    (String::from_utf8(output).unwrap(), end)
}

fn test_config(temp_dir: &TempDir) -> AppConfig {
    AppConfig {
        data_file: temp_dir.path().join("students.txt"),
        loader: LoaderConfig::disabled(),
    }
}

#[test]
fn test_full_session_saves_and_reloads() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    let script = "\
1\n101\nAsha Rao\nasha@example.com\nCompSci\n91.5\n\
1\n102\nBen Ode\nben@example.com\nPhysics\n92\n\
1\n103\nChen Li\nchen@example.com\nMath\n40\n\
5\n\
7\n";
    let (output, end) = run_session(&config, script);

    assert_eq!(end, SessionEnd::Saved);
    assert_eq!(output.matches("Student added successfully!").count(), 3);
    assert!(output.contains("Records saved to file.\nSaved. Exiting...\n"));
    assert_eq!(
        fs::read_to_string(&config.data_file).unwrap(),
        "102|Ben Ode|ben@example.com|Physics|92.0\n\
         101|Asha Rao|asha@example.com|CompSci|91.5\n\
         103|Chen Li|chen@example.com|Math|40.0\n"
    );

    // Second run picks the file back up
    let (output, end) = run_session(&config, "4\nben ode\n2\n");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(output.starts_with("3 records loaded from file.\n"));
    assert!(output.contains("Student deleted successfully!"));
    assert!(!output.contains("Name    : Ben Ode"));
    assert!(output.contains("Name    : Asha Rao"));

    // Nothing was saved, so the file still holds all three
    let state = initialize_backend(&config);
    assert!(matches!(state.startup, StartupLoad::Loaded(3)));
}

#[test]
fn test_session_with_loader_prints_indicator() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = test_config(&temp_dir);
    config.loader = LoaderConfig {
        enabled: true,
        ticks: 2,
        tick_millis: 0,
    };

    let (output, _) = run_session(&config, "2\n");
    assert!(output.contains("Enter choice: Loading..\nNo student records found.\n"));
}

#[test]
fn test_corrupt_file_reported_then_overwritten_on_save() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    fs::write(&config.data_file, "101|Asha Rao|asha@example.com|CompSci\n").unwrap();

    let script = "1\n5\nEli Moss\neli@example.com\nBio\n55\n7\n";
    let (output, end) = run_session(&config, script);

    assert_eq!(end, SessionEnd::Saved);
    assert!(output.starts_with("Error loading file: Corrupt data in "));
    assert_eq!(
        fs::read_to_string(&config.data_file).unwrap(),
        "5|Eli Moss|eli@example.com|Bio|55.0\n"
    );
}

#[test]
fn test_failed_save_keeps_session_open() {
    let temp_dir = TempDir::new().unwrap();
    let blocked = temp_dir.path().join("blocked");
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("inner.txt"), "x").unwrap();
    let config = AppConfig {
        data_file: blocked,
        loader: LoaderConfig::disabled(),
    };

    let script = "1\n1\nAl\nal@example.com\nCS\n60\n7\n2\n";
    let (output, end) = run_session(&config, script);

    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(output.contains("Error: I/O error on "));
    assert!(!output.contains("Saved. Exiting..."));
    // still in the menu with the record intact
    assert!(output.contains("Name    : Al\n"));
}
