use log::Log;
use slitscan_base::logging::{FileLogger, StdoutLogger, format_timestamp, format_today};
use std::fs;

fn log_message(logger: &dyn Log, message: &str) {
    logger.log(
        &log::RecordBuilder::new()
            .level(log::Level::Info)
            .target("test")
            .file(Some("test.rs"))
            .line(Some(42))
            .args(format_args!("{}", message))
            .build(),
    );
}

#[test]
fn test_stdout_logger_implements_log_trait() {
    let logger = StdoutLogger;
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .build();
    assert!(logger.enabled(&metadata));

    log_message(&logger, "test message");
    logger.flush();
}

#[test]
fn test_file_logger_creates_directory() {
    let test_dir = std::env::temp_dir().join(format!("slitscan-log-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let _logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");
    assert!(test_dir.is_dir());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_file_logger_appends_record() {
    let test_dir = std::env::temp_dir().join(format!("slitscan-log-{}-append", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");
    log_message(&logger, "first");
    log_message(&logger, "second");
    logger.flush();

    let content = fs::read_to_string(test_dir.join(format!("{}.log", format_today())))
        .expect("Failed to read log file");
    assert!(content.contains("first"));
    assert!(content.contains("second"));
    assert!(content.contains("test.rs:42"));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_timestamp_prefix_matches_today() {
    let ts = format_timestamp();
    assert!(ts.starts_with(&format_today()));
}
