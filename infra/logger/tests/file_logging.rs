use furever_logger::{LevelFilter, Logger, LoggerError};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_writes_records_and_blocks_second_init() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("furever-integration")
        .console(false)
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.writes_files());

    tracing::info!(panel = "adoption", "interest recorded");

    let second = Logger::builder().name("furever-again").init();
    assert!(matches!(second, Err(LoggerError::Subscriber { .. })));

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("interest recorded"));
    Ok(())
}
