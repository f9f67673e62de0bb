use marketdesk::constants::MAX_IN_MEMORY_LOGS;
use marketdesk::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());
    assert!(!logger.has_file_writer());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_in_memory_logs_are_capped() {
    let logger = Logger::new();
    for i in 0..MAX_IN_MEMORY_LOGS + 5 {
        logger.log(format!("entry {i}"));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), MAX_IN_MEMORY_LOGS);
    assert!(logs[0].ends_with(&format!("entry {}", MAX_IN_MEMORY_LOGS + 4)));
    assert!(logs.last().unwrap().ends_with("entry 5"));
}
