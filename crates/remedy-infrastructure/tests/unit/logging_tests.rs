//! Logging tests

use remedy_domain::Error;
use remedy_infrastructure::config::LoggingConfig;
use remedy_infrastructure::logging::{init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert!(matches!(
        parse_log_level("verbose"),
        Err(Error::Configuration { .. })
    ));
}

// the only test in this binary touching the global subscriber
#[test]
fn test_init_logging_installs_once() {
    let invalid = LoggingConfig {
        level: "verbose".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&invalid).is_err());

    let config = LoggingConfig {
        level: "debug".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_ok());
    assert!(matches!(
        init_logging(&config),
        Err(Error::Configuration { .. })
    ));
}
