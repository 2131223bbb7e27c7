mod common;

use std::io::Write;

use clap::Parser;
use common::{TEST_SECRET, with_clean_env};
use jobportal::cli::{Cli, run};
use jobportal::jobportal_config::{ConfigLoader, Overlay, load_overlay_from};
use tempfile::NamedTempFile;

fn overlay_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

#[test]
fn test_overlay_supplies_missing_values() {
    let file = overlay_file(&["JWT_SECRET=from-overlay-file", "REDIS_DB=7"]);

    let config = with_clean_env(&[], || {
        ConfigLoader::new().overlay_path(file.path()).load()
    })
    .unwrap();

    assert_eq!(config.jwt.secret, "from-overlay-file");
    assert_eq!(config.cache.db_index, 7);
}

#[test]
fn test_process_env_wins_over_overlay() {
    let file = overlay_file(&["JWT_SECRET=from-overlay-file", "PORT=1111"]);

    let config = with_clean_env(&[("JWT_SECRET", TEST_SECRET), ("PORT", "2222")], || {
        ConfigLoader::new().overlay_path(file.path()).load()
    })
    .unwrap();

    assert_eq!(config.jwt.secret, TEST_SECRET);
    assert_eq!(config.server.port, "2222");
}

#[test]
fn test_missing_overlay_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");

    assert_eq!(load_overlay_from(&path), Overlay::Missing);

    let config = with_clean_env(&[("JWT_SECRET", TEST_SECRET)], || {
        ConfigLoader::new().overlay_path(&path).load()
    });
    assert!(config.is_ok());
}

#[test]
fn test_check_command_prints_summary() {
    let file = overlay_file(&["JWT_SECRET=from-overlay-file"]);
    let path = file.path().to_string_lossy().to_string();

    let output = with_clean_env(&[], || {
        let cli = Cli::try_parse_from(["jobportal", "check", "--env-file", path.as_str()]).unwrap();
        run(&cli)
    })
    .unwrap();

    assert!(output.contains("Configuration is valid"));
    assert!(!output.contains("from-overlay-file"));
}

#[test]
fn test_check_command_json() {
    let overrides = [
        ("JWT_SECRET", TEST_SECRET),
        ("REDIS_URL", "redis://:s3cr3t@cache:6379"),
    ];
    let output = with_clean_env(&overrides, || {
        let cli = Cli::try_parse_from(["jobportal", "check", "--no-env-file", "--json"]).unwrap();
        run(&cli)
    })
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["server"]["port"], "8080");
    assert_eq!(value["storage"]["allowed_document_types"][2], "docx");
    assert!(value["jwt"].get("secret").is_none());
    assert_eq!(value["cache"]["url"], "redis://cache:6379");
    assert!(!output.contains("s3cr3t"));
}

#[test]
fn test_check_command_reports_invalid_config() {
    let err = with_clean_env(&[("DATABASE_URL", ""), ("JWT_SECRET", TEST_SECRET)], || {
        let cli = Cli::try_parse_from(["jobportal", "check", "--no-env-file"]).unwrap();
        run(&cli)
    })
    .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("Invalid configuration"));
    assert!(message.contains("database connection string is required"));
}
