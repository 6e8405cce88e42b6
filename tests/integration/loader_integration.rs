//! End-to-end tests: file, parameter, and environment sources merged in
//! priority order onto nested records.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use strata::{DefaultsSource, EnvSource, FileSource, Loader, ParamsSource};
use tempfile::TempDir;

// Serialize process-environment mutation across parallel tests.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

struct EnvGuard {
    name: &'static str,
}

impl EnvGuard {
    fn set(name: &'static str, value: &str) -> Self {
        std::env::set_var(name, value);
        Self { name }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(self.name);
    }
}

#[derive(Debug, Default)]
struct AppConfig {
    listen_url: String,
    database: String,
}

strata::schema! {
    AppConfig {
        listen_url => "ListenURL",
        database,
    }
}

#[derive(Debug, Default)]
struct DbConfig {
    name: String,
    port: u16,
}

strata::schema! {
    DbConfig {
        name => "Name",
        port => "Port",
    }
}

#[derive(Debug, Default)]
struct ServiceConfig {
    listen_url: String,
    log_file: PathBuf,
    db: DbConfig,
}

strata::schema! {
    ServiceConfig {
        listen_url => "ListenURL",
        log_file => "LogFile",
        db: group "db",
    }
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_end_to_end_file_params_env() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let _env = EnvGuard::set("CONFIG_LISTENURL", "localhost:9000");

    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"listen_url": "localhost:8080", "database": "blabla"}"#,
    );

    let config = Loader::for_record(AppConfig::default())
        .add_source(FileSource::new(&path))
        .add_source(ParamsSource::from_args(["--database", "mysql"]))
        .add_source(EnvSource::new())
        .retrieve()
        .unwrap();

    assert_eq!(config.listen_url, "localhost:9000");
    assert_eq!(config.database, "mysql");
}

#[test]
fn test_priority_follows_registration_order() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"database": "from-file"}"#);

    let file_then_params = Loader::for_record(AppConfig::default())
        .add_source(FileSource::new(&path))
        .add_source(ParamsSource::from_args(["--database", "from-params"]))
        .retrieve()
        .unwrap();
    assert_eq!(file_then_params.database, "from-params");

    let params_then_file = Loader::for_record(AppConfig::default())
        .add_source(ParamsSource::from_args(["--database", "from-params"]))
        .add_source(FileSource::new(&path))
        .retrieve()
        .unwrap();
    assert_eq!(params_then_file.database, "from-file");
}

#[test]
fn test_nested_group_naming_across_sources() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let _env = EnvGuard::set("CONFIG_DBNAME", "env-users");

    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"db": {"name": "file-users", "port": 5432}}"#,
    );

    // The group prefix "db" concatenates in front of each leaf's resolved
    // name: flag --dbPort, env var CONFIG_DBNAME.
    let config = Loader::for_record(ServiceConfig::default())
        .add_source(FileSource::new(&path))
        .add_source(ParamsSource::from_args(["--dbPort", "6000"]))
        .add_source(EnvSource::new())
        .retrieve()
        .unwrap();

    assert_eq!(config.db.name, "env-users");
    assert_eq!(config.db.port, 6000);
}

#[test]
fn test_fallback_kind_accepts_strings_from_every_source() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"log_file": "/var/log/from-file.log"}"#);

    let config = Loader::for_record(ServiceConfig::default())
        .add_source(FileSource::new(&path))
        .retrieve()
        .unwrap();
    assert_eq!(config.log_file, Path::new("/var/log/from-file.log"));

    let config = Loader::for_record(ServiceConfig::default())
        .add_source(ParamsSource::from_args(["--LogFile", "/tmp/from-params.log"]))
        .retrieve()
        .unwrap();
    assert_eq!(config.log_file, Path::new("/tmp/from-params.log"));
}

#[test]
fn test_defaults_layer_sits_below_every_other_source() {
    let config = Loader::for_record(ServiceConfig::default())
        .add_source(
            DefaultsSource::new()
                .set("ListenURL", "localhost:8080")
                .set("dbPort", "5432"),
        )
        .add_source(ParamsSource::from_args(["--dbPort", "9999"]))
        .retrieve()
        .unwrap();

    assert_eq!(config.listen_url, "localhost:8080");
    assert_eq!(config.db.port, 9999);
}

#[test]
fn test_repeated_loads_are_deterministic() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"database": "stable"}"#);

    let build = || {
        Loader::for_record(AppConfig::default())
            .add_source(FileSource::new(&path))
            .add_source(ParamsSource::from_args(["--ListenURL", "x"]))
    };

    let first = build().retrieve().unwrap();
    let second = build().retrieve().unwrap();
    assert_eq!(first.database, second.database);
    assert_eq!(first.listen_url, second.listen_url);
}

#[test]
fn test_first_failure_aborts_whole_load() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    let result = Loader::for_record(AppConfig::default())
        .add_source(FileSource::new(&missing))
        .add_source(ParamsSource::from_args(["--database", "never-applied"]))
        .retrieve();

    assert!(matches!(
        result,
        Err(strata::LoadError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_trace_attributes_fields_to_winning_sources() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let _env = EnvGuard::set("CONFIG_LISTENURL", "localhost:9000");

    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"listen_url": "localhost:8080", "database": "blabla"}"#,
    );

    let (_, trace) = Loader::for_record(AppConfig::default())
        .add_source(FileSource::new(&path))
        .add_source(ParamsSource::from_args(["--database", "mysql"]))
        .add_source(EnvSource::new())
        .retrieve_traced()
        .unwrap();

    assert_eq!(trace.origin("ListenURL"), Some("environment"));
    assert_eq!(trace.origin("database"), Some("parameters"));
}
