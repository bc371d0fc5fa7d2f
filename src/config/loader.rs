//! Configuration loader
//!
//! Reads a scenario file from disk and decodes it into a typed [`Config`].
//! One file read per call, no caching, no global state; safe to call
//! concurrently from independent call sites.

use crate::config::schema::Config;
use crate::error::ConfigError;

use std::fs;
use std::path::Path;

/// Loads a load-test configuration from a YAML file.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be opened or read,
/// and [`ConfigError::Parse`] if the content is not valid YAML or a field
/// type does not match the schema. Both variants carry the offending path.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&raw, Some(path))?;

    tracing::debug!(
        path = %path.display(),
        services = config.services.len(),
        "loaded load-test configuration"
    );

    Ok(config)
}

/// Decodes a load-test configuration from an in-memory YAML document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the document is not valid YAML or a
/// field type does not match the schema; the error carries no path.
pub fn load_from_str(source: &str) -> Result<Config, ConfigError> {
    parse(source, None)
}

fn parse(source: &str, path: Option<&Path>) -> Result<Config, ConfigError> {
    // Handle UTF-8 BOM
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    serde_yaml::from_str(source).map_err(|source| ConfigError::Parse {
        path: path.map(Path::to_path_buf),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "scenario.yaml",
            r#"
targetServer:
  host: localhost
  port: 8080
loadPattern:
  type: ramp-up
  concurrentUsers: 10
  durationSeconds: 10
  rampUp:
    durationSeconds: 10
  cooldown:
    durationSeconds: 10
rateLimiting:
  maxRequestsPerSecond: 10
"#,
        );

        let config = load(&path).unwrap();
        assert_eq!(config.target_server.port, 8080);
        assert_eq!(config.load_pattern.duration, Duration::from_secs(10));
        assert_eq!(
            config.load_pattern.ramp_up.unwrap().duration,
            Duration::from_secs(10)
        );
        assert_eq!(config.rate_limiting.max_requests_per_second, 10);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        let msg = err.to_string();
        assert!(msg.starts_with("failed to read config file"));
        assert!(msg.contains("does/not/exist.yaml"));
    }

    #[test]
    fn directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "broken.yaml", "targetServer: {host: localhost");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let msg = err.to_string();
        assert!(msg.starts_with("error while parsing config file"));
        assert!(msg.contains("broken.yaml"));
    }

    // Each failing file must be identifiable from its error alone when
    // several scenarios are loaded in one run.
    #[test]
    fn parse_error_carries_offending_path() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_config(&dir, "first.yaml", "services: [");
        let second = write_config(&dir, "second.yaml", "services: [");

        for path in [&first, &second] {
            match load(path).unwrap_err() {
                ConfigError::Parse { path: Some(p), .. } => assert_eq!(&p, path),
                other => panic!("expected parse error with path, got {other:?}"),
            }
        }
    }

    #[test]
    fn type_mismatch_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "mismatch.yaml", "targetServer: {port: not-a-number}");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn bom_is_stripped() {
        let config = load_from_str("\u{feff}targetServer: {host: h, port: 1}").unwrap();
        assert_eq!(config.target_server.host, "h");
    }

    #[test]
    fn load_from_str_parse_error_has_no_path() {
        let err = load_from_str("services: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn load_from_str_matches_load() {
        let source = "rateLimiting: {maxRequestsPerSecond: 7}";
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "scenario.yaml", source);

        assert_eq!(load(&path).unwrap(), load_from_str(source).unwrap());
    }
}
