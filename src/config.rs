//! Calibration loading.
//!
//! The canonical constants are built in; a JSON file (from the command line or
//! `SHOT_FINDER_CALIBRATION`) may override any subset of them.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::solver::Calibration;

pub const CALIBRATION_ENV: &str = "SHOT_FINDER_CALIBRATION";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "could not read '{}': {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid calibration file '{}': {source}", path.display())
            }
            ConfigError::Invalid(msg) => write!(f, "invalid calibration: {msg}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid(_) => None,
        }
    }
}

/// Decodes and validates calibration JSON; `origin` names the source in errors.
fn decode_calibration(json: &str, origin: &Path) -> Result<Calibration, ConfigError> {
    let calibration: Calibration =
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
    calibration.validate().map_err(ConfigError::Invalid)?;
    Ok(calibration)
}

pub fn parse_calibration(json: &str) -> Result<Calibration, ConfigError> {
    decode_calibration(json, Path::new("<inline>"))
}

pub fn load_calibration_file(path: &Path) -> Result<Calibration, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let calibration = decode_calibration(&text, path)?;
    info!(
        "loaded calibration from '{}' ({} angles)",
        path.display(),
        calibration.angles.len()
    );
    Ok(calibration)
}

/// Explicit path first, then the environment variable, then the defaults.
pub fn load_calibration(explicit: Option<&Path>) -> Result<Calibration, ConfigError> {
    if let Some(path) = explicit {
        return load_calibration_file(path);
    }
    match std::env::var_os(CALIBRATION_ENV) {
        Some(path) if !path.is_empty() => load_calibration_file(Path::new(&path)),
        _ => Ok(Calibration::default()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{ConfigError, load_calibration, load_calibration_file, parse_calibration};
    use crate::solver::{Calibration, SelectionRule};

    #[test]
    fn partial_file_keeps_defaults() {
        let calibration = parse_calibration(r#"{ "angles": [69, 70, 71] }"#).expect("parse");
        assert_eq!(calibration.angles, vec![69, 70, 71]);
        assert_eq!(calibration.gravity, Calibration::default().gravity);
        assert_eq!(calibration.selection, SelectionRule::Literal);
    }

    #[test]
    fn reads_selection_rule() {
        let calibration = parse_calibration(r#"{ "selection": "nearest-half" }"#).expect("parse");
        assert_eq!(calibration.selection, SelectionRule::NearestHalf);
    }

    #[test]
    fn rejects_bad_values() {
        let err = parse_calibration(r#"{ "velocity_to_power": -1.0 }"#).expect_err("should fail");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = parse_calibration("not json").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_unordered_angle_table() {
        let err =
            parse_calibration(r#"{ "angles": [84, 70, 70, 60] }"#).expect_err("should fail");
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("strictly ascending"), "{err}");
    }

    #[test]
    fn file_and_inline_share_validation() {
        let path = std::env::temp_dir()
            .join(format!("shot_finder_bad_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "angles": [70, 60] }"#).expect("write");
        let invalid = load_calibration_file(&path).expect_err("should fail");
        assert!(matches!(invalid, ConfigError::Invalid(_)));

        std::fs::write(&path, "{ not json").expect("write");
        let parse = load_calibration_file(&path).expect_err("should fail");
        let _ = std::fs::remove_file(&path);
        match parse {
            ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_calibration_file(Path::new("/nonexistent/shot_finder.json"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/shot_finder.json"));
    }

    #[test]
    fn explicit_path_wins() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("shot_finder_cal_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "gravity": -300.0 }"#).expect("write");

        let calibration = load_calibration(Some(path.as_path())).expect("load");
        assert_eq!(calibration.gravity, -300.0);
        let _ = std::fs::remove_file(&path);
    }
}
