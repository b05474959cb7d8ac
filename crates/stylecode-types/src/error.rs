//! Error types for stylecode.

use std::collections::TryReserveError;
use std::io;

/// Outcome of a failed parse or cascade step.
///
/// Success is `Ok(())`; the two failure kinds mirror the engine's contract:
/// an invalid construct is dropped by the caller, an allocation failure
/// aborts the current stylesheet or element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CssError {
    #[error("invalid input")]
    Invalid,

    #[error("out of memory")]
    NoMem,
}

impl From<TryReserveError> for CssError {
    fn from(_: TryReserveError) -> Self {
        CssError::NoMem
    }
}

/// Errors produced by stylecode hosts (configuration, I/O, output).
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("css error: {0}")]
    Css(#[from] CssError),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, StyleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_display() {
        assert_eq!(format!("{}", CssError::Invalid), "invalid input");
    }

    #[test]
    fn nomem_display() {
        assert_eq!(format!("{}", CssError::NoMem), "out of memory");
    }

    #[test]
    fn css_error_wraps_into_style_error() {
        let e: StyleError = CssError::NoMem.into();
        assert_eq!(format!("{e}"), "css error: out of memory");
    }

    #[test]
    fn config_error_display() {
        let e = StyleError::Config("buffer_limit must be positive".into());
        assert_eq!(format!("{e}"), "config error: buffer_limit must be positive");
    }

    #[test]
    fn try_reserve_failure_is_nomem() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(CssError::from(err), CssError::NoMem);
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: StyleError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: StyleError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: StyleError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(StyleError::Css(CssError::Invalid));
        assert!(r.is_err());
    }
}
