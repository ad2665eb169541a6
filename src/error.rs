//! Crate-wide error type.
//!
//! Every failure is fail-fast: nothing here is retried, and a render that
//! fails never reaches the terminal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A component returned content that does not exactly fill its inner
    /// rectangle. `malformed_lines` holds `(index, width)` of every row whose
    /// width is wrong.
    #[error(
        "{component} returned invalid content: expected {expected_height} lines of width \
         {expected_width}, got {actual_height} lines; malformed lines: {malformed_lines:?}"
    )]
    InvalidContent {
        component: String,
        expected_width: usize,
        expected_height: usize,
        actual_height: usize,
        malformed_lines: Vec<(usize, usize)>,
    },

    #[error("screen '{0}' is already registered")]
    DuplicateRegistration(String),

    #[error("no active screen")]
    NoActiveScreen,

    #[error("screen '{0}' is not registered")]
    UnregisteredScreen(String),

    #[error("I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unknown key name '{0}'")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_content_message_names_component() {
        let err = Error::InvalidContent {
            component: "TextView".to_string(),
            expected_width: 10,
            expected_height: 2,
            actual_height: 3,
            malformed_lines: vec![(1, 9)],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("TextView returned invalid content"));
        assert!(msg.contains("expected 2 lines of width 10"));
        assert!(msg.contains("[(1, 9)]"));
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::Terminal(_))));
    }
}
