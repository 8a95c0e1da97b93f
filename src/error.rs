use std::path::PathBuf;

/// Reasons a token cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {} is off the board", .0 + 1)]
    OutOfRange(usize),

    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("the game is over")]
    GameOver,

    #[error("no column is playable")]
    BoardFull,
}

impl MoveError {
    /// The column itself was rejected; the caller should ask for another one.
    pub fn is_invalid_column(self) -> bool {
        matches!(self, MoveError::OutOfRange(_) | MoveError::ColumnFull(_))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display_is_one_based() {
        assert_eq!(MoveError::ColumnFull(0).to_string(), "column 1 is full");
        assert_eq!(MoveError::OutOfRange(7).to_string(), "column 8 is off the board");
    }

    #[test]
    fn test_invalid_column_class() {
        assert!(MoveError::OutOfRange(9).is_invalid_column());
        assert!(MoveError::ColumnFull(2).is_invalid_column());
        assert!(!MoveError::GameOver.is_invalid_column());
        assert!(!MoveError::BoardFull.is_invalid_column());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.start_column must be < 7".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.start_column must be < 7"
        );
    }
}
