//! Error type for loading and playing a game

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that end a game or stop it from starting
#[derive(Debug)]
pub enum GameError {
    /// The word list or the console could not be read or written
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
    /// The word list holds no usable word
    EmptyWordList,
    /// The player's input stream ended before the game did
    InputClosed,
}

impl GameError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    pub(crate) const fn console(source: io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path), ..
            } => write!(f, "cannot read word list '{}'", path.display()),
            Self::Io { path: None, .. } => write!(f, "console I/O failed"),
            Self::EmptyWordList => write!(f, "word list contains no words"),
            Self::InputClosed => write!(f, "input closed before the game ended"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
