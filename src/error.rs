// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Playlist(PlaylistError),
}

/// Specific error types for playlist mutations.
///
/// Every variant degrades to a no-op at the call site: the sequence and the
/// current-entry reference are left untouched when an operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// A reorder index fell outside the sequence.
    IndexOutOfBounds { index: usize, len: usize },

    /// No entry with the requested identifier exists.
    UnknownEntry(String),
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for playlist of {}", index, len)
            }
            PlaylistError::UnknownEntry(id) => write!(f, "no playlist entry with id {:?}", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Playlist(e) => write!(f, "Playlist Error: {}", e),
        }
    }
}

impl From<PlaylistError> for Error {
    fn from(err: PlaylistError) -> Self {
        Error::Playlist(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn playlist_error_converts_into_error() {
        let err: Error = PlaylistError::UnknownEntry("42".to_string()).into();
        match err {
            Error::Playlist(PlaylistError::UnknownEntry(id)) => assert_eq!(id, "42"),
            _ => panic!("expected Playlist variant"),
        }
    }

    #[test]
    fn index_out_of_bounds_mentions_both_numbers() {
        let err = PlaylistError::IndexOutOfBounds { index: 7, len: 3 };
        let rendered = format!("{}", err);
        assert!(rendered.contains('7'));
        assert!(rendered.contains('3'));
    }
}
