//! # Error Types
//!
//! This module defines the error type for the songkey library.
//!
//! Musical edge cases never produce errors: an unknown root, an unparseable chord,
//! or a target key missing from the key map all fall back to the original text.
//! Errors are reserved for malformed input data.
//!
//! ## Error Types
//! - `InvalidKeyMap` - A key map that is not 12 distinct, non-empty labels
//! - `InvalidSong` - A song document that fails validation
//! - `Yaml` - Song data that is not valid YAML for the song model
//! - `Output` - A rendered song that could not be serialized
//! - `Io` - A song file that could not be read or written
//! - `SongNotFound` - A title lookup in a catalog that matched nothing
//!
//! ## Usage
//! ```rust
//! use songkey::{parse_song, SongKeyError};
//!
//! match parse_song("title: [unclosed") {
//!     Ok(song) => println!("Loaded {}", song.title),
//!     Err(SongKeyError::Yaml(message)) => eprintln!("Bad song data: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SongKeyError {
    /// Key map construction error.
    ///
    /// # Example
    /// ```
    /// # use songkey::SongKeyError;
    /// let err = SongKeyError::InvalidKeyMap("expected 12 labels, found 7".to_string());
    /// assert_eq!(err.to_string(), "Invalid key map: expected 12 labels, found 7");
    /// ```
    #[error("Invalid key map: {0}")]
    InvalidKeyMap(String),

    /// Song validation error.
    ///
    /// Occurs when a song's original key is not one of its key map labels.
    ///
    /// # Example
    /// ```
    /// # use songkey::SongKeyError;
    /// let err = SongKeyError::InvalidSong("original key 'H' is not in the key map".to_string());
    /// assert_eq!(err.to_string(), "Invalid song: original key 'H' is not in the key map");
    /// ```
    #[error("Invalid song: {0}")]
    InvalidSong(String),

    /// YAML deserialization or serialization error.
    #[error("Invalid song data: {0}")]
    Yaml(String),

    /// Output serialization error.
    #[error("Could not write song data: {0}")]
    Output(String),

    /// File access error.
    #[error("Error accessing '{path}': {message}")]
    Io { path: String, message: String },

    /// Catalog lookup error.
    #[error("No song titled '{0}'")]
    SongNotFound(String),
}

impl From<serde_yaml::Error> for SongKeyError {
    fn from(e: serde_yaml::Error) -> Self {
        SongKeyError::Yaml(e.to_string())
    }
}
