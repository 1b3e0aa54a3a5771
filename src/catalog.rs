//! Song bank loading.
//!
//! A catalog file holds either a YAML list of songs or a single song mapping.
//! Every song is validated on load, so a catalog never hands out a song whose
//! original key is missing from its key map.

use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::info;

use crate::error::SongKeyError;
use crate::song::Song;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Result<Self, SongKeyError> {
        for song in &songs {
            song.validate()?;
        }
        Ok(Self { songs })
    }

    pub fn from_yaml(source: &str) -> Result<Self, SongKeyError> {
        let value: Value = serde_yaml::from_str(source)?;
        let songs: Vec<Song> = if value.is_sequence() {
            serde_yaml::from_value(value)?
        } else {
            vec![serde_yaml::from_value(value)?]
        };
        Self::new(songs)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SongKeyError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| SongKeyError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let catalog = Self::from_yaml(&source)?;
        info!(path = %path.display(), songs = catalog.len(), "loaded song catalog");
        Ok(catalog)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.songs.iter().map(|song| song.title.as_str())
    }

    /// Find a song by title, ignoring case.
    pub fn find(&self, title: &str) -> Result<&Song, SongKeyError> {
        let wanted = title.trim().to_lowercase();
        self.songs
            .iter()
            .find(|song| song.title.to_lowercase() == wanted)
            .ok_or_else(|| SongKeyError::SongNotFound(title.to_string()))
    }
}
