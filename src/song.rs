//! # Song Documents
//!
//! Types for chord/lyric song sheets as they are stored in a song bank.
//!
//! ## Type Hierarchy
//! ```text
//! Song
//!   ├── title, artist, composer, album, releaseDate, bpm
//!   ├── originalKey: must be a label of chordMap
//!   ├── chordMap: KeyMap (defaults to the sharps preset)
//!   └── Vec<Section>
//!         ├── type: free text ("Verse 1", "CHORUS:")
//!         ├── lyrics: Vec<String>
//!         ├── chords: Vec<Vec<ChordOccurrence>> (one chord-line per lyric line)
//!         ├── italize / addBreak: per-line flags
//!         └── times: per-line repeat counts, blanks allowed
//!
//! ChordOccurrence
//!   ├── chord: the display string the engine rewrites
//!   ├── position: horizontal offset, opaque here
//!   ├── left, right, leftRight, leftColon, rightColon, dash: bar and hold markers
//!   ├── forwardSlash: number of repeat slashes
//!   └── number: fixed Nashville number that overrides the computed one
//! ```
//!
//! Field names match the camelCase keys of the song bank, so existing data loads
//! as is. Decoration fields are pass-through data and are only written back when set.

use serde::{Deserialize, Serialize};

use crate::error::SongKeyError;
use crate::key_map::KeyMap;

fn is_false(flag: &bool) -> bool {
    !*flag
}

fn is_zero(count: &u32) -> bool {
    *count == 0
}

/// One chord placed over a lyric line
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordOccurrence {
    pub chord: String,
    #[serde(default)]
    pub position: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub left: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub right: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub left_right: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub left_colon: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub right_colon: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dash: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub forward_slash: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

impl ChordOccurrence {
    pub fn new(chord: &str, position: f64) -> Self {
        Self {
            chord: chord.to_string(),
            position,
            ..Default::default()
        }
    }
}

/// Repeat count for a line. Song data leaves unrepeated lines blank (`''`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Times {
    Count(u32),
    Blank(String),
}

impl Times {
    pub fn count(&self) -> Option<u32> {
        match self {
            Times::Count(n) => Some(*n),
            Times::Blank(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "type", default)]
    pub section_type: String,
    #[serde(default)]
    pub lyrics: Vec<String>,
    #[serde(default)]
    pub chords: Vec<Vec<ChordOccurrence>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub italize: Vec<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_break: Vec<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub times: Vec<Times>,
}

impl Section {
    /// Repeat count for line `index`, if one is given.
    pub fn times_for_line(&self, index: usize) -> Option<u32> {
        self.times.get(index).and_then(Times::count)
    }

    pub fn is_italic(&self, index: usize) -> bool {
        self.italize.get(index).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    pub original_key: String,
    #[serde(default)]
    pub chord_map: KeyMap,
    pub bpm: u32,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Song {
    /// Check that the song's original key is spelled the way its key map spells it.
    pub fn validate(&self) -> Result<(), SongKeyError> {
        if !self.chord_map.contains(&self.original_key) {
            return Err(SongKeyError::InvalidSong(format!(
                "'{}': original key '{}' is not in the key map ({})",
                self.title, self.original_key, self.chord_map
            )));
        }
        Ok(())
    }

    /// Every chord occurrence in reading order.
    pub fn chords(&self) -> impl Iterator<Item = &ChordOccurrence> {
        self.sections
            .iter()
            .flat_map(|section| section.chords.iter())
            .flat_map(|line| line.iter())
    }
}

/// Parse and validate a single song from YAML.
pub fn parse_song(source: &str) -> Result<Song, SongKeyError> {
    let song: Song = serde_yaml::from_str(source)?;
    song.validate()?;
    Ok(song)
}
