//! # Key Model
//!
//! A key map is the ordered labeling of the 12 pitch classes that one song uses for
//! all of its chord symbols. Index 0 is always C; each following entry is one
//! semitone higher. The labels carry the song's preferred spelling, so a song that
//! writes `Eb` and `G#` binds a map containing exactly those strings.
//!
//! ## Lookup Rules
//! - Lookup is an exact string match. `Db` is not found in a map that spells the
//!   same pitch class `C#`; no enharmonic normalization happens here.
//! - Indices are taken modulo 12 on the way out, so arithmetic never needs a
//!   bounds check.
//!
//! ## Example
//! ```rust
//! use songkey::{KeyMap, Resolution};
//!
//! let map = KeyMap::sharps();
//! assert_eq!(map.index_of("Eb"), Some(3));
//! assert_eq!(map.label_at(14), "D");
//! assert_eq!(map.shift("A", 3), Resolution::Resolved("C".to_string()));
//! assert_eq!(map.shift("Db", 3), Resolution::Unresolved("Db".to_string()));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::SongKeyError;

/// Number of pitch classes in one octave
pub const PITCH_CLASSES: usize = 12;

const SHARP_LABELS: [&str; PITCH_CLASSES] =
    ["C", "C#", "D", "Eb", "E", "F", "F#", "G", "G#", "A", "Bb", "B"];

const FLAT_LABELS: [&str; PITCH_CLASSES] =
    ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// Reduce any signed semitone position to an index in `0..12`.
pub fn shift_index(index: usize, steps: i32) -> usize {
    (index as i64 + steps as i64).rem_euclid(PITCH_CLASSES as i64) as usize
}

/// Outcome of looking up a label.
///
/// `Resolved` carries the label produced by the key map. `Unresolved` carries the
/// caller's original text, unchanged, because the key map had no entry for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    Unresolved(String),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Resolution::Resolved(label) | Resolution::Unresolved(label) => label,
        }
    }

    pub fn into_label(self) -> String {
        match self {
            Resolution::Resolved(label) | Resolution::Unresolved(label) => label,
        }
    }
}

/// The 12 pitch-class labels bound to a song, starting at C
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct KeyMap {
    labels: Vec<String>,
}

impl KeyMap {
    /// Build a key map, checking for exactly 12 distinct, non-empty labels.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self, SongKeyError> {
        if labels.len() != PITCH_CLASSES {
            return Err(SongKeyError::InvalidKeyMap(format!(
                "expected {} labels, found {}",
                PITCH_CLASSES,
                labels.len()
            )));
        }

        let mut seen = HashSet::new();
        for label in labels {
            let label = label.as_ref();
            if label.trim().is_empty() {
                return Err(SongKeyError::InvalidKeyMap("labels must not be empty".to_string()));
            }
            if !seen.insert(label) {
                return Err(SongKeyError::InvalidKeyMap(format!(
                    "label '{}' appears more than once",
                    label
                )));
            }
        }

        Ok(Self {
            labels: labels.iter().map(|l| l.as_ref().to_string()).collect(),
        })
    }

    /// `C C# D Eb E F F# G G# A Bb B`
    pub fn sharps() -> Self {
        Self {
            labels: SHARP_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// `C Db D Eb E F Gb G Ab A Bb B`
    pub fn flats() -> Self {
        Self {
            labels: FLAT_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index_of(label).is_some()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn label_at(&self, index: usize) -> &str {
        &self.labels[index % PITCH_CLASSES]
    }

    /// Move `label` by `steps` semitones. Labels outside the map come back unchanged.
    pub fn shift(&self, label: &str, steps: i32) -> Resolution {
        match self.index_of(label) {
            Some(index) => Resolution::Resolved(self.label_at(shift_index(index, steps)).to_string()),
            None => Resolution::Unresolved(label.to_string()),
        }
    }

    /// The key `delta` semitones away from `key`.
    ///
    /// A key that is not in the map steps from C, matching how a key selector
    /// behaves when its current value is unknown.
    pub fn step_key(&self, key: &str, delta: i32) -> &str {
        let start = self.index_of(key).unwrap_or(0);
        self.label_at(shift_index(start, delta))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::sharps()
    }
}

impl TryFrom<Vec<String>> for KeyMap {
    type Error = SongKeyError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        KeyMap::new(labels.as_slice())
    }
}

impl From<KeyMap> for Vec<String> {
    fn from(map: KeyMap) -> Self {
        map.labels
    }
}

impl fmt::Display for KeyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(KeyMap::new(KeyMap::sharps().labels()).is_ok());
        assert!(KeyMap::new(KeyMap::flats().labels()).is_ok());
        assert_eq!(KeyMap::default(), KeyMap::sharps());
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = KeyMap::new(&["C", "D", "E"]).unwrap_err();
        assert_eq!(err, SongKeyError::InvalidKeyMap("expected 12 labels, found 3".to_string()));
    }

    #[test]
    fn test_rejects_duplicates_and_empty_labels() {
        let dup = ["C", "C#", "D", "Eb", "E", "F", "F#", "G", "G#", "A", "Bb", "C"];
        assert!(matches!(KeyMap::new(&dup), Err(SongKeyError::InvalidKeyMap(_))));

        let empty = ["C", "C#", "D", "Eb", "E", "F", "F#", "G", "G#", "A", "Bb", " "];
        assert!(matches!(KeyMap::new(&empty), Err(SongKeyError::InvalidKeyMap(_))));
    }

    #[test]
    fn test_exact_match_lookup() {
        let map = KeyMap::sharps();
        assert_eq!(map.index_of("C"), Some(0));
        assert_eq!(map.index_of("G#"), Some(8));
        assert_eq!(map.index_of("B"), Some(11));
        // No enharmonic normalization
        assert_eq!(map.index_of("Db"), None);
        assert_eq!(map.index_of("Ab"), None);
        assert_eq!(map.index_of("c"), None);
    }

    #[test]
    fn test_label_at_wraps() {
        let map = KeyMap::sharps();
        assert_eq!(map.label_at(0), "C");
        assert_eq!(map.label_at(12), "C");
        assert_eq!(map.label_at(23), "B");
    }

    #[test]
    fn test_shift_index_stays_in_range() {
        for index in 0..PITCH_CLASSES {
            for steps in -24..=24 {
                let shifted = shift_index(index, steps);
                assert!(shifted < PITCH_CLASSES);
                assert_eq!((shifted as i32 - index as i32 - steps).rem_euclid(12), 0);
            }
        }
    }

    #[test]
    fn test_shift_resolution() {
        let map = KeyMap::sharps();
        assert_eq!(map.shift("C#", 2), Resolution::Resolved("Eb".to_string()));
        assert_eq!(map.shift("C", -1), Resolution::Resolved("B".to_string()));
        assert_eq!(map.shift("H", 2), Resolution::Unresolved("H".to_string()));
        assert!(!map.shift("H", 2).is_resolved());
        assert_eq!(map.shift("H", 2).into_label(), "H");
    }

    #[test]
    fn test_step_key() {
        let map = KeyMap::sharps();
        assert_eq!(map.step_key("E", 1), "F");
        assert_eq!(map.step_key("B", 1), "C");
        assert_eq!(map.step_key("C", -1), "B");
        assert_eq!(map.step_key("Db", 2), "D");
    }

    #[test]
    fn test_yaml_round_trip_validates() {
        let map: KeyMap = serde_yaml::from_str("[C, Db, D, Eb, E, F, Gb, G, Ab, A, Bb, B]").unwrap();
        assert_eq!(map, KeyMap::flats());

        let bad: Result<KeyMap, _> = serde_yaml::from_str("[C, D, E]");
        assert!(bad.is_err());
    }
}
