//! Interval transposition of chord symbols.
//!
//! The interval is computed once per song from the original and target keys, then
//! applied to every chord. Root and bass are shifted independently through the
//! song's key map; the quality suffix rides along with the root.

use tracing::debug;

use crate::chord::{parse_chord, ParsedChord};
use crate::key_map::{KeyMap, Resolution};

/// Signed semitone distance from `from_key` to `to_key`.
///
/// Either key missing from the map yields 0 so rendering stays in the original key.
pub fn semitone_steps(map: &KeyMap, from_key: &str, to_key: &str) -> i32 {
    match (map.index_of(from_key), map.index_of(to_key)) {
        (Some(from), Some(to)) => to as i32 - from as i32,
        _ => {
            debug!(from_key, to_key, "key not in key map, not transposing");
            0
        }
    }
}

/// Shift a parsed chord by `steps` semitones.
///
/// Returns `Unresolved` with the chord's source text when the root is not in the
/// key map. A bass note that is not in the map is kept as written while the root
/// still moves.
pub fn transpose_parsed(chord: &ParsedChord, steps: i32, map: &KeyMap) -> Resolution {
    let root = match map.shift(&chord.root, steps) {
        Resolution::Resolved(root) => root,
        Resolution::Unresolved(_) => {
            debug!(root = %chord.root, "chord root not in key map, leaving chord as is");
            return Resolution::Unresolved(chord.to_string());
        }
    };

    let bass = chord.bass.as_deref().map(|bass| {
        let shifted = map.shift(bass, steps);
        if !shifted.is_resolved() {
            debug!(bass, "bass note not in key map, keeping it as written");
        }
        shifted.into_label()
    });

    let transposed = ParsedChord {
        root,
        quality: chord.quality.clone(),
        bass,
    };
    Resolution::Resolved(transposed.to_string())
}

/// Transpose a raw chord symbol by `steps` semitones.
///
/// # Examples
/// ```
/// use songkey::{transpose_chord, KeyMap, Resolution};
///
/// let map = KeyMap::sharps();
/// assert_eq!(transpose_chord("C#m7", 2, &map), Resolution::Resolved("Ebm7".to_string()));
/// assert_eq!(transpose_chord("D/F#", 2, &map), Resolution::Resolved("E/G#".to_string()));
/// assert_eq!(transpose_chord("N.C.", 2, &map), Resolution::Unresolved("N.C.".to_string()));
/// ```
pub fn transpose_chord(raw: &str, steps: i32, map: &KeyMap) -> Resolution {
    match parse_chord(raw) {
        Some(chord) => transpose_parsed(&chord, steps, map),
        None => Resolution::Unresolved(raw.to_string()),
    }
}
