//! # Scale-Degree Mapping
//!
//! Renders chords as Nashville numbers relative to a target key.
//!
//! ## How a label becomes a number
//! 1. Build the scale: apply the semitone offsets (major: `0 2 4 5 7 9 11`) to the
//!    tonic's index in the key map and read the labels back. Spelling comes from the
//!    key map only; there is no key-signature-aware respelling.
//! 2. A label that is literally one of the scale labels becomes its degree (1-7).
//! 3. Otherwise a trailing `#` or `b` is stripped. If the remaining natural note is
//!    a scale label, the result is that degree followed by the accidental (`5#`, `7b`).
//! 4. Anything else keeps its letter name.
//!
//! The quality suffix follows the full degree token, so `G#m7` in C is `5#m7`.
//! Slash chords map root and bass separately: `G/B` in C is `5/7`.
//!
//! ## Example
//! ```rust
//! use songkey::{to_scale_degree, KeyMap, Scale};
//!
//! let map = KeyMap::sharps();
//! let scale = Scale::major(&map, "C");
//! assert_eq!(to_scale_degree("F", &scale).into_label(), "4");
//! assert_eq!(to_scale_degree("G#", &scale).into_label(), "5#");
//! assert_eq!(to_scale_degree("Am7/G", &scale).into_label(), "6m7/5");
//! ```

use std::fmt;

use crate::chord::{parse_chord, root_token};
use crate::key_map::{shift_index, KeyMap, Resolution};

/// Semitone offsets of the major scale from its tonic
pub const MAJOR_SCALE_OFFSETS: [usize; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Accidental attached to a degree whose note is outside the scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Accidental::Sharp => '#',
            Accidental::Flat => 'b',
        }
    }
}

/// A scale degree, 1-based, with an optional accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    pub number: usize,
    pub accidental: Option<Accidental>,
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)?;
        if let Some(accidental) = self.accidental {
            write!(f, "{}", accidental.symbol())?;
        }
        Ok(())
    }
}

/// Scale labels for one tonic, spelled with a song's key map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    tonic: String,
    labels: Vec<String>,
}

impl Scale {
    /// Build a scale from arbitrary semitone offsets.
    ///
    /// A tonic that is not in the key map gives an empty scale, under which every
    /// chord keeps its letter name.
    pub fn new(map: &KeyMap, tonic: &str, offsets: &[usize]) -> Self {
        let labels = match map.index_of(tonic) {
            Some(root) => offsets
                .iter()
                .map(|&offset| map.label_at(shift_index(root, offset as i32)).to_string())
                .collect(),
            None => Vec::new(),
        };

        Self {
            tonic: tonic.to_string(),
            labels,
        }
    }

    pub fn major(map: &KeyMap, tonic: &str) -> Self {
        Self::new(map, tonic, &MAJOR_SCALE_OFFSETS)
    }

    pub fn tonic(&self) -> &str {
        &self.tonic
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Degree of a note label in this scale, if it has one.
    pub fn degree_of(&self, label: &str) -> Option<Degree> {
        if let Some(index) = self.position(label) {
            return Some(Degree {
                number: index + 1,
                accidental: None,
            });
        }

        // Out of scale: report relative to the natural note under the accidental
        let accidental = label.chars().last().and_then(Accidental::from_char)?;
        let natural = &label[..label.len() - 1];
        if natural.is_empty() {
            return None;
        }

        self.position(natural).map(|index| Degree {
            number: index + 1,
            accidental: Some(accidental),
        })
    }

    /// Degree text for a note label, or the label itself when it has no degree.
    pub fn degree_label(&self, label: &str) -> Resolution {
        match self.degree_of(label) {
            Some(degree) => Resolution::Resolved(degree.to_string()),
            None => Resolution::Unresolved(label.to_string()),
        }
    }
}

/// Map a bass token. Only its leading root is numbered; anything after it is kept.
fn bass_degree(bass: &str, scale: &Scale) -> String {
    match root_token(bass) {
        Some((note, rest)) => format!("{}{}", scale.degree_label(note).as_str(), rest),
        None => bass.to_string(),
    }
}

/// Render a chord symbol as scale degrees.
///
/// `Resolved` means the root was numbered. `Unresolved` carries the chord as
/// written (unparseable input) or with its root letter kept (no diatonic match);
/// a bass note may still have been numbered in the latter case.
pub fn to_scale_degree(raw: &str, scale: &Scale) -> Resolution {
    let chord = match parse_chord(raw) {
        Some(chord) => chord,
        None => return Resolution::Unresolved(raw.to_string()),
    };

    let root = scale.degree_label(&chord.root);
    let resolved = root.is_resolved();

    let mut out = format!("{}{}", root.as_str(), chord.quality);
    if let Some(bass) = &chord.bass {
        out.push('/');
        out.push_str(&bass_degree(bass, scale));
    }

    if resolved {
        Resolution::Resolved(out)
    } else {
        Resolution::Unresolved(out)
    }
}
