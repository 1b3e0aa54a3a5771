//! # Render Pipeline
//!
//! Runs every chord of a song through parse, transpose, and (in numbers mode)
//! scale-degree mapping, producing a new song with updated chord strings.
//!
//! ## Pipeline
//! 1. Compute the semitone interval once from the original key to the target key
//! 2. Transpose each chord through the song's key map
//! 3. In numbers mode, map the transposed chord to degrees of the target key,
//!    unless the occurrence carries its own `number`
//!
//! Lyrics, section structure, positions, and decoration flags are copied through.
//! The input song is never modified, so rendering the same song into several keys
//! at once is safe.
//!
//! ## Example
//! ```rust
//! use songkey::{parse_song, render_song, DisplayMode, RenderOptions};
//!
//! let song = parse_song(r#"
//! title: Example
//! artist: Someone
//! originalKey: E
//! bpm: 120
//! sections:
//!   - type: Chorus
//!     lyrics: ["Your grace abounds"]
//!     chords: [[{ chord: A, position: 18 }, { chord: E, position: 40 }]]
//! "#)?;
//!
//! let in_g = render_song(&song, &RenderOptions::in_key("G"));
//! assert_eq!(in_g.sections[0].chords[0][0].chord, "C");
//!
//! let numbers = render_song(&song, &RenderOptions::in_key("G").with_mode(DisplayMode::Numbers));
//! assert_eq!(numbers.sections[0].chords[0][0].chord, "4");
//! # Ok::<(), songkey::SongKeyError>(())
//! ```

use crate::degree::{to_scale_degree, Scale};
use crate::key_map::KeyMap;
use crate::song::{ChordOccurrence, Section, Song};
use crate::transpose::{semitone_steps, transpose_chord};

/// How chords are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Letter names in the target key
    #[default]
    Chords,
    /// Nashville numbers relative to the target key
    Numbers,
}

/// Target key and display mode for one render pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// `None` renders in the song's original key
    pub target_key: Option<String>,
    pub mode: DisplayMode,
}

impl RenderOptions {
    pub fn in_key(key: &str) -> Self {
        Self {
            target_key: Some(key.to_string()),
            mode: DisplayMode::Chords,
        }
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Everything a chord needs to be rendered, computed once per song
struct ChordRenderer<'a> {
    map: &'a KeyMap,
    steps: i32,
    mode: DisplayMode,
    scale: Scale,
}

impl<'a> ChordRenderer<'a> {
    fn new(song: &'a Song, options: &RenderOptions) -> Self {
        let target_key = options.target_key.as_deref().unwrap_or(&song.original_key);
        let map = &song.chord_map;

        Self {
            map,
            steps: semitone_steps(map, &song.original_key, target_key),
            mode: options.mode,
            scale: Scale::major(map, target_key),
        }
    }

    fn display(&self, occurrence: &ChordOccurrence) -> String {
        let transposed = transpose_chord(&occurrence.chord, self.steps, self.map).into_label();
        match self.mode {
            DisplayMode::Chords => transposed,
            DisplayMode::Numbers => match &occurrence.number {
                Some(number) => number.clone(),
                None => to_scale_degree(&transposed, &self.scale).into_label(),
            },
        }
    }

    fn render_section(&self, section: &Section) -> Section {
        Section {
            chords: section
                .chords
                .iter()
                .map(|line| {
                    line.iter()
                        .map(|occurrence| ChordOccurrence {
                            chord: self.display(occurrence),
                            ..occurrence.clone()
                        })
                        .collect()
                })
                .collect(),
            ..section.clone()
        }
    }
}

/// Render a song in a target key and display mode.
///
/// A target key that is not in the song's key map renders the chords in the
/// original key; numbers are then relative to a scale that cannot be built, so
/// chords keep their letter names.
pub fn render_song(song: &Song, options: &RenderOptions) -> Song {
    let renderer = ChordRenderer::new(song, options);

    Song {
        sections: song.sections.iter().map(|s| renderer.render_section(s)).collect(),
        ..song.clone()
    }
}

/// Render a single chord symbol the same way [`render_song`] would.
pub fn render_chord(chord: &str, map: &KeyMap, from_key: &str, options: &RenderOptions) -> String {
    let target_key = options.target_key.as_deref().unwrap_or(from_key);
    let transposed = transpose_chord(chord, semitone_steps(map, from_key, target_key), map).into_label();
    match options.mode {
        DisplayMode::Chords => transposed,
        DisplayMode::Numbers => to_scale_degree(&transposed, &Scale::major(map, target_key)).into_label(),
    }
}
