pub mod catalog;
pub mod chord;
pub mod degree;
pub mod error;
pub mod key_map;
pub mod render;
pub mod song;
pub mod transpose;

pub use catalog::Catalog;
pub use chord::{parse_chord, ParsedChord};
pub use degree::{to_scale_degree, Accidental, Degree, Scale, MAJOR_SCALE_OFFSETS};
pub use error::*;
pub use key_map::{shift_index, KeyMap, Resolution};
pub use render::{render_chord, render_song, DisplayMode, RenderOptions};
pub use song::{parse_song, ChordOccurrence, Section, Song, Times};
pub use transpose::{semitone_steps, transpose_chord, transpose_parsed};

/// Render a YAML song document in a target key and display mode, returning YAML.
/// This is the main entry point for the library.
pub fn render_song_yaml(source: &str, options: &RenderOptions) -> Result<String, SongKeyError> {
    let song = parse_song(source)?;
    Ok(serde_yaml::to_string(&render_song(&song, options))?)
}

/// Same as [`render_song_yaml`] but returns pretty-printed JSON.
pub fn render_song_json(source: &str, options: &RenderOptions) -> Result<String, SongKeyError> {
    let song = parse_song(source)?;
    serde_json::to_string_pretty(&render_song(&song, options))
        .map_err(|e| SongKeyError::Output(e.to_string()))
}
