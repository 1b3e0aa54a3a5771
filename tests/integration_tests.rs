//! Integration tests for songkey
//!
//! Tests the full pipeline from YAML song data to rendered chords.

use songkey::{
    parse_song, render_song, render_song_json, render_song_yaml, shift_index, transpose_chord, Catalog,
    DisplayMode, KeyMap, RenderOptions, Resolution, Song,
};

const GRACE_ABOUNDS: &str = r#"
title: Grace Abounds
artist: AWAKE84
composer: Elle Tumaliuan, Isa Cuna, Joe Ramos, and Charles Bautista
album: Wonderstruck
releaseDate: "2023"
originalKey: E
chordMap: [C, C#, D, Eb, E, F, F#, G, G#, A, Bb, B]
bpm: 130
sections:
  - type: Intro
    lyrics: ["", "Are you ready...", ""]
    italize: [false, true]
    addBreak: [false, true]
    chords:
      - - { chord: A, position: 0, left: true }
        - { chord: C#m7, position: 4 }
        - { chord: B, position: 4, right: true, dash: true }
        - { chord: E, position: 8 }
        - { chord: G#m7, position: 12 }
        - { chord: A, position: 12, right: true, dash: true }
      - []
      - - { chord: A, position: 0, left: true }
        - { chord: B, position: 4, leftRight: true }
    times: [2, '', 4]
  - type: Chorus
    lyrics:
      - "Your grace abounds"
      - "It's all around"
    chords:
      - [{ chord: A, position: 18 }, { chord: E/G#, position: 40 }]
      - [{ chord: C#m, position: 16 }, { chord: B, position: 20 }]
  - type: "ENDING:"
    lyrics: ["", ""]
    chords:
      - - { chord: E, position: 0, left: true, leftColon: true }
        - { chord: F#, position: 4, right: true }
        - { chord: B, position: 8, right: true, forwardSlash: 3, rightColon: true }
      - - { chord: N.C., position: 0 }
"#;

fn chords(song: &Song) -> Vec<String> {
    song.chords().map(|c| c.chord.clone()).collect()
}

#[test]
fn test_render_in_original_key_is_byte_identical() {
    let song = parse_song(GRACE_ABOUNDS).unwrap();
    let rendered = render_song(&song, &RenderOptions::in_key("E"));
    assert_eq!(chords(&rendered), chords(&song));
    assert_eq!(rendered, song);
}

#[test]
fn test_render_up_a_whole_step() {
    let song = parse_song(GRACE_ABOUNDS).unwrap();
    let rendered = render_song(&song, &RenderOptions::in_key("F#"));
    assert_eq!(
        chords(&rendered),
        [
            "B", "Ebm7", "C#", "F#", "Bbm7", "B", "B", "C#", "B", "F#/Bb", "Ebm", "C#", "F#", "G#", "C#", "N.C."
        ]
    );
}

#[test]
fn test_there_and_back_again() {
    let song = parse_song(GRACE_ABOUNDS).unwrap();
    for key in song.chord_map.labels() {
        let away = render_song(&song, &RenderOptions::in_key(key));
        // Re-read the rendered song as if it had been written in the new key
        let away = Song {
            original_key: key.clone(),
            ..away
        };
        let back = render_song(&away, &RenderOptions::in_key("E"));
        assert_eq!(chords(&back), chords(&song), "round trip through {}", key);
    }
}

#[test]
fn test_numbers_mode_end_to_end() {
    let song = parse_song(GRACE_ABOUNDS).unwrap();
    let options = RenderOptions::in_key("E").with_mode(DisplayMode::Numbers);
    let rendered = render_song(&song, &options);
    assert_eq!(
        chords(&rendered),
        ["4", "6m7", "5", "1", "3m7", "4", "4", "5", "4", "1/3", "6m", "5", "1", "2", "5", "N.C."]
    );
}

#[test]
fn test_decorations_survive_rendering() {
    let song = parse_song(GRACE_ABOUNDS).unwrap();
    let rendered = render_song(&song, &RenderOptions::in_key("Bb").with_mode(DisplayMode::Numbers));

    let ending = &rendered.sections[2];
    assert_eq!(ending.section_type, "ENDING:");
    assert!(ending.chords[0][0].left_colon);
    assert!(ending.chords[0][2].right_colon);
    assert_eq!(ending.chords[0][2].forward_slash, 3);
    assert_eq!(rendered.sections[0].times_for_line(2), Some(4));
    assert!(rendered.sections[0].is_italic(1));
    assert_eq!(rendered.sections[0].add_break, [false, true]);
}

#[test]
fn test_yaml_output_loads_back() {
    let yaml = render_song_yaml(GRACE_ABOUNDS, &RenderOptions::in_key("G")).unwrap();
    let reloaded = parse_song(&yaml).unwrap();
    assert_eq!(reloaded.original_key, "E");
    assert_eq!(reloaded.sections[1].chords[0][1].chord, "G/B");
    assert_eq!(reloaded.sections[0].times_for_line(1), None);
}

#[test]
fn test_json_output_uses_song_bank_keys() {
    let json = render_song_json(GRACE_ABOUNDS, &RenderOptions::in_key("D")).unwrap();
    assert!(json.contains("\"originalKey\": \"E\""));
    assert!(json.contains("\"chord\": \"D/F#\""));
    assert!(json.contains("\"forwardSlash\": 3"));
}

#[test]
fn test_invalid_song_is_rejected() {
    let source = GRACE_ABOUNDS.replace("originalKey: E", "originalKey: Fb");
    assert!(render_song_yaml(&source, &RenderOptions::default()).is_err());
}

#[test]
fn test_modular_arithmetic_never_leaves_octave() {
    for index in 0..12 {
        for steps in -24..=24 {
            assert!(shift_index(index, steps) < 12);
        }
    }
}

#[test]
fn test_quality_and_slash_examples() {
    let map = KeyMap::sharps();
    assert_eq!(transpose_chord("C#m7", 2, &map), Resolution::Resolved("Ebm7".to_string()));
    assert_eq!(transpose_chord("D/F#", 2, &map), Resolution::Resolved("E/G#".to_string()));
}

#[test]
fn test_catalog_of_several_songs() {
    let bank = format!(
        "- {}\n- title: Other\n  artist: Band\n  originalKey: A\n  bpm: 90\n",
        GRACE_ABOUNDS.trim().replace('\n', "\n  ")
    );
    let catalog = Catalog::from_yaml(&bank).unwrap();
    assert_eq!(catalog.len(), 2);
    let song = catalog.find("grace abounds").unwrap();
    assert_eq!(song.sections.len(), 3);
}
