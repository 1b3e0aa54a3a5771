//! Chord symbol parsing
//!
//! Splits a chord symbol (C, C#m7, Bbsus4, D/F#) into root, quality, and bass.
//!
//! # Grammar
//! ```text
//! chord   := root quality ( "/" bass )?
//! root    := [A-G] ( "#" | "b" )*
//! quality := any text up to the first "/"
//! bass    := all text after the first "/"
//! ```
//!
//! The quality is never interpreted; it is carried through transposition verbatim.
//! The bass is kept as written. It only takes part in transposition when it is
//! itself a bare root token (see [`root_token`]).

use std::fmt;

/// A chord symbol broken into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChord {
    pub root: String,
    pub quality: String,
    pub bass: Option<String>,
}

impl ParsedChord {
    pub fn is_slash_chord(&self) -> bool {
        self.bass.is_some()
    }
}

impl fmt::Display for ParsedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

fn is_note_letter(c: char) -> bool {
    matches!(c, 'A'..='G')
}

fn is_accidental(c: char) -> bool {
    c == '#' || c == 'b'
}

/// Split leading root from the rest of `text`.
///
/// Returns `None` unless `text` starts with a note letter.
///
/// ```
/// use songkey::chord::root_token;
///
/// assert_eq!(root_token("Bbm7"), Some(("Bb", "m7")));
/// assert_eq!(root_token("F#"), Some(("F#", "")));
/// assert_eq!(root_token("N.C."), None);
/// ```
pub fn root_token(text: &str) -> Option<(&str, &str)> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if is_note_letter(c) => {}
        _ => return None,
    }

    // Letters and accidentals are ASCII, so byte offsets line up with chars
    let end = chars
        .find(|&(_, c)| !is_accidental(c))
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    Some((&text[..end], &text[end..]))
}

/// Parse a chord symbol.
///
/// Returns `None` when the main chord has no root, which callers treat as
/// annotation text to be passed through untouched.
///
/// # Examples
/// ```
/// use songkey::parse_chord;
///
/// let chord = parse_chord("C#m7").unwrap();
/// assert_eq!(chord.root, "C#");
/// assert_eq!(chord.quality, "m7");
/// assert_eq!(chord.bass, None);
///
/// let slash = parse_chord("D/F#").unwrap();
/// assert_eq!(slash.root, "D");
/// assert_eq!(slash.bass.as_deref(), Some("F#"));
///
/// assert_eq!(parse_chord(""), None);
/// assert_eq!(parse_chord("x2"), None);
/// ```
pub fn parse_chord(raw: &str) -> Option<ParsedChord> {
    let (main, bass) = match raw.split_once('/') {
        Some((main, bass)) => (main, Some(bass.to_string())),
        None => (raw, None),
    };

    let (root, quality) = root_token(main)?;

    Some(ParsedChord {
        root: root.to_string(),
        quality: quality.to_string(),
        bass,
    })
}
