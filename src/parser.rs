//! # Chord Name Parser
//!
//! Turns free-text chord names ("C#m7", "Bbmaj7", "Am/G", "Dsus") into a
//! [`ChordDescriptor`].
//!
//! ## Parsing Steps
//! 1. Trim; empty input is an error
//! 2. Replace a leading flat spelling with its sharp (`Bbm` → `A#m`)
//! 3. Split off the root (one letter, plus `#`/`b` if present) and validate it
//! 4. Read the quality from the start of the suffix
//! 5. Read the extension (first number, else sus/add tags)
//! 6. Read an optional slash bass note
//!
//! Only the root is mandatory. An unrecognized suffix falls back to a plain
//! major triad, and an unreadable bass note is dropped rather than failing
//! the whole parse.
//!
//! ## Quality Prefixes
//! | Prefix | Quality |
//! |--------|---------|
//! | `maj`, `M` | major |
//! | `min`, `m` | minor |
//! | `dim` | diminished |
//! | `aug` | augmented |
//! | `sus` | suspended |
//! | (anything else) | major |
//!
//! `maj` and `min` are matched before the single-letter forms, so `Cmaj7` is
//! major and `CMin` is minor.

use crate::error::ChordError;
use crate::note::{normalize_enharmonic, split_note_token, Note};
use crate::types::{ChordDescriptor, Extension, Quality};

/// Quality tokens stripped from the suffix before reading the extension
const QUALITY_TOKENS: [&str; 5] = ["maj", "min", "m", "dim", "aug"];

/// Parse a chord name into its components.
///
/// # Examples
/// ```
/// use chord_helper::{parse_chord, Extension, Note, Quality};
///
/// let chord = parse_chord("C#m7").unwrap();
/// assert_eq!(chord.root, Note::CSharp);
/// assert_eq!(chord.quality, Quality::Minor);
/// assert_eq!(chord.extension, Some(Extension::Number(7)));
///
/// // Flats are respelled as sharps
/// let chord = parse_chord("Dbmaj7").unwrap();
/// assert_eq!(chord.root, Note::CSharp);
/// assert_eq!(chord.quality, Quality::Major);
///
/// assert!(parse_chord("").is_err());
/// assert!(parse_chord("H").is_err());
/// ```
///
/// # Errors
/// [`ChordError::EmptyInput`] for blank input and [`ChordError::InvalidRoot`]
/// when the name doesn't start with one of the 12 notes.
pub fn parse_chord(chord_name: &str) -> Result<ChordDescriptor, ChordError> {
    let trimmed = chord_name.trim();
    if trimmed.is_empty() {
        return Err(ChordError::EmptyInput);
    }

    let normalized = normalize_enharmonic(trimmed);
    let (root_token, suffix) = split_note_token(&normalized);

    let root_name = normalize_enharmonic(root_token);
    let root = Note::from_name(&root_name).ok_or_else(|| ChordError::InvalidRoot {
        input: trimmed.to_string(),
        root: root_token.to_string(),
    })?;

    Ok(ChordDescriptor {
        root,
        quality: parse_quality(suffix),
        extension: parse_extension(suffix),
        bass: parse_bass(suffix),
        original: trimmed.to_string(),
    })
}

/// True if `chord_name` has a recognizable root note
pub fn is_valid_chord(chord_name: &str) -> bool {
    parse_chord(chord_name).is_ok()
}

/// Read the chord quality from the start of the suffix
fn parse_quality(suffix: &str) -> Quality {
    let lower = suffix.to_lowercase();

    if lower.starts_with("maj") {
        Quality::Major
    } else if lower.starts_with("min") {
        Quality::Minor
    } else if suffix.starts_with('M') {
        Quality::Major
    } else if suffix.starts_with('m') {
        Quality::Minor
    } else if lower.starts_with("dim") {
        Quality::Diminished
    } else if lower.starts_with("aug") {
        Quality::Augmented
    } else if lower.starts_with("sus") {
        Quality::Suspended
    } else {
        Quality::Major
    }
}

/// Read the extension (7, 9, sus2, sus4, addN) from the suffix
fn parse_extension(suffix: &str) -> Option<Extension> {
    let lower = suffix.to_lowercase();
    let cleaned = QUALITY_TOKENS
        .iter()
        .find_map(|token| lower.strip_prefix(token))
        .unwrap_or(&lower);

    // Any number wins, wherever it appears ("m7", "maj9", "7/G")
    if let Some(number) = first_number(cleaned) {
        return Some(Extension::Number(number));
    }

    if cleaned.contains("sus2") {
        return Some(Extension::Sus2);
    }
    if cleaned.contains("sus") {
        // Bare "sus" means sus4
        return Some(Extension::Sus4);
    }

    if let Some(pos) = cleaned.find("add") {
        if let Some(number) = leading_number(&cleaned[pos + 3..]) {
            return Some(Extension::Add(number));
        }
    }

    None
}

/// Read a slash-chord bass note ("C/E" → E)
fn parse_bass(suffix: &str) -> Option<Note> {
    let (_, bass) = suffix.rsplit_once('/')?;
    let normalized = normalize_enharmonic(bass.trim());
    let (token, _) = split_note_token(&normalized);
    Note::from_name(&normalize_enharmonic(token))
}

/// First run of ASCII digits anywhere in `text`
fn first_number(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    leading_number(&text[start..])
}

/// Run of ASCII digits at the very start of `text`
fn leading_number(text: &str) -> Option<u32> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Semitone intervals above the root for a quality and extension.
///
/// Only 7ths and 9ths add notes; other extensions leave the triad as is.
/// A 7 on a major chord is a major seventh (11), otherwise a minor seventh
/// (10). A 9 always adds the minor seventh and the ninth (10, 14).
///
/// # Examples
/// ```
/// use chord_helper::{intervals, Extension, Quality};
///
/// assert_eq!(intervals(Quality::Major, None), vec![0, 4, 7]);
/// assert_eq!(intervals(Quality::Major, Some(Extension::Number(7))), vec![0, 4, 7, 11]);
/// assert_eq!(intervals(Quality::Minor, Some(Extension::Number(7))), vec![0, 3, 7, 10]);
/// assert_eq!(intervals(Quality::Minor, Some(Extension::Number(9))), vec![0, 3, 7, 10, 14]);
/// ```
pub fn intervals(quality: Quality, extension: Option<Extension>) -> Vec<u8> {
    let mut intervals = match quality {
        Quality::Major => vec![0, 4, 7],
        Quality::Minor => vec![0, 3, 7],
        Quality::Diminished => vec![0, 3, 6],
        Quality::Augmented => vec![0, 4, 8],
        Quality::Suspended => vec![0, 5, 7],
    };

    match extension {
        Some(Extension::Number(7)) => {
            intervals.push(if quality == Quality::Major { 11 } else { 10 });
        }
        Some(Extension::Number(9)) => {
            intervals.extend([10, 14]);
        }
        _ => {}
    }

    intervals
}
