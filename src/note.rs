//! Pitch classes and enharmonic spelling
//!
//! Every note is stored with its sharp spelling. Flat spellings are mapped to
//! their enharmonic sharp (`Db` → `C#`) before any lookup, so the rest of the
//! crate only ever compares sharps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat spellings and the sharp they normalize to, in lookup order.
pub const ENHARMONIC_EQUIVALENTS: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// One of the 12 pitch classes, sharp spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Note {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Note {
    /// All pitch classes in chromatic order starting at C
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Look up a note by its canonical sharp name ("C", "F#", ...).
    ///
    /// Flat names are not accepted here; run them through
    /// [`normalize_enharmonic`] first.
    pub fn from_name(name: &str) -> Option<Self> {
        Note::ALL.iter().copied().find(|note| note.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }

    /// Semitones above C (0-11)
    pub fn index(&self) -> u8 {
        match self {
            Note::C => 0,
            Note::CSharp => 1,
            Note::D => 2,
            Note::DSharp => 3,
            Note::E => 4,
            Note::F => 5,
            Note::FSharp => 6,
            Note::G => 7,
            Note::GSharp => 8,
            Note::A => 9,
            Note::ASharp => 10,
            Note::B => 11,
        }
    }

    /// The note `semitones` above this one, wrapping at the octave
    pub fn transpose(&self, semitones: i32) -> Note {
        let index = (self.index() as i32 + semitones).rem_euclid(12);
        Note::ALL[index as usize]
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Note {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let normalized = normalize_enharmonic(&value);
        Note::from_name(&normalized).ok_or_else(|| format!("unknown note '{}'", value))
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.as_str().to_string()
    }
}

/// Replace a leading flat spelling with its sharp equivalent.
///
/// Only the first matching prefix is replaced, and only once, so
/// `"Bbm7"` becomes `"A#m7"` and `"C"` is returned unchanged.
pub fn normalize_enharmonic(text: &str) -> String {
    for (flat, sharp) in ENHARMONIC_EQUIVALENTS {
        if let Some(rest) = text.strip_prefix(flat) {
            return format!("{}{}", sharp, rest);
        }
    }
    text.to_string()
}

/// Split a leading note token off `text`.
///
/// The token is two characters when the second one is `#` or `b`, otherwise
/// one. Returns `(token, remainder)`; both are empty for empty input.
pub fn split_note_token(text: &str) -> (&str, &str) {
    let mut chars = text.char_indices();
    let Some((_, first)) = chars.next() else {
        return ("", "");
    };
    let split_at = match chars.next() {
        Some((i, '#')) | Some((i, 'b')) => i + 1,
        _ => first.len_utf8(),
    };
    text.split_at(split_at)
}
