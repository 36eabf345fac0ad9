//! # Chord Helper Types
//!
//! Data types shared by the parser, the chord database and the finders.
//!
//! ## Type Hierarchy
//! ```text
//! ChordDescriptor (parser output)
//!   ├── root: Note
//!   ├── quality: Quality (major, minor, diminished, augmented, suspended)
//!   ├── extension: Option<Extension> (7, 9, sus2, sus4, add9, ...)
//!   ├── bass: Option<Note> (slash chords)
//!   └── original: String
//!
//! ChordEntry (database record)
//!   ├── name, root, quality
//!   ├── Vec<Fingering>
//!   └── alternatives: Vec<String> (keys of other entries)
//!
//! Fingering
//!   ├── name, difficulty (1-5)
//!   ├── frets:   [Option<u8>; 6]  (None = muted, Some(0) = open)
//!   ├── fingers: [Option<u8>; 6]  (None = muted, Some(0) = no finger)
//!   └── strings: [u8; 6]          (6 = low E ... 1 = high e)
//!
//! AlternativeResult
//!   ├── Fingering (flattened when serialized)
//!   └── source: Source (direct, alternative, simplified, open-version, power-chord)
//! ```
//!
//! ## String Order
//! Array index 0 is the lowest-pitched string (string 6, low E) and index 5 is
//! the highest (string 1, high e). The three arrays of a fingering are always
//! index-aligned; the fixed array length makes a short or long row a
//! deserialization error instead of a runtime surprise.

use crate::note::Note;
use crate::parser;
use serde::{Deserialize, Serialize, Serializer};

/// Number of strings on a standard guitar
pub const STRING_COUNT: usize = 6;

/// Physical string numbers in array order, low E first
pub const STANDARD_STRINGS: [u8; STRING_COUNT] = [6, 5, 4, 3, 2, 1];

/// Difficulty assumed for fingerings that don't carry one
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Suspended,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Diminished => "diminished",
            Quality::Augmented => "augmented",
            Quality::Suspended => "suspended",
        }
    }

    /// Chord-name suffix of the plain triad ("" for major, "m" for minor)
    pub fn triad_suffix(&self) -> &'static str {
        match self {
            Quality::Minor => "m",
            _ => "",
        }
    }
}

/// Chord extension parsed from the suffix
///
/// Serialized the way chord charts write it: numbers stay numbers (`7`),
/// everything else becomes a tag (`"sus2"`, `"add9"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    Number(u32),
    Sus2,
    Sus4,
    Add(u32),
}

impl Serialize for Extension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Extension::Number(n) => serializer.serialize_u32(*n),
            Extension::Sus2 => serializer.serialize_str("sus2"),
            Extension::Sus4 => serializer.serialize_str("sus4"),
            Extension::Add(n) => serializer.serialize_str(&format!("add{}", n)),
        }
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Extension::Number(n) => write!(f, "{}", n),
            Extension::Sus2 => f.write_str("sus2"),
            Extension::Sus4 => f.write_str("sus4"),
            Extension::Add(n) => write!(f, "add{}", n),
        }
    }
}

/// Structured form of a chord name such as "C#m7" or "Am/G"
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDescriptor {
    pub root: Note,
    pub quality: Quality,
    pub extension: Option<Extension>,
    pub bass: Option<Note>,
    /// The trimmed input this descriptor was parsed from
    pub original: String,
}

impl ChordDescriptor {
    /// Semitone intervals above the root (see [`parser::intervals`])
    pub fn intervals(&self) -> Vec<u8> {
        parser::intervals(self.quality, self.extension)
    }

    /// Pitch classes of the chord, root first
    pub fn notes(&self) -> Vec<Note> {
        self.intervals()
            .into_iter()
            .map(|interval| self.root.transpose(interval as i32))
            .collect()
    }

    /// Name of the plain triad on the same root ("C" for "Cmaj7", "Am" for "Am7")
    pub fn triad_name(&self) -> String {
        format!("{}{}", self.root, self.quality.triad_suffix())
    }

    /// True when the chord is more than a plain major or minor triad
    pub fn is_complex(&self) -> bool {
        self.extension.is_some() || !matches!(self.quality, Quality::Major | Quality::Minor)
    }
}

fn standard_strings() -> [u8; STRING_COUNT] {
    STANDARD_STRINGS
}

/// One concrete hand position on a 6-string guitar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fingering {
    pub name: String,
    #[serde(default)]
    pub difficulty: Option<u8>,
    pub frets: [Option<u8>; STRING_COUNT],
    pub fingers: [Option<u8>; STRING_COUNT],
    #[serde(default = "standard_strings")]
    pub strings: [u8; STRING_COUNT],
}

impl Fingering {
    pub fn new(
        name: impl Into<String>,
        difficulty: u8,
        frets: [Option<u8>; STRING_COUNT],
        fingers: [Option<u8>; STRING_COUNT],
    ) -> Self {
        Self {
            name: name.into(),
            difficulty: Some(difficulty),
            frets,
            fingers,
            strings: STANDARD_STRINGS,
        }
    }

    /// Difficulty used for ranking; fingerings without one sort last
    pub fn difficulty_or_default(&self) -> u8 {
        self.difficulty.unwrap_or(DEFAULT_DIFFICULTY)
    }

    /// Frets that are actually pressed (not muted, not open)
    pub fn pressed_frets(&self) -> impl Iterator<Item = u8> + '_ {
        self.frets.iter().filter_map(|fret| match fret {
            Some(f) if *f > 0 => Some(*f),
            _ => None,
        })
    }

    pub fn open_string_count(&self) -> usize {
        self.frets.iter().filter(|fret| **fret == Some(0)).count()
    }

    pub fn muted_string_count(&self) -> usize {
        self.frets.iter().filter(|fret| fret.is_none()).count()
    }

    /// Copy of this fingering with `suffix` appended to its name
    pub fn with_name_suffix(&self, suffix: &str) -> Self {
        Self {
            name: format!("{}{}", self.name, suffix),
            ..self.clone()
        }
    }
}

/// A database record: every known fingering of one chord
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordEntry {
    /// Canonical key ("C", "Am", "F#maj7")
    pub name: String,
    pub root: Note,
    pub quality: Quality,
    pub fingerings: Vec<Fingering>,
    /// Keys of related chords worth offering instead
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// Where a suggested fingering came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// A fingering of the requested chord itself
    Direct,
    /// A fingering of a chord listed in the entry's alternatives
    Alternative,
    /// The plain triad of an extended or altered chord
    Simplified,
    /// An easy shape offered in place of a barre chord
    OpenVersion,
    /// A root + fifth voicing
    PowerChord,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Direct => "direct",
            Source::Alternative => "alternative",
            Source::Simplified => "simplified",
            Source::OpenVersion => "open-version",
            Source::PowerChord => "power-chord",
        }
    }
}

/// A fingering together with how it was found
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeResult {
    #[serde(flatten)]
    pub fingering: Fingering,
    pub source: Source,
}

impl AlternativeResult {
    pub fn new(fingering: Fingering, source: Source) -> Self {
        Self { fingering, source }
    }

    pub fn name(&self) -> &str {
        &self.fingering.name
    }

    pub fn difficulty(&self) -> u8 {
        self.fingering.difficulty_or_default()
    }
}
