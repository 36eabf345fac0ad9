//! # Public API
//!
//! This module contains the main entry points for the chord helper library.
//!
//! ## Functions
//!
//! - [`parse_chord()`] - Parse a chord name (fails on an unknown root)
//! - [`lookup_chord()`] - Fetch a database entry by name
//! - [`search_chord_names()`] - Autocomplete chord names (up to 10)
//! - [`find_alternatives()`] - Ranked, deduplicated fingerings for a chord
//! - [`get_power_chords()`] - Power chord shapes for a parsed chord
//! - [`suggest()`] - Everything a front end shows for a typed chord name
//!
//! ## Typical Usage
//!
//! ```rust
//! use chord_helper::suggest;
//!
//! let fingerings = suggest("F", false)?;
//! for fingering in &fingerings {
//!     println!("{} (difficulty {})", fingering.name(), fingering.difficulty());
//! }
//! # Ok::<(), chord_helper::ChordError>(())
//! ```

use crate::database::ChordDatabase;
use crate::error::ChordError;
use crate::finder::AlternativeFinder;
use crate::power::power_chords_for;
use crate::types::{AlternativeResult, ChordDescriptor, ChordEntry, Fingering, Source};

pub use crate::finder::find_alternatives;
pub use crate::parser::parse_chord;

/// Power chord shapes for a parsed chord.
///
/// # Example
/// ```rust
/// use chord_helper::{get_power_chords, parse_chord};
///
/// let chord = parse_chord("E")?;
/// let shapes = get_power_chords(&chord);
/// assert_eq!(shapes[0].name, "E5 (Open)");
/// # Ok::<(), chord_helper::ChordError>(())
/// ```
pub fn get_power_chords(chord: &ChordDescriptor) -> Vec<Fingering> {
    power_chords_for(chord)
}

/// Look up a chord in the built-in table; `None` if it isn't there.
pub fn lookup_chord(chord_name: &str) -> Option<&'static ChordEntry> {
    ChordDatabase::builtin().get_chord(chord_name)
}

/// Chord names from the built-in table matching a partial query (at most 10).
pub fn search_chord_names(query: &str) -> Vec<&'static str> {
    ChordDatabase::builtin().search_chords(query)
}

/// Which fingerings [`suggest_with`] returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestMode {
    /// Ranked alternatives followed by power chord shapes
    #[default]
    Standard,
    /// Power chord shapes only
    PowerChords,
    /// Ranked alternatives only
    AlternativesOnly,
}

impl SuggestMode {
    /// Mode for the `power-chord-mode` setting
    pub fn from_power_chord_mode(power_chord_mode: bool) -> Self {
        if power_chord_mode {
            SuggestMode::PowerChords
        } else {
            SuggestMode::Standard
        }
    }
}

/// Fingerings to show for a typed chord name, using the built-in table.
///
/// See [`suggest_with`].
pub fn suggest(chord_name: &str, power_chord_mode: bool) -> Result<Vec<AlternativeResult>, ChordError> {
    suggest_with(
        ChordDatabase::builtin(),
        chord_name,
        SuggestMode::from_power_chord_mode(power_chord_mode),
    )
}

/// Fingerings to show for a typed chord name.
///
/// Alternatives are ranked easiest first; power chord shapes are appended
/// after them in their own order (open shapes first).
///
/// # Errors
/// - [`ChordError::EmptyInput`] / [`ChordError::InvalidRoot`] if the name
///   doesn't parse
/// - [`ChordError::NoFingerings`] if the name parses but nothing was found
pub fn suggest_with(
    db: &ChordDatabase,
    chord_name: &str,
    mode: SuggestMode,
) -> Result<Vec<AlternativeResult>, ChordError> {
    let parsed = parse_chord(chord_name)?;

    let mut fingerings = Vec::new();

    if mode != SuggestMode::PowerChords {
        fingerings.extend(AlternativeFinder::new(db).find_alternatives(chord_name));
    }
    if mode != SuggestMode::AlternativesOnly {
        fingerings.extend(
            power_chords_for(&parsed)
                .into_iter()
                .map(|f| AlternativeResult::new(f, Source::PowerChord)),
        );
    }

    if fingerings.is_empty() {
        return Err(ChordError::NoFingerings {
            chord: parsed.original,
        });
    }

    log::debug!(
        "Suggesting {} fingerings for '{}' ({:?})",
        fingerings.len(),
        parsed.original,
        mode
    );
    Ok(fingerings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_appends_power_chords() {
        let results = suggest("C", false).unwrap();
        let first_power = results
            .iter()
            .position(|r| r.source == Source::PowerChord)
            .unwrap();
        assert_eq!(results[0].name(), "C (Open)");
        assert!(results[..first_power].iter().all(|r| r.source != Source::PowerChord));
        assert!(results[first_power..].iter().all(|r| r.source == Source::PowerChord));
        assert_eq!(results[first_power].name(), "C5 (6th string)");
    }

    #[test]
    fn test_suggest_power_chord_mode() {
        let results = suggest("Em7", true).unwrap();
        assert_eq!(results[0].name(), "E5 (Open)");
        assert!(results.iter().all(|r| r.source == Source::PowerChord));
    }

    #[test]
    fn test_suggest_errors() {
        assert_eq!(suggest("", false), Err(ChordError::EmptyInput));
        let err = suggest("H", false).unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(err.to_string(), "Invalid chord name: \"H\" (unknown root note 'H')");
    }

    #[test]
    fn test_suggest_unknown_chord_still_gets_power_chords() {
        // G# has no entry and no simpler triad, but power chords always exist
        let results = suggest("G#", false).unwrap();
        assert!(results.iter().all(|r| r.source == Source::PowerChord));
    }

    #[test]
    fn test_suggest_reports_no_fingerings() {
        let db = ChordDatabase::builtin();
        // Valid name, but no entry and no simpler triad to fall back on
        let err = suggest_with(db, "G#", SuggestMode::AlternativesOnly).unwrap_err();
        assert_eq!(err, ChordError::NoFingerings { chord: "G#".to_string() });
        assert!(!err.is_parse_error());
        assert_eq!(err.to_string(), "No fingerings found for \"G#\"");

        let ok = suggest_with(db, "G7", SuggestMode::AlternativesOnly).unwrap();
        assert!(ok.iter().all(|r| r.source != Source::PowerChord));
    }

    #[test]
    fn test_lookup_and_search() {
        assert_eq!(lookup_chord("Bb").map(|e| e.name.as_str()), None);
        assert_eq!(lookup_chord("Gb").map(|e| e.name.as_str()), Some("F#"));
        assert!(search_chord_names("").is_empty());
        assert!(search_chord_names("Am").contains(&"Am"));
    }
}
