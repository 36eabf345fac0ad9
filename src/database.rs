//! # Chord Database
//!
//! A read-only table of known chords and their fingerings.
//!
//! ## Data
//! The built-in table lives in `data/chords.yaml` and is embedded into the
//! binary. It is parsed once, on first use, into a process-wide
//! [`ChordDatabase`] that is never mutated afterwards, so it can be shared
//! freely between threads.
//!
//! Other tables in the same format can be loaded with
//! [`ChordDatabase::from_yaml`] or [`ChordDatabase::load`].
//!
//! ## Keys
//! Entries are keyed by their canonical chord name ("C", "Am", "F#maj7").
//! Lookups run the requested name through [`normalize_chord_name`] first, so
//! "Gbmaj7" finds "F#maj7". Entries refer to each other only by key (through
//! `alternatives`), never by reference.
//!
//! ## Example
//! ```rust
//! use chord_helper::ChordDatabase;
//!
//! let db = ChordDatabase::builtin();
//! let c = db.get_chord("C").unwrap();
//! assert_eq!(c.fingerings[0].name, "C (Open)");
//! assert!(db.get_chord("Cadd11").is_none());
//! ```

use crate::difficulty::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::error::ChordError;
use crate::note::normalize_enharmonic;
use crate::types::ChordEntry;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// The built-in chord table
const BUILTIN_CHORDS: &str = include_str!("../data/chords.yaml");

/// Maximum number of names returned by [`ChordDatabase::search_chords`]
pub const MAX_SEARCH_RESULTS: usize = 10;

static BUILTIN: LazyLock<ChordDatabase> = LazyLock::new(|| {
    ChordDatabase::from_yaml(BUILTIN_CHORDS).expect("built-in chord table is valid")
});

/// Canonical lookup key for a chord name.
///
/// Trims whitespace and respells a leading flat as a sharp. Applying it
/// twice gives the same result as applying it once.
///
/// # Example
/// ```
/// use chord_helper::normalize_chord_name;
///
/// assert_eq!(normalize_chord_name(" Bbm7 "), "A#m7");
/// assert_eq!(normalize_chord_name("A#m7"), "A#m7");
/// ```
pub fn normalize_chord_name(chord_name: &str) -> String {
    normalize_enharmonic(chord_name.trim())
}

/// Immutable table of chord entries, in file order
#[derive(Debug, Clone)]
pub struct ChordDatabase {
    entries: Vec<ChordEntry>,
    index: HashMap<String, usize>,
}

impl ChordDatabase {
    /// The embedded table, parsed on first use
    pub fn builtin() -> &'static ChordDatabase {
        &BUILTIN
    }

    /// Parse a chord table from YAML.
    ///
    /// The document is a list of entries (see `data/chords.yaml`). Besides
    /// YAML errors, this rejects duplicate or non-canonical names,
    /// difficulties outside 1-5, entries without fingerings and
    /// `alternatives` that don't name another entry.
    pub fn from_yaml(source: &str) -> Result<Self, ChordError> {
        let entries: Vec<ChordEntry> =
            serde_yaml::from_str(source).map_err(|e| ChordError::Database(e.to_string()))?;
        Self::from_entries(entries)
    }

    /// Load a chord table from a YAML file
    pub fn load(path: &Path) -> Result<Self, ChordError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| ChordError::Database(format!("{}: {}", path.display(), e)))?;
        let db = Self::from_yaml(&source)?;
        log::info!("Loaded {} chords from {}", db.len(), path.display());
        Ok(db)
    }

    fn from_entries(entries: Vec<ChordEntry>) -> Result<Self, ChordError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            if normalize_chord_name(&entry.name) != entry.name {
                return Err(ChordError::Database(format!(
                    "chord name '{}' is not canonical (expected '{}')",
                    entry.name,
                    normalize_chord_name(&entry.name)
                )));
            }
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(ChordError::Database(format!(
                    "chord '{}' is defined more than once",
                    entry.name
                )));
            }
            if entry.fingerings.is_empty() {
                return Err(ChordError::Database(format!(
                    "chord '{}' has no fingerings",
                    entry.name
                )));
            }
            for fingering in &entry.fingerings {
                if let Some(difficulty) = fingering.difficulty {
                    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
                        return Err(ChordError::Database(format!(
                            "fingering '{}' has difficulty {} (must be {}-{})",
                            fingering.name, difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
                        )));
                    }
                }
            }
        }

        for entry in &entries {
            if let Some(missing) = entry
                .alternatives
                .iter()
                .find(|alt| !index.contains_key(alt.as_str()))
            {
                return Err(ChordError::Database(format!(
                    "chord '{}' lists unknown alternative '{}'",
                    entry.name, missing
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Look up a chord by name; `None` if it isn't in the table
    pub fn get_chord(&self, chord_name: &str) -> Option<&ChordEntry> {
        let key = normalize_chord_name(chord_name);
        let entry = self.index.get(&key).map(|&i| &self.entries[i]);
        if entry.is_none() {
            log::debug!("No database entry for '{}'", key);
        }
        entry
    }

    /// Every chord name, in table order
    pub fn all_chord_names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Every entry, in table order
    pub fn entries(&self) -> &[ChordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Chord names matching a partial query, for autocomplete.
    ///
    /// Case-insensitive substring match against either the query as typed or
    /// its normalized form, so "Gb" finds "F#". Flats are only respelled when
    /// capitalized ("Gb", not "gb"). Returns at most [`MAX_SEARCH_RESULTS`]
    /// names in table order; a blank query matches nothing.
    pub fn search_chords(&self, query: &str) -> Vec<&str> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let lower_query = query.to_lowercase();
        let normalized_query = normalize_chord_name(query).to_lowercase();

        self.entries
            .iter()
            .map(|entry| entry.name.as_str())
            .filter(|name| {
                let lower_name = name.to_lowercase();
                lower_name.contains(&lower_query) || lower_name.contains(&normalized_query)
            })
            .take(MAX_SEARCH_RESULTS)
            .collect()
    }
}
