//! # Alternative Finder
//!
//! Finds easier ways to play a chord.
//!
//! ## Sources
//! For a requested chord the finder collects, in this order:
//! 1. **direct** - every fingering of the chord itself
//! 2. **alternative** - every fingering of the chords listed in its entry's
//!    `alternatives` (e.g. Fmaj7 for F)
//! 3. **simplified** - for extended or altered chords (G7, Bdim), the plain
//!    major/minor triad on the same root
//! 4. **open-version** - if the chord has both a barre shape (difficulty 4+)
//!    and an easy shape (difficulty 2 or less), the first easy one again,
//!    labelled "(easier)"
//!
//! The list is then stably sorted by difficulty, so equal difficulties keep
//! the order above, and fingerings with a fret pattern already seen are
//! dropped.
//!
//! ## Example
//! ```rust
//! use chord_helper::{find_alternatives, Source};
//!
//! let results = find_alternatives("F");
//! assert_eq!(results[0].difficulty(), 2);
//! assert!(results.iter().any(|r| r.source == Source::Direct));
//!
//! // Unknown or invalid names give an empty list, not an error
//! assert!(find_alternatives("H").is_empty());
//! ```

use crate::database::{normalize_chord_name, ChordDatabase};
use crate::parser::parse_chord;
use crate::types::{AlternativeResult, ChordDescriptor, ChordEntry, Fingering, Source};
use std::collections::HashSet;

/// Difficulty at or above which a fingering counts as a barre shape
const BARRE_DIFFICULTY: u8 = 4;

/// Difficulty at or below which a fingering counts as easy
const EASY_DIFFICULTY: u8 = 2;

/// Finds ranked alternatives against a chord table
#[derive(Debug, Clone, Copy)]
pub struct AlternativeFinder<'a> {
    db: &'a ChordDatabase,
}

impl Default for AlternativeFinder<'static> {
    fn default() -> Self {
        Self::new(ChordDatabase::builtin())
    }
}

impl<'a> AlternativeFinder<'a> {
    pub fn new(db: &'a ChordDatabase) -> Self {
        Self { db }
    }

    /// Every known way to play `chord_name`, easiest first, without
    /// duplicate fret patterns. Empty if the name doesn't parse.
    pub fn find_alternatives(&self, chord_name: &str) -> Vec<AlternativeResult> {
        let parsed = match parse_chord(chord_name) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::debug!("Not searching alternatives: {}", e);
                return Vec::new();
            }
        };

        let mut alternatives = Vec::new();

        let normalized = normalize_chord_name(chord_name);
        let entry = self.db.get_chord(&normalized);

        if let Some(entry) = entry {
            alternatives.extend(
                entry
                    .fingerings
                    .iter()
                    .map(|f| AlternativeResult::new(f.clone(), Source::Direct)),
            );

            for alt_name in &entry.alternatives {
                if let Some(alt) = self.db.get_chord(alt_name) {
                    alternatives.extend(alt.fingerings.iter().map(|f| {
                        AlternativeResult::new(f.with_name_suffix(" (alternative)"), Source::Alternative)
                    }));
                }
            }
        }

        alternatives.extend(self.generate_simplified_versions(&parsed, entry));

        // Stable: equal difficulties keep their source order
        alternatives.sort_by_key(AlternativeResult::difficulty);

        let unique = remove_duplicates(alternatives);
        log::debug!("Found {} alternatives for '{}'", unique.len(), normalized);
        unique
    }

    /// Simplified triads and easier open versions for a parsed chord
    pub fn generate_simplified_versions(
        &self,
        parsed: &ChordDescriptor,
        entry: Option<&ChordEntry>,
    ) -> Vec<AlternativeResult> {
        let mut simplified = Vec::new();

        // A complex chord can usually be replaced by its plain triad
        if parsed.is_complex() {
            if let Some(basic) = self.db.get_chord(&parsed.triad_name()) {
                simplified.extend(basic.fingerings.iter().map(|f| {
                    AlternativeResult::new(f.with_name_suffix(" (simplified)"), Source::Simplified)
                }));
            }
        }

        // A barre chord with an easy shape on file gets that shape highlighted
        if let Some(entry) = entry {
            if let Some(easy) = easier_version(&entry.fingerings) {
                simplified.push(AlternativeResult::new(
                    easy.with_name_suffix(" (easier)"),
                    Source::OpenVersion,
                ));
            }
        }

        simplified
    }
}

/// First easy fingering, if the list also contains a barre shape
fn easier_version(fingerings: &[Fingering]) -> Option<&Fingering> {
    let has_barre_shape = fingerings
        .iter()
        .any(|f| f.difficulty_or_default() >= BARRE_DIFFICULTY);
    if !has_barre_shape {
        return None;
    }
    fingerings
        .iter()
        .find(|f| f.difficulty_or_default() <= EASY_DIFFICULTY)
}

/// Drop results whose fret pattern already appeared earlier in the list
pub fn remove_duplicates(alternatives: Vec<AlternativeResult>) -> Vec<AlternativeResult> {
    let mut seen = HashSet::new();
    alternatives
        .into_iter()
        .filter(|alt| {
            let fresh = seen.insert(alt.fingering.frets);
            if !fresh {
                log::debug!("Dropping duplicate shape '{}'", alt.fingering.name);
            }
            fresh
        })
        .collect()
}

/// [`AlternativeFinder::find_alternatives`] against the built-in table
pub fn find_alternatives(chord_name: &str) -> Vec<AlternativeResult> {
    AlternativeFinder::default().find_alternatives(chord_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(results: &[AlternativeResult]) -> Vec<&str> {
        results.iter().map(|r| r.name()).collect()
    }

    fn assert_ranked_and_unique(results: &[AlternativeResult]) {
        for pair in results.windows(2) {
            assert!(pair[0].difficulty() <= pair[1].difficulty());
        }
        let patterns: HashSet<_> = results.iter().map(|r| r.fingering.frets).collect();
        assert_eq!(patterns.len(), results.len());
    }

    #[test]
    fn test_direct_and_alternative_fingerings() {
        let results = find_alternatives("C");
        assert_eq!(
            names(&results),
            vec!["C (Open)", "Cmaj7 (Open) (alternative)", "C (Barre)"]
        );
        assert_eq!(results[0].source, Source::Direct);
        assert_eq!(results[1].source, Source::Alternative);
        assert_ranked_and_unique(&results);
    }

    #[test]
    fn test_duplicates_keep_the_first_occurrence() {
        // F's own "Fmaj7 (Easier)" shape and the Fmaj7 entry share frets;
        // the direct one sorts first and survives.
        let results = find_alternatives("F");
        assert_eq!(
            names(&results),
            vec!["F (Easy - 3 strings)", "Fmaj7 (Easier)", "F (Barre)"]
        );
        assert!(results.iter().all(|r| r.source == Source::Direct));
        assert_ranked_and_unique(&results);
    }

    #[test]
    fn test_open_version_is_dropped_as_duplicate_of_direct_shape() {
        // Bm's easy shape is already a direct fingering with the same frets,
        // so the "(easier)" copy never survives deduplication.
        let results = find_alternatives("Bm");
        assert_eq!(results[0].name(), "Bm (Easy - 3 strings)");
        assert_eq!(results[0].source, Source::Direct);
        assert!(!results.iter().any(|r| r.source == Source::OpenVersion));
    }

    #[test]
    fn test_simplified_triad_for_extended_chord() {
        // G7 is in the table; G's fingerings come in as simplified versions
        let results = find_alternatives("G7");
        assert_eq!(results[0].name(), "G7 (Open)");
        assert!(results
            .iter()
            .any(|r| r.source == Source::Simplified && r.name() == "G (Open) (simplified)"));
        assert_ranked_and_unique(&results);
    }

    #[test]
    fn test_simplified_for_unknown_chord() {
        // Not in the table, but the triad is
        let results = find_alternatives("Dm9");
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.source == Source::Simplified));
        assert_eq!(results[0].name(), "Dm (Open) (simplified)");
    }

    #[test]
    fn test_diminished_falls_back_to_major_triad() {
        let results = find_alternatives("Bdim");
        assert_eq!(names(&results), vec!["B (Easy - 3 strings) (simplified)", "B (Barre) (simplified)"]);
    }

    #[test]
    fn test_flat_names_are_found() {
        let results = find_alternatives("Gb");
        assert_eq!(results[0].name(), "F# (Easy)");
        assert_ranked_and_unique(&results);
    }

    #[test]
    fn test_invalid_or_unknown_names() {
        assert!(find_alternatives("").is_empty());
        assert!(find_alternatives("H").is_empty());
        // Valid name, no entry, plain triad: nothing to offer
        assert!(find_alternatives("G#").is_empty());
    }

    #[test]
    fn test_easier_version_rules() {
        let db = ChordDatabase::builtin();
        assert_eq!(
            easier_version(&db.get_chord("F").unwrap().fingerings).map(|f| f.name.as_str()),
            Some("F (Easy - 3 strings)")
        );
        // C has a barre shape but its easy one is difficulty 1
        assert_eq!(
            easier_version(&db.get_chord("C").unwrap().fingerings).map(|f| f.name.as_str()),
            Some("C (Open)")
        );
        // C# only has the barre shape
        assert!(easier_version(&db.get_chord("C#").unwrap().fingerings).is_none());
        // Cmaj7 has no barre shape
        assert!(easier_version(&db.get_chord("Cmaj7").unwrap().fingerings).is_none());
    }

    #[test]
    fn test_generate_simplified_versions_tags() {
        let finder = AlternativeFinder::default();
        let parsed = parse_chord("F").unwrap();
        let entry = ChordDatabase::builtin().get_chord("F");
        let simplified = finder.generate_simplified_versions(&parsed, entry);
        assert_eq!(simplified.len(), 1);
        assert_eq!(simplified[0].source, Source::OpenVersion);
        assert_eq!(simplified[0].name(), "F (Easy - 3 strings) (easier)");
    }

    #[test]
    fn test_every_builtin_chord_is_ranked_and_unique() {
        for name in ChordDatabase::builtin().all_chord_names() {
            let results = find_alternatives(name);
            assert!(!results.is_empty(), "{}", name);
            assert_ranked_and_unique(&results);
        }
    }

    #[test]
    fn test_custom_database() {
        let yaml = r#"
- name: C
  root: C
  quality: major
  fingerings:
    - name: C (Barre)
      difficulty: 4
      frets:   [3, 3, 5, 5, 5, 3]
      fingers: [1, 1, 2, 3, 4, 1]
    - name: C (Easy)
      difficulty: 2
      frets:   [~, ~, 5, 5, 5, 3]
      fingers: [~, ~, 2, 3, 4, 1]
"#;
        let db = ChordDatabase::from_yaml(yaml).unwrap();
        let results = AlternativeFinder::new(&db).find_alternatives("C");
        assert_eq!(names(&results), vec!["C (Easy)", "C (Barre)"]);
    }
}
