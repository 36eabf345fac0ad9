//! Integration tests for the chord helper
//!
//! Exercises the public API end to end: parsing, database lookups, ranking
//! alternatives, power chords and the rendering collaborators.

use chord_helper::{
    calculate_difficulty, find_alternatives, get_power_chords, has_barre, lookup_chord,
    normalize_chord_name, parse_chord, plan_strum, render_diagram, search_chord_names, suggest,
    tab_notation, ChordDatabase, ChordError, Extension, Fingering, Note, Quality, RenderOptions,
    Settings, Source,
};
use std::collections::HashSet;

#[test]
fn test_flats_normalize_to_sharps() {
    let pairs = [("Db", "C#"), ("Eb", "D#"), ("Gb", "F#"), ("Ab", "G#"), ("Bb", "A#")];
    for (flat, sharp) in pairs {
        assert_eq!(normalize_chord_name(flat), sharp);
        assert_eq!(normalize_chord_name(&format!("{}m7", flat)), format!("{}m7", sharp));
    }
}

#[test]
fn test_normalize_is_idempotent() {
    for name in ["Db", " Ebmaj7", "Am", "Gb/Bb", "", "Hm", "Bbsus4 "] {
        let once = normalize_chord_name(name);
        assert_eq!(normalize_chord_name(&once), once, "{:?}", name);
    }
}

#[test]
fn test_every_fingering_covers_six_strings() {
    // Rows are fixed-size arrays; check the values are sane too
    for entry in ChordDatabase::builtin().entries() {
        assert!(!entry.fingerings.is_empty(), "{}", entry.name);
        for fingering in &entry.fingerings {
            assert_eq!(fingering.strings, [6, 5, 4, 3, 2, 1], "{}", fingering.name);
            assert!(fingering.frets.iter().flatten().all(|f| *f <= 24));
            let difficulty = fingering.difficulty.unwrap_or(5);
            assert!((1..=5).contains(&difficulty), "{}", fingering.name);
        }
    }
}

#[test]
fn test_alternatives_are_ranked_and_unique() {
    let names = ["C", "F", "Bm", "G7", "Dm9", "Gbmaj7", "Bdim", "Asus4", "Em/B"];
    for name in names {
        let results = find_alternatives(name);
        for pair in results.windows(2) {
            assert!(pair[0].difficulty() <= pair[1].difficulty(), "{}", name);
        }
        let patterns: HashSet<_> = results.iter().map(|r| r.fingering.frets).collect();
        assert_eq!(patterns.len(), results.len(), "{}", name);
    }
}

#[test]
fn test_barre_detection() {
    let barre = Fingering::new(
        "C (Barre)",
        4,
        [Some(3), Some(3), Some(5), Some(5), Some(5), Some(3)],
        [Some(1), Some(1), Some(2), Some(3), Some(4), Some(1)],
    );
    let open = Fingering::new(
        "E (Open)",
        1,
        [Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)],
        [Some(0), Some(2), Some(3), Some(1), Some(0), Some(0)],
    );
    assert!(has_barre(&barre));
    assert!(!has_barre(&open));
}

#[test]
fn test_parse_examples() {
    let chord = parse_chord("C#m7").unwrap();
    assert_eq!(chord.root, Note::CSharp);
    assert_eq!(chord.quality, Quality::Minor);
    assert_eq!(chord.extension, Some(Extension::Number(7)));

    let chord = parse_chord("Dbmaj7").unwrap();
    assert_eq!(chord.root, Note::CSharp);
    assert_eq!(chord.quality, Quality::Major);
    assert_eq!(chord.extension, Some(Extension::Number(7)));

    assert_eq!(parse_chord(""), Err(ChordError::EmptyInput));
    assert!(matches!(parse_chord("H"), Err(ChordError::InvalidRoot { .. })));
}

#[test]
fn test_power_chords_for_e() {
    let shapes = get_power_chords(&parse_chord("E").unwrap());
    assert_eq!(shapes[0].name, "E5 (Open)");
    assert_eq!(shapes[0].frets, [Some(0), Some(2), Some(2), None, None, None]);
}

#[test]
fn test_difficulty_is_clamped() {
    let easy = Fingering::new("open", 1, [Some(0); 6], [Some(0); 6]);
    assert_eq!(calculate_difficulty(&easy), 1);

    let stretch = Fingering::new(
        "stretch",
        5,
        [Some(1), Some(1), Some(8), Some(9), Some(10), Some(1)],
        [Some(1), Some(1), Some(2), Some(3), Some(4), Some(1)],
    );
    assert_eq!(calculate_difficulty(&stretch), 5);
}

#[test]
fn test_search() {
    let names = search_chord_names("c");
    assert!(!names.is_empty());
    assert!(names.len() <= 10);
    assert!(names.iter().all(|n| n.to_lowercase().contains('c')));

    assert!(search_chord_names("").is_empty());
    // Flat spelling finds the sharp entry
    assert!(search_chord_names("Db").contains(&"C#"));
}

#[test]
fn test_lookup() {
    let entry = lookup_chord("Am").unwrap();
    assert_eq!(entry.root, Note::A);
    assert_eq!(entry.quality, Quality::Minor);
    assert!(lookup_chord("Xyz").is_none());
}

#[test]
fn test_suggest_full_flow() {
    let results = suggest("Fmaj7", false).unwrap();
    assert_eq!(results[0].source, Source::Direct);
    assert!(results.iter().any(|r| r.source == Source::PowerChord));

    let power_only = suggest("Fmaj7", true).unwrap();
    assert!(power_only.iter().all(|r| r.source == Source::PowerChord));

    assert!(suggest("  ", false).unwrap_err().is_parse_error());
}

#[test]
fn test_suggestions_serialize_as_json() {
    let results = suggest("Em", false).unwrap();
    let json = serde_json::to_value(&results).unwrap();
    let first = &json[0];
    assert_eq!(first["name"], "Em (Open)");
    assert_eq!(first["source"], "direct");
    assert_eq!(first["frets"][0], 0);
    assert_eq!(first["strings"][0], 6);
}

#[test]
fn test_render_and_strum_easiest_fingering() {
    let results = suggest("G", false).unwrap();
    let easiest = &results[0].fingering;

    let tab = tab_notation(easiest);
    assert_eq!(tab.lines().count(), 6);

    let options = RenderOptions {
        show_tab_notation: true,
        ..RenderOptions::default()
    };
    assert!(render_diagram(easiest, &options).ends_with(&tab));

    let notes = plan_strum(easiest);
    let sounding = easiest.frets.iter().filter(|f| f.is_some()).count();
    assert_eq!(notes.len(), sounding);
}

#[test]
fn test_settings_drive_power_chord_mode() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("settings.yaml");

    let settings = Settings {
        power_chord_mode: true,
        ..Settings::default()
    };
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    let results = suggest("A", loaded.power_chord_mode).unwrap();
    assert_eq!(results[0].name(), "A5 (Open)");
}

#[test]
fn test_custom_table_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("chords.yaml");
    std::fs::write(
        &path,
        r#"
- name: E
  root: E
  quality: major
  fingerings:
    - name: E (Open)
      difficulty: 1
      frets:   [0, 2, 2, 1, 0, 0]
      fingers: [0, 2, 3, 1, 0, 0]
"#,
    )
    .unwrap();

    let db = ChordDatabase::load(&path).unwrap();
    assert_eq!(db.all_chord_names(), vec!["E"]);
    assert!(db.get_chord("C").is_none());
}
