//! Strum planning
//!
//! Turns a fingering into the timed notes of a low-to-high strum. Nothing is
//! played here; a front end with audio output schedules the returned notes.

use crate::types::Fingering;
use serde::Serialize;

/// Delay between consecutive strings, in seconds
pub const STRUM_DELAY: f64 = 0.03;

/// How long each string rings, in seconds
pub const NOTE_DURATION: f64 = 0.8;

/// One sounding string in a strum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrumNote {
    /// String number, 6 (low E) to 1 (high e)
    pub string: u8,
    pub fret: u8,
    /// Pitch in Hz
    pub frequency: f64,
    /// Seconds after the strum starts
    pub onset: f64,
    pub duration: f64,
}

/// Open-string pitch in standard tuning, by string number
pub fn open_string_frequency(string: u8) -> Option<f64> {
    match string {
        6 => Some(82.41),
        5 => Some(110.00),
        4 => Some(146.83),
        3 => Some(196.00),
        2 => Some(246.94),
        1 => Some(329.63),
        _ => None,
    }
}

/// Pitch of `string` held at `fret`, one semitone per fret
pub fn note_frequency(string: u8, fret: u8) -> Option<f64> {
    open_string_frequency(string).map(|open| open * 2f64.powf(f64::from(fret) / 12.0))
}

/// Timed notes for strumming `fingering` from the low string up.
///
/// Muted strings are skipped, so onsets are spaced by sounding string.
///
/// # Example
/// ```
/// use chord_helper::{lookup_chord, strum::plan_strum};
///
/// let c = &lookup_chord("C").unwrap().fingerings[0];
/// let notes = plan_strum(c);
/// assert_eq!(notes.len(), 5);
/// assert_eq!(notes[0].string, 5);
/// assert_eq!(notes[0].onset, 0.0);
/// ```
pub fn plan_strum(fingering: &Fingering) -> Vec<StrumNote> {
    fingering
        .strings
        .iter()
        .zip(fingering.frets.iter())
        .filter_map(|(&string, fret)| {
            let fret = (*fret)?;
            let frequency = note_frequency(string, fret)?;
            Some((string, fret, frequency))
        })
        .enumerate()
        .map(|(i, (string, fret, frequency))| StrumNote {
            string,
            fret,
            frequency,
            onset: i as f64 * STRUM_DELAY,
            duration: NOTE_DURATION,
        })
        .collect()
}

/// Seconds from the first onset until the last note stops; 0 for no notes
pub fn strum_length(notes: &[StrumNote]) -> f64 {
    notes
        .iter()
        .map(|note| note.onset + note.duration)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_fret_raises_by_semitones() {
        assert_eq!(note_frequency(5, 0), Some(110.0));
        assert!(close(note_frequency(5, 12).unwrap(), 220.0));
        // A string, 5th fret is D3
        assert!((note_frequency(5, 5).unwrap() - 146.83).abs() < 0.01);
        assert_eq!(note_frequency(7, 0), None);
    }

    #[test]
    fn test_muted_strings_are_skipped() {
        let shape = Fingering::new(
            "D",
            1,
            [None, None, Some(0), Some(2), Some(3), Some(2)],
            [None, None, Some(0), Some(1), Some(3), Some(2)],
        );
        let notes = plan_strum(&shape);
        let strings: Vec<_> = notes.iter().map(|n| n.string).collect();
        assert_eq!(strings, vec![4, 3, 2, 1]);
        assert!(close(notes[0].frequency, 146.83));
        assert!(close(notes[1].onset, 0.03));
        assert!(close(notes[3].onset, 0.09));
        assert!(notes.iter().all(|n| n.duration == NOTE_DURATION));
    }

    #[test]
    fn test_strum_length() {
        let shape = Fingering::new(
            "E5",
            1,
            [Some(0), Some(2), Some(2), None, None, None],
            [Some(0), Some(1), Some(2), None, None, None],
        );
        let notes = plan_strum(&shape);
        assert!(close(strum_length(&notes), 2.0 * STRUM_DELAY + NOTE_DURATION));
        assert_eq!(strum_length(&[]), 0.0);
    }

    #[test]
    fn test_all_muted_plans_nothing() {
        let shape = Fingering::new("silent", 1, [None; 6], [None; 6]);
        assert!(plan_strum(&shape).is_empty());
    }
}
