//! Fingering difficulty heuristics
//!
//! Pure functions over a [`Fingering`]. Database fingerings carry a
//! hand-assigned difficulty, so [`calculate_difficulty`] is only needed for
//! shapes built on the fly.

use crate::types::Fingering;
use std::collections::HashSet;

/// Lowest and highest difficulty scores
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Span (in frets) a hand covers without stretching
const COMFORTABLE_SPAN: u8 = 3;

/// True if one finger presses two or more strings at the same fret.
///
/// # Example
/// ```
/// use chord_helper::{has_barre, Fingering};
///
/// let f_barre = Fingering::new(
///     "F (Barre)",
///     4,
///     [Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)],
///     [Some(1), Some(3), Some(4), Some(2), Some(1), Some(1)],
/// );
/// assert!(has_barre(&f_barre));
/// ```
pub fn has_barre(fingering: &Fingering) -> bool {
    let mut seen = HashSet::new();

    for (fret, finger) in fingering.frets.iter().zip(fingering.fingers.iter()) {
        let (Some(fret), Some(finger)) = (fret, finger) else {
            continue;
        };
        if *fret == 0 {
            continue;
        }
        if !seen.insert((*finger, *fret)) {
            return true;
        }
    }

    false
}

/// Distance between the highest and lowest pressed frets, if any are pressed
pub fn fret_span(fingering: &Fingering) -> Option<u8> {
    let min = fingering.pressed_frets().min()?;
    let max = fingering.pressed_frets().max()?;
    Some(max - min)
}

/// Score how hard a fingering is to play, from 1 (easy) to 5 (hard).
///
/// - +0.5 per pressed string
/// - +2 for a barre
/// - +0.5 per fret of span beyond 3
/// - -0.3 per open string
///
/// The total is rounded and clamped to 1..=5.
pub fn calculate_difficulty(fingering: &Fingering) -> u8 {
    let pressed = fingering.pressed_frets().count() as f64;
    let mut score = pressed * 0.5;

    if has_barre(fingering) {
        score += 2.0;
    }

    if let Some(span) = fret_span(fingering) {
        if span > COMFORTABLE_SPAN {
            score += (span - COMFORTABLE_SPAN) as f64 * 0.5;
        }
    }

    score -= fingering.open_string_count() as f64 * 0.3;

    score
        .round()
        .clamp(MIN_DIFFICULTY as f64, MAX_DIFFICULTY as f64) as u8
}
