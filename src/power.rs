//! Power chord shapes
//!
//! A power chord is the root plus its fifth (and optionally the octave), so
//! it has no major/minor quality and only depends on the root note. Shapes
//! are found by locating the root on the low E (6th) and A (5th) strings
//! within the first 12 frets and stacking the fifth two frets higher on the
//! next string.

use crate::note::Note;
use crate::types::{ChordDescriptor, Fingering, STRING_COUNT};

/// Highest fret searched for the root
const MAX_ROOT_FRET: u8 = 12;

/// Every power chord shape is easy
const POWER_CHORD_DIFFICULTY: u8 = 1;

type Row = [Option<u8>; STRING_COUNT];

const MUTED: Row = [None; STRING_COUNT];

/// A root string and the array index it occupies
#[derive(Debug, Clone, Copy)]
struct RootString {
    label: &'static str,
    index: usize,
    open: Note,
}

const SIXTH_STRING: RootString = RootString {
    label: "6th",
    index: 0,
    open: Note::E,
};

const FIFTH_STRING: RootString = RootString {
    label: "5th",
    index: 1,
    open: Note::A,
};

impl RootString {
    /// Notes at frets 0-12, stepping up chromatically from the open string
    fn positions(&self) -> [(u8, Note); MAX_ROOT_FRET as usize + 1] {
        std::array::from_fn(|fret| (fret as u8, self.open.transpose(fret as i32)))
    }

    /// Lowest fret on this string that sounds `root`
    fn fret_of(&self, root: Note) -> Option<u8> {
        self.positions()
            .iter()
            .find(|(_, note)| *note == root)
            .map(|(fret, _)| *fret)
    }

    /// Root + fifth (two strings), and root + fifth + octave (three strings)
    /// when the root is fretted
    fn shapes(&self, root: Note) -> Vec<Fingering> {
        let Some(fret) = self.fret_of(root) else {
            return Vec::new();
        };

        let mut shapes = Vec::with_capacity(2);
        let (mut frets, mut fingers) = (MUTED, MUTED);

        if fret == 0 {
            frets[self.index] = Some(0);
            frets[self.index + 1] = Some(0);
            fingers[self.index] = Some(0);
            fingers[self.index + 1] = Some(0);
        } else {
            frets[self.index] = Some(fret);
            frets[self.index + 1] = Some(fret + 2);
            fingers[self.index] = Some(1);
            fingers[self.index + 1] = Some(3);
        }
        shapes.push(power_fingering(
            format!("{}5 ({} string)", root, self.label),
            frets,
            fingers,
        ));

        if fret > 0 {
            frets[self.index + 2] = Some(fret + 2);
            fingers[self.index + 2] = Some(4);
            shapes.push(power_fingering(
                format!("{}5 ({} string - 3 strings)", root, self.label),
                frets,
                fingers,
            ));
        }

        shapes
    }
}

fn power_fingering(name: String, frets: Row, fingers: Row) -> Fingering {
    Fingering::new(name, POWER_CHORD_DIFFICULTY, frets, fingers)
}

/// Classic open-position shape for roots that have one
fn open_shape(root: Note) -> Option<Fingering> {
    let (frets, fingers) = match root {
        Note::E => (
            [Some(0), Some(2), Some(2), None, None, None],
            [Some(0), Some(1), Some(2), None, None, None],
        ),
        Note::A => (
            [None, Some(0), Some(2), Some(2), None, None],
            [None, Some(0), Some(1), Some(2), None, None],
        ),
        Note::D => (
            [None, None, Some(0), Some(2), None, None],
            [None, None, Some(0), Some(1), None, None],
        ),
        _ => return None,
    };
    Some(power_fingering(format!("{}5 (Open)", root), frets, fingers))
}

/// Every power chord shape for `root`.
///
/// Open-position shapes (E5, A5, D5) come first, then the 6th-string shapes,
/// then the 5th-string shapes.
///
/// # Example
/// ```
/// use chord_helper::{convert_to_power_chord, Note};
///
/// let shapes = convert_to_power_chord(Note::G);
/// assert_eq!(shapes[0].name, "G5 (6th string)");
/// assert_eq!(shapes[0].frets, [Some(3), Some(5), None, None, None, None]);
/// ```
pub fn convert_to_power_chord(root: Note) -> Vec<Fingering> {
    let mut positions = Vec::new();
    positions.extend(open_shape(root));
    positions.extend(SIXTH_STRING.shapes(root));
    positions.extend(FIFTH_STRING.shapes(root));
    positions
}

/// Power chords for a parsed chord; quality and extension are ignored
pub fn power_chords_for(chord: &ChordDescriptor) -> Vec<Fingering> {
    convert_to_power_chord(chord.root)
}
