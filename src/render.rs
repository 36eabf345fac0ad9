//! Text rendering of fingerings
//!
//! Produces plain-text chord diagrams and tab notation for terminal output.
//! Rows run from the low E string at the top to the high e string at the
//! bottom, the same order as the fingering arrays.
//!
//! ```text
//! E x ||---|---|---|---|---|
//! A   ||---|---|-2-|---|---|
//! D   ||---|-1-|---|---|---|
//! G o ||---|---|---|---|---|
//! B   ||-3-|---|---|---|---|
//! e o ||---|---|---|---|---|
//! ```

use crate::types::{AlternativeResult, Fingering};

/// String labels in array order (low E first)
pub const STRING_NAMES: [&str; 6] = ["E", "A", "D", "G", "B", "e"];

/// Display options for [`render_diagram`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print the starting fret above diagrams that don't start at the nut
    pub show_fret_numbers: bool,
    /// Maximum number of fret columns
    pub max_frets: u8,
    /// Append tab notation below the diagram
    pub show_tab_notation: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_fret_numbers: true,
            max_frets: 5,
            show_tab_notation: false,
        }
    }
}

/// Tab notation, one line per string.
///
/// # Example
/// ```
/// use chord_helper::{render::tab_notation, Fingering};
///
/// let em = Fingering::new(
///     "Em",
///     1,
///     [Some(0), Some(2), Some(2), Some(0), Some(0), Some(0)],
///     [Some(0), Some(2), Some(3), Some(0), Some(0), Some(0)],
/// );
/// assert_eq!(tab_notation(&em), "E|---0\nA|---2\nD|---2\nG|---0\nB|---0\ne|---0");
/// ```
pub fn tab_notation(fingering: &Fingering) -> String {
    STRING_NAMES
        .iter()
        .zip(fingering.frets.iter())
        .map(|(label, fret)| match fret {
            Some(fret) => format!("{}|---{}", label, fret),
            None => format!("{}|---", label),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First and last fret of the window a diagram shows.
///
/// The window starts one fret below the lowest sounding fret (at the nut if
/// any string is open) and ends two frets past the highest, capped at
/// `max_frets` columns.
fn fret_window(fingering: &Fingering, max_frets: u8) -> (u8, u8) {
    let sounding = || fingering.frets.iter().flatten().copied();
    let min_fret = sounding().min().unwrap_or(0);
    let max_fret = sounding().max().unwrap_or(0);

    let start = min_fret.saturating_sub(1);
    let end = start
        .saturating_add(max_frets.max(1))
        .min(max_fret.saturating_add(2));
    (start, end)
}

/// Text chord diagram, followed by tab notation if requested
pub fn render_diagram(fingering: &Fingering, options: &RenderOptions) -> String {
    let (start, end) = fret_window(fingering, options.max_frets);
    let first_column = start + 1;
    let mut lines = Vec::new();

    if options.show_fret_numbers && start > 0 {
        lines.push(format!("     {}fr", first_column));
    }

    let nut = if start == 0 { "||" } else { "|" };

    for (i, label) in STRING_NAMES.iter().enumerate() {
        let fret = fingering.frets[i];
        let marker = match fret {
            None => 'x',
            Some(0) => 'o',
            Some(_) => ' ',
        };

        let mut row = format!("{} {} {}", label, marker, nut);
        for column in first_column..=end {
            let cell = match (fret, fingering.fingers[i]) {
                (Some(f), Some(finger)) if f == column && finger > 0 => {
                    char::from_digit(finger as u32, 10).unwrap_or('*')
                }
                (Some(f), _) if f == column => '*',
                _ => '-',
            };
            row.push('-');
            row.push(cell);
            row.push_str("-|");
        }
        lines.push(row);
    }

    if options.show_tab_notation {
        lines.push(String::new());
        lines.push(tab_notation(fingering));
    }

    lines.join("\n")
}

/// A titled card for one suggestion: name, difficulty, source and diagram
pub fn render_card(result: &AlternativeResult, options: &RenderOptions) -> String {
    format!(
        "{}  [difficulty {}, {}]\n{}",
        result.name(),
        result.difficulty(),
        result.source.as_str(),
        render_diagram(&result.fingering, options)
    )
}
