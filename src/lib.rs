pub mod api;
pub mod database;
pub mod difficulty;
pub mod error;
pub mod finder;
pub mod note;
pub mod parser;
pub mod power;
pub mod render;
pub mod settings;
pub mod strum;
pub mod types;

pub use api::*;
pub use database::{normalize_chord_name, ChordDatabase};
pub use difficulty::{calculate_difficulty, fret_span, has_barre};
pub use error::*;
pub use finder::AlternativeFinder;
pub use note::Note;
pub use parser::{intervals, is_valid_chord};
pub use power::convert_to_power_chord;
pub use render::{render_diagram, tab_notation, RenderOptions};
pub use settings::Settings;
pub use strum::{plan_strum, StrumNote};
pub use types::*;

/// Name used for the config directory
pub const APP_NAME: &str = "chord-helper";
