//! # Error Types
//!
//! This module defines all error types for the chord helper.
//!
//! "Not found" is never an error here: looking up a chord that isn't in the
//! database returns `None`, and finding alternatives for it returns an empty
//! list. Errors are reserved for input that can't be understood at all, for
//! a suggestion request that produced nothing, and for bad data files.
//!
//! ## Error Types
//! - `EmptyInput` - The chord name was empty or only whitespace
//! - `InvalidRoot` - The chord name doesn't start with one of the 12 notes
//! - `NoFingerings` - The name parsed, but no fingering could be produced
//! - `Database` - A chord table file is malformed
//! - `Settings` - The settings file can't be read or written
//!
//! ## Usage
//! ```rust
//! use chord_helper::{suggest, ChordError};
//!
//! match suggest("H7", false) {
//!     Ok(fingerings) => println!("{} fingerings", fingerings.len()),
//!     Err(ChordError::InvalidRoot { input, .. }) => {
//!         eprintln!("Invalid chord name: \"{}\"", input);
//!     }
//!     Err(ChordError::NoFingerings { chord }) => {
//!         eprintln!("No fingerings found for \"{}\"", chord);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    /// The chord name was empty.
    ///
    /// # Example
    /// ```
    /// # use chord_helper::ChordError;
    /// assert_eq!(ChordError::EmptyInput.to_string(), "Please enter a chord name");
    /// ```
    #[error("Please enter a chord name")]
    EmptyInput,

    /// The root note isn't one of the 12 pitch classes.
    ///
    /// # Example
    /// ```
    /// # use chord_helper::ChordError;
    /// let err = ChordError::InvalidRoot {
    ///     input: "H7".to_string(),
    ///     root: "H".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid chord name: \"H7\" (unknown root note 'H')");
    /// ```
    #[error("Invalid chord name: \"{input}\" (unknown root note '{root}')")]
    InvalidRoot { input: String, root: String },

    /// The chord name is valid but nothing could be suggested for it.
    ///
    /// Kept distinct from the parse errors so callers can tell
    /// "no fingerings" apart from "invalid name".
    #[error("No fingerings found for \"{chord}\"")]
    NoFingerings { chord: String },

    /// A chord table is malformed (bad YAML, duplicate names, dangling references).
    #[error("Invalid chord database: {0}")]
    Database(String),

    /// The settings file couldn't be read or written.
    #[error("Settings error: {0}")]
    Settings(String),
}

impl ChordError {
    /// True for the errors caused by an unparseable chord name.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ChordError::EmptyInput | ChordError::InvalidRoot { .. })
    }
}
