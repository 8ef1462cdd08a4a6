// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enharmonic-aware scale and chord spelling.
//!
//! Given a root such as "Bb" or "F#", generates correctly spelled major,
//! natural minor, harmonic minor and melodic minor scales, and chords built
//! from their degrees.
//!
//! ```
//! use enharmonic::{generate_chord, generate_scale, ChordType, ScaleKind};
//!
//! let notes = generate_scale("C", ScaleKind::NaturalMinor).unwrap();
//! assert_eq!(notes, ["C", "D", "Eb", "F", "G", "Ab", "Bb", "C"]);
//!
//! assert_eq!(generate_chord("C", ChordType::Dominant7).unwrap(), "CEGBb");
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod music;
pub mod ui;

pub use error::{Result, TheoryError};
pub use generators::{
    chord_notes, generate_chord, generate_scale, parse_chord_name, ChordName, ChordType, Scale,
    ScaleRegistry,
};
pub use music::{PitchClass, ScaleKind, SpellingFamily, Step, KEY_NAMES};
