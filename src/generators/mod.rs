// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale and chord generators.
//!
//! Everything here is a pure function of its inputs and the fixed tables in
//! [`crate::music`]; generating the same scale or chord twice always yields
//! the same notes.

pub mod chord;
pub mod chord_name;
pub mod scale;

pub use chord::{chord_notes, generate_chord, ChordType};
pub use chord_name::{parse_chord_name, ChordName};
pub use scale::{generate_custom, generate_scale, Scale, ScaleRegistry};
