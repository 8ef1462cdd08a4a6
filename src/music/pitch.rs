// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class engine.
//!
//! Provides the twelve pitch classes, step arithmetic over them, and
//! conversion between the sharp and flat spellings of the black keys.
//! All stepping happens in sharp space; flat spellings are only produced
//! when a generator emits a note for a flat key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// Semitone offset type
pub type Semitones = i32;

/// Sharp-preferred names in canonical order, starting at A
pub const SHARP_NAMES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Sharp black-key spelling paired with its flat equivalent
const SHARP_TO_FLAT: [(&str, &str); 5] = [
    ("A#", "Bb"),
    ("C#", "Db"),
    ("D#", "Eb"),
    ("F#", "Gb"),
    ("G#", "Ab"),
];

/// Every note name accepted as a key or chord root
pub const KEY_NAMES: [&str; 17] = [
    "A", "B", "C", "D", "E", "F", "G", "A#", "C#", "D#", "F#", "G#", "Ab", "Bb", "Db", "Eb",
    "Gb",
];

/// Pitch classes, indexed 0-11 from A
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    A,
    As, // A# / Bb
    B,
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
}

impl PitchClass {
    /// All pitch classes in canonical order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
    ];

    /// Index (0-11) in canonical order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at an index, reduced modulo 12
    pub fn from_index(index: usize) -> Self {
        PitchClass::ALL[index % 12]
    }

    /// Sharp-preferred name
    pub fn sharp_name(self) -> &'static str {
        SHARP_NAMES[self.index()]
    }

    /// Flat name, for the five black keys only
    pub fn flat_name(self) -> Option<&'static str> {
        let sharp = self.sharp_name();
        SHARP_TO_FLAT
            .iter()
            .find(|(s, _)| *s == sharp)
            .map(|(_, flat)| *flat)
    }

    /// True for the five classes with two spellings
    pub fn is_black_key(self) -> bool {
        self.flat_name().is_some()
    }

    /// Resolve any of the 17 accepted names
    pub fn from_name(name: &str) -> Result<Self> {
        let sharp = to_sharp_spelling(name)?;
        SHARP_NAMES
            .iter()
            .position(|n| *n == sharp)
            .map(PitchClass::from_index)
            .ok_or_else(|| TheoryError::InvalidNote(name.to_string()))
    }

    /// Move by a number of semitones, either direction
    pub fn transpose(self, semitones: Semitones) -> Self {
        let index = (self.index() as Semitones + semitones).rem_euclid(12);
        PitchClass::from_index(index as usize)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sharp_name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        PitchClass::from_name(s.trim())
    }
}

/// Check a name against the accepted vocabulary, returning the interned name
pub fn validate_note(note: &str) -> Result<&'static str> {
    KEY_NAMES
        .iter()
        .find(|n| **n == note)
        .copied()
        .ok_or_else(|| TheoryError::InvalidNote(note.to_string()))
}

/// True iff the second character is `#`
pub fn is_sharp_spelling(note: &str) -> bool {
    note.chars().nth(1) == Some('#')
}

/// True iff the second character is `b`
pub fn is_flat_spelling(note: &str) -> bool {
    note.chars().nth(1) == Some('b')
}

/// Convert a flat spelling to its sharp equivalent; other valid names are unchanged
pub fn to_sharp_spelling(note: &str) -> Result<&'static str> {
    if let Some((sharp, _)) = SHARP_TO_FLAT.iter().find(|(_, flat)| *flat == note) {
        return Ok(*sharp);
    }
    validate_note(note)
}

/// Convert a sharp black-key spelling to its flat equivalent; identity otherwise
pub fn to_flat_spelling(note: &str) -> &str {
    SHARP_TO_FLAT
        .iter()
        .find(|(sharp, _)| *sharp == note)
        .map(|(_, flat)| *flat)
        .unwrap_or(note)
}

/// Step a note by `semitones`, returning the sharp-spelled result
pub fn step_by(note: &str, semitones: Semitones) -> Result<&'static str> {
    let sharp = to_sharp_spelling(note)?;
    let index = SHARP_NAMES
        .iter()
        .position(|n| *n == sharp)
        .ok_or_else(|| TheoryError::InvalidNote(note.to_string()))?;
    let stepped = (index as Semitones + semitones).rem_euclid(12);
    Ok(SHARP_NAMES[stepped as usize])
}

/// One semitone up
pub fn half_step(note: &str) -> Result<&'static str> {
    step_by(note, 1)
}

/// Two semitones up
pub fn whole_step(note: &str) -> Result<&'static str> {
    step_by(note, 2)
}

/// Three semitones up
pub fn augmented_second(note: &str) -> Result<&'static str> {
    step_by(note, 3)
}
