// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord-name resolver.
//!
//! Splits names like "C#m7" into a root and a chord type. Suffixes are tried
//! from one table, longest first, so "m7" wins over "7" and "maj7" over "m7".

use std::fmt;
use std::str::FromStr;

use super::chord::{chord_notes, generate_chord, ChordType};
use crate::error::{Result, TheoryError};
use crate::music::pitch::validate_note;

/// Suffix table, ordered by descending suffix length
const SUFFIXES: [(&str, ChordType); 18] = [
    ("maj7", ChordType::Major7),
    ("min7", ChordType::Minor7),
    ("sus2", ChordType::Sus2),
    ("sus4", ChordType::Sus4),
    ("add9", ChordType::Add9),
    ("maj6", ChordType::Major6),
    ("maj9", ChordType::Major9),
    ("min6", ChordType::Minor6),
    ("min9", ChordType::Minor9),
    ("min", ChordType::Minor),
    ("m7", ChordType::Minor7),
    ("m6", ChordType::Minor6),
    ("m9", ChordType::Minor9),
    ("m", ChordType::Minor),
    ("7", ChordType::Dominant7),
    ("5", ChordType::Fifth),
    ("6", ChordType::Major6),
    ("", ChordType::Major),
];

/// A parsed chord name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordName {
    pub root: &'static str,
    pub chord_type: ChordType,
}

impl ChordName {
    pub fn new(root: &str, chord_type: ChordType) -> Result<Self> {
        Ok(Self {
            root: validate_note(root)?,
            chord_type,
        })
    }

    /// Member notes of the chord
    pub fn notes(&self) -> Result<Vec<String>> {
        chord_notes(self.root, self.chord_type)
    }

    /// Members concatenated without separators
    pub fn label(&self) -> Result<String> {
        generate_chord(self.root, self.chord_type)
    }
}

impl fmt::Display for ChordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.chord_type.suffix())
    }
}

impl FromStr for ChordName {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_chord_name(s)
    }
}

/// Resolve a chord name such as "Ebmaj7" or "F#min"
pub fn parse_chord_name(input: &str) -> Result<ChordName> {
    let input = input.trim();

    for (suffix, chord_type) in SUFFIXES.iter() {
        if let Some(root) = input.strip_suffix(*suffix) {
            if let Ok(root) = validate_note(root) {
                return Ok(ChordName {
                    root,
                    chord_type: *chord_type,
                });
            }
        }
    }

    if leading_root(input).is_some() {
        Err(TheoryError::UnrecognizedChordType(input.to_string()))
    } else {
        Err(TheoryError::InvalidNote(input.to_string()))
    }
}

/// Longest valid root at the start of the input
fn leading_root(input: &str) -> Option<&'static str> {
    [2, 1]
        .iter()
        .filter_map(|&len| input.get(..len))
        .find_map(|prefix| validate_note(prefix).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> (&'static str, ChordType) {
        let name = parse_chord_name(s).unwrap();
        (name.root, name.chord_type)
    }

    #[test]
    fn test_suffix_table_is_longest_first() {
        for pair in SUFFIXES.windows(2) {
            assert!(pair[0].0.len() >= pair[1].0.len());
        }
    }

    #[test]
    fn test_suffix_table_covers_every_suffix() {
        for chord_type in ChordType::ALL {
            for suffix in chord_type.suffixes() {
                assert!(
                    SUFFIXES.iter().any(|(s, t)| s == suffix && *t == chord_type),
                    "missing {:?}",
                    suffix
                );
            }
        }
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse("C"), ("C", ChordType::Major));
        assert_eq!(parse("Am"), ("A", ChordType::Minor));
        assert_eq!(parse("Amin"), ("A", ChordType::Minor));
        assert_eq!(parse("G7"), ("G", ChordType::Dominant7));
        assert_eq!(parse("D5"), ("D", ChordType::Fifth));
    }

    #[test]
    fn test_parse_overlapping_suffixes() {
        assert_eq!(parse("Cmaj7"), ("C", ChordType::Major7));
        assert_eq!(parse("Cm7"), ("C", ChordType::Minor7));
        assert_eq!(parse("Cmin7"), ("C", ChordType::Minor7));
        assert_eq!(parse("Cm6"), ("C", ChordType::Minor6));
        assert_eq!(parse("C6"), ("C", ChordType::Major6));
        assert_eq!(parse("Cmaj6"), ("C", ChordType::Major6));
        assert_eq!(parse("Cmaj9"), ("C", ChordType::Major9));
        assert_eq!(parse("Cm9"), ("C", ChordType::Minor9));
        assert_eq!(parse("Cadd9"), ("C", ChordType::Add9));
    }

    #[test]
    fn test_parse_accidental_roots() {
        assert_eq!(parse("C#m7"), ("C#", ChordType::Minor7));
        assert_eq!(parse("Ebmaj7"), ("Eb", ChordType::Major7));
        assert_eq!(parse("Bb"), ("Bb", ChordType::Major));
        assert_eq!(parse("F#sus4"), ("F#", ChordType::Sus4));
        assert_eq!(parse(" Abm "), ("Ab", ChordType::Minor));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_chord_name("Cdim"),
            Err(TheoryError::UnrecognizedChordType("Cdim".to_string()))
        );
        assert_eq!(
            parse_chord_name("Hm7"),
            Err(TheoryError::InvalidNote("Hm7".to_string()))
        );
        assert!(parse_chord_name("").is_err());
    }

    #[test]
    fn test_chord_name_output() {
        let name: ChordName = "Cm9".parse().unwrap();
        assert_eq!(name.to_string(), "Cm9");
        assert_eq!(name.label().unwrap(), "CEbGBbD");
        assert_eq!(name.notes().unwrap(), ["C", "Eb", "G", "Bb", "D"]);

        let dom = ChordName::new("C", ChordType::Dominant7).unwrap();
        assert_eq!(dom.label().unwrap(), "CEGBb");
        assert!(ChordName::new("Cb", ChordType::Major).is_err());
    }
}
