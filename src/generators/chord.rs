// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord generator.
//!
//! Chords are not built from their own interval formulas. Each chord type is
//! a fixed list of degrees taken from the major or natural minor scale on the
//! same root, so a chord is always spelled the way its key's scale is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scale::generate_scale;
use crate::error::{Result, TheoryError};
use crate::music::scale::ScaleKind;

/// Scale a chord member is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Major,
    Minor,
}

impl Source {
    fn scale_kind(self) -> ScaleKind {
        match self {
            Source::Major => ScaleKind::Major,
            Source::Minor => ScaleKind::NaturalMinor,
        }
    }
}

/// One chord member: a 0-based index into a generated scale
pub type Member = (Source, usize);

use self::Source::{Major as Maj, Minor as Min};

const MAJOR: [Member; 3] = [(Maj, 0), (Maj, 2), (Maj, 4)];
const MINOR: [Member; 3] = [(Min, 0), (Min, 2), (Min, 4)];
const MAJOR7: [Member; 4] = [(Maj, 0), (Maj, 2), (Maj, 4), (Maj, 6)];
const MAJOR9: [Member; 5] = [(Maj, 0), (Maj, 2), (Maj, 4), (Maj, 6), (Maj, 1)];
const MINOR7: [Member; 4] = [(Min, 0), (Min, 2), (Min, 4), (Min, 6)];
const MINOR9: [Member; 5] = [(Min, 0), (Min, 2), (Min, 4), (Min, 6), (Maj, 1)];
const SUS2: [Member; 3] = [(Maj, 0), (Maj, 1), (Maj, 4)];
const SUS4: [Member; 3] = [(Maj, 0), (Maj, 3), (Maj, 4)];
const DOMINANT7: [Member; 4] = [(Maj, 0), (Maj, 2), (Maj, 4), (Min, 6)];
const FIFTH: [Member; 2] = [(Maj, 0), (Maj, 4)];
const ADD9: [Member; 4] = [(Maj, 0), (Maj, 2), (Maj, 4), (Maj, 1)];
const MAJOR6: [Member; 4] = [(Maj, 0), (Maj, 2), (Maj, 4), (Maj, 5)];
const MINOR6: [Member; 4] = [(Min, 0), (Min, 2), (Min, 4), (Maj, 5)];

/// Supported chord types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    Major,
    Minor,
    Major7,
    Major9,
    Minor7,
    Minor9,
    Sus2,
    Sus4,
    Dominant7,
    Fifth,
    Add9,
    Major6,
    Minor6,
}

impl ChordType {
    /// All chord types
    pub const ALL: [ChordType; 13] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Major7,
        ChordType::Major9,
        ChordType::Minor7,
        ChordType::Minor9,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Dominant7,
        ChordType::Fifth,
        ChordType::Add9,
        ChordType::Major6,
        ChordType::Minor6,
    ];

    /// Scale degrees making up this chord, in emission order
    pub fn members(self) -> &'static [Member] {
        match self {
            ChordType::Major => &MAJOR,
            ChordType::Minor => &MINOR,
            ChordType::Major7 => &MAJOR7,
            ChordType::Major9 => &MAJOR9,
            ChordType::Minor7 => &MINOR7,
            ChordType::Minor9 => &MINOR9,
            ChordType::Sus2 => &SUS2,
            ChordType::Sus4 => &SUS4,
            ChordType::Dominant7 => &DOMINANT7,
            ChordType::Fifth => &FIFTH,
            ChordType::Add9 => &ADD9,
            ChordType::Major6 => &MAJOR6,
            ChordType::Minor6 => &MINOR6,
        }
    }

    /// Chord-name suffixes, canonical first
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            ChordType::Major => &[""],
            ChordType::Minor => &["m", "min"],
            ChordType::Major7 => &["maj7"],
            ChordType::Major9 => &["maj9"],
            ChordType::Minor7 => &["m7", "min7"],
            ChordType::Minor9 => &["m9", "min9"],
            ChordType::Sus2 => &["sus2"],
            ChordType::Sus4 => &["sus4"],
            ChordType::Dominant7 => &["7"],
            ChordType::Fifth => &["5"],
            ChordType::Add9 => &["add9"],
            ChordType::Major6 => &["6", "maj6"],
            ChordType::Minor6 => &["m6", "min6"],
        }
    }

    /// Canonical suffix, e.g. "m7"
    pub fn suffix(self) -> &'static str {
        self.suffixes()[0]
    }

    /// Type name as used in config and on the command line
    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Major7 => "major7",
            ChordType::Major9 => "major9",
            ChordType::Minor7 => "minor7",
            ChordType::Minor9 => "minor9",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Dominant7 => "dominant7",
            ChordType::Fifth => "fifth",
            ChordType::Add9 => "add9",
            ChordType::Major6 => "major6",
            ChordType::Minor6 => "minor6",
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChordType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        ChordType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| TheoryError::UnrecognizedChordType(s.to_string()))
    }
}

/// Member notes of a chord, in order
pub fn chord_notes(root: &str, chord_type: ChordType) -> Result<Vec<String>> {
    let major = generate_scale(root, Source::Major.scale_kind())?;
    let minor = generate_scale(root, Source::Minor.scale_kind())?;

    let notes: Vec<String> = chord_type
        .members()
        .iter()
        .map(|&(source, index)| match source {
            Source::Major => major[index].clone(),
            Source::Minor => minor[index].clone(),
        })
        .collect();

    debug!(root, chord = %chord_type, notes = ?notes, "generated chord");
    Ok(notes)
}

/// Chord members concatenated without separators, e.g. "CEGBb"
///
/// Multi-character names make the result ambiguous to split back apart;
/// use [`chord_notes`] when the boundaries matter.
pub fn generate_chord(root: &str, chord_type: ChordType) -> Result<String> {
    Ok(chord_notes(root, chord_type)?.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::pitch::KEY_NAMES;

    #[test]
    fn test_c_chords() {
        let expected = [
            (ChordType::Major, "CEG"),
            (ChordType::Minor, "CEbG"),
            (ChordType::Major7, "CEGB"),
            (ChordType::Major9, "CEGBD"),
            (ChordType::Minor7, "CEbGBb"),
            (ChordType::Minor9, "CEbGBbD"),
            (ChordType::Sus2, "CDG"),
            (ChordType::Sus4, "CFG"),
            (ChordType::Dominant7, "CEGBb"),
            (ChordType::Fifth, "CG"),
            (ChordType::Add9, "CEGD"),
            (ChordType::Major6, "CEGA"),
            (ChordType::Minor6, "CEbGA"),
        ];
        for (chord_type, chord) in expected {
            assert_eq!(generate_chord("C", chord_type).unwrap(), chord, "{}", chord_type);
        }
    }

    #[test]
    fn test_minor9_members() {
        assert_eq!(
            chord_notes("C", ChordType::Minor9).unwrap(),
            ["C", "Eb", "G", "Bb", "D"]
        );
    }

    #[test]
    fn test_sharp_key_chords() {
        assert_eq!(chord_notes("E", ChordType::Major).unwrap(), ["E", "G#", "B"]);
        assert_eq!(chord_notes("A", ChordType::Dominant7).unwrap(), ["A", "C#", "E", "G"]);
        assert_eq!(
            chord_notes("F#", ChordType::Major7).unwrap(),
            ["F#", "A#", "C#", "E#"]
        );
    }

    #[test]
    fn test_flat_key_chords_are_flat() {
        assert_eq!(chord_notes("Bb", ChordType::Major).unwrap(), ["Bb", "D", "F"]);
        assert_eq!(chord_notes("Eb", ChordType::Minor).unwrap(), ["Eb", "Gb", "Bb"]);
        assert_eq!(generate_chord("F", ChordType::Sus4).unwrap(), "FBbC");
    }

    #[test]
    fn test_member_counts() {
        for key in KEY_NAMES {
            for chord_type in ChordType::ALL {
                let notes = chord_notes(key, chord_type).unwrap();
                assert!((2..=5).contains(&notes.len()));
                assert_eq!(notes[0], key);
            }
        }
    }

    #[test]
    fn test_members_never_use_octave_index() {
        for chord_type in ChordType::ALL {
            assert!(chord_type.members().iter().all(|&(_, i)| i < 7));
        }
    }

    #[test]
    fn test_invalid_root() {
        assert_eq!(
            generate_chord("Q", ChordType::Major),
            Err(TheoryError::InvalidNote("Q".to_string()))
        );
    }

    #[test]
    fn test_chord_type_from_str() {
        assert_eq!("dominant7".parse::<ChordType>(), Ok(ChordType::Dominant7));
        assert_eq!("Minor 9".parse::<ChordType>(), Ok(ChordType::Minor9));
        assert_eq!(
            "diminished".parse::<ChordType>(),
            Err(TheoryError::UnrecognizedChordType("diminished".to_string()))
        );
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(ChordType::Major.suffix(), "");
        assert_eq!(ChordType::Minor7.suffix(), "m7");
        assert_eq!(ChordType::Major6.suffixes(), &["6", "maj6"]);
    }
}
