// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale formulas and spelling families.
//!
//! Provides the step vocabulary (half, whole, augmented second), the four
//! built-in scale kinds with their formulas, and user-defined formulas
//! written in step symbols.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::music::pitch::{is_flat_spelling, Semitones};

/// One interval step of a scale formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// One semitone ("H")
    Half,
    /// Two semitones ("W")
    Whole,
    /// Three semitones ("T")
    AugmentedSecond,
}

impl Step {
    /// Semitone size of this step
    pub fn semitones(self) -> Semitones {
        match self {
            Step::Half => 1,
            Step::Whole => 2,
            Step::AugmentedSecond => 3,
        }
    }

    /// Parse a formula symbol
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'H' => Ok(Step::Half),
            'W' => Ok(Step::Whole),
            'T' => Ok(Step::AugmentedSecond),
            other => Err(TheoryError::InvalidFormulaStep(other)),
        }
    }

    /// Formula symbol for this step
    pub fn symbol(self) -> char {
        match self {
            Step::Half => 'H',
            Step::Whole => 'W',
            Step::AugmentedSecond => 'T',
        }
    }
}

/// Parse a formula such as "WWHWWWH"; whitespace and commas are ignored
pub fn parse_formula(symbols: &str) -> Result<Vec<Step>> {
    symbols
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(Step::from_symbol)
        .collect()
}

/// Render a formula back to its symbols
pub fn formula_symbols(steps: &[Step]) -> String {
    steps.iter().map(|s| s.symbol()).collect()
}

/// Which key-signature rule decides sharp or flat spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellingFamily {
    Major,
    Minor,
}

impl SpellingFamily {
    /// Whether a key spells its black keys as flats
    ///
    /// Major: F and every flat-named key. Minor: D, G, C, F and every
    /// flat-named key. Everything else uses sharps or naturals.
    pub fn uses_flats(self, key: &str) -> bool {
        if is_flat_spelling(key) {
            return true;
        }
        match self {
            SpellingFamily::Major => key == "F",
            SpellingFamily::Minor => matches!(key, "D" | "G" | "C" | "F"),
        }
    }
}

const MAJOR: [Step; 7] = [
    Step::Whole,
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
    Step::Whole,
    Step::Half,
];

const NATURAL_MINOR: [Step; 7] = [
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
];

const HARMONIC_MINOR: [Step; 7] = [
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
    Step::Half,
    Step::AugmentedSecond,
    Step::Half,
];

// Ascending form
const MELODIC_MINOR: [Step; 7] = [
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
    Step::Whole,
    Step::Whole,
    Step::Half,
];

/// Built-in scale kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
}

impl ScaleKind {
    /// All built-in kinds
    pub const ALL: [ScaleKind; 4] = [
        ScaleKind::Major,
        ScaleKind::NaturalMinor,
        ScaleKind::HarmonicMinor,
        ScaleKind::MelodicMinor,
    ];

    /// The seven steps of this scale
    pub fn formula(self) -> &'static [Step] {
        match self {
            ScaleKind::Major => &MAJOR,
            ScaleKind::NaturalMinor => &NATURAL_MINOR,
            ScaleKind::HarmonicMinor => &HARMONIC_MINOR,
            ScaleKind::MelodicMinor => &MELODIC_MINOR,
        }
    }

    /// Spelling rule shared by this kind
    pub fn family(self) -> SpellingFamily {
        match self {
            ScaleKind::Major => SpellingFamily::Major,
            _ => SpellingFamily::Minor,
        }
    }

    /// Parse a scale kind from a loose name ("minor", "harmonic-minor", ...)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" | "ionian" => Some(ScaleKind::Major),
            "minor" | "naturalminor" | "aeolian" => Some(ScaleKind::NaturalMinor),
            "harmonicminor" => Some(ScaleKind::HarmonicMinor),
            "melodicminor" => Some(ScaleKind::MelodicMinor),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "Major",
            ScaleKind::NaturalMinor => "Natural Minor",
            ScaleKind::HarmonicMinor => "Harmonic Minor",
            ScaleKind::MelodicMinor => "Melodic Minor",
        }
    }

    /// Harmonic and melodic minor, the kinds with a raised seventh
    pub fn has_raised_seventh(self) -> bool {
        matches!(self, ScaleKind::HarmonicMinor | ScaleKind::MelodicMinor)
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Custom scale definition that can be loaded from config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomScaleDefinition {
    /// Name of the scale
    pub name: String,
    /// Step symbols, e.g. "WHWWWHW"
    pub formula: String,
    /// Spelling rule to follow
    #[serde(default = "default_family")]
    pub family: SpellingFamily,
}

fn default_family() -> SpellingFamily {
    SpellingFamily::Major
}

impl CustomScaleDefinition {
    /// Parsed steps; an empty formula is rejected
    pub fn steps(&self) -> Result<Vec<Step>> {
        let steps = parse_formula(&self.formula)?;
        if steps.is_empty() {
            return Err(TheoryError::EmptyFormula(self.name.clone()));
        }
        Ok(steps)
    }
}
