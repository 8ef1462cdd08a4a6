// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enharmonic-aware scale generator.
//!
//! Walks a scale formula from a root, stepping in sharp space and
//! respelling each produced note to the key's convention. A couple of
//! keys need hand-applied fixes afterwards:
//!
//! - harmonic and melodic minor on G and D keep a sharp leading tone
//!   (G harmonic minor has F#, not Gb)
//! - F# major spells its seventh degree E#, not F
//!
//! The root is always emitted exactly as the caller spelled it.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::error::Result;
use crate::music::pitch::{
    is_sharp_spelling, step_by, to_flat_spelling, to_sharp_spelling, validate_note, PitchClass,
};
use crate::music::scale::{CustomScaleDefinition, ScaleKind, Step};

/// Position of the seventh degree in a generated scale
const LEADING_TONE: usize = 6;

/// Generate the eight spelled notes of `kind` on `key`
pub fn generate_scale(key: &str, kind: ScaleKind) -> Result<Vec<String>> {
    let key = validate_note(key)?;
    let uses_flats = kind.family().uses_flats(key);
    debug!(key, kind = %kind, uses_flats, "generating scale");

    let mut notes = spell_steps(key, kind.formula(), uses_flats)?;
    apply_overrides(key, kind, &mut notes)?;
    Ok(notes)
}

/// Generate a scale from a user-defined formula
///
/// Custom formulas follow their family's spelling rule but never get the
/// built-in overrides.
pub fn generate_custom(key: &str, def: &CustomScaleDefinition) -> Result<Vec<String>> {
    let key = validate_note(key)?;
    let steps = def.steps()?;
    let uses_flats = def.family.uses_flats(key);
    debug!(key, scale = %def.name, uses_flats, "generating custom scale");
    spell_steps(key, &steps, uses_flats)
}

fn spell_steps(key: &'static str, steps: &[Step], uses_flats: bool) -> Result<Vec<String>> {
    let mut notes = Vec::with_capacity(steps.len() + 1);
    notes.push(key.to_string());

    let mut current = key;
    for step in steps {
        current = step_by(current, step.semitones())?;
        let spelled = if uses_flats && is_sharp_spelling(current) {
            to_flat_spelling(current)
        } else {
            current
        };
        notes.push(spelled.to_string());
    }

    Ok(notes)
}

fn apply_overrides(key: &str, kind: ScaleKind, notes: &mut [String]) -> Result<()> {
    if kind.has_raised_seventh() && matches!(key, "G" | "D") {
        if let Some(seventh) = notes.get_mut(LEADING_TONE) {
            let sharp = to_sharp_spelling(seventh)?;
            trace!(key, from = %seventh, to = sharp, "raised seventh keeps sharp spelling");
            *seventh = sharp.to_string();
        }
    }

    if kind == ScaleKind::Major && key == "F#" {
        if let Some(note) = notes.iter_mut().find(|n| n.as_str() == "F") {
            trace!(key, "respelling F as E#");
            *note = "E#".to_string();
        }
    }

    Ok(())
}

/// A generated scale with its root and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    root: String,
    label: String,
    notes: Vec<String>,
}

impl Scale {
    /// Generate a built-in scale
    pub fn generate(key: &str, kind: ScaleKind) -> Result<Self> {
        let notes = generate_scale(key, kind)?;
        Ok(Self {
            root: key.to_string(),
            label: kind.name().to_string(),
            notes,
        })
    }

    /// Generate a scale from a custom definition
    pub fn custom(key: &str, def: &CustomScaleDefinition) -> Result<Self> {
        let notes = generate_custom(key, def)?;
        Ok(Self {
            root: key.to_string(),
            label: def.name.clone(),
            notes,
        })
    }

    /// Root as given by the caller
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Scale name, e.g. "Harmonic Minor"
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Spelled notes, root repeated at the octave
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Note at a scale degree (1-based)
    pub fn degree(&self, degree: usize) -> Option<&str> {
        if degree == 0 {
            return None;
        }
        self.notes.get(degree - 1).map(String::as_str)
    }

    /// Pitch classes of the notes; spellings outside the key vocabulary
    /// (E#) resolve through their letter and accidental
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.notes.iter().filter_map(|n| resolve_pitch_class(n)).collect()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.label)
    }
}

/// Resolve a spelled note, including E#, to its pitch class
pub fn resolve_pitch_class(note: &str) -> Option<PitchClass> {
    if let Ok(pc) = PitchClass::from_name(note) {
        return Some(pc);
    }
    let mut chars = note.chars();
    let letter = PitchClass::from_name(&chars.next()?.to_string()).ok()?;
    match (chars.next(), chars.next()) {
        (Some('#'), None) => Some(letter.transpose(1)),
        (Some('b'), None) => Some(letter.transpose(-1)),
        _ => None,
    }
}

/// Registry of custom scale definitions
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    custom_scales: HashMap<String, CustomScaleDefinition>,
}

impl ScaleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom scale, rejecting formulas that do not parse
    pub fn register(&mut self, def: CustomScaleDefinition) -> Result<()> {
        def.steps()?;
        debug!(scale = %def.name, formula = %def.formula, "registered custom scale");
        self.custom_scales.insert(def.name.clone(), def);
        Ok(())
    }

    /// Look up a custom definition by name
    pub fn custom(&self, name: &str) -> Option<&CustomScaleDefinition> {
        self.custom_scales.get(name)
    }

    /// Get a scale by name (checks custom first, then built-in)
    ///
    /// `Ok(None)` means the name is unknown.
    pub fn get_scale(&self, key: &str, name: &str) -> Result<Option<Scale>> {
        if let Some(def) = self.custom_scales.get(name) {
            return Scale::custom(key, def).map(Some);
        }

        match ScaleKind::parse(name) {
            Some(kind) => Scale::generate(key, kind).map(Some),
            None => Ok(None),
        }
    }

    /// Every scale this registry can produce on `key`, built-ins first
    pub fn all_scales(&self, key: &str) -> Result<Vec<Scale>> {
        let mut scales = ScaleKind::ALL
            .iter()
            .map(|&kind| Scale::generate(key, kind))
            .collect::<Result<Vec<_>>>()?;

        let mut custom: Vec<&CustomScaleDefinition> = self.custom_scales.values().collect();
        custom.sort_by(|a, b| a.name.cmp(&b.name));
        for def in custom {
            scales.push(Scale::custom(key, def)?);
        }
        Ok(scales)
    }

    /// List all available scale names
    pub fn available_scales(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_scales.keys().cloned().collect();

        let built_in = ["major", "natural_minor", "harmonic_minor", "melodic_minor"];

        names.extend(built_in.iter().map(|s| s.to_string()));
        names.sort();
        names.dedup();
        names
    }
}
