// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory fundamentals: pitch classes, note spelling and scale formulas.

pub mod pitch;
pub mod scale;

pub use pitch::{PitchClass, Semitones, KEY_NAMES};
pub use scale::{CustomScaleDefinition, ScaleKind, SpellingFamily, Step};
