// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text rendering of scales and chords.
//!
//! The generators only hand back note names; this module lays them out as
//! bordered tables for the terminal.

use std::fmt::Write;

/// Bordered table of note names under a title line
pub struct NoteTable<'a> {
    title: &'a str,
    notes: &'a [String],
    show_degrees: bool,
}

impl<'a> NoteTable<'a> {
    /// Create a new table
    pub fn new(title: &'a str, notes: &'a [String]) -> Self {
        Self {
            title,
            notes,
            show_degrees: false,
        }
    }

    /// Add a row of 1-based degree numbers above the notes
    pub fn degrees(mut self, show: bool) -> Self {
        self.show_degrees = show;
        self
    }

    /// Render to a string, one line per row
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);

        if self.notes.is_empty() {
            let _ = writeln!(out, "(no notes)");
            return out;
        }

        let width = self
            .notes
            .iter()
            .map(|n| n.chars().count())
            .chain(std::iter::once(self.notes.len().to_string().len()))
            .max()
            .unwrap_or(1);

        let border = border_line(self.notes.len(), width);
        out.push_str(&border);

        if self.show_degrees {
            let degrees: Vec<String> = (1..=self.notes.len()).map(|d| d.to_string()).collect();
            out.push_str(&row(&degrees, width));
            out.push_str(&border);
        }

        out.push_str(&row(self.notes, width));
        out.push_str(&border);
        out
    }
}

fn border_line(cells: usize, width: usize) -> String {
    let mut line = String::from("+");
    for _ in 0..cells {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row(cells: &[String], width: usize) -> String {
    let mut line = String::from("|");
    for cell in cells {
        let _ = write!(line, " {:^width$} |", cell, width = width);
    }
    line.push('\n');
    line
}

/// Render a chord: its name, members separated by spaces, and the
/// concatenated label
pub fn render_chord(name: &str, notes: &[String]) -> String {
    format!("{}\n  notes: {}\n  label: {}\n", name, notes.join(" "), notes.concat())
}
