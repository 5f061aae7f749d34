//! Plain-text study-sheet rendering.
//!
//! Lays out chord symbols on a row above the lyrics they belong to, using a
//! monospace grid: each chord starts at the column of its lyric offset, with
//! spacing sized by the character gap to the previous chord. Roman-numeral
//! annotations come from externally supplied [`KeyMaps`]; unknown chords get
//! a placeholder instead of failing.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::chordpro::{Document, Line};
use crate::keymap::{KeyMap, KeyMaps};

/// Label shown for chords missing from the key's table.
const UNKNOWN_ROMAN: &str = "?";

/// Options controlling study-sheet output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Musical key used to look up Roman-numeral labels.
    pub key: String,
    /// Whether to annotate each chord with its Roman numeral.
    pub show_romans: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            key: "C".to_string(),
            show_romans: true,
        }
    }
}

/// Render a parsed document as a plain-text study sheet.
///
/// Sections are separated by a blank line and print their header as `[Name]`
/// when present. A key with no table annotates every chord with the
/// placeholder rather than erroring.
pub fn render_document(doc: &Document, keymaps: &KeyMaps, options: &RenderOptions) -> String {
    let empty = KeyMap::default();
    let keymap = keymaps.for_key(&options.key).unwrap_or_else(|| {
        tracing::warn!(
            "No chord table for key {:?}; annotating all chords as {UNKNOWN_ROMAN}",
            options.key
        );
        &empty
    });

    let mut out = String::new();
    for (i, section) in doc.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if let Some(name) = &section.name {
            let _ = writeln!(out, "[{name}]");
        }
        for line in &section.lines {
            render_line(&mut out, line, keymap, options.show_romans);
        }
    }
    out
}

/// Render one line: a chord row (when the line has chords) above the lyrics,
/// or a single row of chord tokens for chord-only lines.
fn render_line(out: &mut String, line: &Line, keymap: &KeyMap, show_romans: bool) {
    if line.is_chord_only() {
        let tokens: Vec<String> = line
            .chords
            .iter()
            .map(|p| chord_token(&p.chord, keymap, show_romans))
            .collect();
        let _ = writeln!(out, "{}", tokens.join(" "));
        return;
    }

    if !line.chords.is_empty() {
        let mut row = String::new();
        // Display columns consumed so far.
        let mut cursor = 0usize;
        for placement in &line.chords {
            if placement.lyric_offset > cursor {
                for _ in cursor..placement.lyric_offset {
                    row.push(' ');
                }
                cursor = placement.lyric_offset;
            } else if cursor > 0 {
                // Colliding offsets: keep tokens apart with a single space.
                row.push(' ');
                cursor += 1;
            }
            let token = chord_token(&placement.chord, keymap, show_romans);
            cursor += token.width();
            row.push_str(&token);
        }
        let _ = writeln!(out, "{row}");
    }
    let _ = writeln!(out, "{}", line.lyrics);
}

/// Format a single chord, optionally annotated as `Chord(Roman)`.
fn chord_token(chord: &str, keymap: &KeyMap, show_romans: bool) -> String {
    if show_romans {
        let roman = keymap.roman_for(chord).unwrap_or(UNKNOWN_ROMAN);
        format!("{chord}({roman})")
    } else {
        chord.to_string()
    }
}
