//! ChordPro parsing for song-study sheets.
//!
//! Turns lyric text with inline bracketed chords into a structured [`Document`]
//! of sections, lines, and chord placements:
//!
//! ```text
//! [Verse 1]
//! [C]Someway, baby, it's [Am]part of me a[G]part from me.
//!
//! [Chorus]
//! [F]And at once I [Am]knew I was not mag[G]nificent
//! ```
//!
//! Parsing is total: every input string produces a document. Malformed
//! brackets degrade to literal text rather than failing.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regex matching a section header: a line that is ONLY a bracketed label,
/// like `[Verse 1]` or `[Chorus]`, with no lyric content around it.
#[allow(clippy::expect_used)]
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([A-Za-z0-9\s]+)\]$").expect("valid regex: RE_HEADER")
});

/// Regex matching a bracketed chord token: root letter, optional accidental,
/// optional quality keyword, optional digits, optional slash bass.
///
/// The quality list is a closed whitelist, not full chord-theory coverage.
/// `sus2`, `maj7` and friends work because digits are allowed after the
/// keyword; exotic altered notations are not recognized.
#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([A-Ga-g][#b]?(?:m|maj|min|dim|aug|sus|add)?[0-9]*(?:/[A-Ga-g][#b]?)?)\]")
        .expect("valid regex: RE_CHORD")
});

/// A chord anchored to a position within a lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordPlacement {
    /// The chord text as written between brackets (may be empty for `[]`).
    pub chord: String,
    /// Zero-based character index into the chord-stripped lyrics of the
    /// owning line. Counts characters, not bytes, so it stays correct for
    /// non-ASCII lyrics. Always `<=` the line's lyric character count.
    pub lyric_offset: usize,
}

/// One line of a song: lyric text plus the chords placed along it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Lyric text with all bracketed chord tokens removed.
    pub lyrics: String,
    /// Chords in source order, with non-decreasing `lyric_offset`.
    pub chords: Vec<ChordPlacement>,
}

impl Line {
    /// Whether this line carries chords but no lyric text, e.g. an
    /// instrumental break written as `[F] [Am] [G]`.
    pub fn is_chord_only(&self) -> bool {
        !self.chords.is_empty() && self.lyrics.trim().is_empty()
    }
}

/// A named or unnamed run of lines, delimited by header lines or blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Label from an explicit header line (`[Verse 1]`, `[Chorus]`), verbatim.
    /// `None` for sections introduced by a blank line or at the start.
    pub name: Option<String>,
    /// Lines in source order.
    pub lines: Vec<Line>,
}

/// A fully parsed song document. Rebuilt from source text on every parse;
/// carries no identity and is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Sections in source order. Every section has at least one line or a name.
    pub sections: Vec<Section>,
}

/// Parse a ChordPro-formatted string into a [`Document`].
///
/// Single line-oriented pass. Blank lines separate sections; a line that is
/// only a bracketed label (letters, digits, spaces) starts a named section;
/// everything else is parsed as a content line via [`parse_chord_line`].
/// Never fails: there is no malformed input, only degraded output.
pub fn parse_document(input: &str) -> Document {
    let mut sections = Vec::new();
    let mut current = Section::default();

    for raw in input.lines() {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            // Section separator. Ignored while the current section is empty
            // so runs of blank lines never emit empty sections.
            if !current.lines.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(caps) = RE_HEADER.captures(trimmed) {
            if !current.lines.is_empty() || current.name.is_some() {
                sections.push(std::mem::take(&mut current));
            }
            current.name = Some(caps[1].to_string());
            continue;
        }

        current.lines.push(parse_chord_line(trimmed));
    }

    // Final flush: a trailing in-progress section must not be lost.
    if !current.lines.is_empty() || current.name.is_some() {
        sections.push(current);
    }

    Document { sections }
}

/// Parse a single content line into lyrics and chord placements.
///
/// `"[C]Someway, baby, it's [Am]part of me"` becomes lyrics
/// `"Someway, baby, it's part of me"` with `C` at offset 0 and `Am` at
/// offset 20. Each chord attaches to the number of lyric characters emitted
/// before it. A `[` with no later `]` is kept as a literal character.
pub fn parse_chord_line(line: &str) -> Line {
    let mut lyrics = String::new();
    // Character count of `lyrics`, tracked separately so offsets count
    // characters rather than bytes.
    let mut lyric_len = 0usize;
    let mut chords = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(close) = rest.find(']') {
                chords.push(ChordPlacement {
                    chord: rest[1..close].to_string(),
                    lyric_offset: lyric_len,
                });
                rest = &rest[close + 1..];
                continue;
            }
        }
        lyrics.push(c);
        lyric_len += 1;
        rest = &rest[c.len_utf8()..];
    }

    Line { lyrics, chords }
}

/// Extract all unique chord tokens from a ChordPro string.
///
/// Scans the raw input (independent of line/section structure) for bracketed
/// tokens matching the chord shape and returns them deduplicated in order of
/// first appearance. Section labels like `[Verse 1]` are words, not chord
/// shapes, and are not extracted.
pub fn extract_chords(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut chords = Vec::new();

    for caps in RE_CHORD.captures_iter(input) {
        let chord = &caps[1];
        if seen.insert(chord.to_string()) {
            chords.push(chord.to_string());
        }
    }

    chords
}

/// Convert a flat space-separated chord list to minimal ChordPro markup.
///
/// `"C G Am F"` becomes `"[C] [G] [Am] [F]"`. No lyric content is attached;
/// this is a convenience for bootstrapping a document from bare chords.
pub fn simple_chords_to_chordpro(chords: &str) -> String {
    chords
        .split_whitespace()
        .map(|chord| format!("[{chord}]"))
        .collect::<Vec<_>>()
        .join(" ")
}
