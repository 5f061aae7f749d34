//! Integration tests for the ChordPro pipeline: parse, extract, convert,
//! and render against the bundled key tables.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use chordstudy::chordpro::{
    extract_chords, parse_chord_line, parse_document, simple_chords_to_chordpro,
};
use chordstudy::keymap::KeyMaps;
use chordstudy::render::{render_document, RenderOptions};

const BON_IVER: &str = "\
[Verse 1]
[C]Someway, baby, it's [Am]part of me a[G]part from me.
[Am]You're laying [F]waste to Halloween.

[Chorus]
[F]And at once I [Am]knew I was not mag[G]nificent
";

/// Inputs chosen to poke at bracket and whitespace edges.
const NASTY_INPUTS: &[&str] = &[
    "",
    "\n\n\n",
    "[",
    "]",
    "[]",
    "[][C]",
    "[C incomplete",
    "a]b[c",
    "[F] [Am] [G]",
    "   [Chorus]   ",
    "[Chorus] yeah",
    "[C]héllo [G]wörld",
    BON_IVER,
];

#[test]
fn parsing_always_satisfies_offset_invariants() {
    for input in NASTY_INPUTS {
        let doc = parse_document(input);
        for section in &doc.sections {
            assert!(
                !section.lines.is_empty() || section.name.is_some(),
                "empty unnamed section emitted for {input:?}"
            );
            for line in &section.lines {
                let lyric_chars = line.lyrics.chars().count();
                let mut previous = 0;
                for chord in &line.chords {
                    assert!(
                        chord.lyric_offset <= lyric_chars,
                        "offset {} beyond lyrics {:?}",
                        chord.lyric_offset,
                        line.lyrics
                    );
                    assert!(
                        chord.lyric_offset >= previous,
                        "offsets out of order in {input:?}"
                    );
                    previous = chord.lyric_offset;
                }
            }
        }
    }
}

#[test]
fn lyrics_reconstruction_is_stable() {
    // Re-parsing any line's chord-stripped lyrics must change nothing:
    // every bracket pair was already consumed as a chord.
    for input in NASTY_INPUTS {
        let doc = parse_document(input);
        for section in &doc.sections {
            for line in &section.lines {
                let reparsed = parse_chord_line(&line.lyrics);
                assert_eq!(reparsed.lyrics, line.lyrics);
                assert!(reparsed.chords.is_empty(), "chords left in {:?}", line.lyrics);
            }
        }
    }
}

#[test]
fn full_song_parses_into_named_sections() {
    let doc = parse_document(BON_IVER);
    assert_eq!(doc.sections.len(), 2);

    let verse = &doc.sections[0];
    assert_eq!(verse.name.as_deref(), Some("Verse 1"));
    assert_eq!(verse.lines.len(), 2);
    assert_eq!(verse.lines[0].lyrics, "Someway, baby, it's part of me apart from me.");
    let placed: Vec<(&str, usize)> = verse.lines[0]
        .chords
        .iter()
        .map(|c| (c.chord.as_str(), c.lyric_offset))
        .collect();
    assert_eq!(placed, vec![("C", 0), ("Am", 20), ("G", 32)]);

    let chorus = &doc.sections[1];
    assert_eq!(chorus.name.as_deref(), Some("Chorus"));
    assert_eq!(chorus.lines.len(), 1);
}

#[test]
fn header_detection_is_exact_match() {
    let header = parse_document("[Chorus]");
    assert_eq!(header.sections.len(), 1);
    assert_eq!(header.sections[0].name.as_deref(), Some("Chorus"));
    assert!(header.sections[0].lines.is_empty());

    let content = parse_document("[Chorus] yeah");
    assert!(content.sections[0].name.is_none());
    let line = &content.sections[0].lines[0];
    assert_eq!(line.lyrics, " yeah");
    assert_eq!(line.chords[0].chord, "Chorus");
    assert_eq!(line.chords[0].lyric_offset, 0);
}

#[test]
fn extractor_matches_chord_shapes_only() {
    let chords = extract_chords(BON_IVER);
    assert_eq!(chords, vec!["C", "Am", "G", "F"]);

    let mixed = extract_chords("[C]Hi [Am7]there [Verse 1]");
    assert_eq!(mixed, vec!["C", "Am7"]);
}

#[test]
fn converted_chord_list_parses_back_as_chord_only_line() {
    let markup = simple_chords_to_chordpro("C  G Am   F");
    assert_eq!(markup, "[C] [G] [Am] [F]");

    let line = parse_chord_line(&markup);
    assert!(line.is_chord_only());
    let names: Vec<&str> = line.chords.iter().map(|c| c.chord.as_str()).collect();
    assert_eq!(names, vec!["C", "G", "Am", "F"]);
}

#[test]
fn rendered_sheet_aligns_chords_with_lyrics() {
    let options = RenderOptions {
        key: "C".to_string(),
        show_romans: false,
    };
    let sheet = render_document(&parse_document("[G]Hello [D]world"), &KeyMaps::bundled(), &options);
    assert_eq!(sheet, "G     D\nHello world\n");
}

#[test]
fn rendered_sheet_annotates_romans_from_key_tables() {
    let doc = parse_document("[Chorus]\n[F] [Am] [G]");
    let sheet = render_document(&doc, &KeyMaps::bundled(), &RenderOptions::default());
    assert_eq!(sheet, "[Chorus]\nF(IV) Am(vi) G(V)\n");
}
