//! `chordstudy` - personal song-study toolkit.
//!
//! Parses ChordPro-style lyric text into structured documents and renders
//! chord-over-lyric study sheets, annotating chords with Roman-numeral labels
//! drawn from externally supplied key tables.

// Re-export public modules for use in integration tests and as a library
pub mod chordpro;
pub mod config;
pub mod error;
pub mod keymap;
pub mod render;
