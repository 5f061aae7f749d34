//! `chordstudy` - ChordPro study-sheet CLI.
//!
//! Usage:
//!   `chordstudy render [FILE] [--key K] [--no-romans] [--keymaps PATH]`
//!   `chordstudy chords [FILE]`
//!   `chordstudy from-chords "C G Am F"`
//!
//! `FILE` omitted or given as `-` reads from stdin.

use std::env;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use chordstudy::chordpro;
use chordstudy::config::Config;
use chordstudy::error::{Error, Result};
use chordstudy::keymap::KeyMaps;
use chordstudy::render::{render_document, RenderOptions};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "render" => cmd_render(&args[2..]),
        "chords" => cmd_chords(&args[2..]),
        "from-chords" => cmd_from_chords(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage(&args[0]);
            Ok(())
        }
        other => Err(Error::Msg(format!("Unknown command: {other}"))),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} render [FILE] [--key K] [--no-romans] [--keymaps PATH]");
    eprintln!("       {program} chords [FILE]");
    eprintln!("       {program} from-chords \"C G Am F\"");
    eprintln!();
    eprintln!("FILE omitted or '-' reads ChordPro text from stdin.");
}

/// Parse the input and print a chord-over-lyrics study sheet.
fn cmd_render(args: &[String]) -> Result<()> {
    let config = Config::load()?;
    let mut key = config.key;
    let mut keymaps_path = config.keymaps_path;
    let mut show_romans = true;
    let mut file: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--key" => key = required_value(&mut iter, "--key")?.clone(),
            "--keymaps" => {
                keymaps_path = Some(PathBuf::from(required_value(&mut iter, "--keymaps")?));
            }
            "--no-romans" => show_romans = false,
            other => file = Some(other.to_string()),
        }
    }

    let input = read_input(file.as_deref())?;
    let keymaps = match keymaps_path {
        Some(path) => KeyMaps::load(&path)?,
        None => KeyMaps::bundled(),
    };

    let document = chordpro::parse_document(&input);
    let options = RenderOptions { key, show_romans };
    print!("{}", render_document(&document, &keymaps, &options));
    Ok(())
}

/// Print the deduplicated chord tokens found in the input, one per line.
fn cmd_chords(args: &[String]) -> Result<()> {
    let input = read_input(args.first().map(String::as_str))?;
    for chord in chordpro::extract_chords(&input) {
        println!("{chord}");
    }
    Ok(())
}

/// Convert a flat space-separated chord list to ChordPro markup.
fn cmd_from_chords(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(Error::Msg("from-chords requires a chord list".to_string()));
    }
    println!("{}", chordpro::simple_chords_to_chordpro(&args.join(" ")));
    Ok(())
}

/// Fetch the value following a flag, or fail with a usage error.
fn required_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a String> {
    iter.next()
        .ok_or_else(|| Error::Msg(format!("{flag} requires a value")))
}

/// Read ChordPro text from a file path, or stdin for `None` / `-`.
fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) if path != "-" => fs_err::read_to_string(path)
            .map_err(|e| Error::io(e, Some(PathBuf::from(path)))),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
