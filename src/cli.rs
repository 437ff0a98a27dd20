use clap::Parser;
use clipboard::{ClipboardContext, ClipboardProvider};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use midi2ass::config;
use midi2ass::lyrics;
use midi2ass::midi::{self, DurationCalculator, MidiError};
use midi2ass::subtitle;

/// Convert MIDI note timings and lyrics into karaoke-timed ASS subtitles
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input MIDI file (.mid) or decoded event rows (.csv)
    #[arg(required = true)]
    midi_file: String,

    /// Path to the lyrics file (one line per subtitle, syllables separated by '|')
    #[arg(short, long)]
    lyrics: String,

    /// Write the ASS script to this file instead of the console
    #[arg(short, long)]
    output: Option<String>,

    /// Start time of the first note, in seconds
    #[arg(short, long, default_value_t = 0.0)]
    start: f64,

    /// Style name stamped on every dialogue line (overrides config.toml)
    #[arg(long)]
    style: Option<String>,

    /// Give trailing punctuation its own zero-length highlight
    #[arg(short = 'p', long)]
    split_punctuation: bool,

    /// Copy output to clipboard instead of console
    #[arg(short, long)]
    copy: bool,
}

fn missing_file(what: &str, path: &str) -> MidiError {
    MidiError::Io(io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found: {}", what, path),
    ))
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !Path::new(&cli.midi_file).exists() {
        return Err(missing_file("MIDI file", &cli.midi_file).into());
    }
    if !Path::new(&cli.lyrics).exists() {
        return Err(missing_file("Lyrics file", &cli.lyrics).into());
    }

    let score = midi::process_midi(&cli.midi_file)?;
    let mut calculator = DurationCalculator::for_score(&score);
    let durations = calculator.durations(&score.notes);

    let lyrics_text = fs::read_to_string(&cli.lyrics)?;
    let lines = lyrics::parse_lyrics(&lyrics_text, cli.split_punctuation);

    let syllable_slots = lyrics::slot_count(&lines);
    if syllable_slots != durations.len() {
        warn!(
            syllable_slots,
            duration_slots = durations.len(),
            "lyrics and note counts disagree; timings will be misaligned"
        );
    }

    let subtitle_config = config::get_subtitle_config();
    let style = cli
        .style
        .clone()
        .unwrap_or_else(|| subtitle_config.style.clone());
    let start_cs = (cli.start * 100.0).floor() as i64;

    let composed = subtitle::compose_lines(&lines, &durations, start_cs, &style);
    let visible: Vec<_> = composed.into_iter().filter(|l| !l.is_blank()).collect();
    let script = subtitle::render_script(&visible, &subtitle_config)?;

    if cli.copy {
        // Copy to clipboard
        ClipboardContext::new()
            .and_then(|mut ctx| ctx.set_contents(script))
            .map_err(|e| format!("Failed to copy to clipboard: {}", e))?;
        println!("Successfully copied to clipboard!");
    } else if let Some(path) = &cli.output {
        fs::write(path, script)?;
    } else {
        io::stdout().write_all(script.as_bytes())?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("\nERROR: {}\n", err);
            match err.downcast_ref::<MidiError>() {
                Some(MidiError::Io(ref io_err)) if io_err.kind() == io::ErrorKind::NotFound => {
                    eprintln!("Please check that:");
                    eprintln!("1. The file path is correct");
                    eprintln!("2. The file exists");
                    eprintln!("3. You have permission to read the file");
                }
                Some(MidiError::UnsupportedTiming) => {
                    eprintln!("Only metrically-timed (ticks per quarter note) MIDI files are supported.");
                }
                _ => {}
            }
            process::exit(1);
        }
    }
}
