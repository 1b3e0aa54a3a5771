use std::env;
use std::fs;
use std::process;

use songkey::{render_song, Catalog, DisplayMode, RenderOptions, Song};
use tracing::Level;

const USAGE: &str = "Usage: songkey [options] <songs.yaml> [output]

Options:
  --key <KEY>      Render in KEY (a label of the song's key map)
  --up <N>         Render N semitones above the original key
  --down <N>       Render N semitones below the original key
  --numbers        Show Nashville numbers instead of letter names
  --song <TITLE>   Render only the song with this title
  --json           Write JSON instead of YAML
  --list           List the songs in the file and exit
  -v               Verbose logging";

enum KeyChoice {
    Original,
    Key(String),
    Steps(i32),
}

struct Args {
    input: String,
    output: Option<String>,
    key: KeyChoice,
    mode: DisplayMode,
    song: Option<String>,
    json: bool,
    list: bool,
    verbose: bool,
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    args.next()
        .unwrap_or_else(|| usage_error(&format!("Missing value for {}", flag)))
}

fn step_count(value: &str, flag: &str) -> i32 {
    value
        .parse()
        .unwrap_or_else(|_| usage_error(&format!("{} expects a number of semitones, got '{}'", flag, value)))
}

fn parse_args() -> Args {
    let mut args = env::args().skip(1);
    let mut positional = Vec::new();
    let mut parsed = Args {
        input: String::new(),
        output: None,
        key: KeyChoice::Original,
        mode: DisplayMode::Chords,
        song: None,
        json: false,
        list: false,
        verbose: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--key" => parsed.key = KeyChoice::Key(flag_value(&mut args, "--key")),
            "--up" => {
                let value = flag_value(&mut args, "--up");
                parsed.key = KeyChoice::Steps(step_count(&value, "--up"));
            }
            "--down" => {
                let value = flag_value(&mut args, "--down");
                parsed.key = KeyChoice::Steps(-step_count(&value, "--down"));
            }
            "--numbers" => parsed.mode = DisplayMode::Numbers,
            "--song" => parsed.song = Some(flag_value(&mut args, "--song")),
            "--json" => parsed.json = true,
            "--list" => parsed.list = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            flag if flag.starts_with('-') => usage_error(&format!("Unknown option '{}'", flag)),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    parsed.input = positional
        .next()
        .unwrap_or_else(|| usage_error("Missing input file"));
    parsed.output = positional.next();
    if positional.next().is_some() {
        usage_error("Too many arguments");
    }

    parsed
}

fn render_options(song: &Song, key: &KeyChoice, mode: DisplayMode) -> RenderOptions {
    let target_key = match key {
        KeyChoice::Original => None,
        KeyChoice::Key(key) => Some(key.clone()),
        KeyChoice::Steps(steps) => Some(song.chord_map.step_key(&song.original_key, *steps).to_string()),
    };
    RenderOptions { target_key, mode }
}

fn main() {
    let args = parse_args();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let catalog = match Catalog::load(&args.input) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.list {
        for song in catalog.songs() {
            println!("{} - {} (key of {}, {} bpm)", song.title, song.artist, song.original_key, song.bpm);
        }
        return;
    }

    let selected: Vec<&Song> = match &args.song {
        Some(title) => match catalog.find(title) {
            Ok(song) => vec![song],
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!("Available: {}", catalog.titles().collect::<Vec<_>>().join(", "));
                process::exit(1);
            }
        },
        None => catalog.songs().iter().collect(),
    };

    let rendered: Vec<Song> = selected
        .into_iter()
        .map(|song| render_song(song, &render_options(song, &args.key, args.mode)))
        .collect();

    // A single song is written as a mapping so the output loads back as a catalog either way
    let result = match (rendered.as_slice(), args.json) {
        ([song], true) => serde_json::to_string_pretty(song).map_err(|e| e.to_string()),
        (songs, true) => serde_json::to_string_pretty(songs).map_err(|e| e.to_string()),
        ([song], false) => serde_yaml::to_string(song).map_err(|e| e.to_string()),
        (songs, false) => serde_yaml::to_string(songs).map_err(|e| e.to_string()),
    };

    let text = match result {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &text) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote {} song(s) to {}", rendered.len(), path);
        }
        None => {
            println!("{}", text);
        }
    }
}
