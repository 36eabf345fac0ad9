use anyhow::{Context, Result};
use chord_helper::render::render_card;
use chord_helper::settings::default_settings_path;
use chord_helper::strum::strum_length;
use chord_helper::{
    get_power_chords, parse_chord, plan_strum, suggest_with, tab_notation, ChordDatabase,
    ChordError, RenderOptions, Settings, SuggestMode,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "chord-helper", version, about = "Find easier ways to play guitar chords")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Chord table to use instead of the built-in one
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest fingerings for a chord, easiest first
    Find {
        chord: String,
        /// Only power chords (overrides the power-chord-mode setting)
        #[arg(long, conflicts_with = "no_power_chords")]
        power: bool,
        /// Leave power chords out
        #[arg(long)]
        no_power_chords: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
        /// Print tab notation
        #[arg(long)]
        tab: bool,
        /// Draw a chord diagram for each fingering
        #[arg(long)]
        diagram: bool,
    },

    /// Show how a chord name is understood
    Parse {
        chord: String,
        #[arg(long)]
        json: bool,
    },

    /// Power chord shapes for a chord's root
    Power {
        chord: String,
        #[arg(long)]
        json: bool,
    },

    /// Chord names matching a partial name
    Search { query: String },

    /// Every chord in the table
    List,

    /// Timed notes for strumming the easiest fingering
    Strum {
        chord: String,
        #[arg(long)]
        json: bool,
    },

    /// Show or change settings
    Settings {
        #[arg(long)]
        power_chord_mode: Option<bool>,
        #[arg(long)]
        show_tab_notation: Option<bool>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ChordError>() {
            Some(chord_error) if chord_error.is_parse_error() => {
                eprintln!("{}", chord_error);
                process::exit(2);
            }
            Some(chord_error) if matches!(chord_error, ChordError::NoFingerings { .. }) => {
                eprintln!("{}", chord_error);
                process::exit(3);
            }
            _ => {
                eprintln!("Error: {:#}", e);
                process::exit(1);
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = cli.settings.clone().or_else(default_settings_path);
    let settings = match &settings_path {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let loaded;
    let db = match &cli.database {
        Some(path) => {
            loaded = ChordDatabase::load(path)
                .with_context(|| format!("Failed to load chord table {}", path.display()))?;
            &loaded
        }
        None => ChordDatabase::builtin(),
    };

    match cli.command {
        Commands::Find {
            chord,
            power,
            no_power_chords,
            json,
            tab,
            diagram,
        } => {
            let mode = if no_power_chords {
                SuggestMode::AlternativesOnly
            } else {
                SuggestMode::from_power_chord_mode(power || settings.power_chord_mode)
            };
            let results = suggest_with(db, &chord, mode)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            let options = RenderOptions {
                show_tab_notation: tab || settings.show_tab_notation,
                ..RenderOptions::default()
            };
            for result in &results {
                if diagram {
                    println!("{}\n", render_card(result, &options));
                } else {
                    println!(
                        "{:<40} difficulty {}  ({})",
                        result.name(),
                        result.difficulty(),
                        result.source.as_str()
                    );
                    if tab {
                        println!("{}\n", tab_notation(&result.fingering));
                    }
                }
            }
        }

        Commands::Parse { chord, json } => {
            let parsed = parse_chord(&chord)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
                return Ok(());
            }

            println!("Root:      {}", parsed.root);
            println!("Quality:   {}", parsed.quality.as_str());
            if let Some(extension) = parsed.extension {
                println!("Extension: {}", extension);
            }
            if let Some(bass) = parsed.bass {
                println!("Bass:      {}", bass);
            }
            let intervals: Vec<String> = parsed.intervals().iter().map(u8::to_string).collect();
            println!("Intervals: {}", intervals.join(" "));
            let notes: Vec<&str> = parsed.notes().iter().map(|n| n.as_str()).collect();
            println!("Notes:     {}", notes.join(" "));
        }

        Commands::Power { chord, json } => {
            let parsed = parse_chord(&chord)?;
            let shapes = get_power_chords(&parsed);
            if json {
                println!("{}", serde_json::to_string_pretty(&shapes)?);
                return Ok(());
            }
            for shape in &shapes {
                println!("{}\n{}\n", shape.name, tab_notation(shape));
            }
        }

        Commands::Search { query } => {
            for name in db.search_chords(&query) {
                println!("{}", name);
            }
        }

        Commands::List => {
            for name in db.all_chord_names() {
                println!("{}", name);
            }
        }

        Commands::Strum { chord, json } => {
            let mode = SuggestMode::from_power_chord_mode(settings.power_chord_mode);
            let results = suggest_with(db, &chord, mode)?;
            let Some(easiest) = results.first() else {
                return Err(ChordError::NoFingerings { chord }.into());
            };

            let notes = plan_strum(&easiest.fingering);
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
                return Ok(());
            }

            println!("{}", easiest.name());
            for note in &notes {
                println!(
                    "  string {} fret {:>2}  {:>7.2} Hz  at {:.2}s",
                    note.string, note.fret, note.frequency, note.onset
                );
            }
            println!("Length: {:.2}s", strum_length(&notes));
        }

        Commands::Settings {
            power_chord_mode,
            show_tab_notation,
        } => {
            let path = settings_path.context("No config directory found; pass --settings")?;
            let mut updated = settings;
            if let Some(value) = power_chord_mode {
                updated.power_chord_mode = value;
            }
            if let Some(value) = show_tab_notation {
                updated.show_tab_notation = value;
            }
            if updated != settings {
                updated.save(&path)?;
                eprintln!("Wrote settings to {}", path.display());
            }
            print!("{}", serde_yaml::to_string(&updated)?);
        }
    }

    Ok(())
}
