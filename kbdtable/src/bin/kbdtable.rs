use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kbdtable::{
    load_definition_file, select_keyboard_type, Config, KeyboardType, LayoutDefinition,
    LayoutTable, Scancode,
};
use kbdlayout_core::key_name;
use log::{info, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyboard layout scancode table checker", long_about = None)]
struct Args {
    /// TOML config file (keyboard_type, include_dirs)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a layout definition
    Check {
        /// Layout definition file
        input: PathBuf,

        /// Keyboard type (1-6); overrides KBD_TYPE in the file
        #[arg(short = 't', long)]
        kbd_type: Option<u8>,

        /// Validate against every keyboard type
        #[arg(long, conflicts_with = "kbd_type")]
        all_types: bool,
    },

    /// Print the resolved table
    Dump {
        /// Layout definition file
        input: PathBuf,

        /// Keyboard type (1-6); overrides KBD_TYPE in the file
        #[arg(short = 't', long)]
        kbd_type: Option<u8>,
    },

    /// Resolve scancodes (hex, e.g. 1E or 0xE01D) to virtual keys
    Resolve {
        /// Layout definition file
        input: PathBuf,

        #[arg(required = true)]
        scancodes: Vec<Scancode>,

        /// Keyboard type (1-6); overrides KBD_TYPE in the file
        #[arg(short = 't', long)]
        kbd_type: Option<u8>,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG still wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Check { input, kbd_type, all_types } => {
            let definition = load(&input, &config)?;
            if all_types {
                for keyboard_type in KeyboardType::all() {
                    check(&definition, keyboard_type)?;
                }
            } else {
                let keyboard_type =
                    select_keyboard_type(kbd_type, definition.keyboard_type, &config)?;
                check(&definition, keyboard_type)?;
            }
        }
        Command::Dump { input, kbd_type } => {
            let definition = load(&input, &config)?;
            let table = build(&definition, kbd_type, &config)?;
            dump(&table);
        }
        Command::Resolve { input, scancodes, kbd_type } => {
            let definition = load(&input, &config)?;
            let table = build(&definition, kbd_type, &config)?;
            for scancode in scancodes {
                match table.resolve_mapping(scancode) {
                    Ok(mapping) => println!("{:<8} {}", scancode.to_string(), mapping),
                    Err(e) => {
                        info!("{}", e);
                        println!("{:<8} <no mapping>", scancode.to_string());
                    }
                }
            }
        }
    }

    Ok(())
}

fn load(input: &Path, config: &Config) -> Result<LayoutDefinition> {
    load_definition_file(input, config.include_dirs.as_slice())
        .with_context(|| format!("Failed to load layout definition {}", input.display()))
}

fn build(
    definition: &LayoutDefinition,
    kbd_type: Option<u8>,
    config: &Config,
) -> Result<LayoutTable> {
    let keyboard_type = select_keyboard_type(kbd_type, definition.keyboard_type, config)?;
    definition
        .build(keyboard_type)
        .with_context(|| format!("Invalid layout for keyboard type {}", keyboard_type))
}

fn check(definition: &LayoutDefinition, keyboard_type: KeyboardType) -> Result<()> {
    let table = definition
        .build(keyboard_type)
        .with_context(|| format!("Invalid layout for keyboard type {}", keyboard_type))?;

    let warnings = table.uniform_variant_entries().len();
    println!(
        "keyboard type {}: OK, {} entries, {} warning(s)",
        keyboard_type,
        table.len(),
        warnings
    );
    Ok(())
}

fn dump(table: &LayoutTable) {
    println!("# keyboard type {}", table.keyboard_type());
    for (scancode, mapping) in table.iter() {
        println!(
            "{:<8} {:<20} {:<16} {}",
            scancode.to_string(),
            mapping.vk.to_string(),
            mapping.flags.to_string(),
            key_name(scancode).unwrap_or("")
        );
    }
}
