// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{anyhow, bail, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, Level};

use enharmonic::config::AppConfig;
use enharmonic::ui::{render_chord, NoteTable};
use enharmonic::{parse_chord_name, Scale, ScaleKind, ScaleRegistry, KEY_NAMES};

fn print_usage() {
    println!("ENHARMONIC - Scale and chord speller");
    println!();
    println!("Usage: enharmonic [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  scale <KEY> [SCALE]     Spell a scale (major, minor, harmonic_minor,");
    println!("                          melodic_minor or a custom scale name)");
    println!("  scales <KEY>            Spell every known scale on KEY");
    println!("  chord <NAME>            Spell a chord, e.g. Cm7, F#sus4, Ebmaj9");
    println!("  random [SEED]           Spell a random scale for practice");
    println!();
    println!("Options:");
    println!("  --config <PATH>         Load settings from a YAML file");
    println!("  --verbose               Log generation details to stderr");
    println!("  --help                  Show this help message");
    println!();
    println!("Keys: {}", KEY_NAMES.join(" "));
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_scale(scale: &Scale, config: &AppConfig) {
    let title = scale.to_string();
    print!(
        "{}",
        NoteTable::new(&title, scale.notes())
            .degrees(config.show_degrees)
            .render()
    );
}

fn show_scale(config: &AppConfig, registry: &ScaleRegistry, key: &str, name: &str) -> Result<()> {
    let scale = registry.get_scale(key, name)?.ok_or_else(|| {
        anyhow!(
            "Unknown scale: {} (available: {})",
            name,
            registry.available_scales().join(", ")
        )
    })?;
    print_scale(&scale, config);
    Ok(())
}

fn show_all_scales(config: &AppConfig, registry: &ScaleRegistry, key: &str) -> Result<()> {
    for (i, scale) in registry.all_scales(key)?.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_scale(scale, config);
    }
    Ok(())
}

fn show_chord(input: &str) -> Result<()> {
    let chord = parse_chord_name(input)?;
    let notes = chord.notes()?;
    info!(chord = %chord, "spelled chord");
    print!("{}", render_chord(&chord.to_string(), &notes));
    Ok(())
}

fn show_random(config: &AppConfig, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let key = KEY_NAMES[rng.gen_range(0..KEY_NAMES.len())];
    let kind = ScaleKind::ALL[rng.gen_range(0..ScaleKind::ALL.len())];

    println!("Spell {} {}, then press Enter to check.", key, kind);
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    print_scale(&Scale::generate(key, kind)?, config);
    Ok(())
}

struct Options {
    config_path: Option<String>,
    verbose: bool,
    help: bool,
    command: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        config_path: None,
        verbose: false,
        help: false,
        command: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = Some(path.clone());
            }
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            other if other.starts_with("--") => bail!("Unknown option: {}", other),
            _ => options.command.push(arg.clone()),
        }
    }

    Ok(options)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        print_usage();
        return Ok(());
    }

    let config = match &options.config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let level = if options.verbose {
        Level::DEBUG
    } else {
        config.level()?
    };
    init_logging(level);

    let registry = config.registry()?;

    let command: Vec<&str> = options.command.iter().map(String::as_str).collect();
    match command.as_slice() {
        [] => {
            println!("ENHARMONIC - Scale and chord speller");
            println!("Run with --help for usage information");
        }
        ["scale"] => {
            let name = config.default_scale.name();
            show_scale(&config, &registry, &config.default_key, name)?;
        }
        ["scale", key] => {
            show_scale(&config, &registry, key, config.default_scale.name())?;
        }
        ["scale", key, name @ ..] => {
            show_scale(&config, &registry, key, &name.join(" "))?;
        }
        ["scales"] => show_all_scales(&config, &registry, &config.default_key)?,
        ["scales", key] => show_all_scales(&config, &registry, key)?,
        ["chord", name] => show_chord(name)?,
        ["chord", ..] => {
            eprintln!("Error: chord requires exactly one chord name, e.g. Cm7");
            std::process::exit(1);
        }
        ["random"] => show_random(&config, None)?,
        ["random", seed] => {
            let seed: u64 = seed
                .parse()
                .map_err(|_| anyhow!("Invalid seed: {}", seed))?;
            show_random(&config, Some(seed))?;
        }
        [other, ..] => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
