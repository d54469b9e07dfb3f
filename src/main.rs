use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use std::path::PathBuf;

use numerals::birthdate::BirthDate;
use numerals::tables::{Gender, Language};
use numerals::{batch, digest, payload};

#[derive(Parser)]
#[command(name = "numerals")]
#[command(about = "Spell out numbers and birth dates in Greek or English, and seal document payloads")]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Spell out one or more numbers")]
    Words {
        #[arg(help = "Numbers to spell (0 to 999999999999)", required = true)]
        numbers: Vec<u64>,
        #[arg(long, help = "Use English instead of Greek")]
        english: bool,
        #[arg(long, help = "Use feminine agreement (Greek only)")]
        feminine: bool,
    },
    #[command(about = "Write a birth date (DD/MM/YYYY or YYYY-MM-DD) out in full")]
    Birthdate {
        #[arg(help = "Birth date, e.g. 23/03/1990")]
        date: String,
    },
    #[command(about = "Add a random identifier and digest to a JSON payload")]
    Seal {
        #[arg(help = "Input payload JSON file")]
        payload: PathBuf,
        #[arg(short, long, help = "Output file (defaults to overwriting the input)")]
        output: Option<PathBuf>,
        #[arg(long, help = "Also store this date field written out in full as <FIELD>_words")]
        birthdate_field: Option<String>,
        #[arg(long, help = "Print the seal as JSON")]
        json: bool,
    },
    #[command(about = "Check a sealed payload against its digest")]
    Verify {
        #[arg(help = "Sealed payload JSON file")]
        payload: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(cli.command) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Words {
            numbers,
            english,
            feminine,
        } => {
            let language = if english {
                Language::English
            } else {
                Language::Greek
            };
            let gender = if feminine {
                Gender::Feminine
            } else {
                Gender::Neuter
            };
            for line in batch::spell_all(&numbers, language, gender)? {
                println!("{}", line);
            }
        }
        Commands::Birthdate { date } => {
            let date = BirthDate::parse(&date)?;
            println!("{}", date.to_words()?);
        }
        Commands::Seal {
            payload: input,
            output,
            birthdate_field,
            json,
        } => {
            let mut doc = payload::load(&input)
                .with_context(|| format!("Failed to load payload {}", input.display()))?;

            if let Some(field) = birthdate_field {
                let date = BirthDate::parse(payload::text_field(&doc, &field)?)?;
                doc.insert(format!("{}_words", field), date.to_words()?.into());
            }

            let seal = digest::seal(&mut doc)?;
            let output = output.unwrap_or(input);
            payload::save(&output, &doc)
                .with_context(|| format!("Failed to write payload {}", output.display()))?;
            info!(
                "sealed payload written to {} (reference {})",
                output.display(),
                seal.reference()
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&seal)?);
            } else {
                println!("{}", seal.digest);
            }
        }
        Commands::Verify { payload: input } => {
            let doc = payload::load(&input)
                .with_context(|| format!("Failed to load payload {}", input.display()))?;
            let valid = digest::verify(&doc)?;
            println!("{}", if valid { "valid" } else { "invalid" });
            return Ok(valid);
        }
    }
    Ok(true)
}
