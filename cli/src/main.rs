//! leaflabel CLI - tea label OCR parsing tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use leaflabel::{LabelParser, OcrDocument, ParseOptions, ReferenceData};

#[derive(Parser)]
#[command(name = "leaflabel")]
#[command(version)]
#[command(about = "Parse tea-label OCR output into structured records", long_about = None)]
struct Cli {
    /// Input OCR document (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Reference data snapshot (JSON)
    #[arg(short, long, value_name = "FILE", env = "LEAFLABEL_REFDATA")]
    refdata: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an OCR document into a structured record
    Parse {
        /// Input OCR document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Reference data snapshot (JSON)
        #[arg(short, long, value_name = "FILE", env = "LEAFLABEL_REFDATA")]
        refdata: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Similarity cutoff for vocabulary matching (0-1)
        #[arg(long)]
        cutoff: Option<f64>,

        /// Minimum phrase recognition confidence (0-1)
        #[arg(long)]
        min_confidence: Option<f64>,
    },

    /// Reduce an OCR document to its phrase form
    Reduce {
        /// Input OCR document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document statistics
    Info {
        /// Input OCR document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            refdata,
            output,
            compact,
            cutoff,
            min_confidence,
        }) => cmd_parse(
            &input,
            refdata.as_deref(),
            output.as_deref(),
            compact,
            cutoff,
            min_confidence,
        ),
        Some(Commands::Reduce {
            input,
            output,
            compact,
        }) => cmd_reduce(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: parse if input is provided
            if let Some(input) = cli.input {
                cmd_parse(&input, cli.refdata.as_deref(), None, false, None, None)
            } else {
                println!("{}", "Usage: leaflabel <FILE> [--refdata FILE]".yellow());
                println!("       leaflabel --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_document(path: &Path) -> Result<OcrDocument, Box<dyn std::error::Error>> {
    let payload = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&payload)?)
}

fn load_refdata(path: Option<&Path>) -> Result<ReferenceData, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let payload = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&payload)?)
        }
        None => Ok(ReferenceData::default()),
    }
}

fn emit(json: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn cmd_parse(
    input: &Path,
    refdata: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
    cutoff: Option<f64>,
    min_confidence: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input)?;
    let refdata = load_refdata(refdata)?;

    let mut options = ParseOptions::default();
    if let Some(cutoff) = cutoff {
        options = options.with_match_cutoff(cutoff);
    }
    if let Some(min_confidence) = min_confidence {
        options = options.with_min_phrase_confidence(min_confidence);
    }

    let result = LabelParser::with_options(refdata, options).parse(&document)?;

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    emit(&json, output)
}

fn cmd_reduce(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input)?;
    let reduced = leaflabel::reduce_document(&document, &ParseOptions::default());

    let json = if compact {
        serde_json::to_string(&reduced)?
    } else {
        serde_json::to_string_pretty(&reduced)?
    };
    emit(&json, output)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input)?;
    let reduced = leaflabel::reduce_document(&document, &ParseOptions::default());

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), document.pages.len());

    let blocks: usize = document.pages.iter().map(|p| p.blocks.len()).sum();
    let words = document.word_texts();
    println!("{}: {}", "Blocks".bold(), blocks);
    println!("{}: {}", "Words".bold(), words.len());
    println!(
        "{}: {}",
        "Phrases".bold(),
        reduced.phrases().count()
    );
    println!(
        "{}: {:.1}",
        "Largest font size".bold(),
        reduced.max_font_size()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "leaflabel".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Tea label OCR parsing tool");
    println!();
    println!("License: MIT");
}
