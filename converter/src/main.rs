//! Repeaters CLI - Convert a repeater catalog to radio memory CSV
//!
//! # Main Command
//!
//! ```bash
//! repeaters                          # reps.json -> CSV on stdout
//! repeaters convert -i lz.json -o lz.csv --order name
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! repeaters callsign ZS6PTA G        # D-STAR call sign padding
//! repeaters band 439.5               # D-STAR module letter for a frequency
//! repeaters transliterate "София"    # Cyrillic to Latin
//! ```

use clap::{Args, Parser, Subcommand};
use repeaters::logs::{log_error, log_success, LOG_SINK};
use repeaters::{
    convert_file, dstar_callsign, dstar_freq_suffix, transliterate, write_csv, ConvertOptions,
    RowOrder,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repeaters")]
#[command(about = "Convert a JSON repeater catalog to D-STAR/FM memory CSV", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the catalog to CSV (default)
    Convert(ConvertArgs),

    /// Pad a call sign for D-STAR
    Callsign {
        /// Call sign, at most 8 characters
        callsign: String,

        /// Module letter placed in the 8th position
        suffix: char,
    },

    /// Show the D-STAR module letter for a frequency
    Band {
        /// Frequency in MHz
        freq: f64,
    },

    /// Transliterate Cyrillic text
    Transliterate {
        /// Text to romanize
        text: String,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// Catalog file [default: reps.json, or $REPEATERS_INPUT]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Row order [default: insertion, or $REPEATERS_ORDER]
    #[arg(long, value_enum)]
    order: Option<RowOrder>,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Convert(cli.convert)) {
        Commands::Convert(args) => cmd_convert(args),
        Commands::Callsign { callsign, suffix } => cmd_callsign(&callsign, suffix),
        Commands::Band { freq } => cmd_band(freq),
        Commands::Transliterate { text } => cmd_transliterate(&text),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_convert(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    LOG_SINK.set_quiet(args.quiet);

    let options = ConvertOptions::from_env()?.with_overrides(args.input, args.order);

    // All rows are derived before anything is written.
    let conversion = convert_file(&options)?;

    match args.output {
        Some(path) => {
            let file = BufWriter::new(File::create(&path)?);
            write_csv(file, &conversion.rows, &options.profile)?;
            log_success(format!("💾 Output written to: {}", path.display()));
        }
        None => {
            write_csv(std::io::stdout().lock(), &conversion.rows, &options.profile)?;
        }
    }

    Ok(())
}

fn cmd_callsign(callsign: &str, suffix: char) -> Result<(), Box<dyn std::error::Error>> {
    println!("{:?}", dstar_callsign(callsign, suffix)?);
    Ok(())
}

fn cmd_band(freq: f64) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", dstar_freq_suffix(freq)?);
    Ok(())
}

fn cmd_transliterate(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", transliterate(text));
    Ok(())
}
