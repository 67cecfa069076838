mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reflow",
    version,
    about = "Rebuild paragraphs from PDF text positions and write them as DOCX"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PDF (or pdf2json JSON) file to DOCX
    Convert {
        /// Path to PDF or pdf2json JSON file
        input_file: PathBuf,

        /// Output DOCX path (default: input path with .docx extension)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// JSON options file (font size, page size, margins)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print the reconstructed paragraphs and page breaks without writing DOCX
    Blocks {
        /// Path to PDF or pdf2json JSON file
        input_file: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// JSON options file (font size, page size, margins)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print the default options as JSON
    Config,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            input_file,
            out,
            config,
        } => commands::convert::run(input_file, out, config)
            .map_err(|e| format!("Error converting file: {e}")),
        Commands::Blocks {
            input_file,
            output,
            config,
        } => commands::blocks::run(input_file, &output, config)
            .map_err(|e| format!("Error converting file: {e}")),
        Commands::Config => commands::config::print_defaults().map_err(|e| format!("Error: {e}")),
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
