//! jsontree CLI.
//!
//! Reads one JSON document from a file or stdin and either re-emits it or
//! reports where it is malformed.

use clap::{Args, Parser, Subcommand};
use jsontree::{parse_slice_with_limits, stringify, Limits, Value};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jsontree")]
#[command(about = "Parse, validate and reformat JSON documents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Parse a document and print it back, compact by default
    Format {
        #[command(flatten)]
        input: InputArgs,

        /// Indent with two spaces per level
        #[arg(long)]
        pretty: bool,
    },

    /// Check that a document is well-formed
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file; reads stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Maximum array/object nesting depth
    #[arg(long, default_value_t = jsontree::limits::DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,
}

const EXIT_INVALID: u8 = 1;
const EXIT_IO: u8 = 2;

impl InputArgs {
    fn read(&self) -> std::io::Result<Vec<u8>> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => std::fs::read(path),
            _ => {
                let mut buf = Vec::new();
                std::io::stdin().read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }

    /// Read and parse, reporting failures on stderr.
    fn load(&self) -> Result<Value, ExitCode> {
        let bytes = self.read().map_err(|e| {
            eprintln!("error: {}", e);
            ExitCode::from(EXIT_IO)
        })?;
        let limits = Limits::default().with_max_nesting_depth(self.max_depth);
        parse_slice_with_limits(&bytes, limits).map_err(|e| {
            eprintln!("error: {}", e);
            ExitCode::from(EXIT_INVALID)
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("jsontree v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some(Commands::Format { input, pretty }) => match input.load() {
            Ok(value) => {
                println!("{}", stringify(&value, pretty));
                ExitCode::SUCCESS
            }
            Err(code) => code,
        },
        Some(Commands::Validate { input }) => match input.load() {
            Ok(_) => {
                println!("ok");
                ExitCode::SUCCESS
            }
            Err(code) => code,
        },
        None => {
            println!("jsontree v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}
