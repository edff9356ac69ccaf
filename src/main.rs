use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use varbits::{ByteSource, FileBytes, RandomBytes, SymbolIndex};

#[derive(Parser, Debug)]
#[command(
    name = "varbits",
    about = "Index 16-bit symbols by position and report the packed size"
)]
struct Cli {
    /// Read input from this file instead of generating random bytes
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of random bytes to generate
    #[arg(short, long, default_value_t = 65536)]
    len: usize,

    /// Largest random byte value
    #[arg(short = 'm', long, default_value_t = RandomBytes::DEFAULT_MAX_BYTE)]
    max_byte: u8,

    /// Seed for reproducible random input
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every symbol with its positions
    #[arg(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> varbits::Result<()> {
    let mut source: Box<dyn ByteSource> = match &cli.file {
        Some(path) => {
            info!(path = %path.display(), "indexing file");
            Box::new(FileBytes::new(path))
        }
        None => {
            info!(
                len = cli.len,
                max_byte = cli.max_byte,
                seed = ?cli.seed,
                "indexing random bytes"
            );
            Box::new(RandomBytes {
                len: cli.len,
                max_byte: cli.max_byte,
                seed: cli.seed,
            })
        }
    };

    let bytes = source.bytes()?;
    let index = SymbolIndex::from_bytes(&bytes);

    if cli.dump {
        for (symbol, container) in index.entries() {
            println!("Key: {symbol}, Value: {container}");
        }
    }
    println!("{}", index.report(bytes.len()));
    Ok(())
}
