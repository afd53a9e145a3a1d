use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pp20::{pack, unpack};

#[derive(Parser, Debug)]
#[command(name = "pp20")]
#[command(about = "Compress and decompress PowerPacker (PP20) files")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file, writing <input>.pp
    Pack {
        /// File to compress
        input: PathBuf,

        /// Output path (default: <input>.pp)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show compression statistics
        #[arg(short, long)]
        verbose: bool,
    },
    /// Decompress a packed file to stdout or a file
    Unpack {
        /// Packed file to decompress
        input: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show decompression statistics
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Command::Pack { input, output, verbose } => run_pack(&input, output, verbose),
        Command::Unpack { input, output, verbose } => run_unpack(&input, output, verbose),
    }
}

fn run_pack(
    input: &Path,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let start = std::time::Instant::now();
    let packed = pack(&data);
    let elapsed = start.elapsed();

    let output = output.unwrap_or_else(|| {
        let mut name = input.as_os_str().to_owned();
        name.push(".pp");
        PathBuf::from(name)
    });
    fs::write(&output, &packed)?;

    eprintln!("{} successfully created", output.display());
    if verbose {
        eprintln!("  Input bytes:      {}", data.len());
        eprintln!("  Output bytes:     {}", packed.len());
        eprintln!("  Ratio:            {:.1}%", 100.0 * packed.len() as f64 / data.len().max(1) as f64);
        eprintln!("  Time:             {:.2?}", elapsed);
        eprintln!(
            "  Throughput:       {:.1} MB/s",
            data.len() as f64 / elapsed.as_secs_f64() / 1_000_000.0
        );
    }

    Ok(())
}

fn run_unpack(
    input: &Path,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let start = std::time::Instant::now();
    let unpacked = unpack(&data)?;
    let elapsed = start.elapsed();

    match &output {
        Some(path) => fs::write(path, &unpacked)?,
        None => io::stdout().lock().write_all(&unpacked)?,
    }

    if verbose {
        eprintln!("  Input bytes:      {}", data.len());
        eprintln!("  Output bytes:     {}", unpacked.len());
        eprintln!("  Time:             {:.2?}", elapsed);
        eprintln!(
            "  Throughput:       {:.1} MB/s",
            unpacked.len() as f64 / elapsed.as_secs_f64() / 1_000_000.0
        );
    }

    Ok(())
}
