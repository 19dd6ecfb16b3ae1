mod utils;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use utils::{exists_decision, Assume};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Subcommands,

    /// Overwrite output files
    #[arg(short = 'y', long = "overwrite", conflicts_with = "assumeno")]
    assumeyes: bool,

    /// Do not overwrite output files
    #[arg(short = 'n', long = "preserve", conflicts_with = "assumeyes")]
    assumeno: bool,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Compress an image (or any file with --lossless) into a WISP artifact
    Compress(CompressArgs),

    /// Decompress a WISP artifact back into an image or raw byte stream
    Decompress(DecompressArgs),
}

#[derive(Debug, Args)]
struct CompressArgs {
    /// Input file; any image type supported by `image` for the lossy
    /// codec, anything at all for the lossless one
    input: PathBuf,
    /// Output path for the artifact
    output: PathBuf,

    /// Quality setting, a higher value = higher quality.
    #[arg(default_value_t = wisp::DEFAULT_QUALITY, short, long, conflicts_with = "lossless", value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Use the lossless predictive codec over the raw file bytes.
    ///
    /// Incompatible with quality setting.
    #[arg(short, long)]
    lossless: bool,
}

#[derive(Debug, Args)]
struct DecompressArgs {
    /// Input WISP artifact
    input: PathBuf,

    /// Output file; an image path for lossy artifacts, a raw byte stream
    /// for lossless ones
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let assume = if args.assumeyes {
        Some(Assume::Yes)
    } else if args.assumeno {
        Some(Assume::No)
    } else {
        None
    };

    match args.command {
        Subcommands::Compress(a) => compress(a, assume),
        Subcommands::Decompress(a) => decompress(a, assume),
    }
}

fn compress(args: CompressArgs, assume: Option<Assume>) -> Result<()> {
    if !args.input.try_exists()? {
        bail!("Input file {:?} does not exist", args.input);
    }

    if args.output.try_exists()?
        && !exists_decision("Output", "Overwrite", &args.output, assume)
    {
        return Ok(())
    }

    let info = if args.lossless {
        wisp::compress_lossless(&args.input, &args.output)?
    } else {
        wisp::compress_lossy(&args.input, &args.output, args.quality)?
    };

    match info.quality {
        Some(quality) => println!(
            "Wrote lossy artifact for a {}x{} image at quality {quality}",
            info.width, info.height
        ),
        None => println!(
            "Wrote lossless artifact framed as {} rows of {} bytes",
            info.height, info.width
        ),
    }

    Ok(())
}

fn decompress(args: DecompressArgs, assume: Option<Assume>) -> Result<()> {
    if !args.input.try_exists()? {
        bail!("Input file {:?} does not exist", args.input);
    }

    if args.output.try_exists()?
        && !exists_decision("Output", "Overwrite", &args.output, assume)
    {
        return Ok(())
    }

    // The artifact is self-describing, so no mode flag is needed here.
    let written = wisp::decompress(&args.input, &args.output)?;
    println!("Reconstruction written to {:?}", written);

    Ok(())
}
