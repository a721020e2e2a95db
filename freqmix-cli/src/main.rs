use clap::{Parser, Subcommand, ValueEnum};
use freqmix::io::{load_image, save_image};
use freqmix::{apply_frequency_filter, create_hybrid_image, Band};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Frequency-domain filtering and hybrid images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Enable tracing output for pipeline profiling.
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a low-pass or high-pass frequency filter to one image.
    Filter {
        /// Input image path.
        input: PathBuf,
        /// Which spectral band to keep.
        #[arg(long, value_enum)]
        band: BandArg,
        /// Disk radius in frequency-plane pixels.
        #[arg(long, default_value_t = 30)]
        radius: u32,
        /// Output image path (format from extension).
        #[arg(short, long, default_value = "filtered.png")]
        output: PathBuf,
    },
    /// Compose a hybrid image from two inputs.
    Hybrid {
        /// Image providing the low-frequency content.
        image_a: PathBuf,
        /// Image providing the high-frequency content (resized to match A).
        image_b: PathBuf,
        /// Low-pass radius applied to image A.
        #[arg(long, default_value_t = 20)]
        radius_a: u32,
        /// High-pass radius applied to image B.
        #[arg(long, default_value_t = 20)]
        radius_b: u32,
        /// Output image path (format from extension).
        #[arg(short, long, default_value = "hybrid.png")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BandArg {
    LowPass,
    HighPass,
}

impl From<BandArg> for Band {
    fn from(value: BandArg) -> Self {
        match value {
            BandArg::LowPass => Band::LowPass,
            BandArg::HighPass => Band::HighPass,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    match cli.command {
        Command::Filter {
            input,
            band,
            radius,
            output,
        } => {
            let image = load_image(&input)?;
            let result = apply_frequency_filter(&image, band.into(), radius)?;
            save_image(&result, &output)?;
            println!(
                "{} -> {} ({}x{}, {:?} r={})",
                input.display(),
                output.display(),
                result.rows(),
                result.cols(),
                Band::from(band),
                radius,
            );
        }
        Command::Hybrid {
            image_a,
            image_b,
            radius_a,
            radius_b,
            output,
        } => {
            let a = load_image(&image_a)?;
            let b = load_image(&image_b)?;
            let result = create_hybrid_image(&a, &b, radius_a, radius_b)?;
            save_image(&result, &output)?;
            println!(
                "{} + {} -> {} ({}x{}, r_a={} r_b={})",
                image_a.display(),
                image_b.display(),
                output.display(),
                result.rows(),
                result.cols(),
                radius_a,
                radius_b,
            );
        }
    }
    Ok(())
}
