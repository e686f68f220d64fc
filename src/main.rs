use clap::{Parser, Subcommand};
use pixmap_filter::config::{self, ConfigOverrides};
use pixmap_filter::imaging::{FilterKind, PixmapEncoding};
use pixmap_filter::output::{self, ImageInfo};
use pixmap_filter::process::{self, ProcessRequest};
use pixmap_filter::{logging, naming};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pixmap-filter")]
#[command(about = "Apply an ordered chain of filters to a PPM image")]
#[command(long_about = "\
Apply an ordered chain of filters to a PPM image

Filters run in the order given and may repeat:

  grayscale  (g)  average the three channels
  invert     (i)  255 - value on every channel
  contrast   (x)  stretch channels away from mid-gray
  blur       (b)  box blur; edge pixels are left untouched
  mirror     (m)  flip left/right
  downsample (c)  keep every other row and column

Example:

  pixmap-filter apply photo.ppm -f grayscale,blur -f downsample

writes photo_output.ppm. Run 'pixmap-filter gen-config' for the tunable
contrast and blur parameters.")]
#[command(version)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter an image and write the result
    Apply(ApplyArgs),
    /// Print an image's dimensions
    Info {
        /// Input PPM file
        input: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock filters.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct ApplyArgs {
    /// Input PPM file
    input: PathBuf,

    /// Output file [default: <input stem>_output.<ext>]
    output: Option<PathBuf>,

    /// Filters to apply, in order (repeatable, comma-separated)
    #[arg(short = 'f', long = "filter", value_enum, value_delimiter = ',')]
    filters: Vec<FilterKind>,

    /// Config file with filter parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Contrast factor (overrides config)
    #[arg(long, value_name = "FACTOR")]
    contrast: Option<f32>,

    /// Blur radius (overrides config)
    #[arg(long, value_name = "RADIUS")]
    blur_radius: Option<usize>,

    /// Write ASCII (P3) instead of binary (P6)
    #[arg(long)]
    ascii: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Apply(args) => {
            let overrides = ConfigOverrides {
                contrast_factor: args.contrast,
                blur_radius: args.blur_radius,
                encoding: args.ascii.then_some(PixmapEncoding::Ascii),
            };
            let config = overrides.apply(config::load_config(args.config.as_deref())?)?;
            let output_path = args
                .output
                .unwrap_or_else(|| naming::derive_output_path(&args.input));
            let request = ProcessRequest {
                input: args.input,
                output: output_path,
                steps: args.filters,
                config,
            };

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_process_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = process::process(&request, Some(tx));
            printer
                .join()
                .map_err(|_| "progress printer thread panicked")?;
            output::print_summary(&result?);
        }
        Command::Info { input, json } => {
            let dims = process::identify(&input)?;
            output::print_info(&ImageInfo::new(&input, dims), json)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
