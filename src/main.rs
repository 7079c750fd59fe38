use std::error::Error;
use std::io::{self, IsTerminal};
use std::num::NonZeroUsize;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use linecode_rs::input::Mode;
use linecode_rs::phy::{LineCoder, SCHEMES, SignalEncoder};
use linecode_rs::render::{JsonRenderer, PlotRenderer, WaveformRenderer};
use linecode_rs::ui::run_interactive;
use linecode_rs::utils::consts::{DEFAULT_COLUMNS_PER_BIT, DEFAULT_SAMPLES_PER_BIT};
use linecode_rs::utils::logging::init_logging;

#[derive(Parser)]
#[command(author, version, about = "Render a value as telecom line-code waveforms", long_about = None)]
struct Cli {
    /// Samples per bit period (time resolution of every waveform)
    #[arg(long, global = true, default_value_t = NonZeroUsize::new(DEFAULT_SAMPLES_PER_BIT).unwrap_or(NonZeroUsize::MIN))]
    samples_per_bit: NonZeroUsize,

    /// Terminal columns drawn per bit
    #[arg(long, global = true, default_value_t = NonZeroUsize::new(DEFAULT_COLUMNS_PER_BIT).unwrap_or(NonZeroUsize::MIN))]
    columns_per_bit: NonZeroUsize,

    #[arg(long, global = true, value_enum, default_value_t = Format::Plot)]
    format: Format,

    /// Single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Plain plots without ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode one value and print every line code
    Encode {
        #[arg(short, long, value_enum, default_value_t = InputMode::Integer)]
        mode: InputMode,
        value: String,
    },
    /// List the line codes in plotting order
    Schemes,
    /// Prompt for values until stopped
    Interactive,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputMode {
    Integer,
    Hex,
    Binary,
}

impl From<InputMode> for Mode {
    fn from(mode: InputMode) -> Self {
        match mode {
            InputMode::Integer => Mode::Integer,
            InputMode::Hex => Mode::HexBytes,
            InputMode::Binary => Mode::Binary,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Plot,
    Json,
}

fn make_renderer(cli: &Cli) -> Box<dyn WaveformRenderer> {
    match cli.format {
        Format::Plot => {
            let color = !cli.no_color && io::stdout().is_terminal();
            Box::new(PlotRenderer::new(io::stdout(), cli.columns_per_bit).with_color(color))
        }
        Format::Json => Box::new(JsonRenderer::new(io::stdout(), !cli.compact)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    let encoder = SignalEncoder::new(LineCoder::new(cli.samples_per_bit));
    let mut renderer = make_renderer(&cli);

    match cli.command {
        Some(Commands::Encode { mode, value }) => {
            let mode = Mode::from(mode);
            match encoder.encode_text(&value, mode) {
                Ok(frame) => {
                    info!("Encoded {} bits", frame.bits.len());
                    renderer.render(&frame)?;
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Schemes) => {
            for (index, (name, _)) in SCHEMES
                .iter()
                .enumerate()
            {
                println!("{}. {}", index + 1, name);
            }
        }
        Some(Commands::Interactive) | None => {
            run_interactive(&encoder, renderer.as_mut())?;
        }
    }

    Ok(())
}
