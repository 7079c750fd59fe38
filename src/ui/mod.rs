use std::error::Error;

use dialoguer::{Confirm, Input, Select};
use tracing::{info, warn};

use crate::input::Mode;
use crate::phy::SignalEncoder;
use crate::render::WaveformRenderer;
use crate::utils::consts::DEFAULT_INPUT;

pub fn print_banner() {
    println!("linecode-rs");
}

/// Prefilled value for the next prompt: the last value, or the selected
/// mode's sample when the last value was blank.
pub fn next_default(previous: &str, mode: Mode) -> String {
    if previous.trim().is_empty() {
        mode.sample_input().to_string()
    } else {
        previous.to_string()
    }
}

/// Prompt for mode and value, render, repeat until the user stops.
/// Invalid values are reported and the session carries on.
pub fn run_interactive<R: WaveformRenderer + ?Sized>(
    encoder: &SignalEncoder,
    renderer: &mut R,
) -> Result<(), Box<dyn Error>> {
    print_banner();

    let mode_names: Vec<&str> = Mode::ALL
        .iter()
        .map(|mode| mode.name())
        .collect();
    let mut mode = Mode::Integer;
    let mut value = DEFAULT_INPUT.to_string();

    loop {
        let index = Select::new()
            .with_prompt("Mode")
            .items(&mode_names)
            .default(
                Mode::ALL
                    .iter()
                    .position(|m| *m == mode)
                    .unwrap_or(0),
            )
            .interact()?;
        mode = Mode::ALL[index];
        let initial = next_default(&value, mode);

        value = Input::<String>::new()
            .with_prompt("Value")
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;

        match encoder.encode_text(&value, mode) {
            Ok(frame) => {
                info!("Encoded {} bytes in mode {}", frame.bytes.len(), mode);
                renderer.render(&frame)?;
            }
            Err(err) => {
                warn!("Rejected input {:?}: {}", value, err);
                eprintln!("Error: {}", err);
            }
        }

        let again = Confirm::new()
            .with_prompt("Encode another value?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}
