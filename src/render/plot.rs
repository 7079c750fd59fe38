// Terminal step plots, one strip per line code.
// Rows are the levels +1 / 0 / -1; `┆` marks every bit boundary.

use std::io::{self, Write};
use std::num::NonZeroUsize;

use tracing::debug;

use super::{WaveformRenderer, bit_string, hex_string};
use crate::phy::{EncodedFrame, Waveform};
use crate::utils::consts::{BINARY_PREVIEW_BITS, BINARY_PREVIEW_LIMIT, PLOT_LABEL_WIDTH};

const ROWS: usize = 3;
const TICKS: [&str; ROWS] = ["+1", "0", "-1"];

/// Trace colors, one per registry slot
const PALETTE: [(u8, u8, u8); 9] = [
    (0x4f, 0xc3, 0xf7),
    (0xff, 0x8a, 0x65),
    (0x9c, 0xcc, 0x65),
    (0xff, 0xd5, 0x4f),
    (0xef, 0x53, 0x50),
    (0x7e, 0x57, 0xc2),
    (0x26, 0xa6, 0x9a),
    (0x90, 0xa4, 0xae),
    (0xff, 0xff, 0xff),
];
const RESET: &str = "\x1b[0m";

/// 24-bit ANSI foreground for the strip at `index`
pub fn strip_color(index: usize) -> String {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn level_row(level: f32) -> usize {
    (1.0 - level.round().clamp(-1.0, 1.0)) as usize
}

/// Take the sample at the start of every column
pub fn downsample(waveform: &Waveform, columns_per_bit: usize) -> Vec<f32> {
    let samples_per_bit = waveform.samples_per_bit();
    let columns = waveform.num_bits() * columns_per_bit;
    (0..columns)
        .map(|c| waveform.level[c * samples_per_bit / columns_per_bit])
        .collect()
}

/// Draw a step-post trace over three level rows (top row is +1)
pub fn step_rows(columns: &[f32], columns_per_bit: usize) -> [String; ROWS] {
    let mut grid = vec![[' '; ROWS]; columns.len()];
    let mut prev: Option<usize> = None;

    for (c, &value) in columns
        .iter()
        .enumerate()
    {
        let cell = &mut grid[c];
        if c % columns_per_bit == 0 {
            *cell = ['┆'; ROWS];
        }

        let row = level_row(value);
        match prev {
            Some(p) if p != row => {
                let (top, bottom) = (row.min(p), row.max(p));
                for r in top + 1..bottom {
                    cell[r] = '│';
                }
                if row < p {
                    cell[row] = '┌';
                    cell[p] = '┘';
                } else {
                    cell[p] = '┐';
                    cell[row] = '└';
                }
            }
            _ => cell[row] = '─',
        }
        prev = Some(row);
    }

    let mut rows: [String; ROWS] = Default::default();
    for cell in &grid {
        for (r, ch) in cell
            .iter()
            .enumerate()
        {
            rows[r].push(*ch);
        }
    }
    rows
}

/// `Hex: <hex>   (<n> bytes)`
pub fn hex_label(bytes: &[u8]) -> String {
    format!("Hex: {}   ({} bytes)", hex_string(bytes), bytes.len())
}

/// `Binary: <bits>`, shortened for long inputs
pub fn binary_label(bits: &[u8]) -> String {
    let bits_str = bit_string(bits);
    if bits_str.len() > BINARY_PREVIEW_LIMIT {
        format!(
            "Binary: {}...({} bits)",
            &bits_str[..BINARY_PREVIEW_BITS],
            bits_str.len()
        )
    } else {
        format!("Binary: {}", bits_str)
    }
}

pub struct PlotRenderer<W: Write> {
    out: W,
    columns_per_bit: usize,
    color: bool,
}

impl<W: Write> PlotRenderer<W> {
    pub fn new(out: W, columns_per_bit: NonZeroUsize) -> Self {
        Self {
            out,
            columns_per_bit: columns_per_bit.get(),
            color: false,
        }
    }

    /// Color each strip's label and trace
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_strip(&mut self, index: usize, name: &str, columns: &[f32]) -> io::Result<()> {
        let rows = step_rows(columns, self.columns_per_bit);
        let (start, end) = if self.color {
            (strip_color(index), RESET)
        } else {
            (String::new(), "")
        };
        for (r, row) in rows
            .iter()
            .enumerate()
        {
            let label = if r == ROWS / 2 { name } else { "" };
            writeln!(
                self.out,
                "{}{:<width$}{}{:>3} │{}{}{}",
                start,
                label,
                end,
                TICKS[r],
                start,
                row,
                end,
                width = PLOT_LABEL_WIDTH
            )?;
        }
        writeln!(self.out)
    }

    /// Bit values under the first column of each slot
    fn write_bit_axis(&mut self, bits: &[u8]) -> io::Result<()> {
        let mut axis = String::with_capacity(bits.len() * self.columns_per_bit);
        for &bit in bits {
            axis.push(if bit == 0 { '0' } else { '1' });
            axis.extend(std::iter::repeat_n(' ', self.columns_per_bit - 1));
        }
        writeln!(self.out, "{:<width$}     {}", "", axis, width = PLOT_LABEL_WIDTH)?;
        writeln!(
            self.out,
            "{:<width$}     Bit index (time)",
            "",
            width = PLOT_LABEL_WIDTH
        )
    }
}

impl<W: Write> WaveformRenderer for PlotRenderer<W> {
    fn render(&mut self, frame: &EncodedFrame) -> io::Result<()> {
        debug!(
            "Plotting {} waveforms, {} columns per bit",
            frame.waveforms.len(),
            self.columns_per_bit
        );

        writeln!(self.out, "{}", hex_label(&frame.bytes))?;
        writeln!(self.out, "{}", binary_label(&frame.bits))?;
        writeln!(self.out)?;

        for (index, (scheme, waveform)) in frame
            .waveforms
            .iter()
            .enumerate()
        {
            let columns = downsample(waveform, self.columns_per_bit);
            self.write_strip(index, scheme.name(), &columns)?;
        }
        self.write_bit_axis(&frame.bits)?;
        self.out.flush()
    }
}
