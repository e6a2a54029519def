//! Diverging-colormap PNG rendering of a filterbank matrix.
//!
//! Time runs left to right, filter index bottom to top. Taps map onto a
//! blue-white-red diverging colormap centered at zero, scaled by the
//! largest absolute tap in the bank. Encoder settings are fixed so the
//! same bank always produces byte-identical PNG output.

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use mpgtf::Filterbank;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

/// Render `bank` to a PNG file at `path`, `cell_size` pixels per tap.
pub fn write_png(bank: &Filterbank, path: &Path, cell_size: u32) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_png_to_writer(bank, BufWriter::new(file), cell_size)
}

/// Render `bank` as PNG bytes into any writer.
pub fn write_png_to_writer<W: Write>(bank: &Filterbank, writer: W, cell_size: u32) -> Result<()> {
    let cell_size = cell_size.max(1);
    let width = bank.num_samples() as u32 * cell_size;
    let height = bank.num_filters() as u32 * cell_size;

    let peak = bank
        .taps()
        .iter()
        .fold(0.0_f64, |acc, &tap| acc.max(tap.abs()));

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for y in 0..height {
        // Row 0 is drawn at the bottom
        let filter = bank.num_filters() - 1 - (y / cell_size) as usize;
        let row = bank.row(filter);
        for x in 0..width {
            let tap = row[(x / cell_size) as usize];
            let value = if peak > 0.0 { tap / peak } else { 0.0 };
            data.extend_from_slice(&diverging_rgb(value));
        }
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    // Fixed settings keep the encoded bytes identical across runs
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&data)?;

    Ok(())
}

/// Maps a tap in [-1, 1] onto blue-white-red: negative taps fade to blue,
/// positive taps to red, zero is white.
fn diverging_rgb(value: f64) -> [u8; 3] {
    let value = value.clamp(-1.0, 1.0);
    let fade = (255.0 * (1.0 - value.abs())).round() as u8;
    if value >= 0.0 {
        [255, fade, fade]
    } else {
        [fade, fade, 255]
    }
}
