//! PNG encoding for RGBA canvas data.
//!
//! Two encoding modes:
//! - **Indexed (color type 3)** when the figure has at most 256 unique
//!   colors, which is common for flat-shaded plots. Smaller and faster.
//! - **RGBA (color type 6)** as the fallback for anything richer, such as
//!   anti-aliased surface fills.
//!
//! `create_png_auto` picks the mode; zlib streams come from `flate2` and
//! chunk CRCs from `crc32fast`.

use std::collections::HashMap;
use std::io::Write;

use plot_common::{PlotError, PlotResult};
use rayon::prelude::*;

/// Maximum palette entries for an indexed PNG.
const MAX_PALETTE_SIZE: usize = 256;

/// Below this pixel count the parallel palette scan is not worth it.
const PARALLEL_THRESHOLD: usize = 4096;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Encode RGBA pixels, choosing indexed or full-color output automatically.
pub fn create_png_auto(pixels: &[u8], width: usize, height: usize) -> PlotResult<Vec<u8>> {
    let num_pixels = pixels.len() / 4;

    let palette = if num_pixels >= PARALLEL_THRESHOLD {
        extract_palette_parallel(pixels)
    } else {
        extract_palette_sequential(pixels)
    };

    match palette {
        Some((palette, indices)) => create_png_indexed(width, height, &palette, &indices),
        None => create_png_rgba(pixels, width, height),
    }
}

/// Pack RGBA bytes into a u32 for fast hashing.
#[inline(always)]
fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24)
}

#[inline(always)]
fn unpack_color(packed: u32) -> (u8, u8, u8, u8) {
    (
        packed as u8,
        (packed >> 8) as u8,
        (packed >> 16) as u8,
        (packed >> 24) as u8,
    )
}

/// Single-pass palette extraction. Returns `None` once a 257th unique
/// color shows up.
fn extract_palette_sequential(pixels: &[u8]) -> Option<(Vec<(u8, u8, u8, u8)>, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<(u8, u8, u8, u8)> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 4);

    for chunk in pixels.chunks_exact(4) {
        let packed = pack_color(chunk[0], chunk[1], chunk[2], chunk[3]);
        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push((chunk[0], chunk[1], chunk[2], chunk[3]));
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Parallel palette extraction for larger canvases: collect unique colors
/// per chunk, merge, then map pixels to indices in a second parallel pass.
fn extract_palette_parallel(pixels: &[u8]) -> Option<(Vec<(u8, u8, u8, u8)>, Vec<u8>)> {
    let chunk_size = (pixels.len() / 4 / rayon::current_num_threads()).max(256) * 4;

    let unique_colors: Vec<u32> = pixels
        .par_chunks(chunk_size)
        .flat_map(|chunk| {
            let mut local: HashMap<u32, ()> = HashMap::with_capacity(MAX_PALETTE_SIZE);
            for pixel in chunk.chunks_exact(4) {
                local.insert(pack_color(pixel[0], pixel[1], pixel[2], pixel[3]), ());
                if local.len() > MAX_PALETTE_SIZE {
                    // this chunk alone rules out indexed mode
                    break;
                }
            }
            local.into_keys().collect::<Vec<_>>()
        })
        .collect();

    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<(u8, u8, u8, u8)> = Vec::with_capacity(MAX_PALETTE_SIZE);
    for packed in unique_colors {
        if !color_to_index.contains_key(&packed) {
            if palette.len() >= MAX_PALETTE_SIZE {
                return None;
            }
            let idx = palette.len() as u8;
            color_to_index.insert(packed, idx);
            palette.push(unpack_color(packed));
        }
    }

    let num_pixels = pixels.len() / 4;
    let mut indices = vec![0u8; num_pixels];
    indices
        .par_chunks_mut(chunk_size / 4)
        .enumerate()
        .for_each(|(chunk_idx, idx_chunk)| {
            let pixel_start = chunk_idx * (chunk_size / 4) * 4;
            for (i, idx) in idx_chunk.iter_mut().enumerate() {
                let offset = pixel_start + i * 4;
                if offset + 3 < pixels.len() {
                    let packed = pack_color(
                        pixels[offset],
                        pixels[offset + 1],
                        pixels[offset + 2],
                        pixels[offset + 3],
                    );
                    *idx = *color_to_index.get(&packed).unwrap_or(&0);
                }
            }
        });

    Some((palette, indices))
}

/// Indexed PNG (color type 3) from a palette and per-pixel indices.
pub fn create_png_indexed(
    width: usize,
    height: usize,
    palette: &[(u8, u8, u8, u8)],
    indices: &[u8],
) -> PlotResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let mut plte = Vec::with_capacity(palette.len() * 3);
    for &(r, g, b, _) in palette {
        plte.push(r);
        plte.push(g);
        plte.push(b);
    }
    write_chunk(&mut png, b"PLTE", &plte);

    // tRNS only when some palette entry is translucent
    if palette.iter().any(|&(_, _, _, a)| a < 255) {
        let trns: Vec<u8> = palette.iter().map(|&(_, _, _, a)| a).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width, height, 1)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Full-color PNG (color type 6) from RGBA pixels.
pub fn create_png_rgba(pixels: &[u8], width: usize, height: usize) -> PlotResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 6));

    let idat = deflate_scanlines(pixels, width, height, 4)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn ihdr(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&(width as u32).to_be_bytes());
    data.extend_from_slice(&(height as u32).to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Prefix each scanline with filter type 0 and zlib-compress the result.
fn deflate_scanlines(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> PlotResult<Vec<u8>> {
    let row_len = width * bytes_per_pixel;
    let mut raw = Vec::with_capacity(height * (1 + row_len));
    for y in 0..height {
        raw.push(0); // filter type: none
        let start = y * row_len;
        raw.extend_from_slice(&data[start..start + row_len]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&raw)
        .map_err(|e| PlotError::Encode(format!("IDAT compression failed: {e}")))?;
    encoder
        .finish()
        .map_err(|e| PlotError::Encode(format!("IDAT compression failed: {e}")))
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
