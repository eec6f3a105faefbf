//! Indexed PNG encoding (color type 3).
//!
//! Overlay rasters carry a handful of known colors, so the palette is passed
//! in up front and each cell maps straight to a palette index: 1 byte per
//! pixel, little to compress, no palette extraction pass.

use std::io::Write;

use field_common::{FieldError, FieldResult};

use crate::palette::Rgba;

/// Create an indexed PNG from a palette and per-pixel palette indices.
///
/// A tRNS chunk is written when any palette entry is translucent.
pub fn create_png_indexed(
    width: usize,
    height: usize,
    palette: &[Rgba],
    indices: &[u8],
) -> FieldResult<Vec<u8>> {
    if palette.is_empty() || palette.len() > 256 {
        return Err(FieldError::RenderError(format!(
            "palette must hold 1..=256 entries, got {}",
            palette.len()
        )));
    }
    if indices.len() != width * height {
        return Err(FieldError::RenderError(format!(
            "expected {} indices for a {}x{} image, got {}",
            width * height,
            width,
            height,
            indices.len()
        )));
    }
    if let Some(bad) = indices.iter().find(|&&i| i as usize >= palette.len()) {
        return Err(FieldError::RenderError(format!(
            "index {} exceeds palette of {} entries",
            bad,
            palette.len()
        )));
    }

    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth (8 bits per palette index)
    ihdr_data.push(3); // color type 3 = indexed
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // PLTE chunk (palette)
    let mut plte_data = Vec::with_capacity(palette.len() * 3);
    for (r, g, b, _) in palette {
        plte_data.push(*r);
        plte_data.push(*g);
        plte_data.push(*b);
    }
    write_chunk(&mut png, b"PLTE", &plte_data);

    // tRNS chunk (transparency) - only if any color has alpha < 255
    let has_transparency = palette.iter().any(|(_, _, _, a)| *a < 255);
    if has_transparency {
        let trns_data: Vec<u8> = palette.iter().map(|(_, _, _, a)| *a).collect();
        write_chunk(&mut png, b"tRNS", &trns_data);
    }

    // IDAT chunk (image data)
    let idat_data = deflate_idat_indexed(indices, width, height)
        .map_err(|e| FieldError::RenderError(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk: length, type, data, CRC over type+data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let crc_data = [chunk_type.as_slice(), data].concat();
    let crc = crc32fast::hash(&crc_data);
    png.extend_from_slice(&crc.to_be_bytes());
}

/// Deflate indexed image data for the IDAT chunk.
fn deflate_idat_indexed(indices: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    // Each scanline is a filter byte (0 = none) plus `width` index bytes.
    let mut uncompressed = Vec::with_capacity(height * (1 + width));
    for y in 0..height {
        uncompressed.push(0); // filter type: none
        let row_start = y * width;
        uncompressed.extend_from_slice(&indices[row_start..row_start + width]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPAQUE_PALETTE: [Rgba; 2] = [(255, 0, 0, 255), (0, 255, 0, 255)];

    #[test]
    fn test_png_signature_and_header() {
        let png = create_png_indexed(2, 2, &OPAQUE_PALETTE, &[0, 1, 1, 0]).unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        // IHDR data starts at offset 16: width, height, depth, color type.
        assert_eq!(&png[16..20], &2u32.to_be_bytes());
        assert_eq!(&png[20..24], &2u32.to_be_bytes());
        assert_eq!(png[24], 8);
        assert_eq!(png[25], 3);
    }

    #[test]
    fn test_opaque_palette_skips_trns() {
        let png = create_png_indexed(2, 1, &OPAQUE_PALETTE, &[0, 1]).unwrap();
        assert!(!contains_chunk(&png, b"tRNS"));
    }

    #[test]
    fn test_translucent_palette_writes_trns() {
        let palette: [Rgba; 2] = [(255, 0, 0, 180), (0, 255, 0, 255)];
        let png = create_png_indexed(2, 1, &palette, &[0, 1]).unwrap();
        assert!(contains_chunk(&png, b"tRNS"));
    }

    #[test]
    fn test_rejects_index_outside_palette() {
        let result = create_png_indexed(2, 1, &OPAQUE_PALETTE, &[0, 2]);
        assert!(matches!(result, Err(FieldError::RenderError(_))));
    }

    #[test]
    fn test_rejects_mismatched_index_count() {
        let result = create_png_indexed(2, 2, &OPAQUE_PALETTE, &[0, 1]);
        assert!(matches!(result, Err(FieldError::RenderError(_))));
    }

    #[test]
    fn test_rejects_empty_palette() {
        let result = create_png_indexed(1, 1, &[], &[0]);
        assert!(matches!(result, Err(FieldError::RenderError(_))));
    }

    fn contains_chunk(png: &[u8], chunk_type: &[u8; 4]) -> bool {
        png.windows(4).any(|w| w == chunk_type)
    }
}
