//! QR code generation.
//!
//! Data is encoded with the `qrcode` crate and rendered as a PNG image, an
//! SVG document or Unicode block text. The quiet zone around the symbol is
//! `border` modules wide and every module is `size` pixels square.

use std::fmt;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use image::{GrayImage, ImageFormat, Luma};
use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::error::{Error, Result};

/// Default pixels per module.
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Default quiet zone width in modules.
pub const DEFAULT_BORDER: u32 = 4;

/// Largest PNG or SVG side length accepted, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// Output format of a rendered QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QrFormat {
    /// Grayscale PNG image
    #[default]
    Png,
    /// SVG document
    Svg,
    /// Unicode block characters
    Txt,
}

impl fmt::Display for QrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Txt => "txt",
        };
        f.write_str(name)
    }
}

/// Error correction level, from about 7% (L) to about 30% (H) recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorCorrection {
    /// About 7% of codewords can be restored
    #[value(name = "L")]
    L,
    /// About 15% of codewords can be restored
    #[default]
    #[value(name = "M")]
    M,
    /// About 25% of codewords can be restored
    #[value(name = "Q")]
    Q,
    /// About 30% of codewords can be restored
    #[value(name = "H")]
    H,
}

impl ErrorCorrection {
    fn level(self) -> EcLevel {
        match self {
            Self::L => EcLevel::L,
            Self::M => EcLevel::M,
            Self::Q => EcLevel::Q,
            Self::H => EcLevel::H,
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrOptions {
    /// Pixels per module (PNG and SVG).
    pub size: u32,
    /// Quiet zone width in modules.
    pub border: u32,
    /// Output format.
    pub format: QrFormat,
    /// Error correction level.
    pub error_correction: ErrorCorrection,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_MODULE_SIZE,
            border: DEFAULT_BORDER,
            format: QrFormat::default(),
            error_correction: ErrorCorrection::default(),
        }
    }
}

/// A rendered QR code.
#[derive(Debug, Clone)]
pub enum QrImage {
    /// Grayscale bitmap.
    Png(GrayImage),
    /// SVG markup.
    Svg(String),
    /// Unicode text, one line per two module rows.
    Text(String),
}

impl QrImage {
    /// Write the rendered code to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if PNG encoding fails, or
    /// [`Error::FileWrite`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        match self {
            Self::Png(image) => image.save_with_format(path, ImageFormat::Png)?,
            Self::Svg(markup) => write_file(path, markup)?,
            Self::Text(text) => write_file(path, text)?,
        }
        debug!(path = %path.display(), "saved QR code");
        Ok(())
    }

    /// The text rendering, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Encode `data` and render it in the requested format.
///
/// Any UTF-8 string is accepted, including the empty string.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `size` is zero or the image would exceed
/// [`MAX_IMAGE_SIDE`], and [`Error::QrEncode`] if the data does not fit in a
/// QR code at the chosen error correction level.
pub fn render_qr(data: &str, options: &QrOptions) -> Result<QrImage> {
    if options.size == 0 {
        return Err(Error::invalid_input("size", "must be greater than zero"));
    }

    let code = QrCode::with_error_correction_level(data, options.error_correction.level())
        .map_err(|err| Error::QrEncode {
            message: err.to_string(),
        })?;
    let modules = u32::try_from(code.width())
        .map_err(|_| Error::invalid_input("data", "QR code is too large"))?;
    debug!(
        version = ?code.version(),
        modules,
        error_correction = ?options.error_correction,
        format = %options.format,
        "encoded QR code"
    );

    let image = match options.format {
        QrFormat::Png => QrImage::Png(render_png(&code, modules, options)?),
        QrFormat::Svg => QrImage::Svg(render_svg(&code, modules, options)?),
        QrFormat::Txt => QrImage::Text(render_text(&code, modules, options.border)?),
    };
    Ok(image)
}

/// Render `data` and write it to `output_path`.
///
/// # Errors
///
/// See [`render_qr`] and [`QrImage::save`].
pub fn create_qr_code(data: &str, output_path: &Path, options: &QrOptions) -> Result<QrImage> {
    let image = render_qr(data, options)?;
    image.save(output_path)?;
    Ok(image)
}

/// Side length in pixels of the symbol plus its quiet zone.
fn image_side(modules: u32, options: &QrOptions) -> Result<u32> {
    let too_large = || Error::invalid_input("size", "image would be too large");
    let side = options
        .border
        .checked_mul(2)
        .and_then(|quiet| quiet.checked_add(modules))
        .and_then(|total| total.checked_mul(options.size))
        .ok_or_else(too_large)?;
    if side > MAX_IMAGE_SIDE {
        return Err(too_large());
    }
    Ok(side)
}

fn render_png(code: &QrCode, modules: u32, options: &QrOptions) -> Result<GrayImage> {
    let side = image_side(modules, options)?;
    let symbol = code
        .render::<Luma<u8>>()
        .quiet_zone(false)
        .module_dimensions(options.size, options.size)
        .build();

    let mut canvas = GrayImage::from_pixel(side, side, Luma([255]));
    let offset = i64::from(options.border * options.size);
    image::imageops::replace(&mut canvas, &symbol, offset, offset);
    Ok(canvas)
}

fn render_svg(code: &QrCode, modules: u32, options: &QrOptions) -> Result<String> {
    let side = image_side(modules, options)?;
    let document = code
        .render::<svg::Color>()
        .quiet_zone(false)
        .module_dimensions(options.size, options.size)
        .build();
    // Drop the XML declaration so the symbol can be nested.
    let symbol = document
        .find("<svg")
        .map_or(document.as_str(), |at| &document[at..]);
    let offset = options.border * options.size;

    Ok(format!(
        concat!(
            r#"<?xml version="1.0" standalone="yes"?>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{side}" height="{side}" viewBox="0 0 {side} {side}" shape-rendering="crispEdges">"#,
            r##"<rect x="0" y="0" width="{side}" height="{side}" fill="#fff"/>"##,
            r#"<g transform="translate({offset} {offset})">{symbol}</g></svg>"#,
        ),
        side = side,
        offset = offset,
        symbol = symbol,
    ))
}

fn render_text(code: &QrCode, modules: u32, border: u32) -> Result<String> {
    // One character per module column.
    let width = image_side(modules, &QrOptions { size: 1, border, ..QrOptions::default() })?;
    let symbol = code
        .render::<unicode::Dense1x2>()
        .quiet_zone(false)
        .build();

    let pad = " ".repeat(border as usize);
    let blank = " ".repeat(width as usize);
    // Each text line holds two module rows.
    let blank_lines = border.div_ceil(2) as usize;

    let mut lines: Vec<String> = Vec::new();
    lines.extend(std::iter::repeat_n(blank.clone(), blank_lines));
    lines.extend(symbol.lines().map(|line| format!("{pad}{line}{pad}")));
    lines.extend(std::iter::repeat_n(blank, blank_lines));
    Ok(lines.join("\n"))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
