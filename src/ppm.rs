//! Plain-text P3 pixel format.
//!
//! ## Decoding
//!
//! The whole text is split on every run of characters that are neither ASCII
//! digits nor `P`, so any whitespace or line-ending layout is accepted. The
//! tokens are then consumed in fixed order: the `P3` marker, width, height,
//! maximum color value (checked to be numeric, otherwise ignored) and
//! `width * height` RGB triples in row-major order. Trailing tokens are
//! ignored.
//!
//! The header is checked against the number of tokens actually present
//! before the grid is allocated.
//!
//! ## Encoding
//!
//! `P3`, `{width} {height}`, `255`, then one line of space separated triples
//! per row. Every line ends with CRLF.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::color::Color;
use crate::errors::{format_error, io_error, Result};
use crate::image::Image;

pub const MAGIC: &str = "P3";
pub const MAX_COLOR: i32 = 255;
const LINE_END: &str = "\r\n";

struct Tokens<'a> {
    iter: std::vec::IntoIter<&'a str>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let tokens: Vec<&'a str> = text
            .split(|c: char| !(c.is_ascii_digit() || c == 'P'))
            .filter(|t| !t.is_empty())
            .collect();
        Tokens { iter: tokens.into_iter() }
    }

    fn next(&mut self, what: &str) -> Result<&'a str> {
        self.iter
            .next()
            .ok_or_else(|| format_error(format!("unexpected end of input, expected {what}")))
    }

    fn next_number<T: std::str::FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self.next(what)?;
        token
            .parse::<T>()
            .map_err(|_| format_error(format!("invalid {what} '{token}'")))
    }

    /// Next token, which must be all ASCII digits of any length.
    fn next_digits(&mut self, what: &str) -> Result<&'a str> {
        let token = self.next(what)?;
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format_error(format!("invalid {what} '{token}'")));
        }
        Ok(token)
    }

    fn remaining(&self) -> usize {
        self.iter.len()
    }
}

/// Decode P3 text into an image.
///
/// # Errors
/// `FormatError` for a missing marker, a non-numeric token, a zero dimension
/// or fewer color values than the header declares.
pub fn decode(text: &str) -> Result<Image> {
    let mut tokens = Tokens::new(text);

    let magic = tokens.next("P3 marker")?;
    if magic != MAGIC {
        return Err(format_error(format!("expected marker {MAGIC}, found '{magic}'")));
    }

    let width: usize = tokens.next_number("width")?;
    let height: usize = tokens.next_number("height")?;
    let max_color = tokens.next_digits("maximum color value")?;
    if width == 0 || height == 0 {
        return Err(format_error(format!("invalid dimension {width}x{height}")));
    }
    let values = width.checked_mul(height).and_then(|n| n.checked_mul(3));
    match values {
        Some(n) if n <= tokens.remaining() => {}
        _ => {
            return Err(format_error(format!(
                "header declares {width}x{height} pixels but only {} color values follow",
                tokens.remaining()
            )))
        }
    }
    debug!(width, height, max_color, "decoding P3 image");

    let mut image = Image::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let red = tokens.next_number("red value")?;
            let green = tokens.next_number("green value")?;
            let blue = tokens.next_number("blue value")?;
            image.set(x, y, Color::new(red, green, blue))?;
        }
    }

    if tokens.remaining() > 0 {
        debug!(count = tokens.remaining(), "ignoring trailing tokens");
    }
    Ok(image)
}

/// Encode an image as P3 text.
pub fn encode(image: &Image) -> String {
    let mut out = format!(
        "{MAGIC}{LINE_END}{} {}{LINE_END}{MAX_COLOR}{LINE_END}",
        image.width(),
        image.height()
    );

    for row in image.pixels().rows() {
        let line: Vec<String> =
            row.iter().map(|c| format!("{} {} {}", c.red, c.green, c.blue)).collect();
        out.push_str(&line.join(" "));
        out.push_str(LINE_END);
    }
    out
}

/// Read and decode a P3 file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read input");
    decode(&text)
}

/// Encode an image and write it to `path`.
///
/// The file is only created once the full text is encoded.
pub fn write_file(image: &Image, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = encode(image);
    fs::write(path, text.as_bytes()).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}
