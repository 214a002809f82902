//! Command input.
//!
//! This module opens the stream of navigation commands, one per line, from a
//! file or stdin and feeds it to a [`Navigator`]. Gzipped input is
//! decompressed transparently.

use crate::history::navigator::Navigator;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens a command stream.
///
/// `None` or `-` reads from stdin. Files ending in `.gz`, and stdin that
/// starts with the gzip magic bytes, are decompressed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or stdin cannot be read.
///
/// # Examples
///
/// ```no_run
/// use navreplay::file::loader::open_commands;
///
/// let reader = open_commands(Some("commands.txt")).unwrap();
/// ```
pub fn open_commands<P: AsRef<Path>>(path: Option<P>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path.as_ref() != Path::new("-") => open_commands_file(path),
        _ => open_commands_stdin(),
    }
}

fn open_commands_file<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open command file {}", path.display()))?;

    let is_gzipped = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    if is_gzipped {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn open_commands_stdin() -> Result<Box<dyn BufRead>> {
    sniff_gzip(io::stdin()).context("Failed to read from stdin")
}

/// Wraps `reader`, decompressing it if it starts with the gzip magic bytes.
///
/// A pipe may hand out fewer bytes per read than the magic needs, so the
/// first two bytes are read in full (or up to EOF) before deciding.
pub fn sniff_gzip<R: Read + 'static>(mut reader: R) -> io::Result<Box<dyn BufRead>> {
    let mut head = Vec::with_capacity(GZIP_MAGIC.len());
    (&mut reader)
        .take(GZIP_MAGIC.len() as u64)
        .read_to_end(&mut head)?;

    let is_gzipped = head.starts_with(&GZIP_MAGIC);
    let stream = io::Cursor::new(head).chain(reader);

    if is_gzipped {
        Ok(Box::new(BufReader::new(GzDecoder::new(stream))))
    } else {
        Ok(Box::new(BufReader::new(stream)))
    }
}

/// Feeds every line of `reader` to `navigator`, in order.
///
/// Lines that are not valid UTF-8 are decoded lossily and still applied.
/// Returns the number of lines applied.
///
/// # Errors
///
/// Returns an error naming the line number if the underlying reader fails.
pub fn replay<R: BufRead>(mut reader: R, navigator: &mut Navigator) -> Result<usize> {
    let mut buf = Vec::new();
    let mut count = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read command on line {}", count + 1))?;
        if read == 0 {
            break;
        }
        count += 1;

        let bytes = buf
            .strip_suffix(b"\n")
            .map(|rest| rest.strip_suffix(b"\r").unwrap_or(rest))
            .unwrap_or(buf.as_slice());
        let line = String::from_utf8_lossy(bytes);
        if matches!(line, Cow::Owned(_)) {
            log::warn!("Line {} is not valid UTF-8, replaying it lossily", count);
        }
        navigator.apply_line(&line);
    }
    Ok(count)
}
