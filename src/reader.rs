//! Decompression of bz2 dumps.
//!
//! [`read_all`] inflates the whole dump into one string for [`crate::boundary`].
//! [`PageStream`] scans the decompressed bytes as they arrive and yields the same
//! page sequence while holding at most one page plus a read buffer in memory.

use crate::config::{PAGE_CLOSE, PAGE_OPEN, READ_BUFFER_SIZE};
use crate::error::{ExtractError, Result};
use bzip2::read::MultiBzDecoder;
use memchr::memmem::Finder;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub type DumpReader = BufReader<MultiBzDecoder<File>>;

/// Opens a bz2 dump for decompressed reading.
///
/// Multistream dumps (concatenated bz2 streams) are decoded end to end.
pub fn open_dump(path: &Path) -> Result<DumpReader> {
    if !path.exists() {
        return Err(ExtractError::PathNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    Ok(BufReader::with_capacity(
        READ_BUFFER_SIZE,
        MultiBzDecoder::new(file),
    ))
}

/// Decompresses the entire dump and decodes it as UTF-8.
pub fn read_all(path: &Path) -> Result<String> {
    let mut reader = open_dump(path)?;
    info!(path = %path.display(), "Decompressing dump into memory");

    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| ExtractError::from_read(path, e))?;
    debug!(bytes = data.len(), "Decompression finished");

    String::from_utf8(data).map_err(|e| ExtractError::Decode {
        path: path.to_path_buf(),
        message: e.utf8_error().to_string(),
    })
}

/// Incremental page scanner over a decompressed byte stream.
///
/// Yields the inner text of each `<page>` element, exactly as
/// [`crate::boundary::find_records`] would over the full text. Bytes outside
/// pages are dropped once validated as UTF-8, so bad encoding anywhere in the
/// dump still ends the stream with [`ExtractError::Decode`].
pub struct PageStream<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
    open: Finder<'static>,
    close: Finder<'static>,
    in_page: bool,
    // Offset in `buf` where the next search for `</page>` starts.
    scan_from: usize,
    eof: bool,
    done: bool,
}

impl PageStream<DumpReader> {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = open_dump(path)?;
        info!(path = %path.display(), "Streaming pages from dump");
        Ok(Self::new(reader, path))
    }
}

impl<R: BufRead> PageStream<R> {
    /// Wraps an already-decompressed reader. `path` is only used in errors.
    pub fn new(reader: R, path: impl AsRef<Path>) -> Self {
        Self {
            reader,
            path: path.as_ref().to_path_buf(),
            buf: Vec::new(),
            open: Finder::new(PAGE_OPEN.as_bytes()),
            close: Finder::new(PAGE_CLOSE.as_bytes()),
            in_page: false,
            scan_from: 0,
            eof: false,
            done: false,
        }
    }

    fn fill(&mut self) -> Result<()> {
        loop {
            match self.reader.fill_buf() {
                Ok(chunk) if chunk.is_empty() => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(chunk) => {
                    let n = chunk.len();
                    self.buf.extend_from_slice(chunk);
                    self.reader.consume(n);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ExtractError::from_read(&self.path, e)),
            }
        }
    }

    /// Drops `buf[..upto]` after checking it is valid UTF-8. With
    /// `keep_partial`, a multi-byte sequence cut off at `upto` is kept for the
    /// next round instead of being rejected.
    fn discard(&mut self, upto: usize, keep_partial: bool) -> Result<()> {
        let cut = match std::str::from_utf8(&self.buf[..upto]) {
            Ok(_) => upto,
            Err(e) if keep_partial && e.error_len().is_none() => e.valid_up_to(),
            Err(e) => return Err(self.decode_error(e.to_string())),
        };
        self.buf.drain(..cut);
        Ok(())
    }

    fn decode_error(&self, message: String) -> ExtractError {
        ExtractError::Decode {
            path: self.path.clone(),
            message,
        }
    }

    fn next_page(&mut self) -> Result<Option<String>> {
        loop {
            if self.in_page {
                if let Some(pos) = self.close.find(&self.buf[self.scan_from..]) {
                    let end = self.scan_from + pos;
                    let inner = String::from_utf8(self.buf[..end].to_vec())
                        .map_err(|e| self.decode_error(e.utf8_error().to_string()))?;
                    self.buf.drain(..end + PAGE_CLOSE.len());
                    self.in_page = false;
                    self.scan_from = 0;
                    return Ok(Some(inner));
                }
                // A closing tag may straddle the next read.
                self.scan_from = self.buf.len().saturating_sub(PAGE_CLOSE.len() - 1);
                if self.eof {
                    debug!(
                        bytes = self.buf.len(),
                        "Dump ended inside an unterminated page"
                    );
                    let len = self.buf.len();
                    self.discard(len, false)?;
                    return Ok(None);
                }
            } else if let Some(start) = self.open.find(&self.buf) {
                self.discard(start, false)?;
                self.buf.drain(..PAGE_OPEN.len());
                self.in_page = true;
                self.scan_from = 0;
                continue;
            } else if self.eof {
                let len = self.buf.len();
                self.discard(len, false)?;
                return Ok(None);
            } else {
                let keep_from = self.buf.len().saturating_sub(PAGE_OPEN.len() - 1);
                self.discard(keep_from, true)?;
            }
            self.fill()?;
        }
    }
}

impl<R: BufRead> Iterator for PageStream<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_page() {
            Ok(Some(page)) => Some(Ok(page)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
