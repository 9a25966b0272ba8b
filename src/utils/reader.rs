// File: reader.rs
// Description: opening inputs and creating outputs.
// Plain files are memory mapped, `.gz` files are decompressed on the fly.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use memmap2::Mmap;

use crate::utils::error::{BenchError, Result};

pub type InputReader = Box<dyn BufRead + Send>;
pub type OutputWriter = Box<dyn Write + Send>;

pub fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

pub fn open_input(path: &Path) -> Result<InputReader> {
    let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
    if is_gzip(path) {
        return Ok(Box::new(BufReader::new(GzDecoder::new(file))));
    }
    let len = file.metadata().map_err(|e| BenchError::io(path, e))?.len();
    if len == 0 {
        // Zero-length mappings are rejected on some platforms
        return Ok(Box::new(BufReader::new(file)));
    }
    let mmap = unsafe { Mmap::map(&file).map_err(|e| BenchError::io(path, e))? };
    Ok(Box::new(Cursor::new(mmap)))
}

pub fn create_output(path: &Path) -> Result<OutputWriter> {
    let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
    if is_gzip(path) {
        Ok(Box::new(GzEncoder::new(BufWriter::new(file), Compression::default())))
    } else {
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Iterates over the lines of an input without allocating a new buffer
/// per line. Line terminators (`\n`, `\r\n`) are stripped.
pub struct LineReader {
    reader: InputReader,
    buf: Vec<u8>,
    line_no: usize,
}

impl LineReader {
    pub fn new(reader: InputReader) -> Self {
        Self { reader, buf: Vec::with_capacity(1 << 16), line_no: 0 }
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(open_input(path)?))
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn next_line(&mut self) -> std::io::Result<Option<&[u8]>> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        let mut end = self.buf.len();
        if end > 0 && self.buf[end - 1] == b'\n' {
            end -= 1;
        }
        if end > 0 && self.buf[end - 1] == b'\r' {
            end -= 1;
        }
        Ok(Some(&self.buf[..end]))
    }
}
