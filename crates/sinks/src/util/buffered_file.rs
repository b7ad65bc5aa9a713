//! Buffered append-only file
//!
//! Wraps the active log file in a `BufWriter` sized to the sink's buffer size
//! and tracks the bytes handed to it.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Append-only buffered handle to the active log file
#[derive(Debug)]
pub struct BufferedFile {
    writer: BufWriter<File>,
    bytes_written: u64,
}

impl BufferedFile {
    /// Open `path` for appending, creating it if absent
    pub fn open(path: &Path, buffer_size: usize) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::with_capacity(buffer_size, file),
            bytes_written: 0,
        })
    }

    /// Append `line` and a line terminator
    ///
    /// Returns the number of bytes appended.
    pub fn write_line(&mut self, line: &str) -> io::Result<usize> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;

        let n = line.len() + 1;
        self.bytes_written += n as u64;
        Ok(n)
    }

    /// Push buffered bytes to the OS
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// On-disk length of the file, excluding anything still buffered
    pub fn file_len(&self) -> io::Result<u64> {
        Ok(self.writer.get_ref().metadata()?.len())
    }

    /// Bytes appended through this handle
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and release the handle
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
