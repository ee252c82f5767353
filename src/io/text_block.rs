// src/io/text_block.rs

//! Line reader that pulls its source in fixed-size blocks.
//!
//! Halo catalogs are large flat text files. Reading them a block at a time and
//! splitting on the separator is much faster than buffered `read_line`, and it
//! lets every line carry its absolute byte offset so callers can seek straight
//! back to it later.

use crate::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_SEPARATOR};
use crate::types::{TextLine, UtilError, UtilResult};
use memchr::memchr_iter;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// Settings for a [`TextBlockReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlockOptions {
  /// Bytes requested per read. Values below 1 are treated as 1.
  pub block_size: usize,
  /// Byte that ends a line. It is not included in the yielded text.
  pub separator: u8,
  /// Bytes to read from the starting position. `None` reads to the end.
  pub file_size: Option<u64>,
  /// Label for progress messages, logged at debug level. `None` is silent.
  pub progress: Option<String>,
  /// Fail with `UtilError::DataFileEmpty` when there is nothing to read.
  pub require_content: bool,
}

impl Default for TextBlockOptions {
  fn default() -> Self {
    Self {
      block_size: DEFAULT_BLOCK_SIZE,
      separator: DEFAULT_SEPARATOR,
      file_size: None,
      progress: None,
      require_content: false,
    }
  }
}

/// Iterator over the lines of a seekable source, read in blocks.
///
/// Yields `UtilResult<TextLine>`; after the first error the iterator is
/// exhausted.
#[derive(Debug)]
pub struct TextBlockReader<R> {
  source: R,
  name: PathBuf,
  block_size: usize,
  separator: u8,
  progress: Option<String>,
  /// Absolute position where reading started.
  start: u64,
  /// Absolute position where reading stops.
  end: u64,
  /// Absolute position of the next block.
  pos: u64,
  /// Bytes of a line that continues into the next block.
  partial: Vec<u8>,
  /// Absolute offset of `partial[0]`.
  partial_offset: u64,
  ready: VecDeque<TextLine>,
  done: bool,
}

impl TextBlockReader<File> {
  /// Opens `path` and reads it from the beginning.
  pub fn open(path: impl AsRef<Path>, options: TextBlockOptions) -> UtilResult<Self> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| UtilError::io(path, e))?;
    Self::with_name(file, path, options)
  }
}

impl<R: Read + Seek> TextBlockReader<R> {
  /// Reads `source` from its current position with default options.
  pub fn new(source: R) -> UtilResult<Self> {
    Self::with_options(source, TextBlockOptions::default())
  }

  /// Reads `source` from its current position.
  pub fn with_options(source: R, options: TextBlockOptions) -> UtilResult<Self> {
    Self::with_name(source, "<stream>", options)
  }

  /// Like [`with_options`](Self::with_options), naming the source in errors.
  pub fn with_name(mut source: R, name: impl Into<PathBuf>, options: TextBlockOptions) -> UtilResult<Self> {
    let name = name.into();
    let start = source.stream_position().map_err(|e| UtilError::io(&name, e))?;
    let end = match options.file_size {
      Some(size) => start.saturating_add(size),
      None => {
        let end = source.seek(SeekFrom::End(0)).map_err(|e| UtilError::io(&name, e))?;
        source.seek(SeekFrom::Start(start)).map_err(|e| UtilError::io(&name, e))?;
        end.max(start)
      }
    };

    if options.require_content && end == start {
      return Err(UtilError::DataFileEmpty(name));
    }

    Ok(Self {
      source,
      name,
      block_size: options.block_size.max(1),
      separator: options.separator,
      progress: options.progress,
      start,
      end,
      pos: start,
      partial: Vec::new(),
      partial_offset: start,
      ready: VecDeque::new(),
      done: false,
    })
  }

  /// Total number of bytes this reader will consume.
  #[must_use]
  pub fn total_bytes(&self) -> u64 {
    self.end - self.start
  }

  /// Bytes consumed so far.
  #[must_use]
  pub fn bytes_read(&self) -> u64 {
    self.pos - self.start
  }

  /// Gives the underlying source back.
  pub fn into_inner(self) -> R {
    self.source
  }

  /// Reads the next block and queues every line it completes.
  fn read_block(&mut self) -> UtilResult<()> {
    let remaining = self.end - self.pos;
    if remaining == 0 {
      self.finish();
      return Ok(());
    }

    let want = usize::try_from(remaining).map_or(self.block_size, |r| r.min(self.block_size));
    let mut block = vec![0u8; want];
    let got = read_full(&mut self.source, &mut block).map_err(|e| UtilError::io(&self.name, e))?;
    if got == 0 {
      // Source is shorter than the size we were told to expect.
      self.end = self.pos;
      self.finish();
      return Ok(());
    }
    block.truncate(got);

    let block_start = self.pos;
    let mut line_start = 0;
    for sep in memchr_iter(self.separator, &block) {
      self.partial.extend_from_slice(&block[line_start..sep]);
      self.ready.push_back(TextLine {
        text: String::from_utf8_lossy(&self.partial).into_owned(),
        offset: self.partial_offset,
      });
      self.partial.clear();
      line_start = sep + 1;
      self.partial_offset = block_start + line_start as u64;
    }
    self.partial.extend_from_slice(&block[line_start..]);
    self.pos += got as u64;

    if let Some(label) = &self.progress {
      log::debug!("{label}: {}/{} bytes", self.bytes_read(), self.total_bytes());
    }
    Ok(())
  }

  /// Flushes the trailing fragment and marks the reader exhausted.
  fn finish(&mut self) {
    if !self.partial.is_empty() {
      self.ready.push_back(TextLine {
        text: String::from_utf8_lossy(&self.partial).into_owned(),
        offset: self.partial_offset,
      });
      self.partial.clear();
    }
    if let Some(label) = &self.progress {
      log::debug!("{label}: done ({} bytes)", self.bytes_read());
    }
    self.done = true;
  }
}

/// Fills `buf` as far as the source allows, retrying on interruption.
fn read_full<R: Read>(source: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
  let mut filled = 0;
  while filled < buf.len() {
    match source.read(&mut buf[filled..]) {
      Ok(0) => break,
      Ok(n) => filled += n,
      Err(e) if e.kind() == ErrorKind::Interrupted => {}
      Err(e) => return Err(e),
    }
  }
  Ok(filled)
}

impl<R: Read + Seek> Iterator for TextBlockReader<R> {
  type Item = UtilResult<TextLine>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(line) = self.ready.pop_front() {
        return Some(Ok(line));
      }
      if self.done {
        return None;
      }
      if let Err(e) = self.read_block() {
        self.done = true;
        self.partial.clear();
        return Some(Err(e));
      }
    }
  }
}

impl<R: Read + Seek> FusedIterator for TextBlockReader<R> {}
