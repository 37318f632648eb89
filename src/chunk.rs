//! Chunk model and the blank-line chunker.
//!
//! A chunk is a maximal contiguous run of non-blank lines, the unit of
//! block-level processing. Lines carry an explicit kind instead of in-band
//! sentinel prefixes, and chunks track whether a block wrapper has already
//! been applied.

use smallvec::SmallVec;

/// Classification assigned to a line during the inline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Ordinary text; block prefixes are still recognizable on it.
    Plain,
    /// Indented 4+ spaces; candidate for a `<pre><code>` chunk.
    Code,
    /// Started with a `1. `-style marker; candidate for an `<ol>` chunk.
    OrderedItem,
}

/// One document line plus its classification.
#[derive(Debug, Clone)]
pub struct Line {
    pub text: String,
    pub kind: LineKind,
}

impl Line {
    pub fn plain(text: String) -> Self {
        Self {
            text,
            kind: LineKind::Plain,
        }
    }
}

/// Block-wrapping state of a chunk.
///
/// A chunk moves from `Unwrapped` to `Wrapped` exactly once, during block
/// tag resolution; no chunk ever receives two block wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkState {
    Unwrapped,
    Wrapped,
}

/// A contiguous run of non-blank lines.
///
/// Chunks are short in interactive documents, so lines live inline.
#[derive(Debug)]
pub struct Chunk {
    pub lines: SmallVec<[Line; 8]>,
    pub state: ChunkState,
}

/// Iterator splitting a normalized line sequence into chunks.
///
/// Blank lines separate chunks and are dropped; a chunk consisting solely
/// of blank lines produces nothing. Chunks come out in document order.
pub struct Chunker {
    lines: std::vec::IntoIter<String>,
}

impl Chunker {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl Iterator for Chunker {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let mut lines: SmallVec<[Line; 8]> = SmallVec::new();
        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                if lines.is_empty() {
                    continue;
                }
                break;
            }
            lines.push(Line::plain(line));
        }
        if lines.is_empty() {
            return None;
        }
        Some(Chunk {
            lines,
            state: ChunkState::Unwrapped,
        })
    }
}
