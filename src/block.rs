//! Block tag resolution.
//!
//! A chunk becomes exactly one block-level element: the first marker in
//! `BLOCK_MARKERS` order that matches every line of the chunk wins, and a
//! chunk matched by no marker is wrapped as a paragraph.

use crate::chunk::{Chunk, ChunkState, LineKind};
use crate::render::closing_tag;

/// How a block marker is recognized on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPattern {
    /// A literal prefix on a `Plain` line.
    Prefix(&'static str),
    /// A line kind assigned by the inline pass.
    Kind(LineKind),
}

/// One entry of the block marker table.
#[derive(Debug, Clone, Copy)]
pub struct BlockMarker {
    pub pattern: BlockPattern,
    pub open: &'static str,
}

/// Block marker table, in priority order.
///
/// Ordering is an invariant, not incidental: longer heading markers must be
/// tested before their prefixes, so `######` becomes `<h6>` and not `<h1>`.
pub static BLOCK_MARKERS: [BlockMarker; 12] = [
    BlockMarker {
        pattern: BlockPattern::Prefix("> "),
        open: "<blockquote>",
    },
    BlockMarker {
        pattern: BlockPattern::Prefix("###### "),
        open: "<h6>",
    },
    BlockMarker {
        pattern: BlockPattern::Prefix("##### "),
        open: "<h5>",
    },
    BlockMarker {
        pattern: BlockPattern::Prefix("#### "),
        open: "<h4>",
    },
    BlockMarker {
        pattern: BlockPattern::Prefix("### "),
        open: "<h3>",
    },
    BlockMarker {
        pattern: BlockPattern::Prefix("## "),
        open: "<h2>",
    },
    BlockMarker {
        pattern: BlockPattern::Prefix("# "),
        open: "<h1>",
    },
    BlockMarker {
        pattern: BlockPattern::Prefix("- "),
        open: "<ul>",
    },
    BlockMarker {
        pattern: BlockPattern::Prefix("* "),
        open: "<ul>",
    },
    BlockMarker {
        pattern: BlockPattern::Prefix("+ "),
        open: "<ul>",
    },
    BlockMarker {
        pattern: BlockPattern::Kind(LineKind::OrderedItem),
        open: "<ol>",
    },
    BlockMarker {
        pattern: BlockPattern::Kind(LineKind::Code),
        open: "<pre><code>",
    },
];

impl BlockMarker {
    /// Does this marker match every line of the chunk?
    fn matches(&self, chunk: &Chunk) -> bool {
        match self.pattern {
            BlockPattern::Prefix(prefix) => chunk
                .lines
                .iter()
                .all(|l| l.kind == LineKind::Plain && l.text.starts_with(prefix)),
            BlockPattern::Kind(kind) => chunk.lines.iter().all(|l| l.kind == kind),
        }
    }
}

/// Wrap the chunk in exactly one block-level element.
pub fn resolve_block(chunk: &mut Chunk) {
    debug_assert_eq!(chunk.state, ChunkState::Unwrapped);
    for marker in &BLOCK_MARKERS {
        if marker.matches(chunk) {
            apply_marker(chunk, marker);
            return;
        }
    }
    wrap_paragraph(chunk);
}

fn apply_marker(chunk: &mut Chunk, marker: &BlockMarker) {
    let is_list = matches!(marker.open, "<ul>" | "<ol>");
    for line in chunk.lines.iter_mut() {
        if marker.open == "<blockquote>" {
            line.text.push_str("<br>");
        }
        if let BlockPattern::Prefix(prefix) = marker.pattern {
            line.text.drain(..prefix.len());
        }
        if is_list {
            line.text = enclose_list_item(&line.text);
        }
    }
    wrap(chunk, marker.open);
}

fn wrap_paragraph(chunk: &mut Chunk) {
    for line in chunk.lines.iter_mut() {
        line.text.push_str("<br>");
    }
    wrap(chunk, "<p>");
}

/// Prepend the opening tag to the first line, append the derived closing tag
/// to the last, and mark the chunk wrapped.
fn wrap(chunk: &mut Chunk, open: &str) {
    chunk.lines[0].text.insert_str(0, open);
    let last = chunk.lines.len() - 1;
    let close = closing_tag(open);
    chunk.lines[last].text.push_str(&close);
    chunk.state = ChunkState::Wrapped;
}

fn enclose_list_item(text: &str) -> String {
    let mut item = String::with_capacity(text.len() + 9);
    item.push_str("<li>");
    item.push_str(text.trim());
    item.push_str("</li>");
    item
}
