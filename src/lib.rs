//! linemark: line-oriented Markdown to HTML converter.
//!
//! Converts a restricted Markdown dialect into HTML in one downward pass:
//! blank-line normalization, reference-link collection, chunking on blank
//! lines, then per-chunk inline rewriting, block tag resolution, and
//! parity-based emphasis resolution. There is no backtracking between
//! stages and the whole document is held in memory.
//!
//! # Design Principles
//! - Line-oriented: the chunk (a blank-line-delimited run of lines) is the
//!   unit of block-level processing
//! - Marker tables are statically ordered; ordering is a tested invariant
//! - Malformed markup never errors: unmatched markers render literally
//!
//! # Example
//! ```
//! let html = linemark::to_html("# Hello\n\nWorld");
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<p>World"));
//! ```

pub mod block;
pub mod chunk;
pub mod inline;
pub mod link_ref;
pub mod normalize;
pub mod render;
pub mod scan;

// Re-export primary types
pub use chunk::{Chunk, ChunkState, Chunker, Line, LineKind};
pub use link_ref::LinkRefStore;
pub use render::HtmlWriter;

/// Convert Markdown to HTML.
///
/// This is the primary API. The output is line-oriented: every logical
/// output line is terminated by a newline. Empty or whitespace-only input
/// produces an empty string.
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
pub fn to_html_into(input: &str, out: &mut String) {
    out.clear();
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer);
    out.push_str(&writer.into_string());
}

/// Run the full pipeline, pushing finished lines into the writer.
fn render_to_writer(input: &str, writer: &mut HtmlWriter) {
    let normalized = normalize::normalize(input);
    if normalized.is_empty() {
        return;
    }
    let mut lines: Vec<String> = normalized.split('\n').map(str::to_string).collect();
    let mut refs = LinkRefStore::collect(&mut lines);

    for mut chunk in Chunker::new(lines) {
        for line in chunk.lines.iter_mut() {
            inline::rewrite_line(line, &mut refs);
        }
        block::resolve_block(&mut chunk);
        for line in chunk.lines.iter_mut() {
            line.text = inline::emphasis::resolve_emphasis(&line.text);
        }
        for line in &chunk.lines {
            writer.push_line(&line.text);
        }
    }
}
