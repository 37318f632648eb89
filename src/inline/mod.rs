//! Per-line inline pass, applied before block tag resolution.
//!
//! Fixed order per line:
//! 1. Indentation handling (4+ spaces mark a code line; fewer trim)
//! 2. Ordered-list markers (`1. `)
//! 3. Inline links `[text](url)`
//! 4. Autolinks `<url>` and emails `<user@host>`
//! 5. Images `![alt](src)`
//! 6. Reference-link injection `[text][key]`

pub mod emphasis;
pub mod links;

use crate::chunk::{Line, LineKind};
use crate::link_ref::LinkRefStore;

/// Rewrite one line in place: classify it and resolve its link-like spans.
pub fn rewrite_line(line: &mut Line, refs: &mut LinkRefStore) {
    classify_indentation(line);
    classify_ordered_marker(line);
    line.text = links::replace_inline_links(&line.text);
    line.text = links::replace_autolinks(&line.text);
    line.text = links::replace_images(&line.text);
    line.text = links::inject_reference_links(&line.text, refs);
}

/// Tabs expand to 4 spaces each; 4+ leading spaces mark a code line and the
/// indentation budget of 4 is dropped, fewer than 4 trigger an ordinary trim.
fn classify_indentation(line: &mut Line) {
    let expanded = if line.text.contains('\t') {
        line.text.replace('\t', "    ")
    } else {
        std::mem::take(&mut line.text)
    };
    let spaces = expanded.bytes().take_while(|&b| b == b' ').count();
    if spaces >= 4 {
        line.text = expanded[4..].to_string();
        line.kind = LineKind::Code;
    } else {
        line.text = expanded.trim().to_string();
    }
}

/// `^[1-9]+\. ` marks an ordered-list item; the matched marker is dropped.
fn classify_ordered_marker(line: &mut Line) {
    if line.kind != LineKind::Plain {
        return;
    }
    let bytes = line.text.as_bytes();
    let digits = bytes
        .iter()
        .take_while(|&&b| (b'1'..=b'9').contains(&b))
        .count();
    if digits == 0 {
        return;
    }
    if bytes.get(digits) == Some(&b'.') && bytes.get(digits + 1) == Some(&b' ') {
        line.text.drain(..digits + 2);
        line.kind = LineKind::OrderedItem;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(text: &str) -> Line {
        let mut line = Line::plain(text.to_string());
        classify_indentation(&mut line);
        classify_ordered_marker(&mut line);
        line
    }

    #[test]
    fn four_spaces_mark_a_code_line() {
        let line = classified("    let x = 1;");
        assert_eq!(line.kind, LineKind::Code);
        assert_eq!(line.text, "let x = 1;");
    }

    #[test]
    fn tab_counts_as_four_spaces() {
        let line = classified("\tcode");
        assert_eq!(line.kind, LineKind::Code);
        assert_eq!(line.text, "code");
    }

    #[test]
    fn extra_indentation_is_preserved_on_code_lines() {
        let line = classified("        nested");
        assert_eq!(line.kind, LineKind::Code);
        assert_eq!(line.text, "    nested");
    }

    #[test]
    fn three_spaces_just_trim() {
        let line = classified("   text  ");
        assert_eq!(line.kind, LineKind::Plain);
        assert_eq!(line.text, "text");
    }

    #[test]
    fn ordered_marker_is_dropped() {
        let line = classified("1. first");
        assert_eq!(line.kind, LineKind::OrderedItem);
        assert_eq!(line.text, "first");
    }

    #[test]
    fn multi_digit_ordered_marker() {
        let line = classified("12. twelfth");
        assert_eq!(line.kind, LineKind::OrderedItem);
        assert_eq!(line.text, "twelfth");
    }

    #[test]
    fn digit_without_dot_space_stays_plain() {
        assert_eq!(classified("1.x").kind, LineKind::Plain);
        assert_eq!(classified("1 x").kind, LineKind::Plain);
    }

    #[test]
    fn code_lines_are_not_ordered_items() {
        let line = classified("    1. indented");
        assert_eq!(line.kind, LineKind::Code);
        assert_eq!(line.text, "1. indented");
    }
}
