//! Emphasis resolution via parity counting.
//!
//! An even, nonzero count of a marker in a line is treated as balanced
//! open/close pairs; occurrences are rewritten left to right, alternating
//! opening and closing tags. Odd counts leave the marker literal. Markers
//! are tried in a fixed order where composites strictly precede their
//! substrings, and each rewrite feeds the next marker's count.

use crate::render::closing_tag;

/// One entry of the inline marker table.
#[derive(Debug, Clone, Copy)]
pub struct InlineMarker {
    pub marker: &'static str,
    pub open: &'static str,
}

/// Inline marker table, in priority order.
///
/// Ordering is an invariant: `***` must be consumed before `**` or `*`
/// would tear it apart, and likewise for the other composites.
pub static INLINE_MARKERS: [InlineMarker; 12] = [
    InlineMarker {
        marker: "***",
        open: "<strong><em>",
    },
    InlineMarker {
        marker: "**_",
        open: "<strong><em>",
    },
    InlineMarker {
        marker: "*__",
        open: "<strong><em>",
    },
    InlineMarker {
        marker: "___",
        open: "<strong><em>",
    },
    InlineMarker {
        marker: "__*",
        open: "<strong><em>",
    },
    InlineMarker {
        marker: "_**",
        open: "<strong><em>",
    },
    InlineMarker {
        marker: "~~",
        open: "<del>",
    },
    InlineMarker {
        marker: "**",
        open: "<strong>",
    },
    InlineMarker {
        marker: "__",
        open: "<strong>",
    },
    InlineMarker {
        marker: "*",
        open: "<em>",
    },
    InlineMarker {
        marker: "_",
        open: "<em>",
    },
    InlineMarker {
        marker: "`",
        open: "<code>",
    },
];

/// Resolve all inline emphasis markers in one line.
pub fn resolve_emphasis(text: &str) -> String {
    let mut line = text.to_string();
    for entry in &INLINE_MARKERS {
        // non-overlapping count, same as the rewrite below
        let count = line.matches(entry.marker).count();
        if count == 0 || count % 2 != 0 {
            continue;
        }
        line = alternate_replace(&line, entry.marker, entry.open);
    }
    line
}

/// Replace occurrences of `marker` left to right, alternating the opening
/// tag and its derived closing tag.
fn alternate_replace(line: &str, marker: &str, open: &str) -> String {
    let close = closing_tag(open);
    let mut out = String::with_capacity(line.len() + 16);
    let mut rest = line;
    let mut opening = true;
    while let Some(at) = rest.find(marker) {
        out.push_str(&rest[..at]);
        out.push_str(if opening { open } else { &close });
        opening = !opening;
        rest = &rest[at + marker.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_index(marker: &str) -> usize {
        INLINE_MARKERS
            .iter()
            .position(|e| e.marker == marker)
            .unwrap()
    }

    #[test]
    fn composites_precede_their_substrings() {
        for entry in &INLINE_MARKERS {
            for other in &INLINE_MARKERS {
                if entry.marker != other.marker && entry.marker.contains(other.marker) {
                    assert!(
                        marker_index(entry.marker) < marker_index(other.marker),
                        "{} must be tried before {}",
                        entry.marker,
                        other.marker
                    );
                }
            }
        }
    }

    #[test]
    fn strong_and_em() {
        assert_eq!(
            resolve_emphasis("**bold** and *ital*"),
            "<strong>bold</strong> and <em>ital</em>"
        );
    }

    #[test]
    fn triple_asterisk_is_strong_em() {
        assert_eq!(resolve_emphasis("***x***"), "<strong><em>x</em></strong>");
    }

    #[test]
    fn underscore_variants() {
        assert_eq!(resolve_emphasis("__b__"), "<strong>b</strong>");
        assert_eq!(resolve_emphasis("_i_"), "<em>i</em>");
        assert_eq!(resolve_emphasis("___x___"), "<strong><em>x</em></strong>");
    }

    #[test]
    fn mixed_delimiters_nest() {
        assert_eq!(resolve_emphasis("**_x_**"), "<strong><em>x</em></strong>");
    }

    #[test]
    fn strikethrough_and_code() {
        assert_eq!(resolve_emphasis("~~gone~~"), "<del>gone</del>");
        assert_eq!(resolve_emphasis("`let x`"), "<code>let x</code>");
    }

    #[test]
    fn odd_counts_stay_literal() {
        assert_eq!(resolve_emphasis("*unbalanced"), "*unbalanced");
        assert_eq!(resolve_emphasis("~~still here"), "~~still here");
    }

    #[test]
    fn multiple_pairs_alternate() {
        assert_eq!(
            resolve_emphasis("*a* and *b*"),
            "<em>a</em> and <em>b</em>"
        );
    }
}
