//! Document normalization.
//!
//! Collapses runs of blank lines to a single separator and trims
//! leading/trailing whitespace of the whole document. Runs once, before
//! anything else looks at the text.

/// Normalize raw input text.
///
/// Every maximal run of blank lines (lines containing only whitespace)
/// collapses to exactly one empty line, and the whole document is trimmed
/// at both ends. Idempotent.
///
/// # Example
/// ```
/// let text = linemark::normalize::normalize("a\n\n\n\nb\n\n");
/// assert_eq!(text, "a\n\nb");
/// ```
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut blank_run = false;

    for line in input.split('\n') {
        if line.trim().is_empty() {
            blank_run = true;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_run {
                out.push('\n');
            }
        }
        out.push_str(line);
        blank_run = false;
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_blank_runs() {
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn whitespace_only_lines_count_as_blank() {
        assert_eq!(normalize("a\n \t \nb"), "a\n\nb");
    }

    #[test]
    fn single_separator_is_preserved() {
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn trims_document_edges() {
        assert_eq!(normalize("\n\n  a  \n\n"), "a");
    }

    #[test]
    fn all_blank_input_becomes_empty() {
        assert_eq!(normalize("\n \n\t\n"), "");
    }

    #[test]
    fn idempotent() {
        let once = normalize("x\n\n\ny\n");
        assert_eq!(normalize(&once), once);
    }
}
