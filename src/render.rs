//! Line-oriented HTML output.

/// HTML output writer collecting finished lines.
///
/// Each logical output line is terminated by a newline; the final blob is
/// either complete or empty, never partial.
///
/// # Example
/// ```
/// use linemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.push_line("<h1>Title</h1>");
/// assert_eq!(writer.into_string(), "<h1>Title</h1>\n");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical output for this dialect is ~1.25x input size.
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Append one finished output line.
    pub fn push_line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    /// Consume the writer and return the HTML blob.
    pub fn into_string(self) -> String {
        self.out
    }
}

/// Derive the closing tag for an opening tag by reversal.
///
/// Composite tags close inside-out: `<pre><code>` closes as
/// `</code></pre>`, `<strong><em>` as `</em></strong>`.
pub fn closing_tag(open: &str) -> String {
    let mut out = String::with_capacity(open.len() + 2);
    for part in open.split('>').filter(|p| !p.is_empty()).rev() {
        out.push_str("</");
        out.push_str(part.trim_start_matches('<'));
        out.push('>');
    }
    out
}
