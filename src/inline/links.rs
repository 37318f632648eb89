//! Link-like span rewriting: inline links, autolinks, emails, images, and
//! reference-link injection.

use crate::link_ref::LinkRefStore;
use crate::scan;
use memchr::memchr;

/// Replace every `[text](url)` span whose URL matches the http(s) grammar.
///
/// A `[` directly preceded by `!` starts an image, not a link, and is left
/// for the image pass.
pub fn replace_inline_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = memchr(b'[', rest.as_bytes()) {
        if open > 0 && rest.as_bytes()[open - 1] == b'!' {
            out.push_str(&rest[..open + 1]);
            rest = &rest[open + 1..];
            continue;
        }
        let Some(close) = rest[open..].find(']').map(|i| i + open) else {
            break;
        };
        let after = &rest[close + 1..];
        let paren = after.len() - after.trim_start_matches(' ').len();
        let candidate = &after[paren..];
        let matched = candidate.strip_prefix('(').and_then(|inner| {
            let url_len = scan::scan_http_url(inner)?;
            (inner.as_bytes().get(url_len) == Some(&b')')).then_some((&inner[..url_len], url_len))
        });
        match matched {
            Some((url, url_len)) => {
                out.push_str(&rest[..open]);
                push_anchor(&mut out, url, &rest[open + 1..close]);
                // consumed: "](", padding, url, ")"
                rest = &rest[close + 1 + paren + 1 + url_len + 1..];
            }
            None => {
                out.push_str(&rest[..open + 1]);
                rest = &rest[open + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replace `<url>` and `<user@host>` autolinks.
pub fn replace_autolinks(text: &str) -> String {
    let text = replace_angle_spans(text, scan::scan_http_url);
    replace_angle_spans(&text, scan::scan_email)
}

/// Scan for `<content>` spans whose content matches `matcher` exactly up to
/// the closing `>`, replacing each with an anchor on its own content.
fn replace_angle_spans(text: &str, matcher: impl Fn(&str) -> Option<usize>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = memchr(b'<', rest.as_bytes()) {
        let inner = &rest[open + 1..];
        let matched = matcher(inner)
            .and_then(|len| (inner.as_bytes().get(len) == Some(&b'>')).then_some(len));
        match matched {
            Some(len) => {
                out.push_str(&rest[..open]);
                let target = &inner[..len];
                push_anchor(&mut out, target, target);
                rest = &inner[len + 1..];
            }
            None => {
                out.push_str(&rest[..open + 1]);
                rest = inner;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replace every `![alt](src)` span; alt and src are unrestricted.
pub fn replace_images(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("![") {
        let matched = rest[start + 2..].find(']').and_then(|alt_len| {
            let after = &rest[start + 2 + alt_len + 1..];
            let src_and_rest = after.strip_prefix('(')?;
            let src_len = src_and_rest.find(')')?;
            Some((alt_len, src_len))
        });
        match matched {
            Some((alt_len, src_len)) => {
                out.push_str(&rest[..start]);
                let alt = &rest[start + 2..start + 2 + alt_len];
                let src_start = start + 2 + alt_len + 2;
                let src = &rest[src_start..src_start + src_len];
                out.push_str("<img src=\"");
                out.push_str(src);
                out.push_str("\" alt=\"");
                out.push_str(alt);
                out.push_str("\">");
                rest = &rest[src_start + src_len + 1..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = &rest[start + 2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Inject reference-style links: for every stored key occurring in the line,
/// the nearest `[...]` bracket pair before the key supplies the visible text,
/// and the whole `[text][key]` span is replaced by the anchor tag.
///
/// A key with no opening bracket anywhere before it is malformed usage and
/// is skipped for this line.
pub fn inject_reference_links(text: &str, refs: &mut LinkRefStore) -> String {
    let mut line = text.to_string();
    if refs.is_empty() || !line.contains('[') {
        return line;
    }
    for idx in 0..refs.len() {
        let Some(key) = refs.key(idx).map(str::to_string) else {
            continue;
        };
        if !line.contains(&key) {
            continue;
        }
        let Some((span, inner)) = find_reference_span(&line, &key) else {
            continue;
        };
        if let Some(anchor) = refs.anchor(&key, &inner) {
            line = line.replace(&span, &anchor).trim().to_string();
        }
    }
    line
}

/// Locate the `[text][key]` span around the first occurrence of `key`.
/// Returns the span and the inner text.
fn find_reference_span(line: &str, key: &str) -> Option<(String, String)> {
    let key_at = line.find(key)?;
    let bytes = line.as_bytes();
    let open = bytes[..key_at].iter().rposition(|&b| b == b'[')?;
    let close = line[open..].find(']')? + open;
    let inner = line[open + 1..close].to_string();
    let span = line[open..key_at + key.len()].to_string();
    Some((span, inner))
}

fn push_anchor(out: &mut String, url: &str, text: &str) {
    out.push_str("<a href=\"");
    out.push_str(url);
    out.push_str("\">");
    out.push_str(text);
    out.push_str("</a>");
}
