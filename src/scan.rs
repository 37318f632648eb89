//! Byte-level scanners for the URL and email grammars.
//!
//! The dialect restricts link destinations to absolute http(s) URLs over a
//! fixed character class, with a 2-6 letter TLD segment, and autolink emails
//! to dotted word-character labels. Scanners are maximal-munch: they return
//! the number of bytes consumed from the start of the input, or `None` when
//! the grammar does not match at position zero.

/// Characters permitted in a URL after the scheme.
#[inline]
const fn is_url_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'.' | b'/' | b'?' | b':' | b'@' | b'-' | b'_' | b'=' | b'#' | b'&'
        )
}

/// Word characters for email local parts and domain labels.
#[inline]
const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scan an absolute http(s) URL at the start of `text`.
///
/// The URL must carry a `http://` or `https://` scheme, draw its remaining
/// bytes from the restricted URL character class, and contain a dot followed
/// by at least two letters (the TLD segment). Returns the consumed length.
pub fn scan_http_url(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let scheme_len = if bytes.starts_with(b"https://") {
        8
    } else if bytes.starts_with(b"http://") {
        7
    } else {
        return None;
    };

    let mut end = scheme_len;
    while end < bytes.len() && is_url_byte(bytes[end]) {
        end += 1;
    }
    if end == scheme_len || !has_tld_segment(&bytes[scheme_len..end]) {
        return None;
    }
    Some(end)
}

/// A dot followed by a run of at least two letters. Longer runs still
/// qualify: the grammar's 2-6 letter TLD may be followed by more URL bytes.
fn has_tld_segment(host_and_path: &[u8]) -> bool {
    let mut i = 0;
    while i + 1 < host_and_path.len() {
        if host_and_path[i] == b'.' {
            let mut j = i + 1;
            while j < host_and_path.len() && host_and_path[j].is_ascii_alphabetic() {
                j += 1;
            }
            if j - (i + 1) >= 2 {
                return true;
            }
        }
        i += 1;
    }
    false
}

/// Scan an email address at the start of `text`.
///
/// Local part and domain are word-character runs separated by single `.` or
/// `-`; the domain's final dotted label must be 2-3 word characters.
pub fn scan_email(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let local_end = scan_word_chain(bytes, 0)?;
    if bytes.get(local_end) != Some(&b'@') {
        return None;
    }
    let domain_start = local_end + 1;
    let domain_end = scan_word_chain(bytes, domain_start)?;

    let domain = &bytes[domain_start..domain_end];
    let last_dot = domain.iter().rposition(|&b| b == b'.')?;
    let label = &domain[last_dot + 1..];
    if (2..=3).contains(&label.len()) && label.iter().all(|&b| is_word_byte(b)) {
        Some(domain_end)
    } else {
        None
    }
}

/// Word-character runs joined by single `.` or `-` separators; never starts
/// or ends on a separator.
fn scan_word_chain(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start).is_none_or(|&b| !is_word_byte(b)) {
        return None;
    }
    let mut i = start;
    loop {
        while i < bytes.len() && is_word_byte(bytes[i]) {
            i += 1;
        }
        let sep = matches!(bytes.get(i), Some(b'.') | Some(b'-'));
        let word_follows = bytes.get(i + 1).is_some_and(|&b| is_word_byte(b));
        if sep && word_follows {
            i += 1;
        } else {
            return Some(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_http_url() {
        assert_eq!(scan_http_url("http://example.com"), Some(18));
    }

    #[test]
    fn accepts_https_with_path_and_query() {
        let url = "https://example.com/a/b?x=1#frag";
        assert_eq!(scan_http_url(url), Some(url.len()));
    }

    #[test]
    fn stops_at_first_byte_outside_the_class() {
        assert_eq!(scan_http_url("http://example.com) rest"), Some(18));
    }

    #[test]
    fn rejects_missing_scheme() {
        assert_eq!(scan_http_url("www.example.com"), None);
    }

    #[test]
    fn rejects_host_without_tld() {
        assert_eq!(scan_http_url("http://localhost"), None);
        assert_eq!(scan_http_url("http://a.b"), None);
    }

    #[test]
    fn accepts_email_with_dotted_local_part() {
        let email = "john.doe@mail.example.com";
        assert_eq!(scan_email(email), Some(email.len()));
    }

    #[test]
    fn rejects_email_with_long_final_label() {
        assert_eq!(scan_email("a@b.code"), None);
    }

    #[test]
    fn rejects_email_without_domain_dot() {
        assert_eq!(scan_email("a@bcd"), None);
    }

    #[test]
    fn email_scan_stops_before_closing_angle() {
        assert_eq!(scan_email("a@b.co>"), Some(6));
    }
}
