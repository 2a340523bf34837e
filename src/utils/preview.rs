//! Printable previews of raw payload bytes

/// Convert bytes to an ASCII preview with non-printable characters as dots.
///
/// Output longer than `max_len` bytes is cut and suffixed with `...`.
///
/// # Examples
/// ```
/// use payload_inspect::utils::preview::ascii_preview;
///
/// assert_eq!(ascii_preview(b"GET /\r\n", 16), "GET /..");
/// assert_eq!(ascii_preview(b"abcdef", 3), "abc...");
/// ```
pub fn ascii_preview(data: &[u8], max_len: usize) -> String {
    let preview_len = data.len().min(max_len);
    let preview: String = data[..preview_len]
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        })
        .collect();

    if data.len() > max_len {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Recorded scanner output up to (not including) the first sentinel byte
pub fn until_sentinel(out: &[u8]) -> &[u8] {
    let end = out
        .iter()
        .position(|&b| b == crate::detection::SENTINEL)
        .unwrap_or(out.len());
    &out[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_replaces_control_bytes() {
        assert_eq!(ascii_preview(b"\x00ab\xffc", 10), ".ab.c");
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(ascii_preview(b"hello world", 5), "hello...");
        assert_eq!(ascii_preview(b"hello", 5), "hello");
        assert_eq!(ascii_preview(b"", 5), "");
    }

    #[test]
    fn test_until_sentinel() {
        assert_eq!(until_sentinel(b"abc\0def"), b"abc");
        assert_eq!(until_sentinel(b"abc"), b"abc");
        assert_eq!(until_sentinel(b"\0"), b"");
    }
}
