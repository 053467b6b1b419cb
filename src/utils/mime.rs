use crate::utils::text::is_likely_text;

/// Detects a media type from a byte buffer. Magic-byte signatures win;
/// unrecognized content falls back to the text/binary heuristic.
pub fn sniff_mime(data: &[u8]) -> String {
    if let Some(kind) = infer::get(data) {
        return kind.mime_type().to_string();
    }

    if is_likely_text(data) {
        "text/plain".to_string()
    } else {
        "application/octet-stream".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_gzip() {
        let data = [0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03];
        assert_eq!(sniff_mime(&data), "application/gzip");
    }

    #[test]
    fn test_sniff_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert_eq!(sniff_mime(&data), "image/png");
    }

    #[test]
    fn test_sniff_plain_text() {
        assert_eq!(sniff_mime(b"just some notes\n"), "text/plain");
    }

    #[test]
    fn test_sniff_empty_is_text() {
        assert_eq!(sniff_mime(b""), "text/plain");
    }

    #[test]
    fn test_sniff_unrecognized_binary() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(sniff_mime(&data), "application/octet-stream");
    }
}
