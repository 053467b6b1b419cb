const SAMPLE_SIZE: usize = 1024;
const TEXT_FRACTION_THRESHOLD: f64 = 0.95;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Classifies a byte buffer as text or binary, examining at most the first
/// 1024 bytes. A NUL byte anywhere in the sample forces a binary verdict
/// before any other rule applies.
pub fn is_likely_text(data: &[u8]) -> bool {
    if data.is_empty() {
        return true;
    }

    let sample = &data[..data.len().min(SAMPLE_SIZE)];

    if sample.contains(&0x00) {
        return false;
    }

    if sample.starts_with(&UTF8_BOM) {
        return true;
    }

    // Tab, LF, CR, printable ASCII, and high bytes (possible multi-byte
    // sequences) all count toward the text fraction.
    let text_bytes = sample
        .iter()
        .filter(|&&b| matches!(b, 9 | 10 | 13 | 32..=126 | 128..))
        .count();

    text_bytes as f64 / sample.len() as f64 >= TEXT_FRACTION_THRESHOLD
}
