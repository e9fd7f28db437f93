/// Sentence terminator recognized by the segmenter.
pub const FULL_STOP: char = '。';

/// Split `text` into trimmed sentence units.
///
/// Empty units are kept so sentence positions stay stable; callers filter them.
pub fn segment(text: &str) -> Vec<String> {
    text.split(FULL_STOP).map(|s| s.trim().to_string()).collect()
}
