//! Delimiter extraction — pulls tagged segments out of the model's raw response.

/// Extracts the segment wrapped in a repeated `--{tag}--` marker.
///
/// The output contract wraps each segment in the same marker on both sides
/// (`--html-- … --html--`), so splitting on the literal marker must produce at
/// least three pieces; the segment is the middle one, trimmed.
///
/// Returns `None` when the marker occurs fewer than two times. A present but
/// blank segment comes back as `Some("")`, so callers can tell "not found"
/// apart from "found but empty". Markers are not escapable: a segment whose
/// body itself contains the literal marker text splits early and truncates.
pub fn extract_segment(text: &str, tag: &str) -> Option<String> {
    let marker = format!("--{tag}--");
    let pieces: Vec<&str> = text.split(marker.as_str()).collect();
    if pieces.len() < 3 {
        return None;
    }
    Some(pieces[1].trim().to_string())
}
