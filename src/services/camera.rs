//! Best-effort camera-name extraction from a free-text clip description.

/// Scan a description for the token immediately preceding the word
/// "camera" and treat it as the camera name.
///
/// This is a deliberate best-effort heuristic, not a structured parser:
/// the match is a case-insensitive comparison of whole whitespace-separated
/// tokens, so "left camera" yields "left" while "left camera." (trailing
/// punctuation) yields nothing. The tests below pin this exact behavior.
pub fn camera_name_from_description(description: &str) -> Option<String> {
    let tokens: Vec<&str> = description.split_whitespace().collect();

    tokens.windows(2).find_map(|pair| {
        if pair[1].eq_ignore_ascii_case("camera") {
            Some(pair[0].to_string())
        } else {
            None
        }
    })
}
