
/// Extracts the requested output dimensions from a raw query string.
///
/// Only `w` and `h` are recognized; the first occurrence of each wins.
/// Anything that does not parse as a non-negative integer that fits `u32`
/// (absent keys, empty values, junk, negatives) counts as 0, meaning
/// "unspecified". Never fails.
pub fn resize_params(query: &str) -> (u32, u32) {
    let mut width = None;
    let mut height = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "w" if width.is_none() => width = Some(parse_dimension(&value)),
            "h" if height.is_none() => height = Some(parse_dimension(&value)),
            _ => {}
        }
    }
    (width.unwrap_or(0), height.unwrap_or(0))
}

fn parse_dimension(raw: &str) -> u32 {
    raw.parse::<i64>()
        .ok()
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(0)
}
