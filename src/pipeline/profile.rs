/// Encoder knobs for one output format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncodeOptions {
    pub quality: Option<u8>,
    pub compression: Option<u8>,
}

/// Process-wide encode profile, keyed by format tag. Formats outside the
/// table are encoded with the engine's defaults.
pub fn encode_options(format_tag: &str) -> Option<EncodeOptions> {
    match format_tag {
        ".jpeg" => Some(EncodeOptions {
            quality: Some(85),
            compression: None,
        }),
        ".png" => Some(EncodeOptions {
            quality: None,
            compression: Some(7),
        }),
        ".webp" => Some(EncodeOptions {
            quality: Some(85),
            compression: None,
        }),
        _ => None,
    }
}
