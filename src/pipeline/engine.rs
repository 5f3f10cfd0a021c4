use crate::pipeline::output::OutputBuffer;
use crate::pipeline::profile::EncodeOptions;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The payload is not a recognized image container.
    #[error("error decoding image, {0}")]
    Decode(String),
    /// The container is truncated or structurally corrupt.
    #[error("error reading image header, {0}")]
    Header(String),
    /// The resize or re-encode failed, or the output exceeded the buffer.
    #[error("error transforming image, {0}")]
    Transform(String),
}

/// Decoded header metadata of a source image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    /// Dot-prefixed lowercase container tag, e.g. `.jpeg` or `.png`.
    pub format_tag: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResizeMethod {
    /// Force exact target dimensions, ignoring the source aspect ratio.
    Stretch,
    /// Fit inside the target box, preserving the source aspect ratio.
    Fit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransformOptions {
    pub file_type: String,
    pub width: u32,
    pub height: u32,
    pub resize_method: ResizeMethod,
    /// Honor the EXIF orientation tag, then strip it, so consumers always
    /// see upright pixels.
    pub normalize_orientation: bool,
    pub encode_options: Option<EncodeOptions>,
}

/// Capability surface of the raster engine. The request core only ever
/// drives these four operations, which lets tests substitute a recording
/// fake for the real codec stack.
pub trait ImageEngine {
    type Decoder;
    type Ops;

    /// Sniffs the container from magic bytes and wraps the payload.
    fn open(&self, bytes: Bytes) -> Result<Self::Decoder, PipelineError>;

    /// Reads the header, a deeper check that may reveal truncation the
    /// sniff missed.
    fn header(&self, decoder: &Self::Decoder) -> Result<ImageHeader, PipelineError>;

    /// Allocates a transform context bounded to a square working canvas.
    fn ops(&self, max_canvas_side: u32) -> Self::Ops;

    /// Resizes and re-encodes into `out`, consuming the decoder.
    fn transform(
        &self,
        ops: &mut Self::Ops,
        decoder: Self::Decoder,
        options: &TransformOptions,
        out: &mut OutputBuffer,
    ) -> Result<(), PipelineError>;
}
