use crate::pipeline::engine::{ImageEngine, PipelineError, ResizeMethod, TransformOptions};
use crate::pipeline::output::OutputBuffer;
use crate::pipeline::profile;
use bytes::Bytes;

/// Upper bound of the engine's working canvas, in pixels per side.
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// Capacity of the per-request output buffer.
pub const OUTPUT_BUFFER_CAPACITY: usize = 50 * 1024 * 1024;

/// The proxy always stretches to the exact target dimensions.
const RESIZE_METHOD: ResizeMethod = ResizeMethod::Stretch;

/// The transformed output image produced for one request.
#[derive(Debug)]
pub struct Rendition {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Runs the decode → header → transform pipeline over one source payload.
///
/// All engine resources are scoped to this call: the decoder is consumed
/// by the transform and the ops context is dropped on return, on success
/// and on every error path alike. The input format dictates the output
/// format; the driver never transcodes.
pub fn render<E: ImageEngine>(
    engine: &E,
    source: Bytes,
    requested_width: u32,
    requested_height: u32,
) -> Result<Rendition, PipelineError> {
    let decoder = engine.open(source)?;
    let header = engine.header(&decoder)?;
    tracing::info!(
        format_tag = %header.format_tag,
        source_width = header.width,
        source_height = header.height,
        "Decoded origin image header."
    );

    let (width, height) =
        resolve_dimensions(requested_width, requested_height, header.width, header.height);
    let options = TransformOptions {
        file_type: header.format_tag.clone(),
        width,
        height,
        resize_method: RESIZE_METHOD,
        normalize_orientation: true,
        encode_options: profile::encode_options(&header.format_tag),
    };

    let mut ops = engine.ops(MAX_CANVAS_SIDE);
    let mut out = OutputBuffer::with_capacity_limit(OUTPUT_BUFFER_CAPACITY);
    engine.transform(&mut ops, decoder, &options, &mut out)?;

    Ok(Rendition {
        bytes: out.into_bytes(),
        width,
        height,
    })
}

/// Resolves the output dimensions from the request and the source header.
///
/// A dimension of 0 means "unspecified": both 0 keeps the source
/// dimensions, one 0 derives the missing side from the source aspect ratio
/// (truncating toward zero, via integer division), and both nonzero
/// stretch to exactly the requested size.
pub fn resolve_dimensions(
    requested_width: u32,
    requested_height: u32,
    source_width: u32,
    source_height: u32,
) -> (u32, u32) {
    match (requested_width, requested_height) {
        (0, 0) => (source_width, source_height),
        (w, 0) => (
            w,
            (u64::from(w) * u64::from(source_height) / u64::from(source_width)) as u32,
        ),
        (0, h) => (
            (u64::from(h) * u64::from(source_width) / u64::from(source_height)) as u32,
            h,
        ),
        (w, h) => (w, h),
    }
}
