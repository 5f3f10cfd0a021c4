use crate::pipeline::engine::{
    ImageEngine, ImageHeader, PipelineError, ResizeMethod, TransformOptions,
};
use crate::pipeline::output::OutputBuffer;
use bytes::Bytes;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{
    DynamicImage, ExtendedColorType, Frame, ImageDecoder, ImageEncoder, ImageFormat, ImageReader,
};
use std::io::Cursor;

/// Jpeg quality used when the format has no entry in the encode profile.
const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Production engine backed by the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterEngine;

#[derive(Debug)]
pub struct RasterDecoder {
    bytes: Bytes,
    format: ImageFormat,
}

pub struct RasterOps {
    max_canvas_side: u32,
}

impl ImageEngine for RasterEngine {
    type Decoder = RasterDecoder;
    type Ops = RasterOps;

    fn open(&self, bytes: Bytes) -> Result<RasterDecoder, PipelineError> {
        let format =
            image::guess_format(&bytes).map_err(|err| PipelineError::Decode(err.to_string()))?;
        Ok(RasterDecoder { bytes, format })
    }

    fn header(&self, decoder: &RasterDecoder) -> Result<ImageHeader, PipelineError> {
        let reader = ImageReader::with_format(Cursor::new(decoder.bytes.as_ref()), decoder.format);
        let (width, height) = reader
            .into_dimensions()
            .map_err(|err| PipelineError::Header(err.to_string()))?;
        Ok(ImageHeader {
            width,
            height,
            format_tag: format_tag(decoder.format),
        })
    }

    fn ops(&self, max_canvas_side: u32) -> RasterOps {
        RasterOps { max_canvas_side }
    }

    fn transform(
        &self,
        ops: &mut RasterOps,
        decoder: RasterDecoder,
        options: &TransformOptions,
        out: &mut OutputBuffer,
    ) -> Result<(), PipelineError> {
        if options.width == 0 || options.height == 0 {
            return Err(PipelineError::Transform(format!(
                "invalid output dimensions {}x{}",
                options.width, options.height
            )));
        }

        let reader = ImageReader::with_format(Cursor::new(decoder.bytes.as_ref()), decoder.format);
        let mut image_decoder = reader
            .into_decoder()
            .map_err(|err| PipelineError::Transform(err.to_string()))?;
        let orientation = image_decoder
            .orientation()
            .unwrap_or(Orientation::NoTransforms);
        let mut image = DynamicImage::from_decoder(image_decoder)
            .map_err(|err| PipelineError::Transform(err.to_string()))?;

        if image.width() > ops.max_canvas_side || image.height() > ops.max_canvas_side {
            return Err(PipelineError::Transform(format!(
                "source {}x{} exceeds the {} pixel working canvas",
                image.width(),
                image.height(),
                ops.max_canvas_side
            )));
        }

        if options.normalize_orientation {
            image.apply_orientation(orientation);
        }

        if (image.width(), image.height()) != (options.width, options.height) {
            image = match options.resize_method {
                ResizeMethod::Stretch => {
                    image.resize_exact(options.width, options.height, FilterType::Lanczos3)
                }
                ResizeMethod::Fit => {
                    image.resize(options.width, options.height, FilterType::Lanczos3)
                }
            };
        }

        encode(&image, decoder.format, options, out)
    }
}

fn encode(
    image: &DynamicImage,
    format: ImageFormat,
    options: &TransformOptions,
    out: &mut OutputBuffer,
) -> Result<(), PipelineError> {
    let quality = options
        .encode_options
        .and_then(|knobs| knobs.quality)
        .unwrap_or(DEFAULT_JPEG_QUALITY);
    let compression = options.encode_options.and_then(|knobs| knobs.compression);

    let encoded = match format {
        ImageFormat::Jpeg => {
            let rgb = image.to_rgb8();
            JpegEncoder::new_with_quality(&mut *out, quality).encode_image(&rgb)
        }
        ImageFormat::Png => PngEncoder::new_with_quality(
            &mut *out,
            png_compression(compression),
            PngFilterType::Adaptive,
        )
        .write_image(
            image.as_bytes(),
            image.width(),
            image.height(),
            image.color().into(),
        ),
        ImageFormat::WebP => {
            // The crate's webp encoder is lossless-only; the profile's
            // quality knob has no effect here.
            let rgba = image.to_rgba8();
            WebPEncoder::new_lossless(&mut *out).write_image(
                &rgba,
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
        }
        ImageFormat::Gif => GifEncoder::new(&mut *out).encode_frame(Frame::new(image.to_rgba8())),
        other => image.write_to(&mut *out, other),
    };
    encoded.map_err(|err| PipelineError::Transform(err.to_string()))
}

/// Maps the profile's numeric deflate level onto the crate's compression
/// tiers.
fn png_compression(level: Option<u8>) -> CompressionType {
    match level {
        Some(level) if level >= 8 => CompressionType::Best,
        Some(level) if level <= 3 => CompressionType::Fast,
        _ => CompressionType::Default,
    }
}

/// Derives the dot-prefixed output tag from the detected container, e.g.
/// `.jpeg` for JPEG sources.
pub fn format_tag(format: ImageFormat) -> String {
    let mime = format.to_mime_type();
    let name = mime.strip_prefix("image/").unwrap_or(mime);
    format!(".{name}")
}
