//! Media metadata types.
//!
//! This module defines the metadata structures returned by
//! [`MediaFile::metadata`](crate::MediaFile::metadata). Metadata is extracted
//! once when the file is opened and cached for the lifetime of the handle.
//!
//! Every field the container may legitimately omit is an `Option`: an absent
//! colour description or bit depth is not an error, it is simply not
//! reported. The presentation layer decides how (and whether) to render
//! missing fields.

use std::time::Duration;

use ffmpeg_next::codec::context::Context as CodecContext;
use ffmpeg_next::format::stream::Stream;
use ffmpeg_sys_next::AVCodecParameters;

/// Complete metadata for a media file.
///
/// Contains optional video stream metadata plus container-level information
/// such as total duration, format name, and on-disk size.
///
/// # Example
///
/// ```no_run
/// use bitprobe::MediaFile;
///
/// let media = MediaFile::open("input.mp4").unwrap();
/// let metadata = media.metadata();
/// println!("Duration: {:?}", metadata.duration);
/// println!("Format: {}", metadata.format);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct MediaMetadata {
    /// Video stream metadata, if a video stream is present.
    pub video: Option<VideoMetadata>,
    /// Total duration of the media file. Zero when the container does not
    /// declare a duration.
    pub duration: Duration,
    /// Container format name (e.g. `"mov,mp4,m4a,3gp,3g2,mj2"`, `"avi"`).
    pub format: String,
    /// File size in bytes, if it could be determined.
    pub file_size: Option<u64>,
}

/// Metadata for the primary video stream.
///
/// Dimensions and codec identity are always present once a stream is
/// recognised; colour description and bit depth are optional container
/// extensions.
#[derive(Debug, Clone)]
#[must_use]
pub struct VideoMetadata {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Codec name (e.g. `"h264"`, `"hevc"`, `"av1"`).
    pub codec: String,
    /// Nominal frame rate declared by the container. May be zero or
    /// approximate; the empirical rate comes from
    /// [`TimingStats`](crate::TimingStats).
    pub nominal_frame_rate: f64,
    /// Pixel format name (e.g. `"YUV420P"`), if declared.
    pub pixel_format_name: Option<String>,
    /// Colour matrix coefficients (e.g. `"BT709"`), if declared.
    pub color_space: Option<String>,
    /// Colour range (`"MPEG"` limited / `"JPEG"` full), if declared.
    pub color_range: Option<String>,
    /// Colour primaries (e.g. `"BT709"`), if declared.
    pub color_primaries: Option<String>,
    /// Transfer characteristic (e.g. `"SMPTE2084"` for PQ), if declared.
    pub color_transfer: Option<String>,
    /// Bits per raw sample (bit depth), if declared.
    pub bits_per_raw_sample: Option<u32>,
    /// The FFmpeg stream index this metadata was read from.
    pub stream_index: usize,
}

/// Map a video stream's codec parameters into a [`VideoMetadata`].
///
/// Each optional field is looked up independently; FFmpeg's `Unspecified`
/// sentinel values become `None`. Returns `None` when the codec parameters
/// cannot be parsed at all — the caller reports a file without video
/// metadata rather than failing the open.
pub(crate) fn video_metadata_from_stream(stream: &Stream) -> Option<VideoMetadata> {
    let index = stream.index();

    let decoder_context = match CodecContext::from_parameters(stream.parameters()) {
        Ok(context) => context,
        Err(error) => {
            log::debug!("Video stream {index}: unreadable codec parameters ({error})");
            return None;
        }
    };
    let decoder = match decoder_context.decoder().video() {
        Ok(decoder) => decoder,
        Err(error) => {
            log::debug!("Video stream {index}: no video decoder parameters ({error})");
            return None;
        }
    };

    let codec = decoder
        .codec()
        .map(|codec| codec.name().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    // Nominal rate: prefer the container's average frame rate, fall back to
    // the raw stream rate.
    let average = stream.avg_frame_rate();
    let nominal_frame_rate = if average.denominator() != 0 {
        average.numerator() as f64 / average.denominator() as f64
    } else {
        let rate = stream.rate();
        if rate.denominator() != 0 {
            rate.numerator() as f64 / rate.denominator() as f64
        } else {
            0.0
        }
    };

    let pixel_format_name = {
        let name = format!("{:?}", decoder.format());
        (name != "None").then_some(name)
    };
    let color_space = non_unspecified(format!("{:?}", decoder.color_space()));
    let color_range = non_unspecified(format!("{:?}", decoder.color_range()));
    let color_primaries = non_unspecified(format!("{:?}", decoder.color_primaries()));
    let color_transfer = non_unspecified(format!("{:?}", decoder.color_transfer_characteristic()));

    // Bit depth is not exposed by the safe wrapper; read it straight from
    // the underlying AVCodecParameters.
    let bits_per_raw_sample = {
        let parameters = stream.parameters();
        let raw: *const AVCodecParameters = unsafe { parameters.as_ptr() };
        let bits = unsafe { (*raw).bits_per_raw_sample };
        (bits > 0).then_some(bits as u32)
    };

    Some(VideoMetadata {
        width: decoder.width(),
        height: decoder.height(),
        codec,
        nominal_frame_rate,
        pixel_format_name,
        color_space,
        color_range,
        color_primaries,
        color_transfer,
        bits_per_raw_sample,
        stream_index: index,
    })
}

/// FFmpeg debug-formats unset colour enums as `"Unspecified"`.
fn non_unspecified(value: String) -> Option<String> {
    (value != "Unspecified").then_some(value)
}
