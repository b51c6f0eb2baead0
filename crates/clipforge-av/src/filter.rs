//! Crop-to-fill filter graph construction for smart concatenation.
//!
//! Each input is trimmed, scaled up preserving its aspect ratio until both
//! dimensions reach the target, center-cropped to exactly the target, and
//! normalized so the two streams are concatenation-compatible. Stretching
//! and letterboxing are never used.

use crate::aspect::{Orientation, TargetResolution};
use crate::params::{ConcatParameters, TrimWindow};
use crate::probe::MediaDescriptor;
use crate::{Error, Result};
use std::path::Path;

/// Frame rate both video streams are normalized to before concat.
const TARGET_FRAME_RATE: u32 = 30;
/// Pixel format fed to the encoder.
const TARGET_PIXEL_FORMAT: &str = "yuv420p";
/// Audio format accepted by the concat filter.
const TARGET_AUDIO_FORMAT: &str = "sample_fmts=fltp:sample_rates=44100:channel_layouts=stereo";

struct CenterCrop {
    scaled_width: u32,
    scaled_height: u32,
    x: u32,
    y: u32,
}

/// Uniform scale up to at least the target, then a centered crop window.
///
/// Rounds the scaled size up so the crop never exceeds the frame.
fn center_crop(width: u32, height: u32, target: TargetResolution) -> CenterCrop {
    let scale = f64::max(
        target.width as f64 / width as f64,
        target.height as f64 / height as f64,
    );
    let scaled_width = (width as f64 * scale).ceil() as u32;
    let scaled_height = (height as f64 * scale).ceil() as u32;

    CenterCrop {
        scaled_width,
        scaled_height,
        x: scaled_width.saturating_sub(target.width) / 2,
        y: scaled_height.saturating_sub(target.height) / 2,
    }
}

fn input_chain(
    index: usize,
    descriptor: &MediaDescriptor,
    trim: &TrimWindow,
    target: TargetResolution,
) -> String {
    let crop = center_crop(descriptor.width, descriptor.height, target);
    format!(
        "[{index}:v]trim=start={start}:end={end},setpts=PTS-STARTPTS,\
         scale={sw}:{sh},crop={tw}:{th}:{x}:{y},setsar=1,fps={fps},format={fmt}[v{index}];\
         [{index}:a]atrim=start={start}:end={end},asetpts=PTS-STARTPTS,\
         aformat={afmt}[a{index}]",
        index = index,
        start = trim.start,
        end = trim.end,
        sw = crop.scaled_width,
        sh = crop.scaled_height,
        tw = target.width,
        th = target.height,
        x = crop.x,
        y = crop.y,
        fps = TARGET_FRAME_RATE,
        fmt = TARGET_PIXEL_FORMAT,
        afmt = TARGET_AUDIO_FORMAT,
    )
}

/// Select the output resolution for a pair of probed inputs.
///
/// Driven by orientations only, never by exact pixel dimensions, so the
/// output resolution is predictable across inputs of varying size.
pub fn select_target(first: &MediaDescriptor, second: &MediaDescriptor) -> TargetResolution {
    TargetResolution::select(
        Orientation::classify(first.width, first.height),
        Orientation::classify(second.width, second.height),
    )
}

/// Build the filter-graph expression joining two inputs at the target
/// resolution.
pub fn build_filter_graph(
    first: &MediaDescriptor,
    second: &MediaDescriptor,
    target: TargetResolution,
    params: &ConcatParameters,
) -> Result<String> {
    for descriptor in [first, second] {
        if descriptor.width == 0 || descriptor.height == 0 {
            return Err(Error::invalid_dimensions(
                &descriptor.path,
                descriptor.width,
                descriptor.height,
            ));
        }
    }

    Ok(format!(
        "{};{};[v0][a0][v1][a1]concat=n=2:v=1:a=1[outv][outa]",
        input_chain(0, first, &params.trim1, target),
        input_chain(1, second, &params.trim2, target),
    ))
}

/// Build the complete ffmpeg invocation for smart concatenation.
///
/// Returns a command string for the executor; no process is spawned here.
pub fn build_concat_command(
    ffmpeg: &Path,
    first: &MediaDescriptor,
    second: &MediaDescriptor,
    output: &Path,
    params: &ConcatParameters,
) -> Result<String> {
    let target = select_target(first, second);
    let graph = build_filter_graph(first, second, target, params)?;

    tracing::debug!(
        "smart concat: {}x{} + {}x{} -> {}",
        first.width,
        first.height,
        second.width,
        second.height,
        target
    );

    Ok(format!(
        "{ffmpeg} -i \"{input1}\" -i \"{input2}\" -y -filter_complex \"{graph}\" \
         -map \"[outv]\" -map \"[outa]\" -c:v libx264 -crf {crf} -preset {preset} \
         -c:a aac \"{output}\"",
        ffmpeg = ffmpeg.display(),
        input1 = first.path.display(),
        input2 = second.path.display(),
        graph = graph,
        crf = params.crf,
        preset = params.preset,
        output = output.display(),
    ))
}
