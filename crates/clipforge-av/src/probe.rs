//! FFprobe-based media probing.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Dimensions of a media file's primary video stream.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MediaDescriptor {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    width: Option<u32>,
    height: Option<u32>,
}

/// Probe a media file using `ffprobe` from `PATH`.
pub fn probe_dimensions(path: &Path) -> Result<MediaDescriptor> {
    probe_dimensions_with(Path::new("ffprobe"), path)
}

/// Probe a media file using a specific ffprobe executable.
///
/// Spawns one ffprobe process per call. Probing is cheap and deterministic,
/// so failures are not retried.
pub fn probe_dimensions_with(program: &Path, path: &Path) -> Result<MediaDescriptor> {
    if !path.exists() {
        return Err(Error::probe(path, "file not found"));
    }

    let output = Command::new(program)
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_streams",
            "-select_streams",
            "v:0",
        ])
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found(program.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::probe(path, stderr.trim()));
    }

    let json = String::from_utf8_lossy(&output.stdout);
    parse_ffprobe_json(path, &json)
}

fn parse_ffprobe_json(path: &Path, json: &str) -> Result<MediaDescriptor> {
    let parsed: FfprobeOutput = serde_json::from_str(json)?;

    let stream = parsed
        .streams
        .first()
        .ok_or_else(|| Error::probe(path, "no video stream"))?;

    Ok(MediaDescriptor {
        path: path.to_path_buf(),
        width: stream.width.unwrap_or(0),
        height: stream.height.unwrap_or(0),
    })
}
