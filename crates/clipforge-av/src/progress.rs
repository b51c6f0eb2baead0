//! FFmpeg progress reporting from stderr lines.
//!
//! ffmpeg prints the total duration once (`Duration: HH:MM:SS.cc`) and then
//! periodic status lines (`frame=… time=HH:MM:SS.cc … speed=…x`). The parser
//! is purely observational: lines that do not match are ignored.

/// Incremental parser over one process's stderr stream.
#[derive(Debug, Default)]
pub struct ProgressParser {
    duration_secs: Option<f64>,
}

impl ProgressParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line of ffmpeg stderr, logging progress when recognized.
    pub fn observe(&mut self, line: &str) {
        if self.duration_secs.is_none() {
            if let Some(total) = parse_duration_line(line) {
                self.duration_secs = Some(total);
                tracing::debug!("media duration: {:.1}s", total);
                return;
            }
        }

        let Some(position) = parse_time_field(line) else {
            return;
        };
        let Some(total) = self.duration_secs.filter(|t| *t > 0.0) else {
            return;
        };

        let percent = (position / total * 100.0).min(100.0);
        let fps = field(line, "fps=")
            .map(|v| format!(" fps={v}"))
            .unwrap_or_default();
        let speed = field(line, "speed=")
            .map(|v| format!(" speed={v}"))
            .unwrap_or_default();
        tracing::debug!(
            "progress: {:.1}% ({:.1}/{:.1}s){}{}",
            percent,
            position,
            total,
            fps,
            speed
        );
    }
}

fn parse_duration_line(line: &str) -> Option<f64> {
    let rest = line.trim_start().strip_prefix("Duration:")?;
    let token = rest.trim_start().split([',', ' ']).next()?;
    parse_clock(token)
}

fn parse_time_field(line: &str) -> Option<f64> {
    parse_clock(&field(line, "time=")?)
}

fn field(line: &str, key: &str) -> Option<String> {
    let start = line.find(key)? + key.len();
    let rest = line[start..].trim_start();
    let end = rest.find(' ').unwrap_or(rest.len());
    let value = &rest[..end];
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_clock(value: &str) -> Option<f64> {
    // HH:MM:SS or HH:MM:SS.cc
    let mut parts = value.split(':');
    let hours: f64 = parts.next()?.parse().ok()?;
    let minutes: f64 = parts.next()?.parse().ok()?;
    let seconds: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}
