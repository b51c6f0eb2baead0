//! SMART_CONCAT command detection and parameter parsing.
//!
//! A smart-concat command is the literal token `SMART_CONCAT` optionally
//! followed by space-separated `key=value` overrides. Malformed or unknown
//! tokens keep their defaults; a bad optional parameter never fails the run.

use std::fmt;
use std::str::FromStr;

/// x264 encoder speed preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    Ultrafast,
    Superfast,
    #[default]
    Veryfast,
    Faster,
    Fast,
    Medium,
    Slow,
    Slower,
    Veryslow,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Ultrafast => "ultrafast",
            Preset::Superfast => "superfast",
            Preset::Veryfast => "veryfast",
            Preset::Faster => "faster",
            Preset::Fast => "fast",
            Preset::Medium => "medium",
            Preset::Slow => "slow",
            Preset::Slower => "slower",
            Preset::Veryslow => "veryslow",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ultrafast" => Ok(Preset::Ultrafast),
            "superfast" => Ok(Preset::Superfast),
            "veryfast" => Ok(Preset::Veryfast),
            "faster" => Ok(Preset::Faster),
            "fast" => Ok(Preset::Fast),
            "medium" => Ok(Preset::Medium),
            "slow" => Ok(Preset::Slow),
            "slower" => Ok(Preset::Slower),
            "veryslow" => Ok(Preset::Veryslow),
            _ => Err(format!("unknown preset: {}", s)),
        }
    }
}

/// A `[start, end]` trim window in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimWindow {
    pub start: f64,
    pub end: f64,
}

/// Tunable parameters for smart concatenation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatParameters {
    pub trim1: TrimWindow,
    pub trim2: TrimWindow,
    pub crf: u8,
    pub preset: Preset,
}

impl Default for ConcatParameters {
    fn default() -> Self {
        Self {
            trim1: TrimWindow {
                start: 0.5,
                end: 4.5,
            },
            trim2: TrimWindow {
                start: 0.5,
                end: 7.5,
            },
            crf: 18,
            preset: Preset::Veryfast,
        }
    }
}

/// True when the command invokes smart concatenation rather than a template.
///
/// Only the leading token is inspected, case-insensitively.
pub fn is_smart_concat(command: &str) -> bool {
    command
        .split_whitespace()
        .next()
        .map(|token| token.eq_ignore_ascii_case("SMART_CONCAT"))
        .unwrap_or(false)
}

/// Parse `key=value` overrides following the SMART_CONCAT token.
///
/// Recognized keys: `trim1=S:E`, `trim2=S:E`, `crf=N` (0..=51),
/// `preset=NAME`. Each invalid or missing token independently falls back to
/// its default.
pub fn parse_parameters(command: &str) -> ConcatParameters {
    let mut params = ConcatParameters::default();

    for token in command.split_whitespace().skip(1) {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        match key {
            "trim1" => {
                if let Some(window) = parse_trim(value) {
                    params.trim1 = window;
                }
            }
            "trim2" => {
                if let Some(window) = parse_trim(value) {
                    params.trim2 = window;
                }
            }
            "crf" => {
                if let Ok(crf) = value.parse::<u8>() {
                    if crf <= 51 {
                        params.crf = crf;
                    }
                }
            }
            "preset" => {
                if let Ok(preset) = value.parse::<Preset>() {
                    params.preset = preset;
                }
            }
            _ => {}
        }
    }

    params
}

fn parse_trim(value: &str) -> Option<TrimWindow> {
    let (start, end) = value.split_once(':')?;
    let start: f64 = start.parse().ok()?;
    let end: f64 = end.parse().ok()?;
    (start >= 0.0 && end > start).then_some(TrimWindow { start, end })
}
