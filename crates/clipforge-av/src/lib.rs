//! # clipforge-av
//!
//! Media probing and ffmpeg command construction for clipforge.
//!
//! This crate provides functionality for:
//! - Probing media files for video dimensions via ffprobe
//! - Classifying aspect ratios and selecting a canonical output resolution
//! - Building crop-to-fill concat filter graphs
//! - Substituting placeholders into user-supplied command templates
//! - Executing shell commands with timeouts and output verification
//!
//! ## Example
//!
//! ```no_run
//! use clipforge_av::{probe_dimensions, Orientation};
//! use std::path::Path;
//!
//! let descriptor = probe_dimensions(Path::new("/path/to/video.mp4"))?;
//! let orientation = Orientation::classify(descriptor.width, descriptor.height);
//! println!("{}x{} ({orientation})", descriptor.width, descriptor.height);
//! # Ok::<(), clipforge_av::Error>(())
//! ```

pub mod aspect;
pub mod command;
mod error;
pub mod filter;
pub mod params;
pub mod probe;
pub mod progress;
pub mod template;
pub mod tools;

// Re-exports
pub use aspect::{Orientation, TargetResolution};
pub use command::{ExecutionResult, ShellCommand};
pub use error::{Error, Result};
pub use filter::{build_concat_command, build_filter_graph, select_target};
pub use params::{is_smart_concat, parse_parameters, ConcatParameters, Preset, TrimWindow};
pub use probe::{probe_dimensions, probe_dimensions_with, MediaDescriptor};
pub use template::CommandBindings;
pub use tools::{check_tool, check_tools, get_tool_path, require_tool, ToolInfo};
