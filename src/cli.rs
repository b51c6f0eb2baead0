use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipforge")]
#[command(author, version, about = "FFmpeg command runner with aspect-aware smart concatenation")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an ffmpeg command template or SMART_CONCAT over the given inputs
    Run {
        /// First input video
        #[arg(required = true)]
        input1: PathBuf,

        /// Second input video (required for SMART_CONCAT)
        input2: Option<PathBuf>,

        /// Third input video
        input3: Option<PathBuf>,

        /// Output file path (must include a file name)
        #[arg(short, long)]
        output: PathBuf,

        /// Command to run: SMART_CONCAT with optional key=value overrides
        /// (trim1=S:E trim2=S:E crf=N preset=NAME), or a template using
        /// {input1}/{input2}/{input3}/{inputs}/{output}
        #[arg(short = 'x', long, default_value = "SMART_CONCAT")]
        command: String,

        /// Show what would be done without executing
        #[arg(long)]
        dry_run: bool,

        /// Timeout override in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Probe a media file and display its video dimensions
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Display version information
    Version,
}
