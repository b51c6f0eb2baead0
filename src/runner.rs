//! Single-invocation orchestration.
//!
//! Dispatches a request to either the smart-concat builder or the command
//! templater, executes the resulting shell command, and reports the outcome.

use crate::config::Config;
use clipforge_av::{
    build_concat_command, get_tool_path, is_smart_concat, parse_parameters,
    probe_dimensions_with, CommandBindings, Error, Result, ShellCommand,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One run of the command runner.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input1: PathBuf,
    pub input2: Option<PathBuf>,
    pub input3: Option<PathBuf>,
    pub output: PathBuf,
    pub command: String,
    pub execute: bool,
}

/// Result surfaced to the caller.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Human-readable status message.
    pub message: String,
    /// Path to the produced file, when a command actually ran.
    pub output_path: Option<PathBuf>,
}

/// Execute one request to completion.
pub async fn run(config: &Config, request: &RunRequest) -> Result<RunOutcome> {
    if !request.execute {
        return Ok(RunOutcome {
            message: "execution skipped".to_string(),
            output_path: None,
        });
    }

    validate(request)?;
    let inputs = collect_inputs(request);

    let command = if is_smart_concat(&request.command) {
        build_smart_concat(config, request, &inputs)?
    } else {
        resolve_template(&request.command, &inputs, &request.output)
    };

    if let Some(parent) = request.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    tracing::info!("executing: {}", command);

    ShellCommand::new(command)
        .expect_output(&request.output)
        .timeout(Duration::from_secs(config.execution.timeout_seconds))
        .run()
        .await?;

    let size = std::fs::metadata(&request.output).map(|m| m.len()).unwrap_or(0);
    tracing::info!("wrote {} bytes to {:?}", size, request.output);

    Ok(RunOutcome {
        message: format!("wrote {} bytes to {}", size, request.output.display()),
        output_path: Some(request.output.clone()),
    })
}

fn collect_inputs(request: &RunRequest) -> Vec<&Path> {
    [
        Some(&request.input1),
        request.input2.as_ref(),
        request.input3.as_ref(),
    ]
    .into_iter()
    .flatten()
    .map(PathBuf::as_path)
    .filter(|path| !path.as_os_str().is_empty())
    .collect()
}

fn validate(request: &RunRequest) -> Result<()> {
    if request.command.trim().is_empty() {
        return Err(Error::InvalidInput("command is empty".to_string()));
    }

    if request.input1.as_os_str().is_empty() {
        return Err(Error::InvalidInput(
            "at least one input file is required".to_string(),
        ));
    }

    let output_str = request.output.to_string_lossy();
    if request.output.file_name().is_none()
        || output_str.ends_with('/')
        || output_str.ends_with('\\')
        || request.output.is_dir()
    {
        return Err(Error::InvalidInput(format!(
            "output path must include a file name: {}",
            output_str
        )));
    }

    let inputs = collect_inputs(request);
    for input in &inputs {
        if !input.exists() {
            return Err(Error::InvalidInput(format!(
                "input file not found: {}",
                input.display()
            )));
        }
    }

    // Filter-graph stream references must match the number of inputs given.
    if ["[1:v]", "[1:a]"]
        .iter()
        .any(|marker| request.command.contains(marker))
        && inputs.len() < 2
    {
        return Err(Error::InvalidInput(format!(
            "command references a second input but only {} input file(s) provided",
            inputs.len()
        )));
    }
    if ["[2:v]", "[2:a]", "{input3}"]
        .iter()
        .any(|marker| request.command.contains(marker))
        && inputs.len() < 3
    {
        return Err(Error::InvalidInput(format!(
            "command references a third input but only {} input file(s) provided",
            inputs.len()
        )));
    }

    Ok(())
}

fn build_smart_concat(config: &Config, request: &RunRequest, inputs: &[&Path]) -> Result<String> {
    if inputs.len() != 2 {
        return Err(Error::InvalidInput(format!(
            "SMART_CONCAT requires exactly 2 input files, got {}",
            inputs.len()
        )));
    }

    let ffprobe = get_tool_path("ffprobe", config.tools.ffprobe.as_deref())?;
    let ffmpeg = get_tool_path("ffmpeg", config.tools.ffmpeg.as_deref())?;

    let first = probe_dimensions_with(&ffprobe, inputs[0])?;
    let second = probe_dimensions_with(&ffprobe, inputs[1])?;

    let params = parse_parameters(&request.command);
    build_concat_command(&ffmpeg, &first, &second, &request.output, &params)
}

fn resolve_template(template: &str, inputs: &[&Path], output: &Path) -> String {
    let mut bindings = CommandBindings::new();
    for (i, input) in inputs.iter().enumerate() {
        bindings.set(&format!("input{}", i + 1), format!("\"{}\"", input.display()));
    }

    let input_args = inputs
        .iter()
        .map(|input| format!("-i \"{}\"", input.display()))
        .collect::<Vec<_>>()
        .join(" ");
    bindings.set("inputs", input_args.clone());
    bindings.set("output", format!("\"{}\"", output.display()));

    let resolved = bindings.resolve(template);

    // An ffmpeg invocation that never names its inputs gets them injected
    // right after the program name.
    if resolved.starts_with("ffmpeg ") && !resolved.contains(" -i ") {
        resolved.replacen("ffmpeg ", &format!("ffmpeg {} ", input_args), 1)
    } else {
        resolved
    }
}
