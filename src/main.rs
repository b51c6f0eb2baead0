mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use clipforge::{config, runner};
use clipforge_av::Orientation;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on the
    // verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "clipforge=trace,clipforge_av=trace".to_string()
        } else {
            "clipforge=info,clipforge_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Run {
            input1,
            input2,
            input3,
            output,
            command,
            dry_run,
            timeout,
        } => {
            let mut config = config::load_config_or_default(cli.config.as_deref())?;
            if let Some(seconds) = timeout {
                config.execution.timeout_seconds = seconds;
            }

            let request = runner::RunRequest {
                input1,
                input2,
                input3,
                output,
                command,
                execute: !dry_run,
            };

            let rt = tokio::runtime::Runtime::new()?;
            let outcome = rt.block_on(runner::run(&config, &request))?;

            println!("{}", outcome.message);
            if let Some(path) = outcome.output_path {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Probe { file, json } => probe_file(&file, json),
        Commands::CheckTools => check_tools(),
        Commands::Version => {
            println!("clipforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn probe_file(file: &std::path::Path, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let descriptor = clipforge_av::probe_dimensions(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        println!("File: {}", descriptor.path.display());
        println!(
            "Video: {}x{} ({})",
            descriptor.width,
            descriptor.height,
            Orientation::classify(descriptor.width, descriptor.height)
        );
    }

    Ok(())
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    let tools = clipforge_av::check_tools();
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install them to enable all features.");
    }

    Ok(())
}
