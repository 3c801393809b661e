mod config;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use repin_detect::{detect_workspace, probe_available_package_managers};
use repin_render::render_result_md;
use repin_transform::adapters::{DetectWorkspacePort, FsWritePort, ShellPackageManagersPort};
use repin_transform::run_pin;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "repin",
    version,
    about = "Pins the packageManager field for JavaScript monorepos."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pin packageManager in the root manifest to the installed version.
    Pin(PinArgs),
    /// Report the detected package manager and its installed version.
    Detect(DetectArgs),
}

#[derive(Debug, Parser)]
struct PinArgs {
    /// Repository root (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Compute and report the change without writing it.
    #[arg(long, default_value_t = false)]
    dry: bool,

    /// Render a unified diff of the change.
    #[arg(long, default_value_t = false)]
    print: bool,

    /// Accepted for runner-contract uniformity; unused by this transform.
    #[arg(long, default_value_t = false)]
    force: bool,

    /// Emit the change map as JSON instead of a summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Parser)]
struct DetectArgs {
    /// Repository root (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Emit JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Pin(args) => cmd_pin(args),
        Command::Detect(args) => cmd_detect(args),
    }
}

fn cmd_pin(args: PinArgs) -> anyhow::Result<()> {
    let file_config = config::load_or_default(&args.repo_root).context("load repin.toml config")?;
    let options = config::merge_options(&file_config, args.dry, args.print, args.force);

    debug!(
        root = %args.repo_root,
        dry = options.dry,
        print = options.print,
        "running pin transform"
    );

    let result = run_pin(
        &args.repo_root,
        &options,
        &DetectWorkspacePort,
        &ShellPackageManagersPort,
        &FsWritePort,
    );

    let fatal_message = result.fatal_error.as_ref().map(ToString::to_string);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.changes)?);
    } else {
        print!(
            "{}",
            render_result_md(&result.changes, fatal_message.as_deref())
        );
    }

    if let Some(fatal) = result.fatal_error {
        return Err(anyhow::Error::new(fatal));
    }
    Ok(())
}

fn cmd_detect(args: DetectArgs) -> anyhow::Result<()> {
    let details = detect_workspace(&args.repo_root)
        .with_context(|| format!("detect package manager for {}", args.repo_root))?;
    let available = probe_available_package_managers();
    let version = available.get(details.package_manager);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "packageManager": details.package_manager,
                "version": version,
            }))?
        );
    } else {
        match version {
            Some(version) => println!("{}@{}", details.package_manager, version),
            None => println!("{} (not installed)", details.package_manager),
        }
    }
    Ok(())
}
