use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "varscope", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a script and write the layout report as JSON.
    Layout(LayoutArgs),
    /// Replay a script without writing a report.
    Check(CheckArgs),
    /// Print shelf heights for 0..=N rows.
    Heights(HeightsArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output report path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Layout config JSON overriding the script's embedded config.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout config JSON overriding the script's embedded config.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct HeightsArgs {
    /// Largest row count to print.
    #[arg(long, default_value_t = 8)]
    rows: usize,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Check(args) => cmd_check(args),
        Command::Heights(args) => cmd_heights(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_script(path: &Path, config: Option<&Path>) -> anyhow::Result<varscope::Script> {
    let mut script = varscope::Script::from_path(path)?;
    if let Some(cfg_path) = config {
        script.config = varscope::LayoutConfig::from_path(cfg_path)?;
    }
    Ok(script)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let script = load_script(&args.in_path, args.config.as_deref())?;
    let report = varscope::run_script(&script)
        .with_context(|| format!("replay script '{}'", args.in_path.display()))?;
    let json = serde_json::to_string_pretty(&report).context("serialize layout report")?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json + "\n")
                .with_context(|| format!("write report '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write report to stdout")?;
        }
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let script = load_script(&args.in_path, args.config.as_deref())?;
    let report = varscope::run_script(&script)
        .with_context(|| format!("replay script '{}'", args.in_path.display()))?;
    eprintln!(
        "ok: {} steps, {} scope(s) at end",
        report.steps.len(),
        report.final_state.scopes.len()
    );
    Ok(())
}

fn cmd_heights(args: HeightsArgs) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for rows in 0..=args.rows {
        writeln!(stdout, "{rows}\t{:.2}", varscope::shelf_height(rows as f64))?;
    }
    Ok(())
}
