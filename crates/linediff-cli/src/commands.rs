use std::io::Read;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;

use linediff_core::{render_compare, render_unified, LineDiff};
use linediff_protocol::DiffResponse;
use linediff_server::{DiffServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args, cli.format),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }
    let (old, new) = if args.reverse {
        (&args.new, &args.old)
    } else {
        (&args.old, &args.new)
    };
    let (old_text, new_text) = load_texts(old, new)?;
    let diff = LineDiff::new(&old_text, &new_text);
    tracing::debug!(
        old = %old.display(),
        new = %new.display(),
        opcodes = diff.opcodes().len(),
        "diff computed"
    );

    let output = format_diff(&diff, format, &label(old), &label(new), args.context)?;
    match format {
        OutputFormat::Json => print!("{output}"),
        OutputFormat::Text | OutputFormat::Unified => {
            for (n, line) in output.lines().enumerate() {
                let header = format == OutputFormat::Unified && n < 2;
                println!("{}", colorize(line, header));
            }
        }
    }
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address: {bind}"))?;
    }

    println!("{} linediff server on {}", "✓".green().bold(), config.bind_addr.to_string().bold());
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(DiffServer::new(config).serve())?;
    Ok(())
}

/// Read both inputs; at most one may come from stdin.
pub fn load_texts(old: &Path, new: &Path) -> anyhow::Result<(String, String)> {
    if is_stdin(old) && is_stdin(new) {
        bail!("only one input can be read from stdin");
    }
    Ok((read_input(old)?, read_input(new)?))
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn label(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".into()
    } else {
        path.display().to_string()
    }
}

/// Render `diff` without color.
pub fn format_diff(
    diff: &LineDiff,
    format: OutputFormat,
    old_name: &str,
    new_name: &str,
    context: usize,
) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Json => {
            let response = DiffResponse::new(diff.records());
            let mut json = serde_json::to_string_pretty(&response)?;
            json.push('\n');
            json
        }
        OutputFormat::Unified => render_unified(diff, old_name, new_name, context),
        OutputFormat::Text => {
            let mut out = render_compare(diff);
            let stats = diff.stats();
            out.push_str(&format!(
                "changes: +{} -{}, similarity {:.2}\n",
                stats.additions(),
                stats.deletions(),
                stats.similarity
            ));
            out
        }
    };
    Ok(out)
}

fn colorize(line: &str, header: bool) -> String {
    if header {
        line.bold().to_string()
    } else if line.starts_with("@@") {
        line.cyan().to_string()
    } else if line.starts_with('+') {
        line.green().to_string()
    } else if line.starts_with('-') {
        line.red().to_string()
    } else {
        line.to_string()
    }
}
