//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use linkaudit::audit::Auditor;
use linkaudit::config::Config;
use linkaudit::output::OutputMode;

/// linkaudit - Find broken relative links in markdown documentation
#[derive(Parser, Debug)]
#[command(
    name = "linkaudit",
    version,
    about = "Find broken relative links in markdown documentation",
    long_about = "Audit the internal links of a project's markdown files.\n\n\
                  Scans docs/**/*.md and *.md under the project root, resolves every\n\
                  relative or root-relative link and reports targets that do not exist.\n\
                  External (http, https, mailto) and anchor-only links are not checked.\n\n\
                  Exit status: 0 when all links resolve, 1 when any link is broken,\n\
                  2 on error."
)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/.linkaudit.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Additional glob of files to leave out (repeatable)
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI, returning the process exit status
pub fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let mut config = Config::load(&root, cli.config.as_deref())?;
    config.add_excludes(cli.exclude);

    let auditor = Auditor::from_config(&root, &config)?;
    log::debug!("auditing markdown under {}", auditor.root().display());

    let report = auditor.run()?;
    report.render(output_mode);

    Ok(report.exit_code())
}
