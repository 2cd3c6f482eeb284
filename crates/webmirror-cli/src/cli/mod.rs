//! CLI for the webmirror tool: argument parsing, URL prompt, summary.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use webmirror_core::config;
use webmirror_core::mirror::{self, MirrorReport};

/// Top-level CLI for the webmirror tool.
#[derive(Debug, Parser)]
#[command(name = "webmirror")]
#[command(about = "webmirror: one-shot website page and asset mirroring", long_about = None)]
pub struct Cli {
    /// URL of the website to clone. Prompted for interactively when omitted.
    pub url: Option<String>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    print_banner();

    let target = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };
    let target = target.trim();
    if target.is_empty() {
        bail!("no URL given");
    }

    let report = mirror::mirror_site(&cfg, target)?;
    print_summary(&report, &cfg.output_dir);
    Ok(())
}

fn print_banner() {
    println!("webmirror {}", env!("CARGO_PKG_VERSION"));
    println!("one-shot website page and asset mirroring");
    println!();
}

fn prompt_for_url() -> Result<String> {
    print!("Enter the URL of the website to clone: ");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read URL from stdin")?;
    Ok(line)
}

fn print_summary(report: &MirrorReport, output_dir: &str) {
    println!();
    if report.page_saved {
        println!(
            "page saved, {} of {} assets mirrored",
            report.assets_saved, report.assets_discovered
        );
    } else {
        println!(
            "page could not be saved, {} of {} assets mirrored",
            report.assets_saved, report.assets_discovered
        );
    }
    if report.assets_failed > 0 {
        println!(
            "{} asset(s) failed to mirror; see the log for details",
            report.assets_failed
        );
    }
    println!("website cloned to: {}", output_dir);
}
