use anyhow::{Context, Result};
use clap::Parser;
use glosa::engine::Config;
use glosa::lexicon::{check_links, load_lexicon_dir, HttpProber};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "check_links")]
#[command(about = "Check that every lexicon entry has a reachable sign video")]
struct Args {
    /// TOML configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Directory with lexikon_sammanslagen_del_*.json files
    #[arg(long, short = 'd')]
    dir: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Number of probes in flight
    #[arg(long, short = 'w')]
    width: Option<usize>,

    /// Lexicon site root
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    glosa::logging::init();
    let args = Args::parse();

    let mut links = Config::load(args.config.as_deref())?.links;
    if let Some(dir) = args.dir {
        links.lexicon_dir = dir;
    }
    if let Some(out) = args.out {
        links.output = out;
    }
    if let Some(width) = args.width {
        links.width = width;
    }
    if let Some(base_url) = args.base_url {
        links.base_url = base_url;
    }

    let entries = load_lexicon_dir(&links.lexicon_dir)
        .with_context(|| format!("Cannot load lexicon from {}", links.lexicon_dir.display()))?;
    info!(entries = entries.len(), width = links.width, "checking video links");

    let prober = HttpProber::new(Duration::from_secs(links.timeout_secs))?;
    let report = check_links(&entries, &prober, &links.base_url, links.width).await;

    println!("Found: {}", report.found.len());
    println!("Missing: {}", report.missing.len());

    report.write_json(&links.output)?;
    println!("Report written to {}", links.output.display());

    Ok(())
}
