use anyhow::{Context, Result};
use clap::Parser;
use glosa::app::{App, AppEvent, AppMode};
use glosa::engine::Config;
use glosa::glossing::Profile;
use glosa::repl::{command_to_app_event, parse_repl_input};
use glosa::rules::{source_from_config, RuleRepository};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "glosa")]
#[command(about = "Gloss Swedish text into Swedish Sign Language notation")]
struct Args {
    /// TOML configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Directory holding word-filters.json and glosa/god_glossing.json
    #[arg(long)]
    rules_dir: Option<PathBuf>,

    /// Base URL serving the rule documents
    #[arg(long)]
    rules_url: Option<String>,

    /// Transformation profile: `rules` or `static`
    #[arg(long, short = 'p')]
    profile: Option<Profile>,

    /// Gloss this text and exit instead of starting the REPL
    #[arg(long, short = 't')]
    text: Option<String>,

    /// Print one-shot output as JSON
    #[arg(long, requires = "text")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    glosa::logging::init();
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(dir) = args.rules_dir {
        config.rules.dir = Some(dir);
    }
    if let Some(url) = args.rules_url {
        config.rules.base_url = Some(url);
    }
    if let Some(profile) = args.profile {
        config.profile = profile;
    }

    let source = source_from_config(&config.rules).context("Cannot set up rule source")?;
    let repository = Arc::new(RuleRepository::new(source, &config.rules));
    if let Some(origin) = repository.source_description() {
        info!(%origin, "loading rules");
    }
    repository.ensure_loaded().await;

    let mut app = App::new(config, repository);

    if let Some(text) = args.text {
        if args.json {
            let output = serde_json::json!({
                "confidence": app.glosser().confidence(&text),
                "sentences": app.gloss_text(&text),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for line in app.handle_event(AppEvent::Gloss(text)).await {
                println!("{line}");
            }
        }
        return Ok(());
    }

    run_repl(&mut app).await
}

async fn run_repl(app: &mut App) -> Result<()> {
    println!("glosa {} ({}) - :h for help", env!("CARGO_PKG_VERSION"), app.profile);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let event = command_to_app_event(parse_repl_input(&line));
        for output in app.handle_event(event).await {
            println!("{output}");
        }
        if app.mode == AppMode::Quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_json_requires_text() {
        assert!(Args::try_parse_from(["glosa", "--json"]).is_err());

        let args = Args::try_parse_from(["glosa", "--json", "--text", "vad heter du"]).unwrap();
        assert!(args.json);
        assert_eq!(args.text.as_deref(), Some("vad heter du"));
    }

    #[test]
    fn test_profile_flag() {
        let args = Args::try_parse_from(["glosa", "-p", "rules"]).unwrap();
        assert_eq!(args.profile, Some(Profile::RepositoryRules));
    }
}
