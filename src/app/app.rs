use super::event::AppEvent;
use super::mode::AppMode;
use crate::engine::Config;
use crate::glossing::{Glosser, Profile, SentenceGloss};
use crate::input::{self, LoadError, LoadedText};
use crate::rules::model::DIRECTION_VERBS;
use crate::rules::RuleRepository;
use std::sync::Arc;
use tracing::{debug, info};

pub const HELP_TEXT: &str = "\
Type Swedish text to gloss it.
  @<file>          gloss a text file
  @@               gloss the clipboard
  :profile rules   filter and reorder with the loaded rules
  :profile static  built-in stopwords and lemmas
  :reload          retry loading missing rule files
  :h, :help        show this help
  :q, :quit        quit";

pub struct App {
    pub mode: AppMode,
    pub profile: Profile,
    config: Config,
    repository: Arc<RuleRepository>,
    glosser: Glosser,
}

impl App {
    /// Build an app around whatever rules `repository` already holds.
    pub fn new(config: Config, repository: Arc<RuleRepository>) -> Self {
        let glosser = Glosser::new(&config, &repository.snapshot());
        Self {
            mode: AppMode::Command,
            profile: config.profile,
            config,
            repository,
            glosser,
        }
    }

    pub fn glosser(&self) -> &Glosser {
        &self.glosser
    }

    pub fn gloss_text(&self, text: &str) -> Vec<SentenceGloss> {
        self.glosser.gloss_sentences(text, self.profile)
    }

    /// Handle one event and return the lines to show the user.
    pub async fn handle_event(&mut self, event: AppEvent) -> Vec<String> {
        match event {
            AppEvent::Gloss(text) => self.render(&text),
            AppEvent::LoadFile(path) => self.render_loaded(input::file::load(&path)),
            AppEvent::LoadClipboard => self.render_loaded(input::clipboard::load()),
            AppEvent::SetProfile(profile) => {
                self.profile = profile;
                info!(%profile, "profile changed");
                let mut lines = vec![format!("Profile: {profile}")];
                if profile == Profile::RepositoryRules && !self.glosser.has_rules() {
                    lines.push(
                        "Filter rules are not loaded; text passes through unchanged (:reload to retry)"
                            .to_string(),
                    );
                }
                lines
            }
            AppEvent::ReloadRules => self.reload_rules().await,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                Vec::new()
            }
            AppEvent::Help => HELP_TEXT.lines().map(str::to_string).collect(),
            AppEvent::InvalidCommand(input) if input.is_empty() => Vec::new(),
            AppEvent::InvalidCommand(input) => {
                vec![format!("Unknown command: {input} (type :h for help)")]
            }
        }
    }

    /// Load absent rule families and rebuild the glosser from the result.
    pub async fn reload_rules(&mut self) -> Vec<String> {
        let snapshot = self.repository.ensure_loaded().await;
        self.glosser = Glosser::new(&self.config, &snapshot);

        let state = |loaded: bool| if loaded { "loaded" } else { "absent" };
        let mut lines = vec![
            format!("Filter rules: {}", state(snapshot.filter.is_some())),
            format!("Grammar rules: {}", state(snapshot.grammar.is_some())),
        ];
        if let Some(grammar) = &snapshot.grammar {
            for rule in grammar.rules_by_priority() {
                let mut line = format!("  [{}] {} ({})", rule.priority, rule.name, rule.id);
                let verbs = rule.word_list(DIRECTION_VERBS);
                if !verbs.is_empty() {
                    line.push_str(&format!(": {}", verbs.join(", ")));
                }
                lines.push(line);
            }
        }
        lines
    }

    fn render(&self, text: &str) -> Vec<String> {
        debug!(confidence = self.glosser.confidence(text), "glossing text");
        let mut lines = Vec::new();
        for sentence in self.gloss_text(text) {
            lines.push(sentence.rendered());
            if sentence.variants.alternative != sentence.variants.standard {
                lines.push(format!("  alt: {}", sentence.rendered_alternative()));
            }
        }
        lines
    }

    fn render_loaded(&self, loaded: Result<LoadedText, LoadError>) -> Vec<String> {
        match loaded {
            Ok(loaded) => {
                debug!(source = %loaded.source, bytes = loaded.text.len(), "glossing loaded text");
                self.render(&loaded.text)
            }
            Err(e) => vec![format!("Error: {e}")],
        }
    }
}
