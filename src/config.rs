use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::HashMap;
use tic_tac_toe::Team;
use tracing_subscriber::filter::LevelFilter;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_show_hints() -> bool {
    true
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_log_level")]
    log_level: String,

    log_file: Option<Utf8PathBuf>,

    #[serde(default)]
    human_team: TeamKind,

    #[serde(default = "default_show_hints")]
    show_hints: bool,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_file(&self) -> Option<&Utf8Path> {
        self.log_file.as_deref()
    }

    /// The team a human plays by default
    pub fn human_team(&self) -> Team {
        self.human_team.into()
    }

    /// Whether to print the index of empty tiles
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from '{path}'"))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if self.log_level.parse::<LevelFilter>().is_err() {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidLogLevel(self.log_level.clone()),
            });
        }

        if let Some(log_file) = self.log_file.as_deref() {
            let parent = log_file
                .parent()
                .filter(|parent| !parent.as_str().is_empty());
            if let Some(parent) = parent {
                if !parent.is_dir() {
                    errors.push(ValidationMessage {
                        severity: Severity::Error,
                        error: ValidationError::MissingLogDir(parent.to_owned()),
                    });
                }
            }
        }

        let mut unknown_keys: Vec<&String> = self.extra.keys().collect();
        unknown_keys.sort();
        for key in unknown_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key.clone()),
            });
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
            human_team: TeamKind::default(),
            show_hints: default_show_hints(),
            extra: HashMap::new(),
        }
    }
}

/// A team as written in a config
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Deserialize, Serialize)]
pub enum TeamKind {
    #[default]
    #[serde(alias = "x")]
    X,

    #[serde(alias = "o")]
    O,
}

impl From<TeamKind> for Team {
    fn from(kind: TeamKind) -> Self {
        match kind {
            TeamKind::X => Team::X,
            TeamKind::O => Team::O,
        }
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid Log Level \"{0}\"")]
    InvalidLogLevel(String),

    #[error("Missing Log Directory \"{0}\"")]
    MissingLogDir(Utf8PathBuf),

    #[error("Unknown Key \"{0}\"")]
    UnknownKey(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}
