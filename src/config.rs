use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ReleaseNotesError, Result};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "release-notes.toml";

/// Represents the complete configuration for git-release-notes.
///
/// Contains the classifier keyword table and default exclusion filters.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub filters: FiltersConfig,
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_bot_authors() -> Vec<String> {
    strings(&["renovate", "dependabot"])
}

fn default_fix_keywords() -> Vec<String> {
    strings(&[
        "fix",
        "bug",
        "hotfix",
        "patch",
        "resolve",
        "error",
        "erreur",
        "issue",
        "correction",
        "ajustement",
        "réparation",
        "bugfix",
    ])
}

fn default_docs_keywords() -> Vec<String> {
    strings(&["doc", "readme", "changelog"])
}

fn default_feat_keywords() -> Vec<String> {
    strings(&[
        "feat",
        "feature",
        "add ",
        "introduce",
        "implement",
        "new ",
        "ajout ",
    ])
}

fn default_style_keywords() -> Vec<String> {
    strings(&["style", "format", "prettier", "eslint"])
}

fn default_refactor_keywords() -> Vec<String> {
    strings(&["refactor", "restructur", "reorganiz"])
}

fn default_test_keywords() -> Vec<String> {
    strings(&["test", "testing", "spec", "coverage"])
}

fn default_perf_keywords() -> Vec<String> {
    strings(&["perf", "performance", "optim", "faster"])
}

fn default_ops_keywords() -> Vec<String> {
    strings(&[
        " ci ", "pipeline", "workflow", "action", "build", "compile", "bundle", "deploy",
    ])
}

fn default_chore_keywords() -> Vec<String> {
    strings(&[
        "update",
        "bump",
        "upgrade",
        "deps",
        "dependency",
        "cleanup",
        "chore",
    ])
}

fn default_fallback_chore_keywords() -> Vec<String> {
    strings(&["dependency", "renovate", "bump"])
}

/// Configuration of the heuristic classifier.
///
/// Keyword lists are lowercase substrings; the order in which the lists are
/// consulted is fixed by the classifier, only their contents are swappable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Author-name substrings identifying dependency bots
    #[serde(default = "default_bot_authors")]
    pub bot_authors: Vec<String>,

    #[serde(default)]
    pub keywords: KeywordsConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            bot_authors: default_bot_authors(),
            keywords: KeywordsConfig::default(),
        }
    }
}

/// Keyword table, one list per category.
///
/// All lists except `fallback_chore` are tested against the first line of the
/// message; `fallback_chore` is tested against the full message.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct KeywordsConfig {
    #[serde(default = "default_fix_keywords")]
    pub fix: Vec<String>,

    #[serde(default = "default_docs_keywords")]
    pub docs: Vec<String>,

    #[serde(default = "default_feat_keywords")]
    pub feat: Vec<String>,

    #[serde(default = "default_style_keywords")]
    pub style: Vec<String>,

    #[serde(default = "default_refactor_keywords")]
    pub refactor: Vec<String>,

    #[serde(default = "default_test_keywords")]
    pub test: Vec<String>,

    #[serde(default = "default_perf_keywords")]
    pub perf: Vec<String>,

    #[serde(default = "default_ops_keywords")]
    pub ops: Vec<String>,

    #[serde(default = "default_chore_keywords")]
    pub chore: Vec<String>,

    #[serde(default = "default_fallback_chore_keywords")]
    pub fallback_chore: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        KeywordsConfig {
            fix: default_fix_keywords(),
            docs: default_docs_keywords(),
            feat: default_feat_keywords(),
            style: default_style_keywords(),
            refactor: default_refactor_keywords(),
            test: default_test_keywords(),
            perf: default_perf_keywords(),
            ops: default_ops_keywords(),
            chore: default_chore_keywords(),
            fallback_chore: default_fallback_chore_keywords(),
        }
    }
}

/// Exclusion regexes applied before classification.
///
/// These are combined with the patterns given on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct FiltersConfig {
    #[serde(default)]
    pub exclude_title: Vec<String>,

    #[serde(default)]
    pub exclude_author: Vec<String>,

    #[serde(default)]
    pub exclude_message: Vec<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-notes.toml` in current directory
/// 3. `.release-notes.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ReleaseNotesError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str).map_err(|e| {
        ReleaseNotesError::config(format!("cannot parse {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
