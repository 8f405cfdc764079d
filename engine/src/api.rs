use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::Dice;
use crate::content::builtin_presets;
use crate::presets::RollPreset;
use crate::roll::{RollRequest, RollResult, create_roll, format_roll};
use crate::stats::{Statistics, compute_statistics};

fn default_repeat() -> u32 {
    1
}

/// One session entry: either a preset id or an inline request, repeated
/// `repeat` times.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionRoll {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub request: Option<RollRequest>,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionConfig {
    #[serde(default)]
    pub seed: u64,
    /// Built-in preset set id (defaults to "basic") ...
    #[serde(default)]
    pub presets_id: Option<String>,
    /// ... or a JSON/YAML file of presets, which takes precedence.
    #[serde(default)]
    pub presets_path: Option<String>,
    /// Oldest results are dropped once the history exceeds this.
    #[serde(default)]
    pub history_cap: Option<usize>,
    pub rolls: Vec<SessionRoll>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResult {
    pub results: Vec<RollResult>,
    pub statistics: Statistics,
    pub log: Vec<String>,
}

fn parse_by_extension<T: for<'de> Deserialize<'de>>(path: &Path, text: &str) -> Result<T> {
    let yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if yaml {
        serde_yaml::from_str(text).with_context(|| format!("parsing {}", path.display()))
    } else {
        serde_json::from_str(text).with_context(|| format!("parsing {}", path.display()))
    }
}

pub fn load_session_config(path: &Path) -> Result<SessionConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading session config {}", path.display()))?;
    parse_by_extension(path, &text)
}

/// Parse one of the built-in preset sets by id.
pub fn builtin_preset_list(id: &str) -> Result<Vec<RollPreset>> {
    let Some(json) = builtin_presets().get(id).copied() else {
        bail!("unknown builtin preset set '{}'", id);
    };
    serde_json::from_str(json).context("parsing builtin presets")
}

fn resolve_presets(cfg: &SessionConfig) -> Result<Vec<RollPreset>> {
    if let Some(path) = &cfg.presets_path {
        let path = Path::new(path);
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading presets {}", path.display()))?;
        return parse_by_extension(path, &text);
    }
    builtin_preset_list(cfg.presets_id.as_deref().unwrap_or("basic"))
}

/// Execute every configured roll in order, keeping the (optionally capped)
/// history, and report the formatted log plus statistics over the final
/// history snapshot.
pub fn run_session(cfg: SessionConfig) -> Result<SessionResult> {
    if cfg.rolls.is_empty() {
        bail!("session has no rolls");
    }
    let presets = resolve_presets(&cfg)?;
    let mut dice = Dice::from_seed(cfg.seed);
    let mut history: Vec<RollResult> = Vec::new();
    let mut log = Vec::new();

    for entry in &cfg.rolls {
        let request: RollRequest = match (&entry.preset, &entry.request) {
            (Some(_), Some(_)) => bail!("session roll sets both 'preset' and 'request'"),
            (None, None) => bail!("session roll needs a 'preset' or a 'request'"),
            (Some(name), None) => presets
                .iter()
                .find(|p| p.id.eq_ignore_ascii_case(name))
                .map(RollPreset::to_request)
                .with_context(|| format!("preset '{}' not found", name))?,
            (None, Some(request)) => *request,
        };
        for _ in 0..entry.repeat {
            let roll = create_roll(&mut dice, request)?;
            log.push(format_roll(&roll));
            history.push(roll);
            if let Some(cap) = cfg.history_cap {
                if history.len() > cap {
                    history.remove(0);
                }
            }
        }
    }

    let statistics = compute_statistics(&history);
    Ok(SessionResult {
        results: history,
        statistics,
        log,
    })
}
