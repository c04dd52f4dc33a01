//! Raw statistical records.
//!
//! A `StatRecord` is the flat per-player input supplied by the data layer:
//! one season line of box-score rates, advanced metrics, shooting splits,
//! combine measurements and precomputed percentile ranks. Every statistic
//! is optional: absent means unknown and every downstream formula
//! tolerates it. Only the identity fields (`name`, `pos`) are required,
//! and an empty identity is rejected before any computation runs.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

/// Sample-size confidence tier, from total minutes played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// 500+ minutes: scores are fully trustworthy.
    Full,
    /// 100–499 minutes: usable, interpret with caution.
    Limited,
    /// Under 100 minutes (or unknown): not enough signal to evaluate.
    VeryLow,
}

const FULL_MINUTES: f64 = 500.0;
const LIMITED_MINUTES: f64 = 100.0;

/// One player's raw season record as supplied by the data layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatRecord {
    // Identity, required.
    pub name: String,
    pub pos: String,

    // Biographical.
    pub team: Option<String>,
    pub year: Option<i32>,
    pub class: Option<String>,
    pub age: Option<f64>,
    pub height_in: Option<f64>,
    pub weight_lb: Option<f64>,
    pub wingspan_in: Option<f64>,
    pub ws_delta: Option<f64>,

    // Participation.
    pub games: Option<f64>,
    pub minutes: Option<f64>,
    pub minutes_per_g: Option<f64>,

    // Advanced rates.
    pub usg: Option<f64>,
    pub bpm: Option<f64>,
    pub obpm: Option<f64>,
    pub dbpm: Option<f64>,
    pub ortg: Option<f64>,
    pub ts: Option<f64>,
    pub efg: Option<f64>,
    pub ast_p: Option<f64>,
    pub to_p: Option<f64>,
    pub orb_p: Option<f64>,
    pub drb_p: Option<f64>,
    pub stl_p: Option<f64>,
    pub blk_p: Option<f64>,
    pub ast_tov: Option<f64>,
    pub foul_per_40: Option<f64>,

    // Shooting split.
    pub fg_pct: Option<f64>,
    pub tp_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    pub mid_pct: Option<f64>,
    pub rim_pct: Option<f64>,
    pub three_freq: Option<f64>,
    pub mid_freq: Option<f64>,
    pub rim_freq: Option<f64>,
    pub dunk_rate: Option<f64>,
    pub ftr: Option<f64>,
    pub tpa_per_g: Option<f64>,

    // Combine drills.
    pub vert_max: Option<f64>,
    pub sprint_34: Option<f64>,
    pub lane_agility: Option<f64>,

    // Supplied percentile ranks (against the reference population).
    pub pctl_bpm: Option<f64>,
    pub pctl_usg: Option<f64>,
    pub pctl_ts: Option<f64>,
    pub pctl_ast: Option<f64>,
    pub pctl_to: Option<f64>,
    pub pctl_orb: Option<f64>,
    pub pctl_drb: Option<f64>,
    pub pctl_stl: Option<f64>,
    pub pctl_blk: Option<f64>,
    pub pctl_ftr: Option<f64>,
    pub pctl_ast_tov: Option<f64>,
    pub pctl_ft: Option<f64>,
    pub pctl_tp: Option<f64>,
    pub pctl_three_freq: Option<f64>,
    pub pctl_mid: Option<f64>,
    pub pctl_rim_freq: Option<f64>,
    pub pctl_dunk: Option<f64>,
    pub pctl_foul: Option<f64>,
    pub pctl_height: Option<f64>,
}

impl StatRecord {
    /// Identity validation. Statistical fields may all be absent; a record
    /// with no name or declared position cannot be evaluated at all.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.name.trim().is_empty() {
            return Err("record is missing a player name".into());
        }
        if self.pos.trim().is_empty() {
            return Err(format!("record for {:?} is missing a position", self.name).into());
        }
        Ok(())
    }

    pub fn confidence(&self) -> Confidence {
        match self.minutes {
            Some(m) if m >= FULL_MINUTES => Confidence::Full,
            Some(m) if m >= LIMITED_MINUTES => Confidence::Limited,
            _ => Confidence::VeryLow,
        }
    }

    /// Bare record with identity only, for unit tests across the engine.
    #[cfg(test)]
    pub fn for_tests(name: &str, pos: &str) -> Self {
        StatRecord {
            name: name.to_string(),
            pos: pos.to_string(),
            ..StatRecord::default()
        }
    }
}

/// Load a single record from a JSON file.
pub fn load(path: &Path) -> Result<StatRecord, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let record: StatRecord = serde_json::from_str(&text)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(record)
}

/// Load one or many records from a JSON file holding either a single
/// object or an array of objects.
pub fn load_many(path: &Path) -> Result<Vec<StatRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let records = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<StatRecord>, _>>()
            .map_err(|e| format!("{}: {e}", path.display()))?,
        other => vec![
            serde_json::from_value(other).map_err(|e| format!("{}: {e}", path.display()))?,
        ],
    };
    Ok(records)
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
