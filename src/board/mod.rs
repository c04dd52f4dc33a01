//! Big board: evaluate a whole class of records and rank them.
//!
//! The input is a single JSON file (object or array) or a directory of
//! `.json` record files. Records that fail evaluation are warned about
//! and skipped; one bad line never sinks the board. Records under the
//! minimum-minutes sample are dropped unless `--all` is given, and
//! limited samples are marked.

mod report;

use std::error::Error;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::eval::{self, Evaluation};
use crate::position::RoleClass;
use crate::record::{self, Confidence, StatRecord};
use crate::report_helpers;
use crate::swing::Tier;
use crate::walk;

const DEFAULT_TOP: usize = 60;
const DEFAULT_SORT: &str = "ceiling";
const DEFAULT_MIN_MINUTES: f64 = 100.0;

pub struct BoardOpts {
    pub path: PathBuf,
    pub json: bool,
    pub top: Option<usize>,
    pub sort: Option<String>,
    pub exclude: Vec<String>,
    pub include_all: bool,
}

/// One ranked line on the board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardEntry {
    pub rank: usize,
    pub name: String,
    pub team: Option<String>,
    pub class: RoleClass,
    pub age: Option<f64>,
    pub ceiling: f64,
    pub floor: f64,
    pub overall: f64,
    pub bpm: Option<f64>,
    pub tier: Tier,
    pub archetype: &'static str,
    pub risk_score: u8,
    pub risk_label: &'static str,
    pub limited_sample: bool,
}

fn entry(e: &Evaluation) -> BoardEntry {
    BoardEntry {
        rank: 0,
        name: e.name.clone(),
        team: e.profile.team.clone(),
        class: e.role_class,
        age: e.profile.age,
        ceiling: e.scores.ceiling,
        floor: e.scores.floor,
        overall: e.scores.overall,
        bpm: e.profile.bpm,
        tier: e.tier,
        archetype: e.archetype.name,
        risk_score: e.risk.score,
        risk_label: e.risk.label,
        limited_sample: e.confidence == Confidence::Limited,
    }
}

fn collect_records(opts: &BoardOpts) -> Result<Vec<StatRecord>, Box<dyn Error>> {
    if opts.path.is_dir() {
        let excludes = walk::build_globset(&opts.exclude)?;
        let mut records = Vec::new();
        for file in walk::record_files(&opts.path, &excludes) {
            match record::load_many(&file) {
                Ok(batch) => records.extend(batch),
                Err(err) => eprintln!("warning: {err}"),
            }
        }
        Ok(records)
    } else {
        record::load_many(&opts.path)
    }
}

fn sort_entries(entries: &mut [BoardEntry], sort_by: &str) {
    let by_desc = |entries: &mut [BoardEntry], key: fn(&BoardEntry) -> f64| {
        entries.sort_by(|a, b| {
            key(b).partial_cmp(&key(a))
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.overall.partial_cmp(&a.overall).unwrap_or(std::cmp::Ordering::Equal))
                .then(a.name.cmp(&b.name))
        });
    };
    match sort_by {
        "overall" => by_desc(entries, |e| e.overall),
        "floor" => by_desc(entries, |e| e.floor),
        "bpm" => by_desc(entries, |e| e.bpm.unwrap_or(f64::NEG_INFINITY)),
        // Safest first; overall breaks ties.
        "risk" => entries.sort_by(|a, b| {
            a.risk_score.cmp(&b.risk_score).then(
                b.overall.partial_cmp(&a.overall).unwrap_or(std::cmp::Ordering::Equal),
            )
        }),
        // Ceiling is the default and the fallback for unknown keys.
        _ => by_desc(entries, |e| e.ceiling),
    }
}

/// Build the ranked board from already-loaded records.
pub fn build(
    records: &[StatRecord],
    sort_by: &str,
    top: usize,
    min_minutes: f64,
    include_all: bool,
) -> Vec<BoardEntry> {
    let mut entries: Vec<BoardEntry> = Vec::new();
    for r in records {
        if !include_all && r.minutes.unwrap_or(0.0) < min_minutes {
            continue;
        }
        match eval::evaluate(r) {
            Ok(e) => entries.push(entry(&e)),
            Err(err) => eprintln!("warning: {err}"),
        }
    }

    sort_entries(&mut entries, sort_by);
    entries.truncate(top);
    for (i, e) in entries.iter_mut().enumerate() {
        e.rank = i + 1;
    }
    entries
}

pub fn run(opts: &BoardOpts, config: &Config) -> Result<(), Box<dyn Error>> {
    let records = collect_records(opts)?;
    if records.is_empty() {
        return Err(format!("no records found under {}", opts.path.display()).into());
    }

    let top = opts.top.or(config.board.top).unwrap_or(DEFAULT_TOP);
    let sort_by = opts
        .sort
        .clone()
        .or_else(|| config.board.sort.clone())
        .unwrap_or_else(|| DEFAULT_SORT.to_string());
    let min_minutes = config.board.min_minutes.unwrap_or(DEFAULT_MIN_MINUTES);

    let entries = build(&records, &sort_by, top, min_minutes, opts.include_all);

    if opts.json {
        report_helpers::print_json_stdout(&entries)?;
    } else {
        report::print_report(&entries, &sort_by, min_minutes);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
