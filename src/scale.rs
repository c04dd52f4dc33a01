//! Scale normalization for percentage-like statistics.
//!
//! Source data mixes two conventions for the same field: some feeds express
//! shooting splits and rates as fractions (0.412), others as percentages
//! (41.2). The canonical form everywhere downstream is 0–100. A value `v`
//! is treated as a fraction and multiplied by 100 when `0 < v < 1.0`;
//! otherwise it is used as-is. Percentile-typed fields are additionally
//! rounded to the nearest integer.
//!
//! The heuristic is ambiguous at the low end: a genuine 0.5th-percentile
//! rank is indistinguishable from a 50% fraction. That boundary is pinned
//! by tests rather than special-cased.

use serde::Serialize;

use crate::record::StatRecord;

/// Canonicalize a percentage-like value to the 0–100 scale.
/// `None` passes through as `None`.
pub fn pct(v: Option<f64>) -> Option<f64> {
    v.map(|v| if v > 0.0 && v < 1.0 { v * 100.0 } else { v })
}

/// Canonicalize a percentile rank to an integer on the 0–100 scale.
pub fn pctl(v: Option<f64>) -> Option<f64> {
    pct(v).map(f64::round)
}

/// Supplied percentile ranks for a player, computed upstream against a
/// reference population. Any entry may be absent; downstream formulas fall
/// back to a raw-statistic derivation or the neutral median.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Percentiles {
    pub bpm: Option<f64>,
    pub usg: Option<f64>,
    pub ts: Option<f64>,
    pub ast: Option<f64>,
    pub to: Option<f64>,
    pub orb: Option<f64>,
    pub drb: Option<f64>,
    pub stl: Option<f64>,
    pub blk: Option<f64>,
    pub ftr: Option<f64>,
    pub ast_tov: Option<f64>,
    pub ft: Option<f64>,
    pub tp: Option<f64>,
    pub three_freq: Option<f64>,
    pub mid: Option<f64>,
    pub rim_freq: Option<f64>,
    pub dunk: Option<f64>,
    pub foul: Option<f64>,
    pub height: Option<f64>,
}

/// One player's statistics with every percentage-like field on the
/// canonical 0–100 scale. Owned by the engine for the duration of a single
/// evaluation; later stages read it, none mutate it.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedProfile {
    pub name: String,
    pub pos: String,
    pub team: Option<String>,
    pub year: Option<i32>,
    pub class: Option<String>,

    pub age: Option<f64>,
    pub height_in: Option<f64>,
    pub weight_lb: Option<f64>,
    pub wingspan_in: Option<f64>,
    pub ws_delta: Option<f64>,

    pub games: Option<f64>,
    pub minutes: Option<f64>,
    pub minutes_per_g: Option<f64>,

    pub usg: Option<f64>,
    pub bpm: Option<f64>,
    pub obpm: Option<f64>,
    pub dbpm: Option<f64>,
    pub ortg: Option<f64>,
    pub ts: Option<f64>,
    pub efg: Option<f64>,

    pub ast_pct: Option<f64>,
    pub to_pct: Option<f64>,
    pub orb_pct: Option<f64>,
    pub drb_pct: Option<f64>,
    pub stl_pct: Option<f64>,
    pub blk_pct: Option<f64>,
    pub ast_tov: Option<f64>,
    pub foul_per_40: Option<f64>,

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

    pub vert_max: Option<f64>,
    pub sprint_34: Option<f64>,
    pub lane_agility: Option<f64>,

    pub pctl: Percentiles,
}

impl NormalizedProfile {
    /// Build the canonical profile from a raw record. The same heuristic is
    /// applied to every field of a given semantic, so relative comparisons
    /// between players stay consistent.
    pub fn from_record(r: &StatRecord) -> Self {
        NormalizedProfile {
            name: r.name.clone(),
            pos: r.pos.clone(),
            team: r.team.clone(),
            year: r.year,
            class: r.class.clone(),

            age: r.age,
            height_in: r.height_in,
            weight_lb: r.weight_lb,
            wingspan_in: r.wingspan_in,
            ws_delta: r.ws_delta,

            games: r.games,
            minutes: r.minutes,
            minutes_per_g: r.minutes_per_g,

            usg: pct(r.usg),
            bpm: r.bpm,
            obpm: r.obpm,
            dbpm: r.dbpm,
            ortg: r.ortg,
            ts: pct(r.ts),
            efg: pct(r.efg),

            ast_pct: pct(r.ast_p),
            to_pct: pct(r.to_p),
            orb_pct: pct(r.orb_p),
            drb_pct: pct(r.drb_p),
            stl_pct: pct(r.stl_p),
            blk_pct: pct(r.blk_p),
            ast_tov: r.ast_tov,
            foul_per_40: r.foul_per_40,

            fg_pct: pct(r.fg_pct),
            tp_pct: pct(r.tp_pct),
            ft_pct: pct(r.ft_pct),
            mid_pct: pct(r.mid_pct),
            rim_pct: pct(r.rim_pct),

            three_freq: pct(r.three_freq),
            mid_freq: pct(r.mid_freq),
            rim_freq: pct(r.rim_freq),
            dunk_rate: pct(r.dunk_rate),
            ftr: pct(r.ftr),
            tpa_per_g: r.tpa_per_g,

            vert_max: r.vert_max,
            sprint_34: r.sprint_34,
            lane_agility: r.lane_agility,

            pctl: Percentiles {
                bpm: pctl(r.pctl_bpm),
                usg: pctl(r.pctl_usg),
                ts: pctl(r.pctl_ts),
                ast: pctl(r.pctl_ast),
                to: pctl(r.pctl_to),
                orb: pctl(r.pctl_orb),
                drb: pctl(r.pctl_drb),
                stl: pctl(r.pctl_stl),
                blk: pctl(r.pctl_blk),
                ftr: pctl(r.pctl_ftr),
                ast_tov: pctl(r.pctl_ast_tov),
                ft: pctl(r.pctl_ft),
                tp: pctl(r.pctl_tp),
                three_freq: pctl(r.pctl_three_freq),
                mid: pctl(r.pctl_mid),
                rim_freq: pctl(r.pctl_rim_freq),
                dunk: pctl(r.pctl_dunk),
                foul: pctl(r.pctl_foul),
                height: pctl(r.pctl_height),
            },
        }
    }
}

#[cfg(test)]
#[path = "scale_test.rs"]
mod tests;
