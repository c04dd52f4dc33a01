//! Scouting report rendering for a single evaluation.

use crate::eval::Evaluation;
use crate::position::RoleClass;
use crate::record::Confidence;
use crate::report_helpers::separator;

/// Median stat lines by NBA outcome tier and role class. A prospect whose
/// college rates clear the median for a tier profiles like that tier's
/// typical player.
struct TierLine {
    bpm: f64,
    usg: f64,
    ts: f64,
    ast_p: f64,
    to_p: f64,
    stl_p: f64,
    blk_p: f64,
    orb_p: f64,
    drb_p: f64,
}

fn tier_medians(tier: &str, class: RoleClass) -> (&'static str, TierLine) {
    use RoleClass::{Big, Playmaker, Wing};
    match (tier, class) {
        ("role-player", Playmaker) => ("Role Player", TierLine { bpm: 4.5, usg: 22.0, ts: 54.0, ast_p: 25.0, to_p: 15.0, stl_p: 2.3, blk_p: 0.6, orb_p: 2.5, drb_p: 13.0 }),
        ("role-player", Wing) => ("Role Player", TierLine { bpm: 4.0, usg: 20.0, ts: 55.0, ast_p: 12.0, to_p: 13.0, stl_p: 1.8, blk_p: 2.0, orb_p: 3.5, drb_p: 16.0 }),
        ("role-player", Big) => ("Role Player", TierLine { bpm: 5.0, usg: 21.0, ts: 57.0, ast_p: 10.0, to_p: 13.0, stl_p: 1.2, blk_p: 6.0, orb_p: 9.0, drb_p: 20.0 }),
        ("starter", Playmaker) => ("Starter", TierLine { bpm: 7.0, usg: 25.0, ts: 56.0, ast_p: 28.0, to_p: 14.0, stl_p: 2.5, blk_p: 0.8, orb_p: 3.0, drb_p: 14.0 }),
        ("starter", Wing) => ("Starter", TierLine { bpm: 6.5, usg: 23.0, ts: 57.0, ast_p: 14.0, to_p: 12.0, stl_p: 2.0, blk_p: 2.5, orb_p: 4.0, drb_p: 17.0 }),
        ("starter", Big) => ("Starter", TierLine { bpm: 7.5, usg: 23.0, ts: 59.0, ast_p: 12.0, to_p: 12.0, stl_p: 1.5, blk_p: 7.0, orb_p: 10.0, drb_p: 22.0 }),
        ("all-star", Playmaker) => ("All-Star", TierLine { bpm: 10.0, usg: 28.0, ts: 59.0, ast_p: 32.0, to_p: 13.0, stl_p: 2.8, blk_p: 1.0, orb_p: 3.5, drb_p: 15.0 }),
        ("all-star", Wing) => ("All-Star", TierLine { bpm: 9.5, usg: 26.0, ts: 60.0, ast_p: 16.0, to_p: 11.0, stl_p: 2.3, blk_p: 3.0, orb_p: 5.0, drb_p: 19.0 }),
        ("all-star", Big) => ("All-Star", TierLine { bpm: 10.5, usg: 26.0, ts: 62.0, ast_p: 14.0, to_p: 11.0, stl_p: 1.8, blk_p: 8.5, orb_p: 11.0, drb_p: 24.0 }),
        (_, Playmaker) => ("Replacement", TierLine { bpm: 2.0, usg: 20.0, ts: 52.0, ast_p: 22.0, to_p: 16.0, stl_p: 2.0, blk_p: 0.5, orb_p: 2.0, drb_p: 12.0 }),
        (_, Wing) => ("Replacement", TierLine { bpm: 1.5, usg: 18.0, ts: 53.0, ast_p: 10.0, to_p: 14.0, stl_p: 1.5, blk_p: 1.5, orb_p: 3.0, drb_p: 15.0 }),
        (_, Big) => ("Replacement", TierLine { bpm: 2.5, usg: 19.0, ts: 55.0, ast_p: 8.0, to_p: 14.0, stl_p: 1.0, blk_p: 5.0, orb_p: 8.0, drb_p: 18.0 }),
    }
}

const WIDTH: usize = 66;

/// Display clamp: scores live on a nominal 0-100 scale for the reader
/// even when the true value runs past it.
fn shown(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.1}"),
        None => "—".to_string(),
    }
}

pub fn print_report(e: &Evaluation, vs: &str) {
    let sep = separator(WIDTH);

    println!("Scouting Report: {}", e.name);
    println!("{sep}");
    let height = match e.profile.height_in {
        Some(h) => format!("{}'{}\"", (h / 12.0) as i32, (h % 12.0).round() as i32),
        None => "—".to_string(),
    };
    println!(
        " {} · {} · {} · Age {}",
        e.pos,
        height,
        e.profile.team.as_deref().unwrap_or("—"),
        fmt_opt(e.profile.age)
    );
    println!(
        " Class: {}   Bucket: {}   Tier: {}",
        e.role_class, e.size_bucket, e.tier.as_str()
    );
    match e.confidence {
        Confidence::VeryLow => {
            println!(" NOTE: under 100 minutes of sample — scores are close to meaningless");
        }
        Confidence::Limited => {
            println!(" NOTE: limited sample — interpret scores with caution");
        }
        Confidence::Full => {}
    }
    println!("{sep}");

    println!(" {:<22} {:>5}", "Score", "Value");
    println!("{sep}");
    let rows = [
        ("Overall", e.scores.overall),
        ("Feel / IQ", e.scores.feel),
        ("Func. Athleticism", e.scores.func_ath),
        ("Shooting", e.scores.shooting),
        ("Defense", e.scores.defense),
        ("Floor", e.scores.floor),
        ("Ceiling", e.scores.ceiling),
        ("Self-Creation", e.scores.self_creation),
    ];
    for (label, value) in rows {
        println!(" {label:<22} {:>5.0}", shown(value));
    }
    let ff = &e.scores.four_factors;
    println!(
        " {:<22} {:>+5.2}  ({} role, reliability {:.2})",
        "Four-Factor Rating", ff.composite, ff.role.as_str(), ff.reliability
    );
    println!(
        " Projection: 3P {:.1}%  ·  3PAr {:.1}  ·  TS {:.1}%",
        e.scores.proj_nba_3p, e.scores.proj_nba_3par, e.scores.proj_nba_ts
    );
    println!("{sep}");

    let dominant = e.roles.dominant();
    let secondary = e.roles.secondary();
    println!(
        " Roles (z, best first) — dominant {}, secondary {}",
        dominant.name, secondary.name
    );
    println!("{sep}");
    for role in e.roles.ranked().iter().take(6) {
        println!(
            " {:<18} {:<8} {:>+5.1}  {}",
            role.name,
            role.category.as_str(),
            role.z,
            role.label
        );
    }
    println!("{sep}");

    println!(" Archetype: {}  [{}]", e.archetype.name, e.archetype.group);
    println!("   Comps: {}", e.archetype.comparables.join(", "));
    for s in &e.archetype.strengths {
        println!("   + {s}");
    }
    for r in &e.archetype.risks {
        println!("   - {r}");
    }
    println!("   Fit: {}", e.archetype.fit);
    println!("{sep}");

    match &e.swing_skill {
        Some(swing) => {
            println!(
                " Swing Skill: {}  ({:+.1} tiers if it hits, {}% — {})",
                swing.skill, swing.tier_delta, swing.hit_probability, swing.hit_label
            );
            println!("   Now: {}", swing.current);
            println!("   Floor: {}", swing.floor_outcome);
            println!("   Ceiling: {}", swing.ceiling_outcome);
        }
        None => println!(" Swing Skill: none — no single skill gap stands out"),
    }
    println!("{sep}");

    println!(" Risk: {}/10  {}", e.risk.score, e.risk.label);
    for name in &e.risk.bust_clusters {
        println!("   - {name}");
    }
    for name in &e.risk.sleeper_clusters {
        println!("   + {name}");
    }

    if !e.badges.green.is_empty() {
        println!(" Badges: {}", e.badges.green.join(" · "));
    }
    if !e.badges.red.is_empty() {
        println!(" Red Flags: {}", e.badges.red.join(" · "));
    }
    println!("{sep}");

    let (tier_name, medians) = tier_medians(vs, e.role_class);
    println!(" vs. NBA {} ({})", tier_name, e.role_class);
    println!("{sep}");
    let comps: [(&str, Option<f64>, f64, bool); 9] = [
        ("BPM", e.profile.bpm, medians.bpm, false),
        ("USG%", e.profile.usg, medians.usg, false),
        ("TS%", e.profile.ts, medians.ts, false),
        ("AST%", e.profile.ast_pct, medians.ast_p, false),
        ("TO%", e.profile.to_pct, medians.to_p, true),
        ("STL%", e.profile.stl_pct, medians.stl_p, false),
        ("BLK%", e.profile.blk_pct, medians.blk_p, false),
        ("ORB%", e.profile.orb_pct, medians.orb_p, false),
        ("DRB%", e.profile.drb_pct, medians.drb_p, false),
    ];
    for (label, value, median, lower_is_better) in comps {
        let mark = match value {
            Some(v) => {
                let clears = if lower_is_better { v <= median } else { v >= median };
                if clears { "+" } else { "-" }
            }
            None => " ",
        };
        println!(" {mark} {label:<6} {:>6}  (bar: {median:.1})", fmt_opt(value));
    }
    println!("{sep}");
}
