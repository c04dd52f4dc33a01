//! Board table rendering.

use unicode_width::UnicodeWidthStr;

use super::BoardEntry;
use crate::report_helpers::separator;

/// Nominal display scale for composite scores.
fn shown(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

pub fn print_report(entries: &[BoardEntry], sort_by: &str, min_minutes: f64) {
    let sep = separator(88);

    println!("Big Board — top {} by {sort_by}", entries.len());
    println!("{sep}");

    // Player names are routinely non-ASCII; pad by display width.
    let name_width = entries
        .iter()
        .map(|e| e.name.width())
        .max()
        .unwrap_or(6)
        .clamp(6, 28);

    println!(
        " {:>3}  {:<name_width$}  {:<9}  {:>4}  {:>4}  {:>4}  {:>4}  {:<20}  Risk",
        "#", "Player", "Class", "Age", "Ceil", "Flr", "Ovr", "Archetype",
    );
    println!("{sep}");

    for e in entries {
        let mut name = e.name.clone();
        while name.width() > name_width {
            name.pop();
        }
        let pad = name_width - name.width();
        let age = e.age.map_or("—".to_string(), |a| format!("{a:.1}"));
        let marker = if e.limited_sample { "~" } else { "" };
        println!(
            " {:>3}  {}{}  {:<9}  {:>4}  {:>4.0}  {:>4.0}  {:>4.0}  {:<20}  {}/10 {}{}",
            e.rank,
            name,
            " ".repeat(pad),
            e.class.as_str(),
            age,
            shown(e.ceiling),
            shown(e.floor),
            shown(e.overall),
            e.archetype,
            e.risk_score,
            e.risk_label,
            marker,
        );
    }

    println!("{sep}");
    println!(" >= {min_minutes:.0} min sample · ~ = limited sample (100-499 min)");
}
