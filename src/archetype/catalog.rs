//! Archetype catalog: fixed scouting metadata per archetype.
//!
//! These are data, not computed text. Comparables, strengths, risks and
//! the fit statement are reproduced verbatim for each key; the classifier
//! only decides which key applies.

use super::{ArchetypeGroup, ArchetypeKey};
use crate::position::RoleClass;

pub struct ArchetypeInfo {
    pub key: ArchetypeKey,
    pub name: &'static str,
    pub group: ArchetypeGroup,
    pub comparables: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub risks: &'static [&'static str],
    pub fit: &'static str,
}

pub static CATALOG: &[ArchetypeInfo] = &[
    ArchetypeInfo {
        key: ArchetypeKey::OffensiveEngine,
        name: "Offensive Engine",
        group: ArchetypeGroup::Initiators,
        comparables: &["Luka Dončić", "Cade Cunningham"],
        strengths: &[
            "Creates everything for himself and others",
            "Carries massive usage without efficiency collapse",
            "Sees the floor two passes ahead",
        ],
        risks: &[
            "Team must be built around his rhythm",
            "Defensive effort comes and goes",
        ],
        fit: "Hand him the offense on day one and live with the learning curve.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::FloorGeneral,
        name: "Floor General",
        group: ArchetypeGroup::Initiators,
        comparables: &["Tyrese Haliburton", "Chris Paul"],
        strengths: &[
            "Elite assist-to-turnover profile",
            "Organizes an offense in the half court",
            "Makes teammates measurably better",
        ],
        risks: &[
            "Limited self-creation against set defenses",
            "Scoring gravity may never come",
        ],
        fit: "Plug-and-play starter next to finishers and spacers.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::ComboGuard,
        name: "Combo Guard",
        group: ArchetypeGroup::Initiators,
        comparables: &["Jamal Murray", "Collin Sexton"],
        strengths: &[
            "Scores at all three levels out of the pick-and-roll",
            "Comfortable on or off the ball",
        ],
        risks: &[
            "Neither a full-time lead guard nor a true wing",
            "Defensive target at his size",
        ],
        fit: "Best as the second guard in a creative backcourt.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::ThreeLevelScorer,
        name: "Three-Level Scorer",
        group: ArchetypeGroup::WingsAndSpecialists,
        comparables: &["Devin Booker", "Brandon Miller"],
        strengths: &[
            "Shot-making from everywhere on the floor",
            "High-volume efficiency against length",
            "Gets to his spots without a screen",
        ],
        risks: &[
            "Playmaking for others lags the scoring",
            "Shot selection can trend hero-ball",
        ],
        fit: "Primary bucket-getter who needs a table-setter beside him.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::TwoWayWing,
        name: "Two-Way Wing",
        group: ArchetypeGroup::WingsAndSpecialists,
        comparables: &["Mikal Bridges", "OG Anunoby"],
        strengths: &[
            "Guards the other team's best perimeter player",
            "Reliable catch-and-shoot threat",
            "Never has to leave the floor",
        ],
        risks: &[
            "Creation ceiling caps the star outcome",
        ],
        fit: "Every contender wants two of him; slots into any lineup.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::MovementShooter,
        name: "Movement Shooter",
        group: ArchetypeGroup::WingsAndSpecialists,
        comparables: &["Buddy Hield", "Gradey Dick"],
        strengths: &[
            "Elite shooting touch on heavy volume",
            "Warps defenses running off screens",
        ],
        risks: &[
            "One-dimensional if the shot isn't falling",
            "Hunted on the defensive end",
        ],
        fit: "Instant spacing for an offense with its creation already in place.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::ThreeAndDWing,
        name: "3-and-D Wing",
        group: ArchetypeGroup::WingsAndSpecialists,
        comparables: &["Herbert Jones", "Dorian Finney-Smith"],
        strengths: &[
            "Disruptive perimeter defender",
            "Knocks down open threes",
            "Low-maintenance offensive role",
        ],
        risks: &[
            "Offense stalls if asked to create",
            "Three-point volume must hold at the next level",
        ],
        fit: "Fourth or fifth starter glue piece on a good team.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::SlashingWing,
        name: "Slashing Wing",
        group: ArchetypeGroup::WingsAndSpecialists,
        comparables: &["Shaedon Sharpe", "Jaden McDaniels"],
        strengths: &[
            "Relentless rim pressure and free throws",
            "Transition weapon",
            "Functional athleticism pops on film",
        ],
        risks: &[
            "Jumper is the swing skill",
            "Defenses sag until the shot proves real",
        ],
        fit: "Attacking wing who needs shooters around him while the jumper develops.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::PointForward,
        name: "Point Forward",
        group: ArchetypeGroup::WingsAndSpecialists,
        comparables: &["Josh Giddey", "Kyle Anderson"],
        strengths: &[
            "Playmaking at positional size",
            "Rebounds and pushes his own breaks",
            "Unlocks inverted lineups",
        ],
        risks: &[
            "Scoring efficiency against set defenses",
            "Needs the ball to add value",
        ],
        fit: "Offensive hub for a team that spaces the floor around size.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::StretchBig,
        name: "Stretch Big",
        group: ArchetypeGroup::Frontcourt,
        comparables: &["Lauri Markkanen", "Dario Šarić"],
        strengths: &[
            "Legitimate floor-spacing at size",
            "Pick-and-pop gravity",
        ],
        risks: &[
            "Rim protection is ordinary",
            "Rebounding position battles",
        ],
        fit: "Frontcourt partner for a defensive anchor; opens driving lanes.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::RimRunningBig,
        name: "Rim-Running Big",
        group: ArchetypeGroup::Frontcourt,
        comparables: &["Jarrett Allen", "Daniel Gafford"],
        strengths: &[
            "Vertical spacing and lob finishing",
            "Offensive rebounding engine",
            "Runs the floor like a wing",
        ],
        risks: &[
            "Offense is entirely dependent on others",
            "Free-throw line can keep him off the floor late",
        ],
        fit: "Screen-and-dive center who finishes what the guards create.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::DefensiveAnchor,
        name: "Defensive Anchor",
        group: ArchetypeGroup::Frontcourt,
        comparables: &["Walker Kessler", "Brook Lopez"],
        strengths: &[
            "Erases mistakes at the rim",
            "Controls the defensive glass",
            "Drop-coverage backbone",
        ],
        risks: &[
            "Playable minutes hinge on scheme fit",
            "Perimeter switches are a stretch",
        ],
        fit: "Organizes a top-ten defense from the back line.",
    },
    // Fallbacks, keyed by role class.
    ArchetypeInfo {
        key: ArchetypeKey::RawProspect(RoleClass::Playmaker),
        name: "Raw Guard Prospect",
        group: ArchetypeGroup::Initiators,
        comparables: &["Developmental lead guard"],
        strengths: &[
            "Lead-guard instincts worth betting on",
            "Room left on the development curve",
        ],
        risks: &[
            "No carrying skill has separated yet",
            "Production has not matched the tools",
        ],
        fit: "Stash-and-develop guard; the two-year plan matters more than the fit.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::RawProspect(RoleClass::Wing),
        name: "Raw Wing Prospect",
        group: ArchetypeGroup::WingsAndSpecialists,
        comparables: &["Developmental wing"],
        strengths: &[
            "Positional size every team wants",
            "Flashes on both ends",
        ],
        risks: &[
            "Jack of all trades, master of none so far",
            "Role unclear without a standout skill",
        ],
        fit: "Draft the frame and the flashes; the role comes later.",
    },
    ArchetypeInfo {
        key: ArchetypeKey::RawProspect(RoleClass::Big),
        name: "Raw Big Prospect",
        group: ArchetypeGroup::Frontcourt,
        comparables: &["Developmental big"],
        strengths: &[
            "Size and rim-area instincts",
            "Physical tools ahead of the skill level",
        ],
        risks: &[
            "Modern bigs need a skill beyond size",
            "Conditioning and motor questions",
        ],
        fit: "Patient frontcourt project behind an established rotation.",
    },
];

/// Catalog lookup. `None` means a rule references a key with no metadata,
/// a table-consistency bug caught by startup validation.
pub fn info(key: ArchetypeKey) -> Option<&'static ArchetypeInfo> {
    CATALOG.iter().find(|i| i.key == key)
}
