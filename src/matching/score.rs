use crate::entities::fund_match::MatchReasons;
use crate::entities::{acquisition, fund, operation};

/// Funds in any other status are still scored but penalized (§ status penalty).
pub const FUND_STATUS_SEARCHING: &str = "searching";

// Criterion weights. The four maxima sum to 100, so the only clamp that can
// ever fire in practice is the floor after the status penalty.
const GEOGRAPHY_MATCH: i32 = 30;
const GEOGRAPHY_NEUTRAL: i32 = 15;
const GEOGRAPHY_MISS: i32 = 5;

const SECTOR_MATCH: i32 = 25;
const SECTOR_NEUTRAL: i32 = 12;
const SECTOR_MISS: i32 = 5;

const SIZE_BOTH_MATCH: i32 = 25;
const SIZE_ONE_MATCH: i32 = 15;
const SIZE_NO_MATCH: i32 = 5;

const EVIDENCE_BOTH_MATCH: i32 = 20;
const EVIDENCE_ONE_MATCH: i32 = 10;
const EVIDENCE_NO_HISTORY: i32 = 5;
const EVIDENCE_NO_MATCH: i32 = 3;

const STATUS_PENALTY: i32 = 30;

/// Outcome of a single (fund, operation) scoring run.
#[derive(Debug, Clone)]
pub struct ScoredPair {
    /// Final compatibility score in [0, 100].
    pub score: i32,
    pub reasons: MatchReasons,
}

/// One criterion's contribution: bounded points plus the human-readable
/// detail strings explaining the branch taken.
#[derive(Debug, Clone)]
struct SubScore {
    points: i32,
    details: Vec<String>,
}

impl SubScore {
    fn new(points: i32, detail: String) -> Self {
        Self {
            points,
            details: vec![detail],
        }
    }
}

/// Case-insensitive containment in either direction. All free-text token
/// comparison in the engine funnels through here so the heuristic can be
/// swapped (e.g. for normalized token-set equality) in one place.
fn token_matches(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

fn tokens_overlap(focus: &[String], candidates: &[&str]) -> bool {
    focus
        .iter()
        .any(|f| candidates.iter().any(|c| token_matches(f, c)))
}

/// Inclusive range check; a missing bound leaves that side unbounded.
fn within_bounds(value: i64, min: Option<i64>, max: Option<i64>) -> bool {
    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
}

fn format_range(min: Option<i64>, max: Option<i64>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{}-{}", lo, hi),
        (Some(lo), None) => format!(">= {}", lo),
        (None, Some(hi)) => format!("<= {}", hi),
        (None, None) => "unbounded".to_string(),
    }
}

/// Returns the operation sector string that triggered an exclusion, if any.
fn check_exclusion(fund: &fund::Model, operation: &operation::Model) -> Option<String> {
    let exclusions = fund.sector_exclusions.as_deref().unwrap_or(&[]);
    if exclusions.is_empty() {
        return None;
    }
    for candidate in [operation.sector.as_deref(), operation.subsector.as_deref()]
        .into_iter()
        .flatten()
    {
        if tokens_overlap(exclusions, &[candidate]) {
            return Some(candidate.to_string());
        }
    }
    None
}

fn score_geography(fund: &fund::Model, operation: &operation::Model) -> SubScore {
    let focus = fund.geography_focus.as_deref().unwrap_or(&[]);
    if focus.is_empty() {
        return SubScore::new(
            GEOGRAPHY_NEUTRAL,
            "Fund declares no geography focus".to_string(),
        );
    }
    match operation.geographic_location.as_deref() {
        Some(location) if tokens_overlap(focus, &[location]) => SubScore::new(
            GEOGRAPHY_MATCH,
            format!(
                "Location '{}' matches geography focus [{}]",
                location,
                focus.join(", ")
            ),
        ),
        Some(location) => SubScore::new(
            GEOGRAPHY_MISS,
            format!(
                "Location '{}' outside geography focus [{}]",
                location,
                focus.join(", ")
            ),
        ),
        None => SubScore::new(
            GEOGRAPHY_MISS,
            format!(
                "Operation location unknown; geography focus is [{}]",
                focus.join(", ")
            ),
        ),
    }
}

fn score_sector(fund: &fund::Model, operation: &operation::Model) -> SubScore {
    let focus = fund.sector_focus.as_deref().unwrap_or(&[]);
    if focus.is_empty() {
        return SubScore::new(SECTOR_NEUTRAL, "Fund declares no sector focus".to_string());
    }
    let candidates: Vec<&str> = [operation.sector.as_deref(), operation.subsector.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if candidates.is_empty() {
        SubScore::new(
            SECTOR_MISS,
            format!(
                "Operation sector unknown; sector focus is [{}]",
                focus.join(", ")
            ),
        )
    } else if tokens_overlap(focus, &candidates) {
        SubScore::new(
            SECTOR_MATCH,
            format!(
                "Sector '{}' matches sector focus [{}]",
                candidates.join("/"),
                focus.join(", ")
            ),
        )
    } else {
        SubScore::new(
            SECTOR_MISS,
            format!(
                "Sector '{}' outside sector focus [{}]",
                candidates.join("/"),
                focus.join(", ")
            ),
        )
    }
}

/// EBITDA and revenue are checked independently; a metric the operation does
/// not report is skipped rather than counted against it.
fn score_size(fund: &fund::Model, operation: &operation::Model) -> SubScore {
    let mut matched = 0;
    let mut details = Vec::new();

    if let Some(ebitda) = operation.ebitda_amount {
        if within_bounds(ebitda, fund.ebitda_min, fund.ebitda_max) {
            matched += 1;
            details.push(format!(
                "EBITDA {} within fund range {}",
                ebitda,
                format_range(fund.ebitda_min, fund.ebitda_max)
            ));
        }
    }
    if let Some(revenue) = operation.revenue_amount {
        if within_bounds(revenue, fund.revenue_min, fund.revenue_max) {
            matched += 1;
            details.push(format!(
                "Revenue {} within fund range {}",
                revenue,
                format_range(fund.revenue_min, fund.revenue_max)
            ));
        }
    }

    let points = match matched {
        2 => SIZE_BOTH_MATCH,
        1 => SIZE_ONE_MATCH,
        _ => SIZE_NO_MATCH,
    };
    if details.is_empty() {
        details.push("No size criteria matched".to_string());
    }
    SubScore { points, details }
}

/// Country and sector matches may come from different historical records.
fn score_evidence(operation: &operation::Model, history: &[acquisition::Model]) -> SubScore {
    if history.is_empty() {
        return SubScore::new(
            EVIDENCE_NO_HISTORY,
            "Fund has no acquisition history yet".to_string(),
        );
    }

    let country_match = operation.geographic_location.as_deref().is_some_and(|loc| {
        history
            .iter()
            .any(|past| past.country.as_deref().is_some_and(|c| c.eq_ignore_ascii_case(loc)))
    });
    let sector_match = operation.sector.as_deref().is_some_and(|sec| {
        history
            .iter()
            .any(|past| past.sector.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(sec)))
    });

    let mut details = Vec::new();
    if country_match {
        if let Some(location) = operation.geographic_location.as_deref() {
            details.push(format!("Fund has acquired in '{}' before", location));
        }
    }
    if sector_match {
        if let Some(sector) = operation.sector.as_deref() {
            details.push(format!("Fund has acquired in the '{}' sector before", sector));
        }
    }

    let points = match (country_match, sector_match) {
        (true, true) => EVIDENCE_BOTH_MATCH,
        (true, false) | (false, true) => EVIDENCE_ONE_MATCH,
        (false, false) => {
            details.push("No overlap with acquisition history".to_string());
            EVIDENCE_NO_MATCH
        }
    };
    SubScore { points, details }
}

/// Score one (fund, operation) pair. Pure and deterministic: identical inputs
/// always produce identical output, and no clock is read here.
///
/// A sector exclusion short-circuits everything else to a zero score.
pub fn score_pair(
    fund: &fund::Model,
    operation: &operation::Model,
    history: &[acquisition::Model],
) -> ScoredPair {
    if let Some(sector) = check_exclusion(fund, operation) {
        return ScoredPair {
            score: 0,
            reasons: MatchReasons {
                excluded: true,
                exclusion_reason: Some(sector.clone()),
                details: vec![format!("Sector '{}' is excluded by this fund", sector)],
                ..Default::default()
            },
        };
    }

    let geography = score_geography(fund, operation);
    let sector = score_sector(fund, operation);
    let size = score_size(fund, operation);
    let evidence = score_evidence(operation, history);

    let mut details = Vec::new();
    details.extend(geography.details);
    details.extend(sector.details);
    details.extend(size.details);
    details.extend(evidence.details);

    let mut total = geography.points + sector.points + size.points + evidence.points;
    if fund.status != FUND_STATUS_SEARCHING {
        total -= STATUS_PENALTY;
        details.push(format!(
            "Fund status is '{}', not actively searching",
            fund.status
        ));
    }

    ScoredPair {
        score: total.clamp(0, 100),
        reasons: MatchReasons {
            geography: geography.points,
            sector: sector.points,
            size: size.points,
            evidence: evidence.points,
            excluded: false,
            exclusion_reason: None,
            details,
        },
    }
}
