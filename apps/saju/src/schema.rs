//! Report schema — the typed shape of everything the model must return.
//!
//! Field declaration order is part of the external contract: serialized JSON
//! keys follow it, and downstream consumers diff `report.json` verbatim.
//! Maps use `BTreeMap` so re-encoding is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Minimum length (in characters, not bytes) of the two narrative fields.
pub const MIN_NARRATIVE_CHARS: usize = 2000;

/// User-supplied birth information, echoed back by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputInfo {
    pub name: String,
    /// YYYY-MM-DD
    pub birth_date: String,
    /// HH:MM
    pub birth_time: String,
    /// IANA zone id, e.g. "Asia/Seoul"
    pub timezone: String,
    pub birth_place: String,
    pub gender: String,
    /// "양력" (solar) or "음력" (lunar)
    pub calendar_type: String,
    pub analysis_date: String,
}

/// One pillar: a heavenly stem (천간) paired with an earthly branch (지지).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemBranch {
    pub stem: String,
    pub branch: String,
}

/// The complete four-pillar chart (사주 원국).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WonGuk {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

/// A hidden stem (지장간) inside a branch, with its influence weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: String,
    pub weight: f64,
}

/// Raw score and percentage share for a single element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementBalance {
    pub raw: f64,
    pub percent: f64,
}

/// Five-element (오행) analysis.
///
/// Percentages are taken from the model verbatim — they are NOT renormalized
/// to sum to 100, matching the original behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiveElements {
    pub wood: ElementBalance,
    pub fire: ElementBalance,
    pub earth: ElementBalance,
    pub metal: ElementBalance,
    pub water: ElementBalance,
    pub yin_percent: f64,
    pub yang_percent: f64,
    pub balance_index: f64,
    /// Free-form description of the dominant element(s).
    pub dominant: Value,
    /// Free-form description of the deficient element(s).
    pub deficient: Value,
}

/// Score for one ten-god (십신) relational category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenGod {
    pub raw: i64,
    pub weighted: f64,
    pub percent: f64,
}

/// A special branch combination (합/충 etc.) the model identified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialPattern {
    pub pattern: String,
    pub branches: Vec<String>,
    pub meaning: String,
}

/// A ranked favorable-element (용신) suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YongShinCandidate {
    pub element: String,
    pub score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterTalents {
    pub summary: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerScore {
    pub career_group: String,
    pub score: f64,
}

/// The model's self-reported explanation trace. This is fabricated post hoc
/// by the model, not a record of an actual computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationLog {
    pub weights: BTreeMap<String, f64>,
    pub formulas: BTreeMap<String, String>,
    pub assumptions: String,
}

/// The root report aggregate. Every nested structure is required; a response
/// missing any of them fails validation — there is no partial acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaJuReport {
    /// Human-readable Markdown rendition (min 2000 chars).
    pub markdown_report: String,
    pub input: InputInfo,
    pub won_guk: WonGuk,
    /// Hidden stems per branch, keyed by branch label.
    pub hidden_stems: BTreeMap<String, Vec<HiddenStem>>,
    pub five_elements: FiveElements,
    /// Ten-god scores keyed by category name.
    pub ten_gods: BTreeMap<String, TenGod>,
    pub special_patterns: Vec<SpecialPattern>,
    pub yong_shin_candidates: Vec<YongShinCandidate>,
    pub character_and_talents: CharacterTalents,
    pub career_scores: Vec<CareerScore>,
    pub calculation_log: CalculationLog,
    /// The same long-form narrative, stored inside the JSON (min 2000 chars).
    pub content: String,
}

/// Validates constraints serde cannot express: the two narrative fields
/// must meet the minimum length.
pub fn validate_report(report: &SaJuReport) -> Result<(), AppError> {
    check_narrative_len("markdown_report", &report.markdown_report)?;
    check_narrative_len("content", &report.content)?;
    Ok(())
}

fn check_narrative_len(field: &str, text: &str) -> Result<(), AppError> {
    let len = text.chars().count();
    if len < MIN_NARRATIVE_CHARS {
        return Err(AppError::SchemaViolation(format!(
            "field '{field}' is {len} characters, minimum is {MIN_NARRATIVE_CHARS}"
        )));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::testing::sample_report;
    use super::*;

    #[test]
    fn test_report_json_round_trip_is_deep_equal() {
        let report = sample_report();
        let json = serde_json::to_string_pretty(&report).unwrap();
        let recovered: SaJuReport = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, report);
    }

    #[test]
    fn test_non_ascii_text_is_not_escaped() {
        let report = sample_report();
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("남성"));
        assert!(json.contains("임"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_validate_accepts_long_narratives() {
        assert!(validate_report(&sample_report()).is_ok());
    }

    #[test]
    fn test_validate_rejects_short_markdown_report() {
        let mut report = sample_report();
        report.markdown_report = "너무 짧은 리포트".to_string();
        let err = validate_report(&report).unwrap_err();
        assert!(matches!(err, AppError::SchemaViolation(_)));
        assert!(err.to_string().contains("markdown_report"));
    }

    #[test]
    fn test_validate_rejects_short_content() {
        let mut report = sample_report();
        report.content = "짧은 해설".to_string();
        let err = validate_report(&report).unwrap_err();
        assert!(matches!(err, AppError::SchemaViolation(_)));
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn test_narrative_minimum_counts_characters_not_bytes() {
        // 2000 Korean characters are ~6000 UTF-8 bytes; the limit is on
        // characters, so exactly 2000 of them must pass.
        let mut report = sample_report();
        report.content = "사".repeat(MIN_NARRATIVE_CHARS);
        assert!(validate_report(&report).is_ok());
        report.content = "사".repeat(MIN_NARRATIVE_CHARS - 1);
        assert!(validate_report(&report).is_err());
    }

    #[test]
    fn test_percentages_are_passed_through_without_renormalization() {
        let mut report = sample_report();
        report.five_elements.wood.percent = 90.0;
        report.five_elements.yin_percent = 80.0;
        report.five_elements.yang_percent = 80.0;
        // Sums well over 100 — accepted as-is.
        assert!(validate_report(&report).is_ok());
    }

    #[test]
    fn test_report_tolerates_unknown_extra_fields() {
        let mut value = serde_json::to_value(sample_report()).unwrap();
        value["model_notes"] = serde_json::json!("extra commentary");
        let parsed: Result<SaJuReport, _> = serde_json::from_value(value);
        assert!(parsed.is_ok());
    }
}
