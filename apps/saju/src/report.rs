//! Report formatters — pure functions from a validated `SaJuReport` to the
//! two output renditions, plus the save helpers.
//!
//! The Markdown section layout and field order are part of the external
//! contract: downstream consumers diff and display this text verbatim.

use std::path::Path;

use crate::errors::AppError;
use crate::schema::SaJuReport;

/// Renders the fixed-section Markdown document.
pub fn generate_markdown(report: &SaJuReport) -> String {
    let input = &report.input;
    let won_guk = &report.won_guk;

    format!(
        "# {name}님의 사주 명리 분석 리포트\n\
         \n\
         ## 1️⃣ 기본 정보\n\
         - 이름: {name}\n\
         - 성별: {gender}\n\
         - 출생일시: {calendar_type} {birth_date} {birth_time} ({birth_place})\n\
         - 분석 기준일: {analysis_date}\n\
         \n\
         ## 2️⃣ 사주 원국\n\
         - 연주: {year_stem} {year_branch}\n\
         - 월주: {month_stem} {month_branch}\n\
         - 일주: {day_stem} {day_branch}\n\
         - 시주: {hour_stem} {hour_branch}\n\
         \n\
         ## 3️⃣ 분석 내용\n\
         {content}\n\
         \n\
         ---\n",
        name = input.name,
        gender = input.gender.trim(),
        calendar_type = input.calendar_type,
        birth_date = input.birth_date,
        birth_time = input.birth_time,
        birth_place = input.birth_place,
        analysis_date = input.analysis_date,
        year_stem = won_guk.year.stem,
        year_branch = won_guk.year.branch,
        month_stem = won_guk.month.stem,
        month_branch = won_guk.month.branch,
        day_stem = won_guk.day.stem,
        day_branch = won_guk.day.branch,
        hour_stem = won_guk.hour.stem,
        hour_branch = won_guk.hour.branch,
        content = report.content,
    )
}

/// Serializes the full report as pretty-printed JSON. Key order follows the
/// schema declaration; non-ASCII text stays unescaped.
pub fn to_json_pretty(report: &SaJuReport) -> Result<String, AppError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize report: {e}")))
}

pub fn save_markdown(markdown: &str, path: impl AsRef<Path>) -> Result<(), AppError> {
    let path = path.as_ref();
    std::fs::write(path, markdown).map_err(|source| AppError::Persistence {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_json(report: &SaJuReport, path: impl AsRef<Path>) -> Result<(), AppError> {
    let path = path.as_ref();
    let json = to_json_pretty(report)?;
    std::fs::write(path, json).map_err(|source| AppError::Persistence {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::testing::sample_report;
    use crate::schema::SaJuReport;

    #[test]
    fn test_markdown_header_is_name_title() {
        let md = generate_markdown(&sample_report());
        assert_eq!(
            md.lines().next().unwrap(),
            "# Jo Yoseph님의 사주 명리 분석 리포트"
        );
    }

    #[test]
    fn test_markdown_contains_basic_info_fields() {
        let report = sample_report();
        let md = generate_markdown(&report);
        assert!(md.contains("- 이름: Jo Yoseph"));
        assert!(md.contains("- 성별: 남성"));
        assert!(md.contains("- 출생일시: 양력 2003-01-24 06:20 (South Korea Jeonju)"));
        assert!(md.contains("- 분석 기준일: 2026-08-27"));
    }

    #[test]
    fn test_markdown_gender_is_trimmed() {
        let mut report = sample_report();
        report.input.gender = " 여성 ".to_string();
        let md = generate_markdown(&report);
        assert!(md.contains("- 성별: 여성\n"));
    }

    #[test]
    fn test_markdown_pillars_in_year_month_day_hour_order() {
        let md = generate_markdown(&sample_report());
        let year = md.find("- 연주: 임 오").unwrap();
        let month = md.find("- 월주: 계 축").unwrap();
        let day = md.find("- 일주: 임 진").unwrap();
        let hour = md.find("- 시주: 계 묘").unwrap();
        assert!(year < month && month < day && day < hour);
    }

    #[test]
    fn test_markdown_includes_content_section() {
        let report = sample_report();
        let md = generate_markdown(&report);
        assert!(md.contains("## 3️⃣ 분석 내용"));
        assert!(md.contains(&report.content));
        assert!(md.trim_end().ends_with("---"));
    }

    #[test]
    fn test_json_top_level_key_order_matches_schema() {
        let json = to_json_pretty(&sample_report()).unwrap();
        let keys = [
            "\"markdown_report\"",
            "\"input\"",
            "\"won_guk\"",
            "\"hidden_stems\"",
            "\"five_elements\"",
            "\"ten_gods\"",
            "\"special_patterns\"",
            "\"yong_shin_candidates\"",
            "\"character_and_talents\"",
            "\"career_scores\"",
            "\"calculation_log\"",
            "\"content\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_json_re_encodes_byte_identically() {
        let json = to_json_pretty(&sample_report()).unwrap();
        let decoded: SaJuReport = serde_json::from_str(&json).unwrap();
        assert_eq!(to_json_pretty(&decoded).unwrap(), json);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();
        let md = generate_markdown(&report);

        let md_path = dir.path().join("report.md");
        let json_path = dir.path().join("report.json");
        save_markdown(&md, &md_path).unwrap();
        save_json(&report, &json_path).unwrap();

        assert_eq!(std::fs::read_to_string(&md_path).unwrap(), md);
        assert_eq!(
            std::fs::read_to_string(&json_path).unwrap(),
            to_json_pretty(&report).unwrap()
        );
    }

    #[test]
    fn test_save_to_missing_directory_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("report.md");
        let err = save_markdown("내용", &path).unwrap_err();
        assert!(matches!(err, AppError::Persistence { .. }));
    }
}
