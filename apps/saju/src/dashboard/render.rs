//! Dashboard HTML — pure renderers for the input form and the six report
//! panels. Charts are proportional CSS bars; a chart whose backing
//! percentage mapping is empty is omitted entirely.

use crate::schema::SaJuReport;

const ELEMENT_COLORS: [&str; 5] = ["#2ecc40", "#ff4136", "#b7950b", "#7f8c8d", "#3498db"];
const TEN_GOD_COLORS: [&str; 10] = [
    "#e67e22", "#9b59b6", "#16a085", "#34495e", "#f1c40f", "#c0392b", "#2980b9", "#27ae60",
    "#d35400", "#7f8c8d",
];
const YIN_YANG_COLORS: [&str; 2] = ["#34495e", "#f1c40f"];

const STYLE: &str = "body{font-family:sans-serif;max-width:860px;margin:2rem auto;padding:0 1rem}\
    section{border:1px solid #ddd;border-radius:6px;padding:1rem;margin-bottom:1rem}\
    h2{margin-top:0;font-size:1.1rem}\
    table{border-collapse:collapse;width:100%}\
    th,td{border:1px solid #ccc;padding:.4rem .8rem;text-align:center}\
    .bar-row{display:flex;align-items:center;margin:.25rem 0}\
    .bar-label{width:8rem}\
    .bar-track{flex:1;background:#f0f0f0;border-radius:3px}\
    .bar{height:1rem;border-radius:3px}\
    .bar-value{width:4.5rem;text-align:right}\
    .narrative{white-space:pre-wrap}\
    form label{display:block;margin:.5rem 0 .2rem}\
    form input,form select{width:100%;padding:.35rem}\
    form button{margin-top:1rem;padding:.5rem 1.5rem}";

/// Escapes text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    )
}

/// The input form shown at `GET /`.
pub fn form_page(today: &str) -> String {
    let body = format!(
        r#"<form method="post" action="/report">
<label for="name">이름</label>
<input id="name" name="name" required>
<label for="country">국가</label>
<input id="country" name="country" value="대한민국" required>
<label for="city">도시</label>
<input id="city" name="city" required>
<label for="birth_date">출생일 (YYYY-MM-DD)</label>
<input id="birth_date" name="birth_date" required>
<label for="birth_time">출생 시간 (HH:MM)</label>
<input id="birth_time" name="birth_time" required>
<label for="gender">성별</label>
<select id="gender" name="gender"><option>남성</option><option>여성</option></select>
<label for="calendar_type">달력 종류</label>
<select id="calendar_type" name="calendar_type"><option>양력</option><option>음력</option></select>
<label for="analysis_date">분석 기준일 (YYYY-MM-DD)</label>
<input id="analysis_date" name="analysis_date" value="{today}">
<button type="submit">분석하기</button>
</form>"#,
        today = escape(today)
    );
    page("사주 명리 분석 리포트", &body)
}

/// One proportional bar chart. Returns an empty string when there is
/// nothing to chart.
fn bar_chart(rows: &[(String, f64)], colors: &[&str]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut html = String::new();
    for (i, (label, percent)) in rows.iter().enumerate() {
        let color = colors[i % colors.len()];
        // Track width is clamped for display only; the printed value is verbatim.
        let width = percent.clamp(0.0, 100.0);
        html.push_str(&format!(
            "<div class=\"bar-row\"><span class=\"bar-label\">{}</span>\
             <span class=\"bar-track\"><span class=\"bar\" \
             style=\"width:{width:.1}%;background:{color};display:block\"></span></span>\
             <span class=\"bar-value\">{percent:.1}%</span></div>\n",
            escape(label)
        ));
    }
    html
}

fn panel(title: &str, body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    format!("<section>\n<h2>{title}</h2>\n{body}</section>\n")
}

/// The full report page: basic info, WonGuk table, three charts, narrative.
pub fn report_page(report: &SaJuReport) -> String {
    let input = &report.input;
    let won_guk = &report.won_guk;

    let basic_info = format!(
        "<p><strong>이름:</strong> {}</p>\n\
         <p><strong>성별:</strong> {}</p>\n\
         <p><strong>출생일시:</strong> {} {} {} ({})</p>\n\
         <p><strong>분석 기준일:</strong> {}</p>\n",
        escape(&input.name),
        escape(input.gender.trim()),
        escape(&input.calendar_type),
        escape(&input.birth_date),
        escape(&input.birth_time),
        escape(&input.birth_place),
        escape(&input.analysis_date),
    );

    let won_guk_table = format!(
        "<table>\n<tr><th>연주</th><th>월주</th><th>일주</th><th>시주</th></tr>\n\
         <tr><td>{} {}</td><td>{} {}</td><td>{} {}</td><td>{} {}</td></tr>\n</table>\n",
        escape(&won_guk.year.stem),
        escape(&won_guk.year.branch),
        escape(&won_guk.month.stem),
        escape(&won_guk.month.branch),
        escape(&won_guk.day.stem),
        escape(&won_guk.day.branch),
        escape(&won_guk.hour.stem),
        escape(&won_guk.hour.branch),
    );

    let fe = &report.five_elements;
    let element_rows: Vec<(String, f64)> = vec![
        ("목".to_string(), fe.wood.percent),
        ("화".to_string(), fe.fire.percent),
        ("토".to_string(), fe.earth.percent),
        ("금".to_string(), fe.metal.percent),
        ("수".to_string(), fe.water.percent),
    ];

    let ten_god_rows: Vec<(String, f64)> = report
        .ten_gods
        .iter()
        .map(|(name, god)| (name.clone(), god.percent))
        .collect();

    let yin_yang_rows: Vec<(String, f64)> = vec![
        ("음".to_string(), fe.yin_percent),
        ("양".to_string(), fe.yang_percent),
    ];

    // pre-wrap so paragraph breaks in the narrative survive; HTML would
    // otherwise collapse the newlines into a single run-on block.
    let content = format!(
        "<div class=\"narrative\">{}</div>\n",
        escape(&report.content)
    );

    let body = [
        panel("1️⃣ 기본 정보", &basic_info),
        panel("2️⃣ 사주 원국", &won_guk_table),
        panel(
            "3️⃣ 오행(五行) 정량·정성 분석",
            &bar_chart(&element_rows, &ELEMENT_COLORS),
        ),
        panel(
            "4️⃣ 일간(일주) 중심 십신(十神) 분석",
            &bar_chart(&ten_god_rows, &TEN_GOD_COLORS),
        ),
        panel("5️⃣ 음/양 비율", &bar_chart(&yin_yang_rows, &YIN_YANG_COLORS)),
        panel("6️⃣ 분석 내용", &content),
    ]
    .concat();

    page("사주 명리 분석 리포트", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::testing::sample_report;

    #[test]
    fn test_escape_neutralizes_html() {
        assert_eq!(
            escape(r#"<script>"&"</script>"#),
            "&lt;script&gt;&quot;&amp;&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_form_page_has_all_input_fields() {
        let html = form_page("2026-08-27");
        for field in [
            "name",
            "country",
            "city",
            "birth_date",
            "birth_time",
            "gender",
            "calendar_type",
            "analysis_date",
        ] {
            assert!(html.contains(&format!("name=\"{field}\"")), "field {field}");
        }
        assert!(html.contains("남성") && html.contains("여성"));
        assert!(html.contains("양력") && html.contains("음력"));
        assert!(html.contains("value=\"2026-08-27\""));
    }

    #[test]
    fn test_report_page_shows_basic_info_and_pillars() {
        let html = report_page(&sample_report());
        assert!(html.contains("Jo Yoseph"));
        assert!(html.contains("<strong>성별:</strong> 남성"));
        assert!(html.contains("<td>임 오</td><td>계 축</td><td>임 진</td><td>계 묘</td>"));
    }

    #[test]
    fn test_report_page_has_all_three_charts() {
        let html = report_page(&sample_report());
        for label in ["목", "화", "토", "금", "수", "음", "양", "비견", "정재", "편인"] {
            assert!(html.contains(&format!("bar-label\">{label}<")), "bar {label}");
        }
        assert!(html.contains("width:50.0%")); // water at 50%
    }

    #[test]
    fn test_empty_ten_gods_omits_the_panel() {
        let mut report = sample_report();
        report.ten_gods.clear();
        let html = report_page(&report);
        assert!(!html.contains("십신"));
        // The other chart panels are unaffected.
        assert!(html.contains("오행"));
        assert!(html.contains("음/양"));
    }

    #[test]
    fn test_report_page_escapes_model_text() {
        let mut report = sample_report();
        report.input.name = "<b>Jo</b>".to_string();
        let html = report_page(&report);
        assert!(html.contains("&lt;b&gt;Jo&lt;/b&gt;"));
        assert!(!html.contains("<b>Jo</b>"));
    }

    #[test]
    fn test_narrative_panel_preserves_line_breaks() {
        let mut report = sample_report();
        report.content = "첫 단락입니다.\n\n둘째 단락입니다.\n- 항목 하나".to_string();
        let html = report_page(&report);
        // Newlines must reach the page verbatim, inside a pre-wrap container.
        assert!(html.contains("첫 단락입니다.\n\n둘째 단락입니다.\n- 항목 하나"));
        assert!(html.contains("<div class=\"narrative\">"));
        assert!(html.contains(".narrative{white-space:pre-wrap}"));
    }

    #[test]
    fn test_bar_widths_clamp_but_values_print_verbatim() {
        let rows = vec![("수".to_string(), 145.0)];
        let html = bar_chart(&rows, &ELEMENT_COLORS);
        assert!(html.contains("width:100.0%"));
        assert!(html.contains("145.0%"));
    }
}
