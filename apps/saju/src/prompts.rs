// Prompt fragments bound into the template at chain construction.
// The format instructions mirror `schema::SaJuReport` field-for-field; if the
// schema changes, this block must change with it.

/// Format instructions appended to every prompt via the
/// `{format_instructions}` placeholder — enforces JSON-only output in the
/// exact report schema.
pub const FORMAT_INSTRUCTIONS: &str = r#"출력은 아래 스키마를 따르는 JSON 객체 하나여야 합니다.
JSON 객체 외의 텍스트를 포함하지 마세요.
마크다운 코드 펜스를 사용하지 마세요.
설명이나 사과문을 덧붙이지 마세요.

스키마 (필드 순서와 이름을 정확히 지킬 것, 누락 금지):
{
  "markdown_report": "사람이 읽을 수 있는 Markdown 리포트 (2000자 이상)",
  "input": {
    "name": "이름",
    "birth_date": "출생일, YYYY-MM-DD",
    "birth_time": "출생 시간, HH:MM",
    "timezone": "출생 시간대, 예: Asia/Seoul",
    "birth_place": "출생지",
    "gender": "성별",
    "calendar_type": "달력 종류, 양력 또는 음력",
    "analysis_date": "분석 기준 날짜, YYYY-MM-DD"
  },
  "won_guk": {
    "year": {"stem": "천간", "branch": "지지"},
    "month": {"stem": "천간", "branch": "지지"},
    "day": {"stem": "천간", "branch": "지지"},
    "hour": {"stem": "천간", "branch": "지지"}
  },
  "hidden_stems": {
    "지지 이름": [{"stem": "숨은 천간", "weight": 0.5}]
  },
  "five_elements": {
    "wood": {"raw": 0.0, "percent": 0.0},
    "fire": {"raw": 0.0, "percent": 0.0},
    "earth": {"raw": 0.0, "percent": 0.0},
    "metal": {"raw": 0.0, "percent": 0.0},
    "water": {"raw": 0.0, "percent": 0.0},
    "yin_percent": 0.0,
    "yang_percent": 0.0,
    "balance_index": 0.0,
    "dominant": {"element": "과다한 오행", "percent": 0.0},
    "deficient": {"element": "부족한 오행", "percent": 0.0}
  },
  "ten_gods": {
    "십신 이름": {"raw": 0, "weighted": 0.0, "percent": 0.0}
  },
  "special_patterns": [
    {"pattern": "특수 패턴", "branches": ["해당 지지"], "meaning": "의미"}
  ],
  "yong_shin_candidates": [
    {"element": "용신 후보 오행", "score": 0.0, "reason": "선정 이유"}
  ],
  "character_and_talents": {"summary": "성격 및 재능 요약", "evidence": ["근거"]},
  "career_scores": [
    {"career_group": "직업군", "score": 0.0}
  ],
  "calculation_log": {
    "weights": {"가중치 이름": 0.0},
    "formulas": {"공식 이름": "공식"},
    "assumptions": "계산에 사용된 가정"
  },
  "content": "JSON 내부에 저장되는 동일한 2000자 이상 서술형 해설"
}"#;
