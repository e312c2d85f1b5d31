//! Test fixtures - lesson logs and attendance exports.

/// Four lessons on 2025-04-18:
/// 1. 13:00~13:40 (40) clean
/// 2. 13:40~14:10 (30) too short, short pair with #1, overlaps the 14:00 duty block
/// 3. 15:00~15:40 (40) clean
/// 4. no fullDate, 20 min: duration issue only
pub const LESSONS_WITH_VIOLATIONS: &str = r#"{
  "lessons": [
    {"date": "4. 18. (금)", "startTime": "13:00", "endTime": "13:40", "duration": 40, "fullDate": "2025-04-18"},
    {"date": "4. 18. (금)", "startTime": "13:40", "endTime": "14:10", "duration": 30, "fullDate": "2025-04-18"},
    {"date": "4. 18. (금)", "startTime": "15:00", "endTime": "15:40", "duration": 40, "fullDate": "2025-04-18"},
    {"date": "4. 19. (토)", "startTime": "10:00", "endTime": "10:20", "duration": 20, "fullDate": null}
  ]
}"#;

/// Two compliant lessons
pub const CLEAN_LESSONS: &str = r#"[
  {"date": "4. 21. (월)", "startTime": "13:40", "endTime": "14:20", "duration": 40, "fullDate": "2025-04-21"},
  {"date": "4. 21. (월)", "startTime": "14:20", "endTime": "15:00", "duration": 40, "fullDate": "2025-04-21"}
]"#;

/// Chat-completion reply wrapping the extraction object in prose
pub const CHAT_REPLY: &str = "Here is the extracted data:\n```json\n{\"lessons\": [{\"date\": \"4. 21. (월)\", \"startTime\": \"9:00\", \"endTime\": \"9:30\", \"duration\": 30, \"fullDate\": \"2025-04-21\"}]}\n```\nLet me know if you need anything else.";

/// Work-status export as JSON rows: one approved, one cancelled, one pending
pub const DUTY_ROWS_JSON: &str = r#"[
  ["부서", "성명", "근무상황", "기간", "일수", "사유", "목적지", "구분", "신청자", "결재상태"],
  ["교무실", "홍길동", "외출", "2025-04-18 14:00 ~ 2025-04-18 15:00", 0.1, "병원", null, null, "홍길동", "완결"],
  ["교무실", "홍길동", "연가", "2025-04-18 15:00 ~ 2025-04-18 17:00", 0.2, "개인", null, null, "홍길동", "기결취소(완결)"],
  ["교무실", "홍길동", "조퇴", "2025-04-18 15:10 ~ 2025-04-18 16:00", 0.1, "개인", null, null, "홍길동", "진행중"]
]"#;

/// Business-trip export as TSV; the trip ends as lesson #3 starts
pub const TRIP_ROWS_TSV: &str = "번호\t부서\t성명\t구분\t출장지\t목적\t교통\t기간\t일수\t결재상태\t비고\t여비\n\
1\t교무실\t홍길동\t관내\t교육청\t연수\t자가용\t2025.04.18 14:30 ~ 2025.04.18 15:00\t1\t완결\t\t0\n";

/// Binary fixture under `tests/fixtures/`
pub fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
