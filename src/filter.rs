//! Two-stage quality gate. Rejection here is a deliberate editorial
//! decision, not an error; callers log at info level and move on.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Disallowed topic clusters: politics, adult content, advertising and
/// solicitation, contact harvesting, religious/fortune-telling solicitation,
/// financial hype, hate speech, and miracle-cure claims. A single substring
/// hit anywhere in title or body rejects the item.
pub const FILTER_KEYWORDS: &[&str] = &[
    "정치", "대통령", "여당", "야당", "투표", "선거", "국회",
    "19금", "성인", "야한", "섹스", "성폭행", "성추행",
    "광고", "홍보", "무료상담", "상담문의", "판매", "할인", "대리점", "보험료",
    "카톡", "오픈채팅", "텔레그램", "문의는", "연락주세요",
    "하나님", "예수님", "부처님", "사주", "타로",
    "투자", "코인", "주식", "대박", "수익률",
    "욕설", "비하", "혐오",
    "항암", "기적의", "완치", "만병통치",
];

/// Placeholder, incomplete, or boilerplate text shapes that mark a post as
/// not worth surfacing.
static LOW_QUALITY_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)테스트",
        r"(?i)test",
        r"포스팅$",
        r"첨부파일",
        r"첨부된 파일",
        r"(?i)click.*download",
        r"(?i)\bexercise\b",
        r"(?i)\bplank\b",
        r"(?i)\bbridge\b",
        r"(?i)stamp",
        r"(?i)galaxy",
        r"포켓몬",
        r"작성 예정",
        r"준비 중입니다",
        r"(?i)알아보겠습니다\.?$",
        r"(?i)정리해봤습니다\.?$",
    ])
    .expect("valid regex set")
});

/// Minimum body length for a persisted item, in characters after cleaning.
pub const MIN_BODY_LENGTH: usize = 150;

/// Minimum fraction of Hangul characters in the body.
const MIN_HANGUL_RATIO: f64 = 0.3;

/// Case-insensitive denylist substring match against a single text field.
pub fn is_denylisted(text: &str) -> bool {
    let lower = text.to_lowercase();
    FILTER_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Structural low-quality heuristics over the (title, body) pair.
pub fn is_low_quality(title: &str, body: &str) -> bool {
    let combined = format!("{title} {body}");
    if LOW_QUALITY_PATTERNS.is_match(&combined) {
        return true;
    }
    let total = body.chars().count();
    if total < MIN_BODY_LENGTH {
        return true;
    }
    let hangul = body.chars().filter(|c| ('가'..='힣').contains(c)).count();
    (hangul as f64) < (total as f64) * MIN_HANGUL_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hangul_filler(len: usize) -> String {
        "건강한 하루를 보내는 사람들의 소소한 이야기와 기록 "
            .chars()
            .cycle()
            .take(len)
            .collect()
    }

    #[test]
    fn denylist_hits_regardless_of_position() {
        assert!(is_denylisted("오늘의 주식 전망"));
        assert!(is_denylisted("긴 본문 속에 숨어있는 광고 문구"));
        assert!(!is_denylisted("고양이가 좋아하는 상자 이야기"));
    }

    #[test]
    fn short_body_is_low_quality_even_if_all_hangul() {
        // 120 chars, pure target script: length alone must reject it.
        let body = hangul_filler(120);
        assert_eq!(body.chars().count(), 120);
        assert!(is_low_quality("제목", &body));
    }

    #[test]
    fn long_hangul_body_passes() {
        let body = hangul_filler(200);
        assert!(!is_low_quality("제목", &body));
    }

    #[test]
    fn low_hangul_ratio_is_rejected() {
        let body = "a".repeat(200);
        assert!(is_low_quality("제목", &body));
    }

    #[test]
    fn boilerplate_endings_are_rejected() {
        let body = format!("{}에 대해 알아보겠습니다", hangul_filler(180));
        assert!(is_low_quality("제목", &body));
        let body = format!("{}내용은 작성 예정{}", hangul_filler(90), hangul_filler(90));
        assert!(is_low_quality("제목", &body));
    }

    #[test]
    fn boilerplate_in_title_rejects_too() {
        assert!(is_low_quality("갤럭시 Galaxy 신제품", &hangul_filler(200)));
    }
}
