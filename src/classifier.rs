//! Weighted keyword topic scoring.
//!
//! Each topic carries a fixed (keyword, weight) table. Keywords found in the
//! title score double weight; a maximum score below [`SCORE_THRESHOLD`]
//! falls back to the source's declared topic. Ties resolve to the earlier
//! entry in [`CATEGORY_RULES`] — a fixed priority order (history, health,
//! humor, wisdom), not incidental map iteration.

use crate::types::Topic;

type WeightedKeywords = &'static [(&'static str, u32)];

const HISTORY_RULES: WeightedKeywords = &[
    // Eras and dynasties (strong signal)
    ("조선시대", 5), ("고려시대", 5), ("삼국시대", 5), ("임진왜란", 5),
    ("청나라", 4), ("금나라", 4), ("몽골제국", 4), ("로마제국", 4),
    ("메이지유신", 4), ("문화혁명", 4),
    // Historical figures (strong signal)
    ("이순신", 5), ("안중근", 5), ("세종대왕", 5), ("마오쩌둥", 4),
    ("푸이", 4), ("최배달", 3), ("콤모두스", 4),
    // General history (medium signal)
    ("왕조", 3), ("황제", 3), ("왕국", 3), ("제국", 3),
    ("전쟁사", 3), ("해전", 3), ("공습", 3),
    ("멸망", 3), ("독립운동", 4), ("의병", 3),
    ("식민지", 3), ("개항기", 3), ("발전사", 3), ("기원", 3),
    // Weak signal
    ("역사", 2), ("조선", 2), ("고려", 2),
];

const HEALTH_RULES: WeightedKeywords = &[
    ("건강", 3), ("운동", 2), ("스트레칭", 4), ("혈압", 4), ("당뇨", 4),
    ("혈액순환", 4), ("면역력", 4), ("수면", 3), ("근육", 3),
    ("다이어트", 3), ("영양소", 3), ("비타민", 3), ("칼로리", 3),
    ("병원", 2), ("장수", 3), ("식습관", 3), ("체중", 3),
];

const HUMOR_RULES: WeightedKeywords = &[
    // Laughs
    ("유머", 5), ("웃긴", 4), ("재미있", 3), ("개그", 5), ("농담", 4),
    ("코미디", 4), ("웃음", 3), ("빵터", 5), ("웃겨", 4),
    ("ㅋㅋ", 3), ("ㅎㅎ", 2),
    // Curiosities and trivia also land here
    ("유령정체", 5), ("막히는 이유", 4), ("알고보니", 3), ("반전", 3),
    ("비밀", 3), ("이유는", 3), ("몰랐던", 3), ("사실", 2),
    ("고양이", 3), ("동물", 2), ("체스", 3), ("운하", 3),
    ("신기한", 3), ("놀라운", 3),
];

const WISDOM_RULES: WeightedKeywords = &[
    ("인생", 2), ("성공", 2), ("습관", 2), ("명언", 4), ("격언", 4),
    ("자기계발", 4), ("동기부여", 4), ("목표", 2),
    ("행복", 3), ("감사", 3), ("긍정", 3), ("마음가짐", 4),
    ("부자가 되", 3), ("말버릇", 3), ("복수하는 방법", 3),
    ("책 읽", 3), ("독서법", 4), ("지혜", 3),
];

/// Declaration order doubles as the tie-break priority.
const CATEGORY_RULES: &[(Topic, WeightedKeywords)] = &[
    (Topic::History, HISTORY_RULES),
    (Topic::Health, HEALTH_RULES),
    (Topic::Humor, HUMOR_RULES),
    (Topic::Wisdom, WISDOM_RULES),
];

/// Below this maximum score the declared source topic wins.
const SCORE_THRESHOLD: u32 = 3;

/// Deterministic topic assignment from `(title, body, declared)`.
pub fn classify(title: &str, body: &str, declared: Topic) -> Topic {
    let title_lower = title.to_lowercase();
    let combined_lower = format!("{title} {body}").to_lowercase();

    let mut best_topic = declared;
    let mut best_score = 0u32;

    for (topic, rules) in CATEGORY_RULES {
        let mut score = 0u32;
        for (keyword, weight) in rules.iter() {
            if title_lower.contains(keyword) {
                score += weight * 2;
            } else if combined_lower.contains(keyword) {
                score += weight;
            }
        }
        if score > best_score {
            best_score = score;
            best_topic = *topic;
        }
    }

    if best_score < SCORE_THRESHOLD {
        declared
    } else {
        best_topic
    }
}
