//! Descriptive tag derivation. Presence of any trigger substring includes
//! the tag; no weighting. Tags come out in table declaration order, at most
//! four.

const MAX_TAGS: usize = 4;

const TAG_RULES: &[(&str, &[&str])] = &[
    ("한국사", &["조선", "고려", "임진왜란", "이순신", "안중근", "세종", "독립운동"]),
    ("세계사", &["로마", "몽골", "청나라", "금나라", "메이지유신", "진주만", "마오쩌둥"]),
    ("전쟁", &["전쟁", "전투", "공습", "해전", "항복"]),
    ("인물", &["이순신", "안중근", "최배달", "마오쩌둥", "푸이", "콤모두스", "오노다"]),
    ("음식", &["소주", "돈가스", "음식"]),
    ("동물", &["고양이", "강아지"]),
    ("건강", &["건강", "운동", "근육", "장수", "병원"]),
    ("자기계발", &["성공", "습관", "자기계발", "동기부여"]),
    ("독서", &["책 읽", "독서"]),
    ("재테크", &["부자", "돈이 따라"]),
    ("흥미", &["이유", "원리", "유령정체", "고속도로", "비밀", "신기한"]),
    ("과학", &["인간", "지배", "전염병"]),
];

/// Deterministic tag derivation from the combined title + body text.
pub fn tag(title: &str, body: &str) -> Vec<String> {
    let text = format!("{title} {body}").to_lowercase();
    let mut tags = Vec::new();

    for (name, triggers) in TAG_RULES {
        if triggers.iter().any(|kw| text.contains(kw)) {
            tags.push((*name).to_string());
            if tags.len() == MAX_TAGS {
                break;
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_come_in_declaration_order() {
        let tags = tag("고양이와 강아지", "건강을 위한 독서 습관 이야기");
        assert_eq!(tags, vec!["동물", "건강", "자기계발", "독서"]);
    }

    #[test]
    fn truncated_to_four_in_order() {
        // Triggers for five tags; only the first four by declaration order
        // survive.
        let tags = tag("조선의 전쟁", "고양이와 건강과 성공 이야기");
        assert_eq!(tags, vec!["한국사", "전쟁", "동물", "건강"]);
    }

    #[test]
    fn no_triggers_no_tags() {
        assert!(tag("하늘", "오늘따라 파랗다").is_empty());
    }

    #[test]
    fn no_duplicates_and_deterministic() {
        let first = tag("이순신 장군", "이순신의 해전과 전쟁");
        assert_eq!(first, tag("이순신 장군", "이순신의 해전과 전쟁"));
        let mut deduped = first.clone();
        deduped.dedup();
        assert_eq!(first, deduped);
        assert_eq!(first, vec!["한국사", "전쟁", "인물"]);
    }
}
