//! Static source registry. The pipeline only reads this; which feeds exist
//! is decided outside the pipeline.

use crate::types::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// RSS/Atom feed, fetched directly.
    Feed,
    /// HTML list page behind a members-only login. Recognized but disabled
    /// until authenticated access is available; always yields zero items.
    PageList,
}

/// Selectors for the `PageList` kind. Unused while that kind is disabled.
#[derive(Debug, Clone, Copy)]
pub struct PageSelectors {
    pub item: &'static str,
    pub link: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SourceDescriptor {
    pub id: &'static str,
    pub kind: SourceKind,
    pub name: &'static str,
    /// Fallback topic when keyword scoring is inconclusive.
    pub topic: Topic,
    pub list_url: &'static str,
    pub selectors: Option<PageSelectors>,
}

pub const SOURCES: &[SourceDescriptor] = &[
    SourceDescriptor {
        id: "tistory-dailyhumor",
        kind: SourceKind::Feed,
        name: "하루치 유머 블로그",
        topic: Topic::Humor,
        list_url: "https://dailyhumor.tistory.com/rss",
        selectors: None,
    },
    SourceDescriptor {
        id: "tistory-healthinfo",
        kind: SourceKind::Feed,
        name: "역사이야기 블로그",
        topic: Topic::History,
        list_url: "https://healthinfo.tistory.com/rss",
        selectors: None,
    },
    SourceDescriptor {
        id: "tistory-healthtip",
        kind: SourceKind::Feed,
        name: "건강팁 블로그",
        topic: Topic::Health,
        list_url: "https://healthtip.tistory.com/rss",
        selectors: None,
    },
    SourceDescriptor {
        id: "tistory-dailyhealth",
        kind: SourceKind::Feed,
        name: "매일건강 블로그",
        topic: Topic::Health,
        list_url: "https://dailyhealth.tistory.com/rss",
        selectors: None,
    },
    SourceDescriptor {
        id: "tistory-lifewisdom",
        kind: SourceKind::Feed,
        name: "인생지혜 블로그",
        topic: Topic::Wisdom,
        list_url: "https://lifewisdom.tistory.com/rss",
        selectors: None,
    },
    // Members-only cafe board; re-enable once login support lands.
    SourceDescriptor {
        id: "daum-hwamok-good",
        kind: SourceKind::PageList,
        name: "다음카페 화목한 친구들 · 감동♡좋은글",
        topic: Topic::Wisdom,
        list_url: "https://m.cafe.daum.net/gwangnaru77/EYIU",
        selectors: Some(PageSelectors {
            item: "#slideArticleList > ul > li",
            link: "a.link_cafe.make-list-uri, a.link_cafe",
            title: "h3.tit_subject, h3, .tit_view, h1",
            body: "#user_contents, #article",
        }),
    },
];
