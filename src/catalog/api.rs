// src/catalog/api.rs
// =============================================================================
// The content API the app talks to.
//
// There is no real backend yet, so `MockCatalog` answers every call from
// memory: a fixed list of authors and topics plus whatever content it was
// seeded with. The trait is async so a networked implementation can slot in
// without changing callers.
// =============================================================================

use async_trait::async_trait;

use super::types::{Author, Content, ContentType, SearchParams, Topic};

#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn get_authors(&self) -> Vec<Author>;
    async fn get_topics(&self) -> Vec<Topic>;
    async fn search_content(&self, params: &SearchParams) -> Vec<Content>;

    async fn get_articles(&self) -> Vec<Content> {
        self.search_content(&SearchParams {
            content_type: Some(ContentType::Article),
            ..SearchParams::default()
        })
        .await
    }

    async fn get_videos(&self) -> Vec<Content> {
        self.search_content(&SearchParams {
            content_type: Some(ContentType::Video),
            ..SearchParams::default()
        })
        .await
    }

    async fn get_audio(&self) -> Vec<Content> {
        self.search_content(&SearchParams {
            content_type: Some(ContentType::Audio),
            ..SearchParams::default()
        })
        .await
    }
}

#[derive(Debug, Clone)]
pub struct MockCatalog {
    authors: Vec<Author>,
    topics: Vec<Topic>,
    content: Vec<Content>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self {
            authors: vec![
                Author::new("1", "Rabbi Sample Author 1"),
                Author::new("2", "Rabbi Sample Author 2"),
                Author::new("3", "Rabbi Sample Author 3"),
            ],
            topics: vec![
                Topic::new("1", "Parsha"),
                Topic::new("2", "Jewish Law"),
                Topic::new("3", "Philosophy"),
                Topic::new("4", "Holidays"),
            ],
            content: Vec::new(),
        }
    }
}

impl MockCatalog {
    pub fn with_content(mut self, content: Vec<Content>) -> Self {
        self.content = content;
        self
    }
}

#[async_trait]
impl ContentApi for MockCatalog {
    async fn get_authors(&self) -> Vec<Author> {
        self.authors.clone()
    }

    async fn get_topics(&self) -> Vec<Topic> {
        self.topics.clone()
    }

    async fn search_content(&self, params: &SearchParams) -> Vec<Content> {
        let results: Vec<Content> = self
            .content
            .iter()
            .filter(|item| matches(item, params))
            .cloned()
            .collect();

        tracing::debug!(?params, results = results.len(), "Searched mock catalog");
        results
    }
}

fn matches(item: &Content, params: &SearchParams) -> bool {
    let info = item.info();

    if let Some(kind) = params.content_type {
        if item.content_type() != kind {
            return false;
        }
    }

    if let Some(author_id) = &params.author_id {
        if &info.author.id != author_id {
            return false;
        }
    }

    if let Some(topic_id) = &params.topic_id {
        if !info.topics.iter().any(|t| &t.id == topic_id) {
            return false;
        }
    }

    match params.query.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(query) => {
            let query = query.to_lowercase();
            let contains = |text: &str| text.to_lowercase().contains(&query);
            contains(&info.title) || item.summary().is_some_and(contains)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::ContentInfo;

    fn info(id: &str, title: &str, author: &str, topics: &[&str]) -> ContentInfo {
        ContentInfo {
            id: id.to_string(),
            title: title.to_string(),
            author: Author::new(author, "Someone"),
            topics: topics.iter().map(|t| Topic::new(t, "topic")).collect(),
            published_date: "2024-01-01".to_string(),
        }
    }

    fn seeded() -> MockCatalog {
        MockCatalog::default().with_content(vec![
            Content::Article {
                info: info("a1", "Shabbos and Rest", "1", &["2"]),
                content: "Full text".to_string(),
                excerpt: Some("On the meaning of rest".to_string()),
                url: None,
            },
            Content::Video {
                info: info("v1", "Parsha Bereishis", "2", &["1"]),
                video_url: "https://example.org/v1.mp4".to_string(),
                thumbnail_url: None,
                duration: Some(600),
                description: None,
            },
            Content::Audio {
                info: info("au1", "Pesach Shiur", "1", &["4"]),
                audio_url: "https://example.org/au1.mp3".to_string(),
                duration: None,
                description: Some("Laws of the seder and rest".to_string()),
            },
        ])
    }

    fn ids(items: &[Content]) -> Vec<&str> {
        items.iter().map(|c| c.info().id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_default_authors_and_topics() {
        let catalog = MockCatalog::default();
        assert_eq!(catalog.get_authors().await.len(), 3);
        let topics = catalog.get_topics().await;
        assert_eq!(topics.len(), 4);
        assert_eq!(topics[0].name, "Parsha");
    }

    #[tokio::test]
    async fn test_empty_search_returns_everything() {
        let results = seeded().search_content(&SearchParams::default()).await;
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_query_matches_title_and_summary_case_insensitive() {
        let params = SearchParams {
            query: Some("REST".to_string()),
            ..SearchParams::default()
        };
        let results = seeded().search_content(&params).await;
        assert_eq!(ids(&results), vec!["a1", "au1"]);
    }

    #[tokio::test]
    async fn test_filters_combine() {
        let params = SearchParams {
            query: Some("rest".to_string()),
            author_id: Some("1".to_string()),
            content_type: Some(ContentType::Audio),
            ..SearchParams::default()
        };
        let results = seeded().search_content(&params).await;
        assert_eq!(ids(&results), vec!["au1"]);

        let params = SearchParams {
            topic_id: Some("1".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(ids(&seeded().search_content(&params).await), vec!["v1"]);
    }

    #[tokio::test]
    async fn test_per_type_listings() {
        let catalog = seeded();
        assert_eq!(ids(&catalog.get_articles().await), vec!["a1"]);
        assert_eq!(ids(&catalog.get_videos().await), vec!["v1"]);
        assert_eq!(ids(&catalog.get_audio().await), vec!["au1"]);
    }
}
