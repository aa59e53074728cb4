// src/catalog/types.rs
// =============================================================================
// The content model the mobile app browses: authors, topics, and three
// kinds of content.
//
// `Content` is an enum tagged with a "type" field, so JSON looks like
//   { "type": "video", "id": "7", "title": "...", "videoUrl": "...", ... }
// and the kind of a piece of content is decided once, when it is parsed,
// instead of by checking which fields happen to be present.
// =============================================================================

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Author {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            bio: None,
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Topic {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Video,
    Audio,
}

/// Fields every kind of content has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    pub id: String,
    pub title: String,
    pub author: Author,
    #[serde(default)]
    pub topics: Vec<Topic>,
    pub published_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Article {
        #[serde(flatten)]
        info: ContentInfo,
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        excerpt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Video {
        #[serde(flatten)]
        info: ContentInfo,
        #[serde(rename = "videoUrl")]
        video_url: String,
        #[serde(default, rename = "thumbnailUrl", skip_serializing_if = "Option::is_none")]
        thumbnail_url: Option<String>,
        /// Length in seconds
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Audio {
        #[serde(flatten)]
        info: ContentInfo,
        #[serde(rename = "audioUrl")]
        audio_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl Content {
    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Article { .. } => ContentType::Article,
            Content::Video { .. } => ContentType::Video,
            Content::Audio { .. } => ContentType::Audio,
        }
    }

    pub fn info(&self) -> &ContentInfo {
        match self {
            Content::Article { info, .. } | Content::Video { info, .. } | Content::Audio { info, .. } => {
                info
            }
        }
    }

    /// The short text shown under the title: an article's excerpt, or the
    /// description of a video or audio item.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Content::Article { excerpt, .. } => excerpt.as_deref(),
            Content::Video { description, .. } | Content::Audio { description, .. } => {
                description.as_deref()
            }
        }
    }
}

/// Filters for `ContentApi::search_content`. Every filter that is set must
/// match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
}
