use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;

use crate::ArthaVivekError;

/// Life stage of the person asking, used only to tune the instruction text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Student,
    Professional,
}

impl Persona {
    pub const ALL: [Persona; 2] = [Persona::Student, Persona::Professional];

    /// Bilingual label shown to users and embedded in the instruction
    pub const fn label(self) -> &'static str {
        match self {
            Persona::Student => "Student (विद्यार्थी)",
            Persona::Professional => "Early-Career Professional (युवा पेशेवर)",
        }
    }

    /// Short machine name (`student`, `professional`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Persona::Student => "student",
            Persona::Professional => "professional",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Persona {
    type Err = ArthaVivekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "Student (विद्यार्थी)" -> "student"
        let head = s.split('(').next().unwrap_or_default().trim().to_lowercase();
        match head.as_str() {
            "student" => Ok(Persona::Student),
            "professional" | "early-career professional" | "early career professional" => {
                Ok(Persona::Professional)
            }
            _ => Err(ArthaVivekError::InvalidPersona(s.to_string())),
        }
    }
}

/// A curated knowledge passage as stored in the knowledge base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub topic: String,
    pub content: String,
    pub related_videos: Vec<String>,
    pub related_blogs: Vec<String>,
}

impl KnowledgeDocument {
    pub fn new<S: AsRef<str>>(
        topic: impl Into<String>,
        content: impl Into<String>,
        related_videos: &[S],
        related_blogs: &[S],
    ) -> Self {
        Self {
            topic: topic.into(),
            content: content.into(),
            related_videos: related_videos.iter().map(|s| s.as_ref().to_string()).collect(),
            related_blogs: related_blogs.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Trim link URLs and drop blank ones
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.related_videos = clean_links(self.related_videos);
        self.related_blogs = clean_links(self.related_blogs);
        self
    }
}

fn clean_links(links: Vec<String>) -> Vec<String> {
    links
        .into_iter()
        .map(|link| link.trim().to_string())
        .filter(|link| !link.is_empty())
        .collect()
}

/// A document paired with the relevance score the store assigned for one query
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub document: KnowledgeDocument,
    pub relevance_score: f32,
}

impl ScoredDocument {
    pub fn new(document: KnowledgeDocument, relevance_score: f32) -> Self {
        Self {
            document,
            relevance_score,
        }
    }
}

/// A summarised news/policy article for the knowledge hub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UpdateArticle {
    pub title: String,
    pub source: String,
    pub date_published: DateTime<Utc>,
    pub summary: String,
    pub original_link: String,
}

/// One record of the ingestion input format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestRecord {
    /// Unique key; records whose topic already exists are skipped
    pub topic: String,
    /// Ready-made summary. Takes precedence over `source_text`.
    #[serde(default)]
    pub content: Option<String>,
    /// Raw article text to be summarised before storing
    #[serde(default)]
    pub source_text: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub personas: Vec<String>,
    #[serde(default)]
    pub related_videos: Vec<String>,
    #[serde(default)]
    pub related_blogs: Vec<String>,
}

/// A fully prepared document ready to be written to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewKnowledgeDocument {
    pub topic: String,
    pub content: String,
    pub tags: Vec<String>,
    pub personas: Vec<String>,
    pub related_videos: Vec<String>,
    pub related_blogs: Vec<String>,
}

impl NewKnowledgeDocument {
    /// Combine a record's metadata with its final content
    pub fn from_record(record: IngestRecord, content: String) -> Self {
        Self {
            topic: record.topic,
            content,
            tags: record.tags,
            personas: record.personas,
            related_videos: clean_links(record.related_videos),
            related_blogs: clean_links(record.related_blogs),
        }
    }

    /// The retrievable view of this document
    pub fn as_knowledge(&self) -> KnowledgeDocument {
        KnowledgeDocument {
            topic: self.topic.clone(),
            content: self.content.clone(),
            related_videos: self.related_videos.clone(),
            related_blogs: self.related_blogs.clone(),
        }
    }
}
