//! crates/project_guide_core/src/domain.rs
//!
//! Defines the pure, core data structures for the guide: the catalog entry
//! shapes and the conversation message that carries them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Catalog Entry Types
//=========================================================================================

/// The engineering field a project idea belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "IoT")]
    Iot,
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Embedded Systems")]
    EmbeddedSystems,
    #[serde(rename = "Web Development")]
    WebDevelopment,
}

impl Domain {
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Iot => "IoT",
            Domain::AiMl => "AI/ML",
            Domain::EmbeddedSystems => "Embedded Systems",
            Domain::WebDevelopment => "Web Development",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A suggested student project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    pub id: String,
    pub title: String,
    pub domain: Domain,
    pub difficulty: Difficulty,
    pub description: String,
    pub tech_stack: Vec<String>,
    /// Free-text range, e.g. "8-12 weeks".
    pub estimated_time: String,
    pub learning_outcomes: Vec<String>,
}

/// A single technology inside a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechItem {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub documentation_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechRecommendation {
    pub category: String,
    pub items: Vec<TechItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Tutorial,
    Documentation,
    Course,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
    pub difficulty: Difficulty,
}

/// One stage of a project's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentPhase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tasks: Vec<String>,
    pub estimated_time: String,
    pub resources: Vec<LearningResource>,
}

//=========================================================================================
// Conversation Types
//=========================================================================================

/// The category of a message together with the payload that category requires.
///
/// Serialized adjacently as `"category"` and `"payload"`; `Plain` has no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "payload", rename_all = "snake_case")]
pub enum MessageContent {
    Plain,
    Project(ProjectIdea),
    Phase(DevelopmentPhase),
    Tech(TechRecommendation),
    Resource(Vec<LearningResource>),
}

/// The payload-free discriminant of a [`MessageContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Plain,
    Project,
    Phase,
    Tech,
    Resource,
}

impl MessageContent {
    pub fn category(&self) -> Category {
        match self {
            MessageContent::Plain => Category::Plain,
            MessageContent::Project(_) => Category::Project,
            MessageContent::Phase(_) => Category::Phase,
            MessageContent::Tech(_) => Category::Tech,
            MessageContent::Resource(_) => Category::Resource,
        }
    }
}

/// A single entry in the conversation, from either the user or the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub content: MessageContent,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_bot: false,
            timestamp: Utc::now(),
            content: MessageContent::Plain,
        }
    }

    pub fn bot(response: BotResponse) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: response.text,
            is_bot: true,
            timestamp: Utc::now(),
            content: response.content,
        }
    }

    pub fn category(&self) -> Category {
        self.content.category()
    }
}

/// What the dispatcher produces for one user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotResponse {
    pub text: String,
    pub content: MessageContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_serializes_without_payload() {
        let message = Message::user("hello");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["category"], "plain");
        assert_eq!(json["isBot"], false);
        assert!(json.get("payload").is_none());
    }

    #[test]
    fn resource_message_carries_payload_under_category() {
        let message = Message::bot(BotResponse {
            text: "resources".to_string(),
            content: MessageContent::Resource(vec![LearningResource {
                title: "React Documentation".to_string(),
                kind: ResourceKind::Documentation,
                url: "#".to_string(),
                difficulty: Difficulty::Intermediate,
            }]),
        });
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["category"], "resource");
        assert_eq!(json["payload"][0]["type"], "Documentation");
        assert_eq!(message.category(), Category::Resource);
    }

    #[test]
    fn domain_labels_match_serialized_names() {
        for domain in [
            Domain::Iot,
            Domain::AiMl,
            Domain::EmbeddedSystems,
            Domain::WebDevelopment,
        ] {
            let json = serde_json::to_value(domain).unwrap();
            assert_eq!(json, domain.label());
        }
    }
}
