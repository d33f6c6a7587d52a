//! crates/project_guide_core/src/dispatcher.rs
//!
//! Keyword classification of user input. Matching is plain, case-insensitive
//! substring containment checked in a fixed priority order, so words that merely
//! contain a keyword ("steps", "technologies") match too.

use crate::catalog::Catalog;
use crate::domain::{BotResponse, MessageContent};
use crate::ports::RandomSource;
use std::sync::Arc;

pub const PROJECT_TEXT: &str = "I'd recommend this exciting project for you:";
pub const PHASE_TEXT: &str = "Here's a development phase to help guide your project:";
pub const TECH_TEXT: &str = "Here are some technology recommendations for your project:";
pub const RESOURCE_TEXT: &str = "Here are some excellent learning resources to help you:";

pub const HELP_TEXT: &str = r#"I can help you with various aspects of your project journey! Here are some things you can ask me about:

• **Project Ideas** - "Suggest a project idea for web development"
• **Development Phases** - "What are the development phases for my project?"
• **Technology Stack** - "What technologies should I use for an IoT project?"
• **Learning Resources** - "Can you provide learning resources for machine learning?"

What specific area would you like to explore?"#;

/// The topic detected in a piece of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ProjectIdea,
    DevelopmentPhase,
    TechStack,
    LearningResources,
    Help,
}

impl Intent {
    /// Classifies `text`; the first matching rule wins.
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has = |keyword: &str| lower.contains(keyword);

        if has("project") && (has("idea") || has("suggestion")) {
            Intent::ProjectIdea
        } else if has("phase") || has("step") || has("development") {
            Intent::DevelopmentPhase
        } else if has("technology") || has("tech") || has("stack") {
            Intent::TechStack
        } else if has("resource") || has("learning") || has("tutorial") {
            Intent::LearningResources
        } else {
            Intent::Help
        }
    }
}

/// Turns user input into a canned response drawn from the catalog.
#[derive(Clone)]
pub struct IntentDispatcher {
    catalog: Arc<Catalog>,
    random: Arc<dyn RandomSource>,
}

impl IntentDispatcher {
    pub fn new(catalog: Arc<Catalog>, random: Arc<dyn RandomSource>) -> Self {
        Self { catalog, random }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Produces the response for `raw`. Total over all inputs.
    pub fn classify(&self, raw: &str) -> BotResponse {
        match Intent::detect(raw) {
            Intent::ProjectIdea => {
                let ideas = self.catalog.project_ideas();
                let idea = ideas[self.random.pick_index(ideas.len())].clone();
                BotResponse {
                    text: PROJECT_TEXT.to_string(),
                    content: MessageContent::Project(idea),
                }
            }
            Intent::DevelopmentPhase => BotResponse {
                text: PHASE_TEXT.to_string(),
                content: MessageContent::Phase(self.catalog.development_phases()[0].clone()),
            },
            Intent::TechStack => BotResponse {
                text: TECH_TEXT.to_string(),
                content: MessageContent::Tech(self.catalog.tech_recommendation().clone()),
            },
            Intent::LearningResources => BotResponse {
                text: RESOURCE_TEXT.to_string(),
                content: MessageContent::Resource(self.catalog.learning_resources().to_vec()),
            },
            Intent::Help => BotResponse {
                text: HELP_TEXT.to_string(),
                content: MessageContent::Plain,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    struct FixedIndex(usize);

    impl RandomSource for FixedIndex {
        fn pick_index(&self, len: usize) -> usize {
            self.0 % len
        }
    }

    fn dispatcher_with(index: usize) -> IntentDispatcher {
        IntentDispatcher::new(Arc::new(Catalog::builtin()), Arc::new(FixedIndex(index)))
    }

    #[test]
    fn project_idea_matches_in_any_case() {
        let dispatcher = dispatcher_with(0);
        let response = dispatcher.classify("Any Project IDEA for IoT?");
        assert_eq!(response.content.category(), Category::Project);
        assert_eq!(response.text, PROJECT_TEXT);
    }

    #[test]
    fn project_selection_uses_random_source() {
        let catalog = Catalog::builtin();
        for index in 0..catalog.project_ideas().len() {
            let response = dispatcher_with(index).classify("project suggestion please");
            match response.content {
                MessageContent::Project(idea) => assert_eq!(idea, catalog.project_ideas()[index]),
                other => panic!("expected a project, got {:?}", other),
            }
        }
    }

    #[test]
    fn project_alone_is_not_enough() {
        // "project" without "idea"/"suggestion" falls through to later rules.
        assert_eq!(Intent::detect("my project"), Intent::Help);
        assert_eq!(Intent::detect("my project stack"), Intent::TechStack);
    }

    #[test]
    fn project_rule_beats_tech_rule() {
        let response = dispatcher_with(1).classify("give me a project idea about tech stack");
        assert_eq!(response.content.category(), Category::Project);
    }

    #[test]
    fn phase_always_returns_first_phase() {
        let dispatcher = dispatcher_with(3);
        let first = dispatcher.catalog().development_phases()[0].clone();
        for input in ["What are the development phases?", "next step", "PHASE two"] {
            assert_eq!(
                dispatcher.classify(input).content,
                MessageContent::Phase(first.clone())
            );
        }
    }

    #[test]
    fn substrings_inside_other_words_match() {
        assert_eq!(Intent::detect("the last steps of cooking"), Intent::DevelopmentPhase);
        assert_eq!(Intent::detect("What technologies should I use?"), Intent::TechStack);
        assert_eq!(Intent::detect("any tutorials?"), Intent::LearningResources);
    }

    #[test]
    fn tech_returns_default_recommendation() {
        let dispatcher = dispatcher_with(0);
        let response = dispatcher.classify("which stack?");
        assert_eq!(
            response.content,
            MessageContent::Tech(dispatcher.catalog().tech_recommendation().clone())
        );
        assert_eq!(response.text, TECH_TEXT);
    }

    #[test]
    fn learning_resources_quick_phrase_returns_three_entries() {
        let dispatcher = dispatcher_with(0);
        match dispatcher.classify("Provide learning resources").content {
            MessageContent::Resource(resources) => {
                assert_eq!(resources.len(), 3);
                assert_eq!(resources, dispatcher.catalog().learning_resources());
            }
            other => panic!("expected resources, got {:?}", other),
        }
    }

    #[test]
    fn unmatched_input_gets_help_text() {
        let dispatcher = dispatcher_with(0);
        for input in ["hello", "", "what's the weather like"] {
            let response = dispatcher.classify(input);
            assert_eq!(response.content, MessageContent::Plain);
            assert_eq!(response.text, HELP_TEXT);
        }
    }
}
