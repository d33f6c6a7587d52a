//! crates/project_guide_core/src/quick_action.rs
//!
//! The four shortcut buttons. Each one submits a fixed phrase exactly as if
//! the user had typed it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    ProjectIdeas,
    DevelopmentPhases,
    TechStack,
    LearningResources,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::ProjectIdeas,
        QuickAction::DevelopmentPhases,
        QuickAction::TechStack,
        QuickAction::LearningResources,
    ];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::ProjectIdeas => "Project Ideas",
            QuickAction::DevelopmentPhases => "Development Phases",
            QuickAction::TechStack => "Tech Stack",
            QuickAction::LearningResources => "Learning Resources",
        }
    }

    /// The literal text submitted when the action is triggered.
    pub fn query(&self) -> &'static str {
        match self {
            QuickAction::ProjectIdeas => "Suggest a project idea",
            QuickAction::DevelopmentPhases => "What are the development phases?",
            QuickAction::TechStack => "What technologies should I use?",
            QuickAction::LearningResources => "Provide learning resources",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::Intent;

    #[test]
    fn each_action_reaches_its_own_topic() {
        let expected = [
            Intent::ProjectIdea,
            Intent::DevelopmentPhase,
            Intent::TechStack,
            Intent::LearningResources,
        ];
        for (action, intent) in QuickAction::ALL.iter().zip(expected) {
            assert_eq!(Intent::detect(action.query()), intent, "{:?}", action);
        }
    }

    #[test]
    fn actions_deserialize_from_snake_case() {
        let action: QuickAction = serde_json::from_str("\"tech_stack\"").unwrap();
        assert_eq!(action, QuickAction::TechStack);
    }
}
