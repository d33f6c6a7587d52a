pub mod catalog;
pub mod conversation;
pub mod dispatcher;
pub mod domain;
pub mod ports;
pub mod quick_action;

pub use catalog::Catalog;
pub use conversation::{
    ChatController, ConversationEvent, ConversationStore, PendingReply, SubmitRejected, Transition,
};
pub use dispatcher::{Intent, IntentDispatcher};
pub use domain::{
    BotResponse, Category, DevelopmentPhase, Difficulty, Domain, LearningResource, Message,
    MessageContent, ProjectIdea, ResourceKind, TechItem, TechRecommendation,
};
pub use ports::{RandomSource, SeededRandom, ThreadRandom};
pub use quick_action::QuickAction;
