pub mod compose_task;
pub mod protocol;
pub mod rest;
pub mod state;
pub mod ws_handler;

// Re-export the handlers the binary needs to build the web server router.
pub use rest::{health_handler, list_quick_actions_handler};
pub use ws_handler::ws_handler;
