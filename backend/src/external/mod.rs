//! External API integrations

pub mod assistant;

pub use assistant::AssistantClient;
