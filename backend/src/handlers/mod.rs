//! HTTP request handlers

pub mod chat;
pub mod dashboard;
pub mod estimation;
pub mod health;
pub mod help;
pub mod settings;
pub mod warnings;

pub use chat::*;
pub use dashboard::*;
pub use estimation::*;
pub use health::*;
pub use help::*;
pub use settings::*;
pub use warnings::*;
