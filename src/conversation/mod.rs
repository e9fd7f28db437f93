pub mod manager;
pub mod stats;
pub mod types;

pub use manager::ConversationManager;
pub use types::{ConversationRecord, RecordKind};
