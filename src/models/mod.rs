//! Data models for the front desk log

pub mod key;
pub mod record;
pub mod serial;
pub mod stats;
pub mod visitor;

// Re-export commonly used types
pub use key::{CreateKeyEntry, KeyEntry, ReturnKey};
pub use record::{PhotoSide, Record};
pub use stats::Stats;
pub use visitor::{CreateVisitor, TimeoutVisitor, Visitor};
