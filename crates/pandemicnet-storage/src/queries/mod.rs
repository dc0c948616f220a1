//! SQL for individuals and contact events. Every function takes a borrowed
//! connection so the engine decides which connection (writer or reader) runs it.

pub mod contact_ops;
pub mod individual_ops;
pub mod snapshot_ops;
