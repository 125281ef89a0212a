//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed user repository, the connection
//!   bootstrap that creates the shared store client, and the fallback used
//!   when no client could be created.
//!
//! Adapters are thin translators between domain types and document store
//! representations. They contain no business logic.

pub mod persistence;
