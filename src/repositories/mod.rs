//! Repository pattern implementation for the channel record store
//!
//! The record store is an external collaborator: it holds one row per
//! channel name variant and answers "all rows whose `xmltv_id` is in this
//! set". The guide generator only depends on the [`ChannelRepository`]
//! trait, so tests and embedders can substitute their own store.
//!
//! # Usage
//!
//! ```rust,no_run
//! use indexmap::IndexSet;
//! use xmltv_guide::repositories::{ChannelRepository, JsonLinesChannelRepository};
//!
//! # async fn example() -> xmltv_guide::errors::RepositoryResult<()> {
//! let repo = JsonLinesChannelRepository::new("./scripts/database/channels.db");
//! let ids: IndexSet<String> = ["BBCOne.uk".to_string()].into_iter().collect();
//! let records = repo.find_by_xmltv_ids(&ids).await?;
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod traits;

// Re-export main traits and types
pub use channel::{InMemoryChannelRepository, JsonLinesChannelRepository};
pub use traits::*;
