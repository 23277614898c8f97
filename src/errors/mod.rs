//! Centralized error handling for the guide generator
//!
//! Every stage of the pipeline reports failures through the types defined
//! here. All of them are fatal for a run: the generator never writes a
//! partial document.
//!
//! # Error Categories
//!
//! - **Configuration Errors**: bad config files, records without a site association
//! - **Repository Errors**: record store unreachable or returning malformed rows
//! - **Source Errors**: the prepared programmes file is missing or not valid JSON
//!
//! # Usage
//!
//! ```rust
//! use xmltv_guide::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::configuration("no programmes file"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Repository Results
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;
