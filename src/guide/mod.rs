//! Guide generation pipeline
//!
//! Three stages run in order, each consuming the previous stage's output:
//!
//! 1. [`resolver`] picks the channel identifiers and fetches their records
//! 2. [`merge`] folds records into canonical channels and flattens programmes
//! 3. [`xmltv`] renders the XMLTV document
//!
//! [`GuideGenerator`] drives all three and writes the result.

pub mod generator;
pub mod merge;
pub mod resolver;
pub mod xmltv;

pub use generator::{write_guide, GuideGenerator, GuideStatistics};
pub use merge::{merge, MergedGuide};
pub use resolver::{requested_identifiers, resolve_records};
pub use xmltv::{render_xmltv, RenderedGuide};
