//! Utility modules for the guide generator
//!
//! Text escaping and timestamp formatting used by the XMLTV serializer.

pub mod datetime;
pub mod xml_text;

pub use datetime::format_xmltv_timestamp;
pub use xml_text::{escape_string, escape_text, escape_utf16};
