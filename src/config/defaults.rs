/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Input defaults
pub const DEFAULT_PUBLIC_PATH: &str = ".";
pub const PROGRAMS_FILE_RELATIVE_PATH: &str = "scripts/output/programs.json";
pub const DEFAULT_DATABASE_PATH: &str = "./scripts/database/channels.db";

// Output defaults
pub const DEFAULT_GUIDE_PATH: &str = "./guide.xml";

// Environment overrides
pub const ENV_PUBLIC_PATH: &str = "PUBLIC_PATH";
