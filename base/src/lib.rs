pub mod setting;
pub mod util;

pub const CLI_NAME: &str = "crosscheck";
pub const VERSION: &str = "0.1.0";
pub const GITHUB: &str = "codeberg.org/crosscheck/crosscheck";

// logging constants
pub const CROSSCHECK_LOGLEVEL: &str = "CROSSCHECK_LOGLEVEL";
