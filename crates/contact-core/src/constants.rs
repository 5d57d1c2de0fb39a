/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding tracing filter directives.
pub const LOG_ENV_VAR: &str = "CONTACT_LOG";

/// Column order of the breach report table.
pub const BREACH_REPORT_COLUMNS: [&str; 13] = [
    "person1",
    "condition1",
    "location1",
    "entry1",
    "exit1",
    "person2",
    "condition2",
    "location2",
    "entry2",
    "exit2",
    "distance",
    "breached",
    "risk",
];
