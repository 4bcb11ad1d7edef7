//! Configuration and constants for the CLI.

/// Current output report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Function name used when a readout carries no function name
pub const NO_FUNCTION_NAME: &str = "*** NO FUNCTION NAME ***";

// Readout grammar: <number>ms<TAB><path>:<line>[:<col>...]<TAB><function name...>
pub const FIELD_DELIMITER: char = '\t';
pub const LOCATION_SEPARATOR: char = ':';
pub const DURATION_SUFFIX: &str = "ms";
pub const MILLIS_PER_SECOND: f64 = 1000.0;

/// Editor command used for reveal when none is configured.
/// `{path}` and `{line}` are substituted before launching.
pub const DEFAULT_EDITOR_COMMAND: &str = "xed --line {line} {path}";

/// Environment variable that overrides the editor command
pub const EDITOR_ENV_VAR: &str = "BUILDTIME_EDITOR";

pub const PATH_PLACEHOLDER: &str = "{path}";
pub const LINE_PLACEHOLDER: &str = "{line}";

// Histogram rendering defaults
pub const DEFAULT_BAR_WIDTH: usize = 40;
pub const DEFAULT_SVG_BAR_WIDTH: usize = 24;
pub const DEFAULT_SVG_HEIGHT: usize = 400;

/// Upper bound for rows printed by the table view
pub const MAX_TABLE_LIMIT: usize = 100_000;
