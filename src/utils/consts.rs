/// Samples per bit period, shared by every line code of one request
pub const DEFAULT_SAMPLES_PER_BIT: usize = 100;

/// Terminal columns drawn per bit period
pub const DEFAULT_COLUMNS_PER_BIT: usize = 8;

/// Initial value of the interactive prompt
pub const DEFAULT_INPUT: &str = "123";

/// Log level (overridden by RUST_LOG)
pub const LOG_LEVEL: &str = "warn";

/// Bit strings longer than this are shortened in the summary
pub const BINARY_PREVIEW_LIMIT: usize = 128;

/// Bits kept when a bit string is shortened
pub const BINARY_PREVIEW_BITS: usize = 120;

/// Width of the scheme name column in plots
pub const PLOT_LABEL_WIDTH: usize = 16;
