//! # PARSE CONFIGURATION
//!
//! **PURPOSE**: Runtime knobs for the init data parser.

/// Default byte limit for raw init data. Hosts send a few hundred bytes; the
/// limit only guards against garbage input.
pub const DEFAULT_MAX_INPUT_LEN: usize = 65_536;

/// **PARSE OPTIONS**
///
/// **USAGE**: Pass to `init_data::parse_with` / `init_data::parse_bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// **MAXIMUM INPUT SIZE** - Byte limit applied to raw query input
    pub max_input_len: usize,

    /// **STRICT MODE** - Reject unknown keys instead of dropping them
    pub strict: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            strict: false,
        }
    }
}
