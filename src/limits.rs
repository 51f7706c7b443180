//! Resource limits for JSON parsing.
//!
//! The parser recurses once per nesting level, so an unbounded depth lets
//! adversarial input such as `[[[[...` exhaust the stack. [`Limits`] caps
//! the nesting depth and, optionally, the input size.

/// Default maximum nesting depth.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Limits applied by [`parse_with_limits`](crate::parse_with_limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (`InputTooLarge`)
    pub max_input_size: usize,
    /// Maximum nesting depth of arrays/objects (`MaxDepthExceeded`)
    pub max_nesting_depth: usize,
}

impl Limits {
    /// Default limits: unbounded input size, depth 128.
    pub const fn new() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    /// Tight limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 32,
        }
    }

    /// Generous limits for trusted, deeply nested documents.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_nesting_depth: 1024,
        }
    }

    /// Replace the nesting depth cap.
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Replace the input size cap.
    pub const fn with_max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = size;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}
