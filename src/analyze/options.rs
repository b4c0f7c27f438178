//! Analysis options.

/// Reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Paragraphs with this many characters or more are invalid.
pub const DEFAULT_MAX_PARAGRAPH_CHARS: usize = 1000;

/// Options for [`analyze`](super::analyze) and
/// [`analyze_batch`](super::analyze_batch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Reading speed for the reading-time estimate
    pub words_per_minute: usize,

    /// Exclusive upper bound on paragraph length, in characters
    pub max_paragraph_chars: usize,

    /// Analyze batches on the rayon thread pool
    pub parallel: bool,
}

impl AnalyzeOptions {
    /// Create new analysis options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reading speed.
    pub fn with_words_per_minute(mut self, words_per_minute: usize) -> Self {
        self.words_per_minute = words_per_minute.max(1);
        self
    }

    /// Set the paragraph length limit.
    pub fn with_max_paragraph_chars(mut self, max: usize) -> Self {
        self.max_paragraph_chars = max;
        self
    }

    /// Enable or disable parallel batch analysis.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            max_paragraph_chars: DEFAULT_MAX_PARAGRAPH_CHARS,
            parallel: true,
        }
    }
}
