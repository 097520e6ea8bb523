//! Options controlling how chunks are found

use crate::matcher::MatchStrategy;
use std::fmt;
use std::sync::Arc;

/// Text transform applied to the haystack and to literal terms before matching
///
/// Spans always index the original text, so a sanitizer should keep the byte
/// length of its input. Spans produced against a resized text are clamped and
/// widened to `char` boundaries of the original text.
pub type Sanitizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options for finding chunks
#[derive(Clone, Default)]
pub struct FindOptions {
    case_sensitive: bool,
    auto_escape: bool,
    sanitize: Option<Sanitizer>,
    strategy: Option<Arc<dyn MatchStrategy>>,
}

impl fmt::Debug for FindOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindOptions")
            .field("case_sensitive", &self.case_sensitive)
            .field("auto_escape", &self.auto_escape)
            .field("sanitize", &self.sanitize.as_ref().map(|_| "<fn>"))
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl FindOptions {
    /// Create a builder
    pub fn builder() -> FindOptionsBuilder {
        FindOptionsBuilder::default()
    }

    /// Whether matching respects case
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether literal terms have regex metacharacters escaped
    pub fn auto_escape(&self) -> bool {
        self.auto_escape
    }

    /// The sanitizer, if any
    pub fn sanitizer(&self) -> Option<&Sanitizer> {
        self.sanitize.as_ref()
    }

    /// The custom match strategy, if any
    pub fn strategy(&self) -> Option<&Arc<dyn MatchStrategy>> {
        self.strategy.as_ref()
    }
}

/// Builder for [`FindOptions`]
#[derive(Debug, Default)]
pub struct FindOptionsBuilder {
    options: FindOptions,
}

impl FindOptionsBuilder {
    /// Match case exactly
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.options.case_sensitive = case_sensitive;
        self
    }

    /// Match literal terms literally instead of as regular expressions
    pub fn auto_escape(mut self, auto_escape: bool) -> Self {
        self.options.auto_escape = auto_escape;
        self
    }

    /// Set the sanitizer
    pub fn sanitize<F>(mut self, sanitize: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.options.sanitize = Some(Arc::new(sanitize));
        self
    }

    /// Set an already shared sanitizer, or clear it
    pub fn sanitizer(mut self, sanitize: Option<Sanitizer>) -> Self {
        self.options.sanitize = sanitize;
        self
    }

    /// Replace the default matching step with a custom strategy
    pub fn find_chunks<S>(mut self, strategy: S) -> Self
    where
        S: MatchStrategy + 'static,
    {
        self.options.strategy = Some(Arc::new(strategy));
        self
    }

    /// Build the options
    pub fn build(self) -> FindOptions {
        self.options
    }
}
