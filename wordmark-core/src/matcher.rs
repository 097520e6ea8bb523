//! Pluggable matching step

use crate::chunk::MatchSpan;
use crate::error::Result;
use crate::options::Sanitizer;
use crate::term::SearchTerm;
use std::borrow::Cow;

/// Everything a match strategy gets to see
#[derive(Clone, Copy)]
pub struct MatchRequest<'a> {
    /// Non-empty search terms, in caller order
    pub terms: &'a [SearchTerm],
    /// The original, unsanitized text
    pub text: &'a str,
    /// Sanitizer to apply before matching
    pub sanitize: Option<&'a Sanitizer>,
    /// Whether literal terms match case exactly
    pub case_sensitive: bool,
    /// Whether literal terms are escaped before compilation
    pub auto_escape: bool,
}

impl<'a> MatchRequest<'a> {
    /// The text after sanitizing
    pub fn sanitized_text(&self) -> Cow<'a, str> {
        match self.sanitize {
            Some(sanitize) => Cow::Owned(sanitize(self.text)),
            None => Cow::Borrowed(self.text),
        }
    }
}

impl std::fmt::Debug for MatchRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRequest")
            .field("terms", &self.terms)
            .field("text_len", &self.text.len())
            .field("sanitize", &self.sanitize.is_some())
            .field("case_sensitive", &self.case_sensitive)
            .field("auto_escape", &self.auto_escape)
            .finish()
    }
}

/// Produces raw match spans for a request
///
/// Spans may overlap and come in any order; the caller merges them.
pub trait MatchStrategy: Send + Sync {
    /// Find all spans of `request.terms` in `request.text`
    fn find_spans(&self, request: &MatchRequest<'_>) -> Result<Vec<MatchSpan>>;

    /// Name used in logs
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> MatchStrategy for F
where
    F: Fn(&MatchRequest<'_>) -> Result<Vec<MatchSpan>> + Send + Sync,
{
    fn find_spans(&self, request: &MatchRequest<'_>) -> Result<Vec<MatchSpan>> {
        self(request)
    }
}

/// Regex scan of every term over the sanitized text
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMatcher;

impl MatchStrategy for DefaultMatcher {
    fn find_spans(&self, request: &MatchRequest<'_>) -> Result<Vec<MatchSpan>> {
        let haystack = request.sanitized_text();
        let mut spans = Vec::new();

        for term in request.terms.iter().filter(|term| !term.is_empty()) {
            let Some(regex) =
                term.compile(request.case_sensitive, request.auto_escape, request.sanitize)?
            else {
                continue;
            };

            let before = spans.len();
            // find_iter steps over empty matches on its own
            spans.extend(
                regex
                    .find_iter(&haystack)
                    .filter(|m| !m.is_empty())
                    .map(MatchSpan::from),
            );
            log::trace!(
                "term {:?} produced {} spans",
                term.as_str(),
                spans.len() - before
            );
        }

        Ok(spans)
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FindError;
    use std::sync::Arc;

    fn request<'a>(terms: &'a [SearchTerm], text: &'a str) -> MatchRequest<'a> {
        MatchRequest {
            terms,
            text,
            sanitize: None,
            case_sensitive: false,
            auto_escape: false,
        }
    }

    #[test]
    fn test_default_matcher_collects_per_term() {
        let terms = SearchTerm::literals(["o", "wor"]);
        let spans = DefaultMatcher
            .find_spans(&request(&terms, "hello world"))
            .unwrap();
        assert_eq!(
            spans,
            vec![
                MatchSpan::new(4, 5),
                MatchSpan::new(7, 8),
                MatchSpan::new(6, 9)
            ]
        );
    }

    #[test]
    fn test_default_matcher_skips_empty_matches() {
        let terms = SearchTerm::literals(["x*"]);
        let spans = DefaultMatcher
            .find_spans(&request(&terms, "abxxc"))
            .unwrap();
        assert_eq!(spans, vec![MatchSpan::new(2, 4)]);
    }

    #[test]
    fn test_default_matcher_non_overlapping_per_term() {
        let terms = SearchTerm::literals(["aa"]);
        let spans = DefaultMatcher.find_spans(&request(&terms, "aaaaa")).unwrap();
        assert_eq!(spans, vec![MatchSpan::new(0, 2), MatchSpan::new(2, 4)]);
    }

    #[test]
    fn test_default_matcher_uses_sanitized_text() {
        let sanitize: Sanitizer = Arc::new(|s: &str| s.replace('_', " "));
        let terms = SearchTerm::literals(["b c"]);
        let mut req = request(&terms, "a_b_c");
        req.sanitize = Some(&sanitize);
        req.auto_escape = true;
        let spans = DefaultMatcher.find_spans(&req).unwrap();
        assert_eq!(spans, vec![MatchSpan::new(2, 5)]);
    }

    #[test]
    fn test_default_matcher_propagates_invalid_pattern() {
        let terms = SearchTerm::literals(["ok", "a)"]);
        let err = DefaultMatcher
            .find_spans(&request(&terms, "ok a)"))
            .unwrap_err();
        assert!(matches!(err, FindError::InvalidPattern { ref term, .. } if term == "a)"));
    }

    #[test]
    fn test_closure_strategy() {
        let strategy = |req: &MatchRequest<'_>| -> Result<Vec<MatchSpan>> {
            Ok(vec![MatchSpan::new(0, req.text.len())])
        };
        let terms = SearchTerm::literals(["unused"]);
        let spans = strategy.find_spans(&request(&terms, "abc")).unwrap();
        assert_eq!(spans, vec![MatchSpan::new(0, 3)]);
        assert_eq!(strategy.name(), "custom");
    }
}
