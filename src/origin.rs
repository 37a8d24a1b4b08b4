use regex_automata::meta::{BuildError, Regex};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Origin admission policy.
#[derive(Clone, Default)]
pub enum Origin {
    /// Admit any origin and answer with the literal wildcard.
    #[default]
    Any,
    /// Answer with this fixed origin, irrespective of the requesting origin.
    Exact(String),
    /// Echo the requesting origin back when any matcher admits it; otherwise
    /// emit the denial marker.
    List(Vec<OriginMatcher>),
}

/// Outcome of resolving one requesting origin against the configured policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit the wildcard `*`.
    Any,
    /// Emit this fixed value.
    Exact(String),
    /// Echo the requesting origin verbatim.
    Mirror,
    /// Emit the denial marker; the request is not admitted.
    Disallow,
}

/// Errors surfaced while compiling an origin pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern took {elapsed:?}, exceeding the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// One element of an [`Origin::List`] policy.
#[derive(Clone)]
pub enum OriginMatcher {
    /// Case-sensitive equality with the requesting origin.
    Exact(String),
    Pattern(Regex),
    Predicate(Arc<OriginPredicateFn>),
    /// Nested sequence, evaluated recursively; first match wins.
    List(Vec<OriginMatcher>),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == candidate,
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
            OriginMatcher::Predicate(predicate) => predicate(candidate),
            OriginMatcher::List(matchers) => {
                matchers.iter().any(|matcher| matcher.matches(candidate))
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        compile_pattern(pattern, budget).map(Self::Pattern)
    }
}

fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let started = Instant::now();
    let regex = Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
    let elapsed = started.elapsed();
    if elapsed > budget {
        return Err(PatternError::Timeout { elapsed, budget });
    }

    Ok(regex)
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl From<Regex> for OriginMatcher {
    fn from(value: Regex) -> Self {
        OriginMatcher::Pattern(value)
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Single-pattern policy; equivalent to a one-element list.
    pub fn pattern(regex: Regex) -> Self {
        Self::List(vec![OriginMatcher::Pattern(regex)])
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        OriginMatcher::pattern_str(pattern).map(|matcher| Self::List(vec![matcher]))
    }

    /// Single-predicate policy; equivalent to a one-element list.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::List(vec![OriginMatcher::predicate(predicate)])
    }

    /// Resolves the requesting origin. Only called once the request is known
    /// to carry an `Origin` header.
    pub fn resolve(&self, request_origin: &str) -> OriginDecision {
        match self {
            Origin::Any => OriginDecision::Any,
            Origin::Exact(value) => OriginDecision::Exact(value.clone()),
            Origin::List(matchers) => {
                if request_origin.len() > MAX_ORIGIN_LENGTH {
                    return OriginDecision::Disallow;
                }
                if matchers.iter().any(|matcher| matcher.matches(request_origin)) {
                    OriginDecision::Mirror
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
