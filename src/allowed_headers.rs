use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` preflight response
/// header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Reflect the request's `Access-Control-Request-Headers` value verbatim
    /// and vary on that header.
    #[default]
    MirrorRequest,
    /// Emit a fixed comma-joined list.
    List(Vec<String>),
}

impl AllowedHeaders {
    /// Builds an explicit list, trimming whitespace and dropping
    /// case-insensitive duplicates while preserving first-seen order.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            let key = trimmed.to_ascii_lowercase();
            if seen.insert(key) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    /// Header value for the explicit-list case; `None` when the list is
    /// empty or when the configuration mirrors the request.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::MirrorRequest => None,
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
        }
    }
}

impl From<&str> for AllowedHeaders {
    fn from(value: &str) -> Self {
        Self::List(vec![value.to_owned()])
    }
}

impl From<Vec<String>> for AllowedHeaders {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
