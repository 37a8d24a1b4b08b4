/// Configuration for the `Access-Control-Allow-Methods` preflight response
/// header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedMethods {
    /// Reflect the request's `Access-Control-Request-Method` value verbatim
    /// and vary on that header.
    #[default]
    MirrorRequest,
    /// Emit a comma-joined list. Case-sensitive to preserve caller intent.
    List(Vec<String>),
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods, in original order.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
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

impl From<&str> for AllowedMethods {
    fn from(value: &str) -> Self {
        Self::List(vec![value.to_owned()])
    }
}

impl From<Vec<String>> for AllowedMethods {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
