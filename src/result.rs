use crate::headers::Headers;

/// Headers and response metadata emitted for either a preflight or simple
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    /// Status to write when the response is short-circuited.
    pub status: Option<u16>,
    /// Whether the response must be finalized instead of passed onward.
    pub end_response: bool,
}

impl CorsResult {
    pub(crate) fn passthrough(headers: Headers) -> Self {
        Self {
            headers,
            status: None,
            end_response: false,
        }
    }

    pub(crate) fn terminal(headers: Headers, status: u16) -> Self {
        Self {
            headers,
            status: Some(status),
            end_response: true,
        }
    }
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// A recognized preflight; the response should be finalized.
    Preflight(CorsResult),
    /// A CORS request (or a denied one); headers attach, processing continues.
    Simple(CorsResult),
    /// No `Origin` header; not a CORS request, nothing to do.
    NotApplicable,
}

/// Outcome of applying a decision to a response sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Nothing terminal happened; the caller continues normal processing.
    NotHandled,
    /// The response was finalized with the given status code.
    Handled(u16),
}

impl Applied {
    pub fn is_handled(&self) -> bool {
        matches!(self, Applied::Handled(_))
    }

    /// Numeric form: 0 for not handled, otherwise the status written.
    pub fn status(&self) -> u16 {
        match self {
            Applied::NotHandled => 0,
            Applied::Handled(status) => *status,
        }
    }
}
