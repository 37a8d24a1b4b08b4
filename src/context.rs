use crate::constants::header;

/// Read-only view of an incoming request, supplied by the host server.
///
/// Header lookup must be case-insensitive. An absent header must be reported
/// as `None`; an empty value is a present header and is the implementor's to
/// return as `Some("")`.
pub trait CorsRequest {
    fn method(&self) -> &str;
    fn header(&self, name: &str) -> Option<&str>;
}

/// Write-only response capability, supplied by the host server.
pub trait ResponseSink {
    /// Sets a header, overwriting any prior value for the same name.
    fn set_header(&mut self, name: &str, value: &str);

    /// Appends one entry to the `Vary` header. Entries already present should
    /// be skipped; evaluation deduplicates within a single pass but cannot
    /// see what earlier passes appended.
    fn vary(&mut self, name: &str);

    /// Writes the status code and terminates the response with no body.
    fn finalize(&mut self, status: u16);
}

/// Borrowed snapshot of the request fields the policy engine inspects.
///
/// Empty header values are collapsed to `None` here: an empty `Origin` is not
/// a CORS request, and an empty `Access-Control-Request-Method` does not mark
/// a preflight.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn from_request<R: CorsRequest>(request: &'a R) -> Self {
        Self {
            method: request.method(),
            origin: present(request.header(header::ORIGIN)),
            access_control_request_method: present(
                request.header(header::ACCESS_CONTROL_REQUEST_METHOD),
            ),
            access_control_request_headers: present(
                request.header(header::ACCESS_CONTROL_REQUEST_HEADERS),
            ),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
