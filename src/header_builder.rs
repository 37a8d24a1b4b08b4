use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

/// Literal value browsers treat as a non-matching origin. This is a protocol
/// marker, not a boolean artifact.
const DENIED_ORIGIN: &str = "false";

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Resolves the origin policy and emits `Access-Control-Allow-Origin`,
    /// reporting whether the requesting origin was admitted. Every
    /// non-wildcard answer varies by `Origin`.
    pub(crate) fn build_origin_headers(&self, request_origin: &str) -> (HeaderCollection, bool) {
        let mut headers = HeaderCollection::new();

        match self.options.origin.resolve(request_origin) {
            OriginDecision::Any => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                (headers, true)
            }
            OriginDecision::Exact(value) => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                (headers, true)
            }
            OriginDecision::Mirror => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, request_origin);
                (headers, true)
            }
            OriginDecision::Disallow => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, DENIED_ORIGIN);
                (headers, false)
            }
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(values) = &self.options.exposed_headers {
            let entries = values
                .iter()
                .map(|entry| entry.trim())
                .filter(|entry| !entry.is_empty())
                .collect::<Vec<_>>();

            if !entries.is_empty() {
                headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, entries.join(","));
            }
        }
        headers
    }

    /// Preflight only. An explicit list is emitted as configured; the
    /// mirror default reflects `Access-Control-Request-Method` and varies on
    /// it, writing nothing when the request carried no such header.
    pub(crate) fn build_methods_header(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        match &self.options.allowed_methods {
            AllowedMethods::List(_) => {
                if let Some(value) = self.options.allowed_methods.header_value() {
                    headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
                }
            }
            AllowedMethods::MirrorRequest => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
                if let Some(requested) = request.access_control_request_method {
                    headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, requested);
                }
            }
        }
        headers
    }

    /// Preflight only. Same reflection contract as
    /// [`Self::build_methods_header`], against `Access-Control-Request-Headers`.
    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        match &self.options.allowed_headers {
            AllowedHeaders::List(_) => {
                if let Some(value) = self.options.allowed_headers.header_value() {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
                }
            }
            AllowedHeaders::MirrorRequest => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                if let Some(requested) = request.access_control_request_headers {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
                }
            }
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        // Zero means "not set", matching the behaviour middleware users rely on.
        if let Some(value) = self.options.max_age
            && value > 0
        {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, value.to_string());
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
