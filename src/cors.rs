use crate::constants::method;
use crate::context::{CorsRequest, RequestContext, ResponseSink};
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::result::{Applied, CorsDecision, CorsResult};

/// Status written when a preflight request is short-circuited.
const PREFLIGHT_SUCCESS_STATUS: u16 = 200;

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Evaluation is side-effect-free and never mutates the options, so one
/// engine may be shared freely across threads.
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self {
            options: options.canonicalize(),
        }
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Evaluates a request without touching any response, returning the
    /// headers to attach and whether the response should be finalized.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        // Without an Origin header this is not a CORS request.
        let Some(origin) = request.origin else {
            return CorsDecision::NotApplicable;
        };

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();

        let (origin_headers, admitted) = builder.build_origin_headers(origin);
        headers.extend(origin_headers);

        if !admitted {
            // The denial marker still goes out; enforcement is the browser's.
            return CorsDecision::Simple(CorsResult::passthrough(headers.into_headers()));
        }

        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        if is_preflight(request) {
            headers.extend(builder.build_methods_header(request));
            headers.extend(builder.build_allowed_headers(request));
            headers.extend(builder.build_max_age_header());

            return CorsDecision::Preflight(CorsResult::terminal(
                headers.into_headers(),
                PREFLIGHT_SUCCESS_STATUS,
            ));
        }

        CorsDecision::Simple(CorsResult::passthrough(headers.into_headers()))
    }

    /// Evaluates a request and writes the outcome to the response sink.
    ///
    /// Returns [`Applied::Handled`] exactly when the response was finalized
    /// as a preflight answer; every other path, including a denied origin,
    /// reports [`Applied::NotHandled`] so the caller continues processing.
    pub fn apply<R, S>(&self, request: &R, response: &mut S) -> Applied
    where
        R: CorsRequest,
        S: ResponseSink,
    {
        let context = RequestContext::from_request(request);
        match self.check(&context) {
            CorsDecision::NotApplicable => Applied::NotHandled,
            CorsDecision::Simple(result) => {
                result.headers.write_to(response);
                Applied::NotHandled
            }
            CorsDecision::Preflight(result) => {
                result.headers.write_to(response);
                let status = result.status.unwrap_or(PREFLIGHT_SUCCESS_STATUS);
                response.finalize(status);
                Applied::Handled(status)
            }
        }
    }
}

/// A preflight is an `OPTIONS` request carrying a non-empty
/// `Access-Control-Request-Method` header; a bare `OPTIONS` is not one.
fn is_preflight(request: &RequestContext<'_>) -> bool {
    request.method == method::OPTIONS && request.access_control_request_method.is_some()
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
