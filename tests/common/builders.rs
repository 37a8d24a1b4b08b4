#![allow(dead_code)]

use reflect_cors::constants::method;
use reflect_cors::{
    AllowedHeaders, AllowedMethods, Cors, CorsDecision, CorsOptions, Origin, RequestContext,
};

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.options.origin = origin;
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = enabled;
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.options.allowed_headers = headers;
        self
    }

    pub fn headers_alias(mut self, headers: AllowedHeaders) -> Self {
        self.options.headers = Some(headers);
        self
    }

    pub fn allowed_methods(mut self, methods: AllowedMethods) -> Self {
        self.options.allowed_methods = methods;
        self
    }

    pub fn methods_alias(mut self, methods: AllowedMethods) -> Self {
        self.options.methods = Some(methods);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options)
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let SimpleRequestBuilder { method, origin } = self;
        let ctx = RequestContext {
            method: &method,
            origin: origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        cors.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let PreflightRequestBuilder {
            origin,
            request_method,
            request_headers,
        } = self;

        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: origin.as_deref(),
            access_control_request_method: request_method.as_deref(),
            access_control_request_headers: request_headers.as_deref(),
        };
        cors.check(&ctx)
    }
}
