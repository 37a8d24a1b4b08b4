use crate::context::{CorsRequest, ResponseSink};
use crate::cors::Cors;
use crate::options::CorsOptions;
use crate::result::Applied;

/// Chained-handler adapter around [`Cors`].
///
/// The policy is captured once at construction and never mutated; each
/// invocation evaluates one request/response pair and calls `next` exactly
/// when the evaluation did not finalize the response.
pub struct CorsMiddleware {
    cors: Cors,
}

impl CorsMiddleware {
    pub fn new(options: CorsOptions) -> Self {
        Self {
            cors: Cors::new(options),
        }
    }

    pub fn cors(&self) -> &Cors {
        &self.cors
    }

    pub fn handle<R, S, F>(&self, request: &R, response: &mut S, next: F) -> Applied
    where
        R: CorsRequest,
        S: ResponseSink,
        F: FnOnce(),
    {
        let applied = self.cors.apply(request, response);
        if !applied.is_handled() {
            next();
        }
        applied
    }
}

impl From<Cors> for CorsMiddleware {
    fn from(cors: Cors) -> Self {
        Self { cors }
    }
}

/// Builds a handler closure suitable for chained execution models.
pub fn create_middleware<R, S, F>(options: CorsOptions) -> impl Fn(&R, &mut S, F) + Send + Sync
where
    R: CorsRequest,
    S: ResponseSink,
    F: FnOnce(),
{
    let middleware = CorsMiddleware::new(options);
    move |request, response, next| {
        middleware.handle(request, response, next);
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
