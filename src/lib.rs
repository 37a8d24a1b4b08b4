mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
mod middleware;
mod options;
mod origin;
mod result;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::{CorsRequest, RequestContext, ResponseSink};
pub use cors::Cors;
pub use headers::Headers;
pub use middleware::{CorsMiddleware, create_middleware};
pub use options::CorsOptions;
pub use origin::{Origin, OriginDecision, OriginMatcher, OriginPredicateFn, PatternError};
pub use result::{Applied, CorsDecision, CorsResult};
