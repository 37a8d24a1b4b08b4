use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::origin::Origin;

/// Static configuration evaluated against every request.
///
/// `headers` and `methods` are aliases for `allowed_headers` and
/// `allowed_methods`; the canonical field wins when both are set, and an
/// alias is adopted only while the canonical field still holds its default.
/// Aliases are consumed when the [`Cors`](crate::Cors) engine is built.
#[derive(Clone, Default)]
pub struct CorsOptions {
    pub origin: Origin,
    pub credentials: bool,
    /// Headers exposed to client script beyond the CORS-safelisted set,
    /// joined with `,`. Unset means no `Access-Control-Expose-Headers`.
    pub exposed_headers: Option<Vec<String>>,
    pub allowed_headers: AllowedHeaders,
    pub headers: Option<AllowedHeaders>,
    pub allowed_methods: AllowedMethods,
    pub methods: Option<AllowedMethods>,
    /// Seconds the preflight result may be cached. Zero is treated as unset.
    pub max_age: Option<u64>,
}

impl CorsOptions {
    /// Collapses the alias fields into their canonical counterparts.
    pub(crate) fn canonicalize(mut self) -> Self {
        if let Some(alias) = self.headers.take()
            && matches!(self.allowed_headers, AllowedHeaders::MirrorRequest)
        {
            self.allowed_headers = alias;
        }
        if let Some(alias) = self.methods.take()
            && matches!(self.allowed_methods, AllowedMethods::MirrorRequest)
        {
            self.allowed_methods = alias;
        }

        self
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
