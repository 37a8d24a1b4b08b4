use crate::context::ResponseSink;
use indexmap::IndexMap;

/// Ordered set of response headers produced by one evaluation.
///
/// `Vary` entries are kept apart from the overwritable fields so they can be
/// appended to the host response rather than clobbering what is already
/// there. Entries are deduplicated case-insensitively within one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: IndexMap<String, String>,
    vary: Vec<String>,
}

impl Headers {
    /// Case-insensitive lookup of an overwritable field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// `Vary` entries accumulated during evaluation, in append order.
    pub fn vary(&self) -> &[String] {
        &self.vary
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.vary.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Writes every field and `Vary` entry to the sink.
    pub fn write_to<S: ResponseSink>(&self, sink: &mut S) {
        for (name, value) in self.iter() {
            sink.set_header(name, value);
        }
        for entry in &self.vary {
            sink.vary(entry);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.fields.insert(name.into(), value.into());
    }

    pub(crate) fn add_vary(&mut self, name: &str) {
        let exists = self
            .headers
            .vary
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(name));
        if !exists {
            self.headers.vary.push(name.to_string());
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers.fields {
            self.headers.fields.insert(name, value);
        }
        for entry in other.headers.vary {
            self.add_vary(&entry);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
