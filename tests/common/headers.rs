#![allow(dead_code)]

use reflect_cors::Headers;
use std::collections::HashSet;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    headers.get(name).is_some()
}

pub fn vary_values(headers: &Headers) -> HashSet<String> {
    headers.vary().iter().cloned().collect()
}
