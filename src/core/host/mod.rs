//! Host router seam.
//!
//! Resources never dispatch requests themselves. They hand
//! `(verb, path template, handler)` triples to a [`HostRouter`], which owns
//! matching and dispatch. [`RouteTable`] is the in-process implementation
//! used by the HTTP transport and by tests.

mod pattern;
mod table;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use pattern::{PathParams, PathPattern};
pub use table::{RouteEntry, RouteMatch, RouteTable};

/// HTTP verb a route is bound to.
///
/// `Any` is the catch-all binding used by the `all` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[serde(rename = "ALL")]
    Any,
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Uppercase verb name as shown in route listings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "ALL",
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Map an incoming request method onto a registration verb.
    ///
    /// `HEAD` is served by `GET` routes. Verbs with no dedicated binding
    /// return `None` and can only reach catch-all routes.
    pub fn from_request(method: &str) -> Option<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" | "HEAD" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration interface a host framework exposes to resources.
///
/// Registration has no failure signal: the host owns that contract.
pub trait HostRouter<H> {
    fn get(&mut self, path: &str, handler: H);

    fn post(&mut self, path: &str, handler: H);

    fn put(&mut self, path: &str, handler: H);

    fn delete(&mut self, path: &str, handler: H);

    /// Catch-all binding matching every verb.
    fn all(&mut self, path: &str, handler: H);

    /// Register through the verb-specific method for `method`.
    fn route(&mut self, method: Method, path: &str, handler: H) {
        match method {
            Method::Any => self.all(path, handler),
            Method::Get => self.get(path, handler),
            Method::Post => self.post(path, handler),
            Method::Put => self.put(path, handler),
            Method::Delete => self.delete(path, handler),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, String)>,
    }

    impl HostRouter<()> for Recorder {
        fn get(&mut self, path: &str, _: ()) {
            self.calls.push(("get", path.to_string()));
        }
        fn post(&mut self, path: &str, _: ()) {
            self.calls.push(("post", path.to_string()));
        }
        fn put(&mut self, path: &str, _: ()) {
            self.calls.push(("put", path.to_string()));
        }
        fn delete(&mut self, path: &str, _: ()) {
            self.calls.push(("delete", path.to_string()));
        }
        fn all(&mut self, path: &str, _: ()) {
            self.calls.push(("all", path.to_string()));
        }
    }

    #[test]
    fn test_route_dispatches_to_verb_method() {
        let mut recorder = Recorder::default();
        recorder.route(Method::Any, "/a", ());
        recorder.route(Method::Delete, "/b", ());
        recorder.route(Method::Post, "/c", ());
        assert_eq!(
            recorder.calls,
            vec![
                ("all", "/a".to_string()),
                ("delete", "/b".to_string()),
                ("post", "/c".to_string()),
            ]
        );
    }

    #[test]
    fn test_method_from_request() {
        assert_eq!(Method::from_request("get"), Some(Method::Get));
        assert_eq!(Method::from_request("HEAD"), Some(Method::Get));
        assert_eq!(Method::from_request("DELETE"), Some(Method::Delete));
        assert_eq!(Method::from_request("PATCH"), None);
    }

    #[test]
    fn test_method_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Method::Get).unwrap(), "\"GET\"");
        assert_eq!(serde_json::to_string(&Method::Any).unwrap(), "\"ALL\"");
        assert_eq!(Method::Put.to_string(), "PUT");
    }
}
