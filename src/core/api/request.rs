//! Operation descriptors.
//!
//! An [`ApiRequest`] is everything needed to perform one Figma API call: the
//! verb, the base-URL-relative path, the query parameters and, for writes, the
//! JSON body. Optional parameters that were not supplied never make it into
//! either mapping.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{ApiResult, FigmaClient};

/// HTTP verbs used by the Figma API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// Ordered query parameters, rendered as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter that is always sent.
    pub fn required(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter only when a value was supplied.
    pub fn optional<V: fmt::Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.required(key, value),
            None => self,
        }
    }

    /// Look up the value sent for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The key/value pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }
}

/// A JSON object body containing only the fields that were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody(Map<String, Value>);

impl RequestBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field that is always sent.
    pub fn required(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Add a field only when a value was supplied.
    pub fn optional<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.required(key, value),
            None => self,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// One Figma API call: verb, path, query and optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub verb: Verb,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Verb::Get, path)
    }

    /// A POST with an empty object body until [`with_body`](Self::with_body) is called.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Verb::Post, path).with_body(RequestBody::new())
    }

    /// A PUT with an empty object body until [`with_body`](Self::with_body) is called.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Verb::Put, path).with_body(RequestBody::new())
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Verb::Delete, path)
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body.into_value());
        self
    }

    /// Path plus query string, for log lines.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.to_query_string())
        }
    }

    /// Perform the call on `client` using this request's verb.
    pub fn send(&self, client: &dyn FigmaClient) -> ApiResult<Value> {
        let empty = Value::Object(Map::new());
        let body = self.body.as_ref().unwrap_or(&empty);

        match self.verb {
            Verb::Get => client.get(&self.path, &self.query),
            Verb::Post => client.post(&self.path, &self.query, body),
            Verb::Put => client.put(&self.path, &self.query, body),
            Verb::Delete => client.delete(&self.path, &self.query),
        }
    }
}
