//! Recording [`FigmaClient`] for tests.

use std::sync::Mutex;

use serde_json::Value;

use super::{ApiError, ApiResult, FigmaClient, QueryParams, Verb};

/// A call observed by [`MockClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub verb: Verb,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

/// Answers every call with the same canned outcome and records what was sent.
pub struct MockClient {
    outcome: ApiResult<Value>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockClient {
    /// Succeed with `body`.
    pub fn ok(body: Value) -> Self {
        Self {
            outcome: Ok(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail with a non-success status.
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            outcome: Err(ApiError::status(status, body)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The only call made. Panics unless exactly one call was recorded.
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.into_iter().next().unwrap()
    }

    fn record(
        &self,
        verb: Verb,
        path: &str,
        query: &QueryParams,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            verb,
            path: path.to_string(),
            query: query.clone(),
            body: body.cloned(),
        });
        self.outcome.clone()
    }
}

impl FigmaClient for MockClient {
    fn get(&self, path: &str, query: &QueryParams) -> ApiResult<Value> {
        self.record(Verb::Get, path, query, None)
    }

    fn post(&self, path: &str, query: &QueryParams, body: &Value) -> ApiResult<Value> {
        self.record(Verb::Post, path, query, Some(body))
    }

    fn put(&self, path: &str, query: &QueryParams, body: &Value) -> ApiResult<Value> {
        self.record(Verb::Put, path, query, Some(body))
    }

    fn delete(&self, path: &str, query: &QueryParams) -> ApiResult<Value> {
        self.record(Verb::Delete, path, query, None)
    }
}
