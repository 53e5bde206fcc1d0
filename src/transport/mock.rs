//! Scripted in-memory transport for unit tests
//!
//! Maps exact request targets to canned JSON bodies or failures and records
//! every executed target in order, so tests can assert both what was
//! returned and what was (or was not) requested.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::Transport;
use crate::error::{Error, Result};

pub(crate) struct MockTransport {
    bodies: Mutex<HashMap<String, Value>>,
    failures: Mutex<HashMap<String, (u16, String)>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            bodies: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script a successful JSON body for an exact target
    pub(crate) fn on(self, target: impl Into<String>, body: Value) -> Self {
        self.bodies.lock().unwrap().insert(target.into(), body);
        self
    }

    /// Script a failure for an exact target
    pub(crate) fn fail(self, target: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(target.into(), (status, message.into()));
        self
    }

    /// Targets executed so far, in order
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, _method: Method, target: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(target.to_string());

        if let Some((status, message)) = self.failures.lock().unwrap().get(target) {
            return Err(Error::api(*status, message.clone()));
        }

        match self.bodies.lock().unwrap().get(target) {
            Some(body) => Ok(body.clone()),
            None => Err(Error::api(404, format!("no scripted response for '{target}'"))),
        }
    }
}
