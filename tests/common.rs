#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use rtimeclock::app::Controller;
use rtimeclock::gateway::{Endpoints, Gateway, GatewayError, Transport};
use rtimeclock::ui::notice::Notices;
use rtimeclock::validation::Validator;
use serde_json::Value;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

/// Nothing listens on the discard port: every request fails fast.
pub const DEAD_API: &str = "http://127.0.0.1:9";

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Unique config path inside the system temp dir; any existing file is removed.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.conf", name));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// Command pre-wired to a fresh config file and an unreachable API.
pub fn offline(name: &str) -> Command {
    let config = setup_test_config(name);
    let mut cmd = rtc();
    cmd.args(["--config", &config, "--api", DEAD_API]);
    cmd
}

/// In-process transport: canned GET payloads per path, optional POST reply.
/// Paths without a canned payload fail like an unreachable server.
#[derive(Default)]
pub struct FakeTransport {
    gets: HashMap<String, Value>,
    post_reply: Option<Value>,
    pub posted: Mutex<Vec<(String, Value)>>,
}

impl FakeTransport {
    pub fn down() -> Self {
        Self::default()
    }

    pub fn serving(mut self, path: &str, payload: Value) -> Self {
        self.gets.insert(path.to_string(), payload);
        self
    }

    pub fn replying(mut self, reply: Value) -> Self {
        self.post_reply = Some(reply);
        self
    }

    pub fn posted(&self) -> Vec<(String, Value)> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, path: &str) -> Result<Value, GatewayError> {
        self.gets
            .get(path)
            .cloned()
            .ok_or_else(|| GatewayError::Unavailable(format!("no route for {path}")))
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        self.posted
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));
        self.post_reply
            .clone()
            .ok_or_else(|| GatewayError::Unavailable(format!("POST {path} refused")))
    }
}

pub fn gateway(transport: FakeTransport) -> Gateway<FakeTransport> {
    Gateway::new(transport, Endpoints::default()).with_fallback_delay(Duration::ZERO)
}

pub fn controller(transport: FakeTransport) -> Controller<FakeTransport> {
    Controller::new(
        gateway(transport),
        Validator::with_default_forms().expect("built-in patterns compile"),
        Notices::default(),
    )
}
