//! Transient notices: loading indicator, error banner, success toasts.
//!
//! Auto-dismissal runs as a spawned tokio task. The banner has a single
//! slot: showing a new banner aborts the previous dismissal task, so an
//! older timer can never hide a newer message. Toasts are independent.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;

use super::messages;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const LOADING_MESSAGE: &str = "Loading…";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    id: u64,
    message: String,
}

pub struct Notices {
    timeout: Duration,
    loading: bool,
    banner: Arc<Mutex<Option<String>>>,
    banner_task: Option<JoinHandle<()>>,
    toasts: Arc<Mutex<Vec<Toast>>>,
    next_toast: u64,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Notices {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            loading: false,
            banner: Arc::new(Mutex::new(None)),
            banner_task: None,
            toasts: Arc::new(Mutex::new(Vec::new())),
            next_toast: 0,
        }
    }

    /// Prints the loading line when the indicator turns on.
    pub fn set_loading(&mut self, on: bool) {
        debug!("loading indicator {}", if on { "on" } else { "off" });
        if on && !self.loading {
            messages::info(LOADING_MESSAGE);
        }
        self.loading = on;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Show the error banner and (re)schedule its dismissal. Must run inside a tokio runtime.
    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        messages::error(&message);
        *lock(&self.banner) = Some(message);

        if let Some(previous) = self.banner_task.take() {
            previous.abort();
        }

        let slot = Arc::clone(&self.banner);
        let timeout = self.timeout;
        self.banner_task = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            *lock(&slot) = None;
        }));
    }

    /// Show a success toast, dismissed on its own after the timeout.
    pub fn show_success(&mut self, message: impl Into<String>) {
        let message = message.into();
        messages::success(&message);

        self.next_toast += 1;
        let id = self.next_toast;
        lock(&self.toasts).push(Toast { id, message });

        let toasts = Arc::clone(&self.toasts);
        let timeout = self.timeout;
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            lock(&toasts).retain(|t| t.id != id);
        });
    }

    pub fn banner(&self) -> Option<String> {
        lock(&self.banner).clone()
    }

    /// Visible toasts, oldest first.
    pub fn toasts(&self) -> Vec<String> {
        lock(&self.toasts).iter().map(|t| t.message.clone()).collect()
    }
}

impl Drop for Notices {
    fn drop(&mut self) {
        if let Some(task) = self.banner_task.take() {
            task.abort();
        }
    }
}
