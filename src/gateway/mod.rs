//! Remote Access Gateway.
//!
//! Every remote read or write goes through [`Gateway`]. None of its
//! operations can fail from the caller's point of view: transport and decode
//! errors are logged, a fixed delay is observed, and synthetic or locally
//! identified data is returned instead.

pub mod synthetic;
pub mod transport;

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::Utc;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::models::wire::{ClockEventPayload, EmployeePayload};
use crate::models::{ClockEvent, Employee};
use crate::utils::date;
use synthetic::{PLACEHOLDER_EVENT_LIMIT, SyntheticData};
pub use transport::{HttpTransport, Transport};

pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(300);

/// Failures inside the gateway. They never cross its public operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote API returned a non-2xx status code.
    #[error("remote API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The payload matched neither the native nor the placeholder schema.
    #[error("unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response carries no integer `id`")]
    MissingId,

    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Collection paths, relative to the transport base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub employees: String,
    pub events: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            employees: "users".to_string(),
            events: "posts".to_string(),
        }
    }
}

pub struct Gateway<T: Transport = HttpTransport> {
    transport: T,
    endpoints: Endpoints,
    fallback_delay: Duration,
    synthetic: SyntheticData,
    last_fallback_id: AtomicI64,
}

impl Gateway<HttpTransport> {
    pub fn from_config(cfg: &Config) -> Self {
        let endpoints = Endpoints {
            employees: cfg.employees_endpoint.clone(),
            events: cfg.events_endpoint.clone(),
        };
        Gateway::new(HttpTransport::new(cfg.api_base_url.clone()), endpoints)
            .with_fallback_delay(cfg.fallback_delay())
    }
}

impl<T: Transport> Gateway<T> {
    /// The synthetic dataset is generated here, once for the gateway's lifetime.
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            synthetic: SyntheticData::generate(date::today()),
            last_fallback_id: AtomicI64::new(0),
        }
    }

    pub fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All employees, from the remote API or the synthetic dataset.
    pub async fn fetch_employees(&self) -> Vec<Employee> {
        match self.try_fetch_employees().await {
            Ok(employees) => employees,
            Err(e) => {
                warn!(
                    "GET {} failed, serving synthetic employees: {e}",
                    self.endpoints.employees
                );
                self.degrade().await;
                self.synthetic.employees().to_vec()
            }
        }
    }

    /// All clock events, from the remote API or the synthetic dataset.
    pub async fn fetch_clock_events(&self) -> Vec<ClockEvent> {
        match self.try_fetch_clock_events().await {
            Ok(events) => events,
            Err(e) => {
                warn!(
                    "GET {} failed, serving synthetic clock events: {e}",
                    self.endpoints.events
                );
                self.degrade().await;
                self.synthetic.events().to_vec()
            }
        }
    }

    /// Submit a new employee. The result always carries an identifier.
    pub async fn create_employee(&self, employee: Employee) -> Employee {
        match self
            .try_create(&self.endpoints.employees, &employee.to_wire())
            .await
        {
            Ok(id) => employee.with_id(id),
            Err(e) => {
                warn!(
                    "POST {} failed, assigning a local id: {e}",
                    self.endpoints.employees
                );
                self.degrade().await;
                employee.with_id(self.next_fallback_id())
            }
        }
    }

    /// Submit a new clock event. The result always carries an identifier.
    pub async fn create_clock_event(&self, event: ClockEvent) -> ClockEvent {
        match self
            .try_create(&self.endpoints.events, &event.to_wire())
            .await
        {
            Ok(id) => event.with_id(id),
            Err(e) => {
                warn!(
                    "POST {} failed, assigning a local id: {e}",
                    self.endpoints.events
                );
                self.degrade().await;
                event.with_id(self.next_fallback_id())
            }
        }
    }

    async fn try_fetch_employees(&self) -> Result<Vec<Employee>, GatewayError> {
        let value = self.transport.get(&self.endpoints.employees).await?;

        Ok(match EmployeePayload::decode(&value)? {
            EmployeePayload::Native(items) => items.into_iter().map(Employee::from_wire).collect(),
            EmployeePayload::Placeholder(users) => {
                debug!("adapting {} placeholder users", users.len());
                let today = date::today();
                let mut rng = rand::rng();
                users
                    .into_iter()
                    .map(|u| synthetic::employee_from_placeholder(&mut rng, u, today))
                    .collect()
            }
        })
    }

    async fn try_fetch_clock_events(&self) -> Result<Vec<ClockEvent>, GatewayError> {
        let value = self.transport.get(&self.endpoints.events).await?;

        Ok(match ClockEventPayload::decode(&value)? {
            ClockEventPayload::Native(items) => {
                items.into_iter().map(ClockEvent::from_wire).collect()
            }
            ClockEventPayload::Placeholder(posts) => {
                debug!("adapting {} placeholder posts", posts.len());
                let today = date::today();
                let mut rng = rand::rng();
                posts
                    .into_iter()
                    .take(PLACEHOLDER_EVENT_LIMIT)
                    .map(|p| synthetic::clock_event_from_placeholder(&mut rng, p, today))
                    .collect()
            }
        })
    }

    async fn try_create<B: Serialize>(&self, path: &str, body: &B) -> Result<i64, GatewayError> {
        let body = serde_json::to_value(body)?;
        let response = self.transport.post(path, &body).await?;
        response
            .get("id")
            .and_then(Value::as_i64)
            .ok_or(GatewayError::MissingId)
    }

    /// Keeps the caller's loading state visible as long as a real round trip would.
    async fn degrade(&self) {
        if !self.fallback_delay.is_zero() {
            tokio::time::sleep(self.fallback_delay).await;
        }
    }

    /// Current time in milliseconds, bumped past the previous id when needed.
    fn next_fallback_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_fallback_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}
