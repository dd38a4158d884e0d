//! Tests for the fetch coordinator
//!
//! Shared mock lookup client and fixtures. Timing-sensitive tests run
//! under tokio's paused clock, so debounce windows and request latencies
//! are exact virtual durations.


use crate::Result;
use crate::app::models::{CarPark, Location};
use crate::app::services::fetch_coordinator::client::{
    NearbyLookup, NearbyRequest, NearbyResponse,
};
use crate::config::FetchConfig;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Scripted outcome for one mock lookup call
#[derive(Debug, Clone, Copy)]
pub enum MockOutcome {
    Success,
    Failure,
}

/// A scripted [`NearbyLookup`] recording every call with its virtual time
pub struct MockNearbyClient {
    /// Latency simulated before each call settles
    delay: Duration,
    /// Per-call outcomes; calls beyond the script succeed
    outcomes: Mutex<VecDeque<MockOutcome>>,
    /// Recorded requests with their dispatch instants
    calls: Mutex<Vec<(NearbyRequest, Instant)>>,
}

impl MockNearbyClient {
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
            outcomes: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Simulate request latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Script the outcomes of successive calls
    pub fn with_outcomes(self, outcomes: Vec<MockOutcome>) -> Self {
        *self.outcomes.lock().unwrap() = outcomes.into();
        self
    }

    /// Requests received so far, with dispatch instants
    pub fn calls(&self) -> Vec<(NearbyRequest, Instant)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl NearbyLookup for MockNearbyClient {
    async fn fetch_nearby(&self, request: NearbyRequest) -> Result<NearbyResponse> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((request, Instant::now()));
            calls.len()
        };
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockOutcome::Success);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match outcome {
            MockOutcome::Success => Ok(create_test_response(call_number)),
            MockOutcome::Failure => Err(crate::Error::nearby_lookup_message(format!(
                "scripted failure on call {call_number}"
            ))),
        }
    }
}

/// Response whose single car park encodes which call produced it
pub fn create_test_response(call_number: usize) -> NearbyResponse {
    NearbyResponse {
        car_parks: vec![CarPark {
            car_park_id: format!("CP-call-{call_number}"),
            ..CarPark::default()
        }],
        ev_stations: Vec::new(),
    }
}

/// Fetch configuration with a 150 ms debounce window
pub fn create_test_config() -> FetchConfig {
    FetchConfig {
        debounce_window_ms: 150,
        ..FetchConfig::default()
    }
}

/// Two distinct query locations
pub fn location_a() -> Location {
    Location::new(1.3521, 103.8198)
}

pub fn location_b() -> Location {
    Location::new(1.2902, 103.8520)
}
