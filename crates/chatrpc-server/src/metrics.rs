//! Prometheus metrics collection and formatting.
//!
//! This module provides metrics in Prometheus text exposition format.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use chatrpc_proto::Procedure;

use crate::state::AppState;

/// Call outcome recorded per procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Error,
}

impl Outcome {
    fn label(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Lock-free call counters, one pair per procedure.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    ok: [AtomicU64; Procedure::ALL.len()],
    error: [AtomicU64; Procedure::ALL.len()],
}

impl RequestMetrics {
    /// Count one call.
    pub fn record(&self, procedure: Procedure, outcome: Outcome) {
        self.counter(procedure, outcome).fetch_add(1, Ordering::Relaxed);
    }

    /// Current count for a procedure/outcome pair.
    pub fn get(&self, procedure: Procedure, outcome: Outcome) -> u64 {
        self.counter(procedure, outcome).load(Ordering::Relaxed)
    }

    fn counter(&self, procedure: Procedure, outcome: Outcome) -> &AtomicU64 {
        let idx = Procedure::ALL
            .iter()
            .position(|p| *p == procedure)
            .unwrap_or_default();
        match outcome {
            Outcome::Ok => &self.ok[idx],
            Outcome::Error => &self.error[idx],
        }
    }
}

/// Collect all metrics from AppState and format as Prometheus text.
pub fn collect_metrics(state: &AppState) -> String {
    let mut output = String::new();

    collect_store_metrics(state, &mut output);
    collect_request_metrics(state, &mut output);

    output
}

/// Collect message store metrics.
fn collect_store_metrics(state: &AppState, output: &mut String) {
    writeln!(
        output,
        "# HELP chatrpc_messages_total Number of messages in the store"
    )
    .ok();
    writeln!(output, "# TYPE chatrpc_messages_total gauge").ok();
    writeln!(output, "chatrpc_messages_total {}", state.message_count()).ok();
}

/// Collect procedure call counters.
fn collect_request_metrics(state: &AppState, output: &mut String) {
    writeln!(output).ok();
    writeln!(
        output,
        "# HELP chatrpc_requests_total Procedure calls by procedure and outcome"
    )
    .ok();
    writeln!(output, "# TYPE chatrpc_requests_total counter").ok();

    for procedure in Procedure::ALL {
        for outcome in [Outcome::Ok, Outcome::Error] {
            writeln!(
                output,
                "chatrpc_requests_total{{procedure=\"{}\",outcome=\"{}\"}} {}",
                procedure.name(),
                outcome.label(),
                state.metrics.get(procedure, outcome)
            )
            .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_metrics_empty_state() {
        let state = AppState::new();
        let output = collect_metrics(&state);

        assert!(output.contains("# TYPE chatrpc_messages_total gauge"));
        assert!(output.contains("chatrpc_messages_total 0"));
        assert!(output
            .contains("chatrpc_requests_total{procedure=\"greeting\",outcome=\"ok\"} 0"));
        assert!(output
            .contains("chatrpc_requests_total{procedure=\"addMessage\",outcome=\"error\"} 0"));
    }

    #[test]
    fn test_record_counts_per_outcome() {
        let state = AppState::new();
        state.metrics.record(Procedure::AddMessage, Outcome::Ok);
        state.metrics.record(Procedure::AddMessage, Outcome::Ok);
        state.metrics.record(Procedure::AddMessage, Outcome::Error);
        state.store.append("A", "hi");

        assert_eq!(state.metrics.get(Procedure::AddMessage, Outcome::Ok), 2);
        assert_eq!(state.metrics.get(Procedure::GetMessages, Outcome::Ok), 0);

        let output = collect_metrics(&state);
        assert!(output.contains("chatrpc_messages_total 1"));
        assert!(output
            .contains("chatrpc_requests_total{procedure=\"addMessage\",outcome=\"ok\"} 2"));
        assert!(output
            .contains("chatrpc_requests_total{procedure=\"addMessage\",outcome=\"error\"} 1"));
    }
}
