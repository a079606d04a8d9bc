//! Shared data types for extraction, composition, and delivery

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record recovered from the newest evaluation block of the report file.
///
/// Fields are independent: a malformed line drops only its own field, so a
/// partially parsed record is still returned and rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub eval_period: Option<String>,
    pub prize_red: Option<Vec<u32>>,
    pub prize_blue: Option<u32>,
    pub total_prize: Option<u64>,
}

impl VerificationRecord {
    pub fn is_empty(&self) -> bool {
        self.eval_period.is_none()
            && self.prize_red.is_none()
            && self.prize_blue.is_none()
            && self.total_prize.is_none()
    }
}

/// Full verification-report input supplied by the analysis pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationData {
    pub eval_period: String,
    pub prize_red: Vec<u32>,
    pub prize_blue: u32,
    /// Prize won by single-bet recommendations, in yuan.
    pub rec_prize: u64,
    /// Prize won by the complex bet, in yuan.
    pub com_prize: u64,
    pub total_prize: u64,
    /// Prize tier → winning count for single bets; zero tiers are omitted
    /// from the rendered summary.
    pub rec_breakdown: BTreeMap<String, u32>,
    pub com_breakdown: BTreeMap<String, u32>,
    /// Number of single / complex bets evaluated, used for cost estimation.
    pub rec_count: usize,
    pub com_count: usize,
}

impl VerificationData {
    pub fn total_bets(&self) -> usize {
        self.rec_count + self.com_count
    }
}

/// Pooled complex-bet selection. Entries are display strings, already
/// zero-padded by the analysis pipeline; no range validation happens here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplexPool {
    pub red: Vec<String>,
    pub blue: Vec<String>,
}

impl ComplexPool {
    pub fn new(red: Vec<String>, blue: Vec<String>) -> Self {
        Self { red, blue }
    }

    /// C(|red|, 6) × |blue|; zero when fewer than six reds are pooled.
    pub fn combinations(&self) -> u64 {
        if self.red.len() < 6 {
            return 0;
        }
        binomial(self.red.len() as u64, 6) * self.blue.len() as u64
    }

    /// Total stake at 2 yuan per single bet.
    pub fn cost(&self) -> u64 {
        self.combinations() * 2
    }

    /// A pool renders only when both colors are present.
    pub fn is_complete(&self) -> bool {
        !self.red.is_empty() && !self.blue.is_empty()
    }
}

/// Binomial coefficient C(n, k). The intermediate product is exact at every
/// step, so plain integer division is safe.
pub(crate) fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1))
}

/// Hyperparameter-optimization outcome attached to an analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptunaSummary {
    pub status: String,
    pub best_value: f64,
}

/// Recent backtest outcome: prize tier → hit count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BacktestStats {
    pub prize_counts: BTreeMap<String, u32>,
}

/// A rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    pub title: String,
    pub body: String,
}

/// Normalized outcome of one delivery attempt. Exactly one attempt is made;
/// both transport and gateway failures land here instead of propagating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushResult {
    pub success: bool,
    /// Raw WxPusher response body, when one was received.
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
}

impl PushResult {
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
