//! WxPusher delivery gateway
//!
//! One POST per message against `<base>/api/send/message`, bounded by a 30s
//! timeout. Exactly one attempt: no retry, no backoff. Transport and gateway
//! failures are folded into [`PushResult`] so callers never unwind.

use crate::composer;
use crate::config::Config;
use crate::error::{NotifyError, Result};
use crate::extractor;
use crate::types::{
    BacktestStats, ComplexPool, ComposedMessage, OptunaSummary, PushResult, VerificationData,
};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;


const SEND_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_TITLE: &str = "双色球推荐更新";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest<'a> {
    app_token: &'a str,
    content: &'a str,
    uids: &'a [String],
    topic_ids: &'a [i64],
    summary: &'a str,
    /// 1 = plain text, 2 = HTML. Always plain text here.
    content_type: u8,
}

/// WxPusher client. Configuration is captured at construction and read-only
/// afterwards; concurrent sends share nothing mutable.
pub struct WxPusher {
    http: Client,
    config: Config,
    timeout: Duration,
}

impl WxPusher {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
            timeout: SEND_TIMEOUT,
        }
    }

    /// Override the per-request timeout (tests use a short one against a
    /// stalled endpoint).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send one message. `uids` / `topic_ids` override the configured
    /// defaults when given. Never errors: every failure kind lands in the
    /// returned [`PushResult`].
    pub async fn send(
        &self,
        content: &str,
        title: Option<&str>,
        uids: Option<&[String]>,
        topic_ids: Option<&[i64]>,
    ) -> PushResult {
        match self.try_send(content, title, uids, topic_ids).await {
            Ok(data) => {
                tracing::info!("Push delivered: {}", title.unwrap_or(DEFAULT_TITLE));
                PushResult::ok(data)
            }
            // The remote `msg` goes through verbatim; transport errors keep
            // the descriptive prefix from the error display.
            Err(NotifyError::Gateway(msg)) => {
                tracing::error!("WxPusher rejected message: {}", msg);
                PushResult::failed(msg)
            }
            Err(e) => {
                tracing::error!("Push delivery failed: {}", e);
                PushResult::failed(e.to_string())
            }
        }
    }

    async fn try_send(
        &self,
        content: &str,
        title: Option<&str>,
        uids: Option<&[String]>,
        topic_ids: Option<&[i64]>,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/api/send/message", self.config.base_url);
        let request = SendMessageRequest {
            app_token: &self.config.app_token,
            content,
            uids: uids.unwrap_or(&self.config.user_uids),
            topic_ids: topic_ids.unwrap_or(&self.config.topic_ids),
            summary: title.unwrap_or(DEFAULT_TITLE),
            content_type: 1,
        };

        let response = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        if body.get("success").and_then(|v| v.as_bool()).unwrap_or(false) {
            Ok(body)
        } else {
            let msg = body
                .get("msg")
                .and_then(|v| v.as_str())
                .unwrap_or("推送失败")
                .to_string();
            Err(NotifyError::Gateway(msg))
        }
    }

    async fn send_composed(&self, message: &ComposedMessage) -> PushResult {
        self.send(&message.body, Some(&message.title), None, None)
            .await
    }

    /// Compose and push the per-period analysis report. The latest
    /// verification block comes from the configured report file when it is
    /// present and parseable.
    pub async fn send_analysis_report(
        &self,
        period: u32,
        recommendations: &[String],
        complex: Option<&ComplexPool>,
        optuna: Option<&OptunaSummary>,
        backtest: Option<&BacktestStats>,
    ) -> PushResult {
        let latest = extractor::latest_from_file(&self.config.report_path);
        let message = composer::analysis_report(
            period,
            recommendations,
            complex,
            optuna,
            backtest,
            latest.as_ref(),
        );
        self.send_composed(&message).await
    }

    /// Compose and push the complete recommendation list.
    pub async fn send_full_recommendations(
        &self,
        period: u32,
        recommendations: &[String],
        complex: Option<&ComplexPool>,
    ) -> PushResult {
        let latest = extractor::latest_from_file(&self.config.report_path);
        let message =
            composer::full_recommendations(period, recommendations, complex, latest.as_ref());
        self.send_composed(&message).await
    }

    /// Compose and push a draw verification report.
    pub async fn send_verification_report(&self, data: &VerificationData) -> PushResult {
        let message = composer::verification_report(data);
        self.send_composed(&message).await
    }

    /// Compose and push an error notice.
    pub async fn send_error_notification(&self, error_msg: &str, script_name: &str) -> PushResult {
        let message = composer::error_notification(error_msg, script_name);
        self.send_composed(&message).await
    }

    /// Compose and push the daily run summary.
    pub async fn send_daily_summary(
        &self,
        analysis_ok: bool,
        verification_ok: bool,
        analysis_file: Option<&str>,
        error_msg: Option<&str>,
    ) -> PushResult {
        let message = composer::daily_summary(analysis_ok, verification_ok, analysis_file, error_msg);
        self.send_composed(&message).await
    }

    /// Push the connectivity self-test message.
    pub async fn test_connection(&self) -> bool {
        let message = composer::connectivity_test();
        self.send_composed(&message).await.success
    }
}
