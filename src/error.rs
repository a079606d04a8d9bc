//! Error types for the notification pipeline
//!
//! Every failure is handled locally and folded into a value; nothing in the
//! library surface panics or unwinds past the caller.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotifyError>;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// Report file unreadable or a field failed to parse. Callers degrade to
    /// an absent (or partial) record instead of propagating this.
    #[error("报告解析失败: {0}")]
    Parse(String),

    /// Network-level failure talking to WxPusher: refused connection,
    /// timeout, non-2xx status, malformed response body.
    #[error("网络错误: {0}")]
    Transport(#[from] reqwest::Error),

    /// WxPusher accepted the request but reported a logical failure through
    /// its own `success` flag. Carries the remote `msg` verbatim.
    #[error("推送失败: {0}")]
    Gateway(String),
}
