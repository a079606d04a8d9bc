//! Runtime configuration
//!
//! Everything comes from environment variables so the same binary runs
//! unchanged in CI (GitHub Actions) and locally. Each variable has a
//! hardcoded fallback; configuration is read once at startup and treated
//! as read-only afterwards.

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://wxpusher.zjiecode.com";

const DEFAULT_APP_TOKEN: &str = "AT_FInZJJ0mUU8xvQjKRP7v6omvuHN3Fdqw";
const DEFAULT_USER_UIDS: &str = "UID_yYObqdMVScIa66DGR2n2PCRFL10w";
const DEFAULT_TOPIC_IDS: &str = "39909";
const DEFAULT_REPORT_PATH: &str = "latest_ssq_calculation.txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// WxPusher application token.
    pub app_token: String,
    /// Default recipient UIDs when a send does not override them.
    pub user_uids: Vec<String>,
    /// Default broadcast topic IDs when a send does not override them.
    pub topic_ids: Vec<i64>,
    /// WxPusher API base URL; overridable so tests can point at a stub.
    pub base_url: String,
    /// Path of the analysis pipeline's latest calculation report.
    pub report_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        let uids = env::var("WXPUSHER_USER_UIDS").unwrap_or_else(|_| DEFAULT_USER_UIDS.to_string());
        let topics =
            env::var("WXPUSHER_TOPIC_IDS").unwrap_or_else(|_| DEFAULT_TOPIC_IDS.to_string());

        Self {
            app_token: env::var("WXPUSHER_APP_TOKEN")
                .unwrap_or_else(|_| DEFAULT_APP_TOKEN.to_string()),
            user_uids: split_uid_list(&uids),
            topic_ids: split_topic_list(&topics),
            base_url: env::var("WXPUSHER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            report_path: env::var("SSQ_REPORT_PATH")
                .unwrap_or_else(|_| DEFAULT_REPORT_PATH.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_token: DEFAULT_APP_TOKEN.to_string(),
            user_uids: split_uid_list(DEFAULT_USER_UIDS),
            topic_ids: split_topic_list(DEFAULT_TOPIC_IDS),
            base_url: DEFAULT_BASE_URL.to_string(),
            report_path: DEFAULT_REPORT_PATH.to_string(),
        }
    }
}

/// Comma-separated UID list; blank entries dropped.
pub(crate) fn split_uid_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Comma-separated topic IDs; entries that are not integers are dropped.
pub(crate) fn split_topic_list(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect()
}
