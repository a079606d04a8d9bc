//! Message composition
//!
//! The six fixed WxPusher message templates: analysis report, full
//! recommendation list, verification report, error notice, daily summary,
//! and connectivity test. Composition is pure string assembly apart from the
//! embedded generation timestamp; delivery belongs to the pusher.
//!
//! Lottery numbers are rendered zero-padded to two digits without range
//! validation; out-of-range input passes through unchanged.

use crate::types::{
    BacktestStats, ComplexPool, ComposedMessage, OptunaSummary, VerificationData,
    VerificationRecord,
};
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;


// Recommendation strings look like "注 1: 红球 [01 17 18 22 27 32] 蓝球 [15]".
static REC_RED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"红球\s*\[([^\]]+)\]").expect("static regex compile"));
static REC_BLUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"蓝球\s*\[(\d+)\]").expect("static regex compile"));

/// The full recommendation list is split after this many entries to keep
/// each message block below the WxPusher length limit.
const FULL_LIST_SPLIT: usize = 8;

/// Analysis report: compact recommendation summary plus optional complex,
/// optimization, backtest, and latest-verification blocks.
pub fn analysis_report(
    period: u32,
    recommendations: &[String],
    complex: Option<&ComplexPool>,
    optuna: Option<&OptunaSummary>,
    backtest: Option<&BacktestStats>,
    latest: Option<&VerificationRecord>,
) -> ComposedMessage {
    let title = format!("🎯 双色球第{}期预测报告", period);

    let mut rec_summary = String::new();
    for (i, rec) in recommendations.iter().enumerate() {
        match parse_recommendation(rec) {
            Some((reds, blue)) => {
                rec_summary.push_str(&format!("第{:2}注: {} + {}\n", i + 1, reds, blue))
            }
            // Keep the raw string so one malformed entry never loses a line.
            None => rec_summary.push_str(&format!("第{:2}注: {}\n", i + 1, rec)),
        }
    }

    let complex_summary = complex
        .filter(|p| p.is_complete())
        .map(analysis_complex_block)
        .unwrap_or_default();

    let optuna_info = optuna
        .filter(|s| s.status == "完成")
        .map(|s| format!("🔬 Optuna优化得分: {:.2}\n", s.best_value))
        .unwrap_or_default();

    let backtest_info = backtest
        .map(|s| backtest_line(&s.prize_counts))
        .unwrap_or_default();

    let verification_summary = latest.map(verification_block).unwrap_or_default();

    let body = format!(
        "🎯 双色球第{}期AI智能预测

📊 单式推荐 (共{}注)：
{}
{}
{}
📈 分析要点：
• 基于机器学习LightGBM算法
• 结合历史频率和遗漏分析
• 运用关联规则挖掘技术
• 多因子加权评分优选
{}{}
⏰ 生成时间：{}

💡 仅供参考，理性投注！祝您好运！",
        period,
        recommendations.len(),
        rec_summary.trim(),
        complex_summary,
        verification_summary,
        optuna_info,
        backtest_info,
        now_minutes(),
    );

    ComposedMessage { title, body }
}

/// Full recommendation list: every entry, split into a leading block of
/// [`FULL_LIST_SPLIT`] and the remainder purely for message length.
pub fn full_recommendations(
    period: u32,
    recommendations: &[String],
    complex: Option<&ComplexPool>,
    latest: Option<&VerificationRecord>,
) -> ComposedMessage {
    let title = format!("🎯 双色球第{}期完整推荐", period);

    let mut parts: Vec<String> = vec![title.clone()];

    if let Some(latest) = latest {
        parts.push(verification_block(latest).trim().to_string());
    }

    parts.push(format!("📊 全部{}注单式推荐：", recommendations.len()));

    let lines: Vec<String> = recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| match parse_recommendation(rec) {
            Some((reds, blue)) => format!("{:2}. {} + {}", i + 1, reds, blue),
            None => format!("{:2}. {}", i + 1, rec),
        })
        .collect();

    let head = lines.len().min(FULL_LIST_SPLIT);
    parts.push(format!("前{}注：", head));
    parts.extend(lines[..head].iter().cloned());
    if lines.len() > FULL_LIST_SPLIT {
        parts.push(format!("\n后{}注：", lines.len() - FULL_LIST_SPLIT));
        parts.extend(lines[FULL_LIST_SPLIT..].iter().cloned());
    }

    if let Some(pool) = complex.filter(|p| p.is_complete()) {
        parts.extend([
            String::new(),
            "📦 复式参考：".to_string(),
            format!("红球({}个): {}", pool.red.len(), pool.red.join(" ")),
            format!("蓝球({}个): {}", pool.blue.len(), pool.blue.join(" ")),
            format!(
                "💰 成本: {}元 ({}注)",
                group_thousands(pool.cost() as i64),
                group_thousands(pool.combinations() as i64)
            ),
        ]);
    }

    parts.extend([
        String::new(),
        format!("⏰ 生成时间：{}", now_minutes()),
        "💡 仅供参考，理性投注！".to_string(),
    ]);

    ComposedMessage {
        title,
        body: parts.join("\n"),
    }
}

/// Verification report: winning numbers, prize breakdowns, and the return
/// on the evaluated bets. With zero bets the return rate is undefined and
/// renders as "--" instead of dividing by zero.
pub fn verification_report(data: &VerificationData) -> ComposedMessage {
    let title = format!("✅ 双色球第{}期验证报告", data.eval_period);

    let cost = data.total_bets() as i64 * 2;
    let net = data.total_prize as i64 - cost;
    let rate = if cost > 0 {
        format!("{:.2}%", net as f64 / cost as f64 * 100.0)
    } else {
        "--".to_string()
    };

    let body = format!(
        "✅ 双色球第{}期开奖验证

🎱 开奖号码：
红球：{}
蓝球：{:02}

📊 验证结果：
单式推荐：{}
复式推荐：{}
总奖金：{}元

💰 投资回报：
估算成本：{}元（按单注2元计算）
收益：{}元
回报率：{}

⏰ 验证时间：{}",
        data.eval_period,
        join_padded(&data.prize_red),
        data.prize_blue,
        breakdown_summary(data.rec_prize, &data.rec_breakdown),
        breakdown_summary(data.com_prize, &data.com_breakdown),
        group_thousands(data.total_prize as i64),
        group_thousands(cost),
        group_thousands(net),
        rate,
        now_minutes(),
    );

    ComposedMessage { title, body }
}

/// Error notice with the failing component and the verbatim error text.
pub fn error_notification(error_msg: &str, script_name: &str) -> ComposedMessage {
    let title = format!("⚠️ {}运行异常", script_name);

    let body = format!(
        "⚠️ 系统运行异常通知

📍 异常位置：{}
🕒 发生时间：{}
❌ 错误信息：
{}

请及时检查系统状态！",
        script_name,
        now_seconds(),
        error_msg,
    );

    ComposedMessage { title, body }
}

/// Daily run summary with one status glyph per scheduled task.
pub fn daily_summary(
    analysis_ok: bool,
    verification_ok: bool,
    analysis_file: Option<&str>,
    error_msg: Option<&str>,
) -> ComposedMessage {
    let title = "📊 双色球系统日报".to_string();

    let mut body = format!(
        "📊 双色球AI预测系统日报

🕒 运行时间：{}

📈 任务执行状态：
{} 数据分析与预测
{} 历史验证计算

📁 生成文件：",
        now_minutes(),
        status_glyph(analysis_ok),
        status_glyph(verification_ok),
    );

    if let Some(file) = analysis_file {
        body.push_str(&format!("\n• {}", file));
    }
    if let Some(err) = error_msg {
        body.push_str(&format!("\n\n⚠️ 异常信息：\n{}", err));
    }
    body.push_str("\n\n🔔 系统已自动完成定时任务");

    ComposedMessage { title, body }
}

/// Connectivity self-test message.
pub fn connectivity_test() -> ComposedMessage {
    ComposedMessage {
        title: "🔧 推送测试".to_string(),
        body: format!(
            "🔧 双色球推送系统测试\n\n测试时间：{}\n\n如收到此消息，说明推送功能正常！",
            now_seconds()
        ),
    }
}

/// Pull the red list and blue number out of one recommendation string,
/// zero-padded for display. `None` when either pattern is missing.
fn parse_recommendation(rec: &str) -> Option<(String, String)> {
    let red = REC_RED_RE.captures(rec)?;
    let blue = REC_BLUE_RE.captures(rec)?;

    let reds: Vec<String> = red[1]
        .split_whitespace()
        .filter_map(|t| t.parse::<u32>().ok())
        .map(|n| format!("{:02}", n))
        .collect();
    let blue_num: u32 = blue[1].parse().ok()?;

    Some((reds.join(" "), format!("{:02}", blue_num)))
}

fn analysis_complex_block(pool: &ComplexPool) -> String {
    format!(
        "\n📦 复式参考：
红球({}个): {}
蓝球({}个): {}

💡 复式共可组成 {} 注
💰 投注成本: {} 元(单注2元)",
        pool.red.len(),
        pool.red.join(" "),
        pool.blue.len(),
        pool.blue.join(" "),
        group_thousands(pool.combinations() as i64),
        group_thousands(pool.cost() as i64),
    )
}

fn verification_block(latest: &VerificationRecord) -> String {
    format!(
        "\n📅 最新验证（第{}期）：\n🎱 开奖: 红球 {} 蓝球 {:02}\n💰 中奖: {}元\n",
        latest.eval_period.as_deref().unwrap_or("未知"),
        join_padded(latest.prize_red.as_deref().unwrap_or(&[])),
        latest.prize_blue.unwrap_or(0),
        latest.total_prize.unwrap_or(0),
    )
}

/// "📊 最近回测: 3x1, 5x4" — empty when no tier has a hit.
fn backtest_line(prize_counts: &BTreeMap<String, u32>) -> String {
    let hits: Vec<String> = prize_counts
        .iter()
        .filter(|(_, &count)| count > 0)
        .map(|(tier, count)| format!("{}x{}", tier, count))
        .collect();

    if hits.is_empty() {
        String::new()
    } else {
        format!("📊 最近回测: {}\n", hits.join(", "))
    }
}

/// "无中奖" when nothing was won; zero tiers omitted from the breakdown.
fn breakdown_summary(prize: u64, breakdown: &BTreeMap<String, u32>) -> String {
    if prize == 0 {
        return "无中奖".to_string();
    }

    let details: Vec<String> = breakdown
        .iter()
        .filter(|(_, &count)| count > 0)
        .map(|(level, count)| format!("{}等奖x{}", level, count))
        .collect();

    if details.is_empty() {
        "中奖但无详情".to_string()
    } else {
        details.join(", ")
    }
}

fn status_glyph(ok: bool) -> &'static str {
    if ok {
        "✅"
    } else {
        "❌"
    }
}

fn join_padded(nums: &[u32]) -> String {
    nums.iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Thousands-separated rendering, sign preserved.
pub(crate) fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(d);
    }
    out
}

fn now_minutes() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

fn now_seconds() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
