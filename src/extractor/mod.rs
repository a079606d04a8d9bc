//! Verification-result extraction
//!
//! The analysis pipeline appends free-form evaluation blocks to a text
//! report; this module recovers the newest verification record from it with
//! a small tolerant line grammar. Parsing is best-effort: a malformed field
//! is skipped, and any failure at the file level degrades to `None`.

use crate::error::NotifyError;
use crate::types::VerificationRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

#[cfg(test)]
mod tests;

static RED_BALLS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"红球\s*\[([^\]]+)\]").expect("static regex compile"));
static BLUE_BALL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"蓝球\s*(\d+)").expect("static regex compile"));

/// Marker opening an evaluation block.
const EVAL_MARKER: &str = "评估时间:";
/// Lines scanned forward from the marker before giving up on a field.
const SCAN_WINDOW: usize = 20;

/// Extract the newest verification record from report text.
///
/// Scans for the first `评估时间:` marker and collects the period, draw
/// numbers, and total prize from the following window. Returns `None` when
/// no marker exists or the marker's window yields no field at all.
pub fn extract(report: &str) -> Option<VerificationRecord> {
    let lines: Vec<&str> = report.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if !line.starts_with(EVAL_MARKER) {
            continue;
        }

        let mut record = VerificationRecord::default();
        for (j, line) in lines.iter().enumerate().skip(i).take(SCAN_WINDOW) {
            // The window must not bleed into the next (older) block.
            if j != i && line.starts_with(EVAL_MARKER) {
                break;
            }
            if let Some(rest) = line.strip_prefix("评估期号") {
                // "评估期号: 2025070 (开奖日期: ...)" → first token after the colon
                if let Some(value) = rest.split(':').nth(1) {
                    if let Some(token) = value.split_whitespace().next() {
                        record.eval_period = Some(token.to_string());
                    }
                }
            } else if line.starts_with("开奖号码:") {
                parse_draw_line(line, &mut record);
            } else if let Some(rest) = line.strip_prefix("总奖金:") {
                let amount = rest.trim().replace('元', "").replace(',', "");
                record.total_prize = Some(amount.parse().unwrap_or(0));
            }
        }

        return if record.is_empty() { None } else { Some(record) };
    }

    None
}

/// "开奖号码: 红球 [2, 3, 15, 21, 22, 33] 蓝球 6". Red and blue are set
/// together; a non-numeric red list drops both.
fn parse_draw_line(line: &str, record: &mut VerificationRecord) {
    let (Some(reds), Some(blue)) = (RED_BALLS_RE.captures(line), BLUE_BALL_RE.captures(line))
    else {
        return;
    };

    let red_nums: Result<Vec<u32>, _> = reds[1].split(',').map(|s| s.trim().parse()).collect();
    let (Ok(red_nums), Ok(blue_num)) = (red_nums, blue[1].parse()) else {
        return;
    };

    record.prize_red = Some(red_nums);
    record.prize_blue = Some(blue_num);
}

/// Read the report file and extract the newest record. Missing file is a
/// normal condition (nothing verified yet); read failures are logged and
/// degrade to `None` as well.
pub fn latest_from_file(path: impl AsRef<Path>) -> Option<VerificationRecord> {
    match load_report(path.as_ref()) {
        Ok(Some(content)) => extract(&content),
        Ok(None) => None,
        Err(e) => {
            tracing::error!("Failed to load report: {}", e);
            None
        }
    }
}

fn load_report(path: &Path) -> Result<Option<String>, NotifyError> {
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|e| NotifyError::Parse(format!("{}: {}", path.display(), e)))
}
