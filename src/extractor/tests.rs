//! Unit tests for report extraction

use super::*;
use std::io::Write;

const SAMPLE_REPORT: &str = "\
双色球推荐评估报告
====================
评估时间: 2025-07-16 09:00:00
评估期号: 2025070 (开奖日期: 2025-07-15)
开奖号码: 红球 [2, 3, 15, 21, 22, 33] 蓝球 6
单式中奖: 0注
总奖金: 1,200元
";

#[test]
fn test_extract_full_record() {
    let record = extract(SAMPLE_REPORT).expect("record should parse");
    assert_eq!(record.eval_period.as_deref(), Some("2025070"));
    assert_eq!(record.prize_red, Some(vec![2, 3, 15, 21, 22, 33]));
    assert_eq!(record.prize_blue, Some(6));
    assert_eq!(record.total_prize, Some(1200));
}

#[test]
fn test_extract_no_marker_returns_none() {
    let report = "开奖号码: 红球 [1, 2, 3, 4, 5, 6] 蓝球 7\n总奖金: 100元\n";
    assert!(extract(report).is_none());
}

#[test]
fn test_extract_empty_input() {
    assert!(extract("").is_none());
}

#[test]
fn test_extract_marker_without_fields() {
    let report = "评估时间: 2025-07-16 09:00:00\n这里没有任何可解析的字段\n";
    assert!(extract(report).is_none());
}

#[test]
fn test_extract_partial_record_malformed_draw_line() {
    // Red list contains a non-numeric token: both draw fields are dropped,
    // but the rest of the record survives.
    let report = "\
评估时间: 2025-07-16 09:00:00
评估期号: 2025071
开奖号码: 红球 [2, x, 15, 21, 22, 33] 蓝球 6
总奖金: 300元
";
    let record = extract(report).expect("partial record expected");
    assert_eq!(record.eval_period.as_deref(), Some("2025071"));
    assert!(record.prize_red.is_none());
    assert!(record.prize_blue.is_none());
    assert_eq!(record.total_prize, Some(300));
}

#[test]
fn test_extract_non_numeric_prize_degrades_to_zero() {
    let report = "评估时间: 2025-07-16\n总奖金: 未知元\n";
    let record = extract(report).expect("record expected");
    assert_eq!(record.total_prize, Some(0));
}

#[test]
fn test_extract_thousands_separated_prize() {
    let report = "评估时间: 2025-07-16\n总奖金: 1,234,567元\n";
    let record = extract(report).expect("record expected");
    assert_eq!(record.total_prize, Some(1_234_567));
}

#[test]
fn test_extract_only_first_evaluation_block() {
    // The report is newest-first; only the first marker's window is read,
    // even when the next block starts well inside the 20-line window. The
    // older block must neither overwrite fields nor fill in missing ones.
    let report = "\
评估时间: 2025-07-16 09:00:00
评估期号: 2025071
总奖金: 500元

评估时间: 2025-07-09 09:00:00
评估期号: 2025070
开奖号码: 红球 [2, 3, 15, 21, 22, 33] 蓝球 6
总奖金: 9,999元
";
    let record = extract(report).expect("record expected");
    assert_eq!(record.eval_period.as_deref(), Some("2025071"));
    assert_eq!(record.total_prize, Some(500));
    assert!(record.prize_red.is_none());
    assert!(record.prize_blue.is_none());
}

#[test]
fn test_extract_window_bounds_scan() {
    let filler = "无关行\n".repeat(25);
    let report = format!("评估时间: 2025-07-16\n{}总奖金: 800元\n", filler);
    // The prize line sits outside the 20-line window, so nothing matches.
    assert!(extract(&report).is_none());
}

#[test]
fn test_latest_from_file_missing_path() {
    assert!(latest_from_file("definitely/not/here.txt").is_none());
}

#[test]
fn test_latest_from_file_reads_report() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_REPORT.as_bytes()).unwrap();

    let record = latest_from_file(file.path()).expect("record expected");
    assert_eq!(record.eval_period.as_deref(), Some("2025070"));
    assert_eq!(record.prize_blue, Some(6));
}
