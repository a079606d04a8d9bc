//! WxPusher notifications for 双色球 (SSQ) lottery analysis
//!
//! CLI around the notification library; the self-test mirrors the manual
//! check run after deploying new pipeline credentials.

use clap::{Parser, Subcommand};
use ssq_notify::{
    config::Config,
    pusher::WxPusher,
    types::{ComplexPool, PushResult, VerificationData},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ssq-notify")]
#[command(about = "WxPusher notifications for SSQ lottery analysis reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send the connectivity test message
    TestNotify,
    /// Push every message type once with sample data
    SelfTest,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let pusher = WxPusher::new(config);

    match cli.command {
        Commands::TestNotify => test_notify(&pusher).await,
        Commands::SelfTest => self_test(&pusher).await,
    }
}

async fn test_notify(pusher: &WxPusher) -> anyhow::Result<()> {
    if pusher.test_connection().await {
        println!("✅ 微信推送测试成功！");
    } else {
        println!("❌ 微信推送测试失败！请检查配置。");
    }
    Ok(())
}

/// Push all message templates with literal sample data, reporting each
/// delivery on stdout.
async fn self_test(pusher: &WxPusher) -> anyhow::Result<()> {
    println!("正在测试双色球微信推送功能...");

    if !pusher.test_connection().await {
        println!("❌ 微信推送测试失败！请检查配置。");
        return Ok(());
    }
    println!("✅ 微信推送测试成功！");

    let recommendations = sample_recommendations();
    let pool = ComplexPool::new(
        ["01", "02", "03", "04", "05", "06", "07"]
            .map(String::from)
            .to_vec(),
        ["08", "09", "10"].map(String::from).to_vec(),
    );

    println!("测试分析报告推送...");
    // The summary report only carries the first five picks.
    let result = pusher
        .send_analysis_report(2025071, &recommendations[..5], Some(&pool), None, None)
        .await;
    print_result("分析报告", &result);

    println!("测试完整推荐推送...");
    let result = pusher
        .send_full_recommendations(2025071, &recommendations, Some(&pool))
        .await;
    print_result("完整推荐", &result);

    println!("测试验证报告推送...");
    let verification = VerificationData {
        eval_period: "2025070".to_string(),
        prize_red: vec![2, 3, 15, 21, 22, 33],
        prize_blue: 6,
        ..Default::default()
    };
    let result = pusher.send_verification_report(&verification).await;
    print_result("验证报告", &result);

    Ok(())
}

fn print_result(name: &str, result: &PushResult) {
    if result.success {
        println!("✅ {}推送成功", name);
    } else {
        println!(
            "❌ {}推送失败: {}",
            name,
            result.error.as_deref().unwrap_or("未知错误")
        );
    }
}

fn sample_recommendations() -> Vec<String> {
    [
        "注 1: 红球 [01 17 18 22 27 32] 蓝球 [15]",
        "注 2: 红球 [01 06 09 14 17 26] 蓝球 [11]",
        "注 3: 红球 [02 10 20 22 26 32] 蓝球 [16]",
        "注 4: 红球 [06 07 09 22 26 32] 蓝球 [15]",
        "注 5: 红球 [06 14 17 26 27 30] 蓝球 [16]",
        "注 6: 红球 [01 02 03 06 17 22] 蓝球 [01]",
        "注 7: 红球 [01 06 09 17 26 27] 蓝球 [15]",
        "注 8: 红球 [01 07 09 17 26 32] 蓝球 [15]",
        "注 9: 红球 [01 07 10 20 22 26] 蓝球 [11]",
        "注 10: 红球 [01 06 12 17 20 26] 蓝球 [16]",
        "注 11: 红球 [06 07 08 17 26 32] 蓝球 [15]",
        "注 12: 红球 [01 06 07 14 22 27] 蓝球 [06]",
        "注 13: 红球 [08 10 14 19 22 26] 蓝球 [15]",
        "注 14: 红球 [01 05 06 07 18 22] 蓝球 [01]",
        "注 15: 红球 [07 09 17 18 20 26] 蓝球 [16]",
    ]
    .map(String::from)
    .to_vec()
}
