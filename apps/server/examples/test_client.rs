//! 测试客户端 - 演示 ROI 计算和内容搜索 API
//!
//! 运行方式:
//! 1. 先启动服务: cargo run -p realty-server -- serve
//! 2. 运行客户端: cargo run -p realty-server --example test_client

use rpc::{SiteClient, roi::RoiRequest, search::SearchRequest};
use config::AppStrategy;
use tarpc::{client, context, tokio_serde::formats::Bincode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 获取 socket 路径
    let strategy = config::create_strategy()?;
    let runtime_dir = config::resolve_dir("RUNTIME_DIRECTORY", &strategy, |s| s.runtime_dir());
    let socket_path = config::socket_path(&runtime_dir);

    println!("连接到: {:?}", socket_path);

    let transport = tarpc::serde_transport::unix::connect(&socket_path, Bincode::default).await?;
    let client = SiteClient::new(client::Config::default(), transport).spawn();

    println!("\n=== 测试 ping ===");
    let response = client.ping(context::current()).await?;
    println!("Ping 响应: {}", response);

    println!("\n=== ROI 计算 ===");
    let req = RoiRequest {
        purchase_price: "$750,000".to_string(),
        down_payment: "150000".to_string(),
        monthly_rent: "3500".to_string(),
        monthly_expenses: "1000".to_string(),
    };
    let report = client.compute_roi(context::current(), req).await?;
    println!("年租金: {}", report.annual_rent);
    println!("年支出: {}", report.annual_expenses);
    println!("年净收入: {}", report.net_income);
    println!("资本化率: {}%", report.cap_rate);
    println!("现金回报率: {}%", report.cash_on_cash_return);

    for (query, language) in [("flushing", "en"), ("学区房", "zh"), ("condo", "fr")] {
        println!("\n=== 搜索 '{}' ({}) ===", query, language);
        let req = SearchRequest {
            query: query.to_string(),
            language: language.to_string(),
        };
        match client.search(context::current(), req).await? {
            Ok(hits) => {
                println!("找到 {} 个结果", hits.len());
                for (i, hit) in hits.iter().enumerate() {
                    println!("  [{}] {} - {}", i + 1, hit.title_highlighted, hit.summary);
                }
            }
            Err(e) => println!("搜索失败: {}", e),
        }
    }

    Ok(())
}
