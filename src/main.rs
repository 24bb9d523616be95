// ==========================================
// 设备维护KPI看板 - 主入口
// ==========================================
// 用途: 命令行演示 — 对内置数据集（或指定 CSV）跑完整聚合管道,
//       以 JSON 输出看板视图
// 用法: maintenance-kpi-dashboard [周期id] [CSV路径]
// ==========================================

use maintenance_kpi_dashboard::api::{DashboardApi, FilterSelection};
use maintenance_kpi_dashboard::logging;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", maintenance_kpi_dashboard::APP_NAME);
    tracing::info!("系统版本: {}", maintenance_kpi_dashboard::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    let period_id = args.get(1).map(|s| s.as_str()).unwrap_or("3m");

    let mut api = DashboardApi::new();

    // 第二个参数为可选 CSV 路径: 导入成功后替换内置数据集
    if let Some(csv_path) = args.get(2) {
        let report = api.import_csv_file(Path::new(csv_path)).await?;
        tracing::info!(
            "导入批次 {}: {} 行, {} 台设备",
            report.batch_id,
            report.rows_total,
            report.equipments.len()
        );
    }

    let view = api.dashboard(&FilterSelection::period(period_id))?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    let today = chrono::Local::now().date_naive();
    let backlog = api.backlog_summary(today);
    tracing::info!(
        "积压摘要: {} 条工单, {} 条待执行, {} 条逾期, 级别 {}",
        backlog.total_orders,
        backlog.pending_orders,
        backlog.overdue_orders,
        backlog.level
    );

    Ok(())
}
