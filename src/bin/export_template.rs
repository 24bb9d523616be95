// ==========================================
// 设备维护KPI看板 - CSV 模板导出工具
// ==========================================
// 用途: 把导入模板写到指定目录（缺省为系统下载目录）
// 用法: export_template [目录]
// ==========================================

use maintenance_kpi_dashboard::importer::write_template;
use maintenance_kpi_dashboard::logging;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let dir = args.get(1).map(|s| Path::new(s.as_str()).to_path_buf());

    let path = write_template(dir.as_deref())?;
    println!("{}", path.display());

    Ok(())
}
