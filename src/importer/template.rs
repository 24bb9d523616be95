// ==========================================
// 设备维护KPI看板 - CSV 模板生成
// ==========================================
// 职责: 生成可下载的参考模板（表头 + 固定示例行）
// 用途: 用户准备自有数据文件的格式参考
// ==========================================

use crate::importer::error::ImportResult;
use std::path::{Path, PathBuf};

/// 模板文件名
pub const TEMPLATE_FILE_NAME: &str = "modelo-dashboard-manutencao.csv";

/// 模板内容: 表头 + 三台示例设备 × 四个月
pub const TEMPLATE_CSV: &str = "\
id,name,category,month,MTBF,MTTR,Disponibilidade,Custo,Status
comp-a1,Compressor A1,Compressão,Mai,280,3.4,90,0.5,Operacional
comp-a1,Compressor A1,Compressão,Jun,310,3.1,92,0.45,Operacional
comp-a1,Compressor A1,Compressão,Jul,360,2.8,95,0.4,Operacional
comp-a1,Compressor A1,Compressão,Ago,390,2.6,96,0.35,Operacional
este-b2,Esteira B2,Movimentação,Mai,330,2.7,93,0.38,Manutenção Programada
este-b2,Esteira B2,Movimentação,Jun,360,2.6,95,0.36,Manutenção Programada
este-b2,Esteira B2,Movimentação,Jul,410,2.4,97,0.34,Manutenção Programada
este-b2,Esteira B2,Movimentação,Ago,440,2.2,98,0.33,Manutenção Programada
motor-c3,Motor C3,Motorização,Mai,270,3.2,91,0.62,Parado
motor-c3,Motor C3,Motorização,Jun,295,3.0,92,0.58,Parado
motor-c3,Motor C3,Motorização,Jul,330,2.9,94,0.56,Parado
motor-c3,Motor C3,Motorização,Ago,365,2.7,95,0.52,Parado
";

/// 写出模板文件
///
/// # 参数
/// - `dir`: 目标目录; 缺省为系统下载目录, 不可用时回退当前目录
///
/// # 返回
/// 写出的完整路径
pub fn write_template(dir: Option<&Path>) -> ImportResult<PathBuf> {
    let target_dir = match dir {
        Some(d) => d.to_path_buf(),
        None => dirs::download_dir().unwrap_or(std::env::current_dir()?),
    };

    let path = target_dir.join(TEMPLATE_FILE_NAME);
    std::fs::write(&path, TEMPLATE_CSV)?;
    tracing::info!("模板已写出: {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::equipment_importer::CsvEquipmentImporter;
    use crate::importer::file_parser::{CsvParser, FileParser};

    #[test]
    fn test_write_template_并可回读() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(Some(dir.path())).unwrap();
        assert!(path.ends_with(TEMPLATE_FILE_NAME));

        // 模板必须能通过自家导入管道解析
        let rows = CsvParser.parse_to_rows(&path).unwrap();
        assert_eq!(rows.len(), 12);

        let (equipments, skipped) = CsvEquipmentImporter::build_equipments(&rows).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(equipments.len(), 3);
        for equipment in &equipments {
            assert_eq!(equipment.history.len(), 4);
        }
        assert_eq!(equipments[2].status, "Parado");
    }
}
