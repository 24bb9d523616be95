// ==========================================
// 设备维护KPI看板 - 设备导入器
// ==========================================
// 职责: 原始行 → 设备/历史结构 (分组、默认值、规范月份排序)
// 红线: 首行确立设备主数据; 同设备同月重复时后写覆盖;
//       空 id 行丢弃并计数; 失败时不得部分替换既有数据集
// ==========================================

use crate::config::{month_index, STATUS_OPERATIONAL};
use crate::domain::types::Criticality;
use crate::domain::{Equipment, MonthlyRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{CsvParser, FileParser};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

// 必需列（Status 大小写不敏感, 单独处理）
const REQUIRED_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "category",
    "month",
    "MTBF",
    "MTTR",
    "Disponibilidade",
    "Custo",
];

// 可选列
const COL_PERFORMANCE: &str = "Performance";
const COL_QUALITY: &str = "Qualidade";
const COL_PREVENTIVE: &str = "Preventivas";
const COL_CORRECTIVE: &str = "Corretivas";
const COL_CRITICALITY: &str = "Criticidade";

// ==========================================
// ImportReport - 导入结果报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// 导入批次标识
    pub batch_id: Uuid,

    /// 导入完成时间
    pub imported_at: DateTime<Utc>,

    /// 数据行总数（不含表头与空白行）
    pub rows_total: usize,

    /// 被丢弃的行数（空 id）
    pub rows_skipped: usize,

    /// 导入的设备列表（历史已按规范月份序排列）
    pub equipments: Vec<Equipment>,
}

// ==========================================
// 导入接口
// ==========================================

/// 设备导入接口（异步边界: 文件读取 + 解析）
#[async_trait]
pub trait EquipmentImport: Send + Sync {
    /// 导入一个分隔符文件, 产出完整物化的设备列表
    async fn import_file(&self, path: &Path) -> ImportResult<ImportReport>;
}

// ==========================================
// CsvEquipmentImporter - CSV 设备导入器
// ==========================================
pub struct CsvEquipmentImporter {
    parser: CsvParser,
}

impl CsvEquipmentImporter {
    /// 创建新的 CSV 设备导入器
    pub fn new() -> Self {
        Self { parser: CsvParser }
    }

    /// 行集 → 设备列表（纯同步核心, 供测试直接调用）
    ///
    /// # 返回
    /// (设备列表, 丢弃行数)
    pub fn build_equipments(
        rows: &[HashMap<String, String>],
    ) -> ImportResult<(Vec<Equipment>, usize)> {
        if rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        Self::validate_columns(&rows[0])?;

        // 分组: 保持首次出现顺序
        let mut equipments: Vec<Equipment> = Vec::new();
        let mut index_by_id: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;

        for row in rows {
            let id = Self::cell(row, "id");
            if id.is_empty() {
                skipped += 1;
                continue;
            }

            let idx = match index_by_id.get(&id).copied() {
                Some(idx) => idx,
                None => {
                    // 首行确立设备主数据
                    let status = Self::status_cell(row);
                    equipments.push(Equipment {
                        id: id.clone(),
                        name: Self::cell(row, "name"),
                        category: Self::cell(row, "category"),
                        status: if status.is_empty() {
                            STATUS_OPERATIONAL.to_string()
                        } else {
                            status
                        },
                        criticality: Criticality::from_str(&Self::cell(row, COL_CRITICALITY)),
                        history: Vec::new(),
                    });
                    index_by_id.insert(id, equipments.len() - 1);
                    equipments.len() - 1
                }
            };

            let month = Self::cell(row, "month");
            if month.is_empty() {
                continue;
            }

            let record = MonthlyRecord {
                month: month.clone(),
                mtbf_h: Self::number(row, "MTBF"),
                mttr_h: Self::number(row, "MTTR"),
                availability_pct: Self::number(row, "Disponibilidade"),
                performance_pct: Self::number(row, COL_PERFORMANCE),
                quality_pct: Self::number(row, COL_QUALITY),
                cost_m: Self::number(row, "Custo"),
                preventive_count: Self::count(row, COL_PREVENTIVE),
                corrective_count: Self::count(row, COL_CORRECTIVE),
            };

            let history = &mut equipments[idx].history;
            // 同设备同月重复: 后写覆盖
            match history.iter_mut().find(|r| r.month == month) {
                Some(existing) => *existing = record,
                None => history.push(record),
            }
        }

        // 历史按规范月份序排列（未知月份排在末尾）
        for equipment in &mut equipments {
            equipment
                .history
                .sort_by_key(|r| month_index(&r.month).unwrap_or(usize::MAX));
        }

        Ok((equipments, skipped))
    }

    // ==========================================
    // 单元格读取
    // ==========================================

    fn validate_columns(row: &HashMap<String, String>) -> ImportResult<()> {
        for column in REQUIRED_COLUMNS {
            if !row.contains_key(column) {
                return Err(ImportError::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }

    fn cell(row: &HashMap<String, String>, column: &str) -> String {
        row.get(column).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Status 列大小写不敏感
    fn status_cell(row: &HashMap<String, String>) -> String {
        let value = Self::cell(row, "Status");
        if !value.is_empty() {
            return value;
        }
        Self::cell(row, "status")
    }

    /// 数值列: 缺失或非数值按 0
    fn number(row: &HashMap<String, String>, column: &str) -> f64 {
        Self::cell(row, column).parse::<f64>().unwrap_or(0.0)
    }

    /// 可选计数列: 列缺失或空白为 None, 非数值按 0
    fn count(row: &HashMap<String, String>, column: &str) -> Option<u32> {
        let value = Self::cell(row, column);
        if value.is_empty() {
            return None;
        }
        Some(value.parse::<u32>().unwrap_or(0))
    }
}

impl Default for CsvEquipmentImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EquipmentImport for CsvEquipmentImporter {
    async fn import_file(&self, path: &Path) -> ImportResult<ImportReport> {
        let owned: PathBuf = path.to_path_buf();
        tracing::info!("开始导入: {}", owned.display());

        // 文件读取与解析为阻塞操作, 移出异步执行器
        let rows = {
            let parser = self.parser;
            let parser_path = owned.clone();
            tokio::task::spawn_blocking(move || parser.parse_to_rows(&parser_path))
                .await
                .map_err(|e| ImportError::InternalError(e.to_string()))??
        };

        let rows_total = rows.len();
        let (equipments, rows_skipped) = Self::build_equipments(&rows)?;

        tracing::info!(
            "导入完成: {} 行 → {} 台设备 (丢弃 {} 行)",
            rows_total,
            equipments.len(),
            rows_skipped
        );

        Ok(ImportReport {
            batch_id: Uuid::new_v4(),
            imported_at: Utc::now(),
            rows_total,
            rows_skipped,
            equipments,
        })
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base_row(id: &str, month: &str, mtbf: &str) -> HashMap<String, String> {
        row(&[
            ("id", id),
            ("name", "Equipamento"),
            ("category", "Teste"),
            ("month", month),
            ("MTBF", mtbf),
            ("MTTR", "2.5"),
            ("Disponibilidade", "95"),
            ("Custo", "0.4"),
            ("Status", "Operacional"),
        ])
    }

    #[test]
    fn test_build_分组与月份排序() {
        // 乱序月份 + 两台设备
        let rows = vec![
            base_row("e1", "Ago", "390"),
            base_row("e2", "Jul", "410"),
            base_row("e1", "Mai", "280"),
            base_row("e1", "Jul", "360"),
        ];

        let (equipments, skipped) = CsvEquipmentImporter::build_equipments(&rows).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(equipments.len(), 2);
        // 首次出现顺序
        assert_eq!(equipments[0].id, "e1");
        // 历史按规范月份序
        let months: Vec<&str> = equipments[0].history.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["Mai", "Jul", "Ago"]);
    }

    #[test]
    fn test_build_空id行丢弃() {
        let rows = vec![base_row("", "Ago", "390"), base_row("e1", "Ago", "390")];

        let (equipments, skipped) = CsvEquipmentImporter::build_equipments(&rows).unwrap();
        assert_eq!(skipped, 1);
        assert_eq!(equipments.len(), 1);
    }

    #[test]
    fn test_build_首行确立主数据() {
        let mut second = base_row("e1", "Ago", "390");
        second.insert("name".to_string(), "Nome Diferente".to_string());
        second.insert("Status".to_string(), "Parado".to_string());

        let rows = vec![base_row("e1", "Jul", "360"), second];
        let (equipments, _) = CsvEquipmentImporter::build_equipments(&rows).unwrap();

        // 后续行只贡献历史, 不改写主数据
        assert_eq!(equipments[0].name, "Equipamento");
        assert_eq!(equipments[0].status, "Operacional");
        assert_eq!(equipments[0].history.len(), 2);
    }

    #[test]
    fn test_build_同月重复后写覆盖() {
        let rows = vec![base_row("e1", "Ago", "100"), base_row("e1", "Ago", "390")];

        let (equipments, _) = CsvEquipmentImporter::build_equipments(&rows).unwrap();
        assert_eq!(equipments[0].history.len(), 1);
        assert!((equipments[0].history[0].mtbf_h - 390.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_默认值口径() {
        let mut incomplete = base_row("e1", "Ago", "");
        incomplete.insert("MTTR".to_string(), "abc".to_string());
        incomplete.insert("Status".to_string(), "".to_string());

        let (equipments, _) = CsvEquipmentImporter::build_equipments(&[incomplete]).unwrap();
        let equipment = &equipments[0];

        // 状态空白默认 Operacional
        assert_eq!(equipment.status, STATUS_OPERATIONAL);
        // 关键度列缺失默认 B
        assert_eq!(equipment.criticality, Criticality::B);
        // 数值缺失/非数值按 0
        assert_eq!(equipment.history[0].mtbf_h, 0.0);
        assert_eq!(equipment.history[0].mttr_h, 0.0);
        // 可选计数列缺失为 None
        assert_eq!(equipment.history[0].preventive_count, None);
    }

    #[test]
    fn test_build_status列大小写不敏感() {
        let mut lowercase = base_row("e1", "Ago", "390");
        lowercase.remove("Status");
        lowercase.insert("status".to_string(), "Parado".to_string());

        let (equipments, _) = CsvEquipmentImporter::build_equipments(&[lowercase]).unwrap();
        assert_eq!(equipments[0].status, "Parado");
    }

    #[test]
    fn test_build_可选列() {
        let mut enriched = base_row("e1", "Ago", "390");
        enriched.insert("Performance".to_string(), "93".to_string());
        enriched.insert("Qualidade".to_string(), "98".to_string());
        enriched.insert("Preventivas".to_string(), "6".to_string());
        enriched.insert("Corretivas".to_string(), "1".to_string());
        enriched.insert("Criticidade".to_string(), "A".to_string());

        let (equipments, _) = CsvEquipmentImporter::build_equipments(&[enriched]).unwrap();
        let equipment = &equipments[0];
        assert_eq!(equipment.criticality, Criticality::A);
        assert_eq!(equipment.history[0].performance_pct, 93.0);
        assert_eq!(equipment.history[0].preventive_count, Some(6));
        assert_eq!(equipment.history[0].corrective_count, Some(1));
    }

    #[test]
    fn test_build_缺少必需列() {
        let mut broken = base_row("e1", "Ago", "390");
        broken.remove("MTBF");

        let result = CsvEquipmentImporter::build_equipments(&[broken]);
        assert!(matches!(result, Err(ImportError::MissingColumn(c)) if c == "MTBF"));
    }

    #[test]
    fn test_build_空行集() {
        let result = CsvEquipmentImporter::build_equipments(&[]);
        assert!(matches!(result, Err(ImportError::EmptyFile)));
    }
}
