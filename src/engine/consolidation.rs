// ==========================================
// 设备维护KPI看板 - 合并引擎
// ==========================================
// 职责: 把多设备逐月序列合并为单一的周期序列
// 红线: 无状态引擎, 纯函数, 对良构输入永不 panic
// ==========================================
// 口径:
// - MTBF/MTTR/可用率/性能率/质量率: 贡献设备的算术平均
// - 成本与工单数: 求和（可加指标, 非强度指标）
// - 某月无记录的设备不参与该月平均（不按 0 计）
// ==========================================

use crate::domain::{Equipment, MonthlyRecord, Period};

/// 数值保留 1 位小数
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 数值保留 2 位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// ConsolidationEngine - 合并引擎
// ==========================================
pub struct ConsolidationEngine;

impl ConsolidationEngine {
    /// 创建新的合并引擎
    pub fn new() -> Self {
        Self
    }

    /// 按周期合并设备序列
    ///
    /// # 参数
    /// - `equipments`: 已过滤的设备列表
    /// - `period`: 统计周期
    ///
    /// # 返回
    /// 与 `period.months` 等长且同序的合并序列;
    /// 设备列表为空时返回空序列;
    /// 某月无任何设备贡献数据时输出全零占位记录。
    pub fn consolidate(&self, equipments: &[Equipment], period: &Period) -> Vec<MonthlyRecord> {
        if equipments.is_empty() {
            return Vec::new();
        }

        period
            .months
            .iter()
            .map(|month| self.consolidate_month(equipments, month))
            .collect()
    }

    /// 合并单个月份
    fn consolidate_month(&self, equipments: &[Equipment], month: &str) -> MonthlyRecord {
        let records: Vec<&MonthlyRecord> = equipments
            .iter()
            .filter_map(|e| e.record_for_month(month))
            .collect();

        if records.is_empty() {
            tracing::debug!("月份 {} 无设备贡献数据, 输出占位记录", month);
            return MonthlyRecord::zero(month);
        }

        let count = records.len() as f64;
        let avg = |f: fn(&MonthlyRecord) -> f64| records.iter().map(|r| f(r)).sum::<f64>() / count;

        MonthlyRecord {
            month: month.to_string(),
            mtbf_h: avg(|r| r.mtbf_h).round(),
            mttr_h: round2(avg(|r| r.mttr_h)),
            availability_pct: round1(avg(|r| r.availability_pct)),
            performance_pct: round1(avg(|r| r.performance_pct)),
            quality_pct: round1(avg(|r| r.quality_pct)),
            cost_m: round2(records.iter().map(|r| r.cost_m).sum()),
            preventive_count: Some(
                records
                    .iter()
                    .map(|r| r.preventive_count.unwrap_or(0))
                    .sum(),
            ),
            corrective_count: Some(
                records
                    .iter()
                    .map(|r| r.corrective_count.unwrap_or(0))
                    .sum(),
            ),
        }
    }
}

impl Default for ConsolidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
