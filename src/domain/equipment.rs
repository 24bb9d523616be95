// ==========================================
// 设备维护KPI看板 - 设备领域模型
// ==========================================
// 职责: 设备主数据与逐月指标记录
// 红线: 导入层写入, 引擎层只读; 每设备每月最多一条记录
// ==========================================

use crate::domain::types::Criticality;
use serde::{Deserialize, Serialize};

// ==========================================
// MonthlyRecord - 设备单月维护指标
// ==========================================
// 序列化字段名与看板前端载荷对齐 (MTBF/MTTR/Disponibilidade/...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// 月份缩写（规范序 Jan…Dez 之一）
    pub month: String,

    /// 平均故障间隔（小时, ≥0）
    #[serde(rename = "MTBF")]
    pub mtbf_h: f64,

    /// 平均修复时间（小时, ≥0）
    #[serde(rename = "MTTR")]
    pub mttr_h: f64,

    /// 可用率（百分比, 0-100）
    #[serde(rename = "Disponibilidade")]
    pub availability_pct: f64,

    /// 性能率（百分比, 0-100）
    #[serde(rename = "Performance")]
    pub performance_pct: f64,

    /// 质量率（百分比, 0-100）
    #[serde(rename = "Qualidade")]
    pub quality_pct: f64,

    /// 维护成本（百万雷亚尔, 可加总）
    #[serde(rename = "Custo")]
    pub cost_m: f64,

    /// 预防性工单数（可选, 缺省按 0 参与运算）
    #[serde(
        rename = "preventiveCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub preventive_count: Option<u32>,

    /// 纠正性工单数（可选, 缺省按 0 参与运算）
    #[serde(
        rename = "correctiveCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub corrective_count: Option<u32>,
}

impl MonthlyRecord {
    /// 全零占位记录（某月无任何设备贡献数据时的缺失标记）
    pub fn zero(month: &str) -> Self {
        Self {
            month: month.to_string(),
            mtbf_h: 0.0,
            mttr_h: 0.0,
            availability_pct: 0.0,
            performance_pct: 0.0,
            quality_pct: 0.0,
            cost_m: 0.0,
            preventive_count: None,
            corrective_count: None,
        }
    }

    /// 派生 OEE（百分比）
    ///
    /// 三个百分比因子相乘后除以 10000, 等价于三个 0-1 分数相乘再 ×100。
    pub fn oee_pct(&self) -> f64 {
        self.availability_pct * self.performance_pct * self.quality_pct / 10000.0
    }
}

// ==========================================
// Equipment - 设备主数据
// ==========================================
// history 按规范月份序排列, 由导入层保证
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    /// 设备唯一标识
    pub id: String,

    /// 设备名称
    pub name: String,

    /// 分类（自由文本分组）
    pub category: String,

    /// 运行状态（自由文本, 参考值见 config::reference_data）
    pub status: String,

    /// 关键度（A 最高）
    pub criticality: Criticality,

    /// 逐月指标历史（不要求覆盖所有月份）
    pub history: Vec<MonthlyRecord>,
}

impl Equipment {
    /// 查找指定月份的记录
    pub fn record_for_month(&self, month: &str) -> Option<&MonthlyRecord> {
        self.history.iter().find(|r| r.month == month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oee_formula() {
        let mut record = MonthlyRecord::zero("Ago");
        record.availability_pct = 96.0;
        record.performance_pct = 93.0;
        record.quality_pct = 98.0;

        // 96 * 93 * 98 / 10000 = 87.4128
        assert!((record.oee_pct() - 87.4128).abs() < 1e-9);
    }

    #[test]
    fn test_record_for_month() {
        let equipment = Equipment {
            id: "comp-a1".to_string(),
            name: "Compressor A1".to_string(),
            category: "Compressão".to_string(),
            status: "Operacional".to_string(),
            criticality: Criticality::B,
            history: vec![MonthlyRecord::zero("Jul"), MonthlyRecord::zero("Ago")],
        };

        assert!(equipment.record_for_month("Jul").is_some());
        assert!(equipment.record_for_month("Dez").is_none());
    }
}
