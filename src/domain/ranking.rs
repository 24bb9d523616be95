// ==========================================
// 设备维护KPI看板 - 可用率排名条目
// ==========================================
// 职责: 设备 + 周期末月可用率装饰（派生、短生命周期）
// ==========================================

use crate::domain::equipment::Equipment;
use crate::domain::types::Trend;
use serde::{Deserialize, Serialize};

/// 可用率排名条目
///
/// 设备主数据平铺进载荷, 外加周期末月可用率与环比趋势。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRanked {
    /// 设备主数据（序列化时平铺）
    #[serde(flatten)]
    pub equipment: Equipment,

    /// 周期末月可用率（无记录按 0）
    #[serde(rename = "availability")]
    pub availability_pct: f64,

    /// 格式化标签（如 "96.0%"）
    #[serde(rename = "availabilityLabel")]
    pub availability_label: String,

    /// 相对上一个月的趋势（差值阈值判定, 见 config::TREND_THRESHOLD）
    pub trend: Trend,
}
