// ==========================================
// 设备维护KPI看板 - KPI 值对象
// ==========================================
// 职责: KPI 目标阈值与卡片摘要（派生、短生命周期）
// ==========================================

use crate::domain::types::{KpiKind, KpiStatus, Trend};
use serde::{Deserialize, Serialize};

// ==========================================
// KpiTarget - 单项 KPI 阈值
// ==========================================
// 三档: 目标值 / 最低可接受值 / 世界级基准
// 对 MTTR、成本等"越小越好"指标, minimum_acceptable 为上限
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTarget {
    /// 目标值
    pub target: f64,

    /// 最低可接受值（方向随指标取反）
    pub minimum_acceptable: f64,

    /// 世界级基准
    pub world_class: f64,
}

impl KpiTarget {
    pub fn new(target: f64, minimum_acceptable: f64, world_class: f64) -> Self {
        Self {
            target,
            minimum_acceptable,
            world_class,
        }
    }
}

// ==========================================
// KpiCard - KPI 卡片摘要
// ==========================================
// 由 KpiEngine 按当前周期派生, 随过滤条件重算, 不持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    /// 指标种类
    pub kind: KpiKind,

    /// 展示标签（固定标签集, pt-BR）
    pub label: String,

    /// 格式化后的当前值（如 "398h" / "96.3%"）
    pub value: String,

    /// 原始数值
    pub raw_value: f64,

    /// 相对上一周期的趋势（up = 向好）
    pub trend: Trend,

    /// 格式化后的变化率（如 "+2.1%"）
    pub change: String,

    /// 对照目标表的四级状态
    pub status: KpiStatus,

    /// 目标阈值引用（供进度条/详情渲染）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<KpiTarget>,

    /// 单位字符串
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

// ==========================================
// KpiSeriesPoint - 单指标逐月取值（详情视图）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSeriesPoint {
    /// 月份缩写
    pub month: String,
    /// 指标取值（保留 2 位小数）
    pub value: f64,
}

// ==========================================
// KpiStats - 周期统计（详情视图）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiStats {
    /// 周期均值
    pub average: f64,
    /// 周期最小值
    pub min: f64,
    /// 周期最大值
    pub max: f64,
}
