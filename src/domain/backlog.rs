// ==========================================
// 设备维护KPI看板 - 维护工单与积压
// ==========================================
// 职责: 工单主数据、积压摘要、PM/CM 比例视图
// 说明: 积压属于补充上下文, 不参与核心聚合
// ==========================================

use crate::domain::types::{BacklogLevel, OrderPriority, OrderStatus, OrderType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// MaintenanceOrder - 维护工单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceOrder {
    /// 工单号
    pub id: String,

    /// 所属设备
    pub equipment_id: String,

    /// 设备名称（冗余展示字段）
    pub equipment_name: String,

    /// 工单描述
    pub description: String,

    /// 工单类型（PM/CM）
    #[serde(rename = "type")]
    pub order_type: OrderType,

    /// 优先级
    pub priority: OrderPriority,

    /// 工单状态
    pub status: OrderStatus,

    /// 开单日期
    pub opened_date: NaiveDate,

    /// 计划完成日期
    pub due_date: NaiveDate,
}

// ==========================================
// BacklogSummary - 积压摘要
// ==========================================
// 由 BacklogEngine 按"今天"派生
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogSummary {
    /// 工单总数
    pub total_orders: usize,

    /// 待执行工单数
    pub pending_orders: usize,

    /// 逾期工单数（待执行且超过计划完成日期）
    pub overdue_orders: usize,

    /// 待执行工单平均等待天数
    pub avg_wait_days: f64,

    /// 待执行占比（百分比）
    pub backlog_pct: f64,

    /// 积压健康级别
    pub level: BacklogLevel,
}

// ==========================================
// PmCmPoint - PM/CM 逐月比例点
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmCmPoint {
    /// 月份缩写
    pub month: String,

    /// 预防性工单数
    pub preventive: u32,

    /// 纠正性工单数
    pub corrective: u32,

    /// PM 占比（百分比, 无工单按 0）
    pub pm_pct: f64,
}
