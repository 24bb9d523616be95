// ==========================================
// 设备维护KPI看板 - 积压引擎
// ==========================================
// 职责: 维护工单积压摘要与 PM/CM 逐月比例视图
// 说明: 补充上下文, 不参与核心聚合; "今天"由调用方注入
// ==========================================
// 口径:
// - 逾期 = 待执行且计划完成日期早于今天
// - 级别: 逾期 > 5 → critical; 逾期 > 2 或待执行占比 > 60% → warning;
//   占比 > 40% → attention; 否则 good
// ==========================================

use crate::domain::types::{BacklogLevel, KpiStatus, OrderStatus};
use crate::domain::{BacklogSummary, KpiTarget, MaintenanceOrder, MonthlyRecord, PmCmPoint};
use crate::engine::kpi::KpiEngine;
use chrono::NaiveDate;

/// 数值保留 1 位小数
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ==========================================
// BacklogEngine - 积压引擎
// ==========================================
pub struct BacklogEngine;

impl BacklogEngine {
    /// 创建新的积压引擎
    pub fn new() -> Self {
        Self
    }

    /// 积压摘要
    ///
    /// # 参数
    /// - `orders`: 工单列表
    /// - `today`: 基准日期（由调用方注入, 引擎不读系统时钟）
    pub fn summarize(&self, orders: &[MaintenanceOrder], today: NaiveDate) -> BacklogSummary {
        let total_orders = orders.len();
        let pending: Vec<&MaintenanceOrder> = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .collect();
        let pending_orders = pending.len();

        let overdue_orders = pending.iter().filter(|o| o.due_date < today).count();

        let backlog_pct = if total_orders > 0 {
            round1(pending_orders as f64 / total_orders as f64 * 100.0)
        } else {
            0.0
        };

        let avg_wait_days = if pending_orders > 0 {
            let total_days: i64 = pending
                .iter()
                .map(|o| (today - o.opened_date).num_days().max(0))
                .sum();
            round1(total_days as f64 / pending_orders as f64)
        } else {
            0.0
        };

        let level = if overdue_orders > 5 {
            BacklogLevel::Critical
        } else if overdue_orders > 2 || backlog_pct > 60.0 {
            BacklogLevel::Warning
        } else if backlog_pct > 40.0 {
            BacklogLevel::Attention
        } else {
            BacklogLevel::Good
        };

        BacklogSummary {
            total_orders,
            pending_orders,
            overdue_orders,
            avg_wait_days,
            backlog_pct,
            level,
        }
    }

    /// PM/CM 逐月比例序列（来自合并序列的工单数）
    pub fn pm_cm_series(&self, series: &[MonthlyRecord]) -> Vec<PmCmPoint> {
        series
            .iter()
            .map(|record| {
                let preventive = record.preventive_count.unwrap_or(0);
                let corrective = record.corrective_count.unwrap_or(0);
                let total = preventive + corrective;
                let pm_pct = if total > 0 {
                    round1(preventive as f64 / total as f64 * 100.0)
                } else {
                    0.0
                };

                PmCmPoint {
                    month: record.month.clone(),
                    preventive,
                    corrective,
                    pm_pct,
                }
            })
            .collect()
    }

    /// 末月 PM 占比对照 pm_ratio 目标的四级状态
    pub fn pm_status(&self, points: &[PmCmPoint], target: &KpiTarget) -> KpiStatus {
        match points.last() {
            Some(last) => KpiEngine::classify_status(last.pm_pct, target, true),
            None => KpiStatus::Warning,
        }
    }
}

impl Default for BacklogEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{OrderPriority, OrderType};

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_order(id: &str, status: OrderStatus, opened: NaiveDate, due: NaiveDate) -> MaintenanceOrder {
        MaintenanceOrder {
            id: id.to_string(),
            equipment_id: "comp-a1".to_string(),
            equipment_name: "Compressor A1".to_string(),
            description: "Troca de filtro".to_string(),
            order_type: OrderType::Preventive,
            priority: OrderPriority::Medium,
            status,
            opened_date: opened,
            due_date: due,
        }
    }

    #[test]
    fn test_summarize_统计口径() {
        let engine = BacklogEngine::new();
        let today = make_date(2024, 8, 15);

        let orders = vec![
            // 逾期: 待执行且 due < today
            make_order("om-1", OrderStatus::Pending, make_date(2024, 8, 1), make_date(2024, 8, 10)),
            // 待执行但未逾期
            make_order("om-2", OrderStatus::Pending, make_date(2024, 8, 11), make_date(2024, 8, 20)),
            // 已完成: 不计入待执行
            make_order("om-3", OrderStatus::Completed, make_date(2024, 7, 1), make_date(2024, 7, 10)),
        ];

        let summary = engine.summarize(&orders, today);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.pending_orders, 2);
        assert_eq!(summary.overdue_orders, 1);
        // (14 + 4) / 2 = 9.0 天
        assert!((summary.avg_wait_days - 9.0).abs() < 1e-9);
        // 2/3 ≈ 66.7% > 60% → warning
        assert_eq!(summary.level, BacklogLevel::Warning);
    }

    #[test]
    fn test_summarize_空列表() {
        let engine = BacklogEngine::new();
        let summary = engine.summarize(&[], make_date(2024, 8, 15));

        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.backlog_pct, 0.0);
        assert_eq!(summary.avg_wait_days, 0.0);
        assert_eq!(summary.level, BacklogLevel::Good);
    }

    #[test]
    fn test_summarize_级别阈值() {
        let engine = BacklogEngine::new();
        let today = make_date(2024, 8, 15);

        // 6 条逾期 → critical（优先于占比判定）
        let mut orders: Vec<MaintenanceOrder> = (0..6)
            .map(|i| {
                make_order(
                    &format!("om-{}", i),
                    OrderStatus::Pending,
                    make_date(2024, 7, 1),
                    make_date(2024, 8, 1),
                )
            })
            .collect();
        assert_eq!(engine.summarize(&orders, today).level, BacklogLevel::Critical);

        // 去掉逾期, 占比 50% → attention
        orders.truncate(2);
        orders[0].due_date = make_date(2024, 9, 1);
        orders[1].due_date = make_date(2024, 9, 1);
        orders.push(make_order("om-c1", OrderStatus::Completed, make_date(2024, 7, 1), make_date(2024, 7, 5)));
        orders.push(make_order("om-c2", OrderStatus::Completed, make_date(2024, 7, 1), make_date(2024, 7, 5)));
        assert_eq!(engine.summarize(&orders, today).level, BacklogLevel::Attention);
    }

    #[test]
    fn test_pm_cm_series_与状态() {
        let engine = BacklogEngine::new();

        let mut jul = MonthlyRecord::zero("Jul");
        jul.preventive_count = Some(6);
        jul.corrective_count = Some(4);
        let mut ago = MonthlyRecord::zero("Ago");
        ago.preventive_count = Some(16);
        ago.corrective_count = Some(4);
        // 无工单月份: 占比按 0
        let dez = MonthlyRecord::zero("Dez");

        let points = engine.pm_cm_series(&[jul, ago, dez]);
        assert_eq!(points.len(), 3);
        assert!((points[0].pm_pct - 60.0).abs() < 1e-9);
        assert!((points[1].pm_pct - 80.0).abs() < 1e-9);
        assert_eq!(points[2].pm_pct, 0.0);

        // 末月 80% 达到目标 80 → good
        let target = KpiTarget::new(80.0, 60.0, 90.0);
        let status = engine.pm_status(&points[..2], &target);
        assert_eq!(status, KpiStatus::Good);
    }
}
