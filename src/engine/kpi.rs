// ==========================================
// 设备维护KPI看板 - KPI 派生引擎
// ==========================================
// 职责: 从合并序列派生卡片摘要、环比趋势、四级状态
// 红线: 无状态引擎, 纯函数; 除零不是错误（0% + 向好）
// ==========================================
// 口径:
// - 环比 = (本期 - 上期) / 上期 × 100; 上期为 0 时定义为 0% 且趋势向好
// - MTTR/成本为"越小越好", 趋势取反
// - 状态: 达到世界级 → excellent, 达到目标 → good,
//   达到最低可接受 → warning, 否则 critical（边界取闭区间）
// ==========================================

use crate::config::KpiTargetTable;
use crate::domain::types::{KpiKind, KpiStatus, Trend};
use crate::domain::{KpiCard, KpiSeriesPoint, KpiStats, KpiTarget, MonthlyRecord};
use crate::i18n::t;

/// 数值保留 2 位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// KpiEngine - KPI 派生引擎
// ==========================================
pub struct KpiEngine;

impl KpiEngine {
    /// 创建新的 KPI 派生引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 派生 KPI 卡片
    ///
    /// # 参数
    /// - `series`: 合并后的周期序列（时间顺序）
    /// - `targets`: KPI 目标表
    ///
    /// # 返回
    /// 固定顺序的 5 张卡片 (MTBF, MTTR, Disponibilidade, OEE, Custo);
    /// 序列为空时输出全零卡片, 状态 warning, 变化率 "0%"。
    pub fn derive_kpis(&self, series: &[MonthlyRecord], targets: &KpiTargetTable) -> Vec<KpiCard> {
        if series.is_empty() {
            return KpiKind::ALL
                .iter()
                .map(|kind| self.zero_card(*kind, targets))
                .collect();
        }

        let last = &series[series.len() - 1];
        // 序列长度为 1 时与自身比较, 环比为 0%
        let prev = if series.len() >= 2 {
            &series[series.len() - 2]
        } else {
            last
        };

        KpiKind::ALL
            .iter()
            .map(|kind| {
                let current = Self::value_of(last, *kind);
                let previous = Self::value_of(prev, *kind);
                let (change, trend) = Self::percent_change(current, previous, *kind);
                let target = targets.for_kind(*kind);
                let status =
                    Self::classify_status(current, target, kind.higher_is_better());

                KpiCard {
                    kind: *kind,
                    label: Self::label(*kind),
                    value: kind.format_value(current),
                    raw_value: current,
                    trend,
                    change,
                    status,
                    target: Some(*target),
                    unit: Some(kind.unit().to_string()),
                }
            })
            .collect()
    }

    /// 单指标逐月序列（详情视图; OEE 现算）
    pub fn kpi_series(&self, series: &[MonthlyRecord], kind: KpiKind) -> Vec<KpiSeriesPoint> {
        series
            .iter()
            .map(|record| KpiSeriesPoint {
                month: record.month.clone(),
                value: round2(Self::value_of(record, kind)),
            })
            .collect()
    }

    /// 周期统计（均值/最小/最大, 保留 2 位小数）
    pub fn kpi_stats(&self, points: &[KpiSeriesPoint]) -> Option<KpiStats> {
        if points.is_empty() {
            return None;
        }

        let sum: f64 = points.iter().map(|p| p.value).sum();
        let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
        let max = points
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(KpiStats {
            average: round2(sum / points.len() as f64),
            min,
            max,
        })
    }

    // ==========================================
    // 分类与取值
    // ==========================================

    /// 四级状态分类（边界取闭区间）
    pub fn classify_status(value: f64, target: &KpiTarget, higher_is_better: bool) -> KpiStatus {
        if higher_is_better {
            if value >= target.world_class {
                KpiStatus::Excellent
            } else if value >= target.target {
                KpiStatus::Good
            } else if value >= target.minimum_acceptable {
                KpiStatus::Warning
            } else {
                KpiStatus::Critical
            }
        } else if value <= target.world_class {
            KpiStatus::Excellent
        } else if value <= target.target {
            KpiStatus::Good
        } else if value <= target.minimum_acceptable {
            KpiStatus::Warning
        } else {
            KpiStatus::Critical
        }
    }

    /// 从合并记录取单指标数值（OEE 为派生值）
    fn value_of(record: &MonthlyRecord, kind: KpiKind) -> f64 {
        match kind {
            KpiKind::Mtbf => record.mtbf_h,
            KpiKind::Mttr => record.mttr_h,
            KpiKind::Availability => record.availability_pct,
            KpiKind::Oee => record.oee_pct(),
            KpiKind::Cost => record.cost_m,
        }
    }

    /// 环比变化率与趋势
    ///
    /// 上期为 0 时按 0% + 向好处理, 避免除零。
    fn percent_change(current: f64, previous: f64, kind: KpiKind) -> (String, Trend) {
        if previous == 0.0 {
            return ("0%".to_string(), Trend::Up);
        }

        let delta = (current - previous) / previous * 100.0;
        let change = if delta > 0.0 {
            format!("+{:.1}%", delta)
        } else {
            format!("{:.1}%", delta)
        };

        let trend = if kind.higher_is_better() {
            if delta >= 0.0 {
                Trend::Up
            } else {
                Trend::Down
            }
        } else {
            // 越小越好: 下降才是向好
            if delta <= 0.0 {
                Trend::Up
            } else {
                Trend::Down
            }
        };

        (change, trend)
    }

    /// 卡片标签（固定标签集）
    fn label(kind: KpiKind) -> String {
        match kind {
            KpiKind::Mtbf => t("kpi.card.mtbf"),
            KpiKind::Mttr => t("kpi.card.mttr"),
            KpiKind::Availability => t("kpi.card.availability"),
            KpiKind::Oee => t("kpi.card.oee"),
            KpiKind::Cost => t("kpi.card.cost"),
        }
    }

    /// 空序列时的全零卡片
    fn zero_card(&self, kind: KpiKind, targets: &KpiTargetTable) -> KpiCard {
        let value = match kind {
            KpiKind::Mtbf | KpiKind::Mttr => "0h".to_string(),
            KpiKind::Availability | KpiKind::Oee => "0%".to_string(),
            KpiKind::Cost => "R$ 0M".to_string(),
        };

        KpiCard {
            kind,
            label: Self::label(kind),
            value,
            raw_value: 0.0,
            trend: Trend::Up,
            change: "0%".to_string(),
            status: KpiStatus::Warning,
            target: Some(*targets.for_kind(kind)),
            unit: Some(kind.unit().to_string()),
        }
    }
}

impl Default for KpiEngine {
    fn default() -> Self {
        Self::new()
    }
}
