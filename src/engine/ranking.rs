// ==========================================
// 设备维护KPI看板 - 可用率排名引擎
// ==========================================
// 职责: 按周期末月可用率对设备降序排名并判定环比趋势
// 红线: 稳定排序 — 可用率相同的设备保持输入相对顺序
// ==========================================
// 口径:
// - 末月无记录按可用率 0
// - 上月无记录按当前值对照（中性, 不产生虚假趋势）
// - |差值| 严格大于阈值 0.5 个百分点才判 up/down, 否则 stable
// ==========================================

use crate::config::TREND_THRESHOLD;
use crate::domain::types::Trend;
use crate::domain::{Equipment, EquipmentRanked, Period};

// ==========================================
// RankingEngine - 可用率排名引擎
// ==========================================
pub struct RankingEngine;

impl RankingEngine {
    /// 创建新的排名引擎
    pub fn new() -> Self {
        Self
    }

    /// 按可用率排名
    ///
    /// # 参数
    /// - `equipments`: 已过滤的设备列表
    /// - `period`: 统计周期
    ///
    /// # 返回
    /// 按末月可用率降序的排名条目; 并列时保持输入顺序。
    pub fn rank_by_availability(
        &self,
        equipments: &[Equipment],
        period: &Period,
    ) -> Vec<EquipmentRanked> {
        let last_month = period.last_month();
        let prev_month = period.prev_month();

        let mut ranked: Vec<EquipmentRanked> = equipments
            .iter()
            .map(|equipment| {
                let availability = last_month
                    .and_then(|m| equipment.record_for_month(m))
                    .map(|r| r.availability_pct)
                    .unwrap_or(0.0);

                let prev_availability = prev_month
                    .and_then(|m| equipment.record_for_month(m))
                    .map(|r| r.availability_pct)
                    .unwrap_or(availability);

                let difference = availability - prev_availability;
                let trend = if difference > TREND_THRESHOLD {
                    Trend::Up
                } else if difference < -TREND_THRESHOLD {
                    Trend::Down
                } else {
                    Trend::Stable
                };

                EquipmentRanked {
                    equipment: equipment.clone(),
                    availability_pct: availability,
                    availability_label: format!("{:.1}%", availability),
                    trend,
                }
            })
            .collect();

        // Vec::sort_by 为稳定排序
        ranked.sort_by(|a, b| {
            b.availability_pct
                .partial_cmp(&a.availability_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}
