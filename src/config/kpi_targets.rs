// ==========================================
// 设备维护KPI看板 - KPI 目标表
// ==========================================
// 职责: 每项 KPI 的三档阈值 (目标/最低可接受/世界级)
// 红线: 静态参考数据, 进程启动即定型, 只读共享
// ==========================================

use crate::domain::types::KpiKind;
use crate::domain::KpiTarget;
use serde::{Deserialize, Serialize};

// ==========================================
// KpiTargetTable - KPI 目标表
// ==========================================
// 每项跟踪指标一条; pm_ratio 供 PM/CM 面板使用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTargetTable {
    /// MTBF（小时, 越大越好）
    pub mtbf: KpiTarget,

    /// MTTR（小时, 越小越好; minimum_acceptable 为上限）
    pub mttr: KpiTarget,

    /// 可用率（百分比）
    pub availability: KpiTarget,

    /// OEE（百分比）
    pub oee: KpiTarget,

    /// 维护成本（百万雷亚尔, 越小越好; minimum_acceptable 为上限）
    pub cost: KpiTarget,

    /// 预防性维护占比（百分比）
    pub pm_ratio: KpiTarget,
}

impl Default for KpiTargetTable {
    fn default() -> Self {
        Self {
            mtbf: KpiTarget::new(350.0, 200.0, 450.0),
            mttr: KpiTarget::new(3.0, 5.0, 2.0),
            availability: KpiTarget::new(95.0, 90.0, 99.0),
            oee: KpiTarget::new(85.0, 65.0, 92.0),
            cost: KpiTarget::new(1.5, 2.5, 0.8),
            pm_ratio: KpiTarget::new(80.0, 60.0, 90.0),
        }
    }
}

impl KpiTargetTable {
    /// 按指标种类取阈值
    pub fn for_kind(&self, kind: KpiKind) -> &KpiTarget {
        match kind {
            KpiKind::Mtbf => &self.mtbf,
            KpiKind::Mttr => &self.mttr,
            KpiKind::Availability => &self.availability,
            KpiKind::Oee => &self.oee,
            KpiKind::Cost => &self.cost,
        }
    }
}
