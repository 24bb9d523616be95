// ==========================================
// 设备维护KPI看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod alert;
pub mod backlog;
pub mod equipment;
pub mod kpi;
pub mod period;
pub mod ranking;
pub mod types;

// 重导出核心类型
pub use alert::CriticalAlert;
pub use backlog::{BacklogSummary, MaintenanceOrder, PmCmPoint};
pub use equipment::{Equipment, MonthlyRecord};
pub use kpi::{KpiCard, KpiSeriesPoint, KpiStats, KpiTarget};
pub use period::Period;
pub use ranking::EquipmentRanked;
pub use types::{
    AlertSeverity, BacklogLevel, Criticality, KpiKind, KpiStatus, OrderPriority, OrderStatus,
    OrderType, Trend,
};
