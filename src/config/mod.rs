// ==========================================
// 设备维护KPI看板 - 配置层
// ==========================================
// 职责: 静态参考数据（目标表、月份序、周期、趋势阈值）
// 红线: 全部只读, 引擎按引用共享, 不存在运行期覆写
// ==========================================

pub mod kpi_targets;
pub mod reference_data;

// 重导出核心配置
pub use kpi_targets::KpiTargetTable;
pub use reference_data::{
    default_periods, month_index, MONTH_ORDER, STATUS_OPERATIONAL, STATUS_SCHEDULED_MAINTENANCE,
    STATUS_STOPPED, TREND_THRESHOLD,
};
