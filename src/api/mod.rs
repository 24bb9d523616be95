// ==========================================
// 设备维护KPI看板 - API 层
// ==========================================
// 职责: 面向展示层的业务接口
// ==========================================

pub mod dashboard_api;
pub mod error;

// 重导出核心类型
pub use dashboard_api::{DashboardApi, DashboardView, FilterSelection, KpiDetailView};
pub use error::{ApiError, ApiResult};
