// ==========================================
// 设备维护KPI看板 - 引擎层
// ==========================================
// 职责: 聚合与派生指标的业务规则
// 红线: 引擎无状态、纯函数; 输入只读, 输出全新分配;
//       对良构输入永不 panic（退化输入有定义的零/空输出）
// ==========================================

pub mod alerts;
pub mod backlog;
pub mod consolidation;
pub mod kpi;
pub mod ranking;

// 重导出核心引擎
pub use alerts::AlertEngine;
pub use backlog::BacklogEngine;
pub use consolidation::ConsolidationEngine;
pub use kpi::KpiEngine;
pub use ranking::RankingEngine;
