// ==========================================
// 设备维护KPI看板 - 核心库
// ==========================================
// 技术栈: Rust + CSV 导入
// 系统定位: 维护指标聚合与决策支持 (展示层外置)
// ==========================================

// 初始化国际化系统（固定标签集为巴西葡萄牙语）
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 静态参考数据（KPI 目标、月份序、周期）
pub mod config;

// 引擎层 - 聚合与派生指标
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// API 层 - 看板业务接口
pub mod api;

// 内置演示数据集
pub mod dataset;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AlertSeverity, BacklogLevel, Criticality, KpiKind, KpiStatus, OrderPriority, OrderStatus,
    OrderType, Trend,
};

// 领域实体
pub use domain::{
    BacklogSummary, CriticalAlert, Equipment, EquipmentRanked, KpiCard, KpiStats, KpiTarget,
    MaintenanceOrder, MonthlyRecord, Period, PmCmPoint,
};

// 配置
pub use config::{KpiTargetTable, MONTH_ORDER, TREND_THRESHOLD};

// 引擎
pub use engine::{AlertEngine, BacklogEngine, ConsolidationEngine, KpiEngine, RankingEngine};

// API
pub use api::{ApiError, ApiResult, DashboardApi, DashboardView, FilterSelection};

// 导入
pub use importer::{ImportError, ImportReport, ImportResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备维护KPI看板";

// ==========================================
// 预编译检查
// ==========================================
