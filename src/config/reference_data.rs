// ==========================================
// 设备维护KPI看板 - 静态参考数据
// ==========================================
// 职责: 规范月份序、趋势阈值、状态参考值、周期定义
// 红线: 进程启动即定型, 只读共享, 不可变更
// ==========================================

use crate::domain::Period;

// ==========================================
// 规范月份序
// ==========================================
// 固定 12 个缩写（pt-BR）, 导入层据此排序历史记录
pub const MONTH_ORDER: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// 月份缩写在规范序中的下标
pub fn month_index(month: &str) -> Option<usize> {
    MONTH_ORDER.iter().position(|m| *m == month)
}

// ==========================================
// 趋势阈值
// ==========================================
// 可用率环比差值在 ±0.5 个百分点内视为平稳（严格比较）
pub const TREND_THRESHOLD: f64 = 0.5;

// ==========================================
// 设备状态参考值
// ==========================================
// status 为自由文本, 以下为内置数据与规则使用的参考值
pub const STATUS_OPERATIONAL: &str = "Operacional";
pub const STATUS_STOPPED: &str = "Parado";
pub const STATUS_SCHEDULED_MAINTENANCE: &str = "Manutenção Programada";

// ==========================================
// 周期定义
// ==========================================

/// 可选统计周期（静态, 不由数据派生）
pub fn default_periods() -> Vec<Period> {
    vec![
        Period {
            id: "2m".to_string(),
            label: "Últimos 2 meses".to_string(),
            months: vec!["Jul".to_string(), "Ago".to_string()],
        },
        Period {
            id: "3m".to_string(),
            label: "Últimos 3 meses".to_string(),
            months: vec!["Jun".to_string(), "Jul".to_string(), "Ago".to_string()],
        },
        Period {
            id: "4m".to_string(),
            label: "Últimos 4 meses".to_string(),
            months: vec![
                "Mai".to_string(),
                "Jun".to_string(),
                "Jul".to_string(),
                "Ago".to_string(),
            ],
        },
    ]
}
