// ==========================================
// 设备维护KPI看板 - 领域类型定义
// ==========================================
// 职责: 枚举类型与指标元信息
// 红线: 序列化格式与前端载荷保持一致 (小写/原始标签)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 设备关键度 (Criticality)
// ==========================================
// A = 对生产影响最高, C = 最低
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criticality {
    A, // 高关键度
    B, // 中关键度
    C, // 低关键度
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criticality::A => write!(f, "A"),
            Criticality::B => write!(f, "B"),
            Criticality::C => write!(f, "C"),
        }
    }
}

impl Criticality {
    /// 从字符串解析关键度（导入层使用，未知值回退为 B）
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "A" => Criticality::A,
            "C" => Criticality::C,
            _ => Criticality::B,
        }
    }
}

// ==========================================
// 趋势方向 (Trend)
// ==========================================
// KPI 卡片只产生 up/down；排名视图额外产生 stable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,     // 向好
    Down,   // 恶化
    Stable, // 平稳（差值在阈值内）
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

// ==========================================
// KPI 状态 (KPI Status)
// ==========================================
// 四级分类: 对照目标表 (world class / target / minimum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Excellent, // 世界级水准
    Good,      // 达到目标
    Warning,   // 低于目标但可接受
    Critical,  // 低于最低可接受线
}

impl fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiStatus::Excellent => write!(f, "excellent"),
            KpiStatus::Good => write!(f, "good"),
            KpiStatus::Warning => write!(f, "warning"),
            KpiStatus::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 告警级别 (Alert Severity)
// ==========================================
// 顺序: Critical < Warning < Info（排序时 critical 在前）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical, // 红线违反
    Warning,  // 低于目标
    Info,     // 提示
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Critical => write!(f, "critical"),
            AlertSeverity::Warning => write!(f, "warning"),
            AlertSeverity::Info => write!(f, "info"),
        }
    }
}

// ==========================================
// KPI 种类 (KPI Kind)
// ==========================================
// 固定跟踪 5 项: MTBF / MTTR / 可用率 / OEE / 成本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KpiKind {
    #[serde(rename = "MTBF")]
    Mtbf,
    #[serde(rename = "MTTR")]
    Mttr,
    #[serde(rename = "Disponibilidade")]
    Availability,
    #[serde(rename = "OEE")]
    Oee,
    #[serde(rename = "Custo")]
    Cost,
}

impl fmt::Display for KpiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl KpiKind {
    /// 固定卡片顺序
    pub const ALL: [KpiKind; 5] = [
        KpiKind::Mtbf,
        KpiKind::Mttr,
        KpiKind::Availability,
        KpiKind::Oee,
        KpiKind::Cost,
    ];

    /// 指标短名（与前端载荷一致）
    pub fn name(&self) -> &'static str {
        match self {
            KpiKind::Mtbf => "MTBF",
            KpiKind::Mttr => "MTTR",
            KpiKind::Availability => "Disponibilidade",
            KpiKind::Oee => "OEE",
            KpiKind::Cost => "Custo",
        }
    }

    /// 单位字符串
    pub fn unit(&self) -> &'static str {
        match self {
            KpiKind::Mtbf | KpiKind::Mttr => "h",
            KpiKind::Availability | KpiKind::Oee => "%",
            KpiKind::Cost => "M",
        }
    }

    /// 越大越好? (MTTR 与成本取反)
    pub fn higher_is_better(&self) -> bool {
        !matches!(self, KpiKind::Mttr | KpiKind::Cost)
    }

    /// 按指标精度格式化当前值
    pub fn format_value(&self, value: f64) -> String {
        match self {
            KpiKind::Mtbf => format!("{:.0}h", value),
            KpiKind::Mttr => format!("{:.2}h", value),
            KpiKind::Availability | KpiKind::Oee => format!("{:.1}%", value),
            KpiKind::Cost => format!("R$ {:.2}M", value),
        }
    }

    /// 格式化目标值（整数目标不带小数）
    pub fn format_target(&self, value: f64) -> String {
        let number = if value.fract().abs() < f64::EPSILON {
            format!("{}", value as i64)
        } else {
            format!("{}", value)
        };
        match self {
            KpiKind::Mtbf | KpiKind::Mttr => format!("{}h", number),
            KpiKind::Availability | KpiKind::Oee => format!("{}%", number),
            KpiKind::Cost => format!("R$ {}M", number),
        }
    }
}

// ==========================================
// 维护工单类型 (Order Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Preventive, // 预防性 (PM)
    Corrective, // 纠正性 (CM)
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Preventive => write!(f, "preventive"),
            OrderType::Corrective => write!(f, "corrective"),
        }
    }
}

// ==========================================
// 维护工单优先级 (Order Priority)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    High,
    Medium,
    Low,
}

// ==========================================
// 维护工单状态 (Order Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,   // 待执行
    Completed, // 已完成
}

// ==========================================
// 积压健康级别 (Backlog Level)
// ==========================================
// 顺序: Good < Attention < Warning < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BacklogLevel {
    Good,      // 正常
    Attention, // 需监控
    Warning,   // 偏高
    Critical,  // 积压失控
}

impl fmt::Display for BacklogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BacklogLevel::Good => write!(f, "good"),
            BacklogLevel::Attention => write!(f, "attention"),
            BacklogLevel::Warning => write!(f, "warning"),
            BacklogLevel::Critical => write!(f, "critical"),
        }
    }
}
