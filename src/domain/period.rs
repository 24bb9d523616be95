// ==========================================
// 设备维护KPI看板 - 统计周期
// ==========================================
// 职责: 可选时间窗定义（静态配置, 不由数据派生）
// ==========================================

use serde::{Deserialize, Serialize};

/// 统计周期（尾随若干个月的命名选择）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// 周期标识（如 "3m"）
    pub id: String,

    /// 展示标签（如 "Últimos 3 meses"）
    pub label: String,

    /// 月份缩写序列（时间顺序, 长度 ≥1）
    pub months: Vec<String>,
}

impl Period {
    /// 周期内最后一个月
    pub fn last_month(&self) -> Option<&str> {
        self.months.last().map(|m| m.as_str())
    }

    /// 周期内倒数第二个月（周期长度为 1 时不存在）
    pub fn prev_month(&self) -> Option<&str> {
        if self.months.len() < 2 {
            return None;
        }
        self.months.get(self.months.len() - 2).map(|m| m.as_str())
    }
}
