// ==========================================
// 设备维护KPI看板 - 严重告警
// ==========================================
// 职责: 单条违规记录（派生、短生命周期）
// 红线: 告警必须可解释 — 携带触发指标、当前值与名义目标值
// ==========================================

use crate::domain::types::AlertSeverity;
use serde::{Deserialize, Serialize};

/// 严重告警（设备在周期末月违反阈值, 或关键设备停机）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalAlert {
    /// 设备标识
    pub equipment_id: String,

    /// 设备名称
    pub equipment_name: String,

    /// 可读消息（固定标签集, pt-BR）
    pub message: String,

    /// 告警级别
    pub severity: AlertSeverity,

    /// 触发指标名（"Disponibilidade"/"MTBF"/…；停机规则为 "Status"）
    pub kpi: String,

    /// 当前值（按指标精度格式化; 停机规则为状态文本）
    pub current_value: String,

    /// 名义目标值（非最低可接受值; 停机规则为期望状态文本）
    pub target_value: String,
}
