// ==========================================
// 设备维护KPI看板 - 告警引擎
// ==========================================
// 职责: 逐设备检查周期末月指标, 生成严重告警列表
// 红线: 告警必须可解释（触发指标 + 当前值 + 名义目标值）
// ==========================================
// 检查清单（每设备按序独立触发）:
// 1. 可用率 < 最低可接受 → critical; 否则 < 目标 → warning
// 2. MTBF < 最低可接受 → critical（无 warning 档）
// 3. MTTR > 可接受上限 → critical（无 warning 档）
// 4. OEE < 最低可接受 → critical（无 warning 档）
// 5. 关键度 A 且状态停机 → critical（独立于数值指标）
// 输出按级别稳定排序: critical → warning → info
// ==========================================

use crate::config::{KpiTargetTable, STATUS_OPERATIONAL, STATUS_STOPPED};
use crate::domain::types::{AlertSeverity, Criticality, KpiKind};
use crate::domain::{CriticalAlert, Equipment, MonthlyRecord, Period};
use crate::i18n::t_with_args;

// ==========================================
// AlertEngine - 告警引擎
// ==========================================
pub struct AlertEngine;

impl AlertEngine {
    /// 创建新的告警引擎
    pub fn new() -> Self {
        Self
    }

    /// 生成严重告警列表
    ///
    /// # 参数
    /// - `equipments`: 已过滤的设备列表
    /// - `period`: 统计周期（只检查末月）
    /// - `targets`: KPI 目标表
    ///
    /// # 返回
    /// 按级别稳定排序的告警列表; 末月无记录的设备跳过数值检查。
    pub fn generate_alerts(
        &self,
        equipments: &[Equipment],
        period: &Period,
        targets: &KpiTargetTable,
    ) -> Vec<CriticalAlert> {
        let mut alerts = Vec::new();

        let last_month = match period.last_month() {
            Some(m) => m,
            None => return alerts,
        };

        for equipment in equipments {
            if let Some(record) = equipment.record_for_month(last_month) {
                self.check_record(equipment, record, targets, &mut alerts);
            }

            // 关键设备停机规则: 独立于数值指标, 无末月记录也触发
            if equipment.criticality == Criticality::A && equipment.status == STATUS_STOPPED {
                alerts.push(CriticalAlert {
                    equipment_id: equipment.id.clone(),
                    equipment_name: equipment.name.clone(),
                    message: crate::i18n::t("alert.critical_asset_stopped"),
                    severity: AlertSeverity::Critical,
                    kpi: "Status".to_string(),
                    current_value: equipment.status.clone(),
                    target_value: STATUS_OPERATIONAL.to_string(),
                });
            }
        }

        if !alerts.is_empty() {
            tracing::info!("生成告警 {} 条", alerts.len());
        }

        Self::sort_by_severity(&mut alerts);
        alerts
    }

    /// 按级别稳定排序（critical → warning → info, 同级保持生成顺序）
    pub fn sort_by_severity(alerts: &mut [CriticalAlert]) {
        alerts.sort_by_key(|a| a.severity);
    }

    // ==========================================
    // 数值指标检查
    // ==========================================

    fn check_record(
        &self,
        equipment: &Equipment,
        record: &MonthlyRecord,
        targets: &KpiTargetTable,
        alerts: &mut Vec<CriticalAlert>,
    ) {
        // 1. 可用率: 双档（最低可接受与目标互斥成立）
        let availability = targets.for_kind(KpiKind::Availability);
        if record.availability_pct < availability.minimum_acceptable {
            alerts.push(self.numeric_alert(
                equipment,
                KpiKind::Availability,
                AlertSeverity::Critical,
                t_with_args(
                    "alert.availability_critical",
                    &[
                        ("value", &KpiKind::Availability.format_value(record.availability_pct)),
                        ("min", &KpiKind::Availability.format_target(availability.minimum_acceptable)),
                    ],
                ),
                record.availability_pct,
                availability.target,
            ));
        } else if record.availability_pct < availability.target {
            alerts.push(self.numeric_alert(
                equipment,
                KpiKind::Availability,
                AlertSeverity::Warning,
                t_with_args(
                    "alert.availability_warning",
                    &[
                        ("value", &KpiKind::Availability.format_value(record.availability_pct)),
                        ("target", &KpiKind::Availability.format_target(availability.target)),
                    ],
                ),
                record.availability_pct,
                availability.target,
            ));
        }

        // 2. MTBF: 仅 critical 档
        let mtbf = targets.for_kind(KpiKind::Mtbf);
        if record.mtbf_h < mtbf.minimum_acceptable {
            alerts.push(self.numeric_alert(
                equipment,
                KpiKind::Mtbf,
                AlertSeverity::Critical,
                t_with_args(
                    "alert.mtbf_critical",
                    &[
                        ("value", &KpiKind::Mtbf.format_value(record.mtbf_h)),
                        ("min", &KpiKind::Mtbf.format_target(mtbf.minimum_acceptable)),
                    ],
                ),
                record.mtbf_h,
                mtbf.target,
            ));
        }

        // 3. MTTR: 方向取反, 超过可接受上限才告警
        let mttr = targets.for_kind(KpiKind::Mttr);
        if record.mttr_h > mttr.minimum_acceptable {
            alerts.push(self.numeric_alert(
                equipment,
                KpiKind::Mttr,
                AlertSeverity::Critical,
                t_with_args(
                    "alert.mttr_critical",
                    &[
                        ("value", &KpiKind::Mttr.format_value(record.mttr_h)),
                        ("max", &KpiKind::Mttr.format_target(mttr.minimum_acceptable)),
                    ],
                ),
                record.mttr_h,
                mttr.target,
            ));
        }

        // 4. OEE: 派生值, 仅 critical 档
        let oee_target = targets.for_kind(KpiKind::Oee);
        let oee = record.oee_pct();
        if oee < oee_target.minimum_acceptable {
            alerts.push(self.numeric_alert(
                equipment,
                KpiKind::Oee,
                AlertSeverity::Critical,
                t_with_args(
                    "alert.oee_critical",
                    &[
                        ("value", &KpiKind::Oee.format_value(oee)),
                        ("min", &KpiKind::Oee.format_target(oee_target.minimum_acceptable)),
                    ],
                ),
                oee,
                oee_target.target,
            ));
        }
    }

    /// 构造数值型告警（目标值记录名义目标, 非最低可接受值）
    fn numeric_alert(
        &self,
        equipment: &Equipment,
        kind: KpiKind,
        severity: AlertSeverity,
        message: String,
        current: f64,
        target: f64,
    ) -> CriticalAlert {
        CriticalAlert {
            equipment_id: equipment.id.clone(),
            equipment_name: equipment.name.clone(),
            message,
            severity,
            kpi: kind.name().to_string(),
            current_value: kind.format_value(current),
            target_value: kind.format_target(target),
        }
    }
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new()
    }
}
