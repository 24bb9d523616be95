// ==========================================
// 设备维护KPI看板 - 内置演示数据集
// ==========================================
// 职责: 未导入数据时的演示数据（三台设备 × 四个月 + 示例工单）
// 说明: 与 CSV 模板同源, 数值保持一致
// ==========================================

use crate::config::{STATUS_OPERATIONAL, STATUS_SCHEDULED_MAINTENANCE, STATUS_STOPPED};
use crate::domain::types::{Criticality, OrderPriority, OrderStatus, OrderType};
use crate::domain::{Equipment, MaintenanceOrder, MonthlyRecord};
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn record(
    month: &str,
    mtbf: f64,
    mttr: f64,
    availability: f64,
    performance: f64,
    quality: f64,
    cost: f64,
    preventive: u32,
    corrective: u32,
) -> MonthlyRecord {
    MonthlyRecord {
        month: month.to_string(),
        mtbf_h: mtbf,
        mttr_h: mttr,
        availability_pct: availability,
        performance_pct: performance,
        quality_pct: quality,
        cost_m: cost,
        preventive_count: Some(preventive),
        corrective_count: Some(corrective),
    }
}

/// 内置设备列表
pub fn builtin_equipments() -> Vec<Equipment> {
    vec![
        Equipment {
            id: "comp-a1".to_string(),
            name: "Compressor A1".to_string(),
            category: "Compressão".to_string(),
            status: STATUS_OPERATIONAL.to_string(),
            criticality: Criticality::B,
            history: vec![
                record("Mai", 280.0, 3.4, 90.0, 88.0, 96.0, 0.5, 4, 3),
                record("Jun", 310.0, 3.1, 92.0, 90.0, 96.5, 0.45, 5, 2),
                record("Jul", 360.0, 2.8, 95.0, 92.0, 97.5, 0.4, 5, 2),
                record("Ago", 390.0, 2.6, 96.0, 93.0, 98.0, 0.35, 6, 1),
            ],
        },
        Equipment {
            id: "este-b2".to_string(),
            name: "Esteira B2".to_string(),
            category: "Movimentação".to_string(),
            status: STATUS_SCHEDULED_MAINTENANCE.to_string(),
            criticality: Criticality::C,
            history: vec![
                record("Mai", 330.0, 2.7, 93.0, 90.0, 97.0, 0.38, 5, 2),
                record("Jun", 360.0, 2.6, 95.0, 91.0, 97.5, 0.36, 5, 2),
                record("Jul", 410.0, 2.4, 97.0, 93.0, 98.0, 0.34, 6, 1),
                record("Ago", 440.0, 2.2, 98.0, 94.0, 98.5, 0.33, 6, 1),
            ],
        },
        Equipment {
            id: "motor-c3".to_string(),
            name: "Motor C3".to_string(),
            category: "Motorização".to_string(),
            status: STATUS_STOPPED.to_string(),
            criticality: Criticality::A,
            history: vec![
                record("Mai", 270.0, 3.2, 91.0, 85.0, 95.0, 0.62, 3, 4),
                record("Jun", 295.0, 3.0, 92.0, 86.0, 95.5, 0.58, 3, 4),
                record("Jul", 330.0, 2.9, 94.0, 87.0, 96.0, 0.56, 4, 3),
                record("Ago", 365.0, 2.7, 95.0, 88.0, 96.5, 0.52, 4, 2),
            ],
        },
    ]
}

/// 内置示例维护工单
pub fn builtin_orders() -> Vec<MaintenanceOrder> {
    let order = |id: &str,
                 equipment_id: &str,
                 equipment_name: &str,
                 description: &str,
                 order_type: OrderType,
                 priority: OrderPriority,
                 status: OrderStatus,
                 opened: (i32, u32, u32),
                 due: (i32, u32, u32)| MaintenanceOrder {
        id: id.to_string(),
        equipment_id: equipment_id.to_string(),
        equipment_name: equipment_name.to_string(),
        description: description.to_string(),
        order_type,
        priority,
        status,
        opened_date: NaiveDate::from_ymd_opt(opened.0, opened.1, opened.2)
            .unwrap_or_default(),
        due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap_or_default(),
    };

    vec![
        order(
            "OM-2024-101",
            "comp-a1",
            "Compressor A1",
            "Troca de filtro de ar",
            OrderType::Preventive,
            OrderPriority::Medium,
            OrderStatus::Pending,
            (2024, 8, 5),
            (2024, 8, 25),
        ),
        order(
            "OM-2024-102",
            "comp-a1",
            "Compressor A1",
            "Lubrificação programada",
            OrderType::Preventive,
            OrderPriority::Low,
            OrderStatus::Completed,
            (2024, 7, 20),
            (2024, 8, 2),
        ),
        order(
            "OM-2024-103",
            "este-b2",
            "Esteira B2",
            "Alinhamento de correia",
            OrderType::Preventive,
            OrderPriority::Medium,
            OrderStatus::Pending,
            (2024, 8, 8),
            (2024, 8, 22),
        ),
        order(
            "OM-2024-104",
            "motor-c3",
            "Motor C3",
            "Substituição de rolamento",
            OrderType::Corrective,
            OrderPriority::High,
            OrderStatus::Pending,
            (2024, 7, 28),
            (2024, 8, 10),
        ),
        order(
            "OM-2024-105",
            "motor-c3",
            "Motor C3",
            "Inspeção de vibração",
            OrderType::Preventive,
            OrderPriority::High,
            OrderStatus::Pending,
            (2024, 8, 4),
            (2024, 8, 18),
        ),
        order(
            "OM-2024-106",
            "este-b2",
            "Esteira B2",
            "Reparo de roletes",
            OrderType::Corrective,
            OrderPriority::Medium,
            OrderStatus::Completed,
            (2024, 7, 10),
            (2024, 7, 25),
        ),
    ]
}
