// ==========================================
// 集成测试 - 测试数据构造器
// ==========================================
// 用途: 以链式调用构造设备与历史记录, 减少测试样板
// ==========================================

use maintenance_kpi_dashboard::domain::types::Criticality;
use maintenance_kpi_dashboard::domain::{Equipment, MonthlyRecord, Period};

/// 设备构造器
pub struct EquipmentBuilder {
    equipment: Equipment,
}

impl EquipmentBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            equipment: Equipment {
                id: id.to_string(),
                name: id.to_uppercase(),
                category: "Teste".to_string(),
                status: "Operacional".to_string(),
                criticality: Criticality::B,
                history: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.equipment.name = name.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.equipment.category = category.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.equipment.status = status.to_string();
        self
    }

    pub fn criticality(mut self, criticality: Criticality) -> Self {
        self.equipment.criticality = criticality;
        self
    }

    /// 追加一条逐月记录（性能率/质量率取固定合理值）
    pub fn record(mut self, month: &str, mtbf: f64, mttr: f64, availability: f64, cost: f64) -> Self {
        self.equipment.history.push(MonthlyRecord {
            month: month.to_string(),
            mtbf_h: mtbf,
            mttr_h: mttr,
            availability_pct: availability,
            performance_pct: 92.0,
            quality_pct: 97.0,
            cost_m: cost,
            preventive_count: Some(5),
            corrective_count: Some(2),
        });
        self
    }

    pub fn build(self) -> Equipment {
        self.equipment
    }
}

/// 周期构造器
pub fn make_period(id: &str, months: &[&str]) -> Period {
    Period {
        id: id.to_string(),
        label: format!("Período {}", id),
        months: months.iter().map(|m| m.to_string()).collect(),
    }
}
