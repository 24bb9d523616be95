// ==========================================
// 设备维护KPI看板 - 看板 API
// ==========================================
// 职责: 持有当前数据集（唯一事实）, 应用过滤条件,
//       每次调用重新驱动纯引擎计算, 不做隐藏缓存
// 红线: 导入成功才整体换引用（后写覆盖）, 失败不部分替换;
//       引擎输出为全新分配的只读投影
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{default_periods, KpiTargetTable};
use crate::dataset;
use crate::domain::types::{KpiKind, KpiStatus};
use crate::domain::{
    BacklogSummary, CriticalAlert, Equipment, EquipmentRanked, KpiCard, KpiSeriesPoint, KpiStats,
    KpiTarget, MaintenanceOrder, MonthlyRecord, Period, PmCmPoint,
};
use crate::engine::{AlertEngine, BacklogEngine, ConsolidationEngine, KpiEngine, RankingEngine};
use crate::importer::{CsvEquipmentImporter, EquipmentImport, ImportReport};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// FilterSelection - 过滤条件
// ==========================================
// 展示层持有选择状态, 每次重算时传入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    /// 周期标识（必选）
    pub period_id: String,

    /// 分类过滤（None = 全部）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// 设备过滤（None = 全部）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<String>,
}

impl FilterSelection {
    /// 只选周期, 不过滤分类/设备
    pub fn period(period_id: &str) -> Self {
        Self {
            period_id: period_id.to_string(),
            category: None,
            equipment_id: None,
        }
    }
}

// ==========================================
// DashboardView - 看板聚合视图
// ==========================================
// 一次过滤变更对应一次完整重算的输出
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// 选中的周期
    pub period: Period,

    /// 合并后的周期序列（趋势图数据）
    pub consolidated: Vec<MonthlyRecord>,

    /// KPI 卡片（固定 5 张）
    pub kpi_cards: Vec<KpiCard>,

    /// 可用率排名
    pub ranking: Vec<EquipmentRanked>,

    /// 严重告警列表
    pub alerts: Vec<CriticalAlert>,

    /// PM/CM 逐月比例
    pub pm_cm: Vec<PmCmPoint>,

    /// 末月 PM 占比对照 pm_ratio 目标的状态
    pub pm_status: KpiStatus,
}

// ==========================================
// KpiDetailView - KPI 详情视图（下钻）
// ==========================================
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiDetailView {
    /// 指标种类
    pub kind: KpiKind,

    /// 逐月取值序列
    pub series: Vec<KpiSeriesPoint>,

    /// 周期统计（空序列时缺省）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<KpiStats>,

    /// 目标阈值
    pub target: KpiTarget,

    /// 单位字符串
    pub unit: String,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    /// 当前数据集（内置或最近一次成功导入）
    equipments: Vec<Equipment>,

    /// 维护工单（积压补充上下文）
    orders: Vec<MaintenanceOrder>,

    /// KPI 目标表（启动即定型）
    targets: KpiTargetTable,

    /// 可选周期（启动即定型）
    periods: Vec<Period>,

    // 引擎（全部无状态）
    consolidation: ConsolidationEngine,
    kpi: KpiEngine,
    ranking: RankingEngine,
    alerts: AlertEngine,
    backlog: BacklogEngine,
    importer: CsvEquipmentImporter,
}

impl DashboardApi {
    /// 创建看板 API（内置演示数据集）
    pub fn new() -> Self {
        Self::with_dataset(dataset::builtin_equipments(), dataset::builtin_orders())
    }

    /// 创建看板 API（自有数据集）
    pub fn with_dataset(equipments: Vec<Equipment>, orders: Vec<MaintenanceOrder>) -> Self {
        Self {
            equipments,
            orders,
            targets: KpiTargetTable::default(),
            periods: default_periods(),
            consolidation: ConsolidationEngine::new(),
            kpi: KpiEngine::new(),
            ranking: RankingEngine::new(),
            alerts: AlertEngine::new(),
            backlog: BacklogEngine::new(),
            importer: CsvEquipmentImporter::new(),
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 当前数据集（只读）
    pub fn equipments(&self) -> &[Equipment] {
        &self.equipments
    }

    /// 可选周期列表
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// KPI 目标表
    pub fn targets(&self) -> &KpiTargetTable {
        &self.targets
    }

    /// 按标识查周期
    pub fn find_period(&self, period_id: &str) -> ApiResult<&Period> {
        self.periods
            .iter()
            .find(|p| p.id == period_id)
            .ok_or_else(|| ApiError::NotFound(format!("período '{}'", period_id)))
    }

    /// 去重排序后的分类列表（分类下拉框选项）
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.equipments.iter().map(|e| e.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// 设备下拉框选项（按分类预过滤）
    pub fn equipment_options(&self, category: Option<&str>) -> Vec<&Equipment> {
        self.equipments
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .collect()
    }

    /// 按过滤条件计算设备列表
    pub fn filtered_equipments(&self, selection: &FilterSelection) -> Vec<Equipment> {
        self.equipments
            .iter()
            .filter(|e| {
                selection
                    .category
                    .as_deref()
                    .map_or(true, |c| c.is_empty() || e.category == c)
            })
            .filter(|e| {
                selection
                    .equipment_id
                    .as_deref()
                    .map_or(true, |id| id.is_empty() || e.id == id)
            })
            .cloned()
            .collect()
    }

    // ==========================================
    // 聚合计算接口
    // ==========================================

    /// 计算看板聚合视图
    ///
    /// 每次调用全量重算: 合并 → KPI 派生 → 排名 → 告警 → PM/CM。
    pub fn dashboard(&self, selection: &FilterSelection) -> ApiResult<DashboardView> {
        let period = self.find_period(&selection.period_id)?.clone();
        let filtered = self.filtered_equipments(selection);

        tracing::debug!(
            "重算看板: período={}, {} 台设备",
            period.id,
            filtered.len()
        );

        let consolidated = self.consolidation.consolidate(&filtered, &period);
        let kpi_cards = self.kpi.derive_kpis(&consolidated, &self.targets);
        let ranking = self.ranking.rank_by_availability(&filtered, &period);
        let alerts = self.alerts.generate_alerts(&filtered, &period, &self.targets);
        let pm_cm = self.backlog.pm_cm_series(&consolidated);
        let pm_status = self.backlog.pm_status(&pm_cm, &self.targets.pm_ratio);

        Ok(DashboardView {
            period,
            consolidated,
            kpi_cards,
            ranking,
            alerts,
            pm_cm,
            pm_status,
        })
    }

    /// KPI 详情视图（下钻）
    pub fn kpi_detail(&self, selection: &FilterSelection, kind: KpiKind) -> ApiResult<KpiDetailView> {
        let period = self.find_period(&selection.period_id)?;
        let filtered = self.filtered_equipments(selection);
        let consolidated = self.consolidation.consolidate(&filtered, period);

        let series = self.kpi.kpi_series(&consolidated, kind);
        let stats = self.kpi.kpi_stats(&series);

        Ok(KpiDetailView {
            kind,
            series,
            stats,
            target: *self.targets.for_kind(kind),
            unit: kind.unit().to_string(),
        })
    }

    /// 积压摘要（基准日期由调用方注入）
    pub fn backlog_summary(&self, today: NaiveDate) -> BacklogSummary {
        self.backlog.summarize(&self.orders, today)
    }

    // ==========================================
    // 导入接口
    // ==========================================

    /// 导入 CSV 文件并替换当前数据集
    ///
    /// 导入失败时返回错误且既有数据集保持不变（不部分替换）。
    pub async fn import_csv_file(&mut self, path: &Path) -> ApiResult<ImportReport> {
        let report = self.importer.import_file(path).await?;

        // 成功后才整体换引用
        self.equipments = report.equipments.clone();
        tracing::info!(
            "数据集已替换: batch={}, {} 台设备",
            report.batch_id,
            self.equipments.len()
        );

        Ok(report)
    }
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_period() {
        let api = DashboardApi::new();
        assert_eq!(api.find_period("3m").unwrap().months.len(), 3);
        assert!(matches!(api.find_period("99m"), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_categories_去重排序() {
        let api = DashboardApi::new();
        let categories = api.categories();
        assert_eq!(categories, vec!["Compressão", "Motorização", "Movimentação"]);
    }

    #[test]
    fn test_filtered_equipments() {
        let api = DashboardApi::new();

        // 无过滤: 全部
        let all = api.filtered_equipments(&FilterSelection::period("3m"));
        assert_eq!(all.len(), 3);

        // 按分类
        let mut selection = FilterSelection::period("3m");
        selection.category = Some("Motorização".to_string());
        let filtered = api.filtered_equipments(&selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "motor-c3");

        // 空字符串等价于不过滤
        selection.category = Some(String::new());
        assert_eq!(api.filtered_equipments(&selection).len(), 3);

        // 按设备 id
        let mut by_id = FilterSelection::period("3m");
        by_id.equipment_id = Some("este-b2".to_string());
        let filtered = api.filtered_equipments(&by_id);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_equipment_options_按分类预过滤() {
        let api = DashboardApi::new();
        assert_eq!(api.equipment_options(None).len(), 3);
        assert_eq!(api.equipment_options(Some("Compressão")).len(), 1);
        assert!(api.equipment_options(Some("Inexistente")).is_empty());
    }
}
