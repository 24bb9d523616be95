// ==========================================
// CSV 导入集成测试
// ==========================================
// 测试范围:
// 1. 模板文件的完整导入回路
// 2. 数据集替换语义（成功才替换, 失败不变）
// 3. 可选列与默认值口径
// ==========================================

use maintenance_kpi_dashboard::api::{DashboardApi, FilterSelection};
use maintenance_kpi_dashboard::domain::types::Criticality;
use maintenance_kpi_dashboard::importer::{
    write_template, CsvEquipmentImporter, EquipmentImport, ImportError, TEMPLATE_CSV,
};
use std::io::Write;
use std::path::PathBuf;

/// 把内容写到临时 CSV 文件
fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("无法创建临时文件");
    file.write_all(content.as_bytes()).expect("写入失败");
    path
}

#[tokio::test]
async fn test_import_模板文件完整回路() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_template(Some(dir.path())).unwrap();

    let importer = CsvEquipmentImporter::new();
    let report = importer.import_file(&path).await.expect("导入失败");

    assert_eq!(report.rows_total, 12);
    assert_eq!(report.rows_skipped, 0);
    assert_eq!(report.equipments.len(), 3);

    // 历史按规范月份序
    for equipment in &report.equipments {
        let months: Vec<&str> = equipment.history.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["Mai", "Jun", "Jul", "Ago"]);
    }

    // 模板无 Criticidade 列: 导入默认关键度 B
    assert!(report.equipments.iter().all(|e| e.criticality == Criticality::B));
    assert_eq!(report.equipments[2].status, "Parado");
}

#[tokio::test]
async fn test_import_替换数据集并重算() {
    let dir = tempfile::tempdir().unwrap();
    let content = "\
id,name,category,month,MTBF,MTTR,Disponibilidade,Custo,Status
bomba-d4,Bomba D4,Bombeamento,Jul,200,4.0,88,0.7,Operacional
bomba-d4,Bomba D4,Bombeamento,Ago,220,3.8,89,0.65,Operacional
";
    let path = write_csv(&dir, "dados.csv", content);

    let mut api = DashboardApi::new();
    assert_eq!(api.equipments().len(), 3);

    let report = api.import_csv_file(&path).await.expect("导入失败");
    assert_eq!(report.equipments.len(), 1);

    // 数据集整体替换
    assert_eq!(api.equipments().len(), 1);
    assert_eq!(api.equipments()[0].id, "bomba-d4");

    // 新数据集上重算: 可用率 89 低于最低可接受 90 → critical
    let view = api.dashboard(&FilterSelection::period("2m")).expect("计算失败");
    assert!(view
        .alerts
        .iter()
        .any(|a| a.equipment_id == "bomba-d4" && a.kpi == "Disponibilidade"));
}

#[tokio::test]
async fn test_import_失败不替换数据集() {
    let dir = tempfile::tempdir().unwrap();
    // 缺少必需列 MTBF
    let content = "\
id,name,category,month,MTTR,Disponibilidade,Custo,Status
e1,Equip 1,Teste,Ago,2.5,95,0.4,Operacional
";
    let path = write_csv(&dir, "quebrado.csv", content);

    let mut api = DashboardApi::new();
    let before: Vec<String> = api.equipments().iter().map(|e| e.id.clone()).collect();

    let result = api.import_csv_file(&path).await;
    assert!(result.is_err());

    // 既有数据集保持不变
    let after: Vec<String> = api.equipments().iter().map(|e| e.id.clone()).collect();
    assert_eq!(before, after);

    // 看板仍可在旧数据集上计算
    let view = api.dashboard(&FilterSelection::period("3m")).expect("计算失败");
    assert_eq!(view.ranking.len(), 3);
}

#[tokio::test]
async fn test_import_文件不存在() {
    let importer = CsvEquipmentImporter::new();
    let result = importer
        .import_file(std::path::Path::new("/tmp/nao-existe-kpi.csv"))
        .await;
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[tokio::test]
async fn test_import_仅表头视为空文件() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "vazio.csv",
        "id,name,category,month,MTBF,MTTR,Disponibilidade,Custo,Status\n",
    );

    let importer = CsvEquipmentImporter::new();
    let result = importer.import_file(&path).await;
    assert!(matches!(result, Err(ImportError::EmptyFile)));
}

#[tokio::test]
async fn test_import_可选列与关键度() {
    let dir = tempfile::tempdir().unwrap();
    let content = "\
id,name,category,month,MTBF,MTTR,Disponibilidade,Custo,Status,Performance,Qualidade,Preventivas,Corretivas,Criticidade
motor-x1,Motor X1,Motorização,Ago,365,2.7,95,0.52,Parado,88,96.5,4,2,A
";
    let path = write_csv(&dir, "enriquecido.csv", content);

    let mut api = DashboardApi::new();
    api.import_csv_file(&path).await.expect("导入失败");

    let equipment = &api.equipments()[0];
    assert_eq!(equipment.criticality, Criticality::A);
    assert_eq!(equipment.history[0].performance_pct, 88.0);
    assert_eq!(equipment.history[0].preventive_count, Some(4));

    // 关键度 A + Parado: 导入后的停机规则生效
    let view = api.dashboard(&FilterSelection::period("2m")).expect("计算失败");
    assert!(view.alerts.iter().any(|a| a.kpi == "Status"));
}

#[tokio::test]
async fn test_import_空id行与重复月份() {
    let dir = tempfile::tempdir().unwrap();
    let content = "\
id,name,category,month,MTBF,MTTR,Disponibilidade,Custo,Status
,Sem Id,Teste,Ago,100,2.0,90,0.4,Operacional
e1,Equip 1,Teste,Ago,100,2.0,90,0.4,Operacional
e1,Equip 1,Teste,Ago,390,2.6,96,0.35,Operacional
";
    let path = write_csv(&dir, "duplicado.csv", content);

    let importer = CsvEquipmentImporter::new();
    let report = importer.import_file(&path).await.expect("导入失败");

    assert_eq!(report.rows_total, 3);
    assert_eq!(report.rows_skipped, 1);
    assert_eq!(report.equipments.len(), 1);

    // 同设备同月: 后写覆盖
    let history = &report.equipments[0].history;
    assert_eq!(history.len(), 1);
    assert!((history[0].mtbf_h - 390.0).abs() < 1e-9);
}

#[test]
fn test_template_内容与外部格式一致() {
    // 表头必须与约定的外部接口一致
    let header = TEMPLATE_CSV.lines().next().unwrap();
    assert_eq!(
        header,
        "id,name,category,month,MTBF,MTTR,Disponibilidade,Custo,Status"
    );
    // 三台设备 × 四个月 = 12 行数据
    assert_eq!(TEMPLATE_CSV.lines().count(), 13);
}
