// ==========================================
// 设备维护KPI看板 - 导入层
// ==========================================
// 职责: 外部分隔符数据 → 领域设备结构
// 支持: CSV
// ==========================================

// 模块声明
pub mod equipment_importer;
pub mod error;
pub mod file_parser;
pub mod template;

// 重导出核心类型
pub use equipment_importer::{CsvEquipmentImporter, ImportReport};
pub use error::{ImportError, ImportResult};
pub use file_parser::CsvParser;
pub use template::{write_template, TEMPLATE_CSV, TEMPLATE_FILE_NAME};

// 重导出 Trait 接口
pub use equipment_importer::EquipmentImport;
pub use file_parser::FileParser;
