// ==========================================
// 设备维护KPI看板 - 文件解析器
// ==========================================
// 职责: 把上传的分隔符文件解析为原始行 (列名 → 值)
// 支持: CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 文件解析接口
pub trait FileParser {
    /// 解析为原始行（表头 → 单元格值, 均已 trim）
    fn parse_to_rows(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>>;
}

// ==========================================
// CSV Parser 实现
// ==========================================
#[derive(Clone, Copy)]
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_rows(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        tracing::debug!("CSV 解析完成: {} 行数据", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_不存在的文件() {
        let parser = CsvParser;
        let result = parser.parse_to_rows(Path::new("/tmp/nao-existe-999.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_parse_不支持的扩展名() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dados.xlsx");
        std::fs::File::create(&path).unwrap();

        let parser = CsvParser;
        let result = parser.parse_to_rows(&path);
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_parse_基本行与空行() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dados.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,name,month").unwrap();
        writeln!(file, "comp-a1, Compressor A1 ,Ago").unwrap();
        writeln!(file, ",,").unwrap();
        writeln!(file, "este-b2,Esteira B2,Jul").unwrap();
        drop(file);

        let parser = CsvParser;
        let rows = parser.parse_to_rows(&path).unwrap();
        // 完全空白的行被跳过
        assert_eq!(rows.len(), 2);
        // 单元格值已 trim
        assert_eq!(rows[0].get("name").map(|s| s.as_str()), Some("Compressor A1"));
    }
}
