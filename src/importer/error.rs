// ==========================================
// 设备维护KPI看板 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 错误消息面向用户（pt-BR）, 必须携带底层原因
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Formato de arquivo não suportado: {0} (apenas .csv)")]
    UnsupportedFormat(String),

    #[error("Erro ao ler arquivo: {0}")]
    FileReadError(String),

    #[error("Erro ao processar CSV: {0}")]
    CsvParseError(String),

    // ===== 数据结构错误 =====
    #[error("Coluna obrigatória ausente: {0}")]
    MissingColumn(String),

    #[error("Arquivo sem linhas de dados")]
    EmptyFile,

    // ===== 通用错误 =====
    #[error("Erro interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
