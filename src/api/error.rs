// ==========================================
// 设备维护KPI看板 - API层错误类型
// ==========================================
// 职责: 面向调用方的错误类型, 包装导入层错误
// 红线: 错误信息必须包含显式原因（可解释性）
// ==========================================

use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 业务规则错误 =====
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    #[error("Recurso não encontrado: {0}")]
    NotFound(String),

    // ===== 导入错误 =====
    // 导入失败保留底层原因; 既有数据集保持不变
    #[error("Falha ao importar arquivo: {0}")]
    ImportFailed(#[from] ImportError),

    // ===== 通用错误 =====
    #[error("Erro interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
