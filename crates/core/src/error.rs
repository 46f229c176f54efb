use thiserror::Error;

/// plcl-core 的错误类型
///
/// 只有严格解析（`FromStr`）和 JSON 加载会返回错误，
/// `resolve` 本身永远不会失败。
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown size: {0}")]
    UnknownSize(String),

    #[error("unknown spacing: {0}")]
    UnknownSpacing(String),

    #[error("unknown radius: {0}")]
    UnknownRadius(String),

    #[error("unknown shadow: {0}")]
    UnknownShadow(String),

    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("invalid props json: {0}")]
    Json(#[from] serde_json::Error),
}
