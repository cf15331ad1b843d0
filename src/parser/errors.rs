use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("无效的URL")]
    InvalidUrl,
    #[error("链接中未找到视频ID")]
    MissingVideoId,
    #[error("网络请求失败: {0}")]
    NetworkError(String),
    #[error("YouTube接口错误: {0}")]
    ApiError(String),
    #[error("解析错误: {0}")]
    ParseError(String),
    #[error("没有匹配的视频流 (清晰度: {quality:?}, 格式: {format:?})")]
    NoMatchingStream { quality: String, format: String },
}

impl From<crate::common::errors::ApiError> for ParseError {
    fn from(err: crate::common::errors::ApiError) -> Self {
        match err {
            crate::common::errors::ApiError::Reqwest(e) => ParseError::NetworkError(e.to_string()),
            crate::common::errors::ApiError::InvalidResponse(msg) => ParseError::ParseError(msg),
            crate::common::errors::ApiError::Unknown(msg) => ParseError::ApiError(msg),
        }
    }
}
