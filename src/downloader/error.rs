use std::fmt;

use crate::common::errors::ApiError;
use crate::parser::errors::ParseError;

#[derive(Debug)]
pub enum DownloadError {
    HttpError(reqwest::Error),
    IoError(std::io::Error),
    ApiError(ApiError),
    Selection(ParseError),
    StreamError(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::HttpError(e) => write!(f, "HTTP错误: {}", e),
            DownloadError::IoError(e) => write!(f, "IO错误: {}", e),
            DownloadError::ApiError(e) => write!(f, "接口错误: {}", e),
            DownloadError::Selection(e) => write!(f, "流筛选失败: {}", e),
            DownloadError::StreamError(msg) => write!(f, "流读取错误: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

impl From<reqwest::Error> for DownloadError {
    fn from(error: reqwest::Error) -> Self {
        DownloadError::HttpError(error)
    }
}

impl From<std::io::Error> for DownloadError {
    fn from(error: std::io::Error) -> Self {
        DownloadError::IoError(error)
    }
}

impl From<ApiError> for DownloadError {
    fn from(error: ApiError) -> Self {
        DownloadError::ApiError(error)
    }
}

impl From<ParseError> for DownloadError {
    fn from(error: ParseError) -> Self {
        DownloadError::Selection(error)
    }
}
