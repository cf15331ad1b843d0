use std::path::PathBuf;

use crate::common::client::TubeClient;
use crate::parser::errors::ParseError;
use crate::parser::models::VideoList;

pub mod core;
pub mod error;

use error::DownloadError;

pub struct VideoDownloader {
    client: TubeClient,
}

impl VideoDownloader {
    pub fn new(client: TubeClient) -> Self {
        Self { client }
    }

    /// 从列表里挑一条流下载。
    /// 先按清晰度和格式筛选，不管剩几条，下载第一条
    pub async fn download(
        &self,
        list: &VideoList,
        dir: &str,
        filename: &str,
        quality: &str,
        format: &str,
    ) -> Result<PathBuf, DownloadError> {
        let narrowed = list.filter(quality, format)?;
        let stream = narrowed.streams.into_iter().next().ok_or_else(|| {
            DownloadError::Selection(ParseError::NoMatchingStream {
                quality: quality.to_string(),
                format: format.to_string(),
            })
        })?;
        core::download_stream(&self.client, &stream, dir, filename).await
    }
}
