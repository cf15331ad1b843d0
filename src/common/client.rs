use std::time::Duration;

use reqwest::{
    Client, ClientBuilder, Response,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::common::errors::ApiError;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

// 携带默认请求头的客户端，元数据请求和视频流下载共用
#[derive(Debug, Clone)]
pub struct TubeClient {
    pub inner: Client,
}

impl TubeClient {
    pub fn new() -> Self {
        let headers = Self::default_headers();
        Self {
            inner: ClientBuilder::new()
                .default_headers(headers)
                .connect_timeout(Duration::from_secs(10))
                .build()
                .expect("构建HTTP客户端失败"),
        }
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers
    }

    /// 请求文本内容（用于元数据接口）
    pub async fn get_text(&self, url: &str, params: &[(&str, &str)]) -> Result<String, ApiError> {
        debug!("GET {} params: {:?}", url, params);
        let resp = self
            .inner
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }

    /// 请求原始响应（用于视频流下载）
    pub async fn get_raw_response(&self, url: &str) -> Result<Response, ApiError> {
        debug!("GET {}", url);
        Ok(self.inner.get(url).send().await?)
    }
}

impl Default for TubeClient {
    fn default() -> Self {
        Self::new()
    }
}
