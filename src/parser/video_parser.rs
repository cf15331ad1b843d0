use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::common::client::TubeClient;
use crate::parser::errors::ParseError;
use crate::parser::models::{StreamFormat, StreamQuality, VideoList, VideoStream};
use crate::parser::parser_trait::Parser;

const VIDEO_INFO_ENDPOINT: &str = "https://www.youtube.com/get_video_info";

pub struct VideoParser {
    client: TubeClient,
}

#[async_trait]
impl Parser for VideoParser {
    async fn parse(&mut self, video_id: &str) -> Result<VideoList, ParseError> {
        // 获取视频信息文档
        let doc = self.get_video_info(video_id).await?;

        // 解析出流列表
        parse_info_document(&doc)
    }
}

impl VideoParser {
    pub fn new(client: TubeClient) -> Self {
        Self { client }
    }

    // 获取视频信息，返回form-urlencoded格式的文档
    async fn get_video_info(&self, video_id: &str) -> Result<String, ParseError> {
        let doc = self
            .client
            .get_text(VIDEO_INFO_ENDPOINT, &[("video_id", video_id)])
            .await?;
        debug!("视频信息文档长度: {} 字节", doc.len());
        Ok(doc)
    }
}

/// 解析 get_video_info 返回的文档。
/// 老版接口把流列表放在 url_encoded_fmt_stream_map 里，
/// 新版只有 player_response 这个内嵌JSON，两种都要认
pub fn parse_info_document(doc: &str) -> Result<VideoList, ParseError> {
    let fields: HashMap<String, String> = form_urlencoded::parse(doc.as_bytes())
        .into_owned()
        .collect();

    if fields.get("status").map(String::as_str) == Some("fail") {
        let reason = fields
            .get("reason")
            .cloned()
            .unwrap_or_else(|| "未知原因".to_string());
        return Err(ParseError::ApiError(reason));
    }

    if let Some(raw_map) = fields.get("url_encoded_fmt_stream_map") {
        let title = fields.get("title").cloned().unwrap_or_default();
        if title.is_empty() {
            warn!("视频信息里没有标题");
        }
        return Ok(parse_stream_map(&title, raw_map));
    }

    if let Some(raw_json) = fields.get("player_response") {
        return parse_player_response(raw_json);
    }

    Err(ParseError::ParseError("未找到可用的流信息".to_string()))
}

// 老版流列表：逗号分隔，每一项自身又是form-urlencoded，
// 带 url / quality / type 三个键，type 在分号处截断成纯MIME
fn parse_stream_map(title: &str, raw_map: &str) -> VideoList {
    let mut list = VideoList::new(title);
    for entry in raw_map.split(',') {
        if entry.is_empty() {
            continue;
        }
        let pairs: HashMap<String, String> = form_urlencoded::parse(entry.as_bytes())
            .into_owned()
            .collect();
        let url = pairs.get("url").cloned().unwrap_or_default();
        let quality = pairs.get("quality").cloned().unwrap_or_default();
        let mime = pairs
            .get("type")
            .map(|t| t.split(';').next().unwrap_or("").trim().to_string())
            .unwrap_or_default();
        list.append(VideoStream::new(
            url,
            StreamQuality::parse(&quality),
            StreamFormat::parse(&mime),
        ));
    }
    list
}

// 新版接口的内嵌JSON，渐进流和自适应流都收进来
fn parse_player_response(raw_json: &str) -> Result<VideoList, ParseError> {
    let response: PlayerResponse = serde_json::from_str(raw_json)
        .map_err(|e| ParseError::ParseError(format!("player_response 解析失败: {}", e)))?;

    let title = response
        .video_details
        .map(|d| d.title)
        .unwrap_or_default();
    if title.is_empty() {
        warn!("player_response 里没有标题");
    }

    let mut list = VideoList::new(title);
    let streaming = response
        .streaming_data
        .ok_or_else(|| ParseError::ParseError("player_response 里没有流数据".to_string()))?;

    for format in streaming
        .formats
        .into_iter()
        .chain(streaming.adaptive_formats)
    {
        // 带签名保护的流没有直链，跳过
        let Some(url) = format.url else {
            debug!("跳过无直链的流: itag={:?}", format.itag);
            continue;
        };
        let quality = format.quality.unwrap_or_default();
        let mime = format
            .mime_type
            .map(|t| t.split(';').next().unwrap_or("").trim().to_string())
            .unwrap_or_default();
        list.append(VideoStream::new(
            url,
            StreamQuality::parse(&quality),
            StreamFormat::parse(&mime),
        ));
    }
    Ok(list)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    video_details: Option<VideoDetails>,
    streaming_data: Option<StreamingData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoDetails {
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StreamingData {
    #[serde(default)]
    formats: Vec<RawFormat>,
    #[serde(default)]
    adaptive_formats: Vec<RawFormat>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFormat {
    itag: Option<i64>,
    url: Option<String>,
    quality: Option<String>,
    mime_type: Option<String>,
}
