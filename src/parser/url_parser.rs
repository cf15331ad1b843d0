use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::errors::ParseError;

pub struct UrlParser;

impl UrlParser {
    pub fn new() -> Self {
        Self
    }

    /// 从输入中提取视频ID。
    /// 支持 watch 链接、youtu.be 短链、embed/shorts 链接和裸ID
    pub fn extract_video_id(&self, input: &str) -> Result<String, ParseError> {
        lazy_static! {
            static ref ID_PATTERN: Regex = Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap();
        }

        let input = input.trim();

        // 裸视频ID
        if ID_PATTERN.is_match(input) {
            return Ok(input.to_string());
        }

        let url = Self::normalize_url(input)?;

        // watch 链接从查询参数里取 v
        if let Some((_, id)) = url.query_pairs().find(|(k, _)| k == "v") {
            if !id.is_empty() {
                return Ok(id.into_owned());
            }
        }

        // 短链和 embed/shorts 链接从路径里取
        if let Some(segments) = url.path_segments() {
            let segments: Vec<&str> = segments.collect();
            let candidate = match segments.as_slice() {
                [id] if url.host_str() == Some("youtu.be") => Some(*id),
                ["embed", id] | ["shorts", id] => Some(*id),
                _ => None,
            };
            if let Some(id) = candidate {
                if ID_PATTERN.is_match(id) {
                    return Ok(id.to_string());
                }
            }
        }

        Err(ParseError::MissingVideoId)
    }

    // 没带协议的链接补上 https 再解析
    fn normalize_url(input: &str) -> Result<Url, ParseError> {
        if let Ok(url) = Url::parse(input) {
            return Ok(url);
        }
        Url::parse(&format!("https://{}", input)).map_err(|_| ParseError::InvalidUrl)
    }
}

impl Default for UrlParser {
    fn default() -> Self {
        Self::new()
    }
}
