use tracing::{debug, warn};

use super::errors::ParseError;
use super::models::{StreamFormat, StreamQuality, VideoStream};

/// 两段式筛选：先按格式，再按清晰度。
/// 格式为空则不过滤；清晰度为空则按优先顺序取最高可用档位。
/// 筛完为空返回 NoMatchingStream，带上两个入参方便排查
pub fn filter_streams(
    streams: &[VideoStream],
    quality: &str,
    format: &str,
) -> Result<Vec<VideoStream>, ParseError> {
    // 第一步，按格式过滤
    let by_format: Vec<VideoStream> = if format.is_empty() {
        streams.to_vec()
    } else {
        let wanted = StreamFormat::parse(format);
        streams
            .iter()
            .filter(|s| s.format == wanted)
            .cloned()
            .collect()
    };

    // 第二步，按清晰度过滤
    let selected: Vec<VideoStream> = if quality.is_empty() {
        ranked_fallback(&by_format)
    } else {
        let wanted = StreamQuality::parse(quality);
        by_format
            .iter()
            .filter(|s| s.quality == wanted)
            .cloned()
            .collect()
    };

    if selected.is_empty() {
        return Err(ParseError::NoMatchingStream {
            quality: quality.to_string(),
            format: format.to_string(),
        });
    }
    Ok(selected)
}

// 没有指定清晰度时，从高到低找第一个有流的档位，
// 同档位的流全部保留，顺序不变
fn ranked_fallback(streams: &[VideoStream]) -> Vec<VideoStream> {
    for tier in StreamQuality::RANKED.iter() {
        let hits: Vec<VideoStream> = streams
            .iter()
            .filter(|s| &s.quality == tier)
            .cloned()
            .collect();
        if !hits.is_empty() {
            debug!("自动选择清晰度: {} ({} 条流)", tier, hits.len());
            return hits;
        }
    }

    // 已知档位全部落空时，未识别的档位按最低优先级参与，
    // 取遇到的第一个token，同token的流为一组
    if let Some(first) = streams.iter().find(|s| !s.quality.is_known()) {
        warn!("未识别的清晰度token: {}，按最低优先级选用", first.quality);
        return streams
            .iter()
            .filter(|s| s.quality == first.quality)
            .cloned()
            .collect();
    }

    Vec::new()
}
