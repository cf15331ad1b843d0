use std::fmt;

use super::errors::ParseError;
use super::stream_selector;

// 视频清晰度选项
// YouTube 的渐进流用固定的档位token标识，接口偶尔会返回
// 列表之外的token，统一收进 Other 保留原文
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamQuality {
    Highres,
    Hd1080,
    Hd720,
    Large,  // 480P
    Medium, // 360P
    Small,  // 240P
    Other(String),
}

impl StreamQuality {
    // 自动选择时的优先顺序，从高到低
    pub const RANKED: [StreamQuality; 6] = [
        StreamQuality::Highres,
        StreamQuality::Hd1080,
        StreamQuality::Hd720,
        StreamQuality::Large,
        StreamQuality::Medium,
        StreamQuality::Small,
    ];

    pub fn parse(token: &str) -> Self {
        match token {
            "highres" => Self::Highres,
            "hd1080" => Self::Hd1080,
            "hd720" => Self::Hd720,
            "large" => Self::Large,
            "medium" => Self::Medium,
            "small" => Self::Small,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Highres => "highres",
            Self::Hd1080 => "hd1080",
            Self::Hd720 => "hd720",
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
            Self::Other(token) => token,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for StreamQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// 容器格式，用MIME样式的token标识，匹配用token，
// 落盘时通过 extension() 换算文件后缀
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamFormat {
    Mp4,
    Webm,
    Flv,
    ThreeGp,
    Other(String),
}

impl StreamFormat {
    pub fn parse(token: &str) -> Self {
        match token {
            "video/mp4" => Self::Mp4,
            "video/webm" => Self::Webm,
            "video/x-flv" => Self::Flv,
            "video/3gpp" => Self::ThreeGp,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::Webm => "video/webm",
            Self::Flv => "video/x-flv",
            Self::ThreeGp => "video/3gpp",
            Self::Other(token) => token,
        }
    }

    /// 文件后缀，未知格式取MIME子类型
    pub fn extension(&self) -> String {
        match self {
            Self::Mp4 => ".mp4".to_string(),
            Self::Webm => ".webm".to_string(),
            Self::Flv => ".flv".to_string(),
            Self::ThreeGp => ".3gp".to_string(),
            Self::Other(token) => match token.split_once('/') {
                Some((_, subtype)) if !subtype.is_empty() => format!(".{}", subtype),
                _ => ".mp4".to_string(),
            },
        }
    }
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// 同一个视频的一条可下载流，清晰度和格式的组合各不相同
#[derive(Debug, Clone, PartialEq)]
pub struct VideoStream {
    pub title: String,
    pub url: String,
    pub quality: StreamQuality,
    pub format: StreamFormat,
}

impl VideoStream {
    // 标题在加入 VideoList 时统一赋值
    pub fn new(url: impl Into<String>, quality: StreamQuality, format: StreamFormat) -> Self {
        Self {
            title: String::new(),
            url: url.into(),
            quality,
            format,
        }
    }

    /// 检查缺失的字段。缺字段说明接口返回了残缺数据，
    /// 调用方自行决定提示还是忽略
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.url.is_empty() {
            missing.push("url");
        }
        if self.quality.as_str().is_empty() {
            missing.push("quality");
        }
        if self.format.as_str().is_empty() {
            missing.push("format");
        }
        missing
    }
}

// 同一个视频的全部可下载流，共享一个标题
#[derive(Debug, Clone, PartialEq)]
pub struct VideoList {
    pub title: String,
    pub streams: Vec<VideoStream>,
}

impl VideoList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            streams: Vec::new(),
        }
    }

    /// 追加一条流，标题在这里统一为列表的标题
    pub fn append(&mut self, mut stream: VideoStream) {
        stream.title = self.title.clone();
        self.streams.push(stream);
    }

    /// 按清晰度和格式筛选，返回新的列表，原列表不变。
    /// 两个条件都是可选的，传空字符串表示不限制；
    /// 清晰度不限制时按优先顺序自动降级
    pub fn filter(&self, quality: &str, format: &str) -> Result<VideoList, ParseError> {
        let streams = stream_selector::filter_streams(&self.streams, quality, format)?;
        Ok(VideoList {
            title: self.title.clone(),
            streams,
        })
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

impl fmt::Display for VideoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "视频标题: {}", self.title)?;
        writeln!(f, "序号\t清晰度\t格式")?;
        for (idx, stream) in self.streams.iter().enumerate() {
            writeln!(f, " {}\t{}\t{}", idx, stream.quality, stream.format)?;
        }
        Ok(())
    }
}
