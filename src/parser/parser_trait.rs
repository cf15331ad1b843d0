use async_trait::async_trait;

use super::{errors::ParseError, models::VideoList};

// 定义一个trait，用于解析视频ID，然后返回可下载的流列表
// 其他站点的解析器可以实现这个trait
#[async_trait]
pub trait Parser {
    async fn parse(&mut self, video_id: &str) -> Result<VideoList, ParseError>;
}
