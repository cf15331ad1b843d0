use tube_downloader::parser::errors::ParseError;
use tube_downloader::parser::models::{StreamFormat, StreamQuality};
use tube_downloader::parser::url_parser::UrlParser;
use tube_downloader::parser::video_parser::parse_info_document;
use url::form_urlencoded::Serializer;

#[test]
fn test_extract_video_id_from_watch_url() {
    let parser = UrlParser::new();
    let id = parser
        .extract_video_id("https://www.youtube.com/watch?v=C0DPdy98e4c")
        .unwrap();
    assert_eq!(id, "C0DPdy98e4c");
}

#[test]
fn test_extract_video_id_from_short_url() {
    let parser = UrlParser::new();
    let id = parser
        .extract_video_id("https://youtu.be/C0DPdy98e4c?t=10")
        .unwrap();
    assert_eq!(id, "C0DPdy98e4c");
}

#[test]
fn test_extract_video_id_from_embed_url() {
    let parser = UrlParser::new();
    let id = parser
        .extract_video_id("https://www.youtube.com/embed/C0DPdy98e4c")
        .unwrap();
    assert_eq!(id, "C0DPdy98e4c");
}

#[test]
fn test_extract_video_id_without_scheme() {
    let parser = UrlParser::new();
    let id = parser
        .extract_video_id("www.youtube.com/watch?v=C0DPdy98e4c&t=30")
        .unwrap();
    assert_eq!(id, "C0DPdy98e4c");
}

#[test]
fn test_extract_video_id_from_raw_id() {
    let parser = UrlParser::new();
    let id = parser.extract_video_id("C0DPdy98e4c").unwrap();
    assert_eq!(id, "C0DPdy98e4c");
}

#[test]
fn test_extract_video_id_missing() {
    let parser = UrlParser::new();
    let result = parser.extract_video_id("https://www.youtube.com/feed/trending");
    assert!(matches!(result, Err(ParseError::MissingVideoId)));
}

// 按接口的编码方式拼一条老版流列表的记录
fn encoded_stream_entry(url: &str, quality: &str, mime: &str) -> String {
    Serializer::new(String::new())
        .append_pair("url", url)
        .append_pair("quality", quality)
        .append_pair("type", mime)
        .finish()
}

#[test]
fn test_parse_info_document_legacy_stream_map() {
    let entries = [
        encoded_stream_entry(
            "https://r1.example.com/video1",
            "hd720",
            "video/mp4; codecs=\"avc1.42001E, mp4a.40.2\"",
        ),
        encoded_stream_entry("https://r1.example.com/video2", "medium", "video/webm"),
    ]
    .join(",");
    let doc = Serializer::new(String::new())
        .append_pair("status", "ok")
        .append_pair("title", "TEST VIDEO")
        .append_pair("url_encoded_fmt_stream_map", &entries)
        .finish();

    let list = parse_info_document(&doc).unwrap();
    assert_eq!(list.title, "TEST VIDEO");
    assert_eq!(list.len(), 2);
    assert_eq!(list.streams[0].url, "https://r1.example.com/video1");
    assert_eq!(list.streams[0].quality, StreamQuality::Hd720);
    // type 字段在分号处截断成纯MIME
    assert_eq!(list.streams[0].format, StreamFormat::Mp4);
    assert_eq!(list.streams[1].format, StreamFormat::Webm);
    // 标题统一成列表的标题
    assert!(list.streams.iter().all(|s| s.title == "TEST VIDEO"));
}

#[test]
fn test_parse_info_document_player_response() {
    let player_response = serde_json::json!({
        "videoDetails": { "title": "TEST VIDEO" },
        "streamingData": {
            "formats": [
                {
                    "itag": 18,
                    "url": "https://r2.example.com/video1",
                    "quality": "medium",
                    "mimeType": "video/mp4; codecs=\"avc1.42001E, mp4a.40.2\""
                },
                {
                    "itag": 22,
                    "quality": "hd720",
                    "mimeType": "video/mp4"
                }
            ],
            "adaptiveFormats": [
                {
                    "itag": 247,
                    "url": "https://r2.example.com/video2",
                    "quality": "hd720",
                    "mimeType": "video/webm; codecs=\"vp9\""
                }
            ]
        }
    });
    let doc = Serializer::new(String::new())
        .append_pair("status", "ok")
        .append_pair("player_response", &player_response.to_string())
        .finish();

    let list = parse_info_document(&doc).unwrap();
    assert_eq!(list.title, "TEST VIDEO");
    // itag 22 没有直链，应当被跳过
    assert_eq!(list.len(), 2);
    assert_eq!(list.streams[0].quality, StreamQuality::Medium);
    assert_eq!(list.streams[0].format, StreamFormat::Mp4);
    assert_eq!(list.streams[1].quality, StreamQuality::Hd720);
    assert_eq!(list.streams[1].format, StreamFormat::Webm);
}

#[test]
fn test_parse_info_document_status_fail() {
    let doc = Serializer::new(String::new())
        .append_pair("status", "fail")
        .append_pair("reason", "Video unavailable")
        .finish();

    let err = parse_info_document(&doc).unwrap_err();
    match err {
        ParseError::ApiError(reason) => assert_eq!(reason, "Video unavailable"),
        other => panic!("期望 ApiError，得到: {:?}", other),
    }
}

#[test]
fn test_parse_info_document_without_streams() {
    let doc = Serializer::new(String::new())
        .append_pair("status", "ok")
        .append_pair("title", "TEST VIDEO")
        .finish();
    assert!(parse_info_document(&doc).is_err());
}

#[test]
fn test_parse_info_document_missing_title() {
    let entries = encoded_stream_entry("https://r1.example.com/video1", "hd720", "video/mp4");
    let doc = Serializer::new(String::new())
        .append_pair("status", "ok")
        .append_pair("url_encoded_fmt_stream_map", &entries)
        .finish();

    // 没有标题不算致命，残缺由 missing_fields 体现
    let list = parse_info_document(&doc).unwrap();
    assert_eq!(list.title, "");
    assert_eq!(list.streams[0].missing_fields(), vec!["title"]);
}

#[tokio::test]
async fn test_parse_real_video() {
    use tube_downloader::common::client::TubeClient;
    use tube_downloader::parser::VideoParser;
    use tube_downloader::parser::parser_trait::Parser as _;

    let mut parser = VideoParser::new(TubeClient::new());
    match parser.parse("C0DPdy98e4c").await {
        Ok(list) => {
            println!("✅ 视频解析成功: {} ({} 条流)", list.title, list.len());
            assert!(!list.is_empty());
        }
        Err(e) => {
            println!("⚠️ 视频解析失败（可能是网络或接口问题）: {:?}", e);
            // 在CI环境中可能失败，这里不做硬断言
        }
    }
}
