use tube_downloader::common::client::TubeClient;
use tube_downloader::downloader::VideoDownloader;
use tube_downloader::downloader::core::{default_filename, sanitize_filename};
use tube_downloader::downloader::error::DownloadError;
use tube_downloader::parser::errors::ParseError;
use tube_downloader::parser::models::{StreamFormat, StreamQuality, VideoList, VideoStream};

#[test]
fn test_sanitize_filename_mapping() {
    // 路径分隔符换成点，其余保留字符换成横线
    assert_eq!(
        sanitize_filename("a/b\\c:d*e?f\"g<h>i|j"),
        "a.b.c-d-e-f-g-h-i-j"
    );
    // 普通字符原样保留
    assert_eq!(sanitize_filename("Clip.mp4"), "Clip.mp4");
}

#[test]
fn test_sanitize_filename_multibyte_passthrough() {
    let input = "测试视频/第1集: 开始?";
    let output = sanitize_filename(input);
    assert_eq!(output, "测试视频.第1集- 开始-");
    // 码点数不变
    assert_eq!(input.chars().count(), output.chars().count());
}

#[test]
fn test_default_filename_from_title_and_format() {
    let mut list = VideoList::new("Clip");
    list.append(VideoStream::new(
        "https://r1.example.com/video1",
        StreamQuality::Hd720,
        StreamFormat::Mp4,
    ));
    assert_eq!(default_filename(&list.streams[0]), "Clip.mp4");
}

#[test]
fn test_default_filename_sanitized() {
    let mut list = VideoList::new("A/B: C");
    list.append(VideoStream::new(
        "https://r1.example.com/video1",
        StreamQuality::Medium,
        StreamFormat::Webm,
    ));
    assert_eq!(default_filename(&list.streams[0]), "A.B- C.webm");
}

#[test]
fn test_extension_lookup() {
    assert_eq!(StreamFormat::Mp4.extension(), ".mp4");
    assert_eq!(StreamFormat::Webm.extension(), ".webm");
    assert_eq!(StreamFormat::Flv.extension(), ".flv");
    assert_eq!(StreamFormat::ThreeGp.extension(), ".3gp");
    // 未知格式取MIME子类型
    assert_eq!(StreamFormat::parse("video/foo").extension(), ".foo");
}

#[tokio::test]
async fn test_download_propagates_selection_error() {
    let mut list = VideoList::new("T");
    list.append(VideoStream::new(
        "https://r1.example.com/video1",
        StreamQuality::Medium,
        StreamFormat::Mp4,
    ));

    let downloader = VideoDownloader::new(TubeClient::new());
    let result = downloader.download(&list, "", "", "4k", "").await;
    match result {
        Err(DownloadError::Selection(ParseError::NoMatchingStream { quality, format })) => {
            assert_eq!(quality, "4k");
            assert_eq!(format, "");
        }
        other => panic!("期望筛选错误，得到: {:?}", other.map(|p| p.display().to_string())),
    }
}

#[tokio::test]
async fn test_download_to_directory() {
    // 依赖网络，失败只提示不断言
    let mut list = VideoList::new("tubedl下载测试");
    list.append(VideoStream::new(
        "https://www.example.com/",
        StreamQuality::Medium,
        StreamFormat::parse("text/html"),
    ));

    let dir = std::env::temp_dir().join("tubedl_test_out");
    let downloader = VideoDownloader::new(TubeClient::new());
    let result = downloader
        .download(&list, &dir.to_string_lossy(), "", "", "")
        .await;
    match result {
        Ok(path) => {
            println!("✅ 下载成功: {}", path.display());
            assert!(path.ends_with("tubedl下载测试.html"));
            let _ = std::fs::remove_file(&path);
        }
        Err(e) => {
            println!("⚠️ 下载失败（可能是网络问题）: {}", e);
        }
    }
}
