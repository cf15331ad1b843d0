use clap::Parser;
use colored::Colorize;
use tracing::{error, info, warn};

use tube_downloader::Result;
use tube_downloader::cli::Cli;
use tube_downloader::common::client::TubeClient;
use tube_downloader::downloader::VideoDownloader;
use tube_downloader::parser::VideoParser;
use tube_downloader::parser::parser_trait::Parser as _;
use tube_downloader::parser::url_parser::UrlParser;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 解析命令行参数
    let args = Cli::parse();
    info!("开始解析视频链接: {}", args.url);

    let video_id = UrlParser::new().extract_video_id(&args.url)?;
    info!("视频ID: {}", video_id);

    // 获取流列表
    let client = TubeClient::new();
    let mut parser = VideoParser::new(client.clone());
    let list = parser.parse(&video_id).await.map_err(|e| {
        error!("解析失败: {}", e);
        e
    })?;

    info!("标题: << {} >>", list.title);
    println!("{}", list);

    // 提示残缺的流，不影响下载
    for (idx, stream) in list.streams.iter().enumerate() {
        let missing = stream.missing_fields();
        if !missing.is_empty() {
            warn!("流 {} 缺少字段: {:?}", idx, missing);
        }
    }

    if args.list {
        return Ok(());
    }

    // 开始下载
    let downloader = VideoDownloader::new(client);
    let path = downloader
        .download(
            &list,
            &args.output_dir,
            args.filename.as_deref().unwrap_or(""),
            &args.quality,
            &args.format,
        )
        .await
        .map_err(|e| {
            error!("下载失败: {}", e);
            e
        })?;

    info!("{}", "下载完成！".green());
    println!("视频已保存到 {}", path.display());
    Ok(())
}
