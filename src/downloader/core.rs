use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use indicatif::ProgressBar;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::common::client::TubeClient;
use crate::parser::models::VideoStream;

use super::error::DownloadError;

/// 把一条流落盘。
/// 目录不存在会递归创建；文件名为空时用 标题+格式后缀 生成，
/// 并替换掉文件系统不允许的字符
pub async fn download_stream(
    client: &TubeClient,
    stream: &VideoStream,
    dir: &str,
    filename: &str,
) -> Result<PathBuf, DownloadError> {
    // 先发请求，传输层错误在动文件系统之前就返回
    let response = client.get_raw_response(&stream.url).await?;
    let response = response.error_for_status().map_err(DownloadError::HttpError)?;

    // 建目录失败先记着，目录可能本来就在；
    // 等后面建文件也失败时再一起上报
    let mut mkdir_err = None;
    if !dir.is_empty() {
        if let Err(e) = tokio::fs::create_dir_all(dir).await {
            debug!("创建输出目录失败: {}", e);
            mkdir_err = Some(e);
        }
    }

    let filename = if filename.chars().count() == 0 {
        default_filename(stream)
    } else {
        filename.to_string()
    };
    let path = if dir.is_empty() {
        PathBuf::from(&filename)
    } else {
        Path::new(dir).join(&filename)
    };

    let mut file = match tokio::fs::File::create(&path).await {
        Ok(file) => file,
        Err(create_err) => {
            return Err(DownloadError::IoError(mkdir_err.unwrap_or(create_err)));
        }
    };

    let total_size = response
        .headers()
        .get(reqwest::header::CONTENT_LENGTH)
        .and_then(|ct_len| ct_len.to_str().ok())
        .and_then(|ct_len| ct_len.parse().ok())
        .unwrap_or(0u64);

    let pb = if total_size > 0 {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            indicatif::ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    debug!("开始写入: {}", path.display());

    let mut body = response.bytes_stream();
    let mut downloaded = 0u64;
    while let Some(chunk_result) = body.next().await {
        let chunk = match chunk_result {
            Ok(chunk) => chunk,
            Err(error) => {
                if let Some(pb) = &pb {
                    pb.finish_with_message("下载失败");
                }
                return Err(DownloadError::StreamError(error.to_string()));
            }
        };
        file.write_all(&chunk).await.map_err(DownloadError::IoError)?;
        downloaded += chunk.len() as u64;
        if let Some(pb) = &pb {
            pb.set_position(downloaded);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("下载完成");
    }

    info!("已写入 {} 字节: {}", downloaded, path.display());
    Ok(path)
}

/// 默认文件名：标题 + 格式对应的后缀，替换掉非法字符
pub fn default_filename(stream: &VideoStream) -> String {
    sanitize_filename(&format!("{}{}", stream.title, stream.format.extension()))
}

/// 替换文件名里文件系统不允许的字符：
/// 路径分隔符换成点，其余保留字符换成横线
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' => '.',
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            other => other,
        })
        .collect()
}
