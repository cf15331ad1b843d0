use clap::Parser;

/// YouTube视频下载器
#[derive(Parser, Debug)]
#[command(name = "tubedl")]
#[command(version = "0.1.0")]
#[command(about = "一个简单的YouTube视频下载工具", long_about = None)]
pub struct Cli {
    /// 视频链接 (支持 watch 链接、youtu.be 短链和裸视频ID)
    #[arg(value_name = "URL")]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub url: String,

    /// 保存的文件名
    #[arg(long, value_name = "NAME")]
    #[arg(help = "不指定则使用视频标题生成")]
    pub filename: Option<String>,

    /// 视频保存目录
    #[arg(long, value_name = "DIR")]
    #[arg(default_value = "./")]
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub output_dir: String,

    /// 清晰度 (可选)
    #[arg(long, value_name = "QUALITY")]
    #[arg(default_value = "")]
    #[arg(help = "清晰度: highres/hd1080/hd720/large/medium/small，留空自动选最高可用")]
    pub quality: String,

    /// 格式 (可选)
    #[arg(long, value_name = "FORMAT")]
    #[arg(default_value = "")]
    #[arg(help = "容器格式，如 video/mp4、video/webm，留空不限制")]
    pub format: String,

    /// 只列出可用的流，不下载
    #[arg(long)]
    pub list: bool,
}
