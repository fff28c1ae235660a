use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::Measurement;

/// 산 이름, 높이, 등정일을 현지화된 문장으로 출력한다.
#[derive(Debug, Clone, Parser)]
#[command(name = "mountains", version)]
pub struct Cli {
    /// 로케일 태그 (예: en-US, ko-KR, de). `auto`는 시스템 로케일.
    #[arg(short = 'L', long)]
    pub lang: Option<String>,

    /// 높이 단위. 지정하지 않으면 설정 파일 값을 쓴다.
    #[arg(short, long, value_enum)]
    pub units: Option<Measurement>,

    /// 내장 문자열을 덮어쓸 언어팩 디렉터리
    #[arg(long)]
    pub pack_dir: Option<String>,

    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// 설명할 산 이름. 생략하면 내장 목록 전체를 출력한다.
    #[arg(short, long)]
    pub name: Option<String>,

    /// 높이 [m]
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// 등정일 (YYYY-MM-DD)
    #[arg(long)]
    pub climbed: Option<NaiveDate>,
}
