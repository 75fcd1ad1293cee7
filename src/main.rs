use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hiking_course_tools::handlers::{handle_course_filter, handle_weather_fetch};
use hiking_course_tools::models::{load_json_file, write_jsonl, MountainListing};
use hiking_course_tools::services::{build_course_documents, KbBuildOptions};
use hiking_course_tools::utils::logging;
use hiking_course_tools::{logger, Config, CourseFilter};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hiking-tools", about = "등산 코스 추천 데이터 도구")]
struct Cli {
    /// 설정 파일 (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 로그 레벨 (RUST_LOG 가 있으면 무시됨)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// KB 검색 결과 이벤트를 필터링
    Filter {
        /// 이벤트 JSON 파일
        event: PathBuf,
    },
    /// 코스 리스트 이벤트에 날씨 추가
    Weather {
        /// 이벤트 JSON 파일
        event: PathBuf,
    },
    /// 산 목록을 코스별 JSONL 문서로 변환
    BuildKb {
        input: PathBuf,
        output: PathBuf,
        /// 이 거리(km) 미만인 코스 제외
        #[arg(long)]
        min_distance_km: Option<f64>,
        /// 검색용 text 필드 추가
        #[arg(long)]
        with_text: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 설정 로드
    let config = Config::load(cli.config.as_deref()).context("설정을 불러오지 못했습니다")?;

    // 로그 초기화
    logger::init_with_level(cli.log_level.as_deref().unwrap_or(&config.log_level));

    match cli.command {
        Command::Filter { event } => {
            logging::log_startup("코스 필터");
            let event: Value = load_json_file(&event).await?;
            let response = handle_course_filter(&event, &CourseFilter::new(&config));
            logging::log_response(&response, config.verbose_logging);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Weather { event } => {
            logging::log_startup("날씨 조회");
            let event: Value = load_json_file(&event).await?;
            let response = handle_weather_fetch(&event, &config).await;
            logging::log_response(&response, config.verbose_logging);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::BuildKb {
            input,
            output,
            min_distance_km,
            with_text,
        } => {
            logging::log_startup("KB 문서 변환");
            let listing: MountainListing = load_json_file(&input)
                .await
                .with_context(|| format!("산 목록을 읽지 못했습니다: {}", input.display()))?;

            let options = KbBuildOptions {
                min_distance_km,
                with_text,
            };
            let built = build_course_documents(&listing, &options);
            let written = write_jsonl(&output, &built.documents).await?;

            logging::print_kb_stats(
                built.mountain_count,
                built.course_count,
                built.removed,
                written,
                &output.display().to_string(),
            );
        }
    }

    Ok(())
}
