//! hangul-ime - 키 입력 문자열을 한글로 조합하고 한자 후보를 보여주는 도구
//!
//! 사용법: hangul-ime [--layout ID] [--hanja PATH] [--config PATH] [KEYS...]
//! KEYS가 없으면 표준 입력을 한 줄씩 변환한다.

use clap::Parser;
use hangul_ime::config::{load_config, load_config_from};
use hangul_ime::HangulEngine;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

/// 명령행 인자
#[derive(Parser, Debug)]
#[command(name = "hangul-ime")]
#[command(about = "키 입력 문자열을 한글로 조합하고 한자 후보를 보여줌")]
#[command(version)]
struct Cli {
    /// 자판 ID (2, 32, 39, ro)
    #[arg(short, long)]
    layout: Option<String>,
    /// 한자 사전 파일
    #[arg(long)]
    hanja: Option<PathBuf>,
    /// 설정 파일 (기본: $XDG_CONFIG_HOME/hangul-ime/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// 변환할 키 입력 (없으면 표준 입력을 한 줄씩)
    keys: Vec<String>,
}

/// 한 줄 변환 후 결과와 한자 후보 출력
fn run_line(engine: &mut HangulEngine, line: &str) {
    engine.reset();
    let mut output = String::new();
    for c in line.chars() {
        if !engine.process(c as i32) {
            // 매핑 없는 문자는 그대로 확정
            output.push_str(&engine.flush());
            output.push(c);
        }
    }
    output.push_str(&engine.flush());
    println!("{}", output);

    if !engine.hanja().is_loaded() {
        return;
    }
    for word in output.split_whitespace() {
        let candidates = engine.match_exact_hanja_map(word);
        for (_, display) in candidates.iter() {
            println!("  {}\t{}", word, display);
        }
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();

    // 설정 로드 후 명령행 인자로 덮어씀
    let mut config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    if let Some(hanja) = args.hanja {
        config.hanja_table = Some(hanja);
    }

    let mut engine = HangulEngine::from_config(&config);
    engine.initialize();

    if args.keys.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => run_line(&mut engine, &line),
                Err(e) => {
                    log::error!("입력 읽기 실패: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    } else {
        for keys in &args.keys {
            run_line(&mut engine, keys);
        }
    }

    engine.finalize_library();
    ExitCode::SUCCESS
}
