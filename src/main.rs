use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use hangul_composer::cli::feed_line;
use hangul_composer::{ComposeSession, KeyboardLayout};

/// 표준 입력의 키 시퀀스를 두벌식으로 조합해 출력한다.
///
/// 토큰은 공백으로 구분한다. `<bs>`는 백스페이스, `<sp>`는 공백,
/// `<reset>`은 버퍼를 비운다. 나머지 토큰은 글자 단위로 입력된다.
#[derive(Parser, Debug)]
#[command(name = "hangul-compose", version, about)]
struct Cli {
    /// JSON5 자판 레이아웃 파일 (기본: 두벌식 표준)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// 키 레이블 대신 자모(ㄱ, ㅏ …)를 직접 입력
    #[arg(long)]
    jamo: bool,

    /// 줄마다 조합 상태도 함께 출력
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();

    let mut session = ComposeSession::new();
    if !cli.jamo {
        let layout = match &cli.layout {
            Some(path) => KeyboardLayout::from_json(&fs::read_to_string(path)?)?,
            None => KeyboardLayout::standard()?,
        };
        info!("using layout {} ({})", layout.id, layout.name);
        session.set_layout(layout);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        feed_line(&mut session, &line?, cli.jamo);
        if cli.verbose {
            writeln!(stdout, "{} {}", session.buffer(), session.state())?;
        } else {
            writeln!(stdout, "{}", session.buffer())?;
        }
    }
    Ok(())
}
