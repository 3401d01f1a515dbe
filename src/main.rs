//! num2kor - 한국어 숫자 말 표기 변환 CLI
//!
//! 인자로 받은 문장을 변환해 출력합니다. 인자가 없으면 예시 문장을
//! 변환합니다.

use num2kor::config::load_config;
use num2kor::engine::convert_with_limit;

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        "공인 연비는 13.6 km/l, 17.2 m/l이며, 1~2개, 내 휴대폰은 갤8".to_string()
    } else {
        args.join(" ")
    };

    match convert_with_limit(&input, config.max_passes) {
        Ok(out) => println!("{}", out),
        Err(e) if config.fallback_on_error => {
            log::warn!("변환 실패, 원문 유지: {}", e);
            println!("{}", input);
        }
        Err(e) => {
            eprintln!("변환 실패: {}", e);
            std::process::exit(1);
        }
    }
}
