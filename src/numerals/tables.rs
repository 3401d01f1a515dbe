//! 숫자 읽기 고정 테이블
//!
//! 한자어/영어식 자릿수, 부호, 화폐 기호의 말 표기를 정의합니다.
//! 프로세스 전역 상수 데이터이며 초기화 순서 의존성이 없습니다.

use crate::error::ConvertError;

/// 한자어 자릿수 (0은 전화번호식 "공")
pub const SINO_DIGITS: [&str; 10] = [
    "공", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구",
];

/// 한자어 자릿수 조회 ('0'~'9')
pub fn sino_digit(c: char) -> Result<&'static str, ConvertError> {
    c.to_digit(10)
        .map(|d| SINO_DIGITS[d as usize])
        .ok_or(ConvertError::UnknownDigit(c))
}

/// 소수부 자릿수 조회 (0은 "영", 나머지는 한자어)
pub fn frac_digit(c: char) -> Result<&'static str, ConvertError> {
    if c == '0' {
        Ok("영")
    } else {
        sino_digit(c)
    }
}

/// 영어식 자릿수 ("0"~"11", 기기명/항공편/통신망 읽기 전용)
pub fn spelled_number(n: &str) -> Option<&'static str> {
    match n {
        "0" => Some("제로"),
        "1" => Some("원"),
        "2" => Some("투"),
        "3" => Some("쓰리"),
        "4" => Some("포"),
        "5" => Some("파이브"),
        "6" => Some("식스"),
        "7" => Some("세븐"),
        "8" => Some("에잇"),
        "9" => Some("나인"),
        "10" => Some("텐"),
        "11" => Some("일레븐"),
        _ => None,
    }
}

/// 부호 기호의 말 표기
pub fn sign_word(c: char) -> Option<&'static str> {
    match c {
        '+' => Some("플러스"),
        '-' | '–' => Some("마이너스"),
        '±' => Some("플러스마이너스"),
        _ => None,
    }
}

/// 화폐 기호의 말 표기
pub fn currency_word(c: char) -> Option<&'static str> {
    match c {
        '$' | '＄' => Some("달러"),
        '￦' => Some("원"),
        '￥' => Some("엔"),
        '€' => Some("유로"),
        _ => None,
    }
}

/// 화폐 규칙을 발동시키는 기호인지 확인
pub fn is_currency_symbol(c: char) -> bool {
    matches!(c, '$' | '＄' | '￦' | '￥' | '€')
}

/// 완성형 한글 음절 여부 (가-힣)
pub fn is_hangul_syllable(c: char) -> bool {
    ('가'..='힣').contains(&c)
}
