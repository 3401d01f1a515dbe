//! 한자어 숫자 읽기
//!
//! 천 단위 구분자를 제거하고, 소수점이 있으면 소수부를 "쩜" 뒤에
//! 한 자리씩 읽습니다. 정수부는 만(10^4) 단위 묶음으로 잘라
//! 십/백/천 자리말과 만/억/조/경/해 묶음말을 조립합니다.

use crate::error::ConvertError;
use crate::numerals::tables::{frac_digit, sino_digit, SINO_DIGITS};

/// 묶음 내부 자리말
const PLACES: [&str; 4] = ["", "십", "백", "천"];

/// 만 단위 묶음말 (해 초과는 정의 밖)
const TIERS: [&str; 6] = ["", "만", "억", "조", "경", "해"];

/// 한자어로 숫자를 읽음
///
/// 입력은 숫자·천 단위 쉼표·소수점만으로 된 문자열이어야 하며,
/// 그 외 문자가 남아 있으면 에러를 반환합니다.
pub fn read_sino(num: &str) -> Result<String, ConvertError> {
    let (int_part, frac_part) = match num.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (num, None),
    };

    // 소수부: "쩜" + 한 자리씩 (0은 "영")
    let mut frac_word = String::new();
    if let Some(frac) = frac_part {
        frac_word.push_str("쩜");
        for c in frac.chars() {
            frac_word.push_str(frac_digit(c).map_err(|_| malformed(num, c))?);
        }
    }

    let digits: String = int_part.chars().filter(|&c| c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConvertError::MalformedSpan {
            span: num.to_string(),
            detail: "정수부에 숫자가 아닌 문자가 있음".into(),
        });
    }

    // 전부 0이면 자릿수만큼 "영"
    if digits.chars().all(|c| c == '0') {
        return Ok("영".repeat(digits.len()) + &frac_word);
    }

    // 0으로 시작하면 식별자로 보고 한 자리씩
    if digits.starts_with('0') {
        let mut word = String::new();
        for c in digits.chars() {
            word.push_str(sino_digit(c)?);
        }
        return Ok(word + &frac_word);
    }

    // 만 단위 묶음 조립 (해 초과 묶음은 버려짐)
    let mut word = String::new();
    let mut tier = 0usize;
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(4);
        let group: u32 = digits[start..end]
            .parse()
            .map_err(|_| malformed(num, digits.as_bytes()[start] as char))?;
        if group != 0 {
            let mut g = read_group(group);
            // "1만"은 "일만"이 아니라 "만"
            if tier == 1 && g == "일" {
                g.clear();
            }
            if tier < TIERS.len() {
                word.insert_str(0, TIERS[tier]);
                word.insert_str(0, &g);
            }
        }
        end = start;
        tier += 1;
    }
    Ok(word + &frac_word)
}

/// 0~9999 묶음을 십/백/천 자리말로 읽음
///
/// 여러 자리 묶음에서 자리말 앞의 1은 생략됩니다 (10 → "십").
fn read_group(mut g: u32) -> String {
    let mut word = String::new();
    let mut place = 0usize;
    while g != 0 {
        let b = (g % 10) as usize;
        g /= 10;
        if b != 0 {
            if place == 0 {
                word.insert_str(0, SINO_DIGITS[b]);
            } else {
                word.insert_str(0, PLACES[place]);
                if b != 1 {
                    word.insert_str(0, SINO_DIGITS[b]);
                }
            }
        }
        place += 1;
    }
    word
}

fn malformed(num: &str, c: char) -> ConvertError {
    ConvertError::MalformedSpan {
        span: num.to_string(),
        detail: format!("해석할 수 없는 문자 {:?}", c),
    }
}
