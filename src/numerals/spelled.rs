//! 자리값 없이 한 자리씩 읽는 읽기
//!
//! 수량이 아니라 식별자로 쓰이는 숫자(전화번호, 항공편, 모델명,
//! 버전)를 위한 읽기입니다. 숫자 외 문자는 그대로 유지합니다.

use crate::error::ConvertError;
use crate::numerals::tables::{frac_digit, sino_digit, spelled_number};

/// 모든 숫자를 한자어 한 자리씩 읽음 (0 → "공")
pub fn read_digits_sino(s: &str) -> Result<String, ConvertError> {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_digit() {
            out.push_str(sino_digit(c)?);
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// 모든 숫자를 영어식 한 자리씩 읽음 (제로/원/투/...)
pub fn read_digits_spelled(s: &str) -> Result<String, ConvertError> {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_digit() {
            let word = spelled_number(&c.to_string()).ok_or(ConvertError::UnknownDigit(c))?;
            out.push_str(word);
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// 버전 문자열 읽기: 숫자는 한 자리씩 (0 → "영"), 점은 "쩜"
pub fn read_dotted_digits(s: &str) -> Result<String, ConvertError> {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_digit() {
            out.push_str(frac_digit(c)?);
        } else if c == '.' {
            out.push_str("쩜");
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_sino() {
        assert_eq!(read_digits_sino("010-1234").unwrap(), "공일공-일이삼사");
        assert_eq!(read_digits_sino("abc").unwrap(), "abc");
    }

    #[test]
    fn test_digits_spelled() {
        assert_eq!(read_digits_spelled("321").unwrap(), "쓰리투원");
        assert_eq!(read_digits_spelled("1+1").unwrap(), "원+원");
    }

    #[test]
    fn test_dotted_digits() {
        assert_eq!(read_dotted_digits("1.2.3").unwrap(), "일쩜이쩜삼");
        assert_eq!(read_dotted_digits("1.0.3").unwrap(), "일쩜영쩜삼");
    }
}
