//! 고유어 숫자 읽기
//!
//! 고유어 체계는 50 미만의 셈에만 정의됩니다. 소수점·쉼표가 있거나
//! 50 이상이면 한자어 읽기로 위임합니다.

use crate::error::ConvertError;
use crate::numerals::sino::read_sino;

/// 고유어 낱개말 (1은 수식형, 서수형은 별도)
fn native_ones(c: char, last: bool, first: bool) -> Result<&'static str, ConvertError> {
    Ok(match c {
        '0' => "영",
        '1' if last && first => "첫",
        '1' => "한",
        '2' => "두",
        '3' => "세",
        '4' => "네",
        '5' => "다섯",
        '6' => "여섯",
        '7' => "일곱",
        '8' => "여덟",
        '9' => "아홉",
        _ => return Err(ConvertError::UnknownDigit(c)),
    })
}

/// 고유어 십 단위말 (10/20/30/40)
fn native_tens(c: char) -> Result<&'static str, ConvertError> {
    Ok(match c {
        '0' => "",
        '1' => "열",
        '2' => "스물",
        '3' => "서른",
        '4' => "마흔",
        _ => return Err(ConvertError::UnknownDigit(c)),
    })
}

/// 고유어로 숫자를 읽음
///
/// `first`가 참이면 마지막 자리의 1을 서수형 "첫"으로 읽습니다.
pub fn read_native(num: &str, first: bool) -> Result<String, ConvertError> {
    // 고유어 범위 밖이면 한자어로
    if num.contains('.') || num.contains(',') || num.len() > 2 {
        return read_sino(num);
    }
    let value: u32 = num.parse().map_err(|_| ConvertError::MalformedSpan {
        span: num.to_string(),
        detail: "숫자가 아닌 문자가 있음".into(),
    })?;
    if value >= 50 {
        return read_sino(num);
    }

    // 20 단독은 축약형
    if num == "20" {
        return Ok("스무".to_string());
    }

    let mut word = String::new();
    let mut remaining = num.chars().count();
    for c in num.chars() {
        // 뒤따르는 0은 생략 (열, 스물, ...)
        if c == '0' && !word.is_empty() {
            remaining -= 1;
            continue;
        }
        if remaining == 2 {
            word.push_str(native_tens(c)?);
        } else {
            word.push_str(native_ones(c, remaining == 1, first)?);
        }
        remaining -= 1;
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        assert_eq!(read_native("1", false).unwrap(), "한");
        assert_eq!(read_native("1", true).unwrap(), "첫");
        assert_eq!(read_native("5", false).unwrap(), "다섯");
        assert_eq!(read_native("0", false).unwrap(), "영");
    }

    #[test]
    fn test_tens() {
        assert_eq!(read_native("10", false).unwrap(), "열");
        assert_eq!(read_native("13", false).unwrap(), "열세");
        assert_eq!(read_native("21", false).unwrap(), "스물한");
        assert_eq!(read_native("45", false).unwrap(), "마흔다섯");
    }

    #[test]
    fn test_twenty_contracted() {
        assert_eq!(read_native("20", false).unwrap(), "스무");
    }

    #[test]
    fn test_delegates_to_sino() {
        // 50 이상, 소수, 쉼표는 한자어로
        assert_eq!(read_native("50", false).unwrap(), "오십");
        assert_eq!(read_native("120", false).unwrap(), "백이십");
        assert_eq!(read_native("3.5", false).unwrap(), "삼쩜오");
        assert_eq!(read_native("1,300", false).unwrap(), "천삼백");
    }

    #[test]
    fn test_malformed() {
        assert!(read_native("a1", false).is_err());
    }
}
