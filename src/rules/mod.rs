//! 예외 규칙 엔진과 분류사 판별 모듈

pub mod classifier;
pub mod exceptions;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;

/// 숫자 토큰 패턴: 천 단위 쉼표와 소수부를 허용
pub(crate) static NUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:,\d{3})*(?:\.\d+)?").expect("숫자 패턴"));

/// 구간 안의 첫 숫자 토큰
pub(crate) fn first_num(s: &str) -> Option<String> {
    NUM_RE.find(s).map(|m| m.as_str().to_string())
}

/// 모든 숫자 토큰을 변환 함수로 치환
///
/// 매칭되지 않은 부분은 그대로 내보내고 토큰만 바꿔 잇습니다.
pub(crate) fn replace_nums<F>(s: &str, mut f: F) -> Result<String, ConvertError>
where
    F: FnMut(&str) -> Result<String, ConvertError>,
{
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for m in NUM_RE.find_iter(s) {
        out.push_str(&s[last..m.start()]);
        out.push_str(&f(m.as_str())?);
        last = m.end();
    }
    out.push_str(&s[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_pattern() {
        assert_eq!(first_num("a 1,234.5 b").unwrap(), "1,234.5");
        assert_eq!(first_num("v1.2").unwrap(), "1.2");
        assert!(first_num("없음").is_none());
    }

    #[test]
    fn test_replace_nums() {
        let out = replace_nums("1과 2", |n| Ok(format!("[{}]", n))).unwrap();
        assert_eq!(out, "[1]과 [2]");
    }
}
