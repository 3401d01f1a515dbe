//! 변환 엔진
//!
//! 입력을 경계 표식으로 감싸고, 숫자 구간 윈도우를 하나씩 꺼내
//! 예외 규칙 → 분류사 → 기본(한자어) 순으로 치환을 반복합니다.
//! 숫자가 사라질 때까지 돌고, 마지막에 부호 풀어쓰기와 경계 제거,
//! 공백 정리를 수행합니다.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::ConvertError;
use crate::numerals::read_sino;
use crate::numerals::tables::sign_word;
use crate::rules::classifier::{match_counter, read_counted};
use crate::rules::exceptions::{apply_rule, match_rule};
use crate::rules::replace_nums;
use crate::window::next_window;

/// 한 입력에 허용하는 최대 치환 횟수
pub const DEFAULT_MAX_PASSES: usize = 1000;

/// 숫자 말 앞의 부호 기호: 앞 글자가 수 표기가 아닐 때만 풀어 씀
static SIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^일이삼사오육칠팔구십백천만억조]\s)([+\-–±])(\s?[영일이삼사오육칠팔구십백천만억조])")
        .expect("부호 패턴")
});

/// 양끝 경계 표식 제거
static WRAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"εε (.*) εε").expect("경계 패턴"));

/// 연속 공백 정리
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").expect("공백 패턴"));

/// 텍스트의 모든 숫자 표기를 말 표기로 변환
pub fn convert(text: &str) -> Result<String, ConvertError> {
    convert_with_limit(text, DEFAULT_MAX_PASSES)
}

/// 치환 횟수 상한을 지정한 변환
pub fn convert_with_limit(text: &str, max_passes: usize) -> Result<String, ConvertError> {
    let mut text = format!("εε {} εε", text);
    let mut passes = 0usize;

    while let Some(w) = next_window(&text) {
        passes += 1;
        if passes > max_passes {
            return Err(ConvertError::NoProgress {
                passes,
                window: w.full(),
            });
        }

        let full = w.full();
        let replacement = if let Some(kind) = match_rule(&w) {
            let out = apply_rule(kind, &w)?;
            log::debug!("예외 규칙 {:?}: {:?} -> {:?}", kind, w.span, out.span);
            match out.currency {
                Some(ccy) => format!("{}{} {} {}", w.left, out.span, ccy, w.right),
                None => format!("{}{}{}", w.left, out.span, w.right),
            }
        } else if let Some(counter) = match_counter(&w.right) {
            let span = read_counted(&w, counter)?;
            log::debug!("분류사 {:?}: {:?} -> {:?}", counter, w.span, span);
            format!("{}{}{}", w.left, span, w.right)
        } else {
            let span = replace_nums(&w.span, read_sino)?;
            format!("{}{}{}", w.left, span, w.right)
        };

        let updated = text.replacen(&full, &replacement, 1);
        if updated == text {
            return Err(ConvertError::NoProgress {
                passes,
                window: full,
            });
        }
        text = updated;
    }

    let signed = SIGN_RE.replace_all(&text, |caps: &Captures| {
        let word = caps[2].chars().next().and_then(sign_word).unwrap_or("");
        format!("{}{} {}", &caps[1], word, &caps[3])
    });
    let unwrapped = WRAP_RE.replace(&signed, "$1");
    Ok(SPACE_RE.replace_all(&unwrapped, " ").into_owned())
}

/// 실패 시 경고 로그를 남기고 원문을 그대로 돌려주는 변환
pub fn convert_lossy(text: &str) -> String {
    match convert(text) {
        Ok(out) => out,
        Err(e) => {
            log::warn!("변환 실패, 원문 유지: {}", e);
            text.to_string()
        }
    }
}
