//! 분류사(수량 단위 명사) 판별기
//!
//! 예외 규칙이 없을 때 오른쪽 문맥의 분류사를 보고 고유어/한자어
//! 읽기를 고릅니다. 앞부분 일치 순서가 곧 우선순위이며, "뒤에 오면
//! 제외" 조건은 명시적으로 나열합니다.

use crate::error::ConvertError;
use crate::numerals::{read_native, read_sino};
use crate::rules::{first_num, replace_nums, NUM_RE};
use crate::window::Window;

/// 고유어 읽기를 부르는 분류사 목록 (순서가 우선순위)
///
/// 두 번째 항목은 분류사 바로 뒤에 오면 매칭을 무효로 하는 접미들.
const COUNTERS: &[(&str, &[&str])] = &[
    ("시간", &[]),
    ("군데", &[]),
    ("마리", &[]),
    ("가지", &[]),
    ("사람", &[]),
    ("개사", &[]),
    ("보루", &[]),
    ("경기", &[]),
    ("글자", &[]),
    ("번째", &[]),
    ("박스", &[]),
    ("조각", &[]),
    ("켤레", &[]),
    ("상자", &[]),
    ("봉지", &[]),
    ("통", &[]),
    ("잔", &[]),
    ("곡", &[]),
    ("자리", &[]),
    ("째", &[]),
    ("분께", &[]),
    ("단어", &[]),
    ("정거장", &[]),
    ("좌석", &[]),
    ("석", &[]),
    ("컵", &[]),
    ("골", &[]),
    ("벌", &[]),
    ("겹", &[]),
    ("세트", &[]),
    ("달", &["러"]),
    ("시", &["즌", "리즈", "접", "속"]),
    ("개", &["년", "월", "국"]),
    ("매", &[]),
    ("건", &["조"]),
    ("구", &["역"]),
    ("장", &["비", "기"]),
    ("차례", &[]),
    ("종류", &[]),
    ("종목", &[]),
    ("바늘", &[]),
    ("명", &[]),
    ("줄", &[]),
    ("살", &[]),
    ("해", &[]),
    ("곳", &[]),
    ("배", &[]),
    ("갑", &[]),
    ("병", &[]),
    ("발", &[]),
    ("척", &[]),
    ("권", &[]),
];

/// 오른쪽 문맥이 분류사로 시작하면 해당 분류사를 반환
pub fn match_counter(right: &str) -> Option<&'static str> {
    for &(word, not_next) in COUNTERS {
        if let Some(rest) = right.strip_prefix(word) {
            if not_next.iter().any(|s| rest.starts_with(s)) {
                continue;
            }
            return Some(word);
        }
    }
    None
}

/// 고유어 경로 변환: 분류사별 특례를 먼저 적용한 뒤 고유어로 읽음
pub fn read_counted(window: &Window, counter: &str) -> Result<String, ConvertError> {
    let mut span = window.span.clone();

    if counter == "시" {
        // 13시 이후는 한자어 (24시간제)
        let nums: Vec<String> = NUM_RE
            .find_iter(&span)
            .map(|m| m.as_str().to_string())
            .collect();
        for n in nums {
            let plain = n.replace(',', "");
            let value: f64 = plain.parse().map_err(|_| ConvertError::MalformedSpan {
                span: plain.clone(),
                detail: "시각 값을 해석할 수 없음".into(),
            })?;
            if value > 12.0 {
                span = span.replace(&plain, &read_sino(&plain)?);
            }
        }
    } else if counter == "시간" {
        // "24 시간"의 24만 한자어 강제
        if first_num(&span).as_deref() == Some("24") {
            span = span.replace("24", "이십사");
        }
    } else if window.right.contains('장') {
        // "제 N 장"은 셈이 아니라 순번이므로 한자어
        if window.left.contains('제') {
            span = replace_nums(&span, read_sino)?;
        }
    }

    replace_nums(&span, |n| read_native(n, false))
}
