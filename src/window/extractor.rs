//! 문맥 윈도우 추출기
//!
//! 텍스트에서 다음 숫자 구간을 좌우 한 어절의 문맥과 함께 잘라냅니다.
//! 문자 부류(한글/영문/숫자/부호/공백/경계 표식)를 직접 판별하는
//! 스캐너로, 좌우 "한 어절" 규칙을 단독으로 검증할 수 있습니다.

use crate::numerals::tables::is_hangul_syllable;

/// 입력 양끝을 감싸는 경계 표식 문자
pub const SENTINEL: char = 'ε';

/// 한 번의 치환 대상이 되는 (왼쪽 문맥, 숫자 구간, 오른쪽 문맥) 삼중
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// 숫자 구간 앞의 한 어절 (뒤따르는 공백 하나 포함 가능)
    pub left: String,
    /// 부호/화폐 접두와 숫자를 포함한 구간 (내부 공백 허용)
    pub span: String,
    /// 숫자 구간 뒤의 한 어절
    pub right: String,
}

impl Window {
    /// 세 부분을 이어붙인, 원문에서 실제로 매칭된 부분 문자열
    pub fn full(&self) -> String {
        let mut s = String::with_capacity(self.left.len() + self.span.len() + self.right.len());
        s.push_str(&self.left);
        s.push_str(&self.span);
        s.push_str(&self.right);
        s
    }
}

/// 왼쪽 문맥 어절을 이루는 문자
fn is_left_word_char(c: char) -> bool {
    is_hangul_syllable(c)
        || c.is_ascii_alphabetic()
        || matches!(c, '.' | ',' | SENTINEL | '_' | ']')
}

/// 오른쪽 문맥 어절을 이루는 문자
fn is_right_word_char(c: char) -> bool {
    is_hangul_syllable(c) || c.is_ascii_alphabetic() || matches!(c, '.' | ',' | SENTINEL | ']')
}

/// 숫자 구간이 이어질 수 있는 문자 (한글/개행/경계 표식 전까지)
fn is_span_char(c: char) -> bool {
    !(c == ']' || c == '\n' || c == SENTINEL || is_hangul_syllable(c))
}

/// 숫자 바로 앞에 붙는 부호/화폐 접두 문자
fn is_sign_prefix(c: char) -> bool {
    matches!(c, '+' | '-' | '–' | '±' | '$' | '＄' | '￦' | '￥')
}

/// 다음 숫자 구간의 윈도우를 추출 (숫자가 없으면 None)
pub fn next_window(text: &str) -> Option<Window> {
    let digit_idx = text
        .char_indices()
        .find(|&(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i)?;

    // 부호/화폐 접두를 구간에 포함
    let mut span_start = digit_idx;
    for (i, c) in text[..digit_idx].char_indices().rev() {
        if is_sign_prefix(c) {
            span_start = i;
        } else {
            break;
        }
    }

    // 왼쪽 문맥: 공백 하나 + 어절 런 (뒤에서 앞으로)
    let mut left_start = span_start;
    let mut before = text[..span_start].char_indices().rev().peekable();
    if let Some(&(i, c)) = before.peek() {
        if c.is_whitespace() {
            left_start = i;
            before.next();
        }
    }
    while let Some(&(i, c)) = before.peek() {
        if is_left_word_char(c) {
            left_start = i;
            before.next();
        } else {
            break;
        }
    }

    // 구간을 오른쪽으로 확장
    let mut span_end = digit_idx;
    for (i, c) in text[digit_idx..].char_indices() {
        if is_span_char(c) {
            span_end = digit_idx + i + c.len_utf8();
        } else {
            break;
        }
    }

    // 오른쪽 문맥 어절
    let mut right_end = span_end;
    for (i, c) in text[span_end..].char_indices() {
        if is_right_word_char(c) {
            right_end = span_end + i + c.len_utf8();
        } else {
            break;
        }
    }

    Some(Window {
        left: text[left_start..span_start].to_string(),
        span: text[span_start..span_end].to_string(),
        right: text[span_end..right_end].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(text: &str) -> Window {
        next_window(text).unwrap()
    }

    #[test]
    fn test_no_digit() {
        assert!(next_window("숫자 없는 문장").is_none());
        assert!(next_window("").is_none());
    }

    #[test]
    fn test_basic_triple() {
        let w = win("εε 5 시 εε");
        assert_eq!(w.left, "εε ");
        assert_eq!(w.span, "5 "); // 뒤 한글 직전의 공백은 구간에 포함
        assert_eq!(w.right, "시");
    }

    #[test]
    fn test_full_reproduces_matched_text() {
        let text = "εε 버스 3 대 εε";
        let w = win(text);
        assert!(text.contains(&w.full()));
        assert_eq!(w.full(), "버스 3 대");
    }

    #[test]
    fn test_hangul_bounds_span() {
        let w = win("εε 1~2개 εε");
        assert_eq!(w.span, "1~2");
        assert_eq!(w.right, "개");
    }

    #[test]
    fn test_sign_prefix_in_span() {
        let w = win("εε $5 εε");
        assert_eq!(w.span, "$5 ");
        let w = win("εε -13 εε");
        assert_eq!(w.span, "-13 ");
    }

    #[test]
    fn test_interior_spaces_stay_in_span() {
        // 전화번호 형태: 공백으로 나뉜 숫자 뭉치가 한 구간
        let w = win("εε 010 1234 5678 εε");
        assert_eq!(w.span, "010 1234 5678 ");
        assert_eq!(w.right, "εε");
    }

    #[test]
    fn test_left_word_without_space() {
        let w = win("εε 갤럭시 s8 εε");
        assert_eq!(w.left, "s");
        assert_eq!(w.span, "8 ");
    }

    #[test]
    fn test_double_space_keeps_one() {
        // 공백이 둘이면 어절 없이 공백 하나만 왼쪽 문맥
        let w = win("가나  5");
        assert_eq!(w.left, " ");
        assert_eq!(w.span, "5");
    }

    #[test]
    fn test_unit_suffix_in_span() {
        let w = win("εε 13.6 km/l 이며 εε");
        assert_eq!(w.span, "13.6 km/l ");
        assert_eq!(w.right, "이며");
    }
}
