//! 변환 에러 타입
//!
//! 변환은 전체 성공 아니면 실패입니다. 부분 성공은 없으며,
//! 원문 유지가 필요한 호출자는 `convert_lossy`를 사용합니다.

/// 숫자 읽기 변환 에러
#[derive(Debug)]
pub enum ConvertError {
    /// 숫자 구간을 자릿수 연산으로 해석할 수 없음
    MalformedSpan {
        /// 문제가 된 숫자 구간
        span: String,
        /// 실패 원인
        detail: String,
    },
    /// 치환 루프가 진전 없이 반복됨 (반복 상한 초과 포함)
    NoProgress {
        /// 수행된 치환 횟수
        passes: usize,
        /// 마지막으로 처리하던 윈도우
        window: String,
    },
    /// 고정 테이블에 없는 자릿수 문자 (도달하면 테이블 누락)
    UnknownDigit(char),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::MalformedSpan { span, detail } => {
                write!(f, "숫자 구간 해석 실패: {:?} ({})", span, detail)
            }
            ConvertError::NoProgress { passes, window } => {
                write!(f, "치환 루프 정지: {}회 수행, 윈도우 {:?}", passes, window)
            }
            ConvertError::UnknownDigit(c) => {
                write!(f, "숫자 테이블에 없는 문자: {:?}", c)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_span() {
        let e = ConvertError::MalformedSpan {
            span: "1x2".into(),
            detail: "숫자가 아닌 문자".into(),
        };
        assert!(e.to_string().contains("1x2"));
    }

    #[test]
    fn test_display_no_progress() {
        let e = ConvertError::NoProgress {
            passes: 1000,
            window: "5 개".into(),
        };
        assert!(e.to_string().contains("1000"));
    }
}
