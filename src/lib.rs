//! num2kor - 한국어 숫자 말 표기 변환기
//!
//! 문장 속 아라비아 숫자를 문맥에 맞는 한국어 말 표기(한자어 묶음,
//! 고유어 셈, 한 자리씩 읽기)로 바꿉니다.
//!
//! ```
//! assert_eq!(num2kor::convert("5 시").unwrap(), "다섯 시");
//! assert_eq!(num2kor::convert("버스 3 대").unwrap(), "버스 세 대");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod numerals;
pub mod rules;
pub mod window;

pub use engine::{convert, convert_lossy, convert_with_limit};
pub use error::ConvertError;
