//! 숫자 읽기 변환기 모듈
//!
//! 한자어(묶음식), 고유어(셈식), 한 자리씩 읽기의 세 계열을 제공합니다.

pub mod native;
pub mod sino;
pub mod spelled;
pub mod tables;

pub use native::read_native;
pub use sino::read_sino;
pub use spelled::{read_digits_sino, read_digits_spelled, read_dotted_digits};
