//! 문맥 윈도우 추출 모듈

mod extractor;

pub use extractor::{next_window, Window, SENTINEL};
