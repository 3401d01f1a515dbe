//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::engine::DEFAULT_MAX_PASSES;

/// 변환기 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReaderConfig {
    /// 한 입력에 허용하는 최대 치환 횟수
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,
    /// 변환 실패 시 원문을 그대로 출력할지 여부
    #[serde(default = "default_fallback_on_error")]
    pub fallback_on_error: bool,
}

fn default_max_passes() -> usize {
    DEFAULT_MAX_PASSES
}

fn default_fallback_on_error() -> bool {
    true
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_passes: default_max_passes(),
            fallback_on_error: default_fallback_on_error(),
        }
    }
}

/// 설정 파일 경로: ~/.config/num2kor/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("num2kor").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> ReaderConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| ReaderConfig::default()),
        Err(_) => ReaderConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &ReaderConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.max_passes, 1000);
        assert!(config.fallback_on_error);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = ReaderConfig {
            max_passes: 50,
            fallback_on_error: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ReaderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.max_passes, 50);
        assert!(!parsed.fallback_on_error);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 fallback_on_error가 없는 경우 기본값 사용
        let json = r#"{"max_passes": 10}"#;
        let config: ReaderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_passes, 10);
        assert!(config.fallback_on_error);
    }
}
