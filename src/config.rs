//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::layout::DEFAULT_LAYOUT_ID;
use crate::core::options::OptionSet;

/// 입력기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImeConfig {
    /// 자판 ID
    #[serde(default = "default_layout")]
    pub layout: String,
    /// 조합 옵션
    #[serde(default)]
    pub options: OptionSet,
    /// 한자 사전 파일 경로
    #[serde(default)]
    pub hanja_table: Option<PathBuf>,
}

fn default_layout() -> String {
    DEFAULT_LAYOUT_ID.to_string()
}

impl Default for ImeConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            options: OptionSet::default(),
            hanja_table: None,
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/hangul-ime/config.json
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .filter(|p| p.is_absolute() && p.is_dir())
                .map(|home| home.join(".config"))
        })
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("hangul-ime").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> ImeConfig {
    load_config_from(config_path())
}

pub fn load_config_from<P: AsRef<Path>>(path: P) -> ImeConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            ImeConfig::default()
        }),
        Err(_) => ImeConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &ImeConfig) -> Result<(), String> {
    save_config_to(config, config_path())
}

pub fn save_config_to<P: AsRef<Path>>(config: &ImeConfig, path: P) -> Result<(), String> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
