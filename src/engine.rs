//! 호스트 호출 규약
//!
//! 호스트 플랫폼이 1:1로 연결하는 함수 묶음. 세션이 없거나 사전이 없어도
//! 실패를 드러내지 않고 빈 문자열, false 같은 기본값을 돌려준다.
//! 전역 상태는 없고, 호출자가 `HangulEngine`을 소유한다.

use std::path::Path;

use crate::config::ImeConfig;
use crate::core::hangul_fsm::InputContext;
use crate::core::layout::KeyboardLayout;
use crate::core::options::OptionSet;
use crate::error::ImeError;
use crate::hanja::{HanjaDictionary, HanjaEntry, HanjaMap};

/// 입력 세션 하나와 한자 사전 하나를 가진 엔진 핸들
#[derive(Debug, Default)]
pub struct HangulEngine {
    context: Option<InputContext>,
    /// 새 세션에 적용할 옵션 (설정 파일에서)
    options: OptionSet,
    hanja: HanjaDictionary,
}

impl HangulEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정을 적용한 엔진 (세션까지 생성)
    ///
    /// 한자 사전 로드에 실패해도 엔진은 만들어진다.
    pub fn from_config(config: &ImeConfig) -> Self {
        let mut engine = Self {
            options: config.options,
            ..Self::default()
        };
        engine.create_context(&config.layout);
        if let Some(path) = &config.hanja_table {
            engine.load_hanja_table(path);
        }
        engine
    }

    /// 라이브러리 초기화 (성공 시 0)
    pub fn initialize(&mut self) -> i32 {
        KeyboardLayout::init_registry();
        0
    }

    /// 라이브러리 정리 (성공 시 0)
    pub fn finalize_library(&mut self) -> i32 {
        self.context = None;
        self.hanja.unload();
        0
    }

    /// 입력 세션 생성 (기존 세션은 버림)
    pub fn create_context(&mut self, layout_id: &str) {
        let mut context = InputContext::new(layout_id);
        context.set_options(self.options);
        self.context = Some(context);
    }

    pub fn delete_context(&mut self) {
        self.context = None;
    }

    /// 현재 세션
    pub fn context(&self) -> Result<&InputContext, ImeError> {
        self.context.as_ref().ok_or(ImeError::NoSession)
    }

    pub fn context_mut(&mut self) -> Result<&mut InputContext, ImeError> {
        self.context.as_mut().ok_or(ImeError::NoSession)
    }

    /// 세션에 대해 읽기 작업을 하고, 세션이 없으면 기본값
    fn query<T: Default>(&self, f: impl FnOnce(&InputContext) -> T) -> T {
        match self.context() {
            Ok(context) => f(context),
            Err(e) => {
                log::debug!("{}", e);
                T::default()
            }
        }
    }

    fn update<T: Default>(&mut self, f: impl FnOnce(&mut InputContext) -> T) -> T {
        match self.context_mut() {
            Ok(context) => f(context),
            Err(e) => {
                log::debug!("{}", e);
                T::default()
            }
        }
    }

    pub fn select_keyboard(&mut self, layout_id: &str) {
        self.update(|context| context.select_keyboard(layout_id));
    }

    /// 키 코드 하나 처리 (받아들였으면 true)
    pub fn process(&mut self, key: i32) -> bool {
        let Some(key) = u32::try_from(key).ok().and_then(char::from_u32) else {
            log::debug!("{}", ImeError::UnmappedKey(key));
            return false;
        };
        self.update(|context| context.process(key))
    }

    pub fn get_preedit_string(&self) -> String {
        self.query(InputContext::preedit_string)
    }

    pub fn get_commit_string(&mut self) -> String {
        self.update(InputContext::commit_string)
    }

    pub fn flush(&mut self) -> String {
        self.update(InputContext::flush)
    }

    pub fn reset(&mut self) {
        self.update(InputContext::reset);
    }

    pub fn backspace(&mut self) -> bool {
        self.update(InputContext::backspace)
    }

    /// 세션이 없으면 조합 중인 글자도 없으므로 true
    pub fn is_empty(&self) -> bool {
        match self.context() {
            Ok(context) => context.is_empty(),
            Err(e) => {
                log::debug!("{}", e);
                true
            }
        }
    }

    pub fn has_choseong(&self) -> bool {
        self.query(InputContext::has_choseong)
    }

    pub fn has_jungseong(&self) -> bool {
        self.query(InputContext::has_jungseong)
    }

    pub fn has_jongseong(&self) -> bool {
        self.query(InputContext::has_jongseong)
    }

    pub fn is_transliteration(&self) -> bool {
        self.query(InputContext::is_transliteration)
    }

    /// 옵션 읽기 (세션이 없으면 false)
    pub fn get_option(&self, option: i32) -> bool {
        self.query(|context| context.get_option(option))
    }

    /// 옵션 쓰기 (세션이 없으면 무시)
    pub fn set_option(&mut self, option: i32, value: bool) {
        self.update(|context| context.set_option(option, value));
    }

    /// 한자 사전 로드 (실패하면 기존 사전 유지)
    pub fn load_hanja_table<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        match self.hanja.load(path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("한자 사전 로드 실패 ({}): {}", path.display(), ImeError::from(e));
                false
            }
        }
    }

    pub fn delete_hanja_table(&mut self) {
        self.hanja.unload();
    }

    pub fn hanja(&self) -> &HanjaDictionary {
        &self.hanja
    }

    /// 정확히 일치하는 한자 후보 (`한자:뜻풀이`)
    pub fn match_exact_hanja(&self, key: &str) -> Vec<String> {
        to_strings(self.hanja.match_exact(key))
    }

    pub fn match_prefix_hanja(&self, key: &str) -> Vec<String> {
        to_strings(self.hanja.match_prefix(key))
    }

    pub fn match_suffix_hanja(&self, key: &str) -> Vec<String> {
        to_strings(self.hanja.match_suffix(key))
    }

    pub fn match_exact_hanja_map(&self, key: &str) -> HanjaMap {
        self.hanja.match_exact_map(key)
    }
}

fn to_strings(entries: Vec<HanjaEntry>) -> Vec<String> {
    entries.iter().map(HanjaEntry::to_string).collect()
}
