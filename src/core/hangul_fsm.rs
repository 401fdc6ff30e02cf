//! 한글 조합 유한 상태 기계 (FSM)
//!
//! 입력 세션 하나의 상태(조합 중인 블록, 확정 대기열, 자판, 옵션)를 가진다.
//! 호출자가 단독으로 소유하며 내부 잠금은 없다.

use crate::core::block::SyllableBlock;
use crate::core::combination::DOUBLE_STROKE;
use crate::core::jamo::Jamo;
use crate::core::layout::{KeyboardLayout, LayoutKind};
use crate::core::options::OptionSet;
use crate::core::unicode::{choseong_to_jongseong, jongseong_to_choseong, CHOSEONG_IEUNG};
use crate::error::ImeError;

/// FSM 상태 (블록에서 가장 뒤쪽에 채워진 슬롯)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 중성까지 입력됨 (초성이 있으면 한 글자 완성)
    Jungseong,
    /// 종성까지 입력됨
    Jongseong,
}

/// 키 하나를 받기 직전의 상태 (백스페이스용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    block: SyllableBlock,
    /// 당시 확정 대기열 길이
    committed: usize,
}

/// 한글 입력 컨텍스트
#[derive(Debug, Clone, PartialEq)]
pub struct InputContext {
    layout: &'static KeyboardLayout,
    options: OptionSet,
    /// 조합 중인 음절
    block: SyllableBlock,
    /// 확정되어 호스트로 넘어갈 문자들
    commit: Vec<char>,
    /// 받아들인 키마다 하나씩 쌓는 되돌리기 기록
    undo: Vec<Snapshot>,
}

impl InputContext {
    /// 자판 ID로 새 컨텍스트 생성 (알 수 없는 ID는 두벌식)
    pub fn new(layout_id: &str) -> Self {
        Self::with_layout(KeyboardLayout::get_or_default(layout_id))
    }

    pub fn with_layout(layout: &'static KeyboardLayout) -> Self {
        Self {
            layout,
            options: OptionSet::default(),
            block: SyllableBlock::default(),
            commit: Vec::new(),
            undo: Vec::new(),
        }
    }

    pub fn layout(&self) -> &'static KeyboardLayout {
        self.layout
    }

    /// 자판 교체
    ///
    /// 조합 중인 글자는 그대로 두고, 이후 키부터 새 자판으로 해석한다.
    pub fn select_keyboard(&mut self, layout_id: &str) {
        self.layout = KeyboardLayout::get_or_default(layout_id);
        log::debug!("자판 교체: {}", self.layout.id());
    }

    pub fn options(&self) -> OptionSet {
        self.options
    }

    pub fn set_options(&mut self, options: OptionSet) {
        self.options = options;
    }

    /// 옵션 번호로 읽기 (알 수 없는 번호는 false)
    pub fn get_option(&self, id: i32) -> bool {
        self.options.get_by_id(id)
    }

    /// 옵션 번호로 쓰기 (알 수 없는 번호는 무시)
    pub fn set_option(&mut self, id: i32, value: bool) {
        self.options.set_by_id(id, value);
    }

    pub fn is_transliteration(&self) -> bool {
        self.layout.is_transliteration()
    }

    /// 키 입력 처리
    ///
    /// 자판에 없는 키는 `ImeError::UnmappedKey`를 돌려주고 상태를 바꾸지 않는다.
    pub fn try_process(&mut self, key: char) -> Result<(), ImeError> {
        let jamo = self
            .layout
            .map_key(key)
            .ok_or(ImeError::UnmappedKey(key as i32))?;
        self.process_jamo(jamo);
        Ok(())
    }

    /// 키 입력 처리 (받아들였으면 true)
    pub fn process(&mut self, key: char) -> bool {
        match self.try_process(key) {
            Ok(()) => true,
            Err(e) => {
                log::trace!("{}", e);
                false
            }
        }
    }

    /// 자모를 직접 입력하여 상태 전이
    ///
    /// 인덱스 범위를 벗어난 자모는 무시하고 false를 돌려준다.
    pub fn process_jamo(&mut self, jamo: Jamo) -> bool {
        if !jamo.is_valid() {
            return false;
        }
        let snapshot = Snapshot {
            block: self.block,
            committed: self.commit.len(),
        };
        match (self.layout.kind(), jamo) {
            (LayoutKind::Jaso, _) | (_, Jamo::Jongseong(_)) => self.feed_jaso(jamo),
            (_, Jamo::Choseong(cho)) => self.feed_consonant(cho),
            (_, Jamo::Jungseong(jung)) => self.feed_vowel(jung),
        }
        self.undo.push(snapshot);
        log::trace!("{:?} -> {:?}", jamo, self.block);
        true
    }

    /// 두벌식/로마자: 자음 입력 처리
    fn feed_consonant(&mut self, cho: u32) {
        let block = self.block;
        match (block.choseong, block.jungseong, block.jongseong) {
            (None, None, None) => self.block.choseong = Some(cho),
            (Some(prev), None, None) => {
                if let Some(combined) = self.combine_choseong(prev, cho) {
                    self.block.choseong = Some(combined);
                } else if let Some(cluster) = self.non_choseong_cluster(prev, cho) {
                    // 초성 없이 겹자음만 조합 중 (ㄳ, ㄶ, ...)
                    self.block = SyllableBlock::from_jamo(Jamo::Jongseong(cluster));
                } else {
                    self.start_block(Jamo::Choseong(cho));
                }
            }
            (Some(_), Some(_), None) => match choseong_to_jongseong(cho) {
                Some(jong) => self.block.jongseong = Some(jong),
                // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                None => self.start_block(Jamo::Choseong(cho)),
            },
            (_, Some(_), Some(prev)) => {
                let combined =
                    choseong_to_jongseong(cho).and_then(|jong| self.combine_jongseong(prev, jong));
                if let Some(combined) = combined {
                    self.block.jongseong = Some(combined);
                } else if let Some(moved) = self.romaja_choseong(prev, cho) {
                    // 받침과 새 자음이 초성 하나를 이룸 (로마자 ch 등)
                    self.block.jongseong = None;
                    self.start_block(Jamo::Choseong(moved));
                } else {
                    self.start_block(Jamo::Choseong(cho));
                }
            }
            // 모음만 있거나 초성 없는 겹자음
            _ => self.start_block(Jamo::Choseong(cho)),
        }
    }

    /// 두벌식/로마자: 모음 입력 처리
    fn feed_vowel(&mut self, jung: u32) {
        let block = self.block;
        match (block.jungseong, block.jongseong) {
            (_, Some(jong)) => self.resyllabify(jong, jung),
            (Some(prev), None) => {
                match self.layout.combination().combine_jungseong(prev, jung) {
                    Some(combined) => self.block.jungseong = Some(combined),
                    None => self.start_block(Jamo::Jungseong(jung)),
                }
            }
            (None, None) => {
                self.block.jungseong = Some(jung);
                self.fill_romaja_choseong();
            }
        }
    }

    /// 받침을 떼어 다음 음절의 초성으로 옮김
    ///
    /// 겹받침은 마지막 자음만 옮기고 첫 자음은 받침으로 남긴다.
    /// 떼어 내고 남은 블록은 확정된다.
    fn resyllabify(&mut self, jong: u32, jung: u32) {
        let (remaining, moved) = match self.layout.combination().split_jongseong(jong) {
            Some((first, second)) => (Some(first), second),
            None => (None, jong),
        };
        match jongseong_to_choseong(moved) {
            Some(cho) => {
                self.block.jongseong = remaining;
                self.commit_block();
                self.block = SyllableBlock {
                    choseong: Some(cho),
                    jungseong: Some(jung),
                    jongseong: None,
                };
            }
            None => self.start_block(Jamo::Jungseong(jung)),
        }
    }

    /// 세벌식: 초성/중성/종성 키가 따로 들어옴
    fn feed_jaso(&mut self, jamo: Jamo) {
        let reorder = self.options.auto_reorder;
        let block = self.block;
        match jamo {
            Jamo::Choseong(cho) => match block.choseong {
                Some(prev) if block.jungseong.is_none() && block.jongseong.is_none() => {
                    match self.combine_choseong(prev, cho) {
                        Some(combined) => self.block.choseong = Some(combined),
                        None => self.start_block(jamo),
                    }
                }
                // 모아치기: 모음/받침 뒤에 온 초성도 같은 글자로
                None if block.is_empty() || reorder => self.block.choseong = Some(cho),
                _ => self.start_block(jamo),
            },
            Jamo::Jungseong(jung) => match block.jungseong {
                Some(prev) => {
                    let combined = if block.jongseong.is_none() || reorder {
                        self.layout.combination().combine_jungseong(prev, jung)
                    } else {
                        None
                    };
                    match combined {
                        Some(combined) => self.block.jungseong = Some(combined),
                        None => self.start_block(jamo),
                    }
                }
                None if block.jongseong.is_none() || reorder => {
                    self.block.jungseong = Some(jung)
                }
                None => self.start_block(jamo),
            },
            Jamo::Jongseong(jong) => match block.jongseong {
                Some(prev) => match self.combine_jongseong(prev, jong) {
                    Some(combined) => self.block.jongseong = Some(combined),
                    None => self.start_block(jamo),
                },
                None if block.jungseong.is_some() || (reorder && !block.is_empty()) => {
                    self.block.jongseong = Some(jong)
                }
                None => self.start_block(jamo),
            },
        }
    }

    /// 두벌식 자음 연타 옵션이 적용되는지
    fn double_stroke(&self) -> bool {
        self.layout.kind() == LayoutKind::Jamo && self.options.combi_on_double_stroke
    }

    fn combine_choseong(&self, first: u32, second: u32) -> Option<u32> {
        self.layout
            .combination()
            .combine_choseong(first, second)
            .or_else(|| {
                if self.double_stroke() {
                    DOUBLE_STROKE.combine_choseong(first, second)
                } else {
                    None
                }
            })
    }

    fn combine_jongseong(&self, first: u32, second: u32) -> Option<u32> {
        self.layout
            .combination()
            .combine_jongseong(first, second)
            .or_else(|| {
                if self.double_stroke() {
                    DOUBLE_STROKE.combine_jongseong(first, second)
                } else {
                    None
                }
            })
    }

    /// 초성 두 개가 초성에 없는 겹자음을 이루는지 (ㄱ + ㅅ = ㄳ)
    fn non_choseong_cluster(&self, first: u32, second: u32) -> Option<u32> {
        if self.layout.kind() != LayoutKind::Jamo || !self.options.non_choseong_combi {
            return None;
        }
        let first = choseong_to_jongseong(first)?;
        let second = choseong_to_jongseong(second)?;
        self.layout.combination().combine_jongseong(first, second)
    }

    /// 로마자: 받침을 초성으로 돌렸을 때 새 자음과 결합되는지
    fn romaja_choseong(&self, jong: u32, cho: u32) -> Option<u32> {
        if self.layout.kind() != LayoutKind::Romaja {
            return None;
        }
        let prev = jongseong_to_choseong(jong)?;
        self.layout.combination().combine_choseong(prev, cho)
    }

    /// 로마자: 모음으로 시작하는 음절에 초성 ㅇ을 채움
    fn fill_romaja_choseong(&mut self) {
        if self.layout.kind() == LayoutKind::Romaja
            && self.block.choseong.is_none()
            && self.block.jungseong.is_some()
        {
            self.block.choseong = Some(CHOSEONG_IEUNG);
        }
    }

    /// 현재 블록을 확정하고 자모 하나로 새 블록 시작
    fn start_block(&mut self, jamo: Jamo) {
        self.commit_block();
        self.block = SyllableBlock::from_jamo(jamo);
        self.fill_romaja_choseong();
    }

    /// 현재 조합 중인 글자를 확정 대기열에 추가
    fn commit_block(&mut self) {
        self.commit.extend(self.block.render().chars());
        self.block = SyllableBlock::default();
    }

    /// 조합 중인 글자 (완성되지 않았으면 호환용 자모)
    pub fn preedit_string(&self) -> String {
        self.block.render()
    }

    /// 확정된 문자열을 꺼냄 (꺼낸 뒤에는 비어 있음)
    pub fn commit_string(&mut self) -> String {
        let drained = self.commit.len();
        let text: String = self.commit.drain(..).collect();
        // 꺼낸 글자는 되돌릴 수 없으므로, 확정 이후에 들어온 키 기록만 남긴다
        self.undo.retain(|snapshot| snapshot.committed == drained);
        for snapshot in &mut self.undo {
            snapshot.committed = 0;
        }
        text
    }

    /// 조합 중인 글자와 확정 대기열을 모두 버림
    pub fn reset(&mut self) {
        self.block = SyllableBlock::default();
        self.commit.clear();
        self.undo.clear();
    }

    /// 조합 중인 글자까지 확정하여 남은 문자열 전체를 돌려주고 비움
    pub fn flush(&mut self) -> String {
        self.commit_block();
        self.undo.clear();
        self.commit.drain(..).collect()
    }

    /// 마지막 입력 하나를 지움
    ///
    /// 확정 문자열을 꺼내기 전이라면 마지막 키 직전 상태로 그대로 되돌린다.
    /// 되돌릴 기록이 없으면 블록의 마지막 슬롯을 분해한다.
    pub fn backspace(&mut self) -> bool {
        if let Some(snapshot) = self.undo.pop() {
            self.commit.truncate(snapshot.committed);
            self.block = snapshot.block;
            return true;
        }
        if self.block.is_empty() {
            return self.commit.pop().is_some();
        }
        self.pop_slot();
        true
    }

    /// 블록의 마지막 슬롯을 한 단계 줄임 (복합 자모는 첫 자모로)
    fn pop_slot(&mut self) {
        let combination = self.layout.combination();
        let double_stroke = self.double_stroke();
        if let Some(jong) = self.block.jongseong {
            let first = combination
                .split_jongseong(jong)
                .or_else(|| double_stroke.then(|| DOUBLE_STROKE.split_jongseong(jong)).flatten())
                .map(|(first, _)| first);
            if self.layout.kind() == LayoutKind::Jamo
                && !self.block.is_complete()
                && self.block.choseong.is_none()
            {
                // 초성 없는 겹자음은 첫 자음 초성으로 되돌림
                self.block.choseong = first.and_then(jongseong_to_choseong);
                self.block.jongseong = None;
            } else {
                self.block.jongseong = first;
            }
        } else if let Some(jung) = self.block.jungseong {
            self.block.jungseong = combination.split_jungseong(jung).map(|(first, _)| first);
            if self.block.jungseong.is_none()
                && self.layout.kind() == LayoutKind::Romaja
                && self.block.choseong == Some(CHOSEONG_IEUNG)
            {
                self.block.choseong = None;
            }
        } else if let Some(cho) = self.block.choseong {
            self.block.choseong = combination
                .split_choseong(cho)
                .or_else(|| double_stroke.then(|| DOUBLE_STROKE.split_choseong(cho)).flatten())
                .map(|(first, _)| first);
        }
    }

    /// 조합 중인 글자가 없는지
    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    pub fn has_choseong(&self) -> bool {
        self.block.choseong.is_some()
    }

    pub fn has_jungseong(&self) -> bool {
        self.block.jungseong.is_some()
    }

    pub fn has_jongseong(&self) -> bool {
        self.block.jongseong.is_some()
    }

    pub fn state(&self) -> State {
        if self.block.jongseong.is_some() {
            State::Jongseong
        } else if self.block.jungseong.is_some() {
            State::Jungseong
        } else if self.block.choseong.is_some() {
            State::Choseong
        } else {
            State::Empty
        }
    }

    /// 조합 중인 블록
    pub fn block(&self) -> SyllableBlock {
        self.block
    }
}

impl Default for InputContext {
    fn default() -> Self {
        Self::with_layout(KeyboardLayout::default_layout())
    }
}
