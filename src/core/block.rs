//! 조합 중인 음절 블록

use crate::core::jamo::{surface_jungseong, Jamo};
use crate::core::unicode::{
    choseong_to_jamo_char, compose_syllable, jongseong_to_jamo_char, jungseong_to_jamo_char,
};

/// 초성/중성/종성 슬롯을 하나씩 가진 음절 블록
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyllableBlock {
    pub choseong: Option<u32>,
    pub jungseong: Option<u32>,
    pub jongseong: Option<u32>,
}

impl SyllableBlock {
    /// 자모 하나로 시작하는 블록
    pub fn from_jamo(jamo: Jamo) -> Self {
        let mut block = Self::default();
        match jamo {
            Jamo::Choseong(i) => block.choseong = Some(i),
            Jamo::Jungseong(i) => block.jungseong = Some(i),
            Jamo::Jongseong(i) => block.jongseong = Some(i),
        }
        block
    }

    pub fn is_empty(&self) -> bool {
        self.choseong.is_none() && self.jungseong.is_none() && self.jongseong.is_none()
    }

    /// 초성+중성이 있으면 완성된 음절
    pub fn is_complete(&self) -> bool {
        self.choseong.is_some() && self.jungseong.is_some()
    }

    /// 블록을 문자열 끝에 덧붙임
    ///
    /// 완성된 음절은 조합형 음절 하나로, 아니면 있는 슬롯을
    /// 초성/중성/종성 순서의 호환용 자모로 쓴다.
    pub fn render_into(&self, out: &mut String) {
        let jungseong = self.jungseong.map(surface_jungseong);
        if let (Some(cho), Some(jung)) = (self.choseong, jungseong) {
            if let Some(c) = compose_syllable(cho, jung, self.jongseong.unwrap_or(0)) {
                out.push(c);
                return;
            }
        }
        let parts = [
            self.choseong.and_then(choseong_to_jamo_char),
            jungseong.and_then(jungseong_to_jamo_char),
            self.jongseong.and_then(jongseong_to_jamo_char),
        ];
        out.extend(parts.into_iter().flatten());
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}
