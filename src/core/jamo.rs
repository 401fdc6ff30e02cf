//! 자모 유형 (초성/중성/종성)

use crate::core::unicode::{
    choseong_to_jamo_char, jongseong_to_jamo_char, jungseong_to_jamo_char, CHOSEONG_COUNT,
    JONGSEONG_COUNT, JUNGSEONG_COUNT,
};

/// 중성 ㅣ 인덱스
const JUNGSEONG_I: u32 = 20;

/// 로마자 자판의 반모음 y
///
/// 뒤따르는 모음과 결합해 ㅑ, ㅖ, ㅛ, ㅠ가 되고, 혼자 남으면 ㅣ로 표시한다.
/// 유니코드 중성 인덱스 범위 밖의 값이다.
pub const JUNGSEONG_Y_GLIDE: u32 = JUNGSEONG_COUNT;

/// 표시용 중성 인덱스 (반모음 y는 ㅣ)
pub fn surface_jungseong(jung: u32) -> u32 {
    if jung == JUNGSEONG_Y_GLIDE {
        JUNGSEONG_I
    } else {
        jung
    }
}

/// 음절 안에서의 역할이 정해진 자모
///
/// 인덱스는 유니코드 음절 조합 공식의 인덱스를 그대로 사용한다.
/// 종성 인덱스는 1~27 (0 = 종성 없음은 빈 슬롯으로 표현).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jamo {
    /// 초성 (0~18)
    Choseong(u32),
    /// 중성 (0~20, 복합 모음 포함)
    Jungseong(u32),
    /// 종성 (1~27, 겹받침 포함)
    Jongseong(u32),
}

impl Jamo {
    /// 인덱스 범위가 올바른지 확인
    pub fn is_valid(&self) -> bool {
        match *self {
            Jamo::Choseong(i) => i < CHOSEONG_COUNT,
            Jamo::Jungseong(i) => i < JUNGSEONG_COUNT || i == JUNGSEONG_Y_GLIDE,
            Jamo::Jongseong(i) => i > 0 && i < JONGSEONG_COUNT,
        }
    }

    /// 초성 인덱스 반환 (초성인 경우만)
    pub fn choseong_index(&self) -> Option<u32> {
        match *self {
            Jamo::Choseong(i) => Some(i),
            _ => None,
        }
    }

    /// 중성 인덱스 반환 (중성인 경우만)
    pub fn jungseong_index(&self) -> Option<u32> {
        match *self {
            Jamo::Jungseong(i) => Some(i),
            _ => None,
        }
    }

    /// 종성 인덱스 반환 (종성인 경우만)
    pub fn jongseong_index(&self) -> Option<u32> {
        match *self {
            Jamo::Jongseong(i) => Some(i),
            _ => None,
        }
    }

    /// 호환용 자모 문자
    pub fn to_jamo_char(&self) -> Option<char> {
        match *self {
            Jamo::Choseong(i) => choseong_to_jamo_char(i),
            Jamo::Jungseong(i) => jungseong_to_jamo_char(surface_jungseong(i)),
            Jamo::Jongseong(i) => jongseong_to_jamo_char(i),
        }
    }
}
