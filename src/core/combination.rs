//! 자모 결합 규칙 테이블
//!
//! 자판마다 같은 역할의 자모 두 개를 하나로 합치는 규칙을 가진다.
//! 각 규칙은 `(첫 자모, 둘째 자모, 결합 결과)` 인덱스 쌍으로 표현된다.
//! 결합을 거꾸로 찾으면 백스페이스와 재음절화에 쓰는 분리 규칙이 된다.

use crate::core::jamo::JUNGSEONG_Y_GLIDE as Y;

type Rule = (u32, u32, u32);

/// 한 자판의 결합 규칙 묶음
#[derive(Debug, PartialEq, Eq)]
pub struct Combination {
    choseong: &'static [Rule],
    jungseong: &'static [Rule],
    jongseong: &'static [Rule],
}

impl Combination {
    /// 두 초성을 결합
    pub fn combine_choseong(&self, first: u32, second: u32) -> Option<u32> {
        combine(self.choseong, first, second)
    }

    /// 두 중성을 복합 모음으로 결합
    pub fn combine_jungseong(&self, first: u32, second: u32) -> Option<u32> {
        combine(self.jungseong, first, second)
    }

    /// 두 종성을 겹받침으로 결합
    pub fn combine_jongseong(&self, first: u32, second: u32) -> Option<u32> {
        combine(self.jongseong, first, second)
    }

    /// 결합된 초성을 (첫 초성, 둘째 초성)으로 분리
    pub fn split_choseong(&self, combined: u32) -> Option<(u32, u32)> {
        split(self.choseong, combined)
    }

    /// 복합 모음을 (첫 모음, 둘째 모음)으로 분리
    pub fn split_jungseong(&self, combined: u32) -> Option<(u32, u32)> {
        split(self.jungseong, combined)
    }

    /// 겹받침을 (남는 종성, 떨어지는 종성)으로 분리
    pub fn split_jongseong(&self, combined: u32) -> Option<(u32, u32)> {
        split(self.jongseong, combined)
    }
}

fn combine(rules: &[Rule], first: u32, second: u32) -> Option<u32> {
    rules
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)
        .map(|&(_, _, combined)| combined)
}

fn split(rules: &[Rule], combined: u32) -> Option<(u32, u32)> {
    // 결과가 첫 자모와 같은 규칙(로마자 ch 등)은 되돌릴 것이 없다
    rules
        .iter()
        .find(|&&(a, _, c)| c == combined && a != combined)
        .map(|&(a, b, _)| (a, b))
}

/// 표준 복합 모음
const JUNGSEONG_STANDARD: &[Rule] = &[
    (8, 0, 9),    // ㅗ + ㅏ = ㅘ
    (8, 1, 10),   // ㅗ + ㅐ = ㅙ
    (8, 20, 11),  // ㅗ + ㅣ = ㅚ
    (13, 4, 14),  // ㅜ + ㅓ = ㅝ
    (13, 5, 15),  // ㅜ + ㅔ = ㅞ
    (13, 20, 16), // ㅜ + ㅣ = ㅟ
    (18, 20, 19), // ㅡ + ㅣ = ㅢ
];

/// 표준 겹받침
const JONGSEONG_CLUSTERS: &[Rule] = &[
    (1, 19, 3),   // ㄱ + ㅅ = ㄳ
    (4, 22, 5),   // ㄴ + ㅈ = ㄵ
    (4, 27, 6),   // ㄴ + ㅎ = ㄶ
    (8, 1, 9),    // ㄹ + ㄱ = ㄺ
    (8, 16, 10),  // ㄹ + ㅁ = ㄻ
    (8, 17, 11),  // ㄹ + ㅂ = ㄼ
    (8, 19, 12),  // ㄹ + ㅅ = ㄽ
    (8, 25, 13),  // ㄹ + ㅌ = ㄾ
    (8, 26, 14),  // ㄹ + ㅍ = ㄿ
    (8, 27, 15),  // ㄹ + ㅎ = ㅀ
    (17, 19, 18), // ㅂ + ㅅ = ㅄ
];

/// 같은 자음 연타로 만드는 된소리 초성
const CHOSEONG_DOUBLE: &[Rule] = &[
    (0, 0, 1),    // ㄱ + ㄱ = ㄲ
    (3, 3, 4),    // ㄷ + ㄷ = ㄸ
    (7, 7, 8),    // ㅂ + ㅂ = ㅃ
    (9, 9, 10),   // ㅅ + ㅅ = ㅆ
    (12, 12, 13), // ㅈ + ㅈ = ㅉ
];

/// 같은 자음 연타로 만드는 쌍받침
const JONGSEONG_DOUBLE: &[Rule] = &[
    (1, 1, 2),    // ㄱ + ㄱ = ㄲ
    (19, 19, 20), // ㅅ + ㅅ = ㅆ
];

/// 세벌식 종성: 겹받침 + 쌍받침
const JONGSEONG_SEBEOLSIK: &[Rule] = &[
    (1, 1, 2),
    (1, 19, 3),
    (4, 22, 5),
    (4, 27, 6),
    (8, 1, 9),
    (8, 16, 10),
    (8, 17, 11),
    (8, 19, 12),
    (8, 25, 13),
    (8, 26, 14),
    (8, 27, 15),
    (17, 19, 18),
    (19, 19, 20),
];

/// 로마자 초성: 겹자음 + ch
const CHOSEONG_ROMAJA: &[Rule] = &[
    (0, 0, 1),
    (3, 3, 4),
    (7, 7, 8),
    (9, 9, 10),
    (12, 12, 13),
    (14, 18, 14), // c + h = ㅊ
];

/// 로마자 모음 철자
const JUNGSEONG_ROMAJA: &[Rule] = &[
    (5, 8, 4),    // e + o = ㅓ
    (5, 13, 18),  // e + u = ㅡ
    (0, 5, 1),    // a + e = ㅐ
    (Y, 0, 2),    // y + a = ㅑ
    (2, 5, 3),    // ya + e = ㅒ
    (Y, 5, 7),    // y + e = ㅖ
    (7, 8, 6),    // ye + o = ㅕ
    (Y, 8, 12),   // y + o = ㅛ
    (Y, 13, 17),  // y + u = ㅠ
    (13, 0, 9),   // w + a = ㅘ
    (9, 5, 10),   // wa + e = ㅙ
    (8, 5, 11),   // o + e = ㅚ
    (13, 5, 15),  // w + e = ㅞ
    (15, 8, 14),  // we + o = ㅝ
    (13, 8, 14),  // w + o = ㅝ
    (13, 20, 16), // w + i = ㅟ
    (18, 20, 19), // eu + i = ㅢ
];

/// 로마자 종성: 겹받침 + ng
const JONGSEONG_ROMAJA: &[Rule] = &[
    (1, 19, 3),
    (4, 1, 21), // n + g = ㅇ
    (4, 22, 5),
    (4, 27, 6),
    (8, 1, 9),
    (8, 16, 10),
    (8, 17, 11),
    (8, 19, 12),
    (8, 25, 13),
    (8, 26, 14),
    (8, 27, 15),
    (17, 19, 18),
];

/// 두벌식 기본 규칙 (초성 결합 없음)
pub static DUBEOLSIK: Combination = Combination {
    choseong: &[],
    jungseong: JUNGSEONG_STANDARD,
    jongseong: JONGSEONG_CLUSTERS,
};

/// 두벌식 자음 연타 규칙 (옵션으로 켜고 끔)
pub static DOUBLE_STROKE: Combination = Combination {
    choseong: CHOSEONG_DOUBLE,
    jungseong: &[],
    jongseong: JONGSEONG_DOUBLE,
};

/// 세벌식 규칙
pub static SEBEOLSIK: Combination = Combination {
    choseong: CHOSEONG_DOUBLE,
    jungseong: JUNGSEONG_STANDARD,
    jongseong: JONGSEONG_SEBEOLSIK,
};

/// 로마자 규칙
pub static ROMAJA: Combination = Combination {
    choseong: CHOSEONG_ROMAJA,
    jungseong: JUNGSEONG_ROMAJA,
    jongseong: JONGSEONG_ROMAJA,
};
