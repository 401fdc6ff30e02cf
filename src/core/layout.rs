//! 자판 배열: 키 코드 -> 자모 매핑
//!
//! 자판은 실행 중에 교체할 수 있으며, 전역 등록부에서 ID로 찾는다.
//! ID는 호스트가 쓰는 자판 ID("2", "32", "39", "ro")를 따른다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::combination::{Combination, DUBEOLSIK, ROMAJA, SEBEOLSIK};
use crate::core::jamo::{Jamo, JUNGSEONG_Y_GLIDE};
use crate::core::jamo::Jamo::{Choseong as C, Jongseong as T, Jungseong as V};

/// 기본 자판 ID (두벌식)
pub const DEFAULT_LAYOUT_ID: &str = "2";

/// 자판이 자모를 내보내는 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// 두벌식 계열: 자음 키는 초성만 내고, 받침 여부는 오토마타가 정함
    Jamo,
    /// 세벌식 계열: 초성/중성/종성 키가 따로 있음
    Jaso,
    /// 로마자 음역: 라틴 문자를 소리대로 자모로 옮김
    Romaja,
}

/// 자판 배열 정의
#[derive(Debug, PartialEq)]
pub struct KeyboardLayout {
    id: &'static str,
    name: &'static str,
    kind: LayoutKind,
    keys: HashMap<char, Jamo>,
    combination: &'static Combination,
}

lazy_static! {
    /// 등록된 자판 목록 (첫 항목이 기본 자판)
    static ref LAYOUTS: Vec<KeyboardLayout> = vec![
        dubeolsik(),
        sebeolsik_dubeol(),
        sebeolsik_390(),
        romaja(),
    ];
}

impl KeyboardLayout {
    /// ID로 자판 찾기
    pub fn get(id: &str) -> Option<&'static KeyboardLayout> {
        LAYOUTS.iter().find(|layout| layout.id == id)
    }

    /// 기본 자판 (두벌식)
    pub fn default_layout() -> &'static KeyboardLayout {
        &LAYOUTS[0]
    }

    /// ID로 자판을 찾고, 없으면 기본 자판으로 대체
    pub fn get_or_default(id: &str) -> &'static KeyboardLayout {
        Self::get(id).unwrap_or_else(|| {
            log::warn!("알 수 없는 자판 ID '{}', 두벌식으로 대체", id);
            Self::default_layout()
        })
    }

    /// 등록된 자판 ID 목록
    pub fn ids() -> impl Iterator<Item = &'static str> {
        LAYOUTS.iter().map(|layout| layout.id)
    }

    /// 등록부 초기화 (여러 번 호출해도 무방)
    pub fn init_registry() {
        lazy_static::initialize(&LAYOUTS);
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn combination(&self) -> &'static Combination {
        self.combination
    }

    /// 키 하나를 자모로 변환 (매핑 없으면 None)
    pub fn map_key(&self, key: char) -> Option<Jamo> {
        self.keys.get(&key).copied()
    }

    /// 라틴 문자를 음역하는 자판인지
    pub fn is_transliteration(&self) -> bool {
        self.kind == LayoutKind::Romaja
    }
}

fn build(
    id: &'static str,
    name: &'static str,
    kind: LayoutKind,
    combination: &'static Combination,
    table: &[(char, Jamo)],
) -> KeyboardLayout {
    KeyboardLayout {
        id,
        name,
        kind,
        keys: table.iter().copied().collect(),
        combination,
    }
}

/// 두벌식 자모 배열 (자음은 초성으로 매핑)
const DUBEOLSIK_CONSONANTS: [(char, u32); 19] = [
    ('r', 0),  // ㄱ
    ('R', 1),  // ㄲ
    ('s', 2),  // ㄴ
    ('e', 3),  // ㄷ
    ('E', 4),  // ㄸ
    ('f', 5),  // ㄹ
    ('a', 6),  // ㅁ
    ('q', 7),  // ㅂ
    ('Q', 8),  // ㅃ
    ('t', 9),  // ㅅ
    ('T', 10), // ㅆ
    ('d', 11), // ㅇ
    ('w', 12), // ㅈ
    ('W', 13), // ㅉ
    ('c', 14), // ㅊ
    ('z', 15), // ㅋ
    ('x', 16), // ㅌ
    ('v', 17), // ㅍ
    ('g', 18), // ㅎ
];

const DUBEOLSIK_VOWELS: [(char, u32); 14] = [
    ('k', 0),  // ㅏ
    ('o', 1),  // ㅐ
    ('i', 2),  // ㅑ
    ('O', 3),  // ㅒ
    ('j', 4),  // ㅓ
    ('p', 5),  // ㅔ
    ('u', 6),  // ㅕ
    ('P', 7),  // ㅖ
    ('h', 8),  // ㅗ
    ('y', 12), // ㅛ
    ('n', 13), // ㅜ
    ('b', 17), // ㅠ
    ('m', 18), // ㅡ
    ('l', 20), // ㅣ
];

fn dubeolsik() -> KeyboardLayout {
    let table: Vec<(char, Jamo)> = DUBEOLSIK_CONSONANTS
        .iter()
        .map(|&(key, cho)| (key, C(cho)))
        .chain(DUBEOLSIK_VOWELS.iter().map(|&(key, jung)| (key, V(jung))))
        .collect();
    build("2", "두벌식", LayoutKind::Jamo, &DUBEOLSIK, &table)
}

/// 세벌식 두벌 배열: 두벌식 자리에 Shift + 자음 = 받침
fn sebeolsik_dubeol() -> KeyboardLayout {
    let mut table: Vec<(char, Jamo)> = DUBEOLSIK_CONSONANTS
        .iter()
        .filter(|(key, _)| key.is_ascii_lowercase())
        .map(|&(key, cho)| (key, C(cho)))
        .collect();
    table.extend_from_slice(&[
        ('R', T(1)),  // ㄱ
        ('S', T(4)),  // ㄴ
        ('E', T(7)),  // ㄷ
        ('F', T(8)),  // ㄹ
        ('A', T(16)), // ㅁ
        ('Q', T(17)), // ㅂ
        ('T', T(19)), // ㅅ
        ('D', T(21)), // ㅇ
        ('W', T(22)), // ㅈ
        ('C', T(23)), // ㅊ
        ('Z', T(24)), // ㅋ
        ('X', T(25)), // ㅌ
        ('V', T(26)), // ㅍ
        ('G', T(27)), // ㅎ
    ]);
    table.extend(DUBEOLSIK_VOWELS.iter().map(|&(key, jung)| (key, V(jung))));
    build("32", "세벌식 두벌 배열", LayoutKind::Jaso, &SEBEOLSIK, &table)
}

fn sebeolsik_390() -> KeyboardLayout {
    #[rustfmt::skip]
    let table = [
        // 숫자열
        ('1', T(27)), ('2', T(20)), ('3', T(17)),
        ('4', V(12)), ('5', V(17)), ('6', V(2)), ('7', V(7)), ('8', V(19)), ('9', V(13)),
        ('0', C(15)), ('!', T(2)),
        // 윗줄
        ('q', T(19)), ('w', T(8)), ('e', V(6)), ('r', V(1)), ('t', V(4)),
        ('y', C(5)), ('u', C(3)), ('i', C(6)), ('o', C(14)), ('p', C(17)),
        ('Q', T(26)), ('W', T(25)), ('R', V(3)),
        // 가운뎃줄
        ('a', T(21)), ('s', T(4)), ('d', V(20)), ('f', V(0)), ('g', V(18)),
        ('h', C(2)), ('j', C(11)), ('k', C(0)), ('l', C(12)), (';', C(7)), ('\'', C(16)),
        ('A', T(7)), ('S', T(6)),
        // 아랫줄
        ('z', T(16)), ('x', T(1)), ('c', V(5)), ('v', V(8)), ('b', V(13)),
        ('n', C(9)), ('m', C(18)), ('/', V(8)),
        ('Z', T(23)), ('X', T(18)), ('C', T(24)), ('V', T(3)),
    ];
    build("39", "세벌식 390", LayoutKind::Jaso, &SEBEOLSIK, &table)
}

fn romaja() -> KeyboardLayout {
    let lower = [
        ('g', C(0)),
        ('k', C(15)),
        ('q', C(15)),
        ('n', C(2)),
        ('d', C(3)),
        ('t', C(16)),
        ('r', C(5)),
        ('l', C(5)),
        ('m', C(6)),
        ('b', C(7)),
        ('v', C(7)),
        ('p', C(17)),
        ('f', C(17)),
        ('s', C(9)),
        ('j', C(12)),
        ('z', C(12)),
        ('c', C(14)),
        ('h', C(18)),
        ('a', V(0)),
        ('e', V(5)),
        ('i', V(20)),
        ('o', V(8)),
        ('u', V(13)),
        ('w', V(13)),
        ('y', V(JUNGSEONG_Y_GLIDE)),
    ];
    // 대문자도 같은 소리
    let table: Vec<(char, Jamo)> = lower
        .iter()
        .flat_map(|&(key, jamo)| [(key, jamo), (key.to_ascii_uppercase(), jamo)])
        .collect();
    build("ro", "로마자", LayoutKind::Romaja, &ROMAJA, &table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry() {
        let ids: Vec<&str> = KeyboardLayout::ids().collect();
        assert_eq!(ids, vec!["2", "32", "39", "ro"]);
        assert_eq!(KeyboardLayout::default_layout().id(), DEFAULT_LAYOUT_ID);
        assert!(KeyboardLayout::get("3f").is_none());
        assert_eq!(KeyboardLayout::get_or_default("3f").id(), "2");
    }

    #[test]
    fn test_dubeolsik_mapping() {
        let layout = KeyboardLayout::default_layout();
        assert_eq!(layout.map_key('r'), Some(C(0))); // ㄱ
        assert_eq!(layout.map_key('R'), Some(C(1))); // ㄲ
        assert_eq!(layout.map_key('g'), Some(C(18))); // ㅎ
        assert_eq!(layout.map_key('k'), Some(V(0))); // ㅏ
        assert_eq!(layout.map_key('O'), Some(V(3))); // ㅒ
        assert_eq!(layout.kind(), LayoutKind::Jamo);
        assert!(!layout.is_transliteration());
    }

    #[test]
    fn test_unmapped_characters() {
        let layout = KeyboardLayout::default_layout();
        assert!(layout.map_key('1').is_none());
        assert!(layout.map_key('!').is_none());
        assert!(layout.map_key(' ').is_none());
        assert!(layout.map_key('X').is_none()); // 대문자 X는 매핑 없음
    }

    #[test]
    fn test_sebeolsik_dubeol_mapping() {
        let layout = KeyboardLayout::get("32").unwrap();
        assert_eq!(layout.kind(), LayoutKind::Jaso);
        assert_eq!(layout.map_key('r'), Some(C(0)));
        assert_eq!(layout.map_key('R'), Some(T(1)));
        assert_eq!(layout.map_key('k'), Some(V(0)));
        assert_eq!(layout.map_key('P'), Some(V(7)));
    }

    #[test]
    fn test_sebeolsik_390_mapping() {
        let layout = KeyboardLayout::get("39").unwrap();
        assert_eq!(layout.map_key('k'), Some(C(0))); // ㄱ
        assert_eq!(layout.map_key('f'), Some(V(0))); // ㅏ
        assert_eq!(layout.map_key('s'), Some(T(4))); // ㄴ
        assert!(layout.map_key('-').is_none());
    }

    #[test]
    fn test_romaja_is_transliteration() {
        let layout = KeyboardLayout::get("ro").unwrap();
        assert!(layout.is_transliteration());
        assert_eq!(layout.map_key('g'), Some(C(0)));
        assert_eq!(layout.map_key('G'), Some(C(0)));
        assert_eq!(layout.map_key('a'), Some(V(0)));
        assert_eq!(layout.map_key('i'), Some(V(20)));
        assert_eq!(layout.map_key('y'), Some(V(JUNGSEONG_Y_GLIDE)));
        assert!(layout.map_key('x').is_none());
    }

    #[test]
    fn test_all_tables_are_valid() {
        for id in KeyboardLayout::ids() {
            let layout = KeyboardLayout::get(id).unwrap();
            for jamo in layout.keys.values() {
                assert!(jamo.is_valid(), "{}: {:?}", id, jamo);
            }
        }
    }
}
