//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 개수 (가 ~ 힣)
const HANGUL_SYLLABLE_COUNT: u32 = CHOSEONG_COUNT * JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 ㅇ 인덱스 (로마자 자판의 모음 단독 음절에 채움)
pub const CHOSEONG_IEUNG: u32 = 11;

// 초성 인덱스 순서 (19개):
// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
//
// 중성 인덱스 순서 (21개):
// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
//
// 종성 인덱스 순서 (28개, 0 = 없음):
// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)

/// 초성 인덱스 -> 호환용 자모
#[rustfmt::skip]
const CHOSEONG_JAMO: [u32; 19] = [
    0x3131, // ㄱ
    0x3132, // ㄲ
    0x3134, // ㄴ
    0x3137, // ㄷ
    0x3138, // ㄸ
    0x3139, // ㄹ
    0x3141, // ㅁ
    0x3142, // ㅂ
    0x3143, // ㅃ
    0x3145, // ㅅ
    0x3146, // ㅆ
    0x3147, // ㅇ
    0x3148, // ㅈ
    0x3149, // ㅉ
    0x314A, // ㅊ
    0x314B, // ㅋ
    0x314C, // ㅌ
    0x314D, // ㅍ
    0x314E, // ㅎ
];

/// 종성 인덱스 -> 호환용 자모 (0번은 종성 없음)
#[rustfmt::skip]
const JONGSEONG_JAMO: [u32; 28] = [
    0,
    0x3131, // ㄱ
    0x3132, // ㄲ
    0x3133, // ㄳ
    0x3134, // ㄴ
    0x3135, // ㄵ
    0x3136, // ㄶ
    0x3137, // ㄷ
    0x3139, // ㄹ
    0x313A, // ㄺ
    0x313B, // ㄻ
    0x313C, // ㄼ
    0x313D, // ㄽ
    0x313E, // ㄾ
    0x313F, // ㄿ
    0x3140, // ㅀ
    0x3141, // ㅁ
    0x3142, // ㅂ
    0x3144, // ㅄ
    0x3145, // ㅅ
    0x3146, // ㅆ
    0x3147, // ㅇ
    0x3148, // ㅈ
    0x314A, // ㅊ
    0x314B, // ㅋ
    0x314C, // ㅌ
    0x314D, // ㅍ
    0x314E, // ㅎ
];

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..HANGUL_SYLLABLE_BASE + HANGUL_SYLLABLE_COUNT).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 단일 종성을 초성 인덱스로 변환
/// 종성이 다음 글자의 초성으로 이동할 때 사용
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    match jong {
        1 => Some(0),   // ㄱ
        2 => Some(1),   // ㄲ
        4 => Some(2),   // ㄴ
        7 => Some(3),   // ㄷ
        8 => Some(5),   // ㄹ
        16 => Some(6),  // ㅁ
        17 => Some(7),  // ㅂ
        19 => Some(9),  // ㅅ
        20 => Some(10), // ㅆ
        21 => Some(11), // ㅇ
        22 => Some(12), // ㅈ
        23 => Some(14), // ㅊ
        24 => Some(15), // ㅋ
        25 => Some(16), // ㅌ
        26 => Some(17), // ㅍ
        27 => Some(18), // ㅎ
        _ => None,
    }
}

/// 초성을 종성 인덱스로 변환
/// ㄸ, ㅃ, ㅉ은 받침이 될 수 없으므로 None
pub fn choseong_to_jongseong(cho: u32) -> Option<u32> {
    match cho {
        0 => Some(1),   // ㄱ
        1 => Some(2),   // ㄲ
        2 => Some(4),   // ㄴ
        3 => Some(7),   // ㄷ
        5 => Some(8),   // ㄹ
        6 => Some(16),  // ㅁ
        7 => Some(17),  // ㅂ
        9 => Some(19),  // ㅅ
        10 => Some(20), // ㅆ
        11 => Some(21), // ㅇ
        12 => Some(22), // ㅈ
        14 => Some(23), // ㅊ
        15 => Some(24), // ㅋ
        16 => Some(25), // ㅌ
        17 => Some(26), // ㅍ
        18 => Some(27), // ㅎ
        _ => None,
    }
}

/// 초성만 있을 때 해당 자모 문자 반환 (호환용 자모)
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO
        .get(cho as usize)
        .and_then(|&code| char::from_u32(code))
}

/// 중성만 있을 때 해당 모음 문자 반환 (호환용 자모)
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    // 호환용 모음 자모는 ㅏ(0x314F) ~ ㅣ(0x3163) 연속 배치
    if jung < JUNGSEONG_COUNT {
        char::from_u32(0x314F + jung)
    } else {
        None
    }
}

/// 종성만 있을 때 해당 자모 문자 반환 (호환용 자모)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    match JONGSEONG_JAMO.get(jong as usize) {
        Some(&code) if code != 0 => char::from_u32(code),
        _ => None,
    }
}
