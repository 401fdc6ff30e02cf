//! 키 입력 문자열 -> 한글 문자열 일괄 변환기

use crate::core::hangul_fsm::InputContext;
use crate::core::layout::KeyboardLayout;
use crate::core::options::OptionSet;

/// 두벌식 키 입력 문자열을 한글 문자열로 변환
/// 변환할 수 없는 문자(숫자, 특수문자, 매핑 없는 영문)는 그대로 유지
pub fn convert(input: &str) -> String {
    convert_with(KeyboardLayout::default_layout(), OptionSet::default(), input)
}

/// 지정한 자판과 옵션으로 변환
///
/// 매핑 없는 문자를 만나면 조합 중인 글자를 먼저 확정한 뒤 그 문자를 덧붙인다.
pub fn convert_with(layout: &'static KeyboardLayout, options: OptionSet, input: &str) -> String {
    let mut ctx = InputContext::with_layout(layout);
    ctx.set_options(options);
    let mut output = String::with_capacity(input.len());

    for c in input.chars() {
        if !ctx.process(c) {
            output.push_str(&ctx.flush());
            output.push(c);
        }
    }

    output.push_str(&ctx.flush());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(convert("rkskek"), "가나다");
        assert_eq!(convert("dkssudgktpdy"), "안녕하세요");
    }

    #[test]
    fn test_jongseong() {
        assert_eq!(convert("gksrmf"), "한글");
        assert_eq!(convert("dkswl"), "안지");
    }

    #[test]
    fn test_complex_vowel() {
        assert_eq!(convert("dhksfy"), "완료");
    }

    #[test]
    fn test_complex_jongseong() {
        assert_eq!(convert("dlfr"), "읽");
    }

    #[test]
    fn test_double_consonant() {
        assert_eq!(convert("Tks"), "싼");
        assert_eq!(convert("Rk"), "까");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(convert("123rksk"), "123가나");
        assert_eq!(convert("rk!sk"), "가!나");
    }

    #[test]
    fn test_english_passthrough() {
        // 매핑되지 않는 영문자는 그대로
        assert_eq!(convert("X"), "X");
        assert_eq!(convert("rkXsk"), "가X나");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_jongseong_split() {
        // 종성이 다음 초성으로 분리
        assert_eq!(convert("rkrkrl"), "가가기");
    }

    #[test]
    fn test_other_layouts() {
        let ro = KeyboardLayout::get("ro").unwrap();
        assert_eq!(convert_with(ro, OptionSet::default(), "annyeong haseyo"), "안녕 하세요");

        let sebeol = KeyboardLayout::get("32").unwrap();
        assert_eq!(convert_with(sebeol, OptionSet::default(), "gkS rmF"), "한 글");
    }

    #[test]
    fn test_options_are_applied() {
        let options = OptionSet {
            combi_on_double_stroke: false,
            ..OptionSet::default()
        };
        assert_eq!(convert_with(KeyboardLayout::default_layout(), options, "rrk"), "ㄱ가");
    }
}
