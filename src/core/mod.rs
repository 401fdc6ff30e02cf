//! 한글 자모 조합 엔진
//!
//! 키 입력을 자판으로 자모에 매핑하고, 오토마타가 음절 블록을 조합한다.
//!
//! # 사용 예시
//!
//! ```
//! use hangul_ime::core::InputContext;
//!
//! let mut ctx = InputContext::new("2");
//! for key in "gks".chars() {
//!     ctx.process(key);
//! }
//! assert_eq!(ctx.preedit_string(), "한");
//!
//! // 받침이 다음 글자의 초성으로 넘어감
//! ctx.process('k');
//! assert_eq!(ctx.commit_string(), "하");
//! assert_eq!(ctx.preedit_string(), "나");
//! ```

pub mod block;
pub mod combination;
pub mod converter;
pub mod hangul_fsm;
pub mod jamo;
pub mod layout;
pub mod options;
pub mod unicode;

// 공개 인터페이스
pub use block::SyllableBlock;
pub use hangul_fsm::{InputContext, State};
pub use jamo::Jamo;
pub use layout::{KeyboardLayout, LayoutKind, DEFAULT_LAYOUT_ID};
pub use options::{InputOption, OptionSet};
