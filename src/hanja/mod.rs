//! 한글 -> 한자 사전 검색
//!
//! 음(한글) 기준으로 정확히 일치, 앞부분 일치, 뒷부분 일치 검색을 제공한다.
//! 결과는 항상 사전 파일에 적힌 순서를 따른다.
//!
//! # 사전 파일 형식
//!
//! ```text
//! # 주석
//! 한국:韓國:Korea
//! 한국어:韓國語:Korean language
//! ```
//!
//! # 사용 예시
//!
//! ```
//! use hangul_ime::hanja::HanjaTable;
//!
//! let table = HanjaTable::from_reader("한국:韓國:Korea\n".as_bytes()).unwrap();
//! assert_eq!(table.match_exact("한국")[0].to_string(), "韓國:Korea");
//! ```

mod dictionary;
mod table;

// 공개 인터페이스
pub use dictionary::HanjaDictionary;
pub use table::{parse_line, HanjaEntry, HanjaError, HanjaMap, HanjaTable};
