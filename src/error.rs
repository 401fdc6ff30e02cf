//! 엔진 에러
//!
//! 내부 API는 에러 종류를 구분해 돌려주고, 외부 호출 규약(`HangulEngine`)은
//! 이를 빈 문자열/false 같은 기본값으로 바꿔 돌려준다.

use crate::hanja::HanjaError;

/// 입력 엔진 에러
#[derive(Debug)]
pub enum ImeError {
    /// 입력 컨텍스트가 생성되지 않음
    NoSession,
    /// 자판에 매핑되지 않은 키
    UnmappedKey(i32),
    /// 한자 사전 에러
    Hanja(HanjaError),
}

impl std::fmt::Display for ImeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImeError::NoSession => write!(f, "입력 컨텍스트 없음"),
            ImeError::UnmappedKey(key) => write!(f, "매핑되지 않은 키: {}", key),
            ImeError::Hanja(e) => write!(f, "한자 사전 오류: {}", e),
        }
    }
}

impl std::error::Error for ImeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImeError::Hanja(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HanjaError> for ImeError {
    fn from(e: HanjaError) -> Self {
        ImeError::Hanja(e)
    }
}
