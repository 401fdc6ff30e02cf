//! 조합 옵션
//!
//! 옵션 번호는 호스트 쪽에서 쓰는 번호를 그대로 따른다.
//! 알 수 없는 번호는 읽으면 false, 쓰면 무시한다.

use serde::{Deserialize, Serialize};

/// 조합 동작을 바꾸는 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputOption {
    /// 세벌식 모아치기: 모음/종성을 초성보다 먼저 입력해도 한 글자로 조합
    AutoReorder,
    /// 두벌식 자음 연타로 된소리 조합 (ㄱㄱ -> ㄲ)
    CombiOnDoubleStroke,
    /// 두벌식에서 초성에 없는 겹자음 조합 허용 (ㄱㅅ -> ㄳ)
    NonChoseongCombi,
}

impl InputOption {
    pub const ALL: [InputOption; 3] = [
        InputOption::AutoReorder,
        InputOption::CombiOnDoubleStroke,
        InputOption::NonChoseongCombi,
    ];

    /// 옵션 번호 -> 옵션
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(InputOption::AutoReorder),
            1 => Some(InputOption::CombiOnDoubleStroke),
            2 => Some(InputOption::NonChoseongCombi),
            _ => None,
        }
    }

    /// 옵션 번호
    pub fn id(self) -> i32 {
        match self {
            InputOption::AutoReorder => 0,
            InputOption::CombiOnDoubleStroke => 1,
            InputOption::NonChoseongCombi => 2,
        }
    }
}

/// 옵션 값 묶음
///
/// 기본값은 모두 켜짐.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct OptionSet {
    pub auto_reorder: bool,
    pub combi_on_double_stroke: bool,
    pub non_choseong_combi: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            auto_reorder: true,
            combi_on_double_stroke: true,
            non_choseong_combi: true,
        }
    }
}

impl OptionSet {
    pub fn get(&self, option: InputOption) -> bool {
        match option {
            InputOption::AutoReorder => self.auto_reorder,
            InputOption::CombiOnDoubleStroke => self.combi_on_double_stroke,
            InputOption::NonChoseongCombi => self.non_choseong_combi,
        }
    }

    pub fn set(&mut self, option: InputOption, value: bool) {
        match option {
            InputOption::AutoReorder => self.auto_reorder = value,
            InputOption::CombiOnDoubleStroke => self.combi_on_double_stroke = value,
            InputOption::NonChoseongCombi => self.non_choseong_combi = value,
        }
    }

    /// 번호로 옵션 읽기 (알 수 없는 번호는 false)
    pub fn get_by_id(&self, id: i32) -> bool {
        InputOption::from_id(id).is_some_and(|option| self.get(option))
    }

    /// 번호로 옵션 쓰기 (알 수 없는 번호는 무시)
    pub fn set_by_id(&mut self, id: i32, value: bool) {
        match InputOption::from_id(id) {
            Some(option) => self.set(option, value),
            None => log::debug!("알 수 없는 옵션 번호 무시: {}", id),
        }
    }
}
