//! 현재 사용 중인 한자 사전
//!
//! 테이블은 `Arc`로 공유하므로, 교체하거나 내려도 이미 테이블을 받아 간
//! 쪽의 검색은 영향받지 않는다.

use std::path::Path;
use std::sync::Arc;

use super::table::{HanjaEntry, HanjaError, HanjaMap, HanjaTable};

/// 한자 사전 (테이블이 없으면 모든 검색 결과가 비어 있음)
#[derive(Debug, Clone, Default)]
pub struct HanjaDictionary {
    table: Option<Arc<HanjaTable>>,
}

impl HanjaDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 파일에서 테이블을 읽어 교체
    ///
    /// 실패하면 기존 테이블을 그대로 둔다.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), HanjaError> {
        let table = HanjaTable::load(path)?;
        self.table = Some(Arc::new(table));
        Ok(())
    }

    /// 이미 만든 테이블로 교체
    pub fn set_table(&mut self, table: Arc<HanjaTable>) {
        self.table = Some(table);
    }

    /// 테이블 해제 (없어도 무방)
    pub fn unload(&mut self) {
        self.table = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Option<Arc<HanjaTable>> {
        self.table.clone()
    }

    pub fn match_exact(&self, key: &str) -> Vec<HanjaEntry> {
        self.with_table(|table| table.match_exact(key))
    }

    pub fn match_prefix(&self, key: &str) -> Vec<HanjaEntry> {
        self.with_table(|table| table.match_prefix(key))
    }

    pub fn match_suffix(&self, key: &str) -> Vec<HanjaEntry> {
        self.with_table(|table| table.match_suffix(key))
    }

    pub fn match_exact_map(&self, key: &str) -> HanjaMap {
        self.table
            .as_ref()
            .map(|table| table.match_exact_map(key))
            .unwrap_or_default()
    }

    fn with_table<'a, F>(&'a self, f: F) -> Vec<HanjaEntry>
    where
        F: FnOnce(&'a HanjaTable) -> Vec<&'a HanjaEntry>,
    {
        match &self.table {
            Some(table) => f(table.as_ref()).into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }
}
