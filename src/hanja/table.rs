//! 한자 사전 테이블 로드 및 검색
//!
//! 한 줄에 항목 하나인 텍스트 파일을 읽어 음(reading) 기준 색인을 만든다.
//! 로드한 뒤에는 읽기 전용이므로 여러 스레드에서 함께 검색할 수 있다.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// 한자 사전 로드 에러
#[derive(Debug)]
pub enum HanjaError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// 쓸 수 있는 항목이 하나도 없음
    NoEntries(PathBuf),
}

impl std::fmt::Display for HanjaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HanjaError::Io(e) => write!(f, "파일 읽기 오류: {}", e),
            HanjaError::NoEntries(path) => write!(f, "사전 항목 없음: {}", path.display()),
        }
    }
}

impl std::error::Error for HanjaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HanjaError::Io(e) => Some(e),
            HanjaError::NoEntries(_) => None,
        }
    }
}

impl From<std::io::Error> for HanjaError {
    fn from(e: std::io::Error) -> Self {
        HanjaError::Io(e)
    }
}

/// 사전 항목: 한글 음, 한자 표기, 뜻풀이(선택)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HanjaEntry {
    reading: String,
    rendering: String,
    gloss: Option<String>,
}

impl HanjaEntry {
    pub fn new(reading: &str, rendering: &str, gloss: Option<&str>) -> Self {
        Self {
            reading: reading.to_string(),
            rendering: rendering.to_string(),
            gloss: gloss.map(str::to_string),
        }
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn rendering(&self) -> &str {
        &self.rendering
    }

    pub fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }

    /// 후보 목록 표시용: `韓國 (Korea)`, 뜻풀이가 없으면 한자만
    pub fn display_string(&self) -> String {
        match &self.gloss {
            Some(gloss) => format!("{} ({})", self.rendering, gloss),
            None => self.rendering.clone(),
        }
    }
}

/// 호스트로 넘기는 형식: `韓國:Korea` (뜻풀이가 없으면 `韓國:`)
impl std::fmt::Display for HanjaEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.rendering, self.gloss.as_deref().unwrap_or(""))
    }
}

/// 사전 파일 한 줄 파싱
///
/// 형식은 `음:한자:뜻풀이`이며 뜻풀이 안의 `:`는 그대로 둔다.
/// 주석(`#`)과 빈 줄, 음이나 한자가 빠진 줄은 None.
pub fn parse_line(line: &str) -> Option<HanjaEntry> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.starts_with('#') {
        return None;
    }
    let mut fields = line.splitn(3, ':');
    let reading = fields.next()?.trim();
    let rendering = fields.next()?.trim();
    if reading.is_empty() || rendering.is_empty() {
        return None;
    }
    let gloss = fields.next().map(str::trim).filter(|gloss| !gloss.is_empty());
    Some(HanjaEntry::new(reading, rendering, gloss))
}

/// 한자 사전 테이블
#[derive(Debug, Clone, Default)]
pub struct HanjaTable {
    /// 파일 순서의 항목
    entries: Vec<HanjaEntry>,
    /// 음 -> 항목 번호 (파일 순서)
    exact: HashMap<String, Vec<usize>>,
    /// (음, 항목 번호), 음 기준 정렬
    prefix: Vec<(String, usize)>,
    /// (뒤집은 음, 항목 번호), 뒤집은 음 기준 정렬
    suffix: Vec<(String, usize)>,
}

impl HanjaTable {
    /// 파일에서 테이블 로드
    ///
    /// 파일을 읽을 수 없거나 쓸 수 있는 항목이 없으면 실패.
    /// 잘못된 줄은 건너뛴다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HanjaError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        if table.is_empty() {
            return Err(HanjaError::NoEntries(path.to_path_buf()));
        }
        log::debug!("한자 사전 로드: {} ({}개 항목)", path.display(), table.len());
        Ok(table)
    }

    /// 임의의 입력에서 테이블 생성
    ///
    /// UTF-8이 아닌 줄은 건너뛴다.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, HanjaError> {
        let mut reader = BufReader::new(reader);
        let mut entries = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            match std::str::from_utf8(&buf) {
                Ok(line) => entries.extend(parse_line(line)),
                Err(_) => log::debug!("UTF-8이 아닌 줄 건너뜀: {}", line_no),
            }
        }

        Ok(Self::from_entries(entries))
    }

    /// 항목 목록으로 테이블 생성
    pub fn from_entries(entries: Vec<HanjaEntry>) -> Self {
        let mut exact: HashMap<String, Vec<usize>> = HashMap::new();
        let mut prefix = Vec::with_capacity(entries.len());
        let mut suffix = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            exact.entry(entry.reading.clone()).or_default().push(i);
            prefix.push((entry.reading.clone(), i));
            suffix.push((entry.reading.chars().rev().collect::<String>(), i));
        }
        // 같은 음 안에서는 파일 순서 유지
        prefix.sort();
        suffix.sort();

        Self {
            entries,
            exact,
            prefix,
            suffix,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HanjaEntry] {
        &self.entries
    }

    /// 음이 정확히 같은 항목
    pub fn match_exact(&self, key: &str) -> Vec<&HanjaEntry> {
        self.exact
            .get(key)
            .map(|indices| indices.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// 음이 `key`로 시작하는 항목 (파일 순서)
    pub fn match_prefix(&self, key: &str) -> Vec<&HanjaEntry> {
        if key.is_empty() {
            return Vec::new();
        }
        self.collect_sorted(&self.prefix, key)
    }

    /// 음이 `key`로 끝나는 항목 (파일 순서)
    pub fn match_suffix(&self, key: &str) -> Vec<&HanjaEntry> {
        if key.is_empty() {
            return Vec::new();
        }
        let reversed: String = key.chars().rev().collect();
        self.collect_sorted(&self.suffix, &reversed)
    }

    /// 정렬된 색인에서 `key`로 시작하는 구간을 찾아 파일 순서로 돌려줌
    fn collect_sorted(&self, index: &[(String, usize)], key: &str) -> Vec<&HanjaEntry> {
        let start = index.partition_point(|(reading, _)| reading.as_str() < key);
        let mut found: Vec<usize> = index[start..]
            .iter()
            .take_while(|(reading, _)| reading.starts_with(key))
            .map(|&(_, i)| i)
            .collect();
        found.sort_unstable();
        found.into_iter().map(|i| &self.entries[i]).collect()
    }

    /// 정확히 일치하는 항목을 한자 -> 표시 문자열 맵으로
    ///
    /// 같은 한자가 여러 번 나오면 나중 항목이 앞 항목을 덮어쓴다.
    pub fn match_exact_map(&self, key: &str) -> HanjaMap {
        let mut map = HanjaMap::default();
        for entry in self.match_exact(key) {
            map.insert(entry.rendering.clone(), entry.display_string());
        }
        map
    }
}

/// 삽입 순서를 지키는 한자 -> 표시 문자열 맵
///
/// 같은 키를 다시 넣으면 값만 바뀌고 위치는 처음 자리 그대로다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HanjaMap {
    items: Vec<(String, String)>,
    /// 한자 -> items 위치
    index: HashMap<String, usize>,
}

impl HanjaMap {
    pub fn insert(&mut self, rendering: String, display: String) {
        match self.index.get(&rendering) {
            Some(&pos) => self.items[pos].1 = display,
            None => {
                self.index.insert(rendering.clone(), self.items.len());
                self.items.push((rendering, display));
            }
        }
    }

    pub fn get(&self, rendering: &str) -> Option<&str> {
        self.index
            .get(rendering)
            .map(|&pos| self.items[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(k, _)| k.as_str())
    }
}
