//! 통합 테스트 - 한자 사전 로드와 검색

use hangul_ime::HangulEngine;
use std::io::Write;

fn write_table(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const KOREA: &str = "\
# 음:한자:뜻풀이
한국:韓國:Korea
한국어:韓國語:Korean language
";

#[test]
fn test_exact_prefix_suffix() {
    let file = write_table(KOREA);
    let mut engine = HangulEngine::new();
    assert!(engine.load_hanja_table(file.path()));

    assert_eq!(engine.match_exact_hanja("한국"), vec!["韓國:Korea"]);
    assert_eq!(
        engine.match_prefix_hanja("한"),
        vec!["韓國:Korea", "韓國語:Korean language"]
    );
    assert_eq!(engine.match_suffix_hanja("어"), vec!["韓國語:Korean language"]);
    assert!(engine.match_exact_hanja("일본").is_empty());
}

#[test]
fn test_exact_map_last_writer_wins() {
    let file = write_table("수:水:물\n수:手:손\n수:水:강물\n수:數\n");
    let mut engine = HangulEngine::new();
    assert!(engine.load_hanja_table(file.path()));

    let map = engine.match_exact_hanja_map("수");
    let items: Vec<(&str, &str)> = map.iter().collect();
    assert_eq!(
        items,
        vec![("水", "水 (강물)"), ("手", "手 (손)"), ("數", "數")]
    );
}

#[test]
fn test_failed_load_keeps_active_table() {
    let file = write_table(KOREA);
    let mut engine = HangulEngine::new();
    assert!(engine.load_hanja_table(file.path()));

    assert!(!engine.load_hanja_table("/nonexistent/hanja.txt"));
    assert_eq!(engine.match_exact_hanja("한국"), vec!["韓國:Korea"]);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let file = write_table("잘못된 줄\n:빈음\n한국:韓國:Korea\n\n");
    let mut engine = HangulEngine::new();
    assert!(engine.load_hanja_table(file.path()));
    assert_eq!(engine.hanja().table().unwrap().len(), 1);
}

#[test]
fn test_delete_table() {
    let file = write_table(KOREA);
    let mut engine = HangulEngine::new();
    engine.delete_hanja_table();
    assert!(engine.load_hanja_table(file.path()));
    engine.delete_hanja_table();
    assert!(engine.match_exact_hanja("한국").is_empty());
    assert!(engine.match_exact_hanja_map("한국").is_empty());
}

#[test]
fn test_composed_word_lookup() {
    let file = write_table(KOREA);
    let mut engine = HangulEngine::new();
    engine.create_context("2");
    assert!(engine.load_hanja_table(file.path()));

    for key in "gksrnr".chars() {
        engine.process(key as i32);
    }
    let word = engine.flush();
    assert_eq!(word, "한국");
    assert_eq!(engine.match_exact_hanja(&word), vec!["韓國:Korea"]);
}
