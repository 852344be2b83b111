/// HangulEngine 통합 테스트
/// 호스트 필드가 엔진을 쓰는 흐름 그대로 핵심 시나리오를 검증한다.
use hangul_composer::{HangulEngine, StateSnapshot};

const LAYOUT_2BUL: &str = include_str!("../layouts/2-standard.json5");

fn create_engine() -> HangulEngine {
    let engine = HangulEngine::new();
    engine.load_layout(LAYOUT_2BUL.to_string()).unwrap();
    engine
}

/// 키 레이블 시퀀스를 처리하고 최종 버퍼를 반환
fn process_keys(engine: &HangulEngine, keys: &[&str]) -> String {
    let mut buffer = engine.buffer();
    for key in keys {
        buffer = engine.process_key(key.to_string()).buffer;
    }
    buffer
}

/// 자모 시퀀스를 처리하고 최종 버퍼를 반환
fn insert_jamo(engine: &HangulEngine, jamo: &str) -> String {
    let mut buffer = engine.buffer();
    for ch in jamo.chars() {
        buffer = engine.insert_jamo(ch.to_string()).buffer;
    }
    buffer
}

fn snapshot(l: &str, v: Option<&str>, t: Option<&str>) -> StateSnapshot {
    StateSnapshot {
        choseong: Some(l.to_string()),
        jungseong: v.map(str::to_string),
        jongseong: t.map(str::to_string),
    }
}

// ── 핵심 시나리오 ──

#[test]
fn test_basic_formation() {
    let engine = HangulEngine::new();
    let result = engine.insert_jamo("ㄱ".to_string());
    assert_eq!(result.buffer, "ㄱ");
    let result = engine.insert_jamo("ㅏ".to_string());
    assert_eq!(result.buffer, "가");
    assert_eq!(result.state, snapshot("ㄱ", Some("ㅏ"), None));
}

#[test]
fn test_hangul_word() {
    // ㅎ ㅏ ㄴ ㄱ ㅡ ㄹ → "한글"
    let engine = create_engine();
    let buffer = process_keys(&engine, &["g", "k", "s", "r", "m", "f"]);
    assert_eq!(buffer, "한글");
    assert_eq!(engine.state(), snapshot("ㄱ", Some("ㅡ"), Some("ㄹ")));
}

#[test]
fn test_final_migration_from_committed_text() {
    // 상태 없이 "간" + ㅣ → "가니"
    let engine = HangulEngine::new();
    engine.reconcile_external_change("간".to_string());
    let result = engine.insert_jamo("ㅣ".to_string());
    assert_eq!(result.buffer, "가니");
    assert_eq!(result.state, snapshot("ㄴ", Some("ㅣ"), None));
}

#[test]
fn test_diphthong() {
    // ㄱ ㅗ ㅏ → "과" ("고아"가 아님)
    let engine = create_engine();
    assert_eq!(process_keys(&engine, &["r", "h", "k"]), "과");
}

#[test]
fn test_cluster_final_split() {
    // ㄱ ㅏ ㅂ ㅅ → "값", + ㅣ → "갑시"
    let engine = create_engine();
    assert_eq!(process_keys(&engine, &["r", "k", "q", "t"]), "값");
    let result = engine.process_key("l".to_string());
    assert_eq!(result.buffer, "갑시");
    assert_eq!(result.state, snapshot("ㅅ", Some("ㅣ"), None));
}

#[test]
fn test_geminate_rejected_as_final() {
    // 가 + ㄲ → "가ㄲ"
    let engine = create_engine();
    process_keys(&engine, &["r", "k"]);
    let result = engine.process_key("R".to_string());
    assert_eq!(result.buffer, "가ㄲ");
    assert_eq!(result.state, snapshot("ㄲ", None, None));
}

#[test]
fn test_sentence_with_spaces() {
    let engine = HangulEngine::new();
    insert_jamo(&engine, "ㅇㅏㄴㄴㅕㅇ");
    engine.insert_space();
    let buffer = insert_jamo(&engine, "ㅎㅏㅅㅔㅇㅛ");
    assert_eq!(buffer, "안녕 하세요");
}

#[test]
fn test_word_with_cluster_and_diphthong() {
    let engine = HangulEngine::new();
    assert_eq!(insert_jamo(&engine, "ㅇㅣㄹㄱㄱㅗ"), "읽고");
    engine.reconcile_external_change(String::new());
    assert_eq!(insert_jamo(&engine, "ㅇㅗㅐㄱㅡㄹㅣㄱㅗ"), "왜그리고");
}

#[test]
fn test_double_consonant_never_closes_syllable() {
    // ㅆ는 받침으로 붙지 않고 새 초성이 된다
    let engine = HangulEngine::new();
    assert_eq!(insert_jamo(&engine, "ㅇㅣㅆ"), "이ㅆ");
    assert_eq!(engine.state(), snapshot("ㅆ", None, None));
    assert_eq!(insert_jamo(&engine, "ㅏ"), "이싸");
}

// ── 백스페이스 ──

#[test]
fn test_backspace_step_by_step() {
    let engine = create_engine();
    process_keys(&engine, &["r", "h", "k", "s"]); // 관
    let expected = ["과", "고", "ㄱ", ""];
    for want in expected {
        assert_eq!(engine.backspace().buffer, want);
    }
    // 빈 버퍼에서 백스페이스는 아무것도 하지 않는다
    let result = engine.backspace();
    assert_eq!(result.buffer, "");
    assert!(result.state.is_empty());
}

#[test]
fn test_backspace_through_committed_syllables() {
    let engine = HangulEngine::new();
    insert_jamo(&engine, "ㅎㅏㄴㄱㅡㄹ");
    let expected = ["한그", "한ㄱ", "한", "하", "ㅎ", ""];
    for want in expected {
        assert_eq!(engine.backspace().buffer, want);
    }
}

#[test]
fn test_backspace_symmetry() {
    let words = ["ㄷㅏㄹㄱ", "ㅂㅜㅔㄹㄱ", "ㅇㅣㄹㄱㄱㅗ", "ㄲㅗㅊㅇㅣ"];
    for keys in words {
        let engine = HangulEngine::new();
        insert_jamo(&engine, keys);
        for _ in keys.chars() {
            engine.backspace();
        }
        assert_eq!(engine.buffer(), "", "{keys}");
        assert!(engine.state().is_empty(), "{keys}");
    }
}

// ── 외부 변경 ──

#[test]
fn test_reconcile_idempotent() {
    let engine = create_engine();
    process_keys(&engine, &["r", "h"]);
    let first = engine.reconcile_external_change("학교".to_string());
    let second = engine.reconcile_external_change("학교".to_string());
    assert!(first.is_empty());
    assert_eq!(first, second);
    assert_eq!(engine.buffer(), "학교");
}

#[test]
fn test_field_cleared_externally() {
    let engine = create_engine();
    process_keys(&engine, &["r", "h"]); // 고
    assert!(engine.sync_host_buffer(String::new()));
    assert!(engine.state().is_empty());
    // 이전 조합의 ㅗ와 합쳐지지 않는다
    let result = engine.process_key("k".to_string());
    assert_eq!(result.buffer, "ㅏ");
}

#[test]
fn test_sync_with_own_output_keeps_state() {
    let engine = create_engine();
    let buffer = process_keys(&engine, &["r", "h"]);
    assert!(!engine.sync_host_buffer(buffer));
    assert_eq!(process_keys(&engine, &["k"]), "과");
}

// ── 레이아웃 ──

#[test]
fn test_layout_id() {
    let engine = create_engine();
    assert_eq!(engine.layout_id().as_deref(), Some("2-standard"));
    // Shift 키도 홑자음/모음으로 매핑된다
    assert_eq!(process_keys(&engine, &["T", "K", "F"]), "쌀");
}

#[test]
fn test_invalid_layout() {
    let engine = HangulEngine::new();
    assert!(engine.load_layout("{ id: 1 }".to_string()).is_err());
    assert_eq!(engine.layout_id(), None);
    // 레이아웃이 없으면 키 레이블이 그대로 들어간다
    assert_eq!(engine.process_key("r".to_string()).buffer, "r");
}
