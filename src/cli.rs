//! `hangul-compose` 데모의 줄 단위 입력 처리
//!
//! 토큰은 공백으로 구분한다. `<bs>`는 백스페이스, `<sp>`는 공백,
//! `<reset>`은 버퍼를 비운다. 나머지 토큰은 글자 단위로 입력된다.

use crate::engine::ComposeSession;

pub const TOKEN_BACKSPACE: &str = "<bs>";
pub const TOKEN_SPACE: &str = "<sp>";
pub const TOKEN_RESET: &str = "<reset>";

/// 한 줄을 토큰으로 나눠 세션에 입력한다.
///
/// `jamo`가 true면 글자를 자모 심볼로 직접 넣고, 아니면 레이아웃의
/// 키 레이블로 처리한다.
pub fn feed_line(session: &mut ComposeSession, line: &str, jamo: bool) {
    for token in line.split_whitespace() {
        match token {
            TOKEN_BACKSPACE => {
                session.backspace();
            }
            TOKEN_SPACE => {
                session.insert_space();
            }
            TOKEN_RESET => {
                session.reconcile_external_change("");
            }
            _ => {
                for ch in token.chars() {
                    let symbol = ch.to_string();
                    if jamo {
                        session.insert_jamo(&symbol);
                    } else {
                        session.process_key(&symbol);
                    }
                }
            }
        }
    }
}
