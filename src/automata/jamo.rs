//! 두벌식(2-beolsik) 꼬리 조합 오토마타
//!
//! 4개 상태 전이: Empty → Choseong → Jungseong → Jongseong
//! 핵심: 종성 이동, 겹받침 분리, 자모 단위 백스페이스
//!
//! 오토마타는 버퍼의 마지막 글자만 편집한다. 상태가 Empty일 때는 버퍼의
//! 마지막 글자를 보고 종성 이동/자음 결합 여부를 정한다.

use log::{debug, warn};

use crate::combination;
use crate::jamo::{Choseong, Jamo, Jongseong, Jungseong};
use crate::syllable::Syllable;

use super::{ComposeState, TailEdit};

/// 두벌식 오토마타
#[derive(Debug, Clone, Default)]
pub struct JamoAutomata {
    state: ComposeState,
}

/// 음절 하나를 문자열로 합성
fn syllable_text(l: Choseong, v: Jungseong, t: Option<Jongseong>) -> Option<String> {
    Syllable::new(l, v, t).compose().map(String::from)
}

impl JamoAutomata {
    pub fn new() -> Self {
        JamoAutomata {
            state: ComposeState::Empty,
        }
    }

    pub fn state(&self) -> ComposeState {
        self.state
    }

    /// 조합을 버린다. 버퍼는 건드리지 않는다.
    pub fn reset(&mut self) {
        self.state = ComposeState::Empty;
    }

    /// 키 입력 하나를 버퍼에 반영한다.
    pub fn process(&mut self, buffer: &mut String, jamo: &Jamo) {
        let edit = match jamo {
            Jamo::Consonant(l) => self.process_consonant(*l),
            Jamo::Vowel(v) => self.process_vowel(*v, buffer.chars().last()),
            Jamo::Other(text) => Some(TailEdit::append(text.clone(), ComposeState::Empty)),
        };
        let edit = edit.unwrap_or_else(|| {
            warn!("no codepoint for {jamo:?} in state {}, restarting", self.state);
            Self::restart(jamo)
        });
        let prev = self.state;
        self.state = edit.apply(buffer);
        debug!("{jamo:?}: {prev} -> {}", self.state);
    }

    /// 공백: 조합을 확정하고 공백을 덧붙인다.
    pub fn space(&mut self, buffer: &mut String) {
        buffer.push(' ');
        self.state = ComposeState::Empty;
    }

    /// 백스페이스: 음운 단위 하나를 지운다.
    pub fn backspace(&mut self, buffer: &mut String) {
        let edit = match self.state {
            ComposeState::Empty => {
                let Some(last) = buffer.chars().last() else {
                    return;
                };
                match Syllable::decompose(last) {
                    // 확정된 음절을 다시 열고 한 단계 되돌린다
                    Some(syl) => Self::peel(ComposeState::from_syllable(syl)),
                    None => Some(TailEdit::delete(ComposeState::Empty)),
                }
            }
            state => Self::peel(state),
        };
        let edit = edit.unwrap_or_else(|| {
            warn!("cannot peel {}, deleting last character", self.state);
            TailEdit::delete(ComposeState::Empty)
        });
        let prev = self.state;
        self.state = edit.apply(buffer);
        debug!("backspace: {prev} -> {}", self.state);
    }

    /// 합성에 실패했을 때: 현재 조합을 확정하고 입력을 그대로 덧붙인다.
    fn restart(jamo: &Jamo) -> TailEdit {
        let next = match jamo {
            Jamo::Consonant(l) => ComposeState::Choseong(*l),
            _ => ComposeState::Empty,
        };
        TailEdit::append(jamo.text(), next)
    }

    /// 자음 입력
    fn process_consonant(&self, c: Choseong) -> Option<TailEdit> {
        let open_new = TailEdit::append(c.to_compat().to_string(), ComposeState::Choseong(c));
        match self.state {
            ComposeState::Empty => Some(open_new),
            // 초성만 있을 때 자음이 또 오면 쌓지 않고 바꾼다
            ComposeState::Choseong(_) => Some(TailEdit::replace(
                c.to_compat().to_string(),
                ComposeState::Choseong(c),
            )),
            ComposeState::Jungseong(l, v) => match c.as_final() {
                Some(t) => Some(TailEdit::replace(
                    syllable_text(l, v, Some(t))?,
                    ComposeState::Jongseong(l, v, t),
                )),
                // 종성 불가(쌍자음) → 확정 + 새 초성
                None => Some(open_new),
            },
            ComposeState::Jongseong(l, v, t) => match combination::combine_final(t, c) {
                Some(cluster) => Some(TailEdit::replace(
                    syllable_text(l, v, Some(cluster))?,
                    ComposeState::Jongseong(l, v, cluster),
                )),
                None => Some(open_new),
            },
        }
    }

    /// 모음 입력
    fn process_vowel(&self, v: Jungseong, last: Option<char>) -> Option<TailEdit> {
        match self.state {
            ComposeState::Empty => Self::process_empty_vowel(v, last),
            ComposeState::Choseong(l) => Some(TailEdit::replace(
                syllable_text(l, v, None)?,
                ComposeState::Jungseong(l, v),
            )),
            ComposeState::Jungseong(l, m) => match combination::combine_vowel(m, v) {
                Some(combined) => Some(TailEdit::replace(
                    syllable_text(l, combined, None)?,
                    ComposeState::Jungseong(l, combined),
                )),
                // 겹모음 불가 → 현재 음절 확정, 모음은 홀로 남는다.
                // 새 조합으로 열지 않는다 (초성 없는 블록은 만들지 않음).
                None => Some(TailEdit::append(
                    v.to_compat().to_string(),
                    ComposeState::Empty,
                )),
            },
            ComposeState::Jongseong(l, m, t) => Self::move_final(l, m, t, v),
        }
    }

    /// 조합 없이 모음이 왔을 때: 버퍼의 마지막 글자를 본다.
    fn process_empty_vowel(v: Jungseong, last: Option<char>) -> Option<TailEdit> {
        let standalone = TailEdit::append(v.to_compat().to_string(), ComposeState::Empty);
        let Some(last) = last else {
            return Some(standalone);
        };

        if let Some(syl) = Syllable::decompose(last) {
            return match syl.jongseong {
                Some(t) => Self::move_final(syl.choseong, syl.jungseong, t, v),
                None => Some(standalone),
            };
        }

        match Choseong::from_compat(last) {
            Some(l) => Some(TailEdit::replace(
                syllable_text(l, v, None)?,
                ComposeState::Jungseong(l, v),
            )),
            None => Some(standalone),
        }
    }

    /// ★종성 이동★
    /// 홑받침은 통째로, 겹받침은 둘째 자음만 다음 음절의 초성이 된다.
    fn move_final(l: Choseong, m: Jungseong, t: Jongseong, v: Jungseong) -> Option<TailEdit> {
        let (kept, moved) = match combination::split_final(t) {
            Some((kept, moved)) => (Some(kept), moved),
            None => (None, t.as_initial()?),
        };
        let mut text = syllable_text(l, m, kept)?;
        text.push_str(&syllable_text(moved, v, None)?);
        Some(TailEdit::replace(text, ComposeState::Jungseong(moved, v)))
    }

    /// 열린 상태에서 자모 하나를 뗀다.
    fn peel(state: ComposeState) -> Option<TailEdit> {
        match state {
            ComposeState::Jongseong(l, v, t) => match combination::split_final(t) {
                // 겹받침 → 첫째 종성만 남김
                Some((kept, _)) => Some(TailEdit::replace(
                    syllable_text(l, v, Some(kept))?,
                    ComposeState::Jongseong(l, v, kept),
                )),
                None => Some(TailEdit::replace(
                    syllable_text(l, v, None)?,
                    ComposeState::Jungseong(l, v),
                )),
            },
            ComposeState::Jungseong(l, v) => match combination::base_vowel(v) {
                // 겹모음 → 기본 모음으로 복원
                Some(base) => Some(TailEdit::replace(
                    syllable_text(l, base, None)?,
                    ComposeState::Jungseong(l, base),
                )),
                None => Some(TailEdit::replace(
                    l.to_compat().to_string(),
                    ComposeState::Choseong(l),
                )),
            },
            ComposeState::Choseong(_) | ComposeState::Empty => {
                Some(TailEdit::delete(ComposeState::Empty))
            }
        }
    }
}
