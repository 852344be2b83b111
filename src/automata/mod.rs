/// 조합 상태와 버퍼 꼬리 편집
pub mod jamo;

use std::fmt;

use crate::jamo::{Choseong, Jongseong, Jungseong};
use crate::syllable::Syllable;

/// 아직 편집 중인 마지막 음절 블록 (두벌식 4상태)
///
/// `Empty`가 아니면 이 상태를 그린 글자가 버퍼의 마지막 글자와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeState {
    /// 조합 없음. 버퍼의 마지막 글자는 확정된 것으로 본다.
    #[default]
    Empty,
    /// 초성만 입력됨
    Choseong(Choseong),
    /// 초성 + 중성
    Jungseong(Choseong, Jungseong),
    /// 초성 + 중성 + 종성
    Jongseong(Choseong, Jungseong, Jongseong),
}

impl ComposeState {
    pub fn is_empty(&self) -> bool {
        matches!(self, ComposeState::Empty)
    }

    pub fn choseong(&self) -> Option<Choseong> {
        match *self {
            ComposeState::Empty => None,
            ComposeState::Choseong(l)
            | ComposeState::Jungseong(l, _)
            | ComposeState::Jongseong(l, _, _) => Some(l),
        }
    }

    pub fn jungseong(&self) -> Option<Jungseong> {
        match *self {
            ComposeState::Jungseong(_, v) | ComposeState::Jongseong(_, v, _) => Some(v),
            _ => None,
        }
    }

    pub fn jongseong(&self) -> Option<Jongseong> {
        match *self {
            ComposeState::Jongseong(_, _, t) => Some(t),
            _ => None,
        }
    }

    /// 완성형 음절을 다시 편집 상태로 연다.
    pub fn from_syllable(syl: Syllable) -> Self {
        match syl.jongseong {
            Some(t) => ComposeState::Jongseong(syl.choseong, syl.jungseong, t),
            None => ComposeState::Jungseong(syl.choseong, syl.jungseong),
        }
    }

    /// 현재 상태를 한 글자로 그린다. 초성만 있으면 호환 자모 그대로.
    pub fn render(&self) -> Option<char> {
        match *self {
            ComposeState::Empty => None,
            ComposeState::Choseong(l) => Some(l.to_compat()),
            ComposeState::Jungseong(l, v) => Syllable::new(l, v, None).compose(),
            ComposeState::Jongseong(l, v, t) => Syllable::new(l, v, Some(t)).compose(),
        }
    }
}

impl fmt::Display for ComposeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |ch: Option<char>| ch.unwrap_or('_');
        write!(
            f,
            "[{}{}{}]",
            slot(self.choseong().map(Choseong::to_compat)),
            slot(self.jungseong().map(Jungseong::to_compat)),
            slot(self.jongseong().map(Jongseong::to_compat)),
        )
    }
}

/// 버퍼 꼬리에 적용할 편집 한 번
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailEdit {
    /// 마지막 글자를 지우고 시작하는지
    pub drop_last: bool,
    /// 그 뒤에 덧붙일 텍스트
    pub append: String,
    /// 편집 후 상태
    pub next: ComposeState,
}

impl TailEdit {
    /// 마지막 글자를 `text`로 바꾼다.
    fn replace(text: String, next: ComposeState) -> Self {
        TailEdit {
            drop_last: true,
            append: text,
            next,
        }
    }

    /// 현재 글자는 그대로 두고 `text`를 덧붙인다.
    fn append(text: String, next: ComposeState) -> Self {
        TailEdit {
            drop_last: false,
            append: text,
            next,
        }
    }

    /// 마지막 글자를 지운다.
    fn delete(next: ComposeState) -> Self {
        TailEdit {
            drop_last: true,
            append: String::new(),
            next,
        }
    }

    /// 버퍼에 편집을 적용하고 새 상태를 돌려준다.
    pub fn apply(self, buffer: &mut String) -> ComposeState {
        if self.drop_last {
            buffer.pop();
        }
        buffer.push_str(&self.append);
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(l: char, v: Option<char>, t: Option<char>) -> ComposeState {
        let l = Choseong::from_compat(l).unwrap();
        match (v.and_then(Jungseong::from_compat), t.and_then(Jongseong::from_compat)) {
            (Some(v), Some(t)) => ComposeState::Jongseong(l, v, t),
            (Some(v), None) => ComposeState::Jungseong(l, v),
            _ => ComposeState::Choseong(l),
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(ComposeState::Empty.render(), None);
        assert_eq!(state('ㄱ', None, None).render(), Some('ㄱ'));
        assert_eq!(state('ㄱ', Some('ㅏ'), None).render(), Some('가'));
        assert_eq!(state('ㄱ', Some('ㅏ'), Some('ㅄ')).render(), Some('값'));
    }

    #[test]
    fn test_from_syllable() {
        let syl = Syllable::decompose('닭').unwrap();
        assert_eq!(
            ComposeState::from_syllable(syl),
            state('ㄷ', Some('ㅏ'), Some('ㄺ'))
        );
        let syl = Syllable::decompose('과').unwrap();
        assert_eq!(ComposeState::from_syllable(syl), state('ㄱ', Some('ㅘ'), None));
    }

    #[test]
    fn test_accessors() {
        let s = state('ㅎ', Some('ㅏ'), Some('ㄴ'));
        assert_eq!(s.choseong().map(Choseong::to_compat), Some('ㅎ'));
        assert_eq!(s.jungseong().map(Jungseong::to_compat), Some('ㅏ'));
        assert_eq!(s.jongseong().map(Jongseong::to_compat), Some('ㄴ'));
        assert!(!s.is_empty());
        assert!(ComposeState::default().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(ComposeState::Empty.to_string(), "[___]");
        assert_eq!(state('ㄱ', Some('ㅘ'), None).to_string(), "[ㄱㅘ_]");
    }

    #[test]
    fn test_apply_edit() {
        let mut buffer = String::from("한가");
        let next = TailEdit::replace("간".to_string(), ComposeState::Empty).apply(&mut buffer);
        assert_eq!(buffer, "한간");
        assert!(next.is_empty());

        TailEdit::append(" ".to_string(), ComposeState::Empty).apply(&mut buffer);
        assert_eq!(buffer, "한간 ");

        TailEdit::delete(ComposeState::Empty).apply(&mut buffer);
        assert_eq!(buffer, "한간");
    }
}
