/// 타입이 있는 음절 합성/분해
use crate::jamo::{Choseong, Jongseong, Jungseong};
use crate::unicode;

/// 초성 + 중성 + (종성) 으로 이루어진 완성형 음절 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub choseong: Choseong,
    pub jungseong: Jungseong,
    pub jongseong: Option<Jongseong>,
}

impl Syllable {
    pub fn new(choseong: Choseong, jungseong: Jungseong, jongseong: Option<Jongseong>) -> Self {
        Syllable {
            choseong,
            jungseong,
            jongseong,
        }
    }

    /// 완성형 음절 문자로 합성한다.
    pub fn compose(&self) -> Option<char> {
        unicode::compose_syllable(
            self.choseong.index(),
            self.jungseong.index(),
            self.jongseong.map_or(0, Jongseong::index),
        )
    }

    /// 완성형 음절을 분해한다. 가~힣 범위 밖이면 None.
    pub fn decompose(ch: char) -> Option<Self> {
        let (l, v, t) = unicode::decompose_syllable(ch)?;
        Some(Syllable {
            choseong: Choseong::from_index(l)?,
            jungseong: Jungseong::from_index(v)?,
            jongseong: Jongseong::from_index(t),
        })
    }
}
