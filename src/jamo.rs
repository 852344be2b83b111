//! 초성/중성/종성 타입과 키 입력 분류
//!
//! 각 타입은 테이블 인덱스를 감싸며, 생성 시점에 범위가 검증되므로
//! 이후 합성 단계에서는 잘못된 인덱스가 나올 수 없다.

use crate::unicode;

/// 초성 (19자)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choseong(u32);

/// 중성 (21자)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jungseong(u32);

/// 종성 (27자). 종성 없음은 `Option<Jongseong>`의 `None`으로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jongseong(u32);

impl Choseong {
    pub fn from_index(l: u32) -> Option<Self> {
        (l < unicode::L_COUNT).then_some(Choseong(l))
    }

    pub fn from_compat(ch: char) -> Option<Self> {
        unicode::compat_to_choseong(ch).map(Choseong)
    }

    pub fn index(self) -> u32 {
        self.0
    }

    pub fn to_compat(self) -> char {
        unicode::CHOSEONG[self.0 as usize]
    }

    /// 쌍자음(ㄲ ㄸ ㅃ ㅆ ㅉ)인지
    pub fn is_double(self) -> bool {
        unicode::is_double_consonant(self.to_compat())
    }

    /// 같은 자음의 종성. 쌍자음은 종성 자리에 홀로 올 수 없으므로 None.
    pub fn as_final(self) -> Option<Jongseong> {
        if self.is_double() {
            return None;
        }
        Jongseong::from_compat(self.to_compat())
    }

    /// 종성으로 붙을 수 있는지
    pub fn can_stand_as_final(self) -> bool {
        self.as_final().is_some()
    }
}

impl Jungseong {
    pub fn from_index(v: u32) -> Option<Self> {
        (v < unicode::V_COUNT).then_some(Jungseong(v))
    }

    pub fn from_compat(ch: char) -> Option<Self> {
        unicode::compat_to_jungseong(ch).map(Jungseong)
    }

    pub fn index(self) -> u32 {
        self.0
    }

    pub fn to_compat(self) -> char {
        unicode::JUNGSEONG[self.0 as usize]
    }
}

impl Jongseong {
    /// 1~27. 0(종성 없음)은 None.
    pub fn from_index(t: u32) -> Option<Self> {
        (1..unicode::T_COUNT).contains(&t).then_some(Jongseong(t))
    }

    pub fn from_compat(ch: char) -> Option<Self> {
        unicode::compat_to_jongseong(ch).map(Jongseong)
    }

    pub fn index(self) -> u32 {
        self.0
    }

    pub fn to_compat(self) -> char {
        unicode::JONGSEONG[(self.0 - 1) as usize]
    }

    /// 같은 자음의 초성. 겹받침(ㄳ, ㄺ 등)은 초성이 될 수 없으므로 None.
    pub fn as_initial(self) -> Option<Choseong> {
        Choseong::from_compat(self.to_compat())
    }
}

/// 한 번의 키 입력을 분류한 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Jamo {
    /// 초성 19자 중 하나
    Consonant(Choseong),
    /// 중성 21자 중 하나
    Vowel(Jungseong),
    /// 자모가 아닌 입력. 그대로 덧붙인다.
    Other(String),
}

impl Jamo {
    /// 심볼을 분류한다. 정확히 한 글자인 호환 자모만 자음/모음이 된다.
    pub fn classify(symbol: &str) -> Self {
        let mut chars = symbol.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(l) = Choseong::from_compat(ch) {
                return Jamo::Consonant(l);
            }
            if let Some(v) = Jungseong::from_compat(ch) {
                return Jamo::Vowel(v);
            }
        }
        Jamo::Other(symbol.to_string())
    }

    /// 버퍼에 그대로 쓸 때의 텍스트
    pub fn text(&self) -> String {
        match self {
            Jamo::Consonant(l) => l.to_compat().to_string(),
            Jamo::Vowel(v) => v.to_compat().to_string(),
            Jamo::Other(s) => s.clone(),
        }
    }
}
