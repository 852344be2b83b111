//! 한글 유니코드 상수 및 유틸리티
//!
//! - 음절 합성/분해 (SBase 공식)
//! - 호환 자모 ↔ 초/중/종성 인덱스 변환 (O(1) 조회)
//! - 완성형 음절 판별

use std::collections::HashMap;

use once_cell::sync::Lazy;

// ── 한글 유니코드 상수 ──

/// 한글 음절 시작 '가' (U+AC00)
pub const S_BASE: u32 = 0xAC00;

pub const L_COUNT: u32 = 19;
pub const V_COUNT: u32 = 21;
pub const T_COUNT: u32 = 28;
pub const N_COUNT: u32 = V_COUNT * T_COUNT; // 588
pub const S_COUNT: u32 = L_COUNT * N_COUNT; // 11172

// ── 자모 테이블 (순서가 곧 인덱스) ──

/// 초성 19자 (호환 자모)
pub const CHOSEONG: [char; L_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 21자 (호환 자모)
pub const JUNGSEONG: [char; V_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 종성 27자 (호환 자모). 인덱스 0(종성 없음)은 빠져 있으므로
/// `JONGSEONG[t - 1]`이 종성 인덱스 t의 자모다.
pub const JONGSEONG: [char; (T_COUNT - 1) as usize] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 종성으로 올 수 없는 쌍자음 (초성으로만 사용)
pub const DOUBLE_CONSONANTS: [char; 5] = ['ㄲ', 'ㄸ', 'ㅃ', 'ㅆ', 'ㅉ'];

static CHOSEONG_INDEX: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    CHOSEONG.iter().zip(0..).map(|(&ch, idx)| (ch, idx)).collect()
});

static JUNGSEONG_INDEX: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    JUNGSEONG.iter().zip(0..).map(|(&ch, idx)| (ch, idx)).collect()
});

static JONGSEONG_INDEX: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    JONGSEONG.iter().zip(1..).map(|(&ch, idx)| (ch, idx)).collect()
});

// ── 음절 합성/분해 ──

/// 초성(L), 중성(V), 종성(T) 인덱스로 한글 음절을 합성한다.
/// - `l`: 초성 인덱스 (0~18)
/// - `v`: 중성 인덱스 (0~20)
/// - `t`: 종성 인덱스 (0~27, 0이면 종성 없음)
pub fn compose_syllable(l: u32, v: u32, t: u32) -> Option<char> {
    if l >= L_COUNT || v >= V_COUNT || t >= T_COUNT {
        return None;
    }
    char::from_u32(S_BASE + l * N_COUNT + v * T_COUNT + t)
}

/// 한글 음절을 초성(L), 중성(V), 종성(T) 인덱스로 분해한다.
/// 종성이 없으면 t = 0.
pub fn decompose_syllable(ch: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(ch) {
        return None;
    }
    let offset = ch as u32 - S_BASE;
    Some((offset / N_COUNT, (offset % N_COUNT) / T_COUNT, offset % T_COUNT))
}

/// 호환 자모 문자로 음절을 합성한다.
///
/// 초성이나 중성이 테이블에 없거나, 종성이 주어졌는데 종성 테이블에 없으면
/// `None`을 반환한다. 호출자는 이 경우 결과를 사용하지 않는다.
pub fn compose_jamo(initial: char, medial: char, last: Option<char>) -> Option<char> {
    let l = compat_to_choseong(initial)?;
    let v = compat_to_jungseong(medial)?;
    let t = match last {
        Some(ch) => compat_to_jongseong(ch)?,
        None => 0,
    };
    compose_syllable(l, v, t)
}

/// 한글 완성형 음절인지 (가~힣)
pub fn is_syllable(ch: char) -> bool {
    (S_BASE..S_BASE + S_COUNT).contains(&(ch as u32))
}

// ── 호환 자모 ↔ 인덱스 ──

/// 호환 자모 자음을 초성 인덱스로 변환
pub fn compat_to_choseong(ch: char) -> Option<u32> {
    CHOSEONG_INDEX.get(&ch).copied()
}

/// 호환 자모 모음을 중성 인덱스로 변환
pub fn compat_to_jungseong(ch: char) -> Option<u32> {
    JUNGSEONG_INDEX.get(&ch).copied()
}

/// 호환 자모 자음을 종성 인덱스(1~27)로 변환.
/// ㄸ, ㅃ, ㅉ은 종성 테이블에 없으므로 None.
pub fn compat_to_jongseong(ch: char) -> Option<u32> {
    JONGSEONG_INDEX.get(&ch).copied()
}

/// 쌍자음(ㄲ ㄸ ㅃ ㅆ ㅉ)인지
pub fn is_double_consonant(ch: char) -> bool {
    DOUBLE_CONSONANTS.contains(&ch)
}
