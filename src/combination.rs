//! 겹모음/겹받침 조합 테이블과 역방향 분리 테이블
//!
//! 분리 테이블은 조합 테이블을 뒤집어 만든다.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::jamo::{Choseong, Jongseong, Jungseong};

/// (기본 모음, 추가 모음, 겹모음)
const VOWEL_COMBINATIONS: &[(char, char, char)] = &[
    ('ㅗ', 'ㅏ', 'ㅘ'),
    ('ㅗ', 'ㅐ', 'ㅙ'),
    ('ㅗ', 'ㅣ', 'ㅚ'),
    ('ㅜ', 'ㅓ', 'ㅝ'),
    ('ㅜ', 'ㅔ', 'ㅞ'),
    ('ㅜ', 'ㅣ', 'ㅟ'),
    ('ㅡ', 'ㅣ', 'ㅢ'),
];

/// (기본 종성, 추가 자음, 겹받침)
const FINAL_COMBINATIONS: &[(char, char, char)] = &[
    ('ㄱ', 'ㅅ', 'ㄳ'),
    ('ㄴ', 'ㅈ', 'ㄵ'),
    ('ㄴ', 'ㅎ', 'ㄶ'),
    ('ㄹ', 'ㄱ', 'ㄺ'),
    ('ㄹ', 'ㅁ', 'ㄻ'),
    ('ㄹ', 'ㅂ', 'ㄼ'),
    ('ㄹ', 'ㅅ', 'ㄽ'),
    ('ㄹ', 'ㅌ', 'ㄾ'),
    ('ㄹ', 'ㅍ', 'ㄿ'),
    ('ㄹ', 'ㅎ', 'ㅀ'),
    ('ㅂ', 'ㅅ', 'ㅄ'),
];

static VOWEL_TABLE: Lazy<HashMap<(Jungseong, Jungseong), Jungseong>> = Lazy::new(|| {
    VOWEL_COMBINATIONS
        .iter()
        .filter_map(|&(base, added, combined)| {
            Some((
                (Jungseong::from_compat(base)?, Jungseong::from_compat(added)?),
                Jungseong::from_compat(combined)?,
            ))
        })
        .collect()
});

static VOWEL_BASE: Lazy<HashMap<Jungseong, Jungseong>> = Lazy::new(|| {
    VOWEL_TABLE
        .iter()
        .map(|(&(base, _), &combined)| (combined, base))
        .collect()
});

static FINAL_TABLE: Lazy<HashMap<(Jongseong, Choseong), Jongseong>> = Lazy::new(|| {
    FINAL_COMBINATIONS
        .iter()
        .filter_map(|&(base, added, combined)| {
            Some((
                (Jongseong::from_compat(base)?, Choseong::from_compat(added)?),
                Jongseong::from_compat(combined)?,
            ))
        })
        .collect()
});

static FINAL_SPLIT: Lazy<HashMap<Jongseong, (Jongseong, Choseong)>> = Lazy::new(|| {
    FINAL_TABLE
        .iter()
        .map(|(&(kept, moved), &combined)| (combined, (kept, moved)))
        .collect()
});

/// 두 모음을 겹모음으로 합친다 (ㅗ + ㅏ → ㅘ)
pub fn combine_vowel(base: Jungseong, added: Jungseong) -> Option<Jungseong> {
    VOWEL_TABLE.get(&(base, added)).copied()
}

/// 겹모음의 기본 모음 (ㅘ → ㅗ). 겹모음이 아니면 None.
pub fn base_vowel(combined: Jungseong) -> Option<Jungseong> {
    VOWEL_BASE.get(&combined).copied()
}

/// 종성에 자음을 더해 겹받침을 만든다 (ㄱ + ㅅ → ㄳ)
pub fn combine_final(base: Jongseong, added: Choseong) -> Option<Jongseong> {
    FINAL_TABLE.get(&(base, added)).copied()
}

/// 겹받침을 (남는 종성, 다음 음절로 넘어가는 초성)으로 나눈다.
/// 홑받침이면 None.
pub fn split_final(cluster: Jongseong) -> Option<(Jongseong, Choseong)> {
    FINAL_SPLIT.get(&cluster).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(ch: char) -> Jungseong {
        Jungseong::from_compat(ch).unwrap()
    }

    fn t(ch: char) -> Jongseong {
        Jongseong::from_compat(ch).unwrap()
    }

    fn l(ch: char) -> Choseong {
        Choseong::from_compat(ch).unwrap()
    }

    #[test]
    fn test_tables_fully_loaded() {
        assert_eq!(VOWEL_TABLE.len(), VOWEL_COMBINATIONS.len());
        assert_eq!(VOWEL_BASE.len(), VOWEL_COMBINATIONS.len());
        assert_eq!(FINAL_TABLE.len(), FINAL_COMBINATIONS.len());
        assert_eq!(FINAL_SPLIT.len(), FINAL_COMBINATIONS.len());
    }

    #[test]
    fn test_combine_vowel() {
        assert_eq!(combine_vowel(v('ㅗ'), v('ㅏ')), Some(v('ㅘ')));
        assert_eq!(combine_vowel(v('ㅜ'), v('ㅔ')), Some(v('ㅞ')));
        assert_eq!(combine_vowel(v('ㅡ'), v('ㅣ')), Some(v('ㅢ')));
        assert_eq!(combine_vowel(v('ㅏ'), v('ㅏ')), None);
        // 순서가 바뀌면 조합되지 않는다
        assert_eq!(combine_vowel(v('ㅏ'), v('ㅗ')), None);
    }

    #[test]
    fn test_base_vowel() {
        assert_eq!(base_vowel(v('ㅘ')), Some(v('ㅗ')));
        assert_eq!(base_vowel(v('ㅟ')), Some(v('ㅜ')));
        assert_eq!(base_vowel(v('ㅢ')), Some(v('ㅡ')));
        assert_eq!(base_vowel(v('ㅏ')), None);
        assert_eq!(base_vowel(v('ㅗ')), None);
    }

    #[test]
    fn test_combine_final() {
        assert_eq!(combine_final(t('ㄱ'), l('ㅅ')), Some(t('ㄳ')));
        assert_eq!(combine_final(t('ㄹ'), l('ㄱ')), Some(t('ㄺ')));
        assert_eq!(combine_final(t('ㅂ'), l('ㅅ')), Some(t('ㅄ')));
        assert_eq!(combine_final(t('ㄱ'), l('ㄱ')), None);
        assert_eq!(combine_final(t('ㄳ'), l('ㅅ')), None);
    }

    #[test]
    fn test_split_final() {
        assert_eq!(split_final(t('ㄳ')), Some((t('ㄱ'), l('ㅅ'))));
        assert_eq!(split_final(t('ㄵ')), Some((t('ㄴ'), l('ㅈ'))));
        assert_eq!(split_final(t('ㅀ')), Some((t('ㄹ'), l('ㅎ'))));
        assert_eq!(split_final(t('ㅄ')), Some((t('ㅂ'), l('ㅅ'))));
        assert_eq!(split_final(t('ㄱ')), None);
        assert_eq!(split_final(t('ㄲ')), None);
    }

    #[test]
    fn test_split_inverts_combine() {
        for &(base, added, combined) in FINAL_COMBINATIONS {
            assert_eq!(split_final(t(combined)), Some((t(base), l(added))));
            // 겹받침은 홀로 초성이 될 수 없다
            assert!(t(combined).as_initial().is_none());
        }
    }
}
