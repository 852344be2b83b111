/// 자판 레이아웃 로딩 및 키맵 조회
pub mod schema;

use std::collections::HashMap;
use std::fmt;

use schema::LayoutSchema;

use crate::jamo::Jamo;

/// 기본 내장 레이아웃 (두벌식 표준)
pub const STANDARD_2BUL: &str = include_str!("../../layouts/2-standard.json5");

/// 레이아웃 로딩 오류
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Error)]
pub enum LayoutError {
    /// JSON5 문법/스키마 오류
    Parse { reason: String },
    /// "0x3131" 꼴이 아닌 코드포인트
    InvalidHex { key: String, value: String },
    /// 초성/중성 테이블에 없는 자모로 매핑된 키
    NotJamo { key: String, value: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Parse { reason } => write!(f, "JSON5 parse error: {reason}"),
            LayoutError::InvalidHex { key, value } => {
                write!(f, "Invalid hex in keymap: {key} → {value}")
            }
            LayoutError::NotJamo { key, value } => {
                write!(f, "Keymap target is not a modern jamo: {key} → {value}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// 파싱된 자판 레이아웃
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    pub id: String,
    pub name: String,
    /// 키 레이블 → 자모 char 매핑
    keymap: HashMap<String, char>,
}

/// "0x3131" 꼴의 코드포인트 문자열을 char로 읽는다.
fn parse_codepoint(value: &str) -> Option<char> {
    match value.as_bytes() {
        [b'0', b'x' | b'X', _, ..] => u32::from_str_radix(&value[2..], 16)
            .ok()
            .and_then(char::from_u32),
        _ => None,
    }
}

impl KeyboardLayout {
    /// JSON5 문자열에서 레이아웃을 파싱한다.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let schema: LayoutSchema = json5::from_str(json).map_err(|e| LayoutError::Parse {
            reason: e.to_string(),
        })?;

        let mut keymap = HashMap::with_capacity(schema.keymap.len());
        for (key, hex) in &schema.keymap {
            let ch = parse_codepoint(hex).ok_or_else(|| LayoutError::InvalidHex {
                key: key.clone(),
                value: hex.clone(),
            })?;
            if let Jamo::Other(_) = Jamo::classify(&ch.to_string()) {
                return Err(LayoutError::NotJamo {
                    key: key.clone(),
                    value: hex.clone(),
                });
            }
            keymap.insert(key.clone(), ch);
        }

        Ok(KeyboardLayout {
            id: schema.id,
            name: schema.name,
            keymap,
        })
    }

    /// 내장 두벌식 표준 레이아웃
    pub fn standard() -> Result<Self, LayoutError> {
        Self::from_json(STANDARD_2BUL)
    }

    /// 키 레이블로 자모를 조회
    pub fn map_key(&self, key: &str) -> Option<char> {
        self.keymap.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.keymap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keymap.is_empty()
    }
}
