/// JSON5 자판 레이아웃 스키마용 serde 타입
use std::collections::HashMap;

use serde::Deserialize;

/// 자판 타입. 이 조합기는 두벌식(jamo)만 다룬다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    Jamo,
}

/// `layouts/*.json5` 파일 한 개
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSchema {
    pub id: String,
    /// 사용자에게 보이는 이름
    pub name: String,
    #[serde(rename = "type")]
    pub layout_type: LayoutType,
    /// 키 레이블(대소문자 구분) → "0x3131" 꼴 코드포인트
    pub keymap: HashMap<String, String>,
}
