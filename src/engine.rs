/// 조합 세션: 필드 하나의 버퍼, 오토마타, 레이아웃을 관리한다.
use log::{debug, info, warn};

use crate::automata::jamo::JamoAutomata;
use crate::automata::ComposeState;
use crate::jamo::Jamo;
use crate::layout::{KeyboardLayout, LayoutError};

/// 편집 한 번의 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    pub buffer: String,
    pub state: ComposeState,
}

/// 입력 필드 하나에 대응하는 조합 세션.
///
/// 필드마다 세션을 하나씩 둔다. 세션끼리는 아무것도 공유하지 않는다.
#[derive(Debug, Clone, Default)]
pub struct ComposeSession {
    buffer: String,
    automata: JamoAutomata,
    layout: Option<KeyboardLayout>,
}

impl ComposeSession {
    pub fn new() -> Self {
        ComposeSession {
            buffer: String::new(),
            automata: JamoAutomata::new(),
            layout: None,
        }
    }

    /// 기존 텍스트로 시작한다. 조합 상태는 비어 있다.
    pub fn with_buffer(buffer: &str) -> Self {
        ComposeSession {
            buffer: buffer.to_string(),
            ..Self::new()
        }
    }

    /// JSON5 문자열로 레이아웃을 로드한다.
    pub fn load_layout(&mut self, json: &str) -> Result<(), LayoutError> {
        let layout = KeyboardLayout::from_json(json)?;
        self.set_layout(layout);
        Ok(())
    }

    pub fn set_layout(&mut self, layout: KeyboardLayout) {
        if layout.is_empty() {
            warn!("layout {} has an empty keymap, every key passes through", layout.id);
        } else {
            info!("layout loaded: {} ({} keys)", layout.id, layout.len());
        }
        self.layout = Some(layout);
    }

    pub fn layout(&self) -> Option<&KeyboardLayout> {
        self.layout.as_ref()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> ComposeState {
        self.automata.state()
    }

    /// 자모 심볼 하나를 입력한다.
    /// 초성 19자/중성 21자가 아니면 그대로 덧붙이고 조합을 끝낸다.
    pub fn insert_jamo(&mut self, symbol: &str) -> EditResult {
        let jamo = Jamo::classify(symbol);
        self.automata.process(&mut self.buffer, &jamo);
        self.result()
    }

    /// 키 레이블을 레이아웃으로 자모에 매핑해 입력한다.
    /// 매핑이 없는 키는 레이블 그대로 덧붙인다.
    pub fn process_key(&mut self, key: &str) -> EditResult {
        match self.layout.as_ref().and_then(|layout| layout.map_key(key)) {
            Some(ch) => self.insert_jamo(&ch.to_string()),
            None => {
                debug!("unmapped key {key:?}, passing through");
                self.insert_jamo(key)
            }
        }
    }

    pub fn backspace(&mut self) -> EditResult {
        self.automata.backspace(&mut self.buffer);
        self.result()
    }

    pub fn insert_space(&mut self) -> EditResult {
        self.automata.space(&mut self.buffer);
        self.result()
    }

    /// 외부에서 버퍼가 바뀌었을 때: 새 버퍼를 받아들이고 조합을 버린다.
    pub fn reconcile_external_change(&mut self, new_buffer: &str) -> ComposeState {
        if !self.automata.state().is_empty() || self.buffer != new_buffer {
            info!("external change, composition reset");
        }
        self.buffer = new_buffer.to_string();
        self.automata.reset();
        self.automata.state()
    }

    /// 호스트 필드의 현재 값을 마지막 출력과 비교한다.
    /// 다르면 외부 변경으로 보고 조합을 초기화한 뒤 true를 반환한다.
    pub fn sync_host_buffer(&mut self, host_value: &str) -> bool {
        if host_value == self.buffer {
            return false;
        }
        self.reconcile_external_change(host_value);
        true
    }

    fn result(&self) -> EditResult {
        EditResult {
            buffer: self.buffer.clone(),
            state: self.automata.state(),
        }
    }
}
