pub mod automata;
pub mod cli;
pub mod combination;
pub mod engine;
pub mod jamo;
pub mod layout;
pub mod syllable;
pub mod unicode;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use automata::ComposeState;
pub use engine::{ComposeSession, EditResult};
pub use layout::{KeyboardLayout, LayoutError};

uniffi::setup_scaffolding!();

/// 조합 상태 스냅샷 (UniFFI → Swift/Kotlin 전달용)
/// 각 칸은 호환 자모 한 글자, 비어 있으면 None.
#[derive(uniffi::Record, Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub choseong: Option<String>,
    pub jungseong: Option<String>,
    pub jongseong: Option<String>,
}

impl From<ComposeState> for StateSnapshot {
    fn from(state: ComposeState) -> Self {
        StateSnapshot {
            choseong: state.choseong().map(|l| l.to_compat().to_string()),
            jungseong: state.jungseong().map(|v| v.to_compat().to_string()),
            jongseong: state.jongseong().map(|t| t.to_compat().to_string()),
        }
    }
}

impl StateSnapshot {
    pub fn is_empty(&self) -> bool {
        self.choseong.is_none() && self.jungseong.is_none() && self.jongseong.is_none()
    }
}

/// 키 처리 결과: 호스트 필드에 그대로 써야 할 새 버퍼와 조합 상태
#[derive(uniffi::Record, Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub buffer: String,
    pub state: StateSnapshot,
}

impl From<EditResult> for ProcessResult {
    fn from(result: EditResult) -> Self {
        ProcessResult {
            buffer: result.buffer,
            state: result.state.into(),
        }
    }
}

/// 한글 조합 엔진 (UniFFI object, thread-safe)
///
/// 입력 필드 하나에 엔진 하나. 필드가 여러 개면 엔진도 여러 개 만든다.
#[derive(uniffi::Object)]
pub struct HangulEngine {
    session: Mutex<ComposeSession>,
}

impl Default for HangulEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HangulEngine {
    fn session(&self) -> MutexGuard<'_, ComposeSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl HangulEngine {
    /// 빈 버퍼, 레이아웃 미로드 상태로 엔진을 만든다.
    #[uniffi::constructor]
    pub fn new() -> Self {
        HangulEngine {
            session: Mutex::new(ComposeSession::new()),
        }
    }

    /// JSON5 문자열로 자판 레이아웃을 로드한다.
    pub fn load_layout(&self, json: String) -> Result<(), LayoutError> {
        self.session().load_layout(&json)
    }

    /// 자모 심볼 하나를 입력한다. (예: "ㄱ", "ㅏ")
    pub fn insert_jamo(&self, symbol: String) -> ProcessResult {
        self.session().insert_jamo(&symbol).into()
    }

    /// 키 레이블을 처리한다. (예: "r", "R", "k")
    pub fn process_key(&self, key: String) -> ProcessResult {
        self.session().process_key(&key).into()
    }

    /// 백스페이스 처리 (자모 한 단위 되돌림)
    pub fn backspace(&self) -> ProcessResult {
        self.session().backspace().into()
    }

    /// 공백 입력 (현재 조합 확정)
    pub fn insert_space(&self) -> ProcessResult {
        self.session().insert_space().into()
    }

    /// 외부에서 바뀐 버퍼를 받아들이고 조합을 초기화한다.
    pub fn reconcile_external_change(&self, new_buffer: String) -> StateSnapshot {
        self.session().reconcile_external_change(&new_buffer).into()
    }

    /// 호스트 필드 값이 마지막 출력과 다르면 조합을 초기화한다.
    pub fn sync_host_buffer(&self, value: String) -> bool {
        self.session().sync_host_buffer(&value)
    }

    /// 로드된 레이아웃 id. 없으면 None.
    pub fn layout_id(&self) -> Option<String> {
        self.session().layout().map(|layout| layout.id.clone())
    }

    pub fn buffer(&self) -> String {
        self.session().buffer().to_string()
    }

    pub fn state(&self) -> StateSnapshot {
        self.session().state().into()
    }
}
