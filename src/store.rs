//! 즐겨찾기/기록/빠른 변환을 하나의 JSON 문서로 보관하는 저장소.
//!
//! 모든 변경은 메모리 상태를 먼저 갱신한 뒤 문서 전체를 다시 쓴다.

use atomicwrites::{AtomicFile, OverwriteBehavior};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::favorites::{FavoriteEntry, FavoriteError, FavoriteInput, Favorites};
use crate::history::{History, HistoryEntry};
use crate::id::{EntryId, IdGenerator};
use crate::quick::{QuickConversionEntry, QuickConversions};

/// 저장 문서 입출력 오류.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("저장 문서 JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 영속화되는 문서 전체. 없는 키는 빈 목록으로 읽는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub favorites: Favorites,
    pub history: History,
    pub quick_conversions: QuickConversions,
}

/// 문서를 읽고 쓰는 외부 저장 매체.
pub trait Storage {
    /// 저장된 문서. 아직 없으면 `Ok(None)`.
    fn load(&self) -> Result<Option<Document>, StoreError>;
    /// 문서 전체를 덮어쓴다.
    fn save(&mut self, doc: &Document) -> Result<(), StoreError>;
}

/// 디스크의 JSON 파일 하나에 문서를 저장한다.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<Document>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let doc = serde_json::from_str(&content)?;
        Ok(Some(doc))
    }

    fn save(&mut self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(doc)?;
        AtomicFile::new(&self.path, OverwriteBehavior::AllowOverwrite)
            .write(|f| {
                f.write_all(content.as_bytes())?;
                f.flush()
            })
            .map_err(|err| match err {
                atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => {
                    StoreError::Io(e)
                }
            })?;
        debug!("저장 문서 기록: {}", self.path.display());
        Ok(())
    }
}

/// 메모리에만 문서를 직렬화해 두는 저장 매체. 테스트와 임시 세션용.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    saved: Option<String>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 직렬화된 문서로 시작한다.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            saved: Some(json.into()),
            saves: 0,
        }
    }

    /// 마지막으로 저장된 JSON 문자열.
    pub fn json(&self) -> Option<&str> {
        self.saved.as_deref()
    }

    /// `save` 호출 횟수.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<Document>, StoreError> {
        match &self.saved {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, doc: &Document) -> Result<(), StoreError> {
        self.saved = Some(serde_json::to_string(doc)?);
        self.saves += 1;
        Ok(())
    }
}

/// 앱 전체에서 하나만 쓰는 저장소. 시작 시 생성하고 변경마다 문서를 다시 쓴다.
#[derive(Debug)]
pub struct Store<S: Storage> {
    doc: Document,
    storage: S,
    ids: IdGenerator,
}

impl<S: Storage> Store<S> {
    /// 저장 매체에서 문서를 읽는다. 읽을 수 없으면 빈 저장소로 시작한다.
    pub fn open(storage: S) -> Self {
        let doc = match storage.load() {
            Ok(Some(doc)) => doc,
            Ok(None) => Document::default(),
            Err(err) => {
                warn!("저장 문서를 읽지 못해 빈 상태로 시작합니다: {err}");
                Document::default()
            }
        };
        let last_id = doc.history.max_id().max(doc.favorites.max_id());
        Self {
            doc,
            storage,
            ids: IdGenerator::seeded(last_id),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.doc.history.entries()
    }

    pub fn favorites(&self) -> &[FavoriteEntry] {
        self.doc.favorites.entries()
    }

    pub fn quick_conversions(&self) -> &[QuickConversionEntry] {
        self.doc.quick_conversions.entries()
    }

    /// 변환 결과를 기록에 추가한다. 결과가 비었거나 숫자가 아니면 아무 것도 하지 않는다.
    pub fn add_history(
        &mut self,
        from_value: &str,
        from_unit: &str,
        to_value: &str,
        to_unit: &str,
        category: Category,
    ) -> &[HistoryEntry] {
        if to_value.is_empty() {
            return self.doc.history.entries();
        }
        let id = self.ids.next();
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        if let Some(entry) = HistoryEntry::from_conversion(
            id, from_value, from_unit, to_value, to_unit, category, timestamp,
        ) {
            self.doc.history.push(entry);
            self.persist();
        }
        self.doc.history.entries()
    }

    pub fn remove_history(&mut self, id: EntryId) -> &[HistoryEntry] {
        if self.doc.history.remove(id) {
            self.persist();
        }
        self.doc.history.entries()
    }

    pub fn clear_history(&mut self) -> &[HistoryEntry] {
        self.doc.history.clear();
        self.persist();
        self.doc.history.entries()
    }

    pub fn record_quick(
        &mut self,
        from_unit: &str,
        to_unit: &str,
        category: Category,
    ) -> &[QuickConversionEntry] {
        self.doc.quick_conversions.record(from_unit, to_unit, category);
        self.persist();
        self.doc.quick_conversions.entries()
    }

    /// 즐겨찾기를 추가한다. 두 칸 모두 비었으면 `EmptyInputs`.
    pub fn add_favorite(
        &mut self,
        category: Category,
        inputs: [FavoriteInput; 2],
    ) -> Result<&[FavoriteEntry], FavoriteError> {
        let entry = FavoriteEntry::new(self.ids.next(), category, inputs)?;
        self.doc.favorites.add(entry);
        self.persist();
        Ok(self.doc.favorites.entries())
    }

    pub fn remove_favorite(&mut self, id: EntryId) -> &[FavoriteEntry] {
        if self.doc.favorites.remove(id) {
            self.persist();
        }
        self.doc.favorites.entries()
    }

    /// 현재 문서를 저장 매체에 쓰고 실패를 돌려준다.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.storage.save(&self.doc)
    }

    // 저장 실패는 기록만 남기고 메모리 상태는 유지한다.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.doc) {
            error!("저장 문서 쓰기 실패: {err}");
        }
    }
}
