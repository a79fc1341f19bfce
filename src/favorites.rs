use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::id::EntryId;

/// 즐겨찾기 저장 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteError {
    #[error("변환 값을 입력하세요.")]
    EmptyInputs,
}

/// 저장 시점의 입력 칸 하나.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteInput {
    pub value: String,
    pub unit: String,
    pub label: String,
}

/// 두 입력 칸의 스냅샷.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: EntryId,
    pub category: Category,
    pub inputs: [FavoriteInput; 2],
}

impl FavoriteEntry {
    /// 두 칸 모두 비어 있으면 만들지 않는다.
    pub fn new(
        id: EntryId,
        category: Category,
        inputs: [FavoriteInput; 2],
    ) -> Result<Self, FavoriteError> {
        if inputs.iter().all(|i| i.value.is_empty()) {
            return Err(FavoriteError::EmptyInputs);
        }
        Ok(Self {
            id,
            category,
            inputs,
        })
    }

    /// `"1 m = 0.001 km"` 형식. 빈 값은 0으로 보인다.
    pub fn summary(&self) -> String {
        self.inputs
            .iter()
            .map(|i| {
                let value = if i.value.is_empty() { "0" } else { i.value.as_str() };
                format!("{value} {}", i.unit)
            })
            .collect::<Vec<_>>()
            .join(" = ")
    }
}

/// 즐겨찾기 목록. 최신 항목이 앞에 오고 자동으로 지워지지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: Vec<FavoriteEntry>,
}

impl Favorites {
    pub fn add(&mut self, entry: FavoriteEntry) -> &[FavoriteEntry] {
        self.entries.insert(0, entry);
        &self.entries
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|f| f.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn max_id(&self) -> Option<EntryId> {
        self.entries.iter().map(|f| f.id).max()
    }
}
