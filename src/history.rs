use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::format::{parse_number, to_fixed};
use crate::id::EntryId;

/// 변환 기록 한 건. 값은 표시용 문자열로 저장한다 (입력 2자리, 결과 4자리).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: EntryId,
    pub from_value: String,
    pub from_unit: String,
    pub to_value: String,
    pub to_unit: String,
    pub category: Category,
    pub timestamp: String,
}

impl HistoryEntry {
    /// 변환 입력/결과 문자열로 기록을 만든다. 어느 쪽이든 숫자가 아니면 `None`.
    pub fn from_conversion(
        id: EntryId,
        from_value: &str,
        from_unit: &str,
        to_value: &str,
        to_unit: &str,
        category: Category,
        timestamp: String,
    ) -> Option<Self> {
        let from = parse_number(from_value)?;
        let to = parse_number(to_value)?;
        Some(Self {
            id,
            from_value: to_fixed(from, 2),
            from_unit: from_unit.to_string(),
            to_value: to_fixed(to, 4),
            to_unit: to_unit.to_string(),
            category,
            timestamp,
        })
    }

    /// `"1.00 m = 0.0010 km"` 형식의 요약.
    pub fn summary(&self) -> String {
        format!(
            "{} {} = {} {}",
            self.from_value, self.from_unit, self.to_value, self.to_unit
        )
    }
}

/// 최신 항목이 앞에 오는 변환 기록. 최대 50건, 넘치면 가장 오래된 항목부터 버린다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub const CAPACITY: usize = 50;

    pub fn push(&mut self, entry: HistoryEntry) -> &[HistoryEntry] {
        self.entries.insert(0, entry);
        self.entries.truncate(Self::CAPACITY);
        &self.entries
    }

    /// id가 일치하는 항목을 지운다. 지웠으면 true.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn max_id(&self) -> Option<EntryId> {
        self.entries.iter().map(|e| e.id).max()
    }
}
