use serde::{Deserialize, Serialize};

use crate::category::Category;

/// 빠른 변환 단축 항목. `(from_unit, to_unit)` 순서쌍으로 구분한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickConversionEntry {
    pub from_unit: String,
    pub to_unit: String,
    pub category: Category,
}

/// 최근 사용한 단위 쌍 목록 (MRU, 최대 5개). 사용 빈도는 세지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuickConversions {
    entries: Vec<QuickConversionEntry>,
}

impl QuickConversions {
    pub const CAPACITY: usize = 5;

    /// 같은 순서쌍을 지우고 맨 앞에 새로 넣는다. `(A,B)`와 `(B,A)`는 다른 항목이다.
    pub fn record(
        &mut self,
        from_unit: &str,
        to_unit: &str,
        category: Category,
    ) -> &[QuickConversionEntry] {
        self.entries.retain(|e| !(e.from_unit == from_unit && e.to_unit == to_unit));
        self.entries.insert(
            0,
            QuickConversionEntry {
                from_unit: from_unit.to_string(),
                to_unit: to_unit.to_string(),
                category,
            },
        );
        self.entries.truncate(Self::CAPACITY);
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&QuickConversionEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[QuickConversionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
