use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 기록/즐겨찾기 항목 식별자. 생성 시각(ms) 기반이며 생성 순서대로 커진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EntryId)
    }
}

/// 같은 밀리초 안에서도 겹치지 않는 id를 발급한다.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// 이미 저장된 id 중 가장 큰 값 다음부터 발급한다.
    pub fn seeded(last: Option<EntryId>) -> Self {
        Self {
            last: last.map_or(0, |id| id.0),
        }
    }

    /// `max(now_millis, 마지막 id + 1)`. 마지막 id가 `u64::MAX`면 그 값에 머문다.
    pub fn next_at(&mut self, now_millis: u64) -> EntryId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        EntryId(id)
    }

    pub fn next(&mut self) -> EntryId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }
}
