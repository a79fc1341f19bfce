use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::units::{self, CategoryTable};

/// 변환 카테고리. 여섯 가지로 고정된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
    Speed,
}

impl Category {
    /// 화면 탭 순서대로 모든 카테고리.
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Area,
        Category::Speed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Area => "area",
            Category::Speed => "speed",
        }
    }

    /// 카테고리의 정적 변환 테이블.
    pub fn table(&self) -> &'static CategoryTable {
        match self {
            Category::Length => &units::length::TABLE,
            Category::Weight => &units::mass::TABLE,
            Category::Temperature => &units::temperature::TABLE,
            Category::Volume => &units::volume::TABLE,
            Category::Area => &units::area::TABLE,
            Category::Speed => &units::velocity::TABLE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 알 수 없는 카테고리 문자열.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 카테고리: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "길이" => Ok(Category::Length),
            "weight" | "mass" | "무게" => Ok(Category::Weight),
            "temperature" | "temp" | "온도" => Ok(Category::Temperature),
            "volume" | "부피" => Ok(Category::Volume),
            "area" | "면적" => Ok(Category::Area),
            "speed" | "velocity" | "속도" => Ok(Category::Speed),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
