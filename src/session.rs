//! 두 입력 칸을 서로 동기화하는 변환 세션.
//!
//! 한쪽 칸에 값이 들어오면 다른 칸을 변환 결과로 채우고, 결과가 있으면
//! 기록과 빠른 변환 목록을 갱신한다.

use log::debug;

use crate::category::Category;
use crate::conversion::convert;
use crate::favorites::{FavoriteEntry, FavoriteError, FavoriteInput};
use crate::i18n::Translator;
use crate::store::{Storage, Store};

/// 세션 조작 중 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("빠른 변환 {}번이 없습니다", .0 + 1)]
    QuickNotFound(usize),
    #[error(transparent)]
    Favorite(#[from] FavoriteError),
}

/// 입력 칸 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// 단위가 정해진 입력 칸 하나.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitField {
    pub unit: String,
    pub value: String,
}

impl UnitField {
    fn empty(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
            value: String::new(),
        }
    }
}

#[derive(Debug)]
pub struct ConverterSession<S: Storage> {
    store: Store<S>,
    translator: Translator,
    category: Category,
    fields: [UnitField; 2],
}

impl<S: Storage> ConverterSession<S> {
    /// 카테고리의 기본 쌍 단위와 빈 값으로 시작한다.
    pub fn new(store: Store<S>, translator: Translator, category: Category) -> Self {
        let (first, second) = category.table().main_units();
        Self {
            store,
            translator,
            category,
            fields: [UnitField::empty(first), UnitField::empty(second)],
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn field(&self, side: Side) -> &UnitField {
        &self.fields[side.index()]
    }

    pub fn fields(&self) -> &[UnitField; 2] {
        &self.fields
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store<S> {
        &mut self.store
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// 카테고리를 바꾸고 두 칸을 기본 쌍 단위의 빈 칸으로 되돌린다.
    pub fn switch_category(&mut self, category: Category) {
        let (first, second) = category.table().main_units();
        self.category = category;
        self.fields = [UnitField::empty(first), UnitField::empty(second)];
    }

    /// 두 칸의 단위를 지정한다. 값은 그대로 둔다.
    pub fn set_units(&mut self, first: &str, second: &str) {
        let table = self.category.table();
        for unit in [first, second] {
            if !table.contains_unit(unit) {
                debug!("{} 테이블에 없는 단위: {unit}", self.category);
            }
        }
        self.fields[0].unit = first.to_string();
        self.fields[1].unit = second.to_string();
    }

    /// `side` 칸에 값을 넣고 반대쪽 칸을 변환 결과로 채운다.
    ///
    /// 빈 입력은 변환하지 않는다. 결과가 빈 문자열이면 기록하지 않는다.
    pub fn input(&mut self, side: Side, raw: &str) -> String {
        self.fields[side.index()].value = raw.to_string();
        if raw.is_empty() {
            return String::new();
        }

        let from = self.fields[side.index()].unit.clone();
        let to = self.fields[side.other().index()].unit.clone();
        let result = convert(raw, &from, &to, self.category);
        self.fields[side.other().index()].value = result.clone();

        if result.is_empty() {
            debug!("결과 없음: {} {raw} {from} -> {to}", self.category);
        } else {
            self.store.add_history(raw, &from, &result, &to, self.category);
            self.store.record_quick(&from, &to, self.category);
        }
        result
    }

    /// 두 칸의 값을 맞바꾼 뒤 첫 번째 칸 기준으로 다시 변환한다.
    pub fn swap(&mut self) -> String {
        let [first, second] = &mut self.fields;
        std::mem::swap(&mut first.value, &mut second.value);
        let value = self.fields[0].value.clone();
        self.input(Side::First, &value)
    }

    /// 빠른 변환 항목을 불러와 값 1로 변환한다.
    pub fn load_quick(&mut self, index: usize) -> Result<String, SessionError> {
        let entry = self
            .store
            .document()
            .quick_conversions
            .get(index)
            .cloned()
            .ok_or(SessionError::QuickNotFound(index))?;
        self.switch_category(entry.category);
        self.set_units(&entry.from_unit, &entry.to_unit);
        Ok(self.input(Side::First, "1"))
    }

    /// 현재 두 칸을 즐겨찾기로 저장한다.
    pub fn save_favorite(&mut self) -> Result<&[FavoriteEntry], SessionError> {
        let inputs = [self.snapshot(Side::First), self.snapshot(Side::Second)];
        Ok(self.store.add_favorite(self.category, inputs)?)
    }

    fn snapshot(&self, side: Side) -> FavoriteInput {
        let field = self.field(side);
        FavoriteInput {
            value: field.value.clone(),
            unit: field.unit.clone(),
            label: self.translator.unit_name(&field.unit),
        }
    }
}
