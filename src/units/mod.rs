//! 카테고리별 변환 테이블 정의 모음.
//!
//! 각 카테고리는 기본 쌍(main pair) 두 방향, 보조 단위 선언, 특수 규칙,
//! 그리고 직접 나열한 다중 홉 규칙으로 구성된다. 테이블은 실행 중 바뀌지 않는다.

pub mod area;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod velocity;
pub mod volume;

use crate::format::{to_fixed, trim_trailing_zeros};

/// 기본 쌍 결과에 적용되는 소수 자릿수.
pub const MAIN_PAIR_DIGITS: usize = 4;

/// 규칙이 값을 계산하는 방식.
#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    /// `to = from * factor`
    Linear(f64),
    /// 순수 함수로 계산 (온도, 나눗셈이 섞인 다중 홉 등)
    Formula(fn(f64) -> f64),
}

impl RuleKind {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            RuleKind::Linear(factor) => value * factor,
            RuleKind::Formula(f) => f(value),
        }
    }

    /// 선형 규칙이면 배율을 반환한다.
    pub fn factor(&self) -> Option<f64> {
        match self {
            RuleKind::Linear(factor) => Some(*factor),
            RuleKind::Formula(_) => None,
        }
    }
}

/// 결과 문자열 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// 고정 소수 자릿수로 만든 뒤 꼬리 0과 남는 소수점을 제거한다.
    Trimmed,
    /// 고정 소수 자릿수 문자열을 그대로 쓴다.
    Fixed,
}

/// 한 카테고리 안에서 두 단위 사이의 방향성 있는 변환 규칙.
#[derive(Debug, Clone, Copy)]
pub struct UnitPairRule {
    pub from: &'static str,
    pub to: &'static str,
    pub kind: RuleKind,
    pub rounding_digits: usize,
    pub output_style: OutputStyle,
}

impl UnitPairRule {
    /// 기본 쌍 규칙. 4자리 반올림 후 꼬리 0을 제거한다.
    pub const fn main(from: &'static str, to: &'static str, kind: RuleKind) -> Self {
        Self {
            from,
            to,
            kind,
            rounding_digits: MAIN_PAIR_DIGITS,
            output_style: OutputStyle::Trimmed,
        }
    }

    /// 특수/다중 홉 규칙. 규칙마다 자릿수를 따로 가진다.
    pub const fn fixed(
        from: &'static str,
        to: &'static str,
        kind: RuleKind,
        rounding_digits: usize,
    ) -> Self {
        Self {
            from,
            to,
            kind,
            rounding_digits,
            output_style: OutputStyle::Fixed,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        self.kind.apply(value)
    }

    /// 계산된 값을 이 규칙의 자릿수와 출력 형식으로 문자열화한다.
    pub fn render(&self, value: f64) -> String {
        let fixed = to_fixed(value, self.rounding_digits);
        match self.output_style {
            OutputStyle::Trimmed => trim_trailing_zeros(&fixed),
            OutputStyle::Fixed => fixed,
        }
    }
}

/// 기본 쌍 밖에 선언된 보조 단위. 어떤 기준 단위에 매달려 있는지 기록한다.
#[derive(Debug, Clone, Copy)]
pub struct AuxUnit {
    pub unit: &'static str,
    pub base: &'static str,
    pub kind: RuleKind,
}

/// 카테고리 하나의 전체 변환 테이블.
#[derive(Debug)]
pub struct CategoryTable {
    pub main: [UnitPairRule; 2],
    pub aux_units: &'static [AuxUnit],
    pub special: &'static [UnitPairRule],
    pub multi_hop: &'static [UnitPairRule],
}

impl CategoryTable {
    /// `unit`에서 출발하는 기본 쌍 항목.
    pub fn main_entry(&self, unit: &str) -> Option<&UnitPairRule> {
        self.main.iter().find(|r| r.from == unit)
    }

    pub fn find_special(&self, from: &str, to: &str) -> Option<&UnitPairRule> {
        find_rule(self.special, from, to)
    }

    pub fn find_multi_hop(&self, from: &str, to: &str) -> Option<&UnitPairRule> {
        find_rule(self.multi_hop, from, to)
    }

    /// 기본 쌍의 두 단위 (UI 기본 선택).
    pub fn main_units(&self) -> (&'static str, &'static str) {
        (self.main[0].from, self.main[0].to)
    }

    /// 테이블에 등장하는 모든 단위. 기본 쌍, 보조 단위, 규칙 순서로 중복 없이 모은다.
    pub fn units(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        let mut push = |u: &'static str| {
            if !out.contains(&u) {
                out.push(u);
            }
        };
        for r in &self.main {
            push(r.from);
        }
        for aux in self.aux_units {
            push(aux.unit);
        }
        for r in self.special.iter().chain(self.multi_hop) {
            push(r.from);
            push(r.to);
        }
        out
    }

    pub fn contains_unit(&self, unit: &str) -> bool {
        self.units().contains(&unit)
    }
}

fn find_rule<'a>(rules: &'a [UnitPairRule], from: &str, to: &str) -> Option<&'a UnitPairRule> {
    rules.iter().find(|r| r.from == from && r.to == to)
}
