use super::{AuxUnit, CategoryTable, RuleKind, UnitPairRule};

const KELVIN_OFFSET: f64 = 273.15;

fn c_to_f(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn f_to_c(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// 온도 테이블. 기본 쌍은 ℃ ↔ ℉ (공식 기반), 보조 단위로 K.
///
/// 특수 규칙이 기본 쌍보다 먼저 검사되므로 c/f 변환은 항상 소수 둘째 자리
/// 고정 문자열로 나온다.
pub static TABLE: CategoryTable = CategoryTable {
    main: [
        UnitPairRule::main("c", "f", RuleKind::Formula(c_to_f)),
        UnitPairRule::main("f", "c", RuleKind::Formula(f_to_c)),
    ],
    aux_units: &[AuxUnit {
        unit: "k",
        base: "c",
        kind: RuleKind::Formula(|k| k - KELVIN_OFFSET),
    }],
    special: &[
        UnitPairRule::fixed("c", "f", RuleKind::Formula(c_to_f), 2),
        UnitPairRule::fixed("f", "c", RuleKind::Formula(f_to_c), 2),
        UnitPairRule::fixed("c", "k", RuleKind::Formula(|c| c + KELVIN_OFFSET), 2),
        UnitPairRule::fixed("k", "c", RuleKind::Formula(|k| k - KELVIN_OFFSET), 2),
    ],
    multi_hop: &[],
};
