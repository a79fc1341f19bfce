use super::{AuxUnit, CategoryTable, RuleKind, UnitPairRule};

const MS_KMH: f64 = 3.6;
const KMH_MPH: f64 = 0.621371;

/// 속도 테이블. 기본 쌍은 km/h ↔ mph, 보조 단위로 m/s.
pub static TABLE: CategoryTable = CategoryTable {
    main: [
        UnitPairRule::main("kmh", "mph", RuleKind::Linear(KMH_MPH)),
        UnitPairRule::main("mph", "kmh", RuleKind::Linear(1.60934)),
    ],
    aux_units: &[AuxUnit {
        unit: "ms",
        base: "kmh",
        kind: RuleKind::Linear(MS_KMH),
    }],
    special: &[],
    multi_hop: &[
        UnitPairRule::fixed("ms", "kmh", RuleKind::Formula(|v| v * MS_KMH), 2),
        UnitPairRule::fixed("kmh", "ms", RuleKind::Formula(|v| v / MS_KMH), 3),
        UnitPairRule::fixed("ms", "mph", RuleKind::Formula(|v| v * MS_KMH * KMH_MPH), 2),
        UnitPairRule::fixed("mph", "ms", RuleKind::Formula(|v| v / KMH_MPH / MS_KMH), 3),
    ],
};
