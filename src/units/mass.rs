use super::{AuxUnit, CategoryTable, RuleKind, UnitPairRule};

/// 1돈 = 3.75 g
const DON_KG: f64 = 0.00375;
/// 1냥 = 37.5 g
const NYANG_KG: f64 = 0.0375;
const KG_LB: f64 = 2.20462;

/// 무게 테이블. 기본 쌍은 kg ↔ lb, 보조 단위로 돈/냥.
///
/// kg→lb와 lb→kg 배율은 서로의 역수가 아니라 각각 따로 선언된 값이다.
pub static TABLE: CategoryTable = CategoryTable {
    main: [
        UnitPairRule::main("kg", "lb", RuleKind::Linear(KG_LB)),
        UnitPairRule::main("lb", "kg", RuleKind::Linear(0.453592)),
    ],
    aux_units: &[
        AuxUnit {
            unit: "don",
            base: "kg",
            kind: RuleKind::Linear(DON_KG),
        },
        AuxUnit {
            unit: "nyang",
            base: "kg",
            kind: RuleKind::Linear(NYANG_KG),
        },
    ],
    special: &[],
    multi_hop: &[
        UnitPairRule::fixed("don", "nyang", RuleKind::Formula(|v| v / 10.0), 2),
        UnitPairRule::fixed("nyang", "don", RuleKind::Formula(|v| v * 10.0), 2),
        UnitPairRule::fixed("don", "kg", RuleKind::Formula(|v| v * DON_KG), 4),
        UnitPairRule::fixed("kg", "don", RuleKind::Formula(|v| v / DON_KG), 1),
        UnitPairRule::fixed("nyang", "kg", RuleKind::Formula(|v| v * NYANG_KG), 4),
        UnitPairRule::fixed("kg", "nyang", RuleKind::Formula(|v| v / NYANG_KG), 2),
        UnitPairRule::fixed("don", "lb", RuleKind::Formula(|v| v * DON_KG * KG_LB), 3),
        UnitPairRule::fixed("lb", "don", RuleKind::Formula(|v| v / KG_LB / DON_KG), 1),
    ],
};
