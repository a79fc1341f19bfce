use super::{AuxUnit, CategoryTable, RuleKind, UnitPairRule};

const ACRE_SQM: f64 = 4046.86;
const SQM_PYEONG: f64 = 0.302506;

/// 면적 테이블. 기본 쌍은 ㎡ ↔ 평, 보조 단위로 에이커.
pub static TABLE: CategoryTable = CategoryTable {
    main: [
        UnitPairRule::main("sqm", "pyeong", RuleKind::Linear(SQM_PYEONG)),
        UnitPairRule::main("pyeong", "sqm", RuleKind::Linear(3.305785)),
    ],
    aux_units: &[AuxUnit {
        unit: "acre",
        base: "sqm",
        kind: RuleKind::Linear(ACRE_SQM),
    }],
    special: &[],
    multi_hop: &[
        UnitPairRule::fixed("acre", "pyeong", RuleKind::Formula(|v| v * ACRE_SQM * SQM_PYEONG), 1),
        UnitPairRule::fixed("pyeong", "acre", RuleKind::Formula(|v| v / ACRE_SQM / SQM_PYEONG), 6),
        UnitPairRule::fixed("acre", "sqm", RuleKind::Formula(|v| v * ACRE_SQM), 2),
        UnitPairRule::fixed("sqm", "acre", RuleKind::Formula(|v| v / ACRE_SQM), 6),
    ],
};
