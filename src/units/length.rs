use super::{CategoryTable, RuleKind, UnitPairRule};

/// 1평 = 3.305785 m². 길이 탭에서도 평 입력을 받는다.
const PYEONG: f64 = 3.305785;

/// 길이 테이블. 기본 쌍은 m ↔ km.
pub static TABLE: CategoryTable = CategoryTable {
    main: [
        UnitPairRule::main("m", "km", RuleKind::Linear(0.001)),
        UnitPairRule::main("km", "m", RuleKind::Linear(1000.0)),
    ],
    aux_units: &[],
    special: &[],
    multi_hop: &[
        UnitPairRule::fixed("pyeong", "km", RuleKind::Formula(|v| v * PYEONG / 1_000_000.0), 6),
        UnitPairRule::fixed("km", "pyeong", RuleKind::Formula(|v| v * 1_000_000.0 / PYEONG), 2),
        UnitPairRule::fixed("pyeong", "m", RuleKind::Formula(|v| v * PYEONG), 2),
        UnitPairRule::fixed("m", "pyeong", RuleKind::Formula(|v| v / PYEONG), 4),
        // 아래 두 규칙은 기본 쌍이 먼저 잡으므로 실제로는 도달하지 않는다.
        UnitPairRule::fixed("km", "m", RuleKind::Formula(|v| v * 1000.0), 2),
        UnitPairRule::fixed("m", "km", RuleKind::Formula(|v| v / 1000.0), 6),
    ],
};
