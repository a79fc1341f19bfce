use super::{AuxUnit, CategoryTable, RuleKind, UnitPairRule};

/// 1되 ≈ 18.039 L
const DOE_L: f64 = 18.039;
/// 1홉 ≈ 1.8039 L
const HOP_L: f64 = 1.8039;
const L_GAL: f64 = 0.264172;

/// 부피 테이블. 기본 쌍은 L ↔ gal, 보조 단위로 되/홉.
pub static TABLE: CategoryTable = CategoryTable {
    main: [
        UnitPairRule::main("l", "gal", RuleKind::Linear(L_GAL)),
        UnitPairRule::main("gal", "l", RuleKind::Linear(3.78541)),
    ],
    aux_units: &[
        AuxUnit {
            unit: "doe",
            base: "l",
            kind: RuleKind::Linear(DOE_L),
        },
        AuxUnit {
            unit: "hop",
            base: "l",
            kind: RuleKind::Linear(HOP_L),
        },
    ],
    special: &[],
    multi_hop: &[
        UnitPairRule::fixed("doe", "hop", RuleKind::Formula(|v| v * 10.0), 2),
        UnitPairRule::fixed("hop", "doe", RuleKind::Formula(|v| v / 10.0), 2),
        UnitPairRule::fixed("doe", "l", RuleKind::Formula(|v| v * DOE_L), 2),
        UnitPairRule::fixed("l", "doe", RuleKind::Formula(|v| v / DOE_L), 3),
        UnitPairRule::fixed("hop", "l", RuleKind::Formula(|v| v * HOP_L), 3),
        UnitPairRule::fixed("l", "hop", RuleKind::Formula(|v| v / HOP_L), 2),
        UnitPairRule::fixed("doe", "gal", RuleKind::Formula(|v| v * DOE_L * L_GAL), 2),
        UnitPairRule::fixed("gal", "doe", RuleKind::Formula(|v| v / DOE_L / L_GAL), 3),
    ],
};
