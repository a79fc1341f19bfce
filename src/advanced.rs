//! 고급 변환 안내 목록. 참고용 정보이며 `convert` 규칙에는 포함되지 않는다.

use crate::category::Category;
use crate::format::{format_value, to_fixed};
use crate::units::RuleKind;

/// 안내용 단위 쌍 하나.
#[derive(Debug, Clone, Copy)]
pub struct AdvancedConversion {
    pub from: &'static str,
    pub from_label: &'static str,
    pub to: &'static str,
    pub to_label: &'static str,
    pub kind: RuleKind,
}

impl AdvancedConversion {
    const fn linear(
        from: &'static str,
        from_label: &'static str,
        to: &'static str,
        to_label: &'static str,
        factor: f64,
    ) -> Self {
        Self {
            from,
            from_label,
            to,
            to_label,
            kind: RuleKind::Linear(factor),
        }
    }

    /// `"야드 (yard) ↔ 미터 (m) (0.9144)"`. 공식 기반이면 배율 대신 `formula_word`.
    pub fn describe(&self, formula_word: &str) -> String {
        let detail = match self.kind.factor() {
            Some(factor) => format_value(factor),
            None => formula_word.to_string(),
        };
        format!("{} ↔ {} ({detail})", self.from_label, self.to_label)
    }

    /// `"1 yard = 0.9144 m"`
    pub fn example(&self) -> String {
        format!("1 {} = {} {}", self.from, to_fixed(self.kind.apply(1.0), 4), self.to)
    }
}

static LENGTH: &[AdvancedConversion] = &[
    AdvancedConversion::linear("nm", "나노미터 (nm)", "μm", "마이크로미터 (μm)", 0.001),
    AdvancedConversion::linear("mm", "밀리미터 (mm)", "inch", "인치 (inch)", 0.0393701),
    AdvancedConversion::linear("yard", "야드 (yard)", "m", "미터 (m)", 0.9144),
    AdvancedConversion::linear("mile", "마일 (mile)", "km", "킬로미터 (km)", 1.60934),
];

static WEIGHT: &[AdvancedConversion] = &[
    AdvancedConversion::linear("g", "그램 (g)", "oz", "온스 (oz)", 0.035274),
    AdvancedConversion::linear("mg", "밀리그램 (mg)", "g", "그램 (g)", 0.001),
    AdvancedConversion::linear("ton", "톤 (ton)", "kg", "킬로그램 (kg)", 1000.0),
    AdvancedConversion::linear("stone", "스톤 (stone)", "kg", "킬로그램 (kg)", 6.35029),
];

static TEMPERATURE: &[AdvancedConversion] = &[
    AdvancedConversion {
        from: "c",
        from_label: "섭씨 (℃)",
        to: "k",
        to_label: "켈빈 (K)",
        kind: RuleKind::Formula(|c| c + 273.15),
    },
    AdvancedConversion {
        from: "f",
        from_label: "화씨 (℉)",
        to: "k",
        to_label: "켈빈 (K)",
        kind: RuleKind::Formula(|f| (f - 32.0) * 5.0 / 9.0 + 273.15),
    },
];

static VOLUME: &[AdvancedConversion] = &[
    AdvancedConversion::linear("ml", "밀리리터 (ml)", "fl-oz", "액량 온스 (fl oz)", 0.033814),
    AdvancedConversion::linear("cup", "컵 (cup)", "ml", "밀리리터 (ml)", 236.588),
    AdvancedConversion::linear("pint", "파인트 (pint)", "l", "리터 (L)", 0.473176),
    AdvancedConversion::linear("barrel", "배럴 (barrel)", "l", "리터 (L)", 158.987),
];

static AREA: &[AdvancedConversion] = &[
    AdvancedConversion::linear("sqcm", "제곱센티미터 (㎠)", "sqinch", "제곱인치 (in²)", 0.1550),
    AdvancedConversion::linear("sqfoot", "제곱피트 (ft²)", "sqm", "제곱미터 (㎡)", 0.092903),
    AdvancedConversion::linear("hectare", "헥타르 (ha)", "acre", "에이커 (acre)", 2.47105),
];

static SPEED: &[AdvancedConversion] = &[
    AdvancedConversion::linear("knot", "노트 (knot)", "kmh", "시간당 킬로미터 (km/h)", 1.852),
    AdvancedConversion::linear("fts", "초당 피트 (ft/s)", "ms", "초당 미터 (m/s)", 0.3048),
];

/// 카테고리의 고급 변환 목록.
pub fn advanced_conversions(category: Category) -> &'static [AdvancedConversion] {
    match category {
        Category::Length => LENGTH,
        Category::Weight => WEIGHT,
        Category::Temperature => TEMPERATURE,
        Category::Volume => VOLUME,
        Category::Area => AREA,
        Category::Speed => SPEED,
    }
}
