use log::debug;

use crate::category::Category;
use crate::format::parse_number;
use crate::units::UnitPairRule;

/// 어떤 단계의 규칙으로 변환이 결정되었는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    /// 카테고리 전용 비선형 규칙 (온도)
    Special,
    /// 기본 쌍 조회
    Main,
    /// 직접 나열된 다중 홉 규칙
    MultiHop,
}

/// 변환 결정 결과.
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    pub category: Category,
    pub path: ResolutionPath,
    pub rule: &'static UnitPairRule,
    /// 반올림 전 계산 값
    pub value: f64,
}

impl Resolution {
    /// 규칙의 자릿수와 출력 형식을 적용한 문자열.
    pub fn formatted(&self) -> String {
        self.rule.render(self.value)
    }
}

/// 두 단위 사이의 규칙을 찾는다.
///
/// 검사 순서는 특수 규칙 → 기본 쌍(정방향, 역방향) → 다중 홉이다. 기본 쌍
/// 역방향은 `to` 쪽에 선언된 항목의 규칙을 그대로 쓴다.
pub fn find_rule(
    from: &str,
    to: &str,
    category: Category,
) -> Option<(ResolutionPath, &'static UnitPairRule)> {
    let table = category.table();

    if let Some(rule) = table.find_special(from, to) {
        return Some((ResolutionPath::Special, rule));
    }

    if let Some(entry) = table.main_entry(from) {
        if entry.to == to {
            return Some((ResolutionPath::Main, entry));
        }
    }
    if let Some(entry) = table.main_entry(to) {
        if entry.to == from {
            return Some((ResolutionPath::Main, entry));
        }
    }

    table
        .find_multi_hop(from, to)
        .map(|rule| (ResolutionPath::MultiHop, rule))
}

/// 숫자 값을 변환한다. 규칙이 없으면 `None`.
pub fn resolve(value: f64, from: &str, to: &str, category: Category) -> Option<Resolution> {
    let (path, rule) = find_rule(from, to, category)?;
    Some(Resolution {
        category,
        path,
        rule,
        value: rule.apply(value),
    })
}

/// 입력 문자열을 변환해 표시용 문자열을 돌려준다.
///
/// 빈 입력, 숫자가 아닌 입력, 규칙이 없는 단위 쌍은 모두 빈 문자열이다.
pub fn convert(raw: &str, from: &str, to: &str, category: Category) -> String {
    let Some(value) = parse_number(raw) else {
        return String::new();
    };
    match resolve(value, from, to, category) {
        Some(resolution) => resolution.formatted(),
        None => {
            debug!("변환 규칙 없음: {category} {from} -> {to}");
            String::new()
        }
    }
}
