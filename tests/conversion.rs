//! 카테고리별 변환 규칙 회귀 테스트. 값은 저장된 기록과 같은 문자열이 나와야 한다.
use unit_converter::category::Category;
use unit_converter::conversion::{convert, find_rule, resolve, ResolutionPath};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn main_pair_uses_declared_factors() {
    assert_eq!(convert("1", "m", "km", Category::Length), "0.001");
    assert_eq!(convert("1", "km", "m", Category::Length), "1000");
    assert_eq!(convert("1", "kg", "lb", Category::Weight), "2.2046");
    assert_eq!(convert("1", "lb", "kg", Category::Weight), "0.4536");
    assert_eq!(convert("2", "gal", "l", Category::Volume), "7.5708");
    assert_eq!(convert("10", "sqm", "pyeong", Category::Area), "3.0251");
    assert_eq!(convert("1", "mph", "kmh", Category::Speed), "1.6093");
}

#[test]
fn every_main_direction_follows_its_declared_rule() {
    for category in Category::ALL {
        for rule in &category.table().main {
            for x in [1.0, 2.5, 100.0, -7.25] {
                let res = resolve(x, rule.from, rule.to, category)
                    .unwrap_or_else(|| panic!("{category} {}->{}", rule.from, rule.to));
                let label = format!("{category} {}->{} x={x}", rule.from, rule.to);
                assert_close(&label, res.value, rule.kind.apply(x), 1e-12);
                if let Some(factor) = rule.kind.factor() {
                    assert_eq!(res.path, ResolutionPath::Main, "{label}");
                    assert!(std::ptr::eq(res.rule, rule), "{label}");
                    assert_close(&label, res.value, x * factor, 1e-12);
                }
            }
        }
    }
}

#[test]
fn main_pair_round_trip_is_not_reciprocal() {
    // kg→lb→kg 배율 곱은 정확히 1이 아니다.
    let there = resolve(1.0, "kg", "lb", Category::Weight).expect("kg->lb");
    let back = resolve(there.value, "lb", "kg", Category::Weight).expect("lb->kg");
    assert_close("kg->lb", there.value, 2.20462, 1e-12);
    assert_close("round trip", back.value, 2.20462 * 0.453592, 1e-12);
    assert!(back.value != 1.0);
}

#[test]
fn temperature_uses_fixed_two_digits() {
    assert_eq!(convert("0", "c", "f", Category::Temperature), "32.00");
    assert_eq!(convert("100", "c", "f", Category::Temperature), "212.00");
    assert_eq!(convert("37", "c", "f", Category::Temperature), "98.60");
    assert_eq!(convert("100", "f", "c", Category::Temperature), "37.78");
    assert_eq!(convert("-40", "c", "f", Category::Temperature), "-40.00");
    assert_eq!(convert("0", "c", "k", Category::Temperature), "273.15");
    assert_eq!(convert("300", "k", "c", Category::Temperature), "26.85");
}

#[test]
fn kelvin_fahrenheit_has_no_rule() {
    assert_eq!(convert("300", "k", "f", Category::Temperature), "");
    assert_eq!(convert("32", "f", "k", Category::Temperature), "");
}

#[test]
fn special_rule_wins_over_main_pair() {
    let (path, rule) = find_rule("c", "f", Category::Temperature).expect("c->f");
    assert_eq!(path, ResolutionPath::Special);
    assert_eq!(rule.rounding_digits, 2);
}

#[test]
fn main_pair_shadows_length_multi_hop() {
    let (path, _) = find_rule("km", "m", Category::Length).expect("km->m");
    assert_eq!(path, ResolutionPath::Main);
    assert_eq!(convert("1", "km", "m", Category::Length), "1000");
    assert_eq!(convert("1", "m", "km", Category::Length), "0.001");
}

#[test]
fn pyeong_on_length_tab() {
    assert_eq!(convert("1", "pyeong", "m", Category::Length), "3.31");
    assert_eq!(convert("1000", "pyeong", "km", Category::Length), "0.003306");
    let (path, _) = find_rule("pyeong", "m", Category::Length).expect("pyeong->m");
    assert_eq!(path, ResolutionPath::MultiHop);
}

#[test]
fn weight_multi_hop() {
    assert_eq!(convert("10", "don", "nyang", Category::Weight), "1.00");
    assert_eq!(convert("1", "nyang", "don", Category::Weight), "10.00");
    assert_eq!(convert("1", "kg", "don", Category::Weight), "266.7");
    assert_eq!(convert("1", "lb", "don", Category::Weight), "121.0");
    assert_eq!(convert("1", "don", "lb", Category::Weight), "0.008");
}

#[test]
fn volume_multi_hop() {
    assert_eq!(convert("1", "doe", "hop", Category::Volume), "10.00");
    assert_eq!(convert("10", "l", "hop", Category::Volume), "5.54");
    assert_eq!(convert("1", "doe", "gal", Category::Volume), "4.77");
}

#[test]
fn area_multi_hop() {
    assert_eq!(convert("1", "acre", "sqm", Category::Area), "4046.86");
    assert_eq!(convert("1", "acre", "pyeong", Category::Area), "1224.2");
}

#[test]
fn speed_multi_hop() {
    assert_eq!(convert("36", "kmh", "ms", Category::Speed), "10.000");
    assert_eq!(convert("10", "ms", "mph", Category::Speed), "22.37");
    assert_eq!(convert("1", "mph", "ms", Category::Speed), "0.447");
}

#[test]
fn invalid_input_yields_empty_string() {
    assert_eq!(convert("", "m", "km", Category::Length), "");
    assert_eq!(convert("abc", "m", "km", Category::Length), "");
    assert_eq!(convert("1", "m", "mile", Category::Length), "");
    assert_eq!(convert("1", "kg", "lb", Category::Length), "");
}

#[test]
fn numeric_prefix_is_accepted() {
    assert_eq!(convert("12abc", "m", "km", Category::Length), "0.012");
    assert_eq!(convert(" 1e3", "m", "km", Category::Length), "1");
}

#[test]
fn non_ascii_digits_end_the_numeric_prefix() {
    assert_eq!(convert("1\u{0663}", "m", "km", Category::Length), "0.001");
    assert_eq!(convert("\u{0663}", "m", "km", Category::Length), "");
}

#[test]
fn every_category_has_its_main_pair() {
    for category in Category::ALL {
        let (a, b) = category.table().main_units();
        assert!(find_rule(a, b, category).is_some(), "{category} {a}->{b}");
        assert!(find_rule(b, a, category).is_some(), "{category} {b}->{a}");
    }
}
