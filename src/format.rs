//! 숫자 파싱과 출력 형식.
//!
//! 저장된 기록과 호환되도록 고정 소수점 반올림은 "정확한 십진 전개 기준,
//! 절반 이상이면 0에서 먼 쪽으로" 규칙을 따른다. 표준 `{:.N}` 포맷은 정확히
//! 절반인 경우 짝수 쪽으로 반올림하므로 그대로 쓸 수 없다.

use once_cell::sync::Lazy;
use regex::Regex;

/// f64의 정확한 십진 전개에 필요한 최대 소수 자릿수(최소 서브노멀 1074자리)보다 넉넉한 값.
const EXACT_DIGITS: usize = 1100;
const MAX_FIXED_DIGITS: usize = 100;

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("valid numeric regex")
});

/// 입력 문자열 앞부분의 숫자를 읽는다.
///
/// 앞 공백은 무시하고 가장 긴 숫자 접두사만 사용한다(`"12abc"` → 12).
/// 숫자가 없거나 유한하지 않으면 `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let caps = NUMERIC_PREFIX.captures(raw)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    value.is_finite().then_some(value)
}

/// `digits` 자리 고정 소수점 문자열.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let digits = digits.min(MAX_FIXED_DIGITS);
    let negative = value < 0.0;

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&b| b >= b'5');
    if round_up && carry(&mut kept) {
        kept.insert(0, 1);
        int_len += 1;
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if negative {
        out.push('-');
    }
    for (i, d) in kept.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

/// 끝자리부터 1을 더한다. 맨 앞자리까지 넘치면 true.
fn carry(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

/// 소수부의 꼬리 0과 남는 소수점을 제거한다. 소수점이 없으면 그대로 둔다.
pub fn trim_trailing_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// 가장 짧은 십진 표현으로 정규화한다. 파싱에 실패하면 빈 문자열.
pub fn format_number(raw: &str) -> String {
    match parse_number(raw) {
        Some(value) => format_value(value),
        None => String::new(),
    }
}

/// 숫자 값을 표시용 최단 표현으로 바꾼다. `-0`은 `0`으로 쓴다.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    trim_trailing_zeros(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
    }

    #[test]
    fn binary_representation_decides_near_ties() {
        // 1.005와 1.45는 이진수로 절반보다 조금 작다.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(1.45, 1), "1.4");
    }

    #[test]
    fn carry_extends_integer_part() {
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(99.96, 1), "100.0");
    }

    #[test]
    fn small_negative_keeps_sign() {
        assert_eq!(to_fixed(-0.0001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn zero_digits_has_no_point() {
        assert_eq!(to_fixed(1234.4, 0), "1234");
    }

    #[test]
    fn parse_number_reads_prefix() {
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number("  .5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("1e"), Some(1.0));
        assert_eq!(parse_number("-3.25"), Some(-3.25));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1e400"), None);
        assert_eq!(parse_number("2\u{0663}"), Some(2.0));
        assert_eq!(parse_number("\u{0661}"), None);
    }

    #[test]
    fn trim_leaves_integers_alone() {
        assert_eq!(trim_trailing_zeros("100"), "100");
        assert_eq!(trim_trailing_zeros("100.0000"), "100");
        assert_eq!(trim_trailing_zeros("0.5000"), "0.5");
    }
}
