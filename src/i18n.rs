use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::category::Category;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const NO_RESULT: &str = "general.no_result";
    pub const EMPTY_LIST: &str = "general.empty_list";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_OPTIONS: &str = "main_menu.options";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PROMPT_CATEGORY: &str = "prompt.category";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_SIDE: &str = "prompt.side";
    pub const PROMPT_INDEX: &str = "prompt.index";
    pub const PROMPT_ID: &str = "prompt.id";

    pub const CONVERSION_RESULT: &str = "conversion.result";
    pub const CURRENT_ROW: &str = "conversion.current_row";
    pub const AVAILABLE_UNITS: &str = "conversion.available_units";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const HISTORY_OPTIONS: &str = "history.options";
    pub const HISTORY_CLEARED: &str = "history.cleared";
    pub const HISTORY_REMOVED: &str = "history.removed";

    pub const FAVORITES_HEADING: &str = "favorites.heading";
    pub const FAVORITES_OPTIONS: &str = "favorites.options";
    pub const FAVORITES_SAVED: &str = "favorites.saved";
    pub const FAVORITES_REMOVED: &str = "favorites.removed";

    pub const QUICK_HEADING: &str = "quick.heading";
    pub const QUICK_NOT_FOUND: &str = "quick.not_found";

    pub const ADVANCED_HEADING: &str = "advanced.heading";
    pub const ADVANCED_NONE: &str = "advanced.none";
    pub const ADVANCED_FORMULA: &str = "advanced.formula";
    pub const ADVANCED_EXAMPLE: &str = "advanced.example";

    pub const NOT_FOUND: &str = "error.not_found";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 메시지와 단위 표시 문자열을 제공한다. 변환 값에는 관여하지 않는다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: pack_dir.and_then(|dir| load_overrides(dir, lang_code)),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 메시지를 가져온다. 언어팩 → 해당 언어 → 한국어 순으로 찾는다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// 입력 칸 옆에 붙는 짧은 단위 표기 (예: `평`, `㎡`, `km/h`).
    pub fn unit_label<'a>(&'a self, unit: &'a str) -> &'a str {
        let key = format!("unit.{unit}.label");
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(&key)) {
            return v;
        }
        builtin_unit_label(self.lang, unit).unwrap_or(unit)
    }

    /// 즐겨찾기 등에 쓰는 긴 단위 이름 (예: `평 (pyeong)`).
    pub fn unit_name(&self, unit: &str) -> String {
        let key = format!("unit.{unit}.name");
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(&key)) {
            return v.clone();
        }
        match unit_names(unit) {
            Some((ko_name, en_name)) => match self.lang {
                Language::Ko => format!("{ko_name} ({})", self.unit_label(unit)),
                Language::En => format!("{en_name} ({})", self.unit_label(unit)),
            },
            None => unit.to_string(),
        }
    }

    pub fn category_name(&self, category: Category) -> &'static str {
        match (self.lang, category) {
            (Language::Ko, Category::Length) => "길이",
            (Language::Ko, Category::Weight) => "무게",
            (Language::Ko, Category::Temperature) => "온도",
            (Language::Ko, Category::Volume) => "부피",
            (Language::Ko, Category::Area) => "면적",
            (Language::Ko, Category::Speed) => "속도",
            (Language::En, Category::Length) => "Length",
            (Language::En, Category::Weight) => "Weight",
            (Language::En, Category::Temperature) => "Temperature",
            (Language::En, Category::Volume) => "Volume",
            (Language::En, Category::Area) => "Area",
            (Language::En, Category::Speed) => "Speed",
        }
    }
}

/// 화면 표기에서 단위 id를 찾는다. 한글/기호 표기와 영문 표기를 모두 받는다.
pub fn unit_from_label(label: &str) -> Option<&'static str> {
    let unit = match label.trim() {
        "평" | "pyeong" => "pyeong",
        "㎡" | "m²" | "sqm" => "sqm",
        "km" => "km",
        "m" => "m",
        "kg" => "kg",
        "lb" => "lb",
        "돈" | "don" => "don",
        "냥" | "nyang" => "nyang",
        "℃" | "°C" | "c" => "c",
        "℉" | "°F" | "f" => "f",
        "K" | "k" => "k",
        "L" | "l" => "l",
        "gal" => "gal",
        "되" | "doe" => "doe",
        "홉" | "hop" => "hop",
        "acre" => "acre",
        "km/h" | "kmh" => "kmh",
        "mph" => "mph",
        "m/s" | "ms" => "ms",
        _ => return None,
    };
    Some(unit)
}

fn builtin_unit_label(lang: Language, unit: &str) -> Option<&'static str> {
    let label = match (lang, unit) {
        (Language::Ko, "pyeong") => "평",
        (Language::Ko, "don") => "돈",
        (Language::Ko, "nyang") => "냥",
        (Language::Ko, "doe") => "되",
        (Language::Ko, "hop") => "홉",
        (Language::En, "pyeong") => "pyeong",
        (Language::En, "don") => "don",
        (Language::En, "nyang") => "nyang",
        (Language::En, "doe") => "doe",
        (Language::En, "hop") => "hop",
        (_, "sqm") => "㎡",
        (_, "m") => "m",
        (_, "km") => "km",
        (_, "kg") => "kg",
        (_, "lb") => "lb",
        (_, "c") => "℃",
        (_, "f") => "℉",
        (_, "k") => "K",
        (_, "l") => "L",
        (_, "gal") => "gal",
        (_, "acre") => "acre",
        (_, "kmh") => "km/h",
        (_, "mph") => "mph",
        (_, "ms") => "m/s",
        _ => return None,
    };
    Some(label)
}

fn unit_names(unit: &str) -> Option<(&'static str, &'static str)> {
    Some(match unit {
        "m" => ("미터", "Meter"),
        "km" => ("킬로미터", "Kilometer"),
        "pyeong" => ("평", "Pyeong"),
        "sqm" => ("제곱미터", "Square meter"),
        "acre" => ("에이커", "Acre"),
        "kg" => ("킬로그램", "Kilogram"),
        "lb" => ("파운드", "Pound"),
        "don" => ("돈", "Don"),
        "nyang" => ("냥", "Nyang"),
        "c" => ("섭씨", "Celsius"),
        "f" => ("화씨", "Fahrenheit"),
        "k" => ("켈빈", "Kelvin"),
        "l" => ("리터", "Liter"),
        "gal" => ("갤런", "Gallon"),
        "doe" => ("되", "Doe"),
        "hop" => ("홉", "Hop"),
        "kmh" => ("시간당 킬로미터", "Kilometers per hour"),
        "mph" => ("시간당 마일", "Miles per hour"),
        "ms" => ("초당 미터", "Meters per second"),
        _ => return None,
    })
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let content = fs::read_to_string(dir.join(format!("{code}.toml"))).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        NO_RESULT => "변환 결과가 없습니다.",
        EMPTY_LIST => "항목이 없습니다.",
        MAIN_MENU_TITLE => "\n=== 단위 변환기 ===",
        MAIN_MENU_OPTIONS => {
            "1) 값 입력  2) 단위 선택  3) 카테고리 변경  4) 값 바꾸기\n5) 기록  6) 즐겨찾기  7) 빠른 변환  8) 고급 변환  0) 종료"
        }
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_CATEGORY => "카테고리 (length/weight/temperature/volume/area/speed): ",
        PROMPT_FROM_UNIT => "첫 번째 칸 단위: ",
        PROMPT_TO_UNIT => "두 번째 칸 단위: ",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_SIDE => "입력할 칸 (1/2): ",
        PROMPT_INDEX => "번호: ",
        PROMPT_ID => "삭제할 id: ",
        CONVERSION_RESULT => "변환 결과:",
        CURRENT_ROW => "현재 입력:",
        AVAILABLE_UNITS => "사용 가능한 단위:",
        HISTORY_HEADING => "\n-- 변환 기록 --",
        HISTORY_OPTIONS => "1) 항목 삭제  2) 전체 삭제  엔터) 돌아가기",
        HISTORY_CLEARED => "모든 기록을 삭제했습니다.",
        HISTORY_REMOVED => "기록을 삭제했습니다.",
        FAVORITES_HEADING => "\n-- 즐겨찾기 --",
        FAVORITES_OPTIONS => "1) 현재 입력 저장  2) 항목 삭제  엔터) 돌아가기",
        FAVORITES_SAVED => "저장되었습니다!",
        FAVORITES_REMOVED => "즐겨찾기를 삭제했습니다.",
        QUICK_HEADING => "\n-- 빠른 변환 --",
        QUICK_NOT_FOUND => "해당 번호의 빠른 변환이 없습니다.",
        ADVANCED_HEADING => "\n-- 고급 변환 --",
        ADVANCED_NONE => "고급 변환 옵션이 없습니다.",
        ADVANCED_FORMULA => "공식 기반",
        ADVANCED_EXAMPLE => "예:",
        NOT_FOUND => "해당 id를 찾을 수 없습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        NO_RESULT => "No conversion result.",
        EMPTY_LIST => "No entries.",
        MAIN_MENU_TITLE => "\n=== Unit Converter ===",
        MAIN_MENU_OPTIONS => {
            "1) Enter value  2) Select units  3) Change category  4) Swap values\n5) History  6) Favorites  7) Quick conversions  8) Advanced  0) Exit"
        }
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROMPT_CATEGORY => "Category (length/weight/temperature/volume/area/speed): ",
        PROMPT_FROM_UNIT => "First field unit: ",
        PROMPT_TO_UNIT => "Second field unit: ",
        PROMPT_VALUE => "Value: ",
        PROMPT_SIDE => "Field to edit (1/2): ",
        PROMPT_INDEX => "Number: ",
        PROMPT_ID => "Id to delete: ",
        CONVERSION_RESULT => "Result:",
        CURRENT_ROW => "Current fields:",
        AVAILABLE_UNITS => "Available units:",
        HISTORY_HEADING => "\n-- History --",
        HISTORY_OPTIONS => "1) Delete entry  2) Clear all  enter) Back",
        HISTORY_CLEARED => "History cleared.",
        HISTORY_REMOVED => "Entry deleted.",
        FAVORITES_HEADING => "\n-- Favorites --",
        FAVORITES_OPTIONS => "1) Save current fields  2) Delete entry  enter) Back",
        FAVORITES_SAVED => "Saved!",
        FAVORITES_REMOVED => "Favorite deleted.",
        QUICK_HEADING => "\n-- Quick conversions --",
        QUICK_NOT_FOUND => "No quick conversion at that number.",
        ADVANCED_HEADING => "\n-- Advanced conversions --",
        ADVANCED_NONE => "No advanced conversions for this category.",
        ADVANCED_FORMULA => "formula",
        ADVANCED_EXAMPLE => "e.g.",
        NOT_FOUND => "No entry with that id.",
        _ => return None,
    })
}
