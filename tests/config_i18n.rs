//! 설정 파일과 언어 선택 테스트.
use std::fs;

use unit_converter::advanced::advanced_conversions;
use unit_converter::category::Category;
use unit_converter::config::{load_or_default, Config};
use unit_converter::i18n::{keys, resolve_language, unit_from_label, Language, Translator};

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn partial_config_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = \"en\"\ndefault_category = \"speed\"\n").expect("write");

    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.default_category, Category::Speed);
    assert_eq!(
        cfg,
        Config {
            language: "en".into(),
            default_category: Category::Speed,
            ..Config::default()
        }
    );
}

#[test]
fn broken_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [").expect("write");
    assert!(load_or_default(&path).is_err());
}

#[test]
fn cli_language_beats_config() {
    assert_eq!(resolve_language(Some("en"), Some("ko")), "en");
    assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    assert_eq!(resolve_language(None, Some("ko_KR")), "ko");
}

#[test]
fn english_falls_back_to_korean_table() {
    let tr = Translator::new("en");
    assert_eq!(tr.language(), Language::En);
    assert_eq!(tr.t(keys::FAVORITES_SAVED), "Saved!");
    assert_eq!(Translator::new("xx").t(keys::FAVORITES_SAVED), "저장되었습니다!");
}

#[test]
fn language_pack_overrides_builtin_strings() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("ko.toml"),
        "[favorites]\nsaved = \"즐겨찾기 저장 완료\"\n\n[unit.pyeong]\nlabel = \"坪\"\n",
    )
    .expect("write");

    let tr = Translator::new_with_pack("ko", Some(dir.path()));
    assert_eq!(tr.t(keys::FAVORITES_SAVED), "즐겨찾기 저장 완료");
    assert_eq!(tr.unit_label("pyeong"), "坪");
    assert_eq!(tr.unit_label("sqm"), "㎡");
}

#[test]
fn unit_labels_map_back_to_ids() {
    assert_eq!(unit_from_label("평"), Some("pyeong"));
    assert_eq!(unit_from_label("km/h"), Some("kmh"));
    assert_eq!(unit_from_label("℃"), Some("c"));
    assert_eq!(unit_from_label("furlong"), None);
    assert_eq!(Translator::new("ko").unit_name("pyeong"), "평 (평)");
}

#[test]
fn category_names_parse_in_both_languages() {
    assert_eq!("온도".parse::<Category>(), Ok(Category::Temperature));
    assert_eq!("Speed".parse::<Category>(), Ok(Category::Speed));
    assert!("energy".parse::<Category>().is_err());
}

#[test]
fn advanced_catalog_examples() {
    let length = advanced_conversions(Category::Length);
    let yard = length.iter().find(|c| c.from == "yard").expect("yard");
    assert_eq!(yard.example(), "1 yard = 0.9144 m");
    assert_eq!(yard.describe("공식 기반"), "야드 (yard) ↔ 미터 (m) (0.9144)");

    let temp = advanced_conversions(Category::Temperature);
    assert_eq!(temp[0].example(), "1 c = 274.1500 k");
    assert_eq!(temp[0].describe("공식 기반"), "섭씨 (℃) ↔ 켈빈 (K) (공식 기반)");
    assert!(Category::ALL.iter().all(|c| !advanced_conversions(*c).is_empty()));
}
