//! 대화형 모드 입력 처리 테스트. 표준 입력 대신 메모리 버퍼를 넣는다.
use std::io::{Cursor, ErrorKind};

use unit_converter::app::AppError;
use unit_converter::category::Category;
use unit_converter::i18n::Translator;
use unit_converter::session::{ConverterSession, Side};
use unit_converter::store::{MemoryStorage, Store};
use unit_converter::ui_cli::{aux_line, interactive_with, main_menu, read_line, MenuChoice};

fn session(category: Category) -> ConverterSession<MemoryStorage> {
    ConverterSession::new(
        Store::open(MemoryStorage::new()),
        Translator::new("ko"),
        category,
    )
}

#[test]
fn read_line_reports_end_of_input() {
    let mut input = Cursor::new("");
    match read_line(&mut input, "> ") {
        Err(AppError::Io(err)) => assert_eq!(err.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected eof, got {other:?}"),
    }

    let mut input = Cursor::new("3\n");
    assert_eq!(read_line(&mut input, "> ").expect("line"), "3\n");
}

#[test]
fn menu_exits_when_input_ends() {
    let tr = Translator::new("ko");
    let mut input = Cursor::new("9\nabc\n");
    assert_eq!(main_menu(&tr, &mut input).expect("menu"), MenuChoice::Exit);
}

#[test]
fn empty_stdin_ends_interactive_mode() {
    let mut s = session(Category::Length);
    interactive_with(&mut s, &mut Cursor::new("")).expect("interactive");
    assert_eq!(s.store().storage().save_count(), 1);
}

#[test]
fn input_ending_inside_a_prompt_still_exits() {
    let mut s = session(Category::Length);
    // 카테고리 입력 도중 입력이 끝난다.
    interactive_with(&mut s, &mut Cursor::new("3\nenergy\n")).expect("interactive");
    assert_eq!(s.category(), Category::Length);
}

#[test]
fn scripted_session_converts_and_exits() {
    let mut s = session(Category::Length);
    let script = "1\n1\n5\n3\nweight\n1\n2\n10\n0\n";
    interactive_with(&mut s, &mut Cursor::new(script)).expect("interactive");

    assert_eq!(s.category(), Category::Weight);
    assert_eq!(s.field(Side::Second).value, "10");
    assert_eq!(s.field(Side::First).value, "4.5359");
    assert_eq!(s.store().history().len(), 2);
}

#[test]
fn aux_units_show_base_factor() {
    let tr = Translator::new("ko");
    let mass = Category::Weight.table();
    assert_eq!(aux_line(&tr, &mass.aux_units[0]), "  - don: 돈 (돈) (1 = 0.00375 kg)");

    let temp = Category::Temperature.table();
    assert_eq!(aux_line(&tr, &temp.aux_units[0]), "  - k: 켈빈 (K) (공식 기반, ℃)");
}
