use std::io::{self, BufRead, Write};

use crate::advanced::advanced_conversions;
use crate::app::AppError;
use crate::category::Category;
use crate::favorites::FavoriteEntry;
use crate::format::format_value;
use crate::history::HistoryEntry;
use crate::i18n::{keys, unit_from_label, Translator};
use crate::id::EntryId;
use crate::quick::QuickConversionEntry;
use crate::session::{ConverterSession, Side};
use crate::store::Storage;
use crate::units::{AuxUnit, RuleKind};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Input,
    SelectUnits,
    SwitchCategory,
    Swap,
    History,
    Favorites,
    Quick,
    Advanced,
    Exit,
}

/// 표준 입력으로 대화형 모드를 실행한다.
pub fn interactive<S: Storage>(session: &mut ConverterSession<S>) -> Result<(), AppError> {
    interactive_with(session, &mut io::stdin().lock())
}

/// 대화형 모드의 메인 루프. 입력이 끝나면(EOF) 저장 후 종료한다.
pub fn interactive_with<S: Storage, R: BufRead>(
    session: &mut ConverterSession<S>,
    input: &mut R,
) -> Result<(), AppError> {
    loop {
        print_row(session);
        let step = match main_menu(session.translator(), input) {
            Ok(MenuChoice::Input) => handle_input(session, input),
            Ok(MenuChoice::SelectUnits) => handle_select_units(session, input),
            Ok(MenuChoice::SwitchCategory) => handle_switch_category(session, input),
            Ok(MenuChoice::Swap) => {
                session.swap();
                Ok(())
            }
            Ok(MenuChoice::History) => handle_history(session, input),
            Ok(MenuChoice::Favorites) => handle_favorites(session, input),
            Ok(MenuChoice::Quick) => handle_quick(session, input),
            Ok(MenuChoice::Advanced) => {
                print_advanced(session.translator(), session.category());
                Ok(())
            }
            Ok(MenuChoice::Exit) => break,
            Err(err) => Err(err),
        };
        match step {
            Ok(()) => {}
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err),
        }
    }
    session.store_mut().flush()?;
    println!("{}", session.translator().t(keys::APP_EXIT));
    Ok(())
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 `Exit`.
pub fn main_menu<R: BufRead>(tr: &Translator, input: &mut R) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_OPTIONS));
    loop {
        let sel = match read_line(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit);
            }
            Err(err) => return Err(err),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Input),
            "2" => return Ok(MenuChoice::SelectUnits),
            "3" => return Ok(MenuChoice::SwitchCategory),
            "4" => return Ok(MenuChoice::Swap),
            "5" => return Ok(MenuChoice::History),
            "6" => return Ok(MenuChoice::Favorites),
            "7" => return Ok(MenuChoice::Quick),
            "8" => return Ok(MenuChoice::Advanced),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn handle_input<S: Storage, R: BufRead>(
    session: &mut ConverterSession<S>,
    input: &mut R,
) -> Result<(), AppError> {
    let tr = session.translator().clone();
    let side = match read_line(input, tr.t(keys::PROMPT_SIDE))?.trim() {
        "2" => Side::Second,
        _ => Side::First,
    };
    let value = read_line(input, tr.t(keys::PROMPT_VALUE))?;
    let result = session.input(side, value.trim());
    if result.is_empty() && !value.trim().is_empty() {
        println!("{}", tr.t(keys::NO_RESULT));
    }
    Ok(())
}

fn handle_select_units<S: Storage, R: BufRead>(
    session: &mut ConverterSession<S>,
    input: &mut R,
) -> Result<(), AppError> {
    let tr = session.translator().clone();
    print_units(&tr, session.category());
    let first = read_line(input, tr.t(keys::PROMPT_FROM_UNIT))?;
    let second = read_line(input, tr.t(keys::PROMPT_TO_UNIT))?;
    session.set_units(&unit_id(&first), &unit_id(&second));
    Ok(())
}

fn handle_switch_category<S: Storage, R: BufRead>(
    session: &mut ConverterSession<S>,
    input: &mut R,
) -> Result<(), AppError> {
    let tr = session.translator().clone();
    loop {
        let sel = read_line(input, tr.t(keys::PROMPT_CATEGORY))?;
        match sel.trim().parse::<Category>() {
            Ok(category) => {
                session.switch_category(category);
                return Ok(());
            }
            Err(err) => println!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
        }
    }
}

fn handle_history<S: Storage, R: BufRead>(
    session: &mut ConverterSession<S>,
    input: &mut R,
) -> Result<(), AppError> {
    let tr = session.translator().clone();
    println!("{}", tr.t(keys::HISTORY_HEADING));
    print_history(&tr, session.store().history());
    println!("{}", tr.t(keys::HISTORY_OPTIONS));
    match read_line(input, tr.t(keys::PROMPT_MENU_SELECT))?.trim() {
        "1" => {
            if let Some(id) = read_id(&tr, input)? {
                let before = session.store().history().len();
                let after = session.store_mut().remove_history(id).len();
                let key = if after < before {
                    keys::HISTORY_REMOVED
                } else {
                    keys::NOT_FOUND
                };
                println!("{}", tr.t(key));
            }
        }
        "2" => {
            session.store_mut().clear_history();
            println!("{}", tr.t(keys::HISTORY_CLEARED));
        }
        _ => {}
    }
    Ok(())
}

fn handle_favorites<S: Storage, R: BufRead>(
    session: &mut ConverterSession<S>,
    input: &mut R,
) -> Result<(), AppError> {
    let tr = session.translator().clone();
    println!("{}", tr.t(keys::FAVORITES_HEADING));
    print_favorites(&tr, session.store().favorites());
    println!("{}", tr.t(keys::FAVORITES_OPTIONS));
    match read_line(input, tr.t(keys::PROMPT_MENU_SELECT))?.trim() {
        "1" => match session.save_favorite() {
            Ok(_) => println!("{}", tr.t(keys::FAVORITES_SAVED)),
            Err(err) => println!("{err}"),
        },
        "2" => {
            if let Some(id) = read_id(&tr, input)? {
                let before = session.store().favorites().len();
                let after = session.store_mut().remove_favorite(id).len();
                let key = if after < before {
                    keys::FAVORITES_REMOVED
                } else {
                    keys::NOT_FOUND
                };
                println!("{}", tr.t(key));
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_quick<S: Storage, R: BufRead>(
    session: &mut ConverterSession<S>,
    input: &mut R,
) -> Result<(), AppError> {
    let tr = session.translator().clone();
    println!("{}", tr.t(keys::QUICK_HEADING));
    print_quick(&tr, session.store().quick_conversions());
    if session.store().quick_conversions().is_empty() {
        return Ok(());
    }
    let sel = read_line(input, tr.t(keys::PROMPT_INDEX))?;
    match sel.trim().parse::<usize>() {
        Ok(n) if n >= 1 => {
            if let Err(err) = session.load_quick(n - 1) {
                println!("{err}");
            }
        }
        _ => println!("{}", tr.t(keys::QUICK_NOT_FOUND)),
    }
    Ok(())
}

/// 현재 카테고리와 두 입력 칸.
pub fn print_row<S: Storage>(session: &ConverterSession<S>) {
    let tr = session.translator();
    let [first, second] = session.fields();
    let show = |v: &str| if v.is_empty() { "_".to_string() } else { v.to_string() };
    println!(
        "{} [{}] {} {} ⇄ {} {}",
        tr.t(keys::CURRENT_ROW),
        tr.category_name(session.category()),
        show(first.value.as_str()),
        tr.unit_label(&first.unit),
        show(second.value.as_str()),
        tr.unit_label(&second.unit),
    );
}

pub fn print_conversion(tr: &Translator, value: &str, from: &str, result: &str, to: &str) {
    if result.is_empty() {
        println!("{}", tr.t(keys::NO_RESULT));
    } else {
        println!(
            "{} {value} {} = {result} {}",
            tr.t(keys::CONVERSION_RESULT),
            tr.unit_label(from),
            tr.unit_label(to)
        );
    }
}

pub fn print_units(tr: &Translator, category: Category) {
    let table = category.table();
    let (a, b) = table.main_units();
    println!(
        "{} [{}] {} ⇄ {}",
        tr.t(keys::AVAILABLE_UNITS),
        tr.category_name(category),
        tr.unit_name(a),
        tr.unit_name(b)
    );
    for aux in table.aux_units {
        println!("{}", aux_line(tr, aux));
    }
    let listed = |u: &str| u == a || u == b || table.aux_units.iter().any(|x| x.unit == u);
    for unit in table.units().into_iter().filter(|u| !listed(*u)) {
        println!("  - {unit}: {}", tr.unit_name(unit));
    }
}

/// 보조 단위 한 줄. 선형이면 기준 단위 배율, 공식이면 공식 표시.
pub fn aux_line(tr: &Translator, aux: &AuxUnit) -> String {
    let detail = match aux.kind {
        RuleKind::Linear(factor) => {
            format!("1 = {} {}", format_value(factor), tr.unit_label(aux.base))
        }
        RuleKind::Formula(_) => {
            format!("{}, {}", tr.t(keys::ADVANCED_FORMULA), tr.unit_label(aux.base))
        }
    };
    format!("  - {}: {} ({detail})", aux.unit, tr.unit_name(aux.unit))
}

pub fn print_history(tr: &Translator, entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("{}", tr.t(keys::EMPTY_LIST));
        return;
    }
    for e in entries {
        println!("[{}] {}  ({})", e.id, e.summary(), e.timestamp);
    }
}

pub fn print_favorites(tr: &Translator, entries: &[FavoriteEntry]) {
    if entries.is_empty() {
        println!("{}", tr.t(keys::EMPTY_LIST));
        return;
    }
    for f in entries {
        println!("[{}] {} ({})", f.id, f.summary(), tr.category_name(f.category));
    }
}

pub fn print_quick(tr: &Translator, entries: &[QuickConversionEntry]) {
    if entries.is_empty() {
        println!("{}", tr.t(keys::EMPTY_LIST));
        return;
    }
    for (i, q) in entries.iter().enumerate() {
        println!(
            "{}) {} → {} ({})",
            i + 1,
            tr.unit_label(&q.from_unit),
            tr.unit_label(&q.to_unit),
            tr.category_name(q.category)
        );
    }
}

pub fn print_advanced(tr: &Translator, category: Category) {
    println!("{}", tr.t(keys::ADVANCED_HEADING));
    let items = advanced_conversions(category);
    if items.is_empty() {
        println!("{}", tr.t(keys::ADVANCED_NONE));
        return;
    }
    for item in items {
        println!("{}", item.describe(tr.t(keys::ADVANCED_FORMULA)));
        println!("  {} {}", tr.t(keys::ADVANCED_EXAMPLE), item.example());
    }
}

/// 화면 표기(`평`, `km/h`)를 단위 id로 바꾼다. 모르는 표기는 그대로 둔다.
pub fn unit_id(input: &str) -> String {
    let input = input.trim();
    unit_from_label(input).unwrap_or(input).to_string()
}

fn read_id<R: BufRead>(tr: &Translator, input: &mut R) -> Result<Option<EntryId>, AppError> {
    let s = read_line(input, tr.t(keys::PROMPT_ID))?;
    Ok(s.trim().parse().ok())
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof`.
pub fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    if input.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        println!();
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}
