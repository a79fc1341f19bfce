use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::category::Category;
use crate::config::{self, ConfigError, DEFAULT_CONFIG_FILE};
use crate::favorites::{FavoriteError, FavoriteInput};
use crate::i18n::{self, keys, Translator};
use crate::id::EntryId;
use crate::session::{ConverterSession, SessionError, Side};
use crate::store::{JsonFileStorage, Storage, Store, StoreError};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("저장 오류: {0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Session(#[from] SessionError),
    #[error("{0}")]
    Favorite(#[from] FavoriteError),
}

#[derive(Debug, Parser)]
#[command(name = "unit_converter")]
#[command(about = "길이·무게·온도·부피·면적·속도 단위 변환기", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 설정 파일 경로 (기본: config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 표시 언어 (auto/ko/en)
    #[arg(short = 'L', long = "lang", global = true, value_name = "CODE")]
    pub lang: Option<String>,

    /// 디버그 로그 출력
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// 생략하면 대화형 모드로 실행한다.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 값을 변환하고 기록에 남긴다
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        to: String,
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// 카테고리의 단위 목록
    Units { category: Option<Category> },
    /// 변환 기록 조회/삭제
    History {
        #[arg(long, value_name = "ID", conflicts_with = "clear")]
        remove: Option<EntryId>,
        #[arg(long)]
        clear: bool,
    },
    /// 즐겨찾기 관리
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    /// 빠른 변환 목록 조회/불러오기
    Quick {
        /// 목록 번호 (1부터)
        #[arg(
            long,
            value_name = "N",
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        load: Option<usize>,
    },
    /// 고급 변환 안내
    Advanced { category: Option<Category> },
    /// 대화형 모드
    Interactive,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    List,
    Add {
        category: Category,
        #[arg(allow_hyphen_values = true)]
        value1: String,
        unit1: String,
        #[arg(allow_hyphen_values = true)]
        value2: String,
        unit2: String,
    },
    Remove { id: EntryId },
}

/// 설정을 읽고 세션을 만든 뒤 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let cfg = config::load_or_default(&config_path)?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.locale_dir.as_deref());
    log::debug!(
        "언어 {}, 저장 문서 {}",
        tr.language().as_code(),
        cfg.data_file.display()
    );

    let store = Store::open(JsonFileStorage::new(&cfg.data_file));
    let mut session = ConverterSession::new(store, tr, cfg.default_category);
    execute(&mut session, cli.command.unwrap_or(Command::Interactive))
}

/// 명령 하나를 실행한다. 저장 매체와 무관하게 동작한다.
pub fn execute<S: Storage>(
    session: &mut ConverterSession<S>,
    command: Command,
) -> Result<(), AppError> {
    let default_category = session.category();
    match command {
        Command::Convert {
            value,
            from,
            to,
            category,
        } => {
            session.switch_category(category.unwrap_or(default_category));
            let (from, to) = (ui_cli::unit_id(&from), ui_cli::unit_id(&to));
            session.set_units(&from, &to);
            let result = session.input(Side::First, &value);
            ui_cli::print_conversion(session.translator(), &value, &from, &result, &to);
            session.store_mut().flush()?;
        }
        Command::Units { category } => {
            ui_cli::print_units(session.translator(), category.unwrap_or(default_category));
        }
        Command::History { remove, clear } => {
            let tr = session.translator().clone();
            if clear {
                session.store_mut().clear_history();
                session.store_mut().flush()?;
                println!("{}", tr.t(keys::HISTORY_CLEARED));
            } else if let Some(id) = remove {
                let before = session.store().history().len();
                let after = session.store_mut().remove_history(id).len();
                session.store_mut().flush()?;
                let key = if after < before {
                    keys::HISTORY_REMOVED
                } else {
                    keys::NOT_FOUND
                };
                println!("{}", tr.t(key));
            } else {
                ui_cli::print_history(&tr, session.store().history());
            }
        }
        Command::Favorites { action } => {
            let tr = session.translator().clone();
            match action.unwrap_or(FavoritesAction::List) {
                FavoritesAction::List => ui_cli::print_favorites(&tr, session.store().favorites()),
                FavoritesAction::Add {
                    category,
                    value1,
                    unit1,
                    value2,
                    unit2,
                } => {
                    let inputs = [
                        FavoriteInput {
                            label: tr.unit_name(&unit1),
                            value: value1,
                            unit: unit1,
                        },
                        FavoriteInput {
                            label: tr.unit_name(&unit2),
                            value: value2,
                            unit: unit2,
                        },
                    ];
                    session.store_mut().add_favorite(category, inputs)?;
                    session.store_mut().flush()?;
                    println!("{}", tr.t(keys::FAVORITES_SAVED));
                }
                FavoritesAction::Remove { id } => {
                    let before = session.store().favorites().len();
                    let after = session.store_mut().remove_favorite(id).len();
                    session.store_mut().flush()?;
                    let key = if after < before {
                        keys::FAVORITES_REMOVED
                    } else {
                        keys::NOT_FOUND
                    };
                    println!("{}", tr.t(key));
                }
            }
        }
        Command::Quick { load } => match load {
            Some(number) => {
                session.load_quick(number - 1)?;
                ui_cli::print_row(session);
                session.store_mut().flush()?;
            }
            None => ui_cli::print_quick(session.translator(), session.store().quick_conversions()),
        },
        Command::Advanced { category } => {
            ui_cli::print_advanced(session.translator(), category.unwrap_or(default_category));
        }
        Command::Interactive => ui_cli::interactive(session)?,
    }
    Ok(())
}
