//! Command-line front end for the memo board.
//!
//! # Responsibility
//! - Map subcommands onto `memoboard_core` services.
//! - Keep output plain text by default, JSON on request.

mod config;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use config::BoardConfig;
use memoboard_core::db::open_db;
use memoboard_core::{
    init_logging, Accent, DateWindow, DraftService, Language, Memo, MemoBoard, MemoCategory,
    MemoDraft, MemoFilter, MemoQuery, MemoRepository, MemoTemplate, PreferenceService,
    SqliteKeyValueStore,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "memoboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Capture, tag and filter short memos stored locally")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Storage file (env: MEMOBOARD_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Directory for rolling log files; logging is off when unset (env: MEMOBOARD_LOG_DIR)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (env: MEMOBOARD_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List memos, newest first
    List {
        /// all|pinned|tasks|ideas|journal|notes
        #[arg(short, long, default_value = "all", value_parser = parse_filter)]
        filter: MemoFilter,
        /// Only memos carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,
        /// First day of the window (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day of the window (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Window covering today
        #[arg(long, conflicts_with_all = ["from", "to", "last7"])]
        today: bool,
        /// Window covering the last 7 days
        #[arg(long, conflicts_with_all = ["from", "to"])]
        last7: bool,
        /// Case-insensitive text matched against content and tags
        #[arg(short, long, default_value = "")]
        search: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Capture a new memo
    Add {
        content: String,
        /// Comma-separated tags
        #[arg(short = 'T', long, default_value = "")]
        tags: String,
        /// note|idea|task|journal
        #[arg(short, long, default_value = "note", value_parser = parse_category)]
        category: MemoCategory,
        /// Pin on top
        #[arg(long)]
        pin: bool,
    },

    /// Show a capture template, optionally saving it as a memo
    Template {
        /// quick|journal|task
        #[arg(value_parser = parse_template)]
        name: MemoTemplate,
        #[arg(long)]
        save: bool,
    },

    /// Replace content (and optionally tags) of a memo
    Edit {
        id: String,
        content: String,
        /// Comma-separated tags; keeps current tags when omitted
        #[arg(short = 'T', long)]
        tags: Option<String>,
    },

    /// Print one memo's content
    Show { id: String },

    /// Collection counters
    Stats,

    /// Tag usage, most used first
    Tags,

    /// Replace all memos with the demo set
    Reset,

    /// Show or change preferences
    Prefs {
        /// indigo|emerald|violet|amber|rose
        #[arg(long, value_parser = parse_accent)]
        accent: Option<Accent>,
        /// en|zh
        #[arg(long, value_parser = parse_language)]
        language: Option<Language>,
    },

    /// Markdown editor draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Check core linkage
    Ping,
}

#[derive(Subcommand)]
enum DraftAction {
    Show,
    Save { content: String },
    Preview,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = BoardConfig::resolve(cli.db, cli.log_dir, cli.log_level)?;
    if let Some(dir) = config.log_dir.as_ref() {
        let absolute = if dir.is_absolute() {
            dir.clone()
        } else {
            std::env::current_dir()?.join(dir)
        };
        init_logging(config.log_level, &absolute)?;
    }

    if let Commands::Ping = cli.command {
        println!("memoboard_core ping={}", memoboard_core::ping());
        println!("memoboard_core version={}", memoboard_core::core_version());
        return Ok(());
    }

    let conn = open_db(&config.db_path)?;
    let repo = MemoRepository::new(SqliteKeyValueStore::new(&conn));

    match cli.command {
        Commands::List {
            filter,
            tag,
            from,
            to,
            today,
            last7,
            search,
            json,
        } => {
            let now = Utc::now();
            let window = if today {
                DateWindow::today(now)
            } else if last7 {
                DateWindow::last_days(now, 7)
            } else {
                DateWindow::new(from, to)
            };
            let query = MemoQuery {
                filter,
                tag,
                window,
                search,
            };
            let board = MemoBoard::load(repo)?;
            let memos = board.query(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&memos)?);
            } else {
                if query.window.is_open() {
                    println!("{} items  filter={}", memos.len(), query.filter.as_str());
                } else {
                    println!(
                        "{} items  filter={} window={}",
                        memos.len(),
                        query.filter.as_str(),
                        query.window
                    );
                }
                for memo in &memos {
                    print_memo_line(memo);
                }
            }
        }
        Commands::Add {
            content,
            tags,
            category,
            pin,
        } => {
            let mut board = MemoBoard::load(repo)?;
            let draft = MemoDraft::new(content)
                .with_tags_input(&tags)
                .with_category(category)
                .pinned(pin);
            let memo = board.create_memo(draft)?;
            println!("{}", memo.id);
        }
        Commands::Template { name, save } => {
            let language = PreferenceService::load(repo.clone())?.current().language;
            let draft = name.draft(language);
            println!(
                "[{}] {}{}  #{}",
                draft.category,
                if draft.pinned { "(pinned) " } else { "" },
                draft.content,
                draft.tags.join(" #")
            );
            if save {
                let memo = MemoBoard::load(repo)?.create_memo(draft)?;
                println!("{}", memo.id);
            }
        }
        Commands::Edit { id, content, tags } => {
            let mut board = MemoBoard::load(repo)?;
            let mut session = board.start_edit(&id)?;
            session.content = content;
            if let Some(tags) = tags {
                session.tags_input = tags;
            }
            let memo = board.save_edit(&session)?;
            print_memo_line(&memo);
        }
        Commands::Show { id } => {
            let board = MemoBoard::load(repo)?;
            println!("{}", board.copy_text(&id)?);
        }
        Commands::Stats => {
            let stats = MemoBoard::load(repo)?.stats();
            println!(
                "total={} pinned={} tasks={}",
                stats.total, stats.pinned, stats.tasks
            );
        }
        Commands::Tags => {
            for usage in MemoBoard::load(repo)?.tag_usage() {
                println!("{:>3}  #{}", usage.count, usage.tag);
            }
        }
        Commands::Reset => {
            MemoBoard::load(repo)?.reset_to_demo()?;
            println!("board reset to demo memos");
        }
        Commands::Prefs { accent, language } => {
            let mut prefs = PreferenceService::load(repo)?;
            if let Some(accent) = accent {
                prefs.set_accent(accent)?;
            }
            if let Some(language) = language {
                prefs.set_language(language)?;
            }
            let current = prefs.current();
            let palette = current.accent.palette();
            println!(
                "accent={} primary={} ring={} language={}",
                current.accent, palette.primary, palette.ring, current.language
            );
        }
        Commands::Draft { action } => {
            let drafts = DraftService::new(repo);
            match action {
                DraftAction::Show => println!("{}", drafts.load()?.content),
                DraftAction::Save { content } => {
                    let draft = drafts.save(content)?;
                    println!("saved at {}", draft.updated_at.to_rfc3339());
                }
                DraftAction::Preview => {
                    let preview = drafts.preview()?;
                    println!("words={}", preview.word_count);
                    if let Some(image) = preview.image {
                        println!("image={image}");
                    }
                    println!("{}", preview.text.unwrap_or_default());
                }
            }
        }
        Commands::Ping => {}
    }

    Ok(())
}

fn print_memo_line(memo: &Memo) {
    let tags = if memo.tags.is_empty() {
        "-".to_string()
    } else {
        memo.tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!(
        "{}{:<36} {:<7} {}  {}  {}",
        if memo.pinned { "*" } else { " " },
        memo.id,
        memo.category.as_str(),
        memo.created_at.format("%b %-d, %H:%M"),
        tags,
        memo.content
    );
}

fn parse_filter(value: &str) -> Result<MemoFilter, String> {
    MemoFilter::parse(value)
        .ok_or_else(|| format!("unknown filter `{value}`; expected all|pinned|tasks|ideas|journal|notes"))
}

fn parse_category(value: &str) -> Result<MemoCategory, String> {
    MemoCategory::parse(value).map_err(|err| err.to_string())
}

fn parse_template(value: &str) -> Result<MemoTemplate, String> {
    MemoTemplate::parse(value)
        .ok_or_else(|| format!("unknown template `{value}`; expected quick|journal|task"))
}

fn parse_accent(value: &str) -> Result<Accent, String> {
    Accent::parse(value)
        .ok_or_else(|| format!("unknown accent `{value}`; expected indigo|emerald|violet|amber|rose"))
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::parse(value).ok_or_else(|| format!("unknown language `{value}`; expected en|zh"))
}
