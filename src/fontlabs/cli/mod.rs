//! # CLI Behavior
//!
//! This is **one possible UI client** for fontlabs. It is the only place that
//! knows about terminal output, exit codes and the tracing subscriber.
//!
//! ## Data Directory
//!
//! Catalog, favorites and `config.json` live in `$FONTLABS_HOME` when set, else in
//! the platform data directory (`directories::ProjectDirs`).
//!
//! ## Scrolling
//!
//! A terminal has no viewport, so `browse --pages N` stands in for scrolling: the
//! first page loads on reset and each further page is one sentinel signal.
//!
//! ## Logging
//!
//! `FONTLABS_LOG` takes an `EnvFilter` directive (default `warn`); `-v` raises
//! the default to `debug`. Logs go to stderr so stdout stays scriptable.

mod print;

use crate::args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use fontlabs::api::{ConfigAction, FontlabsApi};
use fontlabs::config::FontlabsConfig;
use fontlabs::error::{FontlabsError, Result};
use fontlabs::feed::{StylesheetHead, StylesheetLoader, StylesheetRegistry};
use fontlabs::store::fs::FileCatalog;
use fontlabs::store::CategoryFilter;
use print::{print_config, print_font_detail, print_fonts, print_links, print_messages};
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "FONTLABS_HOME";
const LOG_ENV: &str = "FONTLABS_LOG";

struct AppContext {
    api: FontlabsApi<FileCatalog>,
    head: Rc<StylesheetHead>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Browse { category, pages }) => handle_browse(&mut ctx, category, pages),
        Some(Commands::Trending) => handle_trending(&mut ctx),
        Some(Commands::Search { term }) => handle_search(&mut ctx, term),
        Some(Commands::Show { slug }) => handle_show(&mut ctx, slug),
        Some(Commands::Download { slug }) => handle_download(&mut ctx, slug),
        Some(Commands::Fav { slug }) => handle_fav(&mut ctx, slug),
        Some(Commands::Favorites) => handle_favorites(&mut ctx),
        Some(Commands::Populate { file, limit }) => handle_populate(&mut ctx, file, limit),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_browse(&mut ctx, None, 1),
    }?;

    if cli.links {
        print_links(&ctx.head.hrefs());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "fontlabs", "fontlabs")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FontlabsError::Api("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    tracing::debug!(dir = %dir.display(), "using data directory");
    let config = FontlabsConfig::load(&dir)?;

    let head = Rc::new(StylesheetHead::new());
    let loader: Rc<dyn StylesheetLoader> = head.clone();
    let stylesheets = StylesheetRegistry::new(loader);

    let store = FileCatalog::new(dir.clone());
    let api = FontlabsApi::new(store, dir, config, stylesheets);
    Ok(AppContext { api, head })
}

fn handle_browse(ctx: &mut AppContext, category: Option<String>, pages: usize) -> Result<()> {
    let result = match category {
        Some(name) => {
            let filter: CategoryFilter = name.parse()?;
            match filter {
                CategoryFilter::All => ctx.api.browse(filter, pages)?,
                CategoryFilter::Only(_) => ctx.api.category(filter)?,
            }
        }
        None => ctx.api.browse(CategoryFilter::All, pages)?,
    };
    print_fonts(&result.listed_fonts, &result.favorite_ids);
    print_messages(&result.messages);
    Ok(())
}

fn handle_trending(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.trending()?;
    print_fonts(&result.listed_fonts, &result.favorite_ids);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: String) -> Result<()> {
    let result = ctx.api.search(&term)?;
    print_fonts(&result.listed_fonts, &result.favorite_ids);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, slug: String) -> Result<()> {
    let result = ctx.api.show(&slug)?;
    let preview = ctx.api.current_config().preview_text.clone();
    for font in &result.listed_fonts {
        print_font_detail(font, &preview);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_download(ctx: &mut AppContext, slug: String) -> Result<()> {
    let result = ctx.api.download(&slug)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, slug: String) -> Result<()> {
    let result = ctx.api.toggle_favorite(&slug)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.favorites()?;
    print_fonts(&result.listed_fonts, &result.favorite_ids);
    print_messages(&result.messages);
    Ok(())
}

fn handle_populate(ctx: &mut AppContext, file: PathBuf, limit: Option<usize>) -> Result<()> {
    let result = ctx.api.populate(&file, limit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
