use bookstall::api::BookstallApi;
use bookstall::books::BookStore;
use bookstall::commands::config::ConfigAction;
use bookstall::commands::BookPatch;
use bookstall::config::BookstallConfig;
use bookstall::error::{BookstallError, Result};
use bookstall::model::Theme;
use bookstall::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_books, print_messages};
use cli::styles::Palette;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: BookstallApi<FileStore>,
    config: BookstallConfig,
    data_dir: PathBuf,
    palette: Palette,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    // Seed an empty inventory from the bundled CSV; existing user data is
    // never overwritten and a missing seed is silently skipped.
    if !cli.no_bootstrap {
        let seed = ctx.data_dir.join(&ctx.config.bootstrap_file);
        ctx.api.bootstrap(&seed)?;
    }

    match cli.command {
        Some(Commands::Add { name, khr, usd }) => handle_add(&mut ctx, name, khr, usd),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Edit {
            position,
            name,
            khr,
            usd,
        }) => handle_edit(&mut ctx, position, name, khr, usd),
        Some(Commands::Delete { position }) => handle_delete(&mut ctx, position),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Theme { mode }) => handle_theme(&mut ctx, mode),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = BookstallConfig::load(&data_dir).unwrap_or_default();
    let store = BookStore::hydrate(FileStore::new(data_dir.clone()));
    let palette = Palette::new(store.theme());
    let api = BookstallApi::new(store, data_dir.clone());

    Ok(AppContext {
        api,
        config,
        data_dir,
        palette,
    })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("BOOKSTALL_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "bookstall", "bookstall")
        .ok_or_else(|| BookstallError::Store("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    khr: Option<String>,
    usd: Option<String>,
) -> Result<()> {
    let result = ctx.api.add_book(name, khr, usd)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list_books(search.as_deref())?;
    print_books(&result.listed_books, &ctx.palette);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_books(&term)?;
    if !result.listed_books.is_empty() {
        print_books(&result.listed_books, &ctx.palette);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    position: usize,
    name: Option<String>,
    khr: Option<String>,
    usd: Option<String>,
) -> Result<()> {
    let patch = BookPatch { name, khr, usd };
    let result = ctx.api.update_book(position, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: usize) -> Result<()> {
    let result = ctx.api.delete_book(position)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_file(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file));
    let result = ctx.api.export_csv(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, mode: Option<String>) -> Result<()> {
    let mode = match mode {
        Some(raw) => Some(raw.parse::<Theme>().map_err(BookstallError::Api)?),
        None => None,
    };
    let result = ctx.api.theme(mode)?;
    if result.messages.is_empty() {
        if let Some(theme) = result.theme {
            println!("{}", theme);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            println!("bootstrap-file = {}", config.bootstrap_file);
            println!("export-file = {}", config.export_file);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
