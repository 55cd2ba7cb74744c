use anxlog::application::{
    init, Cleared, ConfigService, DeleteEntryService, ListEntriesService, RecordEntryService,
    TrendService,
};
use anxlog::cli::{format_entry_list, format_trend, Cli, Commands};
use anxlog::domain::{format_level, parse_level, SortOrder};
use anxlog::error::AnxlogError;
use anxlog::infrastructure::{init_logging, Config, FileSystemRepository, JournalRepository};
use clap::Parser;
use log::error;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            error!("event=command module=cli status=error error={}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the journal, load its config and start file logging
fn open_journal() -> Result<(FileSystemRepository, Config), AnxlogError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;

    // Logging is best effort; a read-only log directory must not block the journal
    if let Err(msg) = init_logging(&config.log_level, &repo.log_dir()) {
        eprintln!("Warning: logging disabled: {}", msg);
    }

    Ok((repo, config))
}

fn run(cli: Cli) -> Result<(), AnxlogError> {
    match cli.command {
        Some(Commands::Init { path, trend_window }) => init::init(&path, trend_window),
        Some(Commands::Log {
            level,
            category,
            notes,
        }) => {
            let level = parse_level(&level).map_err(AnxlogError::InvalidLevel)?;
            let (repo, _config) = open_journal()?;
            let store = repo.entry_store();

            let entry = RecordEntryService::new(&store).record(level, &category, &notes)?;
            println!(
                "Saved entry {} (level {})",
                entry.id,
                format_level(entry.level)
            );
            Ok(())
        }
        Some(Commands::List {
            order,
            category,
            limit,
        }) => {
            let order = SortOrder::from_str(&order).map_err(AnxlogError::Config)?;
            let (repo, _config) = open_journal()?;
            let store = repo.entry_store();

            let entries =
                ListEntriesService::new(&store).list(order, category.as_deref(), limit)?;
            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let (repo, _config) = open_journal()?;
            let store = repo.entry_store();

            if DeleteEntryService::new(&store).delete(&id)? {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            let (repo, _config) = open_journal()?;
            let store = repo.entry_store();

            match DeleteEntryService::new(&store).clear(yes)? {
                Cleared::Entries(count) => println!("Cleared {} entries", count),
                Cleared::Unreadable => println!("Cleared unreadable stored data"),
            }
            Ok(())
        }
        Some(Commands::Trend) => {
            let (repo, config) = open_journal()?;
            let store = repo.entry_store();

            let trend = TrendService::new(&store, config.trend_window).trend()?;
            print!("{}", format_trend(&trend));
            if trend.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("log_level = {}", config.log_level);
                println!("trend_window = {}", config.trend_window);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: anxlog config [--list | <key> [<value>]]");
                println!("Valid keys: log_level, trend_window, created");
                Ok(())
            }
        }
        None => {
            println!("anxlog - Terminal anxiety journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
