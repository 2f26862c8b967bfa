use clap::Parser;
use journalx::application::init::init;
use journalx::application::manage_config::CONFIG_KEYS;
use journalx::application::reflect::reflect;
use journalx::application::{ConfigService, EntriesService, NewEntryRequest, NewEntryService};
use journalx::cli::{format_entry, format_entry_list, format_prompts, Cli, Commands};
use journalx::error::JournalError;
use journalx::infrastructure::Workspace;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JournalError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized journalx journal at {}", path.display());
            Ok(())
        }
        Some(Commands::New {
            text,
            bookmark,
            date,
        }) => {
            let request = NewEntryRequest {
                text: if text.is_empty() {
                    None
                } else {
                    Some(text.join(" "))
                },
                bookmark,
                date,
            };

            let service = NewEntryService::new(Workspace::discover()?);
            let entry = service.execute(&request)?;
            println!("Saved entry {}", entry.id);
            Ok(())
        }
        Some(Commands::List) => {
            let service = EntriesService::new(Workspace::discover()?);
            let output = format_entry_list(&service.list()?);
            println!("{}", output.trim_end());
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let service = EntriesService::new(Workspace::discover()?);
            print!("{}", format_entry(&service.show(&id)?));
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let service = EntriesService::new(Workspace::discover()?);
            let entry = service.delete(&id)?;
            println!("Deleted entry {}", entry.id);
            Ok(())
        }
        Some(Commands::Reflect { count }) => {
            print!("{}", format_prompts(&reflect(count)));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("slot_key = {}", config.slot_key);
                println!("load_policy = {}", config.load_policy);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: journalx config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
                Ok(())
            }
        }
        None => {
            println!("journalx - Personal journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
