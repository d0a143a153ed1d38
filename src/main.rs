use chrono::{Local, NaiveDate};
use clap::Parser;
use daytrack::application::{
    init::init, list_days::list_days, parse_assignment, ConfigService, DeleteOutcome,
    ExportService, RecordEntryService, Session, VariableService,
};
use daytrack::cli::{
    format_day_list, format_variable_info, format_variable_list, Cli, Commands, VarCommand,
};
use daytrack::domain::{format_date, normalize_name, Location, TimeReference};
use daytrack::error::{DaytrackError, Result};
use daytrack::infrastructure::{Config, Store, StoreRepository};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("DAYTRACK_LOG")
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the store and apply its configuration
fn open_store() -> Result<(Store, Config)> {
    let store = Store::discover()?;
    let config = store.load_config()?;
    Ok((store.with_strict_day_log(config.strict_day_log), config))
}

fn resolve_date(input: &str) -> Result<NaiveDate> {
    Ok(TimeReference::parse(input)?.resolve(Local::now().date_naive()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized daytrack store at {}", path.display());
            Ok(())
        }
        Commands::Var(command) => {
            let (store, _) = open_store()?;
            run_var(VariableService::new(store), command)
        }
        Commands::Add { date, values } => {
            let (store, _) = open_store()?;
            let assignments = values
                .iter()
                .map(|v| parse_assignment(v))
                .collect::<Result<Vec<_>>>()?;

            let mut session = Session::new(resolve_date(&date)?);
            let recorded_for = session.current_date;
            RecordEntryService::new(store).record(&mut session, &assignments)?;

            println!("Recorded entry for {}", format_date(recorded_for));
            Ok(())
        }
        Commands::Check { date } => {
            let (store, _) = open_store()?;
            let date = resolve_date(&date)?;
            if store.is_date_recorded(date)? {
                println!("{} is recorded", format_date(date));
            } else {
                println!("{} is not recorded", format_date(date));
            }
            Ok(())
        }
        Commands::Days => {
            let (store, _) = open_store()?;
            println!("{}", format_day_list(&list_days(&store)?).trim_end());
            Ok(())
        }
        Commands::Export { name, append } => {
            let (store, config) = open_store()?;
            let append = append || config.export_append;
            let report = ExportService::new(store).export(&name, append)?;
            println!("Exported {} days to {}", report.rows, report.path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let (store, _) = open_store()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("export_append = {}", config.export_append);
                println!("strict_day_log = {}", config.strict_day_log);
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
                println!("Usage: daytrack config [--list | <key> [<value>]]");
                println!("Valid keys: export_append, strict_day_log, created");
                Ok(())
            }
        }
    }
}

fn run_var(service: VariableService, command: VarCommand) -> Result<()> {
    match command {
        VarCommand::Add { name, categories } => {
            let name = service.add(&name, &categories)?;
            if categories.is_empty() {
                println!("Added numeric variable {}", name);
            } else {
                println!("Added categorical variable {}", name);
            }
        }
        VarCommand::List { active, inactive } => {
            if !inactive {
                print!(
                    "{}",
                    format_variable_list("ACTIVE", &service.list(Location::Active)?)
                );
            }
            if !active {
                print!(
                    "{}",
                    format_variable_list("INACTIVE", &service.list(Location::Inactive)?)
                );
            }
        }
        VarCommand::Show { name } => {
            print!("{}", format_variable_info(&service.show(&name)?));
        }
        VarCommand::Move { name } => {
            let (name, location) = service.toggle(&name)?;
            println!("{} is now {}", name, location);
        }
        VarCommand::Rename { old, new } => {
            let (old, new) = service.rename(&old, &new)?;
            println!("Renamed {} to {}", old, new);
        }
        VarCommand::Delete { name, force } => match service.delete(&name, force)? {
            DeleteOutcome::Deleted => println!("Deleted {}", normalize_name(&name)),
            DeleteOutcome::HasEntries(entries) => {
                return Err(DaytrackError::VariableHasEntries {
                    variable: normalize_name(&name),
                    entries,
                });
            }
        },
    }
    Ok(())
}
