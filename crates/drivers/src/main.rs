mod config;
mod logging;
mod ui;

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use config::AppConfig;
use folio_adapters::{
    present_artwork_detail, present_artwork_row, present_filter, present_form_status,
    present_timeline_event, BuiltinContent, JsonContentFile, SimulatedContactTransport,
    SqlitePreferenceStore, SystemClock,
};
use folio_application::{
    ContactField, ContactForm, ContentSource, FeaturedWorksQuery, FooterNoticeQuery, FormStatus,
    ListArtworksCommand, ListCategoriesQuery, OpenArtworkCommand, PortfolioService,
    ShowProfileQuery, ThemeSettings,
};
use folio_domain::{ArtworkId, ThemeMode};
use tracing::error;

const CONTACT_POLL_INTERVAL: Duration = Duration::from_millis(20);

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(1);
        }
    };
    logging::init_logging(&config.log_filter);

    let args: Vec<String> = std::env::args().collect();
    let command = parse_command(&args);
    match run_command(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

/// Only commands that show portfolio content call this; theme and contact
/// work even when the content file is broken.
fn build_portfolio_service(config: &AppConfig) -> Result<PortfolioService, CommandError> {
    let content: Box<dyn ContentSource> = match &config.content_path {
        Some(path) => Box::new(JsonContentFile::new(path)),
        None => Box::new(BuiltinContent),
    };
    PortfolioService::load(content.as_ref(), Box::new(SystemClock)).map_err(|error| {
        error!("failed to load portfolio content: {error}");
        CommandError::Runtime(format!("failed to load portfolio content: {error}"))
    })
}

fn load_theme_settings(config: &AppConfig) -> Result<ThemeSettings, CommandError> {
    ThemeSettings::load(Box::new(SqlitePreferenceStore::new(
        &config.preferences_path,
    )))
    .map_err(|error| CommandError::Runtime(format!("failed to load preferences: {error}")))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ThemeAction {
    Show,
    Toggle,
    Set(ThemeMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui,
    Categories,
    Gallery { category: Option<String> },
    Show { artwork_id: i64 },
    Home,
    About,
    Contact {
        name: String,
        email: String,
        message: String,
    },
    Theme(ThemeAction),
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui);
    }

    match args[1].as_str() {
        "ui" => Ok(Command::Ui),
        "categories" => Ok(Command::Categories),
        "gallery" => Ok(Command::Gallery {
            category: (args.len() > 2).then(|| args[2..].join(" ")),
        }),
        "show" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing artwork id".to_string()));
            }
            let artwork_id = args[2]
                .parse::<i64>()
                .map_err(|_| CommandError::Usage(format!("invalid artwork id: {}", args[2])))?;
            Ok(Command::Show { artwork_id })
        }
        "home" => Ok(Command::Home),
        "about" => Ok(Command::About),
        "contact" => {
            if args.len() < 5 {
                return Err(CommandError::Usage(
                    "contact needs <name> <email> <message>".to_string(),
                ));
            }
            Ok(Command::Contact {
                name: args[2].clone(),
                email: args[3].clone(),
                message: args[4..].join(" "),
            })
        }
        "theme" => match args.get(2).map(String::as_str) {
            None => Ok(Command::Theme(ThemeAction::Show)),
            Some("toggle") => Ok(Command::Theme(ThemeAction::Toggle)),
            Some("dark") => Ok(Command::Theme(ThemeAction::Set(ThemeMode::Dark))),
            Some("light") => Ok(Command::Theme(ThemeAction::Set(ThemeMode::Light))),
            Some(other) => Err(CommandError::Usage(format!("unknown theme action: {other}"))),
        },
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Ui => {
            let service = build_portfolio_service(config)?;
            let settings = load_theme_settings(config)?;
            let transport =
                SimulatedContactTransport::new(Duration::from_millis(config.submit_delay_ms));
            ui::launch_window(service, settings, transport).map_err(CommandError::Runtime)
        }
        Command::Categories => {
            let service = build_portfolio_service(config)?;
            for filter in service.list_categories(ListCategoriesQuery) {
                println!("{}\t{}", filter.label(), present_filter(filter));
            }
            Ok(())
        }
        Command::Gallery { category } => {
            let service = build_portfolio_service(config)?;
            let artworks = service
                .list_artworks(ListArtworksCommand { category })
                .map_err(|error| CommandError::Usage(format!("gallery failed: {error}")))?;
            if artworks.is_empty() {
                println!("no artworks in this category");
                return Ok(());
            }
            for artwork in artworks {
                println!("{}", present_artwork_row(&artwork));
            }
            Ok(())
        }
        Command::Show { artwork_id } => {
            let artwork_id = ArtworkId::new(artwork_id)
                .map_err(|error| CommandError::Usage(format!("invalid artwork id: {error}")))?;
            let service = build_portfolio_service(config)?;
            let artwork = service
                .open_artwork(OpenArtworkCommand { artwork_id })
                .map_err(|error| CommandError::Runtime(format!("show failed: {error}")))?;
            println!("{}", present_artwork_detail(&artwork));
            Ok(())
        }
        Command::Home => {
            let service = build_portfolio_service(config)?;
            let profile = service.show_profile(ShowProfileQuery);
            println!("Hi, I'm {}", profile.name);
            println!("{}", profile.tagline);
            println!();
            println!("Featured Work");
            for artwork in service.featured_works(FeaturedWorksQuery) {
                println!("{}", present_artwork_row(&artwork));
            }
            println!();
            println!("{}", service.footer_notice(FooterNoticeQuery));
            Ok(())
        }
        Command::About => {
            let service = build_portfolio_service(config)?;
            let profile = service.show_profile(ShowProfileQuery);
            println!("About Me");
            println!("{}", profile.about_intro);
            for paragraph in &profile.bio {
                println!();
                println!("{paragraph}");
            }
            println!();
            println!("Artistic Journey");
            for event in profile.timeline_newest_first() {
                println!("{}", present_timeline_event(event));
            }
            println!();
            println!("Fun Facts");
            for fact in &profile.fun_facts {
                println!("{}: {}", fact.label, fact.text);
            }
            Ok(())
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let transport =
                SimulatedContactTransport::new(Duration::from_millis(config.submit_delay_ms));
            let mut form = ContactForm::new();
            form.set_field(ContactField::Name, name);
            form.set_field(ContactField::Email, email);
            form.set_field(ContactField::Message, message);

            form.submit(&transport)
                .map_err(|error| CommandError::Usage(format!("contact failed: {error}")))?;
            println!("Sending...");
            while form.is_submitting() {
                thread::sleep(CONTACT_POLL_INTERVAL);
                form.poll(&transport)
                    .map_err(|error| CommandError::Runtime(format!("contact failed: {error}")))?;
            }

            let summary = present_form_status(form.status()).unwrap_or_default();
            match form.status() {
                FormStatus::Failed(reason) => {
                    Err(CommandError::Runtime(format!("{summary} ({reason})")))
                }
                _ => {
                    println!("{summary}");
                    Ok(())
                }
            }
        }
        Command::Theme(action) => {
            let mut settings = load_theme_settings(config)?;
            match action {
                ThemeAction::Show => {}
                ThemeAction::Toggle => {
                    settings.toggle().map_err(|error| {
                        CommandError::Runtime(format!("theme change failed: {error}"))
                    })?;
                }
                ThemeAction::Set(mode) => {
                    settings.set_mode(mode).map_err(|error| {
                        CommandError::Runtime(format!("theme change failed: {error}"))
                    })?;
                }
            }
            println!(
                "dark mode: {}",
                if settings.mode().is_dark() { "on" } else { "off" }
            );
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  folio ui");
    println!("  folio categories");
    println!("  folio gallery [category]");
    println!("  folio show <artwork_id>");
    println!("  folio home");
    println!("  folio about");
    println!("  folio contact <name> <email> <message>");
    println!("  folio theme [toggle|dark|light]");
}
