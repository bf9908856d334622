use tutui::{
    cli::Cli,
    config::Config,
    content::ContentStore,
    logging::{self, LogLevel},
    markup,
    ui::viewer::Viewer,
};

use clap::Parser;
use eyre::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(LogLevel::from_flags(cli.verbose, cli.debug));

    // Load configuration
    let config = match cli.config {
        Some(path) => Config::load_from(path)?,
        None => match Config::new() {
            Ok(config) => config,
            Err(err) => {
                logging::warn(format!("Could not load configuration: {}", err));
                logging::warn("Starting with default settings");
                Config::with_defaults()
            }
        },
    };

    if cli.list {
        print_outline();
        return Ok(());
    }

    if let Some(key) = cli.dump.as_deref() {
        dump_lesson(key);
        return Ok(());
    }

    let mut viewer = Viewer::new(config, cli.lesson.as_deref())?;
    viewer.run()
}

fn print_outline() {
    let store = ContentStore::curriculum();
    for section in store.sections() {
        println!("{}", section.title);
        for link in section.links {
            let record = store.lookup(link.key);
            println!("  {:<20} {}", link.key, record.title);
        }
    }
}

fn dump_lesson(key: &str) {
    let store = ContentStore::curriculum();
    let record = store.lookup(key);
    print!("{}", markup::render_plain(record, 72));
}
