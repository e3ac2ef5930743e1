use clap::Parser;
use dictionary::DatasetLoader;

use config::{Args, Config};
use session::{Command, Session};
use storage::Storage;
use utilities::input;

mod config;
mod logging;
mod render;
mod session;
mod storage;
mod theme;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::new(Args::parse());
    logging::init(&config.log_filter);
    tracing::debug!(?config, "starting");

    let storage = Storage::open_or_in_memory(&config.database_url).await?;
    let index = DatasetLoader::new().load_or_fallback(&config.dataset).await;
    let mut session = Session::start(index, storage, config.suggestion_limit).await;

    println!(
        "{} Type a word to look it up, or `help` for commands.",
        session.theme().heading("wordbook")
    );
    if !session.history().is_empty() {
        println!("{} recent searches, type `history` to see them.", session.history().len());
    }

    loop {
        let prompt = match session.shown() {
            Some(word) => format!("{word} >> "),
            None => ">> ".to_string(),
        };
        let Some(line) = input(&prompt)? else {
            println!();
            break;
        };
        match Command::parse(&line) {
            None => continue,
            Some(Command::Exit) => break,
            Some(command) => {
                if let Err(error) = session.run(command).await {
                    tracing::error!(%error, "command failed");
                    eprintln!("Encountered an error: {error}");
                }
            }
        }
    }
    tracing::debug!("shutting down");
    Ok(())
}
