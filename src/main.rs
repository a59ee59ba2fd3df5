mod app;
mod theme;

use app::FlashcardsApp;
use clap::Parser;
use flashcards_app::config::{self, CONFIG_FILE, Config};
use flashcards_app::import::{CardSource, load_or_default};
use flashcards_app::FlashcardSession;
use std::path::PathBuf;

/// Vocabulary flashcards from a `term,definition` CSV file.
#[derive(Parser, Debug)]
#[command(name = "flashcards", version, about)]
struct Cli {
    /// Vocab file to study (defaults to vocab.csv beside the app)
    #[arg(long)]
    vocab: Option<PathBuf>,

    /// Configuration file (defaults to flashcards.toml beside the app)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep the cards in file order
    #[arg(long)]
    no_shuffle: bool,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let app_dir = config::app_dir();

    let config_path = cli.config.unwrap_or_else(|| app_dir.join(CONFIG_FILE));
    let mut config = Config::load_or_default(&config_path);
    if cli.no_shuffle {
        config.shuffle = false;
    }

    // --vocab is taken relative to the working directory, the config value relative to the app
    let vocab_path = match cli.vocab {
        Some(vocab) => {
            config.vocab_file = vocab.clone();
            vocab
        }
        None => config.vocab_path(&app_dir),
    };
    log::info!("Reading vocab from {}", vocab_path.display());

    let outcome = load_or_default(&vocab_path);
    match outcome.source {
        CardSource::File => {
            log::info!("Studying {} cards from the vocab file", outcome.cards.len())
        }
        CardSource::Default => log::info!("Studying the {} built-in cards", outcome.cards.len()),
    }
    let mut rng = rand::thread_rng();
    let session = FlashcardSession::new(outcome, config.vocab_name(), config.shuffle, &mut rng);
    let background =
        theme::Background::generate(&mut rng, config.window.width, config.window.height);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(|cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(FlashcardsApp::new(session, background)))
        }),
    )
}
