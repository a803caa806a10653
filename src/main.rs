//! Event-driven storefront: reads visitor events from stdin, writes HTML to stdout.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use dotenvy::dotenv;

use puppy_shop::catalog::Catalog;
use puppy_shop::gateway::JsonlOutbox;
use puppy_shop::models::config::AppConfig;
use puppy_shop::render::Renderer;
use puppy_shop::storefront::{Event, SessionOptions, Storefront};

/// Upper bound on how long the loop sleeps when nothing is pending.
const IDLE_WAIT: Duration = Duration::from_secs(3600);

fn emit(html: Option<String>) {
    let Some(html) = html else {
        return;
    };
    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{html}").and_then(|()| stdout.flush()) {
        log::error!("Failed to write output: {err}");
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match AppConfig::load(Path::new("config"), &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading config: {err}");
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Error loading catalog: {err}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded catalog v{} with {} puppies",
        catalog.version(),
        catalog.len()
    );

    let renderer = match Renderer::new(&config) {
        Ok(renderer) => renderer,
        Err(err) => {
            log::error!("Template parsing error(s): {err}");
            std::process::exit(1);
        }
    };

    let options = SessionOptions {
        items_per_page: config.items_per_page,
        debounce: config.debounce(),
    };
    let gateway = JsonlOutbox::new(&config.outbox_path);
    let mut storefront = Storefront::new(catalog, renderer, gateway, options);

    // Stdin is read on its own thread; every event is handled here.
    let (sender, receiver) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    log::error!("Failed to read input: {err}");
                    break;
                }
            }
        }
    });

    emit(storefront.handle(Event::Show, Instant::now()));

    loop {
        let wait = storefront
            .next_deadline(Instant::now())
            .unwrap_or(IDLE_WAIT);

        match receiver.recv_timeout(wait) {
            Ok(line) => match Event::parse(&line) {
                Ok(Some(event)) => emit(storefront.handle(event, Instant::now())),
                Ok(None) => {}
                Err(err) => log::warn!("Ignoring input {line:?}: {err}"),
            },
            Err(RecvTimeoutError::Timeout) => emit(storefront.poll(Instant::now())),
            Err(RecvTimeoutError::Disconnected) => {
                emit(storefront.flush_filters());
                break;
            }
        }
    }
}
