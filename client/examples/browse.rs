use anyhow::{Context, Result};
use clap::Parser;
use pokedex_client::{ClientConfig, LoadOutcome, Pokedex};
use tracing_subscriber::{EnvFilter, fmt};

/// Page through the Pokedex and optionally filter the loaded list.
#[derive(Parser, Debug)]
#[command(name = "browse")]
struct Args {
    /// Number of pages to load
    #[arg(short, long, default_value_t = 2)]
    pages: u32,

    /// Entries per page (defaults to POKEDEX_PAGE_SIZE or 20)
    #[arg(long)]
    page_size: Option<u32>,

    /// API host (defaults to POKEDEX_BASE_URL or https://pokeapi.co)
    #[arg(long)]
    base_url: Option<String>,

    /// Filter the loaded entries by name or number
    #[arg(short, long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::from_env();
    if let Some(size) = args.page_size {
        config = config.with_page_size(size);
    }
    if let Some(url) = args.base_url {
        config = config.with_base_url(url);
    }

    let dex = Pokedex::new(config).context("Failed to build HTTP client")?;
    let list = dex.list_controller();

    for _ in 0..args.pages {
        match list.load_next_page().await {
            LoadOutcome::Loaded { count } => println!("Loaded {} entries", count),
            LoadOutcome::Skipped => break,
            LoadOutcome::Failed(message) => anyhow::bail!("Page load failed: {}", message),
        }
    }

    if let Some(query) = &args.search {
        list.search(query);
    }

    let state = list.state();
    for entry in state.entries() {
        println!("#{:<5} {:<20} {}", entry.number, entry.pokemon_name, entry.image_url);
    }

    println!(
        "\n{} shown, page {}, {}",
        state.entries().len(),
        state.page(),
        if state.end_reached() {
            "end of dex"
        } else {
            "more available"
        }
    );

    Ok(())
}
