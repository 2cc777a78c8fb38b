use anyhow::Result;
use clap::Parser;
use pokedex_client::{ClientConfig, Pokedex, UiState};
use tracing_subscriber::{EnvFilter, fmt};

/// Show one Pokemon with its stats, flavor text and evolutions.
#[derive(Parser, Debug)]
#[command(name = "detail")]
struct Args {
    /// Name or national dex number
    query: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let dex = Pokedex::new(ClientConfig::from_env())?;
    let detail = dex.detail_controller();

    let pokemon = match detail.get_detail(&args.query).await {
        UiState::Success(pokemon) => pokemon,
        UiState::Error(message) => anyhow::bail!("{}: {}", args.query, message),
        UiState::Loading => anyhow::bail!("Lookup did not complete"),
    };

    println!("#{} {}", pokemon.id, pokemon.name);
    println!("Types:  {}", pokemon.types.join(" / "));
    println!("Weight: {:.1} kg", pokemon.weight_kg());
    println!("Height: {:.1} m", pokemon.height_m());
    println!("Art:    {}", pokemon.image_url);

    let max = pokemon.max_base_stat();
    println!("\nBase stats:");
    for stat in &pokemon.stats {
        let width = (stat.base_stat * 30 / max.max(1)) as usize;
        println!("  {:<6} {:>3} {}", stat.abbreviation(), stat.base_stat, "#".repeat(width));
    }

    match detail.get_species(&pokemon.name).await {
        UiState::Success(species) if !species.flavor_text.is_empty() => {
            println!("\n{}", species.flavor_text);
        }
        UiState::Success(_) | UiState::Loading => {}
        UiState::Error(message) => println!("\n(no species info: {})", message),
    }

    let evolutions = detail
        .load_species_evolutions(&pokemon.name, &pokemon.name)
        .await;
    match &evolutions {
        UiState::Success(names) if names.is_empty() => println!("\nNo evolutions."),
        UiState::Success(names) => {
            println!("\nEvolution line: {}", names.join(", "));
            if let Some(next) = evolutions.next_evolution() {
                println!("Next: {}", next);
            }
        }
        UiState::Error(message) => println!("\nEvolutions unavailable: {}", message),
        UiState::Loading => {}
    }

    Ok(())
}
