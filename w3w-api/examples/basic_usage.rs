//! Basic usage of the client
//!
//! Run with `W3W_API_KEY=<key> cargo run -p w3w-api --example basic_usage`.

use w3w_api::{AutosuggestOptions, Config, ConvertOptions, Coordinates, Service};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("W3W_API_KEY")?;
    let service = Service::new(Config::new(api_key)?)?;

    // Method 1: local recognition, no network involved
    println!("=== Method 1: Find addresses in text ===");
    let text = "Please leave the parcel at ///filled.count.soap, or index.home.raft.";
    for candidate in service.find_possible_3wa(text) {
        println!("  candidate: {candidate}");
    }
    println!(
        "  'filled-count-soap' looks like a typo: {}\n",
        service.did_you_mean("filled-count-soap")
    );

    // Method 2: confirm with the service
    println!("=== Method 2: Validate ===");
    for input in ["filled.count.soap", "filled.count.sop"] {
        println!("  {input}: {}", service.is_valid_3wa(input).await?);
    }

    // Method 3: convert in both directions
    println!("\n=== Method 3: Convert ===");
    let square = service
        .v3()
        .convert_to_3wa(
            Coordinates::new(51.520847, -0.195521),
            &ConvertOptions::default().language("fr"),
        )
        .await?;
    println!("  51.520847,-0.195521 -> {}", square.words);

    let square = service
        .v3()
        .convert_to_coordinates("filled.count.soap", &ConvertOptions::default())
        .await?;
    println!(
        "  filled.count.soap -> {} (near {})",
        square.coordinates, square.nearest_place
    );

    // Method 4: autosuggest with clipping
    println!("\n=== Method 4: Autosuggest ===");
    let options = AutosuggestOptions::default()
        .clip_to_country(["GB"])
        .focus(Coordinates::new(51.520847, -0.195521))
        .n_results(3);
    let response = service.v3().autosuggest("filled.count.so", &options).await?;
    for suggestion in &response.suggestions {
        println!(
            "  {}. {} ({})",
            suggestion.rank, suggestion.words, suggestion.nearest_place
        );
    }

    Ok(())
}
