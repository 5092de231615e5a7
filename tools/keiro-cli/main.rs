use clap::Parser;
use keiro::editor::validate::{validate_endpoints, validate_general, validate_responses};
use keiro::prelude::*;
use std::fs;

/// A flow schema engine CLI: validate a flow draft and generate its
/// OpenAPI-shaped document, or decode a stored backend listing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a flow draft JSON file to validate and encode
    draft_path: Option<String>,

    /// Path to a backend listing JSON file to decode instead
    #[arg(short, long)]
    listing: Option<String>,

    /// Write the generated document to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Encode without running the validation gates first
    #[arg(long)]
    no_validate: bool,
}

fn main() {
    let cli = Cli::parse();

    match (&cli.listing, &cli.draft_path) {
        (Some(listing_path), _) => run_decode(listing_path),
        (None, Some(draft_path)) => run_encode(draft_path, cli.output.as_deref(), cli.no_validate),
        (None, None) => exit_with_error("Provide a draft path, or --listing to decode a listing."),
    }
}

/// Encodes one draft file, gate-checking it first unless told otherwise.
fn run_encode(draft_path: &str, output: Option<&str>, no_validate: bool) {
    let draft_json = fs::read_to_string(draft_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read draft file '{}': {}", draft_path, e))
    });
    let draft: FlowDraft = serde_json::from_str(&draft_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse draft JSON: {}", e)));

    if !no_validate {
        let errors: Vec<ValidationError> = validate_general(&draft)
            .into_iter()
            .chain(validate_endpoints(&draft))
            .chain(validate_responses(&draft))
            .collect();
        if !errors.is_empty() {
            eprintln!("Draft failed validation:");
            for error in &errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(1);
        }
        println!("Draft passed all validation gates.");
    }

    let document = encode_flow(&draft);
    let rendered = serde_json::to_string_pretty(&document)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to render document: {}", e)));

    match output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            println!("Document written to '{}'.", path);
        }
        None => println!("{}", rendered),
    }
}

/// Decodes a stored listing and prints a per-flow summary.
fn run_decode(listing_path: &str) {
    let listing_json = fs::read_to_string(listing_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read listing file '{}': {}",
            listing_path, e
        ))
    });
    let listing: FlowListing = serde_json::from_str(&listing_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse listing JSON: {}", e)));

    let flows = decode_listing(listing);
    println!("Decoded {} flow(s).", flows.len());

    for flow in &flows {
        let status = if flow.active { "active" } else { "inactive" };
        println!("\n{} ({}) -> {}", flow.name, status, flow.base_url);
        for endpoint in &flow.endpoints {
            println!(
                "  {} {} ({} params, {} body fields, {} responses)",
                endpoint.method,
                endpoint.path,
                endpoint.parameters.len(),
                endpoint.body_properties.len(),
                endpoint.responses.len(),
            );
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
