use clap::Parser;
use keiro::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate sample flow drafts for exercising the encoder
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// How many endpoints to generate
    #[arg(long, default_value_t = 3)]
    endpoints: usize,
}

const RESOURCES: [&str; 6] = ["orders", "users", "products", "tickets", "invoices", "events"];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!("Generating a sample flow draft with {} endpoint(s)...", cli.endpoints);

    let mut draft = FlowDraft::new();
    draft.name = Some("Generated flow".to_string());
    draft.description = Some("Synthetic draft for encoder testing".to_string());
    draft.base_url = Some("https://api.generated.example".to_string());

    for _ in 0..cli.endpoints {
        draft.endpoints.push(generate_endpoint(&mut rng));
    }

    let json_output = serde_json::to_string_pretty(&draft)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved flow draft to '{}'", cli.output);

    Ok(())
}

fn generate_endpoint(rng: &mut impl Rng) -> Endpoint {
    let resource = RESOURCES.choose(rng).copied().unwrap_or("items");
    let mut endpoint = Endpoint::new();
    endpoint.name = format!("Fetch {}", resource);
    endpoint.description = format!("Generated operation over {}", resource);

    if rng.random_bool(0.5) {
        // Detail endpoint with a described path parameter
        endpoint.path = format!("/{}/{{id}}", resource);
        let mut param = Parameter::new("id", ParamLocation::Path);
        param.param_type = ParamType::Integer;
        param.description = format!("{} identifier", resource);
        param.example = Some(rng.random_range(1..1000).to_string());
        endpoint.parameters.push(param);
    } else {
        // Collection endpoint, optionally writable
        endpoint.path = format!("/{}", resource);
        if rng.random_bool(0.5) {
            endpoint.set_method(HttpMethod::Post);
            let mut prop = BodyProperty::new("name");
            prop.description = format!("Display name of the {}", resource);
            prop.example = format!("sample-{}", rng.random_range(1..100));
            endpoint.body_properties.push(prop);
        }
    }

    endpoint
}
