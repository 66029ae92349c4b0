//! Seed a running AgroScan server with demo fields.

use agroscan_cli::ApiClient;
use agroscan_core::models::CreateFieldRequest;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Create demo fields on an AgroScan server")]
struct Args {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:5000")]
    server: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let client = ApiClient::new(args.server);

    let demo_fields = [
        ("Wheat-2025", "wheat", 50.0),
        ("Corn-2025", "corn", 30.0),
    ];

    for (name, crop_type, area_ha) in demo_fields {
        let field = client.create_field(&CreateFieldRequest {
            name: name.to_string(),
            crop_type: crop_type.to_string(),
            area_ha,
        })?;
        println!(
            "Created field {} ({}, {} ha) with id {}",
            field.name, field.crop_type, field.area_ha, field.id
        );
    }

    Ok(())
}
