// src/bin/write_openapi_snapshot.rs
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let path = agency_cms::presentation::http::openapi::write_openapi_snapshot()?;
    println!("OpenAPI snapshot written to {path}");
    Ok(())
}
