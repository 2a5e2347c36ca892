//! Binary entry point. Everything lives in the library crate.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    duka_terminal::run().await
}
