use getfullyear::get_full_year;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init()?;

    let year = get_full_year().await?;
    info!("Fetched year {}", year.year);
    println!("{}", year);

    Ok(())
}
