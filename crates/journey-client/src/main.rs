#[tokio::main]
async fn main() -> anyhow::Result<()> {
    journey_client_lib::run().await
}
