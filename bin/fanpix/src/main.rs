use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    fanpix::run().await
}
