#[tokio::main]
async fn main() -> anyhow::Result<()> {
    summarizer_app::run_app().await
}
