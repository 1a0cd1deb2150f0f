#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vocab_flashcards_backend::run().await
}
