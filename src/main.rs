use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    guestbook_server::run().await
}
