#[tokio::main]
async fn main() {
    flashcards_app::server::start_server().await;
}
