#[tokio::main]
async fn main() {
    if let Err(e) = bookshelf::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
