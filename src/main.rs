#[tokio::main]
async fn main() {
    clubreg::start_server().await;
}
