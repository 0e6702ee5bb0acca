#[tokio::main]
async fn main() {
    taskpad_lib::run().await;
}
