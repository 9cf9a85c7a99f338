use mock_upstream::MockUpstream;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "4000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    let mock = MockUpstream::with_videos(&["dQw4w9WgXcQ", "9bZkp7q19f0", "kJQP7kiw5Fk"]);
    mock_upstream::run(listener, mock).await
}
