mod cors;
mod routes;

use std::net::SocketAddr;

use axum::Router;
use cors::middleware::dispatch;

#[tokio::main]
async fn main() {
    let app_state = cors::build_state();

    let app = Router::new().fallback(dispatch).with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    println!("Axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
