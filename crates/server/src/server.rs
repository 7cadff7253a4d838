use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{balances, expenses};
use engine::Ledger;

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<RwLock<Ledger>>,
}

impl ServerState {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/expenses", post(expenses::create))
        .route("/expenses/{household_id}", get(expenses::list))
        .route("/expenses/{household_id}/balances", get(balances::get))
        .route(
            "/expenses/{household_id}/settle-up",
            get(balances::settle_up),
        )
        .with_state(state)
}

pub async fn run(ledger: Ledger) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(ledger, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(ledger))).await
}

pub fn spawn_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
