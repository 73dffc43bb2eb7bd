use std::{
    env,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use expenseur_rs::{
    AppState, build_router, graceful_shutdown, initialize_db,
    stores::{DEMO_USER, MemoryExpenseStore, SqliteExpenseStore},
};

/// The JSON API server for expenseur_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, default_value = "expenses.db")]
    db_path: String,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Serve from an in-memory store seeded with sample data for the demo
    /// user instead of opening the SQLite database.
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let secret = env::var("COOKIE_SECRET")
        .expect("The environment variable 'COOKIE_SECRET' must be set");

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    if args.demo {
        tracing::info!("running in demo mode, expenses belong to the user \"{DEMO_USER}\"");
        let state = AppState::new(&secret, MemoryExpenseStore::with_demo_data());
        serve(addr, handle, build_router(state)).await;
    } else {
        let connection =
            Connection::open(&args.db_path).expect("Could not open the expense database");
        initialize_db(&connection).expect("Could not initialize the expense database");
        let store = SqliteExpenseStore::new(Arc::new(Mutex::new(connection)));
        let state = AppState::new(&secret, store);
        serve(addr, handle, build_router(state)).await;
    }
}

async fn serve(addr: SocketAddr, handle: Handle<SocketAddr>, router: Router) {
    let router = add_middleware(router);

    tracing::info!("HTTP server listening on {addr}");
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Could not serve the app");
}

fn add_middleware(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http().make_span_with(|req: &Request| {
        let method = req.method();
        let uri = req.uri();

        let matched_path = req
            .extensions()
            .get::<MatchedPath>()
            .map(|matched_path| matched_path.as_str());

        tracing::debug_span!("request", %method, %uri, matched_path)
    });

    router
        .layer(tracing_layer)
        // A slow or wedged store request should fail the call rather than
        // hold the client's controls disabled forever.
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();
}
