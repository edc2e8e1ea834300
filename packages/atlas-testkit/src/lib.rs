mod error;

pub use error::{Error, Result};

use std::{
	collections::HashMap,
	future::IntoFuture,
	sync::{Arc, Mutex},
	time::Duration,
};

use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing,
};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::oneshot};

pub const SEMANTIC_PATH: &str = "/api/semantic-search";

/// How the mock endpoint answers one request.
#[derive(Debug, Clone)]
pub enum SemanticReply {
	Results(Value),
	Status(u16),
	Malformed(&'static str),
	Delayed(Duration, Box<SemanticReply>),
}
impl SemanticReply {
	pub fn results(results: Value) -> Self {
		Self::Results(serde_json::json!({ "results": results }))
	}

	pub fn delayed(self, delay: Duration) -> Self {
		Self::Delayed(delay, Box::new(self))
	}
}

type Responder = dyn Fn(&str) -> SemanticReply + Send + Sync;

#[derive(Clone)]
struct ServerState {
	responder: Arc<Responder>,
	requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// An HTTP server on a random loopback port that mimics the remote semantic-search endpoint.
pub struct SemanticServer {
	api_base: String,
	requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
	shutdown: Option<oneshot::Sender<()>>,
}
impl SemanticServer {
	pub async fn start<F>(responder: F) -> Result<Self>
	where
		F: Fn(&str) -> SemanticReply + Send + Sync + 'static,
	{
		let requests = Arc::new(Mutex::new(Vec::new()));
		let state = ServerState { responder: Arc::new(responder), requests: requests.clone() };
		let app = Router::new().route(SEMANTIC_PATH, routing::get(semantic_handler)).with_state(state);
		let listener = TcpListener::bind("127.0.0.1:0").await.map_err(Error::Bind)?;
		let addr = listener.local_addr().map_err(Error::Bind)?;
		let (tx, rx) = oneshot::channel();
		let server = axum::serve(listener, app).with_graceful_shutdown(async move {
			let _ = rx.await;
		});

		tokio::spawn(async move {
			let _ = server.into_future().await;
		});

		Ok(Self { api_base: format!("http://{addr}"), requests, shutdown: Some(tx) })
	}

	pub fn api_base(&self) -> &str {
		&self.api_base
	}

	/// Query parameters of every request received so far, in arrival order.
	pub fn requests(&self) -> Vec<HashMap<String, String>> {
		self.requests.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn semantic_config(&self) -> atlas_config::Semantic {
		semantic_config(&self.api_base)
	}
}

impl Drop for SemanticServer {
	fn drop(&mut self) {
		if let Some(tx) = self.shutdown.take() {
			let _ = tx.send(());
		}
	}
}

/// A full configuration around `semantic`, with the bundled catalog and default search limits.
pub fn config(semantic: atlas_config::Semantic) -> atlas_config::Config {
	atlas_config::Config {
		service: atlas_config::Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		catalog: atlas_config::Catalog::default(),
		search: atlas_config::Search::default(),
		semantic,
	}
}

pub fn semantic_config(api_base: &str) -> atlas_config::Semantic {
	atlas_config::Semantic {
		enabled: true,
		api_base: api_base.to_string(),
		path: SEMANTIC_PATH.to_string(),
		top: 5,
		threshold: 0.25,
		timeout_ms: Some(5_000),
		debounce_ms: 0,
		default_headers: Map::new(),
	}
}

async fn semantic_handler(
	State(state): State<ServerState>,
	Query(params): Query<HashMap<String, String>>,
) -> Response {
	let query = params.get("q").cloned().unwrap_or_default();

	state.requests.lock().unwrap_or_else(|err| err.into_inner()).push(params);

	let mut reply = (state.responder)(&query);

	loop {
		match reply {
			SemanticReply::Delayed(delay, inner) => {
				tokio::time::sleep(delay).await;

				reply = *inner;
			},
			SemanticReply::Results(body) => return (StatusCode::OK, Json(body)).into_response(),
			SemanticReply::Status(code) => {
				return StatusCode::from_u16(code)
					.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
					.into_response();
			},
			SemanticReply::Malformed(raw) => {
				return (StatusCode::OK, [("content-type", "application/json")], raw)
					.into_response();
			},
		}
	}
}
