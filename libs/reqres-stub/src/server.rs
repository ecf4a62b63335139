use std::io;
use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderName;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::methods::delete_user::__path_delete_user;
use crate::methods::delete_user::delete_user;
use crate::methods::entities::{
    RegisterRequest, RegisterResponse, SingleUserResponse, Support, UpdateUserRequest,
    UpdateUserResponse, UserData,
};
use crate::methods::get_user_by_id::__path_get_user_by_id;
use crate::methods::get_user_by_id::get_user_by_id;
use crate::methods::health_check::__path_health_check;
use crate::methods::health_check::health_check;
use crate::methods::register::__path_register;
use crate::methods::register::register;
use crate::methods::routes::{
    OPENAPI_JSON_PATH, REGISTER_PATH, SERVICE_HEALTH_PATH, USER_BY_ID_PATH,
};
use crate::methods::update_user::__path_update_user;
use crate::methods::update_user::update_user;
use crate::shutdown::shutdown_signal;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(get_user_by_id, update_user, delete_user, register, health_check),
    components(schemas(
        UserData, Support, SingleUserResponse,
        RegisterRequest, RegisterResponse, ErrorResponse,
        UpdateUserRequest, UpdateUserResponse
    )),
    tags(
        (name = "users", description = "User endpoints"),
        (name = "auth", description = "Registration"),
        (name = "stub", description = "Stub housekeeping")
    )
)]
pub struct StubApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(StubApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    let x_request_id = HeaderName::from_static("x-request-id");

    Router::new()
        .route(
            USER_BY_ID_PATH,
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
        .route(REGISTER_PATH, post(register))
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

/// A stub serving on a background task until stopped or dropped
#[derive(Debug)]
pub struct RunningStub {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl RunningStub {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.task).await {
            tracing::warn!(error = %e, "stub task ended abnormally");
        }
    }
}

impl Drop for RunningStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn spawn(addr: SocketAddr) -> io::Result<RunningStub> {
    let listener = TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel::<()>();
    let app = router(AppState::seeded());

    let task = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = rx.await;
            })
            .await;
        if let Err(e) = result {
            tracing::error!(error = %e, "stub server failed");
        }
    });

    tracing::info!(%addr, "reqres stub listening");

    Ok(RunningStub {
        addr,
        shutdown: Some(tx),
        task,
    })
}

/// Spawns on an ephemeral loopback port.
pub async fn spawn_local() -> io::Result<RunningStub> {
    spawn(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await
}

/// Serves in the foreground until SIGINT/SIGTERM.
pub async fn serve(addr: SocketAddr) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let bound = listener.local_addr()?;

    tracing::info!("reqres stub is ready to accept requests at: http://{}", bound);

    axum::serve(listener, router(AppState::seeded()))
        .with_graceful_shutdown(shutdown_signal())
        .await
}
