//! Book handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::{BookResponse, CreateBookCommand};
use crate::errors::{AppError, AppResult};
use crate::infra::NotificationPublisher;
use crate::services::BookService;

/// Create book routes
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_books).post(create_book))
        .route("/:id", get(get_by_id))
}

/// List all books
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "Books",
    responses(
        (status = 200, description = "All stored books", body = Vec<BookResponse>)
    )
)]
pub async fn get_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookResponse>>> {
    tracing::info!("Get book list");
    let books = state.book_service.get_books().await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "The requested book", body = BookResponse),
        (status = 404, description = "Book isn't found (precise status mode)", body = String),
        (status = 500, description = "Book isn't found (legacy status mode) or other failure", body = String)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<BookResponse>> {
    tracing::info!("Find book by id {}", id);
    let book = state.book_service.get_book(id).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Create a book and announce it on the notification channel
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "Books",
    request_body = CreateBookCommand,
    responses(
        (status = 200, description = "Book created", body = BookResponse),
        (status = 400, description = "Malformed body (precise status mode)", body = String),
        (status = 500, description = "Malformed body (legacy status mode) or other failure", body = String)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Json(command), _): WithRejection<Json<CreateBookCommand>, AppError>,
) -> AppResult<Json<BookResponse>> {
    tracing::info!("Create books");
    let book = state.book_service.create(command).await?;
    let response = BookResponse::from(book);

    // Best-effort: the publisher swallows its own failures.
    state.publisher.publish(&response).await;

    Ok(Json(response))
}
