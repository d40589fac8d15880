//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::book_handler;
use crate::domain::{BookResponse, CreateBookCommand};

/// OpenAPI documentation for the books service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books Service",
        version = "0.1.0",
        description = "Book catalogue backend-for-frontend with creation notifications",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        book_handler::get_books,
        book_handler::get_by_id,
        book_handler::create_book,
    ),
    components(
        schemas(
            BookResponse,
            CreateBookCommand,
        )
    ),
    tags(
        (name = "Books", description = "Book catalogue operations")
    )
)]
pub struct ApiDoc;
