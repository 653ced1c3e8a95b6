//! HTTP chat boundary
//!
//! | Route | Description |
//! |-------|-------------|
//! | `POST /api/chat` | Send a message, receive the agent reply |
//! | `GET /health` | Liveness plus whether the agent has been built |
//! | `/` (optional) | Static chat page |

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

use atiende_application::MessageHandler;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub handler: MessageHandler,
}

impl AppState {
    pub fn new(handler: MessageHandler) -> Self {
        Self { handler }
    }
}

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::serve;
