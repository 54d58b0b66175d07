/// Web API Handlers
///
/// This module contains the handlers for the JSON endpoints. Each handler
/// parses the raw body, runs the guards it needs, calls the repository and
/// returns the serialized entity.
///
/// Bodies are taken as raw bytes rather than through `Json` because the GET
/// and DELETE endpoints carry a body too, and clients rarely send a
/// `Content-Type` with those.

mod user_handlers;
mod card_handlers;
mod card_category_handlers;

// Re-export all handlers
pub use user_handlers::*;
pub use card_handlers::*;
pub use card_category_handlers::*;
