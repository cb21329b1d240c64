use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Journal API",
        version = "1.0.0",
        description = "HTTP JSON API for personal journal entries"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Home
        crate::handlers::home::home,

        // Health
        crate::handlers::health::health_check,
        crate::handlers::metrics::metrics_handler,

        // Entries
        crate::handlers::entries_handler::get_entries,
        crate::handlers::entries_handler::get_entry,
        crate::handlers::entries_handler::create_entry,
        crate::handlers::entries_handler::update_entry,
        crate::handlers::entries_handler::delete_entry,
    ),
    components(
        schemas(
            crate::models::JournalEntry,
            crate::models::CreateEntryInput,
            crate::models::UpdateEntryInput,
        )
    ),
    tags(
        (name = "home", description = "Welcome message"),
        (name = "health", description = "Health check and metrics"),
        (name = "entries", description = "Journal entry management"),
    )
)]
pub struct ApiDoc;
