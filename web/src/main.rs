use dioxus::prelude::*;

use ui::SectionVisibilityProvider;
use views::admin::{
    AdminDashboard, AdminFiles, AdminLogin, AdminMessages, AdminNewsletter, AdminSections,
    BlogEditor, BlogManager,
};
use views::{About, Blog, BlogPost, Contact, Experience, Home, Portfolio, PublicLayout, Skills};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/skills")]
        Skills {},
        #[route("/experience")]
        Experience {},
        #[route("/portfolio")]
        Portfolio {},
        #[route("/contact")]
        Contact {},
        #[route("/blog")]
        Blog {},
        #[route("/blog/:slug")]
        BlogPost { slug: String },
    #[end_layout]
    #[route("/admin/login?:redirect")]
    AdminLogin { redirect: String },
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/sections")]
    AdminSections {},
    #[route("/admin/blog")]
    BlogManager {},
    #[route("/admin/blog/new")]
    BlogEditorNew {},
    #[route("/admin/blog/:id/edit")]
    BlogEditorEdit { id: String },
    #[route("/admin/newsletter")]
    AdminNewsletter {},
    #[route("/admin/messages")]
    AdminMessages {},
    #[route("/admin/files")]
    AdminFiles {},
}

/// New-post and edit-post routes share one editor view.
#[component]
fn BlogEditorNew() -> Element {
    rsx! {
        BlogEditor { id: None::<String> }
    }
}

#[component]
fn BlogEditorEdit(id: String) -> Element {
    rsx! {
        BlogEditor { id: Some(id) }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_http::services::ServeDir;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Ensure an admin account exists and drop stale sessions
    if let Err(e) = api::bootstrap::ensure_admin_user(pool).await {
        tracing::error!(error = %e, "admin provisioning failed");
    }
    if let Err(e) = api::auth::sweep_expired_sessions(pool).await {
        tracing::warn!(error = %e, "session sweep failed");
    }

    let uploads_dir =
        std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string());

    // Serve uploaded files statically next to the Dioxus application
    let router = axum::Router::new()
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SectionVisibilityProvider {
            Router::<Route> {}
        }
    }
}
