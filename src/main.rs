use std::net::SocketAddr;
use std::process;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::{
    routing::{get, post},
    Router,
};
use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use roster::api::fetch_members;
use roster::config::{self, DEFAULT_HOST, DEFAULT_PORT, SEARCH_DEBOUNCE_MS};
use roster::handlers;
use roster::models::{AppState, Member};
use roster::services::{load_initial_roster, SearchDebouncer};

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

async fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let members_url = config::get_members_url();

    let client = reqwest::Client::builder()
        .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    let initial = load_initial_roster(&client, &members_url).await;

    AppState {
        roster: Arc::new(Mutex::new(initial)),
        search_debounce: SearchDebouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
        custom_css: None,
    }
}

fn build_app(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::roster::roster_page))
        .route("/search", post(handlers::roster::search_input))
        .route("/page", post(handlers::roster::page_set))
        .route("/page/first", post(handlers::roster::page_first))
        .route("/page/last", post(handlers::roster::page_last))
        .route(
            "/members/delete-selected",
            post(handlers::roster::delete_selected),
        )
        .route("/members/:id/toggle", post(handlers::roster::toggle_member))
        .route("/members/:id/delete", post(handlers::roster::delete_member))
        .route("/members/:id/edit", post(handlers::roster::edit_member))
        .route("/members/:id/save", post(handlers::roster::save_member))
        .route("/members/:id/cancel", post(handlers::roster::cancel_edit))
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!(
                    "{} {}: {}",
                    yansi::Paint::red("Failed to read custom stylesheet at"),
                    path,
                    e
                );
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_app(state);
    tracing::info!(%addr, "Starting member admin server");
    println!(
        "{} {}",
        yansi::Paint::new("Member admin running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            // Run the server and log any errors (do not panic with unwrap()).
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn print_members_table(members: &[Member]) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table.set_header(vec!["ID", "Name", "Email", "Role"]);
    for m in members {
        table.add_row(vec![&m.id, &m.name, &m.email, &m.role]);
    }
    println!("\n{table}");
}

#[derive(Parser)]
#[command(
    name = "roster",
    author,
    version,
    about = "Member admin command-line tool",
    long_about = r#"Roster — a single-page admin table over a member directory.

The directory is read once from a remote JSON endpoint at startup; searching,
paging, inline edits and deletes are local state changes with no persistence.
Use `MEMBERS_URL` (or an `--env-file`) to point at a different endpoint.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Build a release binary:
      cargo build --release
  3) Inspect the directory from the terminal:
      roster list
      roster list --search admin --page 2
"#,
    after_help = "Use `roster <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// List members in the terminal
    #[command(
        about = "List members from the configured endpoint",
        long_about = "Fetch the member directory and print it as a table. `--search` applies the same name/email/role filter as the web UI; `--page` shows one 10-row page (use 0 to show everything)."
    )]
    List {
        /// Filter by a case-insensitive term matched against name, email and role
        #[arg(long)]
        search: Option<String>,
        /// Page number to display (1-indexed). Use 0 to show all members without pagination.
        #[arg(long, short = 'p', default_value = "0")]
        page: usize,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration (members endpoint reachability)
    #[command(
        about = "Validate configuration and ensure the members endpoint responds.",
        long_about = "Resolve the members endpoint from the environment and attempt one fetch, reporting whether a member list came back."
    )]
    CheckConfig { env_file: Option<String> },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // Dispatch CLI commands. If no command provided, serve the web app by default
    if cli.command.is_none() {
        let state = build_state_from_env(None).await;
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::List {
            search,
            page,
            env_file,
        } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            let mut directory = state.roster.lock().unwrap();
            if let Some(term) = search {
                directory.commit_search(term);
            }
            let total_count = directory.filtered().len();

            if page == 0 {
                let members: Vec<Member> =
                    directory.filtered().into_iter().cloned().collect();
                print_members_table(&members);
                println!(
                    "\n{}",
                    yansi::Paint::new(format!(
                        "Showing all {} members (use --page 1 to enable pagination)",
                        total_count
                    ))
                    .dim()
                );
            } else {
                directory.goto_page(page);
                let members: Vec<Member> = directory
                    .current_page_members()
                    .into_iter()
                    .cloned()
                    .collect();
                let page_count = directory.page_count();
                print_members_table(&members);
                if page_count > 1 {
                    println!(
                        "\n{}",
                        yansi::Paint::new(format!(
                            "Page {} of {} | Showing {} of {} matching members",
                            directory.current_page(),
                            page_count,
                            members.len(),
                            total_count
                        ))
                        .cyan()
                    );
                    if directory.current_page() > 1 {
                        println!(
                            "{} {}",
                            yansi::Paint::new("←").bold(),
                            yansi::Paint::new(format!(
                                "Previous page: roster list --page {}",
                                directory.current_page() - 1
                            ))
                            .dim()
                        );
                    }
                    if directory.current_page() < page_count {
                        println!(
                            "{} {}",
                            yansi::Paint::new("→").bold(),
                            yansi::Paint::new(format!(
                                "Next page: roster list --page {}",
                                directory.current_page() + 1
                            ))
                            .dim()
                        );
                    }
                }
            }
            println!();
        }
        Commands::CheckConfig { env_file } => {
            config::load_env_file(env_file.as_deref());
            let members_url = config::get_members_url();
            let client = reqwest::Client::builder()
                .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client");
            match fetch_members(&client, &members_url).await {
                Ok(members) => {
                    println!(
                        "{}",
                        yansi::Paint::new(format!(
                            "Configuration looks valid ({} members returned from {})",
                            members.len(),
                            members_url
                        ))
                        .green()
                    );
                    process::exit(0);
                }
                Err(e) => {
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
    }
}
