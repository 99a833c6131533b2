use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use grayrelay::api;
use grayrelay::models::{self, RelayConfig};
use grayrelay::pipeline;
use grayrelay::server;

#[derive(Parser)]
#[command(name = "grayrelay")]
#[command(about = "Webhook-driven chat relay that grayscales image attachments")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (webhook receiver + task worker)
    Serve,
    /// Run the image pipeline on a local file, no server or network
    Process {
        /// Input image (.png, .jpg, .jpeg)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the grayscale JPEG
        #[arg(short, long)]
        output: PathBuf,

        /// Optional output path for the thumbnail JPEG
        #[arg(short, long)]
        thumbnail: Option<PathBuf>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grayrelay API",
        description = "Webhook-driven chat relay with a grayscale image pipeline",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_webhook, api::handle_task),
    components(schemas(
        models::WebhookPayload,
        models::Event,
        models::EventMessage,
        models::ReplyMessage,
        api::WebhookResponse,
        api::TaskRequest,
        api::TaskResponse,
    )),
    tags(
        (name = "Webhook", description = "Inbound event delivery"),
        (name = "Worker", description = "Internal task execution")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Process {
            input,
            output,
            thumbnail,
        }) => run_process_command(&input, &output, thumbnail.as_deref()),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grayrelay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RelayConfig::from_env()?;
    let bind_addr = config.bind_addr.clone();

    tracing::info!(
        bucket = %config.bucket,
        chat_api = %config.chat_api_base,
        task_endpoint = %config.task_endpoint,
        "Configuration loaded"
    );

    let state = server::create_app_state(config).await;

    // Build router: shared API routes plus production-only OpenAPI docs
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Grayrelay server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run the grayscale/thumbnail pipeline against a local file
fn run_process_command(
    input: &Path,
    output: &Path,
    thumbnail: Option<&Path>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grayrelay=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let content_type = match input
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        other => anyhow::bail!("unsupported input extension: {other:?}"),
    };

    let content = models::ImageContent {
        bytes: std::fs::read(input)?,
        content_type: content_type.to_string(),
    };

    let img = pipeline::decode(&content)?;
    let gray = pipeline::to_grayscale(&img);

    let gray_jpeg = pipeline::encode_jpeg(&gray)?;
    std::fs::write(output, &gray_jpeg)?;
    println!(
        "Wrote {} ({}x{}, {} bytes)",
        output.display(),
        gray.width(),
        gray.height(),
        gray_jpeg.len()
    );

    if let Some(thumb_path) = thumbnail {
        let thumb = pipeline::thumbnail(&gray);
        let thumb_jpeg = pipeline::encode_jpeg(&thumb)?;
        std::fs::write(thumb_path, &thumb_jpeg)?;
        println!(
            "Wrote {} ({}x{}, {} bytes)",
            thumb_path.display(),
            thumb.width(),
            thumb.height(),
            thumb_jpeg.len()
        );
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let var = |key: &str| std::env::var(key).ok();

    println!("Grayrelay v{VERSION}");
    println!("Webhook-driven chat relay with a grayscale image pipeline\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR        = {}",
        var("BIND_ADDR").as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CHANNEL_SECRET   = {}",
        if var("CHANNEL_SECRET").is_some() {
            "(set)"
        } else {
            "(not set, required)"
        }
    );
    println!(
        "  CHANNEL_TOKEN    = {}",
        if var("CHANNEL_TOKEN").is_some() {
            "(set)"
        } else {
            "(not set, required)"
        }
    );
    println!(
        "  BUCKET_NAME      = {}",
        var("BUCKET_NAME").as_deref().unwrap_or("(not set, required)")
    );
    println!(
        "  STORAGE_BASE_URL = {}",
        var("STORAGE_BASE_URL")
            .as_deref()
            .unwrap_or("https://storage.googleapis.com (default)")
    );
    println!(
        "  CHAT_API_BASE    = {}",
        var("CHAT_API_BASE").as_deref().unwrap_or("(default)")
    );
    println!(
        "  TASK_ENDPOINT    = {}",
        var("TASK_ENDPOINT")
            .as_deref()
            .unwrap_or("http://127.0.0.1:<port>/task (default)")
    );

    println!("\nCommands:");
    println!("  grayrelay serve     Start the HTTP server");
    println!("  grayrelay process   Grayscale and thumbnail a local image");
    println!("\nRun 'grayrelay --help' for more details.");
}
