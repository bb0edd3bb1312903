use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use huescope::api;
use huescope::models::AppConfig;
use huescope::server;
use huescope_engine::{Analyzer, Color, Point};

#[derive(Parser)]
#[command(name = "huescope")]
#[command(about = "Huescope - color detection and analysis server")]
struct Cli {
    /// Configuration file (YAML); defaults to $CONFIG_FILE
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Analyze a hex color and print the result as JSON
    Analyze {
        /// Color as '#rrggbb', 'rrggbb' or '#rgb'
        color: String,
    },
    /// Print the harmony schemes of a hex color as JSON
    Schemes {
        /// Color as '#rrggbb', 'rrggbb' or '#rgb'
        color: String,
    },
    /// Sample an image file and print the analysis as JSON
    Sample {
        /// PNG, JPEG, GIF, WebP or BMP file
        image: PathBuf,

        /// Sample column (center when omitted)
        #[arg(short, long, allow_negative_numbers = true)]
        x: Option<i64>,

        /// Sample row (center when omitted)
        #[arg(short, long, allow_negative_numbers = true)]
        y: Option<i64>,

        /// Averaging window edge in pixels (odd; even rounds up)
        #[arg(short, long)]
        window: Option<u32>,

        /// Read the single pixel instead of averaging
        #[arg(long)]
        no_average: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Huescope API",
        description = "Huescope - color detection and analysis server",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::detect::handle_detect,
        api::analyze::handle_analyze,
        api::history::handle_list_history,
        api::history::handle_delete_history,
        api::history::handle_clear_history,
        api::palettes::handle_list_palettes,
        api::palettes::handle_create_palette,
        api::palettes::handle_update_palette,
        api::palettes::handle_delete_palette,
        api::colors::handle_search,
        api::colors::handle_color_name,
        api::colors::handle_all_colors,
        api::colors::handle_hue_range,
        api::gradient::handle_generate,
        api::gradient::handle_custom,
        api::gradient::handle_presets,
        api::colorblindness::handle_simulate,
        api::colorblindness::handle_simulate_all,
        api::colorblindness::handle_check_pair,
        api::colorblindness::handle_info,
        api::colorblindness::handle_alternatives,
        api::mixer::handle_mix,
        api::mixer::handle_two_colors,
        api::mixer::handle_palette,
        api::tools::handle_compare,
        api::tools::handle_random,
        api::tools::handle_convert,
    ),
    components(schemas(
        api::detect::DetectRequest,
        api::detect::DetectResponse,
        api::analyze::AnalyzeRequest,
        api::analyze::AnalyzeResponse,
        api::history::HistoryResponse,
        api::history::MessageResponse,
        api::palettes::PaletteListResponse,
        api::palettes::PaletteResponse,
        huescope::models::HistoryEntry,
        huescope::models::Palette,
        huescope::models::NewPalette,
        huescope::models::PaletteUpdate,
        api::colors::SearchResponse,
        api::colors::ColorNameResponse,
        api::colors::CatalogueResponse,
        api::colors::HueResponse,
        api::gradient::GenerateGradientRequest,
        api::gradient::CustomGradientRequest,
        api::gradient::GradientResponse,
        api::gradient::CustomGradientResponse,
        api::gradient::PresetsResponse,
        api::colorblindness::SimulateRequest,
        api::colorblindness::ColorRequest,
        api::colorblindness::ColorPairRequest,
        api::colorblindness::SimulationResponse,
        api::colorblindness::AllSimulationsResponse,
        api::colorblindness::PairCheckResponse,
        api::colorblindness::DeficiencyInfoResponse,
        api::colorblindness::AlternativesResponse,
        api::mixer::MixRequest,
        api::mixer::TwoColorRequest,
        api::mixer::PaletteMixRequest,
        api::mixer::MixResponse,
        api::mixer::TwoColorResponse,
        api::mixer::PaletteMixResponse,
        api::tools::CompareResponse,
        api::tools::RandomResponse,
        api::tools::ConvertResponse,
    )),
    tags(
        (name = "Detection", description = "Color detection and analysis"),
        (name = "History", description = "Per-session detection history"),
        (name = "Palettes", description = "Per-session saved palettes"),
        (name = "Colors", description = "Named color catalogue"),
        (name = "Gradients", description = "Gradient generation"),
        (name = "Color Vision", description = "Color vision deficiency simulation"),
        (name = "Mixer", description = "Color mixing"),
        (name = "Tools", description = "Conversion, comparison and random colors")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Serve) => run_server(config_path.as_deref()).await,
        Some(Commands::Analyze { color }) => {
            init_cli_tracing();
            run_analyze_command(&color)
        }
        Some(Commands::Schemes { color }) => {
            init_cli_tracing();
            run_schemes_command(&color)
        }
        Some(Commands::Sample {
            image,
            x,
            y,
            window,
            no_average,
        }) => {
            init_cli_tracing();
            let config = AppConfig::load(config_path.as_deref());
            run_sample_command(&config, &image, Point::axes(x, y), window, no_average)
        }
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huescope=warn,huescope_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Analyze a hex color (no server needed)
fn run_analyze_command(color: &str) -> anyhow::Result<()> {
    let color: Color = color.parse()?;
    let analyzer = Analyzer::default();

    print_json(&json!({
        "color": analyzer.analyze(color),
        "schemes": analyzer.schemes_for(color),
    }))
}

/// Print the scheme set of a hex color
fn run_schemes_command(color: &str) -> anyhow::Result<()> {
    let color: Color = color.parse()?;
    print_json(&huescope_engine::schemes_for(color))
}

/// Sample an image file and print the analysis
fn run_sample_command(
    config: &AppConfig,
    image: &Path,
    point: Point,
    window: Option<u32>,
    no_average: bool,
) -> anyhow::Result<()> {
    let bytes = std::fs::read(image)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", image.display()))?;

    let mut options = config.sample_options();
    if let Some(window) = window {
        options = options.window(window);
    }
    if no_average {
        options = options.average(false);
    }

    let analyzer = Analyzer::new(options);
    let sample = analyzer.sample(&bytes, Some(point))?;
    if sample.clamped {
        tracing::warn!(x = sample.x, y = sample.y, "Point outside the image, clamped");
    }

    print_json(&json!({
        "sample": sample,
        "color": analyzer.analyze(sample.color),
        "schemes": analyzer.schemes_for(sample.color),
    }))
}

/// Display status and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    // Header
    println!("Huescope v{VERSION}");
    println!("Color detection and analysis server\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("  RUST_LOG    = {}", rust_log.as_deref().unwrap_or("(not set)"));

    // Effective configuration section
    let config = match config_path {
        Some(path) if !path.exists() => {
            println!("\nConfig: {} (file not found, using defaults)", path.display());
            AppConfig::default()
        }
        Some(path) => {
            println!("\nConfig: {}", path.display());
            AppConfig::load(Some(path))
        }
        None => {
            println!("\nConfig: defaults");
            AppConfig::default()
        }
    }
    .with_bind_addr(bind_addr);

    println!("  bind_addr         {}", config.bind_addr);
    println!("  max_upload_bytes  {}", config.max_upload_bytes);
    println!(
        "  sample            window {}, average {}",
        config.sample.window, config.sample.average
    );
    println!(
        "  history           limit {} (max {}), {} per session",
        config.history.default_limit,
        config.history.max_limit,
        config.history.max_entries_per_session
    );

    // Commands section
    println!("\nCommands:");
    println!("  huescope serve              Start the HTTP server");
    println!("  huescope analyze <color>    Analyze a hex color");
    println!("  huescope schemes <color>    Print harmony schemes");
    println!("  huescope sample <image>     Sample an image file");
    println!("\nRun 'huescope --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huescope=debug,huescope_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config =
        AppConfig::load(config_path).with_bind_addr(std::env::var("BIND_ADDR").ok());
    let bind_addr = config.bind_addr.clone();

    tracing::info!(
        config = ?config_path.map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        max_upload_bytes = config.max_upload_bytes,
        "Configuration loaded"
    );

    // Create application state using shared server module
    let state = server::create_app_state(config);

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Huescope server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
