use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use adgen_studio::app::Route;
use adgen_studio::components::style::Style;
use adgen_studio::components::{asset_grid, toast};
use adgen_studio::config::{ClientConfig, ConfigError, DEFAULT_RECIPE_PATH};
use adgen_studio::net::api::ApiClient;
use adgen_studio::net::download::{self, DownloadError};
use adgen_studio::net::types::{ApiError, RunsApi, UploadFile, UploadRequest};
use adgen_studio::pages::new_run::{NewRunPage, SubmitOutcome};
use adgen_studio::pages::run_detail::{self, RunDetailPage};
use adgen_studio::pages::runs::{self, RunsPage};
use adgen_studio::state::assets::AssetGridState;
use adgen_studio::state::run_detail::RunDetailState;
use adgen_studio::state::run_form::{FormError, RunForm};
use adgen_studio::state::run_list::{RunListState, StatusFilter};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Download(#[from] DownloadError),
    #[error("invalid form: {0}")]
    Form(#[from] FormError),
    #[error("failed to read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("run {run_id} has no asset #{index}")]
    NoSuchAsset { run_id: String, index: usize },
    #[error("a submission is already in flight")]
    Busy,
    #[error("backend reported unhealthy")]
    Unhealthy,
    #[error("failed to listen for Ctrl-C: {0}")]
    Signal(std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "adgen", about = "Create and track advertisement generation runs")]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "ADGEN_API_URL")]
    api_url: Option<String>,

    /// Disable ANSI colors.
    #[arg(long, default_value_t = false)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is up.
    Ping,
    /// Create a run from a prompt.
    New(NewArgs),
    /// Create a run from a recipe and uploaded files.
    Upload(UploadArgs),
    /// List runs.
    Runs {
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        status: StatusFilter,
        /// Keep refreshing until Ctrl-C.
        #[arg(long, default_value_t = false)]
        watch: bool,
    },
    /// Show one run.
    Run {
        run_id: String,
        /// Keep refreshing until Ctrl-C.
        #[arg(long, default_value_t = false)]
        watch: bool,
    },
    /// Cancel a pending or running run.
    Cancel { run_id: String },
    /// Ask the backend to finalize a run.
    Finalize { run_id: String },
    /// List a run's generated assets.
    Assets {
        run_id: String,
        /// Open the 1-based image asset in the preview.
        #[arg(long)]
        preview: Option<usize>,
    },
    /// Save one generated asset.
    DownloadAsset {
        run_id: String,
        /// 1-based asset number as shown by `assets`.
        index: usize,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Save the zip bundle of a run.
    Download {
        run_id: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Delete a run and its files.
    Delete { run_id: String },
}

#[derive(Args, Debug)]
struct NewArgs {
    #[arg(long)]
    prompt: String,
    #[arg(long)]
    negative_prompt: Option<String>,
    #[arg(long)]
    seed: Option<String>,
    #[arg(long)]
    logo_image: Option<String>,
    #[arg(long)]
    mood_image: Option<String>,
    /// Open the new run and keep refreshing until Ctrl-C.
    #[arg(long, default_value_t = false)]
    watch: bool,
}

#[derive(Args, Debug)]
struct UploadArgs {
    #[arg(long, default_value = DEFAULT_RECIPE_PATH)]
    recipe_path: String,
    /// Logo or moodboard files.
    files: Vec<PathBuf>,
    #[arg(long, default_value_t = false)]
    watch: bool,
}

struct CliContext {
    config: ClientConfig,
    client: Arc<ApiClient>,
    style: Style,
}

impl CliContext {
    fn api(&self) -> Arc<dyn RunsApi> {
        Arc::clone(&self.client) as Arc<dyn RunsApi>
    }
}

fn parse_filter(raw: &str) -> Result<StatusFilter, String> {
    StatusFilter::parse(raw).ok_or_else(|| {
        let names: Vec<&str> = StatusFilter::ALL.iter().map(|f| f.name()).collect();
        format!("unknown status '{raw}', expected one of: {}", names.join(", "))
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url)?;
    }
    let client = Arc::new(ApiClient::from_config(&config)?);
    let style = Style { color: !cli.no_color && std::io::stdout().is_terminal() };
    let ctx = CliContext { config, client, style };
    info!(api_url = %ctx.config.api_url, "adgen client ready");

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::New(args) => run_new(&ctx, args).await,
        Command::Upload(args) => run_upload(&ctx, args).await,
        Command::Runs { status, watch } => run_list(&ctx, status, watch).await,
        Command::Run { run_id, watch } => run_show(&ctx, &run_id, watch).await,
        Command::Cancel { run_id } => run_cancel(&ctx, &run_id).await,
        Command::Finalize { run_id } => run_finalize(&ctx, &run_id).await,
        Command::Assets { run_id, preview } => run_assets(&ctx, &run_id, preview).await,
        Command::DownloadAsset { run_id, index, out } => run_download_asset(&ctx, &run_id, index, &out).await,
        Command::Download { run_id, out } => run_download(&ctx, &run_id, out).await,
        Command::Delete { run_id } => run_delete(&ctx, &run_id).await,
    }
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    if !ctx.client.health().await?.ok {
        return Err(CliError::Unhealthy);
    }
    println!("ok");
    Ok(())
}

async fn run_new(ctx: &CliContext, args: NewArgs) -> Result<(), CliError> {
    let form = RunForm {
        prompt: args.prompt,
        negative_prompt: args.negative_prompt.unwrap_or_default(),
        seed: args.seed.unwrap_or_default(),
        logo_image: args.logo_image.unwrap_or_default(),
        mood_image: args.mood_image.unwrap_or_default(),
    };
    let page = NewRunPage::new(ctx.api(), ctx.config.toast_ttl());
    let outcome = page.submit(&form).await;
    finish_submission(ctx, &page, outcome, args.watch).await
}

async fn run_upload(ctx: &CliContext, args: UploadArgs) -> Result<(), CliError> {
    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CliError::ReadFile { path: path.clone(), source })?;
        let filename = path
            .file_name()
            .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
        files.push(UploadFile { filename, bytes });
    }

    let page = NewRunPage::new(ctx.api(), ctx.config.toast_ttl());
    let outcome = page.submit_upload(UploadRequest { recipe_path: args.recipe_path, files }).await;
    finish_submission(ctx, &page, outcome, args.watch).await
}

async fn finish_submission(
    ctx: &CliContext,
    page: &NewRunPage,
    outcome: SubmitOutcome,
    watch: bool,
) -> Result<(), CliError> {
    if let Some(current) = page.toast() {
        eprintln!("{}", toast::render(&current, ctx.style));
    }
    match outcome {
        SubmitOutcome::Created { route, response } => {
            println!("{}", response.run_id);
            if let Some(reason) = &response.error {
                eprintln!("generation did not start: {reason}");
            }
            if watch {
                if let Route::RunDetail(run_id) = route {
                    info!(route = %Route::RunDetail(run_id.clone()), "navigating");
                    return watch_run(ctx, &run_id).await;
                }
            }
            Ok(())
        }
        SubmitOutcome::Rejected(e) => Err(e.into()),
        SubmitOutcome::Busy => Err(CliError::Busy),
        SubmitOutcome::Failed(e) => Err(e.into()),
    }
}

async fn run_list(ctx: &CliContext, status: StatusFilter, watch: bool) -> Result<(), CliError> {
    if watch {
        let page = RunsPage::new(ctx.api());
        page.set_filter(status);
        let style = ctx.style;
        let mounted = page.mount(ctx.config.poll.list(), move |state| {
            repaint(style, &runs::render(state, style));
        });
        wait_for_ctrl_c().await?;
        mounted.unmount();
        return Ok(());
    }

    let mut state = RunListState { filter: status, ..RunListState::default() };
    state.set_runs(ctx.client.list_runs().await?);
    print!("{}", runs::render(&state, ctx.style));
    Ok(())
}

async fn run_show(ctx: &CliContext, run_id: &str, watch: bool) -> Result<(), CliError> {
    if watch {
        return watch_run(ctx, run_id).await;
    }
    let page = RunDetailPage::new(run_id, ctx.api());
    page.refresh().await;
    print_detail(ctx, run_id, &page.snapshot(), &AssetGridState::default());
    Ok(())
}

async fn watch_run(ctx: &CliContext, run_id: &str) -> Result<(), CliError> {
    let page = RunDetailPage::new(run_id, ctx.api());
    let style = ctx.style;
    let id = run_id.to_owned();
    let mounted = page.mount(ctx.config.poll.detail(), move |state| {
        repaint(style, &run_detail::render(&id, state, &AssetGridState::default(), style));
    });
    wait_for_ctrl_c().await?;
    mounted.unmount();
    Ok(())
}

async fn run_cancel(ctx: &CliContext, run_id: &str) -> Result<(), CliError> {
    let page = RunDetailPage::new(run_id, ctx.api());
    page.load().await;
    if page.cancel().await? {
        print_detail(ctx, run_id, &page.snapshot(), &AssetGridState::default());
    } else {
        let status = page.snapshot().run.map_or_else(|| "unknown".to_owned(), |run| run.status);
        println!("Run {run_id} cannot be cancelled (status {status})");
    }
    Ok(())
}

async fn run_finalize(ctx: &CliContext, run_id: &str) -> Result<(), CliError> {
    let mut state = RunDetailState::default();
    state.set_run(ctx.client.finalize_run(run_id).await?);
    print_detail(ctx, run_id, &state, &AssetGridState::default());
    Ok(())
}

async fn run_assets(ctx: &CliContext, run_id: &str, preview: Option<usize>) -> Result<(), CliError> {
    let run = ctx.client.get_run(run_id).await?;
    let mut grid = AssetGridState::default();
    if let Some(index) = preview {
        let artifact = index
            .checked_sub(1)
            .and_then(|i| run.artifacts().get(i))
            .ok_or_else(|| CliError::NoSuchAsset { run_id: run_id.to_owned(), index })?;
        if !grid.open(artifact) {
            eprintln!("asset #{index} is not an image; nothing to preview");
        }
    }
    if run.artifacts().is_empty() {
        let mut state = RunDetailState::default();
        state.set_run(run);
        println!("{}", state.empty_assets_message());
    } else {
        print!("{}", asset_grid::render(run.artifacts(), &grid, ctx.style));
    }
    Ok(())
}

async fn run_download_asset(ctx: &CliContext, run_id: &str, index: usize, out: &Path) -> Result<(), CliError> {
    let run = ctx.client.get_run(run_id).await?;
    let artifact = index
        .checked_sub(1)
        .and_then(|i| run.artifacts().get(i))
        .ok_or_else(|| CliError::NoSuchAsset { run_id: run_id.to_owned(), index })?;
    let path = download::download_artifact(&ctx.client, artifact, out).await?;
    println!("{}", path.display());
    Ok(())
}

async fn run_download(ctx: &CliContext, run_id: &str, out: Option<PathBuf>) -> Result<(), CliError> {
    let path = out.unwrap_or_else(|| PathBuf::from(format!("{}.zip", download::safe_file_name(run_id))));
    let bytes = download::download_bundle(&ctx.client, run_id, &path).await?;
    println!("{} ({bytes} bytes)", path.display());
    Ok(())
}

async fn run_delete(ctx: &CliContext, run_id: &str) -> Result<(), CliError> {
    ctx.client.delete_run(run_id).await?;
    println!("deleted {run_id}");
    Ok(())
}

fn print_detail(ctx: &CliContext, run_id: &str, state: &RunDetailState, grid: &AssetGridState) {
    print!("{}", run_detail::render(run_id, state, grid, ctx.style));
}

fn repaint(style: Style, text: &str) {
    if style.color {
        print!("\x1b[2J\x1b[H");
    } else {
        println!();
    }
    print!("{text}");
}

async fn wait_for_ctrl_c() -> Result<(), CliError> {
    tokio::signal::ctrl_c().await.map_err(CliError::Signal)?;
    info!("view closed");
    Ok(())
}
