/**
 * egui Native Desktop App - Main Entry Point
 *
 * Sets up logging, configuration, the token store and the tokio runtime that
 * carries network calls, then hands control to the egui event loop.
 */
use eframe::egui;
use movie_catalog::egui_app::{theme::styles, views, ApiClient, AppState, Config, TokenStore};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("movie_catalog=info,movies_app=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::load()?;
    let tokens = TokenStore::open(config.token_path())?;
    let api = ApiClient::new(&config, tokens)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("movies-net")
        .build()?;
    let state = AppState::new(config, api, runtime.handle().clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([720.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Movies-App",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(MoviesApp { state, _runtime: runtime }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct MoviesApp {
    state: AppState,
    /// Kept alive for the lifetime of the window; owns the network tasks
    _runtime: tokio::runtime::Runtime,
}

impl eframe::App for MoviesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_notices(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
