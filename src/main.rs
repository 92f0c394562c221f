//! Level plot demo viewer - main entry point
//!
//! Opens an eframe window showing the sample figures from
//! [`levelplot_rs::app::DemoApp`].

use levelplot_rs::app::DemoApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,levelplot_rs=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting level plot demo viewer");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Level Plot Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Level Plot Demo",
        native_options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)?))),
    )
}
