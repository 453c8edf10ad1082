use std::process::exit;

use tracing::{metadata::LevelFilter, subscriber::set_global_default};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, Layer};

use copyright_year_ui::app::{App, State};

fn main() {
    init_logs();

    tracing::info!("starting app");

    let state = State::new(copyright_year::current_year());

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder {
            inner_size: Some([520.0, 420.0].into()),
            ..Default::default()
        },
        ..Default::default()
    };

    if let Err(error) = eframe::run_native(
        "copyright-year",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc, state)))),
    ) {
        tracing::error!(%error, "failed to run the app");
        exit(2)
    }
}

fn init_logs() {
    let log_format = tracing_subscriber::fmt::format()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .compact();

    let log_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // same format as the cli, which logs to stderr since its stdout is the result
    if let Err(error) = set_global_default(
        tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .event_format(log_format)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(log_level),
        ),
    ) {
        eprintln!("failed to set global logs subscriber: {error}");
    }
}
