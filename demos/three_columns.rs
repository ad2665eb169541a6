//! Three-column showcase: a framed horizontal layout of three vertical
//! stacks of scrollable text views.
//!
//! Usage: `panelkit-demo [config.json]`. Arrow keys move focus and scroll,
//! `ctrl-c` (or any configured quit key) exits. Logs go to `log_file` when
//! one is configured, never to the terminal.

use std::path::Path;

use panelkit::{
    AppConfig, Application, Border, Capabilities, Color, Component, CrosstermBackend, Fragment,
    Layout, Line, Sizing, SimpleScreen, Style, TextView,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

fn init_logging(
    config: &AppConfig,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let path = config.log_file.as_deref()?;
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path.file_name()?;

    // RUST_LOG wins over the configured filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
    Some(guard)
}

fn text_view(title: &str, color: Color) -> Component {
    let mut text = Line::styled(
        format!("{title} "),
        Style::new().fg(color).with(Capabilities::BOLD),
    );
    text.push(Fragment::raw(LOREM));
    Component::leaf(TextView::new(text))
}

fn column(colors: [Color; 3]) -> Component {
    let mut layout = Layout::vertical();
    for (idx, color) in colors.into_iter().enumerate() {
        layout.append(text_view(&format!("[{}]", color.name()), color), idx as u32 + 1);
    }
    Component::layout(layout)
}

fn build_root() -> Component {
    let layout = Layout::horizontal()
        .with_child(column([Color::Red, Color::Green, Color::Blue]), 1)
        .with_child(column([Color::Cyan, Color::Yellow, Color::BrightWhite]), 2)
        .with_child(column([Color::BrightRed, Color::BrightGreen, Color::BrightBlue]), 1);

    Component::layout(layout)
        .with_border(Border::HEAVY)
        .with_margin(Sizing::uniform(2))
        .with_padding(Sizing::uniform(2))
        .with_foreground(Color::Magenta)
}

fn main() -> panelkit::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let _log_guard = init_logging(&config);

    let mut app = Application::with_config(&config)?;
    app.register_screen(SimpleScreen::new("main", build_root()))?;
    app.activate("main")?;

    let mut backend = CrosstermBackend::new();
    let result = app.run(&mut backend);
    if let Err(err) = &result {
        tracing::error!(error = %err, "application stopped with an error");
    }
    result
}
