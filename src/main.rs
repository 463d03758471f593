//! Stockroom - back-office admin console for a small e-commerce shop
//! Built with iced, talking to the shop's REST backend

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod forms;
mod i18n;
mod store;
mod ui;
mod utils;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(1280.0, 800.0))
        .antialiasing(true)
        .run()
}
