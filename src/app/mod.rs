// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together configuration, localization and the
//! comparison screen, and translates the screen's effects into tasks (file
//! dialogs, camera capture, permission prompts, image header reads).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::media::{self, permission, AcquisitionResponse};
use crate::ui::compare;
use crate::ui::theming::ThemeMode;
use config::CameraConfig;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    compare: compare::State,
    theme_mode: ThemeMode,
    camera: CameraConfig,
    /// Directory camera captures are written to; `None` when no data
    /// directory can be resolved on this platform.
    captures_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("images", &self.compare.images().len())
            .field("has_permission", &self.compare.has_permission())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and preloads the images passed on the
    /// command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        } else if let Err(err) = config::write_if_missing(&config) {
            log::warn!("Could not write default settings: {err}");
        }

        if let Some(index) = flags.camera_index {
            config.camera.device_index = index;
        }

        let viewport = iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        let has_permission = permission::has_permission();
        log::debug!("Camera permission at startup: {has_permission}");

        let mut app = App {
            i18n,
            compare: compare::State::new(&config.compare, has_permission, viewport),
            theme_mode: config.general.theme_mode,
            camera: config.camera,
            captures_dir: paths::get_captures_dir_with_override(None),
        };

        let task = if flags.file_paths.is_empty() {
            Task::none()
        } else {
            let paths = flags
                .file_paths
                .into_iter()
                .map(PathBuf::from)
                .filter(|path| {
                    let supported = media::is_supported_image(path);
                    if !supported {
                        log::warn!("Skipping unsupported file {}", path.display());
                    }
                    supported
                });
            let preload = AcquisitionResponse::from_paths(paths);
            app.update(Message::Compare(compare::Message::LibraryPicked(preload)))
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            compare: &mut self.compare,
            camera: &self.camera,
            captures_dir: self.captures_dir.as_ref(),
        };

        match message {
            Message::Compare(compare_message) => {
                update::handle_compare_message(&mut ctx, compare_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            compare: &self.compare,
        })
    }
}
