//! Demo host for the rope progress widget.
//!
//! Owns the Iced application loop and plays the part of the embedding
//! application: it drives `progress` externally (slider and buttons),
//! exposes the slack/stroke knobs, and live-reloads the widget style when
//! the config file changes on disk.

use futures::channel::mpsc::Sender;
use iced::{
    widget::{button, column, container, row, slider, text},
    Element, Length, Subscription, Task,
};
use rope_config::{default_path, load as load_config, ConfigWatcher};
use rope_theme::RopeStyle;
use rope_widget::RopeProgress;
use tracing::{info, warn};

/// Bubble-size showcase: cycling the range resizes the worst-case bubble.
const MAX_CYCLE: [i32; 3] = [10, 100, 9999];

/// Start the demo window.  Never returns under normal operation.
pub fn run() -> iced::Result {
    let config = load_config(default_path()).unwrap_or_default();
    let window = (config.window.width, config.window.height);

    iced::application(App::new, App::update, App::view)
        .subscription(App::subscription)
        .title("rope progress")
        .window_size(window)
        .run()
}

// ── Message ───────────────────────────────────────────────────────────────────

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Progress slider moved — the host sets progress externally.
    ProgressChanged(i32),
    /// Slack slider moved.
    SlackChanged(f32),
    /// Stroke-width slider moved.
    StrokeChanged(f32),
    /// Cycle the progress range to show the bubble resizing.
    MaxCycled,
    /// Config file changed on disk — reload the widget style.
    ConfigReloaded,
}

// ── State ─────────────────────────────────────────────────────────────────────

struct App {
    rope: RopeProgress,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = load_config(default_path()).unwrap_or_default();

        let mut rope = RopeProgress::with_style(RopeStyle::from_config(&config.style));
        rope.set_max(config.progress.max);
        rope.set_progress(config.progress.value);

        (Self { rope }, Task::none())
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProgressChanged(p) => self.rope.set_progress(p),
            Message::SlackChanged(s) => self.rope.set_slack(s),
            Message::StrokeChanged(w) => self.rope.set_stroke_width(w),
            Message::MaxCycled => {
                let current = self.rope.max();
                let at = MAX_CYCLE.iter().position(|&m| m == current).unwrap_or(0);
                let next = MAX_CYCLE[(at + 1) % MAX_CYCLE.len()];
                self.rope.set_max(next);
                if self.rope.progress() > next {
                    self.rope.set_progress(next);
                }
            }
            Message::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    self.rope.set_style(RopeStyle::from_config(&cfg.style));
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let rope = self.rope.view();

        let progress_row = row![
            text(format!("{} / {}", self.rope.progress(), self.rope.max())).size(14),
            slider(0..=self.rope.max(), self.rope.progress(), Message::ProgressChanged),
            button(text("cycle range").size(14)).on_press(Message::MaxCycled),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center);

        let knobs = row![
            text("slack").size(14),
            slider(0.0..=96.0, self.rope.slack(), Message::SlackChanged),
            text("stroke").size(14),
            slider(1.0..=24.0, self.rope.stroke_width(), Message::StrokeChanged),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center);

        let content = column![rope, progress_row, knobs]
            .spacing(16)
            .width(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run(config_stream)
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// The free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.

/// Watches the config file and maps each change burst to a reload message.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(4, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());
        info!("Live style reload from {}", watcher.path().display());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }
    })
}
