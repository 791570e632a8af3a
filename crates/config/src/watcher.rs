use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Burst window: editors fire several filesystem events per save; events
/// closer together than this collapse into one notification.
const SETTLE_MS: u64 = 200;

/// Watches the config file and sends one notification per save.
///
/// The parent directory is watched rather than the file itself: most
/// editors replace the file on save (write + rename), which would
/// otherwise silently detach a file-level watch.
///
/// # Example
/// ```no_run
/// # use rope_config::ConfigWatcher;
/// # async fn demo() {
/// let (_watcher, mut rx) = ConfigWatcher::spawn("/home/user/.config/rope/rope.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed — reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires once per change burst.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(4);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

    let (raw_tx, mut raw_rx) = mpsc::channel::<notify::Result<notify::Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = raw_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    let dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = raw_rx.recv().await {
        match event {
            Ok(e) if concerns(&e, &path) => {
                // Drain the rest of the save burst before notifying.
                while let Ok(Some(_)) =
                    tokio::time::timeout(Duration::from_millis(SETTLE_MS), raw_rx.recv()).await
                {}

                if tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// Whether a raw filesystem event is a content change of the watched file.
/// Remove/rename counts: atomic-save editors replace the file.
fn concerns(event: &notify::Event, target: &Path) -> bool {
    use notify::EventKind::{Create, Modify, Remove};

    if !matches!(event.kind, Modify(_) | Create(_) | Remove(_)) {
        return false;
    }
    let name = target.file_name();
    event.paths.iter().any(|p| p.file_name() == name)
}
