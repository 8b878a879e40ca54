use crate::app::error::MergeError;
use std::path::PathBuf;

/// Something the walker reports while it runs.
#[derive(Debug)]
pub enum WalkEvent {
    /// A directory that matched an exclude entry and was not listed.
    Excluded(PathBuf),
    /// A file whose content was appended to the output.
    Added(PathBuf),
    /// A recoverable failure; the affected entry was skipped.
    Failed(MergeError),
}

pub trait EventSink {
    fn emit(&mut self, event: WalkEvent);
}

/// Routes events through the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink {
    pub failures: usize,
}

impl EventSink for LogSink {
    fn emit(&mut self, event: WalkEvent) {
        match event {
            WalkEvent::Excluded(path) => log::info!("Excluding folder: {}", path.display()),
            WalkEvent::Added(path) => log::info!("Adding file: {}", path.display()),
            WalkEvent::Failed(err) => {
                self.failures += 1;
                log::error!("{}", err);
            }
        }
    }
}

/// Records events in order.
impl EventSink for Vec<WalkEvent> {
    fn emit(&mut self, event: WalkEvent) {
        self.push(event);
    }
}
