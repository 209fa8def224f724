use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

const PREFIX: &str = "Thought Partner: ";

#[derive(Debug, Default)]
struct StatusInner {
    text: String,
    visible: bool,
    revision: u64,
}

/// Status bar item. Cheap to clone; clones share the same text.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    inner: Arc<Mutex<StatusInner>>,
}

impl StatusBar {
    pub fn new(visible: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StatusInner {
                visible,
                ..StatusInner::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StatusInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_visible(&self, visible: bool) {
        let mut inner = self.lock();
        inner.visible = visible;
        if !visible {
            inner.text.clear();
            inner.revision += 1;
        }
    }

    /// Sets the label. Ignored while the status bar is hidden.
    pub fn update(&self, label: &str) {
        let mut inner = self.lock();
        if !inner.visible {
            return;
        }
        inner.text = if label.is_empty() {
            String::new()
        } else {
            format!("{PREFIX}{label}")
        };
        inner.revision += 1;
    }

    pub fn clear(&self) {
        self.update("");
    }

    /// Clears the label after `delay` unless it was changed in the meantime.
    pub fn clear_after(&self, delay: Duration) -> JoinHandle<()> {
        let revision = self.lock().revision;
        let status = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut inner = status.lock();
            if inner.revision == revision {
                inner.text.clear();
                inner.revision += 1;
            }
        })
    }

    pub fn text(&self) -> String {
        self.lock().text.clone()
    }
}
