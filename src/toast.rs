//! Toast notifications as an owned pub/sub store.
//!
//! The store lives wherever the composition root puts it; there is no
//! module-level listener list and no global mutable state. Subscribers get
//! a full snapshot after every transition, and dropping the store closes
//! every subscription.

use std::sync::Mutex;

use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    /// Dismissed toasts stay in the list with `open == false` until removed,
    /// so consumers can animate them out.
    pub open: bool,
}

/// Every state transition. `None` targets mean "all toasts".
#[derive(Debug)]
enum ToastAction {
    Add {
        title: String,
        description: Option<String>,
        variant: ToastVariant,
    },
    Update {
        id: u64,
        title: Option<String>,
        description: Option<String>,
    },
    Dismiss(Option<u64>),
    Remove(Option<u64>),
}

struct Inner {
    toasts: Vec<Toast>,
    next_id: u64,
}

pub struct ToastStore {
    limit: usize,
    inner: Mutex<Inner>,
    events: broadcast::Sender<Vec<Toast>>,
}

impl ToastStore {
    /// A store keeping at most `limit` toasts, newest first.
    pub fn new(limit: usize) -> Self {
        let (events, _) = broadcast::channel(16);
        ToastStore {
            limit,
            inner: Mutex::new(Inner {
                toasts: Vec::new(),
                next_id: 0,
            }),
            events,
        }
    }

    /// Push a toast; returns its id. Older toasts past the limit are
    /// truncated away.
    pub fn add(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
    ) -> u64 {
        self.dispatch(ToastAction::Add {
            title: title.into(),
            description,
            variant,
        })
        .expect("add always yields an id")
    }

    pub fn update(&self, id: u64, title: Option<String>, description: Option<String>) {
        self.dispatch(ToastAction::Update {
            id,
            title,
            description,
        });
    }

    /// Mark one toast (or all, with `None`) as closed without removing it.
    pub fn dismiss(&self, id: Option<u64>) {
        self.dispatch(ToastAction::Dismiss(id));
    }

    /// Delete one toast, or clear the list with `None`.
    pub fn remove(&self, id: Option<u64>) {
        self.dispatch(ToastAction::Remove(id));
    }

    /// Current list, newest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.lock().unwrap().toasts.clone()
    }

    /// Receive a snapshot after every transition. Dropping the receiver
    /// unsubscribes; dropping the store ends the stream.
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<Toast>> {
        self.events.subscribe()
    }

    fn dispatch(&self, action: ToastAction) -> Option<u64> {
        let mut inner = self.inner.lock().unwrap();
        let added = Self::reduce(&mut inner, action, self.limit);
        // No receivers is fine; the snapshot is simply unobserved.
        let _ = self.events.send(inner.toasts.clone());
        added
    }

    fn reduce(inner: &mut Inner, action: ToastAction, limit: usize) -> Option<u64> {
        match action {
            ToastAction::Add {
                title,
                description,
                variant,
            } => {
                inner.next_id += 1;
                let id = inner.next_id;
                inner.toasts.insert(
                    0,
                    Toast {
                        id,
                        title,
                        description,
                        variant,
                        open: true,
                    },
                );
                inner.toasts.truncate(limit);
                Some(id)
            }
            ToastAction::Update {
                id,
                title,
                description,
            } => {
                if let Some(toast) = inner.toasts.iter_mut().find(|t| t.id == id) {
                    if let Some(title) = title {
                        toast.title = title;
                    }
                    if let Some(description) = description {
                        toast.description = Some(description);
                    }
                }
                None
            }
            ToastAction::Dismiss(id) => {
                for toast in inner.toasts.iter_mut() {
                    if id.is_none() || id == Some(toast.id) {
                        toast.open = false;
                    }
                }
                None
            }
            ToastAction::Remove(id) => {
                match id {
                    Some(id) => inner.toasts.retain(|t| t.id != id),
                    None => inner.toasts.clear(),
                }
                None
            }
        }
    }
}

impl Default for ToastStore {
    /// The dashboard shows one toast at a time.
    fn default() -> Self {
        Self::new(1)
    }
}
