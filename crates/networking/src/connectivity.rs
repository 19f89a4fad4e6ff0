//! Connectivity monitoring
//!
//! The monitor is a passive observer of the host environment's online/offline
//! transitions. It never probes the network, retries, or debounces: the
//! environment reports a transition and the monitor records it.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// A network transition reported by the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkEvent {
    /// The environment became online
    Online,
    /// The environment became offline
    Offline,
}

impl NetworkEvent {
    /// Online state after this transition
    pub fn is_online(&self) -> bool {
        matches!(self, NetworkEvent::Online)
    }
}

/// Handle returned when registering a listener
pub type ListenerId = u64;

/// Callback invoked on each transition
pub type NetworkListener = Arc<dyn Fn(NetworkEvent) + Send + Sync>;

/// Source of connectivity status and transition notifications
///
/// Hosts implement this over whatever the platform offers (a browser's
/// `online`/`offline` events, an OS network manager, ...).
pub trait NetworkEnvironment: Send + Sync {
    /// Current connectivity as the environment reports it
    fn is_online(&self) -> bool;

    /// Register a transition listener
    fn add_listener(&self, listener: NetworkListener) -> ListenerId;

    /// Deregister a listener; returns whether it was registered
    fn remove_listener(&self, id: ListenerId) -> bool;
}

/// Environment whose transitions are driven explicitly
///
/// Used by headless hosts and tests.
pub struct ManualNetwork {
    online: AtomicBool,
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, NetworkListener)>>,
}

impl ManualNetwork {
    /// Create an environment with the given initial status
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
            next_id: AtomicU64::new(1),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Report a transition. Listeners are notified only when the status
    /// actually changes.
    pub fn set_online(&self, online: bool) {
        let previous = self.online.swap(online, Ordering::SeqCst);
        if previous == online {
            return;
        }

        let event = if online { NetworkEvent::Online } else { NetworkEvent::Offline };

        // Snapshot so listeners may (de)register without deadlocking
        let listeners: Vec<NetworkListener> =
            self.listeners.lock().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(event);
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl NetworkEnvironment for ManualNetwork {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    fn add_listener(&self, listener: NetworkListener) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }
}

/// Tracks the current online state for the rest of the application
///
/// Registers with the environment on construction and deregisters on
/// [`teardown`](Self::teardown) or drop.
pub struct ConnectivityMonitor {
    env: Arc<dyn NetworkEnvironment>,
    listener: Option<ListenerId>,
    state: Arc<watch::Sender<bool>>,
}

impl ConnectivityMonitor {
    /// Start monitoring: read the initial status and register for transitions
    pub fn new(env: Arc<dyn NetworkEnvironment>) -> Self {
        let initial = env.is_online();
        let (tx, _rx) = watch::channel(initial);
        let state = Arc::new(tx);

        let sink = Arc::clone(&state);
        let listener = env.add_listener(Arc::new(move |event: NetworkEvent| {
            let online = event.is_online();
            let previous = sink.send_replace(online);
            if previous != online {
                if online {
                    tracing::info!("connectivity restored");
                } else {
                    tracing::warn!("connectivity lost");
                }
            }
        }));

        tracing::debug!(online = initial, "connectivity monitor started");
        Self { env, listener: Some(listener), state }
    }

    /// Current online state (snapshot)
    pub fn is_online(&self) -> bool {
        *self.state.borrow()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    /// Whether the monitor is still registered with the environment
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// Stop observing transitions. The last known state stays readable.
    pub fn teardown(&mut self) {
        if let Some(id) = self.listener.take() {
            self.env.remove_listener(id);
            tracing::debug!("connectivity monitor stopped");
        }
    }
}

impl Drop for ConnectivityMonitor {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for ConnectivityMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectivityMonitor")
            .field("online", &self.is_online())
            .field("active", &self.is_active())
            .finish()
    }
}
