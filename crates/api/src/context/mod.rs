//! Application context - dependency injection container

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use parking_lot::Mutex;
use profilemap_core::{
    AdminModal, AdminPanel, AppShell, AuthProvider as AuthProviderPort, MapOverlay, ProfileList,
    ProfileStore, ProfileTable as ProfileTablePort,
};
use profilemap_domain::{Config, ProfileMapError, Result};
use profilemap_infra::BackendClient;
use tokio::sync::{Mutex as AsyncMutex, MutexGuard as AsyncMutexGuard, RwLock};
use tracing::info;

/// Type alias for profile table port trait object
type DynProfileTablePort = dyn ProfileTablePort + Send + Sync + 'static;

/// Type alias for auth provider port trait object
type DynAuthProviderPort = dyn AuthProviderPort + Send + Sync + 'static;

/// Application context - holds all components and dependencies
///
/// Components that await the backend sit behind async locks; the map overlay
/// only does synchronous work and uses a plain mutex.
pub struct AppContext {
    pub config: Config,

    // Shared state
    pub store: ProfileStore,

    // Ports
    pub profile_table: Arc<DynProfileTablePort>,
    pub auth: Arc<DynAuthProviderPort>,

    // Components
    pub shell: AsyncMutex<AppShell>,
    pub list: RwLock<ProfileList>,
    pub map: Mutex<MapOverlay>,
    admin: AsyncMutex<AdminPanel>,
    admin_snapshot: Mutex<AdminSnapshot>,
}

/// Admin dialog state as last seen outside a running action
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminSnapshot {
    pub modal: AdminModal,
    pub error: Option<String>,
    pub confirmation_prompt: Option<String>,
    /// A submit or delete is awaiting the backend
    pub busy: bool,
}

impl AdminSnapshot {
    fn of(panel: &AdminPanel) -> Self {
        Self {
            modal: panel.modal().clone(),
            error: panel.error().map(str::to_string),
            confirmation_prompt: panel.confirmation_prompt(),
            busy: false,
        }
    }
}

/// Exclusive access to the admin panel
///
/// Publishes the panel's state for readers when released.
pub struct AdminPanelGuard<'a> {
    panel: AsyncMutexGuard<'a, AdminPanel>,
    snapshot: &'a Mutex<AdminSnapshot>,
}

impl AdminPanelGuard<'_> {
    pub fn snapshot(&self) -> AdminSnapshot {
        AdminSnapshot::of(&self.panel)
    }
}

impl Deref for AdminPanelGuard<'_> {
    type Target = AdminPanel;

    fn deref(&self) -> &AdminPanel {
        &self.panel
    }
}

impl DerefMut for AdminPanelGuard<'_> {
    fn deref_mut(&mut self) -> &mut AdminPanel {
        &mut self.panel
    }
}

impl Drop for AdminPanelGuard<'_> {
    fn drop(&mut self) {
        *self.snapshot.lock() = AdminSnapshot::of(&self.panel);
    }
}

impl AppContext {
    /// Build the context against the configured backend.
    ///
    /// # Errors
    /// [`ProfileMapError::Config`] when the backend URL or key is unusable.
    pub fn new(config: Config) -> Result<Self> {
        let client = BackendClient::new(&config.backend)?;
        let profile_table: Arc<DynProfileTablePort> = Arc::new(client.profile_table());
        let auth: Arc<DynAuthProviderPort> = Arc::new(client.auth_provider());
        info!(backend = %config.backend.url, "backend client ready");
        Ok(Self::with_ports(config, profile_table, auth))
    }

    /// Build the context around already-constructed ports.
    pub fn with_ports(
        config: Config,
        profile_table: Arc<DynProfileTablePort>,
        auth: Arc<DynAuthProviderPort>,
    ) -> Self {
        let store = ProfileStore::new();
        let list = ProfileList::new(store.clone());
        let map = MapOverlay::new(store.clone(), config.map);

        Self {
            config,
            store,
            profile_table,
            auth,
            shell: AsyncMutex::new(AppShell::new()),
            list: RwLock::new(list),
            map: Mutex::new(map),
            admin: AsyncMutex::new(AdminPanel::new()),
            admin_snapshot: Mutex::new(AdminSnapshot::default()),
        }
    }

    /// Subscribe the shell to auth changes and read the current session.
    ///
    /// Returns whether a session exists.
    pub async fn start(&self) -> Result<bool> {
        self.shell.lock().await.start(self.auth.as_ref()).await
    }

    /// Release the auth subscription.
    pub async fn shutdown(&self) {
        self.shell.lock().await.stop();
        info!("application context shut down");
    }

    /// The admin panel for a mutating action, unless another one holds it.
    ///
    /// # Errors
    /// [`ProfileMapError::InProgress`] while a submit or delete is awaiting
    /// the backend.
    pub fn admin_panel(&self) -> Result<AdminPanelGuard<'_>> {
        let panel = self
            .admin
            .try_lock()
            .map_err(|_| ProfileMapError::InProgress("Another admin action is in progress".to_string()))?;
        Ok(AdminPanelGuard { panel, snapshot: &self.admin_snapshot })
    }

    /// Current admin state for rendering; never waits on a running action.
    pub fn admin_snapshot(&self) -> AdminSnapshot {
        match self.admin.try_lock() {
            Ok(panel) => AdminSnapshot::of(&panel),
            Err(_) => AdminSnapshot { busy: true, ..self.admin_snapshot.lock().clone() },
        }
    }
}
