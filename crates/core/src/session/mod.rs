//! Authentication port and the session-gated shell

pub mod ports;
pub mod shell;
pub mod subscription;

pub use ports::AuthProvider;
pub use shell::{AppShell, Screen, Tab};
pub use subscription::AuthSubscription;
