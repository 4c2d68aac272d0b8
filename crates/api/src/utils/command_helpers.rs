//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::future::Future;
use std::time::Instant;

use profilemap_domain::Result as DomainResult;

use crate::utils::logging::log_command_execution;

/// Execute a command with timing, structured logging and String error
/// conversion
///
/// The error string is the message shown inline next to the control that
/// triggered the command.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext) -> Result<MyResponse, String> {
///     execute_command("my_module::my_command", || async {
///         ctx.some_component.do_something().await
///     })
///     .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> Result<T, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let elapsed = start.elapsed();
    log_command_execution(command_name, elapsed, result.as_ref().err().map(|err| err.label()));

    result.map_err(|err| err.user_message())
}
