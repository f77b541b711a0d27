//! `relaybot gh` handler.

use relaybot::{CommandError, CommandErrorKind, RelayConfig, RelayResult, build_github};
use tracing::instrument;

/// Run a `/gh` command directly against the dispatcher and print the result.
///
/// Bypasses the admin gate: whoever runs the binary holds the token.
///
/// # Errors
///
/// Returns error if no GitHub token is configured.
#[instrument(skip(config))]
pub async fn run_gh(config: &RelayConfig, args: &[String]) -> RelayResult<()> {
    let executor = build_github(config)?.ok_or_else(|| {
        CommandError::new(CommandErrorKind::Unavailable {
            command: "/gh".to_string(),
            reason: "no GitHub token configured (set RELAYBOT__GITHUB__TOKEN)".to_string(),
        })
    })?;

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    println!("{}", executor.dispatch(&args).await);
    Ok(())
}
