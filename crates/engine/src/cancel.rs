use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;

/// Cooperative stop flag, checked by the animation loop between frames.
///
/// Clones share the same flag, so any holder can stop the loop: another
/// thread, a test, or a termination signal once
/// [`cancel_on_termination_signals`](CancelToken::cancel_on_termination_signals)
/// is installed.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Cancel this token when SIGINT or SIGTERM (SIGQUIT on unix) arrives.
    ///
    /// The handler only sets the flag; cleanup happens when the loop sees it.
    /// A second signal after the token is cancelled exits immediately with
    /// status 1, so a stuck frame can still be killed.
    pub fn cancel_on_termination_signals(&self) -> Result<()> {
        for &sig in TERM_SIGNALS {
            flag::register_conditional_shutdown(sig, 1, Arc::clone(&self.0))
                .with_context(|| format!("can't install shutdown handler for signal {sig}"))?;
            flag::register(sig, Arc::clone(&self.0))
                .with_context(|| format!("can't install cancel handler for signal {sig}"))?;
        }
        Ok(())
    }
}
