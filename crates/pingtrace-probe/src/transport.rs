use std::process::Command;

use tracing::debug;

use crate::error::TraceError;

pub const PING_PROGRAM: &str = "ping";

#[cfg(target_os = "macos")]
const TTL_FLAG: &str = "-m";
#[cfg(not(target_os = "macos"))]
const TTL_FLAG: &str = "-t";

/// Issues a single echo request and hands back whatever text the probe
/// utility printed.
pub trait Pinger {
    /// One echo request to `target`, waiting at most `timeout_secs`.
    /// `ttl` caps the hop count when present.
    fn ping(&self, target: &str, ttl: Option<u8>, timeout_secs: u64)
        -> Result<String, TraceError>;
}

/// [`Pinger`] backed by the system ping binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPinger;

impl Pinger for SystemPinger {
    fn ping(
        &self,
        target: &str,
        ttl: Option<u8>,
        timeout_secs: u64,
    ) -> Result<String, TraceError> {
        let mut command = Command::new(PING_PROGRAM);
        command.arg("-c").arg("1");
        command.arg("-W").arg(wait_arg(timeout_secs));
        if let Some(ttl) = ttl {
            command.arg(TTL_FLAG).arg(ttl.to_string());
        }
        command.arg(target);

        debug!(host = target, ?ttl, timeout_secs, "issuing echo request");

        // ping exits non-zero for lost probes; stdout is still the
        // classification input, so the exit status is ignored.
        let output = command
            .output()
            .map_err(|source| TraceError::TransportUnavailable {
                program: PING_PROGRAM,
                source,
            })?;

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

// -W takes milliseconds on macOS, seconds elsewhere.
#[cfg(target_os = "macos")]
fn wait_arg(timeout_secs: u64) -> String {
    (timeout_secs * 1000).to_string()
}

#[cfg(not(target_os = "macos"))]
fn wait_arg(timeout_secs: u64) -> String {
    timeout_secs.to_string()
}
