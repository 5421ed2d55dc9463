//! Ping-driven hop discovery and output classification.

pub mod error;
pub mod parser;
pub mod prober;
pub mod transport;

pub use error::TraceError;
pub use parser::{classify_reply, parse_rtt, ProbeReply};
pub use prober::{HopProber, Hops, TraceSettings};
pub use transport::{Pinger, SystemPinger, PING_PROGRAM};
