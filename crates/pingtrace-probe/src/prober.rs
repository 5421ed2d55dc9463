//! Hop-by-hop path discovery.

use std::io::Write;

use pingtrace_model::{HopRecord, Responder, RttSample};
use tracing::debug;

use crate::error::TraceError;
use crate::parser::{classify_reply, parse_rtt, ProbeReply};
use crate::transport::Pinger;

#[derive(Debug, Clone)]
pub struct TraceSettings {
    /// Hop bound, inclusive.
    pub max_hops: u32,
    /// Follow-up latency probes per responsive hop.
    pub probes_per_hop: u32,
    /// Wait bound per probe, in seconds.
    pub timeout_secs: u64,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            max_hops: 29,
            probes_per_hop: 3,
            timeout_secs: 2,
        }
    }
}

/// Drives hop-by-hop discovery over a [`Pinger`].
///
/// Each hop gets exactly one TTL-limited probe; a responsive hop then gets
/// three unrestricted latency probes against the discovered address. Probes
/// are strictly sequential, one in flight at a time.
#[derive(Debug, Clone)]
pub struct HopProber<P> {
    pinger: P,
    settings: TraceSettings,
}

impl<P: Pinger> HopProber<P> {
    pub fn new(pinger: P) -> Self {
        Self {
            pinger,
            settings: TraceSettings::default(),
        }
    }

    pub fn with_settings(pinger: P, settings: TraceSettings) -> Self {
        Self { pinger, settings }
    }

    /// Lazy hop sequence for `target`.
    ///
    /// Probing happens as the iterator is advanced. The sequence ends after
    /// the destination replies, after `max_hops` hops, or at the first
    /// transport failure; it cannot be restarted.
    pub fn hops<'a>(&'a self, target: &'a str) -> Hops<'a, P> {
        Hops {
            prober: self,
            target,
            next_hop: 1,
            done: false,
        }
    }

    /// Runs the trace to completion, writing one line per hop to `out`.
    pub fn run(&self, target: &str, out: &mut impl Write) -> Result<(), TraceError> {
        for record in self.hops(target) {
            writeln!(out, "{}", record?)?;
        }
        Ok(())
    }
}

/// Lazy, finite hop sequence produced by [`HopProber::hops`].
pub struct Hops<'a, P> {
    prober: &'a HopProber<P>,
    target: &'a str,
    next_hop: u32,
    done: bool,
}

impl<P: Pinger> Iterator for Hops<'_, P> {
    type Item = Result<HopRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.next_hop > self.prober.settings.max_hops {
            return None;
        }
        if self.target.trim().is_empty() {
            self.done = true;
            return Some(Err(TraceError::EmptyTarget));
        }

        let hop = self.next_hop;
        self.next_hop += 1;

        match self.probe_hop(hop) {
            Ok(record) => Some(Ok(record)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<P: Pinger> Hops<'_, P> {
    fn probe_hop(&mut self, hop: u32) -> Result<HopRecord, TraceError> {
        let settings = &self.prober.settings;
        let ttl = u8::try_from(hop).unwrap_or(u8::MAX);
        let raw = self
            .prober
            .pinger
            .ping(self.target, Some(ttl), settings.timeout_secs)?;

        let reply = classify_reply(&raw);
        debug!(hop, ?reply, "classified probe");

        match reply {
            ProbeReply::TimeExceeded { host, addr } => {
                let samples = self.measure(&addr)?;
                Ok(HopRecord {
                    hop,
                    responder: Some(Responder { host, addr }),
                    samples,
                })
            }
            ProbeReply::EchoReply => {
                self.done = true;
                let samples = self.measure(self.target)?;
                Ok(HopRecord {
                    hop,
                    responder: Some(Responder {
                        host: None,
                        addr: self.target.to_string(),
                    }),
                    samples,
                })
            }
            ProbeReply::Timeout | ProbeReply::Malformed => Ok(HopRecord {
                hop,
                responder: None,
                samples: Vec::new(),
            }),
        }
    }

    fn measure(&self, addr: &str) -> Result<Vec<RttSample>, TraceError> {
        let settings = &self.prober.settings;
        let mut samples = Vec::with_capacity(settings.probes_per_hop as usize);
        for _ in 0..settings.probes_per_hop {
            let raw = self.prober.pinger.ping(addr, None, settings.timeout_secs)?;
            samples.push(parse_rtt(&raw));
        }
        Ok(samples)
    }
}
