//! Shared hop data structures for pingtrace.

use std::fmt;

/// One round-trip latency measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RttSample {
    /// Parsed latency in milliseconds.
    Measured(f64),
    /// The probe produced no usable timing.
    Unknown,
}

impl fmt::Display for RttSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RttSample::Measured(ms) => write!(f, "{ms} ms"),
            RttSample::Unknown => write!(f, "*"),
        }
    }
}

/// The node that answered a probe.
#[derive(Debug, Clone, PartialEq)]
pub struct Responder {
    /// Reverse-resolved name, when the probe output carried one.
    pub host: Option<String>,
    pub addr: String,
}

impl fmt::Display for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{host} ({})", self.addr),
            None => write!(f, "{}", self.addr),
        }
    }
}

/// One line of traceroute output.
///
/// Renders as `<hop>  <responder> <t1> <t2> <t3>`, or `<hop>  * * *` when
/// the hop never answered.
#[derive(Debug, Clone, PartialEq)]
pub struct HopRecord {
    /// 1-based hop distance.
    pub hop: u32,
    /// `None` for an unresponsive hop.
    pub responder: Option<Responder>,
    /// Latency samples against the responder, at most three.
    pub samples: Vec<RttSample>,
}

impl fmt::Display for HopRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.responder {
            Some(responder) => {
                write!(f, "{}  {responder}", self.hop)?;
                for sample in &self.samples {
                    write!(f, " {sample}")?;
                }
                Ok(())
            }
            None => write!(f, "{}  * * *", self.hop),
        }
    }
}
