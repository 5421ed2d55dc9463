//! Classification of raw ping output.

use pingtrace_model::RttSample;

/// Parsed outcome of a single ping invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeReply {
    /// An intermediate router discarded the probe and announced itself.
    TimeExceeded { host: Option<String>, addr: String },
    /// The destination itself replied; the trace is complete.
    EchoReply,
    /// Nobody answered within the wait bound.
    Timeout,
    /// Output matched none of the recognized shapes.
    Malformed,
}

const TIME_EXCEEDED: &str = "Time to live exceeded";

/// A reply with this many lines or fewer carries no echo response.
const SHORT_REPLY_LINES: usize = 4;

/// Classify the output of one TTL-limited echo request.
///
/// The second output line is the status line: a time-exceeded notice names
/// the responding router, an empty status line means either nobody answered
/// (short output) or the destination itself did (full output).
pub fn classify_reply(text: &str) -> ProbeReply {
    let trimmed = text.trim();
    let lines: Vec<&str> = trimmed.lines().collect();

    let status = match lines.get(1) {
        Some(line) => line.trim(),
        None if trimmed.is_empty() => return ProbeReply::Timeout,
        None => return ProbeReply::Malformed,
    };

    if status.ends_with(TIME_EXCEEDED) {
        return match parse_exceeded_source(status) {
            Some((host, addr)) => ProbeReply::TimeExceeded { host, addr },
            None => ProbeReply::Malformed,
        };
    }

    if status.is_empty() {
        if lines.len() <= SHORT_REPLY_LINES {
            return ProbeReply::Timeout;
        }
        return ProbeReply::EchoReply;
    }

    ProbeReply::Malformed
}

/// Pull the responder out of a time-exceeded status line.
///
/// Handles both `from host (addr):` and `from addr:` shapes.
fn parse_exceeded_source(status: &str) -> Option<(Option<String>, String)> {
    let mut tokens = status.split_whitespace();
    tokens.find(|token| *token == "from")?;
    let first = tokens.next()?;

    if let Some(bracketed) = tokens.next().filter(|token| token.starts_with('(')) {
        let addr = bracketed
            .trim_start_matches('(')
            .trim_end_matches(':')
            .trim_end_matches(')');
        if addr.is_empty() {
            return None;
        }
        return Some((Some(first.to_string()), addr.to_string()));
    }

    let addr = first.trim_end_matches(':');
    if addr.is_empty() {
        return None;
    }
    Some((None, addr.to_string()))
}

/// Minimum line count of a reply that carries timing statistics.
const STATS_REPLY_LINES: usize = 5;

/// Extract one latency sample from the output of an unrestricted ping.
///
/// A full reply ends with a `min/avg/max/...` statistics line; the average
/// field is the sample. Anything shorter or unparseable is `Unknown`.
pub fn parse_rtt(text: &str) -> RttSample {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < STATS_REPLY_LINES {
        return RttSample::Unknown;
    }

    let stats = lines[lines.len() - 1];
    match stats
        .rsplit('/')
        .nth(2)
        .map(str::trim)
        .and_then(|avg| avg.parse::<f64>().ok())
    {
        Some(avg) => RttSample::Measured(avg),
        None => RttSample::Unknown,
    }
}
