use std::io;
use thiserror::Error;

/// Fatal failures of a trace run.
///
/// Lost probes and unrecognized ping output are not errors; they degrade
/// into unresponsive hop lines.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The probe utility could not be invoked at all.
    #[error("failed to invoke {program}: {source}")]
    TransportUnavailable {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    /// The target host was empty.
    #[error("target host must not be empty")]
    EmptyTarget,

    /// A hop record could not be written out.
    #[error("failed to write hop record: {0}")]
    Output(#[from] io::Error),
}
