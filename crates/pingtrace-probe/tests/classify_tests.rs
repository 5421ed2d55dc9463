use pingtrace_model::RttSample;
use pingtrace_probe::{classify_reply, parse_rtt, ProbeReply};

#[test]
fn macos_named_time_exceeded() {
    let text = include_str!("fixtures/ttl_exceeded_named.txt");

    assert_eq!(
        classify_reply(text),
        ProbeReply::TimeExceeded {
            host: Some("router1.isp.example".to_string()),
            addr: "10.0.0.1".to_string(),
        }
    );
}

#[test]
fn macos_bare_time_exceeded() {
    let text = include_str!("fixtures/ttl_exceeded_bare.txt");

    assert_eq!(
        classify_reply(text),
        ProbeReply::TimeExceeded {
            host: None,
            addr: "10.0.0.2".to_string(),
        }
    );
}

#[test]
fn lost_probe_is_timeout() {
    let text = include_str!("fixtures/timeout.txt");

    assert_eq!(classify_reply(text), ProbeReply::Timeout);
}

#[test]
fn destination_reached_is_echo_reply() {
    let text = include_str!("fixtures/echo_reply.txt");

    assert_eq!(classify_reply(text), ProbeReply::EchoReply);
}

#[test]
fn inline_reply_line_is_malformed() {
    let text = include_str!("fixtures/direct_reply.txt");

    assert_eq!(classify_reply(text), ProbeReply::Malformed);
}

#[test]
fn resolver_failure_is_malformed() {
    let text = include_str!("fixtures/resolve_failure.txt");

    assert_eq!(classify_reply(text), ProbeReply::Malformed);
}

#[test]
fn rtt_from_linux_statistics() {
    let text = include_str!("fixtures/rtt_full.txt");

    assert_eq!(parse_rtt(text), RttSample::Measured(1.456));
}

#[test]
fn rtt_from_macos_statistics() {
    let text = include_str!("fixtures/echo_reply.txt");

    assert_eq!(parse_rtt(text), RttSample::Measured(23.817));
}

#[test]
fn rtt_from_lost_probe_is_unknown() {
    let text = include_str!("fixtures/timeout.txt");

    assert_eq!(parse_rtt(text), RttSample::Unknown);
}
