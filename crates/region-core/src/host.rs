//! Hostname normalisation.

/// Strip a trailing `:port` from a host.
///
/// Only an all-digit suffix (or an empty one after a trailing colon) is
/// treated as a port. Bracketed IPv6 literals keep their brackets and a bare
/// IPv6 literal is returned unchanged. No case folding is applied.
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) if is_port(&host[end + 1..]) => &host[..=end],
            _ => host,
        };
    }

    match host.rsplit_once(':') {
        // More than one colon without brackets is an IPv6 address.
        Some((name, _)) if name.contains(':') => host,
        Some((name, port)) if port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

fn is_port(rest: &str) -> bool {
    match rest.strip_prefix(':') {
        Some(port) => port.bytes().all(|b| b.is_ascii_digit()),
        None => rest.is_empty(),
    }
}
