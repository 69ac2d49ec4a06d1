// src/classify.rs
use crate::probe::ProbeOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Feed looks alive; no action, no log.
    Keep,
    /// Feed is dead or access is structurally denied; prune the subscription.
    Remove,
    /// Ambiguous signal; log it and leave the subscription alone.
    Warn,
}

/// Map a probe outcome to what should happen to the subscription.
///
/// A transport failure counts the same as "not found": a feed that cannot be
/// reached at all is operationally dead. 404/406/403/401 are permanent enough
/// to prune on; anything else ambiguous is only warned about, never removed.
pub fn classify(outcome: &ProbeOutcome) -> Disposition {
    match outcome {
        ProbeOutcome::Failed(_) => Disposition::Remove,
        ProbeOutcome::Missing => Disposition::Warn,
        ProbeOutcome::Status(status) => match status.as_u16() {
            404 | 406 | 403 | 401 => Disposition::Remove,
            200 | 202 | 206 => Disposition::Keep,
            _ => Disposition::Warn,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn status(code: u16) -> ProbeOutcome {
        ProbeOutcome::Status(StatusCode::from_u16(code).unwrap())
    }

    #[test]
    fn transport_failure_removes() {
        let outcome = ProbeOutcome::Failed("connection refused".into());
        assert_eq!(classify(&outcome), Disposition::Remove);
    }

    #[test]
    fn missing_response_warns() {
        assert_eq!(classify(&ProbeOutcome::Missing), Disposition::Warn);
    }

    #[test]
    fn dead_statuses_remove() {
        for code in [401, 403, 404, 406] {
            assert_eq!(classify(&status(code)), Disposition::Remove, "status {code}");
        }
    }

    #[test]
    fn live_statuses_keep() {
        for code in [200, 202, 206] {
            assert_eq!(classify(&status(code)), Disposition::Keep, "status {code}");
        }
    }

    #[test]
    fn ambiguous_statuses_warn() {
        for code in [301, 429, 500, 503] {
            assert_eq!(classify(&status(code)), Disposition::Warn, "status {code}");
        }
    }
}
