use thiserror::Error;

/// Why a dashboard could not be produced.
///
/// The display strings are what callers see; the cause inside
/// [`DashboardError::Upstream`] is for logs only.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Missing API Key")]
    MissingApiKey,

    #[error("Failed to fetch weather data")]
    Upstream(#[source] anyhow::Error),
}

impl From<anyhow::Error> for DashboardError {
    fn from(err: anyhow::Error) -> Self {
        DashboardError::Upstream(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn messages_do_not_leak_cause() {
        assert_eq!(DashboardError::MissingApiKey.to_string(), "Missing API Key");

        let err = DashboardError::from(anyhow!("connection refused"));
        assert_eq!(err.to_string(), "Failed to fetch weather data");
        let source = std::error::Error::source(&err).expect("cause is kept");
        assert_eq!(source.to_string(), "connection refused");
    }
}
