use crate::export::PdfStrategy;

/// Backend location and export settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    /// Empty means same-origin, so routes stay relative (`/generate`).
    base_url: String,
    pdf_strategy: PdfStrategy,
}

impl ApiConfig {
    /// Build from the `API_BASE_URL` / `PDF_EXPORT` variables captured at
    /// compile time.  Unset or unparsable values fall back to the defaults.
    pub fn from_build_env() -> Self {
        let base_url = option_env!("API_BASE_URL").unwrap_or_default();
        let pdf_strategy = option_env!("PDF_EXPORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        Self::new(base_url, pdf_strategy)
    }

    pub fn new(base_url: &str, pdf_strategy: PdfStrategy) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            pdf_strategy,
        }
    }

    /// Parse a JS-provided configuration.
    pub fn from_parts(base_url: &str, pdf_strategy: &str) -> Result<Self, String> {
        Ok(Self::new(base_url, pdf_strategy.parse()?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pdf_strategy(&self) -> PdfStrategy {
        self.pdf_strategy
    }

    /// Full URL for a backend route such as `/generate`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_same_origin_server_pdf() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.url("/generate"), "/generate");
        assert_eq!(cfg.pdf_strategy(), PdfStrategy::Server);
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = ApiConfig::from_parts("http://localhost:8000/", "client").unwrap();
        assert_eq!(cfg.base_url(), "http://localhost:8000");
        assert_eq!(cfg.url("/refine-plan"), "http://localhost:8000/refine-plan");
        assert_eq!(cfg.pdf_strategy(), PdfStrategy::Client);
    }

    #[test]
    fn bad_strategy_is_rejected() {
        assert!(ApiConfig::from_parts("", "fax").is_err());
    }
}
