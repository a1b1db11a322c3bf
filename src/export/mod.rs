//! JSON and PDF export of the stored plan.

pub mod download;
pub mod jspdf;
pub mod json;
pub mod pdf_layout;

use std::fmt;
use std::str::FromStr;

/// Where the PDF gets built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PdfStrategy {
    /// POST the plan to `/export-pdf` and download the returned blob.
    #[default]
    Server,
    /// Lay the plan out locally and draw it with jsPDF.
    Client,
}

impl FromStr for PdfStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" | "" => Ok(PdfStrategy::Server),
            "client" => Ok(PdfStrategy::Client),
            other => Err(format!("unknown PDF export strategy '{}'", other)),
        }
    }
}

impl fmt::Display for PdfStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PdfStrategy::Server => "server",
            PdfStrategy::Client => "client",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parsing() {
        assert_eq!("server".parse::<PdfStrategy>(), Ok(PdfStrategy::Server));
        assert_eq!(" Client ".parse::<PdfStrategy>(), Ok(PdfStrategy::Client));
        assert_eq!("".parse::<PdfStrategy>(), Ok(PdfStrategy::Server));
        assert!("latex".parse::<PdfStrategy>().is_err());
        assert_eq!(PdfStrategy::Client.to_string(), "client");
    }
}
