// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use super::consts::*;
use crate::core::retry::RetryPolicy;
use crate::error::ScrapeError;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub url: String,
    pub net: NetOptions,
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            url: s!(),
            net: NetOptions::default(),
            extract: ExtractOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

impl AppOptions {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }

    /// Reject option combinations the pipeline cannot honour.
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.url.trim().is_empty() {
            return Err(ScrapeError::Config(s!("no roster URL given")));
        }
        if self.net.retry.max_attempts == 0 {
            return Err(ScrapeError::Config(s!("retry attempts must be at least 1")));
        }
        self.extract.validate()
    }
}

/* ---------------- Network ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct NetOptions {
    pub user_agent: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

/* ---------------- Extraction ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    pub names: String,
    pub prices: String,
    pub centered: String,
    pub anchors: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            names: s!(SEL_NAME_CELLS),
            prices: s!(SEL_PRICE_CELLS),
            centered: s!(SEL_CENTERED_CELLS),
            anchors: s!(SEL_ANCHORS),
        }
    }
}

/// Layout of one player record inside the centered-cell sequence.
/// Offsets are 0-based positions within a record of `stride` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldOffsets {
    pub stride: usize,
    pub number: usize,
    pub height: usize,
    pub foot: usize,
    pub joined: usize,
    pub expiry: usize,
}

impl Default for FieldOffsets {
    fn default() -> Self {
        Self {
            stride: STRIDE,
            number: OFFSET_NUMBER,
            height: OFFSET_HEIGHT,
            foot: OFFSET_FOOT,
            joined: OFFSET_JOINED,
            expiry: OFFSET_EXPIRY,
        }
    }
}

impl FieldOffsets {
    pub fn named(&self) -> [(&'static str, usize); 5] {
        [
            ("number", self.number),
            ("height", self.height),
            ("foot", self.foot),
            ("joined", self.joined),
            ("expiry", self.expiry),
        ]
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.stride == 0 {
            return Err(ScrapeError::Config(s!("stride must be non-zero")));
        }
        for (field, off) in self.named() {
            if off >= self.stride {
                return Err(ScrapeError::Config(format!(
                    "offset {off} for `{field}` is outside a record of {} cells",
                    self.stride
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceRules {
    pub currency_glyphs: Vec<String>,
    pub million_unit: String,
    pub thousands_markers: Vec<String>,
    pub no_price: String,
}

impl Default for PriceRules {
    fn default() -> Self {
        Self {
            currency_glyphs: CURRENCY_GLYPHS.iter().map(|g| s!(*g)).collect(),
            million_unit: s!(MILLION_UNIT),
            thousands_markers: THOUSANDS_MARKERS.iter().map(|m| s!(*m)).collect(),
            no_price: s!(NO_PRICE),
        }
    }
}

/// What an empty height cell turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeightPolicy {
    /// Leave it empty (matches the historical output).
    #[default]
    KeepEmpty,
    /// Replace it with the "not assigned" sentinel like every other field.
    Sentinel,
}

/// What to do with a price cell that does not parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum PricePolicy {
    /// Log and use 0.0
    #[default]
    Zero,
    /// Log and drop the player's row
    #[value(name = "skip")]
    SkipRow,
    /// Abort the run
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub origin: String,
    pub profile_marker: String,
    pub selectors: Selectors,
    pub layout: FieldOffsets,
    pub prices: PriceRules,
    pub height_policy: HeightPolicy,
    pub price_policy: PricePolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            origin: s!(ORIGIN),
            profile_marker: s!(PROFILE_MARKER),
            selectors: Selectors::default(),
            layout: FieldOffsets::default(),
            prices: PriceRules::default(),
            height_policy: HeightPolicy::default(),
            price_policy: PricePolicy::default(),
        }
    }
}

impl ExtractOptions {
    pub fn validate(&self) -> Result<(), ScrapeError> {
        self.layout.validate()
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}
