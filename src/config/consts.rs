// src/config/consts.rs

// Net config
pub const ORIGIN: &str = "https://www.transfermarkt.co.uk";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";
pub const TIMEOUT_SECS: u64 = 30;
pub const RETRY_ATTEMPTS: u32 = 3;
pub const RETRY_BASE_MS: u64 = 500;
pub const RETRY_MAX_MS: u64 = 10_000;

// Detailed-view URL markers (warn only)
pub const DETAILED_VIEW_MARKERS: [&str; 2] = ["/kader/", "/plus/1"];

// Selectors
pub const SEL_NAME_CELLS: &str = "td.hauptlink";
pub const SEL_PRICE_CELLS: &str = "td.rechts.hauptlink";
pub const SEL_CENTERED_CELLS: &str = "td.zentriert";
pub const SEL_ANCHORS: &str = "a[href]";
pub const PROFILE_MARKER: &str = "/profil/spieler";

// Values
pub const NOT_ASSIGNED: &str = "not assigned";
pub const NO_PRICE: &str = "-";
pub const CURRENCY_GLYPHS: [&str; 2] = ["£", "€"];
pub const MILLION_UNIT: &str = "m";
pub const THOUSANDS_MARKERS: [&str; 2] = ["Th.", "k"];
pub const HEIGHT_UNIT: &str = "m";

// Centered-cell record layout (0-based within one record)
pub const STRIDE: usize = 9;
pub const OFFSET_NUMBER: usize = 0;
pub const OFFSET_HEIGHT: usize = 3;
pub const OFFSET_FOOT: usize = 4;
pub const OFFSET_JOINED: usize = 5;
pub const OFFSET_EXPIRY: usize = 7;

// Export
pub const DEFAULT_OUT_FILE: &str = "TransferMarkt_Data.csv";
pub const HEADERS: [&str; 9] = [
    "Entry",
    "Player Name",
    "Player #",
    "Player Height(cm)",
    "Preferred Foot",
    "Market Val(EUR)",
    "Player Date Joined",
    "Contract Expiration Date",
    "Player Profile",
];
