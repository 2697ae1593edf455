// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0";

// Default batch
pub const DEFAULT_URLS: [&str; 3] = [
    "https://edurank.org/uni/muhammadiyah-university-of-surakarta/",
    "https://edurank.org/uni/muhammadiyah-university-of-yogyakarta/",
    "https://edurank.org/uni/ahmad-dahlan-university/",
];

// Scope labels
pub const COUNTRY_LABEL: &str = "Indonesia";

// Export
pub const DEFAULT_OUT_FILE: &str = "university_ranks.csv";
pub const HEADERS: [&str; 5] = ["university", "year", "scope", "rank", "total_ranked"];
