//! The fixed marketplace catalog.
//!
//! Process-wide static configuration; the relative order here is the order
//! candidates appear in every response.

/// Static definition of one marketplace eligible for a search link.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSpec {
    /// Stable key, e.g. `trendyol_search`.
    pub id: &'static str,
    pub display_name: &'static str,
    pub base_url: &'static str,
    /// Search URL with a `{query}` slot for the escaped product name.
    pub search_template: &'static str,
    pub icon_url: &'static str,
    /// Turkish locative phrase for the blurb ("Trendyol'da" = "on Trendyol").
    pub locative_tr: &'static str,
    /// Upper bound for the synthetic availability signal. A fixed design
    /// parameter per marketplace, not derived from real inventory.
    pub signal_bound: u32,
}

/// Every marketplace eligible to receive a search link, in response order.
pub const CATALOG: [CandidateSpec; 10] = [
    CandidateSpec {
        id: "trendyol_search",
        display_name: "Trendyol",
        base_url: "https://www.trendyol.com",
        search_template: "https://www.trendyol.com/sr?q={query}",
        icon_url: "https://www.trendyol.com/favicon.ico",
        locative_tr: "Trendyol'da",
        signal_bound: 120,
    },
    CandidateSpec {
        id: "hepsiburada_search",
        display_name: "Hepsiburada",
        base_url: "https://www.hepsiburada.com",
        search_template: "https://www.hepsiburada.com/ara?q={query}",
        icon_url: "https://www.hepsiburada.com/favicon.ico",
        locative_tr: "Hepsiburada'da",
        signal_bound: 180,
    },
    CandidateSpec {
        id: "n11_search",
        display_name: "N11",
        base_url: "https://www.n11.com",
        search_template: "https://www.n11.com/arama?q={query}",
        icon_url: "https://www.n11.com/favicon.ico",
        locative_tr: "N11'de",
        signal_bound: 90,
    },
    CandidateSpec {
        id: "gittigidiyor_search",
        display_name: "GittiGidiyor",
        base_url: "https://www.gittigidiyor.com",
        search_template: "https://www.gittigidiyor.com/arama?k={query}",
        icon_url: "https://www.gittigidiyor.com/favicon.ico",
        locative_tr: "GittiGidiyor'da",
        signal_bound: 110,
    },
    CandidateSpec {
        id: "amazon_tr_search",
        display_name: "Amazon TR",
        base_url: "https://www.amazon.com.tr",
        search_template: "https://www.amazon.com.tr/s?k={query}",
        icon_url: "https://www.amazon.com.tr/favicon.ico",
        locative_tr: "Amazon Türkiye'de",
        signal_bound: 200,
    },
    CandidateSpec {
        id: "ciceksepeti_search",
        display_name: "Çiçeksepeti",
        base_url: "https://www.ciceksepeti.com",
        search_template: "https://www.ciceksepeti.com/arama?query={query}",
        icon_url: "https://www.ciceksepeti.com/favicon.ico",
        locative_tr: "Çiçeksepeti'nde",
        signal_bound: 80,
    },
    CandidateSpec {
        id: "vatanbilgisayar_search",
        display_name: "Vatan Bilgisayar",
        base_url: "https://www.vatanbilgisayar.com",
        search_template: "https://www.vatanbilgisayar.com/arama/{query}/",
        icon_url: "https://www.vatanbilgisayar.com/favicon.ico",
        locative_tr: "Vatan Bilgisayar'da",
        signal_bound: 60,
    },
    CandidateSpec {
        id: "teknosa_search",
        display_name: "Teknosa",
        base_url: "https://www.teknosa.com",
        search_template: "https://www.teknosa.com/arama/?s={query}",
        icon_url: "https://www.teknosa.com/favicon.ico",
        locative_tr: "Teknosa'da",
        signal_bound: 100,
    },
    CandidateSpec {
        id: "media_markt_search",
        display_name: "MediaMarkt",
        base_url: "https://www.mediamarkt.com.tr",
        search_template: "https://www.mediamarkt.com.tr/tr/search.html?query={query}",
        icon_url: "https://www.mediamarkt.com.tr/favicon.ico",
        locative_tr: "MediaMarkt'ta",
        signal_bound: 70,
    },
    CandidateSpec {
        id: "dolap_search",
        display_name: "Dolap",
        base_url: "https://www.dolap.com",
        search_template: "https://www.dolap.com/arama?q={query}",
        icon_url: "https://www.dolap.com/favicon.ico",
        locative_tr: "Dolap'ta",
        signal_bound: 150,
    },
];
