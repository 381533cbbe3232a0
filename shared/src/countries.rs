//! Country code lookup table.
//!
//! Static mapping from 2-letter ISO codes to canonical uppercase country
//! names, built once at first use and read-only thereafter. Lookups are
//! case-sensitive exact matches; callers normalize to uppercase first.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Returned for ISO2 codes not present in the table
pub const UNKNOWN_COUNTRY: &str = "UNKNOWN";

static COUNTRY_NAMES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn country_names() -> &'static HashMap<&'static str, &'static str> {
    COUNTRY_NAMES.get_or_init(|| {
        HashMap::from([
            ("AF", "AFGHANISTAN"),
            ("AL", "ALBANIA"),
            ("DZ", "ALGERIA"),
            ("AD", "ANDORRA"),
            ("AO", "ANGOLA"),
            ("AR", "ARGENTINA"),
            ("AM", "ARMENIA"),
            ("AU", "AUSTRALIA"),
            ("AT", "AUSTRIA"),
            ("AZ", "AZERBAIJAN"),
            ("BH", "BAHRAIN"),
            ("BD", "BANGLADESH"),
            ("BY", "BELARUS"),
            ("BE", "BELGIUM"),
            ("BZ", "BELIZE"),
            ("BJ", "BENIN"),
            ("BO", "BOLIVIA"),
            ("BA", "BOSNIA AND HERZEGOVINA"),
            ("BR", "BRAZIL"),
            ("BG", "BULGARIA"),
            ("CA", "CANADA"),
            ("CL", "CHILE"),
            ("CN", "CHINA"),
            ("CO", "COLOMBIA"),
            ("HR", "CROATIA"),
            ("CU", "CUBA"),
            ("CY", "CYPRUS"),
            ("CZ", "CZECH REPUBLIC"),
            ("DK", "DENMARK"),
            ("DO", "DOMINICAN REPUBLIC"),
            ("EC", "ECUADOR"),
            ("EG", "EGYPT"),
            ("EE", "ESTONIA"),
            ("FI", "FINLAND"),
            ("FR", "FRANCE"),
            ("GE", "GEORGIA"),
            ("DE", "GERMANY"),
            ("GR", "GREECE"),
            ("GT", "GUATEMALA"),
            ("HN", "HONDURAS"),
            ("HK", "HONG KONG"),
            ("HU", "HUNGARY"),
            ("IS", "ICELAND"),
            ("IN", "INDIA"),
            ("ID", "INDONESIA"),
            ("IR", "IRAN"),
            ("IE", "IRELAND"),
            ("IL", "ISRAEL"),
            ("IT", "ITALY"),
            ("JP", "JAPAN"),
            ("KZ", "KAZAKHSTAN"),
            ("KE", "KENYA"),
            ("KR", "SOUTH KOREA"),
            ("KW", "KUWAIT"),
            ("LV", "LATVIA"),
            ("LB", "LEBANON"),
            ("LT", "LITHUANIA"),
            ("LU", "LUXEMBOURG"),
            ("MY", "MALAYSIA"),
            ("MX", "MEXICO"),
            ("MA", "MOROCCO"),
            ("NL", "NETHERLANDS"),
            ("NZ", "NEW ZEALAND"),
            ("NG", "NIGERIA"),
            ("NO", "NORWAY"),
            ("PK", "PAKISTAN"),
            ("PA", "PANAMA"),
            ("PE", "PERU"),
            ("PH", "PHILIPPINES"),
            ("PL", "POLAND"),
            ("PT", "PORTUGAL"),
            ("QA", "QATAR"),
            ("RO", "ROMANIA"),
            ("RU", "RUSSIA"),
            ("SA", "SAUDI ARABIA"),
            ("RS", "SERBIA"),
            ("SG", "SINGAPORE"),
            ("SK", "SLOVAKIA"),
            ("SI", "SLOVENIA"),
            ("ZA", "SOUTH AFRICA"),
            ("ES", "SPAIN"),
            ("SE", "SWEDEN"),
            ("CH", "SWITZERLAND"),
            ("TH", "THAILAND"),
            ("TN", "TUNISIA"),
            ("TR", "TURKEY"),
            ("UA", "UKRAINE"),
            ("AE", "UNITED ARAB EMIRATES"),
            ("GB", "UNITED KINGDOM"),
            ("US", "UNITED STATES"),
            ("UY", "URUGUAY"),
            ("UZ", "UZBEKISTAN"),
            ("VN", "VIETNAM"),
            ("YE", "YEMEN"),
            ("ZW", "ZIMBABWE"),
            ("MC", "MONACO"),
            ("AS", "AMERICAN SAMOA"),
            ("AI", "ANGUILLA"),
            ("AQ", "ANTARCTICA"),
            ("AG", "ANTIGUA AND BARBUDA"),
            ("AW", "ARUBA"),
            ("BS", "BAHAMAS (THE)"),
            ("BB", "BARBADOS"),
            ("BM", "BERMUDA"),
            ("BT", "BHUTAN"),
            ("BQ", "BONAIRE, SINT EUSTATIUS AND SABA"),
            ("BW", "BOTSWANA"),
            ("BN", "BRUNEI DARUSSALAM"),
            ("KH", "CAMBODIA"),
            ("MT", "MALTA"),
        ])
    })
}

/// Check whether an uppercase ISO2 code is in the table.
pub fn is_valid_country_code(iso2: &str) -> bool {
    country_names().contains_key(iso2)
}

/// Canonical uppercase country name for an ISO2 code, or
/// [`UNKNOWN_COUNTRY`] if the code is not present.
pub fn canonical_country_name(iso2: &str) -> &'static str {
    country_names().get(iso2).copied().unwrap_or(UNKNOWN_COUNTRY)
}
