use crate::data::{Currency, find_currency, pick};
use crate::domain::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub name_ar: &'static str,
    pub default_currency: &'static str,
}

impl Country {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        pick(locale, self.name, self.name_ar)
    }
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "SA", name: "Saudi Arabia", name_ar: "المملكة العربية السعودية", default_currency: "SAR" },
    Country { code: "AE", name: "United Arab Emirates", name_ar: "الإمارات العربية المتحدة", default_currency: "AED" },
    Country { code: "EG", name: "Egypt", name_ar: "مصر", default_currency: "EGP" },
    Country { code: "KW", name: "Kuwait", name_ar: "الكويت", default_currency: "KWD" },
    Country { code: "QA", name: "Qatar", name_ar: "قطر", default_currency: "QAR" },
    Country { code: "BH", name: "Bahrain", name_ar: "البحرين", default_currency: "BHD" },
    Country { code: "OM", name: "Oman", name_ar: "عُمان", default_currency: "OMR" },
    Country { code: "JO", name: "Jordan", name_ar: "الأردن", default_currency: "JOD" },
    Country { code: "MA", name: "Morocco", name_ar: "المغرب", default_currency: "MAD" },
    Country { code: "US", name: "United States", name_ar: "الولايات المتحدة", default_currency: "USD" },
    Country { code: "GB", name: "United Kingdom", name_ar: "المملكة المتحدة", default_currency: "GBP" },
    Country { code: "DE", name: "Germany", name_ar: "ألمانيا", default_currency: "EUR" },
];

/// Case-insensitive lookup by ISO code.
pub fn find_country(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// The currency the form suggests once a country is picked.
pub fn default_currency_for(country_code: &str) -> Option<&'static Currency> {
    find_country(country_code).and_then(|c| find_currency(c.default_currency))
}
