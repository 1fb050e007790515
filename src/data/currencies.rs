use crate::data::pick;
use crate::domain::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub name_ar: &'static str,
    /// Symbol used in English text (prefix).
    pub symbol: &'static str,
    /// Symbol used in Arabic text (suffix).
    pub symbol_ar: &'static str,
}

impl Currency {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        pick(locale, self.name, self.name_ar)
    }

    pub fn symbol_for(&self, locale: Locale) -> &'static str {
        pick(locale, self.symbol, self.symbol_ar)
    }
}

pub const CURRENCIES: &[Currency] = &[
    Currency { code: "SAR", name: "Saudi Riyal", name_ar: "ريال سعودي", symbol: "SAR", symbol_ar: "ر.س" },
    Currency { code: "AED", name: "UAE Dirham", name_ar: "درهم إماراتي", symbol: "AED", symbol_ar: "د.إ" },
    Currency { code: "EGP", name: "Egyptian Pound", name_ar: "جنيه مصري", symbol: "E£", symbol_ar: "ج.م" },
    Currency { code: "KWD", name: "Kuwaiti Dinar", name_ar: "دينار كويتي", symbol: "KWD", symbol_ar: "د.ك" },
    Currency { code: "QAR", name: "Qatari Riyal", name_ar: "ريال قطري", symbol: "QAR", symbol_ar: "ر.ق" },
    Currency { code: "BHD", name: "Bahraini Dinar", name_ar: "دينار بحريني", symbol: "BHD", symbol_ar: "د.ب" },
    Currency { code: "OMR", name: "Omani Rial", name_ar: "ريال عماني", symbol: "OMR", symbol_ar: "ر.ع" },
    Currency { code: "JOD", name: "Jordanian Dinar", name_ar: "دينار أردني", symbol: "JOD", symbol_ar: "د.أ" },
    Currency { code: "MAD", name: "Moroccan Dirham", name_ar: "درهم مغربي", symbol: "MAD", symbol_ar: "د.م" },
    Currency { code: "USD", name: "US Dollar", name_ar: "دولار أمريكي", symbol: "$", symbol_ar: "$" },
    Currency { code: "EUR", name: "Euro", name_ar: "يورو", symbol: "€", symbol_ar: "€" },
    Currency { code: "GBP", name: "British Pound", name_ar: "جنيه إسترليني", symbol: "£", symbol_ar: "£" },
];

/// Case-insensitive lookup by ISO 4217 code.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}
