//! Static reference tables: countries, currencies, sectors, valuation methods.
//!
//! The engine only ever sees codes; these tables turn codes into display
//! strings and drive which inputs a method asks for.

pub mod countries;
pub mod currencies;
pub mod methods;
pub mod sectors;

pub use countries::{COUNTRIES, Country, default_currency_for, find_country};
pub use currencies::{CURRENCIES, Currency, find_currency};
pub use methods::{METHODS, MethodInfo, input_label, method_info, required_inputs};
pub use sectors::{SECTORS, Sector, find_sector};

use crate::domain::Locale;

/// Pick the half of a bilingual table entry for `locale`.
pub(crate) fn pick(locale: Locale, en: &'static str, ar: &'static str) -> &'static str {
    match locale {
        Locale::En => en,
        Locale::Ar => ar,
    }
}
