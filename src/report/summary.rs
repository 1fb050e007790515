//! One-paragraph result summary, per locale.

use crate::data::{find_country, find_currency, find_sector, method_info};
use crate::domain::{Bilingual, Locale, ValuationRequest};
use crate::i18n::{self, Msg};
use crate::report::format::format_currency;

pub fn build(request: &ValuationRequest, estimated_value: f64) -> Bilingual<String> {
    Bilingual::from_fn(|locale| render(request, estimated_value, locale))
}

pub fn render(request: &ValuationRequest, estimated_value: f64, locale: Locale) -> String {
    let sector = find_sector(&request.sector_id)
        .map(|s| s.display_name(locale).to_string())
        .unwrap_or_else(|| request.sector_id.clone());
    let country = find_country(&request.country_code)
        .map(|c| c.display_name(locale).to_string())
        .unwrap_or_else(|| request.country_code.clone());

    i18n::tr(
        locale,
        Msg::Summary,
        &[
            ("method", method_info(request.method).display_name(locale).to_string()),
            ("company", request.company_name.trim().to_string()),
            ("value", amount_with_code(estimated_value, &request.currency_code, locale)),
            ("sector", sector),
            ("country", country),
        ],
    )
}

/// `$1,500,000 USD`; the code is not repeated when the symbol already is the code.
fn amount_with_code(value: f64, currency_code: &str, locale: Locale) -> String {
    let amount = format_currency(value, currency_code, locale);
    let symbol_is_code = find_currency(currency_code)
        .is_some_and(|c| c.symbol_for(locale).eq_ignore_ascii_case(currency_code));
    if symbol_is_code {
        amount
    } else {
        format!("{amount} {}", currency_code.to_ascii_uppercase())
    }
}
