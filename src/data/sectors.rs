use crate::data::pick;
use crate::domain::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sector {
    pub id: &'static str,
    pub name: &'static str,
    pub name_ar: &'static str,
}

impl Sector {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        pick(locale, self.name, self.name_ar)
    }
}

pub const SECTORS: &[Sector] = &[
    Sector { id: "technology", name: "Technology", name_ar: "التكنولوجيا" },
    Sector { id: "healthcare", name: "Healthcare", name_ar: "الرعاية الصحية" },
    Sector { id: "finance", name: "Financial Services", name_ar: "الخدمات المالية" },
    Sector { id: "real_estate", name: "Real Estate", name_ar: "العقارات" },
    Sector { id: "retail", name: "Retail", name_ar: "التجزئة" },
    Sector { id: "manufacturing", name: "Manufacturing", name_ar: "التصنيع" },
    Sector { id: "energy", name: "Energy", name_ar: "الطاقة" },
    Sector { id: "telecom", name: "Telecommunications", name_ar: "الاتصالات" },
    Sector { id: "hospitality", name: "Hospitality & Tourism", name_ar: "الضيافة والسياحة" },
    Sector { id: "construction", name: "Construction", name_ar: "البناء والتشييد" },
    Sector { id: "food", name: "Food & Beverage", name_ar: "الأغذية والمشروبات" },
    Sector { id: "logistics", name: "Transport & Logistics", name_ar: "النقل والخدمات اللوجستية" },
];

pub fn find_sector(id: &str) -> Option<&'static Sector> {
    let id = id.trim();
    SECTORS.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_ids_are_unique() {
        for (i, a) in SECTORS.iter().enumerate() {
            assert!(SECTORS[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
        assert_eq!(find_sector("Energy").map(|s| s.name_ar), Some("الطاقة"));
    }
}
