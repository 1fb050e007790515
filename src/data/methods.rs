use crate::data::pick;
use crate::domain::{InputField, Locale, MethodId};
use crate::i18n::{self, Msg};

/// Catalog entry for a valuation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInfo {
    pub id: MethodId,
    pub name: &'static str,
    pub name_ar: &'static str,
    pub description: &'static str,
    pub description_ar: &'static str,
    /// Inputs the form shows, in order.
    pub inputs: &'static [InputField],
    /// Subset of `inputs` that must be present before computing.
    pub required: &'static [InputField],
}

impl MethodInfo {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        pick(locale, self.name, self.name_ar)
    }

    pub fn display_description(&self, locale: Locale) -> &'static str {
        pick(locale, self.description, self.description_ar)
    }

    pub fn is_required(&self, field: InputField) -> bool {
        self.required.contains(&field)
    }
}

pub const METHODS: [MethodInfo; 4] = [
    MethodInfo {
        id: MethodId::Dcf,
        name: "Discounted Cash Flow (DCF)",
        name_ar: "التدفقات النقدية المخصومة",
        description: "Values the company as the present value of its projected free cash flows plus a terminal value.",
        description_ar: "يقيّم الشركة بالقيمة الحالية لتدفقاتها النقدية الحرة المتوقعة مضافاً إليها القيمة النهائية.",
        inputs: &[InputField::DcfInputs, InputField::BenchmarkInputs],
        required: &[InputField::DcfInputs],
    },
    MethodInfo {
        id: MethodId::Book,
        name: "Book Value",
        name_ar: "القيمة الدفترية",
        description: "Values the company as its total assets minus its total liabilities.",
        description_ar: "يقيّم الشركة بإجمالي أصولها مطروحاً منه إجمالي التزاماتها.",
        inputs: &[InputField::TotalAssets, InputField::TotalLiabilities],
        required: &[InputField::TotalAssets, InputField::TotalLiabilities],
    },
    MethodInfo {
        id: MethodId::Comps,
        name: "Comparable Companies",
        name_ar: "الشركات المماثلة",
        description: "Applies industry P/E or EV/EBITDA multiples observed for similar companies.",
        description_ar: "يطبق مضاعفات الربحية أو قيمة المنشأة إلى الأرباح قبل الفوائد والضرائب والإهلاك للشركات المماثلة.",
        inputs: &[
            InputField::Revenue,
            InputField::Ebitda,
            InputField::NetIncome,
            InputField::TotalLiabilities,
            InputField::BenchmarkInputs,
        ],
        required: &[InputField::Ebitda],
    },
    MethodInfo {
        id: MethodId::Multiples,
        name: "Market Multiples",
        name_ar: "مضاعفات السوق",
        description: "Applies an industry revenue multiple to the company's revenue.",
        description_ar: "يطبق مضاعف الإيرادات الخاص بالقطاع على إيرادات الشركة.",
        inputs: &[InputField::Revenue, InputField::Ebitda, InputField::BenchmarkInputs],
        required: &[InputField::Revenue],
    },
];

pub fn method_info(method: MethodId) -> &'static MethodInfo {
    match method {
        MethodId::Dcf => &METHODS[0],
        MethodId::Book => &METHODS[1],
        MethodId::Comps => &METHODS[2],
        MethodId::Multiples => &METHODS[3],
    }
}

pub fn required_inputs(method: MethodId) -> &'static [InputField] {
    method_info(method).required
}

/// Form label for an input group.
pub fn input_label(field: InputField, locale: Locale) -> &'static str {
    i18n::text(locale, Msg::from(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_method() {
        for m in MethodId::ALL {
            assert_eq!(method_info(m).id, m);
            for f in required_inputs(m) {
                assert!(method_info(m).inputs.contains(f));
            }
        }
    }

    #[test]
    fn required_inputs_per_method() {
        assert_eq!(required_inputs(MethodId::Dcf), &[InputField::DcfInputs]);
        assert_eq!(
            required_inputs(MethodId::Book),
            &[InputField::TotalAssets, InputField::TotalLiabilities]
        );
        assert_eq!(required_inputs(MethodId::Comps), &[InputField::Ebitda]);
        assert_eq!(required_inputs(MethodId::Multiples), &[InputField::Revenue]);
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(input_label(InputField::Revenue, Locale::En), "Revenue");
        assert_eq!(input_label(InputField::Revenue, Locale::Ar), "الإيرادات");
    }
}
