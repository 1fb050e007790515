use super::Msg;

pub(super) fn text(msg: Msg) -> &'static str {
    match msg {
        Msg::CompanyName => "Company Name",
        Msg::Country => "Country",
        Msg::Sector => "Sector",
        Msg::Method => "Valuation Method",
        Msg::Currency => "Currency",
        Msg::Revenue => "Revenue",
        Msg::Ebitda => "EBITDA",
        Msg::NetIncome => "Net Income",
        Msg::TotalAssets => "Total Assets",
        Msg::TotalLiabilities => "Total Liabilities",
        Msg::DcfInputs => "DCF Inputs",
        Msg::BenchmarkInputs => "Market Benchmarks",
        Msg::CountryRiskPremium => "Country Risk Premium",
        Msg::SectorGrowthRate => "Sector Growth Rate",
        Msg::IndustryPeRatio => "Industry P/E Ratio",
        Msg::IndustryEvEbitdaMultiple => "Industry EV/EBITDA Multiple",
        Msg::IndustryRevenueMultiple => "Industry Revenue Multiple",
        Msg::ProjectionYears => "Projection Years",
        Msg::DiscountRate => "Discount Rate (WACC)",
        Msg::TerminalGrowthRate => "Terminal Growth Rate",
        Msg::FcfYearLabel => "Year {year} FCF",

        Msg::ErrCompanyName => "Please enter the company name.",
        Msg::ErrRequiredField => "Please fill in all required fields: {field}.",
        Msg::ErrInvalidField => "Please enter a valid number for {field}.",
        Msg::ErrProjectionYears => "Projection years must be between 1 and 10.",
        Msg::ErrFcfCount => "Please enter a projected free cash flow for every projection year.",
        Msg::ErrDiscountRate => "The discount rate must be greater than -100%.",
        Msg::ErrUnknownCode => "Unknown selection: {code}.",
        Msg::ErrInvalidNumber => "\"{value}\" is not a valid number.",
        Msg::ErrValueOverflow => "The figures entered are too large to value. Please check them.",

        Msg::Intro => "This valuation was prepared using the {method} method.",
        Msg::InputsHeader => "Inputs Used",
        Msg::StepHeader => "Step {n}: {title}",
        Msg::LabeledValue => "{label}: {value}",
        Msg::UserSupplied => "(user-supplied)",
        Msg::FinalValueDesc => "Estimated value: {value}",
        Msg::FloorNote => "(A minimum value of {floor} was applied because the calculated value was lower.)",
        Msg::DataSourceNote => "Data source: figures entered by the user; benchmarks marked user-supplied were provided by the user and were not verified. This estimate is indicative only, is not a substitute for a professional valuation, and should be reviewed for IFRS 13 (Fair Value Measurement) compliance.",

        Msg::DcfIntro => "The Discounted Cash Flow method estimates value as the present value of expected future free cash flows plus a terminal value.",
        Msg::DcfWaccTitle => "Discount Rate (WACC)",
        Msg::DcfWaccText => "The discount rate represents the weighted average cost of capital: the return investors require for the risk of these cash flows.",
        Msg::DcfRiskPremiumNote => "(User-supplied country risk premium: {value}. Shown for reference; it is not added to the discount rate.)",
        Msg::DcfFcfTitle => "Free Cash Flow (FCF)",
        Msg::DcfFcfText => "Free cash flow is the cash the business generates after operating costs and capital expenditure.",
        Msg::DcfProjectionPeriod => "Projection period: {value} years",
        Msg::DcfDiscountRateItem => "Discount rate (WACC): {value}",
        Msg::DcfTerminalGrowthItem => "Terminal growth rate: {value}",
        Msg::DefaultRateNote => "(not entered; default of {value} used)",
        Msg::SectorGrowthOverride => "(User-supplied sector growth rate of {value} replaces the entered terminal growth rate of {entered}.)",
        Msg::DcfFcfList => "Projected free cash flows:",
        Msg::DcfFcfYearItem => "Year {year}: {value}",
        Msg::DcfStepPvFcf => "Present Value of Projected Cash Flows",
        Msg::DcfPvSumDesc => "Each year's cash flow is discounted to today. Sum: {pv_sum}",
        Msg::DcfPvYear => "Year {year}: {fcf} / (1 + {wacc})^{year} = {pv}",
        Msg::DcfStepTerminal => "Terminal Value",
        Msg::DcfLastFcfDesc => "Final-year cash flow used: {last_fcf}",
        Msg::LastFcfGrownNote => "(Final-year cash flow not available; estimated as year 1 cash flow of {base} grown at {growth} per year for {periods} years.)",
        Msg::LastFcfSeedNote => "(No usable cash flow entered; estimated from a base of {base} grown at {growth} per year for {periods} years.)",
        Msg::TvGordon => "Gordon Growth Model: {last_fcf} × (1 + {g}) / ({wacc} - {g}) = {tv}",
        Msg::TvFallback => "Growth rate is not below the discount rate, so the Gordon Growth Model does not apply. Fallback used: {last_fcf} × {multiple} = {tv}",
        Msg::DcfStepPvTerminal => "Present Value of Terminal Value",
        Msg::DcfPvTerminalDesc => "{tv} / (1 + {wacc})^{years} = {pv_tv}",
        Msg::DcfStepEv => "Enterprise Value",
        Msg::DcfEvDesc => "{pv_sum} + {pv_tv} = {ev}",
        Msg::DcfStepLiquidity => "Liquidity and Marketability Discount",
        Msg::DcfLiquidityDesc => "A {pct} discount is applied for a private company (factor {factor}): {ev} × {factor} = {discounted_ev}",
        Msg::StepFinal => "Final Value",

        Msg::BookIntro => "The Book Value method values the company at its net assets: what remains after all liabilities are deducted from total assets.",
        Msg::BookStepNet => "Net Assets",
        Msg::BookNetDesc => "{assets} - {liabilities} = {book}",

        Msg::CompsIntro => "The Comparable Companies method applies valuation multiples observed for similar companies to this company's figures.",
        Msg::MultiplesIntro => "The Market Multiples method applies an industry revenue multiple to this company's revenue.",
        Msg::OtherStepBase => "Base Metric and Multiple",
        Msg::RulePe => "Net income of {base} with the user-supplied industry P/E ratio of {multiple}.",
        Msg::RuleEvEbitda => "EBITDA of {base} with the user-supplied EV/EBITDA multiple of {multiple}.",
        Msg::RuleHeuristic => "No usable industry multiple was supplied. Heuristic base (revenue × {weight} + EBITDA - total liabilities) of {base} with a multiplier of {multiple}.",
        Msg::RuleRevenue => "Revenue of {base} with the user-supplied revenue multiple of {multiple}.",
        Msg::RuleMultiplesDefault => "No user revenue multiple was supplied. Revenue of {base} with a default multiplier of {multiple}.",
        Msg::OtherStepCalc => "Calculated Value",
        Msg::OtherCalcDesc => "{base} × {multiple} = {value}",

        Msg::Summary => "Based on the {method}, the estimated valuation for {company} is approximately {value}. This considers key financial figures and assumptions (including any user-provided benchmarks) for the {sector} sector in {country}. Please review the IFRS compliance notes and consult a professional.",

        Msg::ReportTitle => "Company Valuation Report",
        Msg::EstimatedValue => "Estimated Value",
        Msg::SummaryTitle => "Summary",
        Msg::CalculationDetails => "Calculation Details",
        Msg::DcfInputsTitle => "DCF Inputs",
        Msg::BenchmarksTitle => "User-Supplied Benchmarks",
        Msg::ChartTitle => "Key Figures",
        Msg::IfrsNote => "IFRS note: fair value measurements should follow IFRS 13 and be reviewed by a qualified professional.",
        Msg::PageFooter => "{page} / {total}",
        Msg::GeneratedAt => "Generated: {timestamp}",
        Msg::NotAvailable => "N/A",

        Msg::ChartFcfYear => "FCF Y{year}",

        Msg::TuiHelp => "q quit | l language | t theme | r reload | e export | up/down scroll",
        Msg::TuiExported => "Exported to {path}",
        Msg::TuiExportFailed => "Export failed: {error}",
        Msg::PromptChoose => "Select {label} [1-{max}]",
        Msg::PromptOptional => "(optional, press Enter to skip)",
        Msg::PromptInvalidChoice => "Invalid selection. Try again.",
        Msg::PromptRetry => "{error} Try again.",
    }
}
