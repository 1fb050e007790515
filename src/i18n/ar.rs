use super::Msg;

pub(super) fn text(msg: Msg) -> &'static str {
    match msg {
        Msg::CompanyName => "اسم الشركة",
        Msg::Country => "الدولة",
        Msg::Sector => "القطاع",
        Msg::Method => "طريقة التقييم",
        Msg::Currency => "العملة",
        Msg::Revenue => "الإيرادات",
        Msg::Ebitda => "الأرباح قبل الفوائد والضرائب والإهلاك والاستهلاك",
        Msg::NetIncome => "صافي الدخل",
        Msg::TotalAssets => "إجمالي الأصول",
        Msg::TotalLiabilities => "إجمالي الالتزامات",
        Msg::DcfInputs => "مدخلات التدفقات النقدية المخصومة",
        Msg::BenchmarkInputs => "المعايير المرجعية للسوق",
        Msg::CountryRiskPremium => "علاوة مخاطر الدولة",
        Msg::SectorGrowthRate => "معدل نمو القطاع",
        Msg::IndustryPeRatio => "مضاعف الربحية للقطاع",
        Msg::IndustryEvEbitdaMultiple => "مضاعف قيمة المنشأة إلى الأرباح التشغيلية للقطاع",
        Msg::IndustryRevenueMultiple => "مضاعف الإيرادات للقطاع",
        Msg::ProjectionYears => "سنوات التوقع",
        Msg::DiscountRate => "معدل الخصم (المتوسط المرجح لتكلفة رأس المال)",
        Msg::TerminalGrowthRate => "معدل النمو النهائي",
        Msg::FcfYearLabel => "التدفق النقدي الحر للسنة {year}",

        Msg::ErrCompanyName => "يرجى إدخال اسم الشركة.",
        Msg::ErrRequiredField => "يرجى ملء جميع الحقول المطلوبة: {field}.",
        Msg::ErrInvalidField => "يرجى إدخال رقم صالح في حقل {field}.",
        Msg::ErrProjectionYears => "يجب أن تكون سنوات التوقع بين ١ و١٠.",
        Msg::ErrFcfCount => "يرجى إدخال التدفق النقدي الحر المتوقع لكل سنة من سنوات التوقع.",
        Msg::ErrDiscountRate => "يجب أن يكون معدل الخصم أكبر من -١٠٠٪.",
        Msg::ErrUnknownCode => "اختيار غير معروف: {code}.",
        Msg::ErrInvalidNumber => "«{value}» ليس رقماً صالحاً.",
        Msg::ErrValueOverflow => "الأرقام المدخلة كبيرة جداً لإجراء التقييم. يرجى مراجعتها.",

        Msg::Intro => "تم إعداد هذا التقييم باستخدام طريقة {method}.",
        Msg::InputsHeader => "المدخلات المستخدمة",
        Msg::StepHeader => "الخطوة {n}: {title}",
        Msg::LabeledValue => "{label}: {value}",
        Msg::UserSupplied => "(مقدم من المستخدم)",
        Msg::FinalValueDesc => "القيمة المقدرة: {value}",
        Msg::FloorNote => "(تم تطبيق الحد الأدنى للقيمة البالغ {floor} لأن القيمة المحسوبة كانت أقل منه.)",
        Msg::DataSourceNote => "مصدر البيانات: الأرقام التي أدخلها المستخدم؛ المعايير المميزة بأنها مقدمة من المستخدم لم يتم التحقق منها. هذا التقدير استرشادي فقط ولا يغني عن التقييم المهني، وينبغي مراجعته للتأكد من توافقه مع المعيار الدولي للتقارير المالية رقم ١٣ (قياس القيمة العادلة).",

        Msg::DcfIntro => "تقدّر طريقة التدفقات النقدية المخصومة القيمة بالقيمة الحالية للتدفقات النقدية الحرة المستقبلية المتوقعة مضافاً إليها القيمة النهائية.",
        Msg::DcfWaccTitle => "معدل الخصم (المتوسط المرجح لتكلفة رأس المال)",
        Msg::DcfWaccText => "يمثل معدل الخصم المتوسط المرجح لتكلفة رأس المال، أي العائد الذي يطلبه المستثمرون مقابل مخاطر هذه التدفقات النقدية.",
        Msg::DcfRiskPremiumNote => "(علاوة مخاطر الدولة المقدمة من المستخدم: {value}. معروضة للاطلاع فقط ولا تضاف إلى معدل الخصم.)",
        Msg::DcfFcfTitle => "التدفق النقدي الحر",
        Msg::DcfFcfText => "التدفق النقدي الحر هو النقد الذي تولده الشركة بعد تكاليف التشغيل والنفقات الرأسمالية.",
        Msg::DcfProjectionPeriod => "فترة التوقع: {value} سنوات",
        Msg::DcfDiscountRateItem => "معدل الخصم: {value}",
        Msg::DcfTerminalGrowthItem => "معدل النمو النهائي: {value}",
        Msg::DefaultRateNote => "(لم يتم إدخاله؛ استُخدمت القيمة الافتراضية {value})",
        Msg::SectorGrowthOverride => "(معدل نمو القطاع المقدم من المستخدم البالغ {value} يحل محل معدل النمو النهائي المدخل البالغ {entered}.)",
        Msg::DcfFcfList => "التدفقات النقدية الحرة المتوقعة:",
        Msg::DcfFcfYearItem => "السنة {year}: {value}",
        Msg::DcfStepPvFcf => "القيمة الحالية للتدفقات النقدية المتوقعة",
        Msg::DcfPvSumDesc => "يتم خصم التدفق النقدي لكل سنة إلى قيمته الحالية. المجموع: {pv_sum}",
        Msg::DcfPvYear => "السنة {year}: {fcf} / (١ + {wacc})^{year} = {pv}",
        Msg::DcfStepTerminal => "القيمة النهائية",
        Msg::DcfLastFcfDesc => "التدفق النقدي للسنة الأخيرة المستخدم: {last_fcf}",
        Msg::LastFcfGrownNote => "(التدفق النقدي للسنة الأخيرة غير متوفر؛ تم تقديره من تدفق السنة الأولى البالغ {base} بنمو {growth} سنوياً لمدة {periods} سنوات.)",
        Msg::LastFcfSeedNote => "(لم يتم إدخال تدفق نقدي صالح؛ تم التقدير من قيمة أساس {base} بنمو {growth} سنوياً لمدة {periods} سنوات.)",
        Msg::TvGordon => "نموذج جوردون للنمو: {last_fcf} × (١ + {g}) / ({wacc} - {g}) = {tv}",
        Msg::TvFallback => "معدل النمو ليس أقل من معدل الخصم، لذا لا ينطبق نموذج جوردون للنمو. تم استخدام البديل: {last_fcf} × {multiple} = {tv}",
        Msg::DcfStepPvTerminal => "القيمة الحالية للقيمة النهائية",
        Msg::DcfPvTerminalDesc => "{tv} / (١ + {wacc})^{years} = {pv_tv}",
        Msg::DcfStepEv => "قيمة المنشأة",
        Msg::DcfEvDesc => "{pv_sum} + {pv_tv} = {ev}",
        Msg::DcfStepLiquidity => "خصم السيولة والقابلية للتسويق",
        Msg::DcfLiquidityDesc => "يُطبق خصم بنسبة {pct} للشركات الخاصة (المعامل {factor}): {ev} × {factor} = {discounted_ev}",
        Msg::StepFinal => "القيمة النهائية",

        Msg::BookIntro => "تقيّم طريقة القيمة الدفترية الشركة بصافي أصولها: ما يتبقى بعد خصم جميع الالتزامات من إجمالي الأصول.",
        Msg::BookStepNet => "صافي الأصول",
        Msg::BookNetDesc => "{assets} - {liabilities} = {book}",

        Msg::CompsIntro => "تطبق طريقة الشركات المماثلة مضاعفات التقييم الملاحظة لشركات مشابهة على أرقام هذه الشركة.",
        Msg::MultiplesIntro => "تطبق طريقة مضاعفات السوق مضاعف الإيرادات الخاص بالقطاع على إيرادات هذه الشركة.",
        Msg::OtherStepBase => "المقياس الأساسي والمضاعف",
        Msg::RulePe => "صافي الدخل البالغ {base} مع مضاعف الربحية للقطاع المقدم من المستخدم البالغ {multiple}.",
        Msg::RuleEvEbitda => "الأرباح قبل الفوائد والضرائب والإهلاك والاستهلاك البالغة {base} مع المضاعف المقدم من المستخدم البالغ {multiple}.",
        Msg::RuleHeuristic => "لم يتم تقديم مضاعف صالح للقطاع. الأساس التقريبي (الإيرادات × {weight} + الأرباح التشغيلية - إجمالي الالتزامات) البالغ {base} مع معامل {multiple}.",
        Msg::RuleRevenue => "الإيرادات البالغة {base} مع مضاعف الإيرادات المقدم من المستخدم البالغ {multiple}.",
        Msg::RuleMultiplesDefault => "لم يقدم المستخدم مضاعف إيرادات. الإيرادات البالغة {base} مع المعامل الافتراضي {multiple}.",
        Msg::OtherStepCalc => "القيمة المحسوبة",
        Msg::OtherCalcDesc => "{base} × {multiple} = {value}",

        Msg::Summary => "بناءً على {method}، فإن التقييم المقدر لـ {company} هو حوالي {value}. يأخذ هذا في الاعتبار الأرقام المالية الرئيسية والافتراضات (بما في ذلك أي معايير مقدمة من المستخدم) لقطاع {sector} في {country}. يرجى مراجعة ملاحظات التوافق مع المعايير الدولية واستشارة متخصص.",

        Msg::ReportTitle => "تقرير تقييم الشركة",
        Msg::EstimatedValue => "القيمة المقدرة",
        Msg::SummaryTitle => "الملخص",
        Msg::CalculationDetails => "تفاصيل الحساب",
        Msg::DcfInputsTitle => "مدخلات التدفقات النقدية المخصومة",
        Msg::BenchmarksTitle => "المعايير المقدمة من المستخدم",
        Msg::ChartTitle => "الأرقام الرئيسية",
        Msg::IfrsNote => "ملاحظة المعايير الدولية: ينبغي أن يتبع قياس القيمة العادلة المعيار الدولي للتقارير المالية رقم ١٣ وأن يراجعه متخصص مؤهل.",
        Msg::PageFooter => "{page} / {total}",
        Msg::GeneratedAt => "تاريخ الإنشاء: {timestamp}",
        Msg::NotAvailable => "غير متوفر",

        Msg::ChartFcfYear => "تدفق س{year}",

        Msg::TuiHelp => "q خروج | l اللغة | t المظهر | r إعادة التحميل | e تصدير | أعلى/أسفل تمرير",
        Msg::TuiExported => "تم التصدير إلى {path}",
        Msg::TuiExportFailed => "فشل التصدير: {error}",
        Msg::PromptChoose => "اختر {label} [١-{max}]",
        Msg::PromptOptional => "(اختياري، اضغط Enter للتخطي)",
        Msg::PromptInvalidChoice => "اختيار غير صالح. حاول مرة أخرى.",
        Msg::PromptRetry => "{error} حاول مرة أخرى.",
    }
}
