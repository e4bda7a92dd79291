use contracts::catalog::{CalculatorCategory, CalculatorDefinition, FaqItem};

/// The full calculator catalog, authored at compile time.
///
/// Ordering matters: the sitemap emits calculators in this order, grouped
/// after categories. Slugs must stay unique within a category; the
/// `lint_content` binary enforces that together with the FAQ length targets.
static CALCULATORS: &[CalculatorDefinition] = &[
    // ------------------------------------------------------------------
    // Finance
    // ------------------------------------------------------------------
    CalculatorDefinition {
        id: "tax-calculator",
        category: CalculatorCategory::Finance,
        slug: "tax-calculator",
        name: "Tax Calculator",
        description: "Estimate your income tax and effective tax rate from your yearly salary.",
        keywords: &["tax calculator", "income tax", "effective tax rate"],
        faqs: &[
            FaqItem {
                question: "What is the difference between marginal and effective tax rate?",
                answer: "Your marginal rate is the tax applied to the last unit of income you earn, while your effective rate is total tax divided by total taxable income. Because lower brackets are taxed at lower rates, the effective rate is almost always below the marginal rate shown for your top bracket.",
            },
            FaqItem {
                question: "Does this calculator include social security contributions?",
                answer: "The estimate covers income tax only and does not include social security, health insurance or other payroll contributions. Those deductions vary by country and employment type, so add them separately if you need a complete take-home figure. The result is a planning estimate rather than a filing-ready number.",
            },
        ],
    },
    CalculatorDefinition {
        id: "loan-calculator",
        category: CalculatorCategory::Finance,
        slug: "loan-calculator",
        name: "Loan Calculator",
        description: "Work out monthly payments and total interest for a fixed-rate loan.",
        keywords: &["loan calculator", "monthly payment", "amortization"],
        faqs: &[
            FaqItem {
                question: "How is the monthly loan payment calculated?",
                answer: "The payment comes from the standard amortization formula: the loan amount multiplied by the monthly interest rate, divided by one minus the rate factor raised to the negative number of payments. Each installment stays constant while the interest share shrinks and the principal share grows over the term.",
            },
            FaqItem {
                question: "Can I reduce total interest by paying the loan off early?",
                answer: "Yes. Extra principal payments shorten the remaining term, and interest accrues only on the outstanding balance, so every early payment removes all future interest on that amount. Check your contract first, because some lenders charge an early repayment fee that can offset part of the saving.",
            },
        ],
    },
    CalculatorDefinition {
        id: "mortgage-calculator",
        category: CalculatorCategory::Finance,
        slug: "mortgage-calculator",
        name: "Mortgage Calculator",
        description: "Estimate monthly mortgage payments from price, down payment, rate and term.",
        keywords: &["mortgage calculator", "home loan", "down payment"],
        faqs: &[],
    },
    CalculatorDefinition {
        id: "compound-interest-calculator",
        category: CalculatorCategory::Finance,
        slug: "compound-interest-calculator",
        name: "Compound Interest Calculator",
        description: "See how savings grow with compound interest and regular contributions.",
        keywords: &["compound interest", "savings growth", "investment calculator"],
        faqs: &[],
    },
    CalculatorDefinition {
        id: "currency-converter",
        category: CalculatorCategory::Finance,
        slug: "currency-converter",
        name: "Currency Converter",
        description: "Convert between major currencies using a rate you provide.",
        keywords: &["currency converter", "exchange rate", "usd to try"],
        faqs: &[],
    },
    CalculatorDefinition {
        id: "tip-calculator",
        category: CalculatorCategory::Finance,
        slug: "tip-calculator",
        name: "Tip Calculator",
        description: "Split a bill and calculate the tip per person in seconds.",
        keywords: &["tip calculator", "split bill", "gratuity"],
        faqs: &[],
    },
    // Not yet translated; intentionally absent from the URL mapping table,
    // so its sitemap entry carries no hreflang alternates.
    CalculatorDefinition {
        id: "retirement-savings-calculator",
        category: CalculatorCategory::Finance,
        slug: "retirement-savings-calculator",
        name: "Retirement Savings Calculator",
        description: "Project your retirement savings balance from monthly contributions.",
        keywords: &["retirement calculator", "savings projection", "pension"],
        faqs: &[],
    },
    // ------------------------------------------------------------------
    // Health
    // ------------------------------------------------------------------
    CalculatorDefinition {
        id: "bmi-calculator",
        category: CalculatorCategory::Health,
        slug: "bmi-calculator",
        name: "BMI Calculator",
        description: "Calculate your body mass index from height and weight, metric or imperial.",
        keywords: &["bmi calculator", "body mass index", "healthy weight"],
        faqs: &[
            FaqItem {
                question: "What is a healthy BMI range?",
                answer: "For most adults a body mass index between 18.5 and 24.9 is considered the healthy range. Values from 25 to 29.9 count as overweight and 30 or above as obese. BMI is a screening measure rather than a diagnosis, so discuss unusual results with a medical professional.",
            },
            FaqItem {
                question: "Why can BMI be misleading for athletes?",
                answer: "BMI only compares weight against height and cannot tell muscle from fat. Muscular athletes often land in the overweight band despite low body fat, while someone with little muscle can show a normal value yet carry excess fat. Pair BMI with a body fat measurement for a fuller picture.",
            },
        ],
    },
    CalculatorDefinition {
        id: "body-fat-calculator",
        category: CalculatorCategory::Health,
        slug: "body-fat-calculator",
        name: "Body Fat Calculator",
        description: "Estimate body fat percentage using the U.S. Navy circumference method.",
        keywords: &["body fat calculator", "navy method", "body composition"],
        faqs: &[],
    },
    CalculatorDefinition {
        id: "calorie-calculator",
        category: CalculatorCategory::Health,
        slug: "calorie-calculator",
        name: "Calorie Calculator",
        description: "Find your daily calorie needs based on age, size and activity level.",
        keywords: &["calorie calculator", "tdee", "daily calories"],
        faqs: &[],
    },
    CalculatorDefinition {
        id: "ideal-weight-calculator",
        category: CalculatorCategory::Health,
        slug: "ideal-weight-calculator",
        name: "Ideal Weight Calculator",
        description: "Compare ideal body weight estimates from several published formulas.",
        keywords: &["ideal weight", "devine formula", "healthy weight range"],
        faqs: &[],
    },
    CalculatorDefinition {
        id: "water-intake-calculator",
        category: CalculatorCategory::Health,
        slug: "water-intake-calculator",
        name: "Water Intake Calculator",
        description: "Estimate how much water you should drink per day for your body and activity.",
        keywords: &["water intake", "daily hydration", "water calculator"],
        faqs: &[],
    },
    // ------------------------------------------------------------------
    // Education
    // ------------------------------------------------------------------
    CalculatorDefinition {
        id: "gpa-calculator",
        category: CalculatorCategory::Education,
        slug: "gpa-calculator",
        name: "GPA Calculator",
        description: "Calculate your grade point average from course grades and credit hours.",
        keywords: &["gpa calculator", "grade point average", "credits"],
        faqs: &[
            FaqItem {
                question: "How is GPA calculated from letter grades?",
                answer: "Each letter grade maps to grade points, typically four for an A down to zero for an F. Multiply every course's points by its credit hours, add those products together, then divide by the total credit hours attempted. The result is your weighted grade point average for the period.",
            },
            FaqItem {
                question: "What is the difference between term GPA and cumulative GPA?",
                answer: "Term GPA covers only the courses taken in a single semester or quarter, while cumulative GPA weighs every graded course across your entire enrollment. A strong term cannot move the cumulative number very far once many credits accumulate, which is why early semesters influence the final average so heavily.",
            },
        ],
    },
    CalculatorDefinition {
        id: "grade-calculator",
        category: CalculatorCategory::Education,
        slug: "grade-calculator",
        name: "Grade Calculator",
        description: "Find the score you need on the final exam to reach your target grade.",
        keywords: &["grade calculator", "final exam score", "weighted grade"],
        faqs: &[],
    },
    CalculatorDefinition {
        id: "exam-average-calculator",
        category: CalculatorCategory::Education,
        slug: "exam-average-calculator",
        name: "Exam Average Calculator",
        description: "Average multiple exam scores with optional per-exam weights.",
        keywords: &["exam average", "weighted average", "test scores"],
        faqs: &[],
    },
    // ------------------------------------------------------------------
    // Math
    // ------------------------------------------------------------------
    CalculatorDefinition {
        id: "percentage-calculator",
        category: CalculatorCategory::Math,
        slug: "percentage-calculator",
        name: "Percentage Calculator",
        description: "Calculate percentages, percentage change and percentage of a number.",
        keywords: &["percentage calculator", "percent change", "percent of"],
        faqs: &[
            FaqItem {
                question: "How do I calculate the percentage change between two numbers?",
                answer: "Subtract the old value from the new value, divide the difference by the old value, then multiply by one hundred. A positive result is an increase and a negative one a decrease. For example, moving from 80 to 92 gives 12 divided by 80, a 15 percent increase.",
            },
            FaqItem {
                question: "What is the difference between percentage points and percent?",
                answer: "Percentage points measure the absolute gap between two percentages, while percent expresses a relative change. If a rate climbs from 10 to 12 percent, it rose two percentage points but twenty percent in relative terms. Mixing the two is one of the most common reporting mistakes.",
            },
        ],
    },
    CalculatorDefinition {
        id: "fraction-calculator",
        category: CalculatorCategory::Math,
        slug: "fraction-calculator",
        name: "Fraction Calculator",
        description: "Add, subtract, multiply and divide fractions with simplified results.",
        keywords: &["fraction calculator", "simplify fractions", "mixed numbers"],
        faqs: &[],
    },
    CalculatorDefinition {
        id: "average-calculator",
        category: CalculatorCategory::Math,
        slug: "average-calculator",
        name: "Average Calculator",
        description: "Compute mean, median and mode for a list of numbers.",
        keywords: &["average calculator", "mean median mode", "statistics"],
        faqs: &[],
    },
    // ------------------------------------------------------------------
    // Date & Time
    // ------------------------------------------------------------------
    CalculatorDefinition {
        id: "age-calculator",
        category: CalculatorCategory::DateTime,
        slug: "age-calculator",
        name: "Age Calculator",
        description: "Calculate your exact age in years, months and days from your birth date.",
        keywords: &["age calculator", "how old am i", "birth date"],
        faqs: &[
            FaqItem {
                question: "How does the age calculator handle leap years?",
                answer: "The calculation works on calendar dates rather than a fixed 365-day year, so leap days are counted naturally. Someone born on February 29 ages one calendar year each March 1 in non-leap years. Month lengths are also respected, which keeps the years, months and days breakdown exact.",
            },
            FaqItem {
                question: "Why do different sites show a slightly different age in days?",
                answer: "Most differences come from time zones and rounding. A site that compares timestamps in UTC can be a day ahead or behind your local calendar near midnight, and some tools round partial days up. This calculator compares plain calendar dates in your own time zone to avoid that drift.",
            },
        ],
    },
    CalculatorDefinition {
        id: "date-difference-calculator",
        category: CalculatorCategory::DateTime,
        slug: "date-difference-calculator",
        name: "Date Difference Calculator",
        description: "Count the days, weeks and months between any two calendar dates.",
        keywords: &["date difference", "days between dates", "date duration"],
        faqs: &[],
    },
    CalculatorDefinition {
        id: "working-days-calculator",
        category: CalculatorCategory::DateTime,
        slug: "working-days-calculator",
        name: "Working Days Calculator",
        description: "Count business days between two dates, excluding weekends.",
        keywords: &["working days", "business days", "weekday counter"],
        faqs: &[],
    },
];

/// All calculators in sitemap order
pub fn all_calculators() -> &'static [CalculatorDefinition] {
    CALCULATORS
}

/// Calculators of one category, preserving catalog order
pub fn calculators_in_category(
    category: CalculatorCategory,
) -> impl Iterator<Item = &'static CalculatorDefinition> {
    CALCULATORS.iter().filter(move |c| c.category == category)
}

/// Exact lookup by category and slug; `None` for unknown pages
pub fn find_calculator(
    category: CalculatorCategory,
    slug: &str,
) -> Option<&'static CalculatorDefinition> {
    calculators_in_category(category).find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_calculators() {
        for category in CalculatorCategory::all() {
            assert!(
                calculators_in_category(*category).count() >= 2,
                "category {category:?} is underpopulated"
            );
        }
    }

    #[test]
    fn find_calculator_matches_exact_slug_only() {
        assert!(find_calculator(CalculatorCategory::DateTime, "age-calculator").is_some());
        assert!(find_calculator(CalculatorCategory::Finance, "age-calculator").is_none());
        assert!(find_calculator(CalculatorCategory::DateTime, "age").is_none());
    }

    #[test]
    fn slugs_are_unique_within_category() {
        let mut seen = std::collections::HashSet::new();
        for calc in all_calculators() {
            assert!(
                seen.insert((calc.category, calc.slug)),
                "duplicate slug {} in {:?}",
                calc.slug,
                calc.category
            );
        }
    }
}
