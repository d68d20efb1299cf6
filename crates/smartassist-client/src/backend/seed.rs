//! # Seed Content
//!
//! Shared content the backend preloads: statutory due dates, tax tips and
//! learning topics.
//!
//! ## Statutory Calendar (fiscal year 2025)
//! ```text
//! Apr 2025 ─► Mar 2026 tax periods
//!
//!  GSTR-1   11th of the following month   (May 11 2025 ... Apr 11 2026)
//!  GSTR-3B  20th of the following month   (May 20 2025 ... Apr 20 2026)
//!  Advance  Jun 15 · Sep 15 · Dec 15 · Mar 15
//!  GSTR-9   Dec 31 after the year ends    (Dec 31 2026)
//! ```

use chrono::{Datelike, Month, NaiveDate};
use smartassist_core::time::nanos_from_date;
use smartassist_core::{Category, DueDateType, LearningTopic, Reminder, TaxTip};

/// Fiscal year (named by its starting calendar year) that contains `date`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use smartassist_client::backend::seed::fiscal_year_of;
///
/// let march = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
/// let april = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
/// assert_eq!(fiscal_year_of(march), 2025);
/// assert_eq!(fiscal_year_of(april), 2026);
/// ```
pub fn fiscal_year_of(date: NaiveDate) -> i32 {
    if date.month() >= 4 {
        date.year()
    } else {
        date.year() - 1
    }
}

fn statutory(title: String, description: String, kind: DueDateType, date: NaiveDate) -> Reminder {
    Reminder {
        title,
        description,
        due_date: nanos_from_date(date),
        due_date_type: kind,
        reminder_enabled: true,
        user_email: None,
        notification_date: None,
    }
}

/// Statutory due dates for the fiscal year starting April `fiscal_year`.
pub fn statutory_due_dates(fiscal_year: i32) -> Vec<Reminder> {
    let mut dates = Vec::new();

    // Tax periods April..March; returns are due the month after.
    for offset in 0..12u32 {
        let period_month0 = (3 + offset) % 12;
        let period_year = if period_month0 >= 3 { fiscal_year } else { fiscal_year + 1 };
        let due_month0 = (period_month0 + 1) % 12;
        let due_year = if due_month0 == 0 { period_year + 1 } else { period_year };

        let period = match Month::try_from(period_month0 as u8 + 1) {
            Ok(m) => format!("{} {}", m.name(), period_year),
            Err(_) => continue,
        };

        if let Some(date) = NaiveDate::from_ymd_opt(due_year, due_month0 + 1, 11) {
            dates.push(statutory(
                format!("GSTR-1 for {}", period),
                "Outward supplies return".to_string(),
                DueDateType::GstFiling,
                date,
            ));
        }
        if let Some(date) = NaiveDate::from_ymd_opt(due_year, due_month0 + 1, 20) {
            dates.push(statutory(
                format!("GSTR-3B for {}", period),
                "Summary return and tax payment".to_string(),
                DueDateType::GstFiling,
                date,
            ));
        }
    }

    let instalments = [
        (fiscal_year, 6, "First", 15),
        (fiscal_year, 9, "Second", 45),
        (fiscal_year, 12, "Third", 75),
        (fiscal_year + 1, 3, "Final", 100),
    ];
    for (year, month, ordinal, cumulative) in instalments {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, 15) {
            dates.push(statutory(
                format!("{} advance tax instalment", ordinal),
                format!("Pay {}% of estimated tax for the year", cumulative),
                DueDateType::AdvanceTax,
                date,
            ));
        }
    }

    if let Some(date) = NaiveDate::from_ymd_opt(fiscal_year + 1, 12, 31) {
        dates.push(statutory(
            format!("GSTR-9 annual return FY {}-{:02}", fiscal_year, (fiscal_year + 1) % 100),
            "Annual GST return".to_string(),
            DueDateType::GstFiling,
            date,
        ));
    }

    dates
}

fn tip(title: &str, short: &str, full: &str, premium: bool) -> TaxTip {
    TaxTip {
        title: title.to_string(),
        short_description: short.to_string(),
        full_content: full.to_string(),
        is_premium_only: premium,
    }
}

pub fn tax_tips() -> Vec<TaxTip> {
    vec![
        tip(
            "File on time",
            "Late GSTR-3B attracts a daily late fee.",
            "A late fee of Rs 50 per day (Rs 20 for nil returns) applies to GSTR-3B filed \
             after the due date, plus 18% interest on unpaid tax.",
            false,
        ),
        tip(
            "Match purchases with GSTR-2B",
            "Only claim ITC your suppliers have reported.",
            "Input tax credit is allowed only for invoices that appear in your GSTR-2B. \
             Reconcile monthly and follow up with suppliers who have not filed.",
            false,
        ),
        tip(
            "Keep invoices for six years",
            "GST records must be retained for 72 months.",
            "Keep invoices, credit notes and ledgers for 72 months from the due date of the \
             annual return for that year.",
            false,
        ),
        tip(
            "Use the composition scheme",
            "Small businesses can pay a flat rate.",
            "Businesses with turnover up to Rs 1.5 crore can opt for the composition scheme \
             and pay 1% of turnover, with quarterly filing. ITC cannot be claimed.",
            true,
        ),
        tip(
            "Claim ITC on capital goods",
            "Machinery and equipment qualify for credit.",
            "GST paid on capital goods used for business can be claimed in full in the year \
             of purchase, unless depreciation has been claimed on the tax component.",
            true,
        ),
        tip(
            "Reverse charge on legal services",
            "You pay GST on advocate fees, not the advocate.",
            "Legal services from an individual advocate fall under reverse charge. Pay the \
             tax yourself and claim it back as ITC in the same month.",
            true,
        ),
    ]
}

fn topic(
    title: &str,
    description: &str,
    category: Category,
    order: u32,
    quiz: Option<(&str, &str, &str)>,
) -> LearningTopic {
    LearningTopic {
        topic_title: title.to_string(),
        description: description.to_string(),
        category,
        display_order: order,
        quiz_question: quiz.map(|(q, _, _)| q.to_string()),
        correct_answer: quiz.map(|(_, a, _)| a.to_string()),
        explanation: quiz.map(|(_, _, e)| e.to_string()),
    }
}

pub fn learning_content() -> Vec<LearningTopic> {
    vec![
        topic(
            "What is GST?",
            "GST is a single destination-based tax on the supply of goods and services.",
            Category::GstBasics,
            1,
            Some((
                "GST replaced VAT, service tax and which central levy on manufacture?",
                "Excise duty",
                "Central excise duty was subsumed into GST in July 2017.",
            )),
        ),
        topic(
            "CGST, SGST and IGST",
            "Intra-state sales split tax equally into CGST and SGST; inter-state sales \
             carry IGST.",
            Category::GstBasics,
            2,
            Some((
                "Which tax applies to a sale from Maharashtra to Karnataka?",
                "IGST",
                "Inter-state supplies attract Integrated GST.",
            )),
        ),
        topic(
            "Registration threshold",
            "Suppliers of goods must register above Rs 40 lakh turnover (Rs 20 lakh for \
             services).",
            Category::GstBasics,
            3,
            None,
        ),
        topic(
            "Claiming ITC",
            "Tax paid on business purchases can be set off against output tax.",
            Category::Itc,
            1,
            Some((
                "Which return shows the ITC available to you each month?",
                "GSTR-2B",
                "GSTR-2B is the auto-drafted statement of eligible input tax credit.",
            )),
        ),
        topic(
            "Blocked credits",
            "ITC is not available on food, personal vehicles and goods for personal use.",
            Category::Itc,
            2,
            None,
        ),
        topic(
            "GSTR-1",
            "Statement of outward supplies, due on the 11th of the following month.",
            Category::Filing,
            1,
            Some((
                "On which day of the month is GSTR-1 due?",
                "11",
                "Monthly filers submit GSTR-1 by the 11th of the next month.",
            )),
        ),
        topic(
            "GSTR-3B",
            "Summary return with tax payment, due on the 20th of the following month.",
            Category::Filing,
            2,
            None,
        ),
    ]
}
