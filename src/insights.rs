use crate::compare::{
    compare_periods, ChangeDirection, MonthComparison, PeriodComparisons, RollingComparison,
};
use crate::currency::format_currency;
use crate::ranking::{rank_categories, CategoryRevenue, DEFAULT_TOP_CATEGORIES};
use crate::schema::OrderRecord;
use crate::utils::month_label;

/// Renders the insight sentences for an already-filtered subset.
pub fn generate_insights(records: &[OrderRecord]) -> Vec<String> {
    narrate(
        &compare_periods(records),
        &rank_categories(records, DEFAULT_TOP_CATEGORIES),
    )
}

/// Assembles the insight lines in fixed order: month-over-month revenue,
/// top category, trailing 30-day orders. Unavailable comparisons are
/// skipped, never narrated with placeholder text, so the list can be empty.
pub fn narrate(comparisons: &PeriodComparisons, top_categories: &[CategoryRevenue]) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(cmp) = &comparisons.month_over_month {
        lines.push(month_sentence(cmp));
    }
    if let Some(top) = top_categories.first() {
        lines.push(top_category_sentence(top));
    }
    if let Some(cmp) = &comparisons.rolling_30_day {
        lines.push(rolling_sentence(cmp));
    }
    lines
}

fn month_sentence(cmp: &MonthComparison) -> String {
    match cmp.pct_change {
        Some(pct) => format!(
            "Revenue {} {:.1}% in {} vs {} — {} vs {}.",
            ChangeDirection::from_pct(pct).as_str(),
            pct.abs(),
            month_label(cmp.month),
            month_label(cmp.previous_month),
            format_currency(cmp.revenue),
            format_currency(cmp.previous_revenue),
        ),
        None => format!(
            "Revenue in {}: {} (no previous month data to compare).",
            month_label(cmp.month),
            format_currency(cmp.revenue),
        ),
    }
}

fn top_category_sentence(top: &CategoryRevenue) -> String {
    format!(
        "Top category (by revenue): {} — {}.",
        top.category,
        format_currency(top.revenue),
    )
}

fn rolling_sentence(cmp: &RollingComparison) -> String {
    match cmp.pct_change {
        Some(pct) => format!(
            "Orders in the most recent 30 days {} {:.1}% compared to prior 30 days.",
            ChangeDirection::from_pct(pct).as_str(),
            pct.abs(),
        ),
        None => format!(
            "Orders in last 30 days: {} (no prior 30-day comparison available).",
            cmp.recent_orders,
        ),
    }
}
