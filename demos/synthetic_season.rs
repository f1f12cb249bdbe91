use anyhow::Result;
use chrono::NaiveDate;
use ecommerce_insights::{analyze_orders, format_currency, FilterSpec, OrderGenerator};

fn main() -> Result<()> {
    env_logger::init();

    println!("🎲 Generating a seeded year of synthetic orders...");
    let records = OrderGenerator::new(42)
        .with_start_date(NaiveDate::from_ymd_opt(2017, 9, 1).unwrap())
        .with_span_days(365)
        .with_order_count(2_000)
        .with_multi_line_chance(0.2)
        .with_missing_customer_chance(0.05)
        .generate();
    println!("✅ {} line items generated.", records.len());

    let filter = FilterSpec::new(
        NaiveDate::from_ymd_opt(2017, 9, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 8, 31).unwrap(),
    );
    let report = analyze_orders(&records, &filter)?;

    println!("\n📈 Monthly Revenue");
    for point in &report.monthly.revenue {
        println!("   {}: {}", point.label, format_currency(point.revenue));
    }

    println!("\n🏆 Top Categories by Revenue");
    for (rank, entry) in report.top_categories.iter().enumerate() {
        println!(
            "   {}. {} — {}",
            rank + 1,
            entry.category,
            format_currency(entry.revenue)
        );
    }

    println!("\n💡 Automated Insights");
    for line in &report.insights {
        println!("   • {}", line);
    }

    Ok(())
}
