use anyhow::Result;
use chrono::NaiveDate;
use ecommerce_insights::{
    analyze_orders, filter_records, normalize_rows_lossy, FilterSpec, RawOrderRow,
};

// A miniature dataset export: one row lacks its order id, one lacks a
// category, one carries an explicit order_total instead of components.
const SAMPLE_CSV: &str = "\
order_id,customer_id,order_purchase_timestamp,product_category_name,price,freight_value,order_total
ORD-001,CUST-01,2018-01-05 09:12:33,toys,89.90,12.10,
ORD-002,CUST-02,2018-01-09 18:40:02,books,24.90,6.50,
ORD-003,CUST-02,2018-01-20 14:02:11,,49.00,8.00,
ORD-004,CUST-03,2018-02-02 10:15:45,toys,,,157.30
,CUST-09,2018-02-10 10:00:00,toys,10.00,2.00,
ORD-005,,2018-02-19 21:33:08,health_beauty,64.40,9.90,
ORD-006,CUST-01,2018-02-25 08:05:59,books,31.20,5.80,
";

fn main() -> Result<()> {
    env_logger::init();

    println!("📥 Parsing embedded CSV export...");
    let mut reader = csv::ReaderBuilder::new().from_reader(SAMPLE_CSV.as_bytes());
    let mut rows: Vec<RawOrderRow> = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }

    let (records, skipped) = normalize_rows_lossy(&rows);
    println!(
        "✅ {} records normalized, {} unusable row(s) dropped.",
        records.len(),
        skipped
    );

    let filter = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 2, 28).unwrap(),
    )
    .with_categories(["toys", "books"]);

    let report = analyze_orders(&records, &filter)?;
    println!("\n💡 Automated Insights");
    for line in &report.insights {
        println!("   • {}", line);
    }

    // The download-button path: write the filtered subset back out as CSV.
    let subset = filter_records(&records, &filter)?;
    let out_path = std::env::temp_dir().join("filtered_ecommerce.csv");
    let mut writer = csv::Writer::from_path(&out_path)?;
    for record in &subset {
        writer.serialize(record)?;
    }
    writer.flush()?;
    println!(
        "\n💾 Wrote {} filtered row(s) to {}",
        subset.len(),
        out_path.display()
    );

    Ok(())
}
