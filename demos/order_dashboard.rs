use chrono::NaiveDate;
use ecommerce_insights::{
    analyze_orders, distinct_categories, timestamp_extent, FilterSpec, OrderRecord,
};

fn main() {
    env_logger::init();

    println!("🛒 Ecommerce Order Analytics Demo");
    println!("═══════════════════════════════════════════════════════════════\n");

    let records = sample_orders();
    println!("✅ Loaded {} line items.", records.len());
    if let Some((min, max)) = timestamp_extent(&records) {
        println!("   Data range: {} — {}", min.date(), max.date());
    }
    println!(
        "   Categories: {}",
        distinct_categories(&records).join(", ")
    );

    let filter = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 3, 31).unwrap(),
    );
    let report = analyze_orders(&records, &filter).expect("analysis should succeed");

    println!("\n📊 KPIs for {} to {}", filter.start_date, filter.end_date);
    println!("   Total Revenue:       {}", report.kpis.total_revenue_display());
    println!("   Orders:              {}", report.kpis.order_count_display());
    println!(
        "   Avg Order Value:     {}",
        report.kpis.average_order_value_display()
    );
    println!(
        "   Unique Customers:    {}",
        report.kpis.unique_customers_display()
    );

    println!("\n📈 Monthly Revenue");
    for point in &report.monthly.revenue {
        println!(
            "   {}: {}",
            point.label,
            ecommerce_insights::format_currency(point.revenue)
        );
    }

    println!("\n🏆 Top Categories by Revenue");
    for (rank, entry) in report.top_categories.iter().enumerate() {
        println!(
            "   {}. {} — {}",
            rank + 1,
            entry.category,
            ecommerce_insights::format_currency(entry.revenue)
        );
    }

    println!("\n💡 Automated Insights");
    for line in &report.insights {
        println!("   • {}", line);
    }

    println!("\n───────────────────────── Markdown report ─────────────────────────\n");
    println!("{}", report.to_markdown());
}

fn sample_orders() -> Vec<OrderRecord> {
    let at = |y: i32, m: u32, d: u32, h: u32, min: u32| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    };

    vec![
        OrderRecord::new(
            "ORD-001",
            Some("CUST-01".to_string()),
            at(2018, 1, 4, 9, 12),
            Some("toys".to_string()),
            189.9,
        ),
        OrderRecord::new(
            "ORD-002",
            Some("CUST-02".to_string()),
            at(2018, 1, 11, 14, 30),
            Some("health_beauty".to_string()),
            74.5,
        ),
        // two line items of the same order
        OrderRecord::new(
            "ORD-003",
            Some("CUST-03".to_string()),
            at(2018, 1, 25, 19, 5),
            Some("books".to_string()),
            39.9,
        ),
        OrderRecord::new(
            "ORD-003",
            Some("CUST-03".to_string()),
            at(2018, 1, 25, 19, 5),
            Some("toys".to_string()),
            55.0,
        ),
        OrderRecord::new(
            "ORD-004",
            Some("CUST-01".to_string()),
            at(2018, 2, 2, 10, 0),
            Some("toys".to_string()),
            210.0,
        ),
        OrderRecord::new(
            "ORD-005",
            None,
            at(2018, 2, 14, 16, 45),
            Some("health_beauty".to_string()),
            120.9,
        ),
        OrderRecord::new(
            "ORD-006",
            Some("CUST-04".to_string()),
            at(2018, 2, 27, 11, 20),
            None,
            18.5,
        ),
        OrderRecord::new(
            "ORD-007",
            Some("CUST-02".to_string()),
            at(2018, 3, 8, 8, 55),
            Some("books".to_string()),
            66.0,
        ),
        OrderRecord::new(
            "ORD-008",
            Some("CUST-05".to_string()),
            at(2018, 3, 21, 20, 10),
            Some("toys".to_string()),
            310.4,
        ),
        OrderRecord::new(
            "ORD-009",
            Some("CUST-04".to_string()),
            at(2018, 3, 29, 13, 5),
            Some("health_beauty".to_string()),
            95.0,
        ),
    ]
}
