use chrono::NaiveDate;
use ecommerce_insights::*;
use std::fs::File;
use std::io::Write;

fn order(
    order_id: &str,
    customer_id: Option<&str>,
    y: i32,
    m: u32,
    d: u32,
    h: u32,
    category: &str,
    total: f64,
) -> OrderRecord {
    OrderRecord::new(
        order_id,
        customer_id.map(String::from),
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap(),
        Some(category.to_string()),
        total,
    )
}

fn orders_in_month(
    prefix: &str,
    y: i32,
    m: u32,
    count: u32,
    each_total: f64,
    category: &str,
) -> Vec<OrderRecord> {
    (1..=count)
        .map(|i| {
            order(
                &format!("{}-{:02}", prefix, i),
                Some(&format!("{}-CUST-{:02}", prefix, i)),
                y,
                m,
                 1 + (i - 1) % 28,
                10,
                category,
                each_total,
            )
        })
        .collect()
}

#[test]
fn test_two_month_storefront() {
    // January: 10 orders, BRL 1,000 total. February: 12 orders, BRL 1,200.
    let mut records = orders_in_month("JAN", 2018, 1, 10, 100.0, "toys");
    records.extend(orders_in_month("FEB", 2018, 2, 12, 100.0, "toys"));

    let filter = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 2, 28).unwrap(),
    );
    let report = analyze_orders(&records, &filter).unwrap();

    assert_eq!(report.kpis.order_count, 22);
    assert!((report.kpis.total_revenue - 2200.0).abs() < 0.01);
    assert!((report.kpis.average_order_value - 100.0).abs() < 0.01);
    assert_eq!(report.kpis.unique_customers, Some(22));

    let month_cmp = report.comparisons.month_over_month.as_ref().unwrap();
    let pct = month_cmp.pct_change.unwrap();
    assert!((pct - 20.0).abs() < 0.001, "Expected +20%, got {}", pct);

    assert_eq!(
        report.insights[0],
        "Revenue increased 20.0% in Feb 2018 vs Jan 2018 — BRL 1,200.00 vs BRL 1,000.00."
    );

    println!("✓ Two-month storefront test passed");
}

#[test]
fn test_single_order_kpis() {
    let records = vec![order("SOLO-1", Some("C-1"), 2018, 3, 14, 9, "books", 150.5)];

    let filter = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 3, 31).unwrap(),
    );
    let report = analyze_orders(&records, &filter).unwrap();

    assert!((report.kpis.total_revenue - 150.5).abs() < 0.01);
    assert_eq!(report.kpis.order_count, 1);
    assert!((report.kpis.average_order_value - 150.5).abs() < 0.01);
    assert_eq!(report.kpis.unique_customers, Some(1));

    // One month of data: no month-over-month sentence, only category and
    // rolling lines.
    assert_eq!(report.comparisons.month_over_month, None);
    assert!(report.insights[0].starts_with("Top category"));
}

#[test]
fn test_recent_surge_without_prior_baseline() {
    // Ninety days of data where every recent order lands in the trailing
    // 30-day window and the 30 days before it are silent.
    let mut records = vec![
        order("OLD-1", Some("C-1"), 2018, 1, 1, 9, "toys", 50.0),
        order("OLD-2", Some("C-2"), 2018, 1, 5, 9, "toys", 50.0),
    ];
    for i in 0..5 {
        records.push(order(
            &format!("NEW-{}", i),
            Some("C-3"),
            2018,
            3,
            27 + i,
            12,
            "toys",
            30.0,
        ));
    }

    let filter = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 3, 31).unwrap(),
    );
    let report = analyze_orders(&records, &filter).unwrap();

    let rolling = report.comparisons.rolling_30_day.as_ref().unwrap();
    assert_eq!(rolling.recent_orders, 5);
    assert_eq!(rolling.previous_orders, 0);
    assert_eq!(rolling.pct_change, None);

    assert!(report
        .insights
        .contains(&"Orders in last 30 days: 5 (no prior 30-day comparison available).".to_string()));

    println!("✓ Recent surge without baseline test passed");
}

#[test]
fn test_date_filter_ignores_category_when_unrestricted() {
    let records = vec![
        order("A", None, 2018, 1, 10, 9, "toys", 10.0),
        order("B", None, 2018, 1, 20, 9, "books", 20.0),
        order("C", None, 2018, 1, 31, 23, "garden", 30.0),
        order("D", None, 2018, 2, 1, 0, "toys", 40.0),
    ];

    let spec = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 1, 31).unwrap(),
    );
    let subset = filter_records(&records, &spec).unwrap();

    assert_eq!(subset.len(), 3);
    assert!(subset.iter().any(|r| r.category == "garden"));
    assert!(subset.iter().all(|r| r.order_id != "D"));
}

#[test]
fn test_category_slice_and_ranking() {
    let mut records = orders_in_month("T", 2018, 1, 4, 100.0, "toys");
    records.extend(orders_in_month("B", 2018, 1, 3, 150.0, "books"));
    records.extend(orders_in_month("G", 2018, 1, 2, 80.0, "garden"));

    let unrestricted = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 1, 31).unwrap(),
    );
    let report = analyze_orders(&records, &unrestricted).unwrap();

    let names: Vec<&str> = report
        .top_categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(names, vec!["books", "toys", "garden"]);

    let sliced = unrestricted.clone().with_categories(["garden"]);
    let report = analyze_orders(&records, &sliced).unwrap();
    assert_eq!(report.kpis.order_count, 2);
    assert_eq!(report.top_categories.len(), 1);

    println!("✓ Category slice and ranking test passed");
}

#[test]
fn test_invalid_range_rejected() {
    let records = vec![order("A", None, 2018, 1, 10, 9, "toys", 10.0)];
    let spec = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
    );

    let result = analyze_orders(&records, &spec);
    assert!(matches!(
        result,
        Err(AnalyticsError::InvalidDateRange { .. })
    ));
}

#[test]
fn test_currency_edge_values() {
    assert_eq!(format_currency(1_234_567.891), "BRL 1,234,567.89");
    // Never panics on a non-numeric value; falls back to plain rendering.
    let rendered = format_currency(f64::NAN);
    assert!(!rendered.is_empty());
}

#[test]
fn test_report_artifacts() {
    let mut records = orders_in_month("JAN", 2018, 1, 5, 120.0, "toys");
    records.extend(orders_in_month("FEB", 2018, 2, 5, 90.0, "health_beauty"));

    let filter = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 2, 28).unwrap(),
    );
    let report = analyze_orders(&records, &filter).unwrap();

    let json = report.to_json().unwrap();
    let mut file = File::create("test_report_output.json").unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let parsed: AnalyticsReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);

    let markdown = report.to_markdown();
    assert!(markdown.contains("| Total Revenue |"));
    assert!(markdown.contains("## Automated Insights"));
    for line in &report.insights {
        assert!(markdown.contains(line.as_str()));
    }

    println!("✓ Report artifacts test passed - output: test_report_output.json");
}

#[test]
fn test_schema_generation() {
    let schema_json = FilterSpec::schema_as_json().unwrap();

    let mut file = File::create("filter_schema_output.json").unwrap();
    file.write_all(schema_json.as_bytes()).unwrap();

    assert!(schema_json.contains("start_date"));
    assert!(schema_json.contains("end_date"));
    assert!(schema_json.contains("categories"));

    let raw_schema = RawOrderRow::schema_as_json().unwrap();
    assert!(raw_schema.contains("order_purchase_timestamp"));
    assert!(raw_schema.contains("product_category_name"));

    println!("✓ Schema generation test passed - output: filter_schema_output.json");
}

#[test]
fn test_csv_ingestion_and_filtered_export() {
    let csv_text = "\
order_id,customer_id,order_purchase_timestamp,product_category_name,price,freight_value,order_total
ORD-001,CUST-01,2018-01-05 09:12:33,toys,89.90,12.10,
ORD-002,CUST-02,2018-01-09 18:40:02,books,24.90,6.50,
ORD-003,CUST-02,2018-01-20 14:02:11,,49.00,8.00,
ORD-004,CUST-03,2018-02-02 10:15:45,toys,,,157.30
";

    let mut reader = csv::ReaderBuilder::new().from_reader(csv_text.as_bytes());
    let rows: Vec<RawOrderRow> = reader
        .deserialize()
        .collect::<std::result::Result<_, _>>()
        .unwrap();
    let records = normalize_rows(&rows).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[2].category, UNKNOWN_CATEGORY);
    assert!((records[3].order_total - 157.30).abs() < 0.01);

    let filter = FilterSpec::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 1, 31).unwrap(),
    );
    let subset = filter_records(&records, &filter).unwrap();

    let mut writer = csv::Writer::from_path("test_filtered_orders.csv").unwrap();
    for record in &subset {
        writer.serialize(record).unwrap();
    }
    writer.flush().unwrap();

    let mut reader = csv::Reader::from_path("test_filtered_orders.csv").unwrap();
    let reloaded: Vec<OrderRecord> = reader
        .deserialize()
        .collect::<std::result::Result<_, _>>()
        .unwrap();
    assert_eq!(reloaded, subset);

    println!("✓ CSV ingestion test passed - output: test_filtered_orders.csv");
}

#[cfg(feature = "synthetic")]
#[test]
fn test_synthetic_dataset_end_to_end() {
    let records = OrderGenerator::new(11)
        .with_start_date(NaiveDate::from_ymd_opt(2017, 6, 1).unwrap())
        .with_span_days(180)
        .with_order_count(300)
        .generate();

    let filter = FilterSpec::new(
        NaiveDate::from_ymd_opt(2017, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2017, 11, 30).unwrap(),
    );
    let report = analyze_orders(&records, &filter).unwrap();

    assert_eq!(report.kpis.order_count, 300);
    assert!(!report.monthly.revenue.is_empty());
    assert!(!report.insights.is_empty());
}
