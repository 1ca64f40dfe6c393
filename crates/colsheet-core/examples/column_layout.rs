use colsheet_core::{
    Alignment, Color, ColumnDefinition, Fill, Font, HorizontalAlign, Worksheet,
};

fn main() {
    let mut sheet = Worksheet::new("Orders");

    sheet
        .set_columns(vec![
            ColumnDefinition::new().with_header("Id").with_key("id").with_width(8.0),
            ColumnDefinition::new()
                .with_header(vec!["Customer", "(name)"])
                .with_key("customer")
                .with_width(30.0),
            ColumnDefinition::new().with_header("Amount").with_key("amount").with_width(12.0),
            ColumnDefinition::new().with_header("Paid").with_key("paid").with_width(12.0),
        ])
        .expect("column layout is valid");

    for (i, (customer, amount)) in [("Ada", 120.5), ("Grace", 75.0)].into_iter().enumerate() {
        let row = i as u32 + 3;
        sheet.set_cell_value(row, 1, (i + 1) as f64).unwrap();
        sheet.set_cell_value(row, 2, customer).unwrap();
        sheet.set_cell_value(row, 3, amount).unwrap();
    }

    // Style existing cells through their columns
    sheet
        .column_mut_by_key("amount")
        .unwrap()
        .set_num_fmt("#,##0.00")
        .set_alignment(Alignment {
            horizontal: Some(HorizontalAlign::Right),
            ..Alignment::default()
        });
    sheet
        .column_mut_by_key("customer")
        .unwrap()
        .set_font(Font::new().with_italic(true));
    sheet
        .column_mut(4)
        .unwrap()
        .set_fill(Fill::solid(Color::YELLOW));

    println!("=== Columns ===");
    for column in sheet.columns() {
        println!("  {} -> {}", column.letter(), column);
    }

    println!("\n=== Condensed for persistence ===");
    for range in sheet.condensed_columns() {
        println!("  {}..={} width={:?}", range.min, range.max, range.width);
    }

    println!("\nHeader rows: {}", sheet.header_row_count());
}
