use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use polarity_model::SentimentLabel;

use crate::types::AnalyzeResult;

/// Longest review text shown in a table cell before truncation.
const CELL_PREVIEW_CHARS: usize = 72;

pub fn print_summary(result: &AnalyzeResult) {
    println!("Dataset: {}", result.csv_path.display());
    println!("Lexicon: {}", result.lexicon_source);
    println!(
        "Records: {} ingested, {} sampled",
        result.row_count,
        result.reviews.len()
    );
    if let Some(path) = &result.output {
        println!("Labeled set: {}", path.display());
    }
    if result.show > 0 && !result.reviews.is_empty() {
        print_review_table(result);
    }
    print_count_table(result);
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_review_table(result: &AnalyzeResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Review"),
        header_cell("Normalized"),
        header_cell("Label"),
    ]);
    apply_review_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for review in result.reviews.iter().take(result.show) {
        table.add_row(vec![
            Cell::new(review.index),
            text_cell(&review.original),
            text_cell(&review.normalized),
            label_cell(review.label),
        ]);
    }
    println!("{table}");
}

fn print_count_table(result: &AnalyzeResult) {
    let counts = result.counts;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Count")]);
    apply_count_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        (SentimentLabel::Positive, counts.positive),
        (SentimentLabel::Negative, counts.negative),
        (SentimentLabel::Neutral, counts.neutral),
        (SentimentLabel::Error, counts.error),
    ];
    for (label, count) in rows {
        table.add_row(vec![label_cell(label), count_cell(count, label_color(label))]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.total()).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("Sentiment:");
    println!("{table}");
}

fn label_cell(label: SentimentLabel) -> Cell {
    match label {
        SentimentLabel::Positive => Cell::new(label.as_str()).fg(Color::Green),
        SentimentLabel::Negative => Cell::new(label.as_str()).fg(Color::Red),
        SentimentLabel::Neutral => Cell::new(label.as_str()).fg(Color::DarkGrey),
        SentimentLabel::Error => Cell::new(label.as_str())
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
    }
}

fn label_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Neutral => Color::DarkGrey,
        SentimentLabel::Error => Color::Yellow,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn text_cell(text: &str) -> Cell {
    if text.trim().is_empty() {
        dim_cell("-")
    } else {
        Cell::new(truncate_preview(text))
    }
}

/// Collapse whitespace and cap length so one long review cannot dominate
/// the table.
fn truncate_preview(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut preview: String = collapsed.chars().take(CELL_PREVIEW_CHARS).collect();
    if collapsed.chars().count() > CELL_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

fn apply_review_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn apply_count_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
