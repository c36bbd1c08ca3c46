// Text rendering of a comparison. Amounts use two decimals.
use crate::engine::{Comparison, ComparisonRow, ComparisonStatus};
use crate::model::{PriceSign, SavingsOutcome};
use crate::normalizer::clean_name;
use std::fmt::Write;

/// Ties round away from zero; `{:.2}` alone would round them to even.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", (p * 100.0).round() / 100.0),
        None => "N/A".to_string(),
    }
}

pub fn describe_savings(savings: &SavingsOutcome) -> String {
    let pct = savings.percentage.abs().round();
    match savings.sign {
        PriceSign::Cheaper => format!("Save {} ({:.0}%)", format_price(Some(savings.delta)), pct),
        PriceSign::MoreExpensive => format!(
            "{} more expensive ({:.0}%)",
            format_price(Some(savings.delta.abs())),
            pct
        ),
        PriceSign::Equal => "Same price".to_string(),
    }
}

pub fn header(cmp: &Comparison) -> String {
    let mut line = format!("Searching for: {}", clean_name(&cmp.product.name));
    if let Some(price) = cmp.product.price {
        line.push_str(&format!(" | Current price: {}", format_price(Some(price))));
    }
    line
}

fn row_line(row: &ComparisonRow) -> String {
    let mut line = format!("- {} | {}", row.name, format_price(Some(row.price)));
    if let Some(savings) = &row.savings {
        line.push_str(&format!(" | {}", describe_savings(savings)));
    }
    line.push_str(&format!(" | {}", row.link));
    line
}

pub fn render_text(cmp: &Comparison) -> String {
    let mut out = String::new();
    match cmp.status {
        ComparisonStatus::NoQuery => {
            let _ = writeln!(out, "No product name to search for.");
        }
        ComparisonStatus::NoMatches => {
            let _ = writeln!(out, "{}", header(cmp));
            let _ = writeln!(out, "No similar products found.");
        }
        ComparisonStatus::Matches => {
            let _ = writeln!(out, "{}", header(cmp));
            if cmp.product.price.is_some() {
                let _ = writeln!(out, "Price Comparison");
            }
            for row in &cmp.rows {
                let _ = writeln!(out, "{}", row_line(row));
            }
        }
    }
    out
}
