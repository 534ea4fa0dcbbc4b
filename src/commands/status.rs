use crate::constants::{ANALYSIS_FILE, PLOTS_DIR, RAW_DATA_FILE};
use crate::error::Error;
use crate::services::get_output_stats;
use crate::utils::get_output_dir;

pub fn run() {
    println!("📊 Analysis Output Status\n");

    match show_status() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn show_status() -> Result<(), Error> {
    let output_dir = get_output_dir();
    let stats = get_output_stats(&output_dir)?;

    if stats.is_empty() {
        println!(
            "⚠️  No outputs found in '{}'. Run 'topstocks run' first.",
            output_dir.display()
        );
        return Ok(());
    }

    match stats.raw_rows {
        Some(rows) => println!("🔹 {}: {} price rows", RAW_DATA_FILE, format_number(rows)),
        None => println!("🔹 {}: missing", RAW_DATA_FILE),
    }

    match stats.analysis_rows {
        Some(rows) => println!("🔹 {}: {} tickers analyzed", ANALYSIS_FILE, format_number(rows)),
        None => println!("🔹 {}: missing", ANALYSIS_FILE),
    }

    println!("🔹 {}/: {} trend charts", PLOTS_DIR, format_number(stats.chart_count));

    println!(
        "\n💡 Tip: outputs live in '{}' (override with OUTPUT_DIR)",
        output_dir.display()
    );

    Ok(())
}

fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(156), "156");
        assert_eq!(format_number(39_312), "39,312");
    }
}
