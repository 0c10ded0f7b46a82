//! Basic usage example for the charspan API

use charspan_api::{kth_largest, scan_text, Config, Input, StringScanner, TreeArena};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with the convenience function
    println!("=== Method 1: Convenience Function ===");
    let report = scan_text("babad")?;
    println!(
        "Longest palindrome: {:?} at [{}, {})",
        report.palindrome.text, report.palindrome.start, report.palindrome.end
    );
    println!("Longest unique run: {}", report.longest_unique_len);
    println!("Scan took {}ms\n", report.metadata.processing_time_ms);

    // Method 2: A scanner with an input size cap
    println!("=== Method 2: Capped Scanner ===");
    let config = Config::builder().max_input_chars(10_000).build()?;
    let scanner = StringScanner::with_config(config);

    let report = scanner.scan(Input::from_text("pwwkew and a racecar went by"))?;
    println!("Longest palindrome: {:?}", report.palindrome.text);
    println!("Duplicate characters: {}", report.duplicate_chars);
    println!("First non-repeated: {:?}\n", report.first_non_repeated);

    // Method 3: Individual algorithms, à la carte
    println!("=== Method 3: Direct Algorithm Calls ===");
    let third = kth_largest(&[3, 1, 4, 1, 5], 2)?;
    println!("3rd largest of [3,1,4,1,5]: {:?}", third);

    let mut arena = TreeArena::new();
    let left = arena.leaf(2);
    let right = arena.leaf(2);
    let root = arena.insert(1, Some(left), Some(right));
    println!("Tree is symmetric: {}", arena.is_symmetric(Some(root)));

    Ok(())
}
