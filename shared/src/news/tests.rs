use super::*;

fn window(open: f64, close: f64) -> PriceWindow {
    PriceWindow {
        open,
        high: close.max(open),
        low: close.min(open),
        close,
        volume: 1_000.0,
    }
}

// =========================================================
// Sentiment thresholds
// =========================================================

#[test]
fn sentiment_above_threshold_is_positive() {
    assert_eq!(SentimentLabel::from_score(0.21), SentimentLabel::Positive);
    assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::Positive);
}

#[test]
fn sentiment_below_threshold_is_negative() {
    assert_eq!(SentimentLabel::from_score(-0.21), SentimentLabel::Negative);
    assert_eq!(SentimentLabel::from_score(-1.0), SentimentLabel::Negative);
}

#[test]
fn sentiment_boundaries_are_neutral() {
    // Both boundary values fall into the neutral bucket
    assert_eq!(SentimentLabel::from_score(0.2), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::from_score(-0.2), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
}

// =========================================================
// Price change
// =========================================================

#[test]
fn price_change_is_close_minus_open() {
    let change = PriceChange::from_window(&window(50_000.0, 51_500.0));
    assert_eq!(change.change, 1_500.0);
    assert_eq!(change.change_percent, 3.0);
    assert!(change.is_positive);
}

#[test]
fn price_change_percent_rounds_to_two_decimals() {
    // 1/3 of a percent rounds to 0.33
    let change = PriceChange::from_window(&window(30_000.0, 30_100.0));
    assert_eq!(change.change_percent, 0.33);

    let change = PriceChange::from_window(&window(3.0, 4.0));
    assert_eq!(change.change_percent, 33.33);
}

#[test]
fn falling_close_is_negative() {
    let change = PriceChange::from_window(&window(10_000.0, 9_500.0));
    assert_eq!(change.change, -500.0);
    assert_eq!(change.change_percent, -5.0);
    assert!(!change.is_positive);
}

#[test]
fn flat_window_counts_as_positive() {
    // close >= open is rendered as "up"
    let change = PriceChange::from_window(&window(10_000.0, 10_000.0));
    assert!(change.is_positive);
}

// =========================================================
// Price window resolution
// =========================================================

#[test]
fn out_of_range_index_falls_back_to_first_window() {
    // 3 similar items but a single price window: item 2 resolves to window 0
    let windows = vec![window(100.0, 110.0)];
    assert_eq!(resolve_price_window(&windows, 2), Some(&windows[0]));
    assert_eq!(resolve_price_window(&windows, 0), Some(&windows[0]));
}

#[test]
fn in_range_index_resolves_its_own_window() {
    let windows = vec![window(100.0, 110.0), window(200.0, 190.0)];
    assert_eq!(resolve_price_window(&windows, 1), Some(&windows[1]));
}

#[test]
fn empty_window_list_resolves_to_none() {
    assert_eq!(resolve_price_window(&[], 0), None);
    assert_eq!(resolve_price_window(&[], 3), None);
}

// =========================================================
// Similarity display
// =========================================================

#[test]
fn similarity_is_a_fixed_linear_rescale() {
    assert_eq!(similarity_percent(1.5), 85.0);
    assert_eq!(similarity_percent(0.0), 100.0);
    assert_eq!(similarity_percent(0.37), 96.3);
}

#[test]
fn similarity_is_not_clamped() {
    // Distances outside [0, 10] pass through unclamped
    assert_eq!(similarity_percent(12.0), -20.0);
    assert_eq!(similarity_percent(-0.5), 105.0);
}

#[test]
fn similarity_rounds_to_one_decimal() {
    assert_eq!(similarity_percent(1.234), 87.7);
}

// =========================================================
// Amount formatting
// =========================================================

#[test]
fn amounts_are_grouped_by_thousands() {
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(950.0), "950");
    assert_eq!(format_amount(50_000.0), "50,000");
    assert_eq!(format_amount(1_234_567.0), "1,234,567");
}

#[test]
fn fractional_amounts_keep_up_to_two_decimals() {
    assert_eq!(format_amount(50_000.5), "50,000.5");
    assert_eq!(format_amount(1_234.56), "1,234.56");
    assert_eq!(format_amount(0.999), "1");
    assert_eq!(format_amount(-1_500.0), "-1,500");
}
