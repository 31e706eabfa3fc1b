//! Per-category update rules applied to items each day.
//!
//! Every category except Sulfuras follows the same two-step day transition:
//!
//! 1. Decrement `sell_in` by 1.
//! 2. Mutate `quality` according to the category rule, then clamp it back
//!    into bounds.
//!
//! The degradation factor in step 2 is evaluated against the **already
//! decremented** `sell_in`: an item whose sell-by date expires today degrades
//! at the doubled rate on this very transition. Sulfuras skips both steps.
//!
//! All arithmetic uses saturating operations. No panics, no silent overflow.

use gildedrose_types::{Item, ItemCategory, QUALITY_MAX, QUALITY_MIN};

/// Sell-in window (exclusive) within which backstage passes gain +3 per day.
const BACKSTAGE_TRIPLE_WINDOW: i32 = 5;

/// Sell-in window (exclusive) within which backstage passes gain +2 per day.
const BACKSTAGE_DOUBLE_WINDOW: i32 = 10;

/// Daily quality gain for backstage passes outside both windows.
const BACKSTAGE_BASE_GAIN: i32 = 1;

/// Daily quality gain for backstage passes inside the 10-day window.
const BACKSTAGE_DOUBLE_GAIN: i32 = 2;

/// Daily quality gain for backstage passes inside the 5-day window.
const BACKSTAGE_TRIPLE_GAIN: i32 = 3;

/// Clamp a quality value into the valid range for non-legendary items.
pub fn clamp_quality(value: i32) -> i32 {
    value.clamp(QUALITY_MIN, QUALITY_MAX)
}

/// The daily rate at which quality changes for ordinary-style rules.
///
/// Evaluated after the day's `sell_in` decrement: 1 while the sell-by date
/// has not passed (`sell_in >= 0`), 2 once it has.
pub const fn degradation_factor(sell_in: i32) -> i32 {
    if sell_in >= 0 { 1 } else { 2 }
}

/// Advance a single item by one day according to its category rule.
///
/// Mutates `sell_in` and `quality` in place. This is a total function:
/// every rule is self-clamping and no input can make it fail.
pub fn apply_daily_rule(item: &mut Item) {
    match item.category() {
        // Sulfuras is exempt from the day cycle entirely: no sell_in
        // decrement, quality frozen.
        ItemCategory::Sulfuras => {}
        ItemCategory::AgedBrie => update_aged_brie(item),
        ItemCategory::BackstagePasses => update_backstage_passes(item),
        ItemCategory::Conjured => update_conjured(item),
        ItemCategory::Ordinary => update_ordinary(item),
    }
}

/// Ordinary rule: quality drops by the degradation factor each day.
fn update_ordinary(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
    let factor = degradation_factor(item.sell_in);
    item.quality = clamp_quality(item.quality.saturating_sub(factor));
}

/// Aged Brie rule: quality rises at the rate ordinary stock falls.
fn update_aged_brie(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
    let factor = degradation_factor(item.sell_in);
    item.quality = clamp_quality(item.quality.saturating_add(factor));
}

/// Conjured rule: quality drops at twice the ordinary rate.
fn update_conjured(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
    let factor = degradation_factor(item.sell_in).saturating_mul(2);
    item.quality = clamp_quality(item.quality.saturating_sub(factor));
}

/// Backstage pass rule, evaluated in this exact order after the decrement:
///
/// 1. Concert passed (`sell_in < 0`): quality drops to 0.
/// 2. Fewer than 5 days left: quality rises by 3.
/// 3. Fewer than 10 days left: quality rises by 2.
/// 4. Otherwise: quality rises by 1.
fn update_backstage_passes(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);

    if item.sell_in < 0 {
        item.quality = QUALITY_MIN;
        return;
    }

    if item.sell_in < BACKSTAGE_TRIPLE_WINDOW {
        item.quality = clamp_quality(item.quality.saturating_add(BACKSTAGE_TRIPLE_GAIN));
        return;
    }

    if item.sell_in < BACKSTAGE_DOUBLE_WINDOW {
        item.quality = clamp_quality(item.quality.saturating_add(BACKSTAGE_DOUBLE_GAIN));
        return;
    }

    item.quality = clamp_quality(item.quality.saturating_add(BACKSTAGE_BASE_GAIN));
}
