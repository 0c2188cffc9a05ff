//! Lane and player pricing.
//!
//! Form fields arrive as free text, so every entry point here parses leniently:
//! anything that does not start with a number counts as zero. Completeness is
//! enforced by [`crate::validation`], not by the price calculation.

/// Price of a single lane, in whole kronor.
pub const LANE_PRICE: i64 = 100;
/// Price per player, in whole kronor.
pub const PERSON_PRICE: i64 = 120;

/// Parse the leading base-10 integer of `raw`, falling back to `0`.
///
/// Mirrors the lenient browser behaviour the form relies on: surrounding
/// whitespace is ignored, an optional sign is honoured and parsing stops at the
/// first non-digit (`"3 lanes"` is `3`). Input without leading digits is `0`.
/// Values beyond the `i64` range saturate.
///
/// Note that this hides malformed input instead of rejecting it, so a
/// non-numeric lane count prices as zero.
#[must_use]
pub fn parse_or_zero(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if negative { value.saturating_neg() } else { value }
}

/// Total price for the given numeric lane and player counts.
#[must_use]
pub const fn price_for(lanes: i64, people: i64) -> i64 {
    lanes
        .saturating_mul(LANE_PRICE)
        .saturating_add(people.saturating_mul(PERSON_PRICE))
}

/// Total price for raw lane and player field values.
#[must_use]
pub fn price(lanes: &str, people: &str) -> i64 {
    price_for(parse_or_zero(lanes), parse_or_zero(people))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_lane_two_players_costs_340() {
        assert_eq!(price("1", "2"), 340);
        assert_eq!(price_for(1, 2), 340);
    }

    #[test]
    fn price_is_linear_in_lanes_and_players() {
        for lanes in 0..6 {
            for people in 0..24 {
                assert_eq!(price_for(lanes, people), 100 * lanes + 120 * people);
            }
        }
    }

    #[test]
    fn parse_or_zero_matches_lenient_integer_parsing() {
        assert_eq!(parse_or_zero("42"), 42);
        assert_eq!(parse_or_zero("  7 "), 7);
        assert_eq!(parse_or_zero("3 lanes"), 3);
        assert_eq!(parse_or_zero("2.9"), 2);
        assert_eq!(parse_or_zero("-4"), -4);
        assert_eq!(parse_or_zero("+5"), 5);
        assert_eq!(parse_or_zero(""), 0);
        assert_eq!(parse_or_zero("abc"), 0);
        assert_eq!(parse_or_zero("-"), 0);
    }

    #[test]
    fn non_numeric_fields_price_as_zero() {
        assert_eq!(price("many", "2"), 240);
        assert_eq!(price("1", "a few"), 100);
        assert_eq!(price("", ""), 0);
    }

    #[test]
    fn huge_inputs_saturate_instead_of_overflowing() {
        assert_eq!(parse_or_zero("99999999999999999999999"), i64::MAX);
        assert_eq!(price_for(i64::MAX, 1), i64::MAX);
    }
}
