//! Display formatting for KPI values and deltas.
//!
//! Pure functions so the panel's visible contract (zero defaults, `+` prefix
//! on non-negative deltas, per-metric reference periods) is testable without
//! rendering anything.

use api::KpiSnapshot;

/// Visual direction of a delta. Non-negative counts as positive, so a flat
/// `+0%` still renders in the positive style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    pub fn class(self) -> &'static str {
        match self {
            Trend::Positive => "kpi-delta--positive",
            Trend::Negative => "kpi-delta--negative",
        }
    }
}

pub fn delta_trend(delta: f64) -> Trend {
    if delta >= 0.0 {
        Trend::Positive
    } else {
        Trend::Negative
    }
}

// Whole numbers drop the fractional part: 40.0 -> "40", 12.5 -> "12.5".
// f64 Display already prints the shortest form, so no integer cast that
// would truncate out-of-range magnitudes.
fn format_number(value: f64) -> String {
    // Negative zero compares equal to zero but would print "-0".
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

pub fn format_count(value: i64) -> String {
    value.to_string()
}

pub fn format_rate(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// `+5% this week` for non-negative deltas, `-3% from yesterday` for
/// negative ones (native sign only, never a double prefix).
pub fn format_delta(delta: f64, period: &str) -> String {
    if delta >= 0.0 {
        format!("+{}% {}", format_number(delta), period)
    } else {
        format!("{}% {}", format_number(delta), period)
    }
}

/// One rendered card of the KPI panel.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    /// Stable identifier used in `data-testid` hooks.
    pub slug: &'static str,
    pub title: &'static str,
    pub value: String,
    pub delta: f64,
    pub period: &'static str,
}

impl KpiCard {
    pub fn delta_label(&self) -> String {
        format_delta(self.delta, self.period)
    }

    pub fn trend(&self) -> Trend {
        delta_trend(self.delta)
    }
}

/// The four dashboard cards, in their fixed display order.
pub fn snapshot_cards(snapshot: &KpiSnapshot) -> [KpiCard; 4] {
    [
        KpiCard {
            slug: "applicants",
            title: "Today's Applicants",
            value: format_count(snapshot.today_applicants),
            delta: snapshot.today_applicants_change,
            period: "from yesterday",
        },
        KpiCard {
            slug: "interview-rate",
            title: "Interview Rate",
            value: format_rate(snapshot.interview_rate),
            delta: snapshot.interview_rate_change,
            period: "this week",
        },
        KpiCard {
            slug: "booking-rate",
            title: "Booking Rate",
            value: format_rate(snapshot.booking_rate),
            delta: snapshot.booking_rate_change,
            period: "this week",
        },
        KpiCard {
            slug: "offer-rate",
            title: "Offer Rate",
            value: format_rate(snapshot.offer_rate),
            delta: snapshot.offer_rate_change,
            period: "this month",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_trim_whole_numbers() {
        assert_eq!(format_rate(40.0), "40%");
        assert_eq!(format_rate(0.0), "0%");
        assert_eq!(format_rate(12.5), "12.5%");
    }

    #[test]
    fn values_beyond_i64_range_keep_their_digits() {
        assert_eq!(format_rate(1e19), "10000000000000000000%");
        assert_eq!(format_delta(1e19, "this week"), "+10000000000000000000% this week");
    }

    #[test]
    fn negative_zero_renders_as_plus_zero() {
        assert_eq!(format_delta(-0.0, "this week"), "+0% this week");
        assert_eq!(format_rate(-0.0), "0%");
    }

    #[test]
    fn non_negative_deltas_get_a_plus_prefix_and_positive_trend() {
        assert_eq!(format_delta(5.0, "this week"), "+5% this week");
        assert_eq!(format_delta(0.0, "this week"), "+0% this week");
        assert_eq!(delta_trend(5.0), Trend::Positive);
        assert_eq!(delta_trend(0.0), Trend::Positive);
    }

    #[test]
    fn negative_deltas_keep_the_native_sign_only() {
        assert_eq!(format_delta(-3.0, "from yesterday"), "-3% from yesterday");
        assert_eq!(format_delta(-0.5, "this month"), "-0.5% this month");
        assert_eq!(delta_trend(-3.0), Trend::Negative);
    }

    #[test]
    fn default_snapshot_renders_zeros() {
        let cards = snapshot_cards(&KpiSnapshot::default());
        assert_eq!(cards[0].value, "0");
        for card in &cards[1..] {
            assert_eq!(card.value, "0%");
        }
        for card in &cards {
            assert!(card.delta_label().starts_with("+0%"));
            assert_eq!(card.trend(), Trend::Positive);
        }
    }

    #[test]
    fn cards_keep_fixed_order_and_periods() {
        let cards = snapshot_cards(&KpiSnapshot::default());
        let slugs: Vec<_> = cards.iter().map(|c| c.slug).collect();
        assert_eq!(
            slugs,
            ["applicants", "interview-rate", "booking-rate", "offer-rate"]
        );
        let periods: Vec<_> = cards.iter().map(|c| c.period).collect();
        assert_eq!(
            periods,
            ["from yesterday", "this week", "this week", "this month"]
        );
    }

    #[test]
    fn worked_snapshot_scenario() {
        let snapshot = KpiSnapshot {
            today_applicants: 12,
            today_applicants_change: -3.0,
            interview_rate: 40.0,
            interview_rate_change: 5.0,
            booking_rate: 0.0,
            booking_rate_change: 0.0,
            offer_rate: 10.0,
            offer_rate_change: 10.0,
        };
        let cards = snapshot_cards(&snapshot);

        assert_eq!(cards[0].value, "12");
        assert_eq!(cards[0].delta_label(), "-3% from yesterday");
        assert_eq!(cards[0].trend(), Trend::Negative);

        assert_eq!(cards[1].value, "40%");
        assert_eq!(cards[1].delta_label(), "+5% this week");
        assert_eq!(cards[1].trend(), Trend::Positive);

        assert_eq!(cards[2].value, "0%");
        assert_eq!(cards[2].delta_label(), "+0% this week");

        assert_eq!(cards[3].value, "10%");
        assert_eq!(cards[3].delta_label(), "+10% this month");
    }
}
