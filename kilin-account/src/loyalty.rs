use serde::Serialize;

use kilin_catalog::{points_for, Catalog, Reward};

/// Points needed for the next reward tier.
pub const NEXT_REWARD_POINTS: i64 = 500;

/// Loyalty summary derived from what a user has spent. Nothing here is
/// persisted; it is recomputed from the booking history on every read.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyAccount {
    pub points: i64,
    pub bookings_counted: usize,
    pub next_reward_points: i64,
    pub points_to_next_reward: i64,
    /// 0 to 100.
    pub progress_percent: f64,
    pub redeemable: Vec<&'static str>,
}

impl LoyaltyAccount {
    /// Builds the summary from the total price of each booking.
    pub fn from_spend(catalog: &Catalog, booking_totals: impl IntoIterator<Item = i64>) -> Self {
        let mut points = 0;
        let mut bookings_counted = 0;
        for total in booking_totals {
            points += points_for(total);
            bookings_counted += 1;
        }

        let progress_percent = (points as f64 / NEXT_REWARD_POINTS as f64 * 100.0).min(100.0);
        let redeemable = catalog
            .rewards
            .iter()
            .filter(|r| i64::from(r.points) <= points)
            .map(|r| r.id)
            .collect();

        Self {
            points,
            bookings_counted,
            next_reward_points: NEXT_REWARD_POINTS,
            points_to_next_reward: (NEXT_REWARD_POINTS - points).max(0),
            progress_percent,
            redeemable,
        }
    }

    pub fn can_redeem(&self, reward: &Reward) -> bool {
        i64::from(reward.points) <= self.points
    }

    /// Points still missing for `reward`, 0 when it is already affordable.
    pub fn points_needed(&self, reward: &Reward) -> i64 {
        (i64::from(reward.points) - self.points).max(0)
    }
}
