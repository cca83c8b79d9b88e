//! Suggested stay window shown on listing cards.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, Utc};
use rand::Rng;

/// Korea Standard Time, the calendar stay dates are rendered in.
const REFERENCE_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Today's date in the reference calendar.
pub fn reference_today() -> NaiveDate {
    reference_date(Utc::now())
}

fn reference_date(now: DateTime<Utc>) -> NaiveDate {
    let offset = FixedOffset::east_opt(REFERENCE_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    now.with_timezone(&offset).date_naive()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayWindow {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayWindow {
    /// Check-in 1-30 days after `today`, staying 1-7 nights.
    pub fn generate<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Self {
        let check_in = today + Duration::days(rng.gen_range(1..=30));
        let check_out = check_in + Duration::days(rng.gen_range(1..=7));
        Self {
            check_in,
            check_out,
        }
    }

    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(0) as u32
    }

    /// "3월 5일 ~ 8일" within one month, "3월 29일 ~ 4월 2일" across months.
    pub fn display(&self) -> String {
        let same_month = self.check_in.year() == self.check_out.year()
            && self.check_in.month() == self.check_out.month();

        if same_month {
            format!(
                "{}월 {}일 ~ {}일",
                self.check_in.month(),
                self.check_in.day(),
                self.check_out.day()
            )
        } else {
            format!(
                "{}월 {}일 ~ {}월 {}일",
                self.check_in.month(),
                self.check_in.day(),
                self.check_out.month(),
                self.check_out.day()
            )
        }
    }
}
