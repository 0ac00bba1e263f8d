//! Shift codes and their crediting rules.
//!
//! Every shift token a timesheet can carry is classified into a closed
//! [`ShiftCode`] variant, and every variant owns exactly one [`ShiftRule`]
//! row. The aggregator never inspects tokens directly; it only reads the rule.
//!
//! | Code          | Tokens         | Duty | Sunday | Saturday |
//! |---------------|----------------|------|--------|----------|
//! | First         | `1`            | no   | 8      | -        |
//! | FirstSecond   | `1/2`          | no   | worked | -        |
//! | Second        | `2`            | no   | -      | -        |
//! | SecondThird   | `2/3`          | no   | 10     | 6        |
//! | Third         | `3`            | no   | 2      | 6        |
//! | RoundTheClock | `24`, `1/2/3`  | no   | 18     | 6        |
//! | AnnualLeave   | `ГО` (any case)| no   | -      | -        |
//! | SickLeave     | `СЛ` (any case)| no   | -      | -        |
//! | Duty          | `д`, `Д`       | yes  | 18     | 6        |
//! | HolidayDuty   | `дпр`, `ДПР`   | yes  | 18     | 6        |
//! | Duty8         | `д8`, `Д8`     | yes  | -      | -        |
//! | Duty16        | `д16`, `Д16`   | yes  | 18     | -        |
//! | Other         | anything else  | no   | -      | -        |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const H2: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
const H6: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
const H8: Decimal = Decimal::from_parts(8, 0, 0, false, 0);
const H10: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
const H16: Decimal = Decimal::from_parts(16, 0, 0, false, 0);
const H18: Decimal = Decimal::from_parts(18, 0, 0, false, 0);

/// A closed classification of shift tokens.
///
/// # Example
///
/// ```
/// use timesheet_payroll::models::ShiftCode;
///
/// assert_eq!(ShiftCode::classify(Some("1/2/3")), ShiftCode::RoundTheClock);
/// assert_eq!(ShiftCode::classify(Some("24")), ShiftCode::RoundTheClock);
/// assert_eq!(ShiftCode::classify(Some("го")), ShiftCode::AnnualLeave);
/// assert!(ShiftCode::classify(Some("Д16")).is_duty());
/// assert_eq!(ShiftCode::classify(None), ShiftCode::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCode {
    /// First (morning) shift.
    First,
    /// First and second shift back to back.
    FirstSecond,
    /// Second (evening) shift.
    Second,
    /// Second and third shift back to back.
    SecondThird,
    /// Third (night) shift.
    Third,
    /// All three shifts, 24 hours.
    RoundTheClock,
    /// Annual leave.
    AnnualLeave,
    /// Sick leave.
    SickLeave,
    /// Standby duty.
    Duty,
    /// Standby duty on a public holiday.
    HolidayDuty,
    /// Eight-hour standby duty.
    Duty8,
    /// Sixteen-hour standby duty.
    Duty16,
    /// Any token without a rule, or no token at all.
    Other,
}

impl ShiftCode {
    /// Classifies a (repaired) shift token.
    ///
    /// Tokens are matched verbatim except annual and sick leave, which match
    /// in any letter case.
    pub fn classify(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return ShiftCode::Other;
        };

        match token {
            "1" => ShiftCode::First,
            "1/2" => ShiftCode::FirstSecond,
            "2" => ShiftCode::Second,
            "2/3" => ShiftCode::SecondThird,
            "3" => ShiftCode::Third,
            "24" | "1/2/3" => ShiftCode::RoundTheClock,
            "д" | "Д" => ShiftCode::Duty,
            "дпр" | "ДПР" => ShiftCode::HolidayDuty,
            "д8" | "Д8" => ShiftCode::Duty8,
            "д16" | "Д16" => ShiftCode::Duty16,
            other => match other.to_lowercase().as_str() {
                "го" => ShiftCode::AnnualLeave,
                "сл" => ShiftCode::SickLeave,
                _ => ShiftCode::Other,
            },
        }
    }

    /// Returns the crediting rule for this code.
    pub fn rule(self) -> &'static ShiftRule {
        match self {
            ShiftCode::First => &FIRST,
            ShiftCode::FirstSecond => &FIRST_SECOND,
            ShiftCode::Second => &SECOND,
            ShiftCode::SecondThird => &SECOND_THIRD,
            ShiftCode::Third => &THIRD,
            ShiftCode::RoundTheClock => &ROUND_THE_CLOCK,
            ShiftCode::AnnualLeave | ShiftCode::SickLeave => &LEAVE,
            ShiftCode::Duty => &DUTY,
            ShiftCode::HolidayDuty => &HOLIDAY_DUTY,
            ShiftCode::Duty8 => &DUTY_8,
            ShiftCode::Duty16 => &DUTY_16,
            ShiftCode::Other => &OTHER,
        }
    }

    /// Returns true for standby/duty codes, whose hours stay out of the
    /// worked-hours total and overtime.
    pub fn is_duty(self) -> bool {
        self.rule().duty
    }
}

impl std::fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ShiftCode::First => "1",
            ShiftCode::FirstSecond => "1/2",
            ShiftCode::Second => "2",
            ShiftCode::SecondThird => "2/3",
            ShiftCode::Third => "3",
            ShiftCode::RoundTheClock => "1/2/3",
            ShiftCode::AnnualLeave => "ГО",
            ShiftCode::SickLeave => "СЛ",
            ShiftCode::Duty => "Д",
            ShiftCode::HolidayDuty => "ДПР",
            ShiftCode::Duty8 => "Д8",
            ShiftCode::Duty16 => "Д16",
            ShiftCode::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// How many hours a rule credits to one accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credit {
    /// Nothing.
    None,
    /// A fixed number of hours.
    Fixed(Decimal),
    /// The hours actually worked that day.
    Worked,
    /// The hours worked beyond the given amount, if any.
    WorkedOver(Decimal),
    /// The part of the day's hours that fell past the monthly threshold.
    OvertimePortion,
}

impl Credit {
    /// Resolves the credit for a day.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_payroll::models::Credit;
    /// use rust_decimal::Decimal;
    ///
    /// let worked = Decimal::from(12);
    /// let overtime = Decimal::from(3);
    /// assert_eq!(Credit::Fixed(Decimal::from(8)).hours(worked, overtime), Decimal::from(8));
    /// assert_eq!(Credit::Worked.hours(worked, overtime), worked);
    /// assert_eq!(Credit::WorkedOver(Decimal::from(8)).hours(worked, overtime), Decimal::from(4));
    /// assert_eq!(Credit::OvertimePortion.hours(worked, overtime), overtime);
    /// assert_eq!(Credit::None.hours(worked, overtime), Decimal::ZERO);
    /// ```
    pub fn hours(self, worked: Decimal, overtime_today: Decimal) -> Decimal {
        match self {
            Credit::None => Decimal::ZERO,
            Credit::Fixed(hours) => hours,
            Credit::Worked => worked,
            Credit::WorkedOver(base) => worked.saturating_sub(base).max(Decimal::ZERO),
            Credit::OvertimePortion => overtime_today,
        }
    }

    /// Returns true if the credit can never add anything.
    pub fn is_none(self) -> bool {
        self == Credit::None
    }
}

/// Credits to the per-shift accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketCredits {
    /// First shift hours.
    pub first_shift: Credit,
    /// Second and third shift hours combined.
    pub second_third_shift: Credit,
    /// Third shift hours.
    pub third_shift: Credit,
    /// Duty hours on public holidays.
    pub holidays: Credit,
    /// Duty hours.
    pub duty_hours: Credit,
    /// Night-duty hours per duty.
    pub hours_per_duty: Credit,
}

/// The complete crediting rule of one shift code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRule {
    /// Duty hours are excluded from worked hours and overtime.
    pub duty: bool,
    /// Sunday work credit.
    pub sunday: Credit,
    /// Saturday credit, booked as Sunday work.
    pub saturday: Credit,
    /// Per-shift accumulator credits, applied on every day.
    pub buckets: BucketCredits,
    /// Overtime credit on a Sunday with overtime.
    pub overtime_sunday: Credit,
    /// Overtime credit on a Saturday with overtime.
    pub overtime_saturday: Credit,
}

const NO_BUCKETS: BucketCredits = BucketCredits {
    first_shift: Credit::None,
    second_third_shift: Credit::None,
    third_shift: Credit::None,
    holidays: Credit::None,
    duty_hours: Credit::None,
    hours_per_duty: Credit::None,
};

const OTHER: ShiftRule = ShiftRule {
    duty: false,
    sunday: Credit::None,
    saturday: Credit::None,
    buckets: NO_BUCKETS,
    overtime_sunday: Credit::None,
    overtime_saturday: Credit::None,
};

const FIRST: ShiftRule = ShiftRule {
    sunday: Credit::Fixed(H8),
    buckets: BucketCredits {
        first_shift: Credit::Fixed(H8),
        ..NO_BUCKETS
    },
    overtime_sunday: Credit::Fixed(H8),
    overtime_saturday: Credit::Fixed(H8),
    ..OTHER
};

const FIRST_SECOND: ShiftRule = ShiftRule {
    sunday: Credit::Worked,
    buckets: BucketCredits {
        first_shift: Credit::Fixed(H8),
        second_third_shift: Credit::WorkedOver(H8),
        ..NO_BUCKETS
    },
    overtime_sunday: Credit::OvertimePortion,
    overtime_saturday: Credit::OvertimePortion,
    ..OTHER
};

const SECOND: ShiftRule = ShiftRule {
    buckets: BucketCredits {
        second_third_shift: Credit::Fixed(H8),
        ..NO_BUCKETS
    },
    overtime_sunday: Credit::Fixed(H8),
    overtime_saturday: Credit::Fixed(H8),
    ..OTHER
};

const SECOND_THIRD: ShiftRule = ShiftRule {
    sunday: Credit::Fixed(H10),
    saturday: Credit::Fixed(H6),
    buckets: BucketCredits {
        second_third_shift: Credit::Worked,
        third_shift: Credit::Fixed(H8),
        ..NO_BUCKETS
    },
    overtime_sunday: Credit::Fixed(H10),
    overtime_saturday: Credit::Fixed(H6),
    ..OTHER
};

const THIRD: ShiftRule = ShiftRule {
    sunday: Credit::Fixed(H2),
    saturday: Credit::Fixed(H6),
    buckets: BucketCredits {
        second_third_shift: Credit::Fixed(H8),
        third_shift: Credit::Fixed(H8),
        ..NO_BUCKETS
    },
    overtime_sunday: Credit::Fixed(H2),
    overtime_saturday: Credit::Fixed(H6),
    ..OTHER
};

const ROUND_THE_CLOCK: ShiftRule = ShiftRule {
    sunday: Credit::Fixed(H18),
    saturday: Credit::Fixed(H6),
    buckets: BucketCredits {
        first_shift: Credit::Fixed(H8),
        second_third_shift: Credit::Fixed(H16),
        third_shift: Credit::Fixed(H8),
        ..NO_BUCKETS
    },
    overtime_sunday: Credit::Fixed(H18),
    overtime_saturday: Credit::Fixed(H6),
    ..OTHER
};

const LEAVE: ShiftRule = ShiftRule {
    buckets: BucketCredits {
        first_shift: Credit::Fixed(H8),
        ..NO_BUCKETS
    },
    ..OTHER
};

// The overtime columns of the duty rules are unreachable (duty days never
// accrue overtime) but are kept so each row is total.
const DUTY: ShiftRule = ShiftRule {
    duty: true,
    sunday: Credit::Fixed(H18),
    saturday: Credit::Fixed(H6),
    buckets: BucketCredits {
        duty_hours: Credit::Worked,
        hours_per_duty: Credit::Fixed(H8),
        ..NO_BUCKETS
    },
    overtime_sunday: Credit::Fixed(H18),
    overtime_saturday: Credit::Fixed(H6),
};

const HOLIDAY_DUTY: ShiftRule = ShiftRule {
    buckets: BucketCredits {
        holidays: Credit::Worked,
        hours_per_duty: Credit::Fixed(H8),
        ..NO_BUCKETS
    },
    ..DUTY
};

const DUTY_8: ShiftRule = ShiftRule {
    duty: true,
    buckets: DUTY.buckets,
    ..OTHER
};

const DUTY_16: ShiftRule = ShiftRule {
    duty: true,
    sunday: Credit::Fixed(H18),
    buckets: DUTY.buckets,
    ..OTHER
};
