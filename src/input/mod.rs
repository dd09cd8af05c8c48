//! Resolves command line flags and the optional defaults file into a
//! [`Policy`] and the remaining per-run values.

use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::accrual::{self, AllotmentError, CapRule, Policy};
use crate::time::{Date, WeekStart};

mod config;
pub use config::*;

/// The selectable accrual strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccrualModel {
    /// Every remaining month credits one twelfth of the allotment.
    #[default]
    Month,
    /// Accrual follows the elapsed fraction of the current month.
    Elapsed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown accrual model \"{0}\", expected \"month\" or \"elapsed\"")]
pub struct UnknownModel(String);

impl FromStr for AccrualModel {
    type Err = UnknownModel;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "month" => Ok(Self::Month),
            "elapsed" => Ok(Self::Elapsed),
            _ => Err(UnknownModel(string.to_string())),
        }
    }
}

/// Flag values exactly as they came from the command line, before any
/// defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub annual_days: Option<u32>,
    pub annual_hours: Option<u32>,
    pub max_accum_days: Option<u32>,
    pub current_hours: Option<f64>,
    pub extra_days: Option<f64>,
    pub monday_start: bool,
    pub tiered_accum: bool,
    pub strict_allotment: bool,
    pub model: Option<AccrualModel>,
    pub date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("--annual-days and --annual-hours are mutually exclusive")]
    MutuallyExclusiveAllotment,
    #[error("annual allotment must be positive")]
    ZeroAllotment,
    #[error(transparent)]
    Allotment(#[from] AllotmentError),
}

/// Everything the binary needs for one run, resolved from flags and the
/// defaults file.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub policy: Policy,
    pub model: AccrualModel,
    /// Prompted for interactively when absent.
    pub current_hours: Option<f64>,
    /// Only validated against the schedulable bound when it was given.
    pub extra_days: Option<f64>,
    pub today: Date,
}

impl Options {
    /// Merges flags over file defaults over built-in defaults.
    ///
    /// The allotment is taken from `--annual-hours` (via the payroll table in
    /// strict mode, via rounded division otherwise) or `--annual-days`, which
    /// are mutually exclusive. An explicit `--max-accum` beats the tiered
    /// rule, since it is the more specific request.
    pub fn resolve(args: Args, defaults: FileConfig) -> Result<Self, OptionsError> {
        if args.annual_days.is_some() && args.annual_hours.is_some() {
            return Err(OptionsError::MutuallyExclusiveAllotment);
        }

        let strict = args.strict_allotment || defaults.strict_allotment.unwrap_or(false);
        let work_day_hours = defaults.work_day_hours.unwrap_or(accrual::WORK_DAY_HOURS);

        let annual_days = if let Some(hours) = args.annual_hours {
            if strict {
                accrual::days_for_hours(hours)?
            } else {
                (hours as f64 / work_day_hours).round() as u32
            }
        } else {
            let days = args
                .annual_days
                .or(defaults.annual_days)
                .unwrap_or(accrual::DEFAULT_ANNUAL_DAYS);
            if strict {
                accrual::validate_days(days)?;
            }
            days
        };

        if annual_days == 0 {
            return Err(OptionsError::ZeroAllotment);
        }

        let tiered = args.tiered_accum || defaults.tiered_accum.unwrap_or(false);
        let cap = match (args.max_accum_days, tiered, defaults.max_accum_days) {
            (Some(cap), _, _) => CapRule::Fixed(cap),
            (None, true, _) => CapRule::Tiered,
            (None, false, Some(cap)) => CapRule::Fixed(cap),
            (None, false, None) => CapRule::default(),
        };

        let week_start = if args.monday_start {
            WeekStart::Monday
        } else {
            defaults.week_start.unwrap_or_default()
        };

        Ok(Self {
            policy: Policy {
                annual_days,
                cap,
                week_start,
                work_day_hours,
            },
            model: args.model.or(defaults.model).unwrap_or_default(),
            current_hours: args.current_hours,
            extra_days: args.extra_days,
            today: args.date.unwrap_or_else(Date::today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    fn args_with_date() -> Args {
        Args {
            date: Some(date!(2024:12:15)),
            ..Args::default()
        }
    }

    #[test]
    fn test_defaults() {
        let options =
            Options::resolve(args_with_date(), FileConfig::default()).expect("should resolve");

        assert_eq!(options.policy, Policy::default());
        assert_eq!(options.model, AccrualModel::Month);
        assert_eq!(options.current_hours, None);
        assert_eq!(options.extra_days, None);
        assert_eq!(options.today, date!(2024:12:15));
    }

    #[test]
    fn test_mutually_exclusive_allotment_flags() {
        let args = Args {
            annual_days: Some(24),
            annual_hours: Some(202),
            ..args_with_date()
        };

        assert_eq!(
            Options::resolve(args, FileConfig::default()),
            Err(OptionsError::MutuallyExclusiveAllotment)
        );
    }

    #[test]
    fn test_annual_hours_rounded_conversion() {
        // 202 / 8.4 = 24.05 -> 24 days
        let args = Args {
            annual_hours: Some(202),
            ..args_with_date()
        };

        let options = Options::resolve(args, FileConfig::default()).expect("should resolve");
        assert_eq!(options.policy.annual_days, 24);
    }

    #[test]
    fn test_annual_hours_strict_lookup() {
        let args = Args {
            annual_hours: Some(202),
            strict_allotment: true,
            ..args_with_date()
        };
        let options = Options::resolve(args, FileConfig::default()).expect("should resolve");
        assert_eq!(options.policy.annual_days, 24);

        // 201.6 rounds to 202 in the table; 201 is not a payroll figure
        let args = Args {
            annual_hours: Some(201),
            strict_allotment: true,
            ..args_with_date()
        };
        assert_eq!(
            Options::resolve(args, FileConfig::default()),
            Err(OptionsError::Allotment(AllotmentError::UnknownHours(201)))
        );
    }

    #[test]
    fn test_strict_day_range() {
        let args = Args {
            annual_days: Some(30),
            strict_allotment: true,
            ..args_with_date()
        };

        assert_eq!(
            Options::resolve(args, FileConfig::default()),
            Err(OptionsError::Allotment(AllotmentError::DaysOutOfRange(30)))
        );
    }

    #[test]
    fn test_zero_allotment_rejected() {
        let args = Args {
            annual_days: Some(0),
            ..args_with_date()
        };

        assert_eq!(
            Options::resolve(args, FileConfig::default()),
            Err(OptionsError::ZeroAllotment)
        );
    }

    #[test]
    fn test_flags_win_over_file_defaults() {
        let defaults = FileConfig {
            annual_days: Some(15),
            max_accum_days: Some(48),
            week_start: Some(WeekStart::Monday),
            model: Some(AccrualModel::Elapsed),
            ..FileConfig::default()
        };

        let args = Args {
            annual_days: Some(24),
            max_accum_days: Some(36),
            model: Some(AccrualModel::Month),
            ..args_with_date()
        };

        let options = Options::resolve(args, defaults).expect("should resolve");
        assert_eq!(options.policy.annual_days, 24);
        assert_eq!(options.policy.cap, CapRule::Fixed(36));
        assert_eq!(options.policy.week_start, WeekStart::Monday);
        assert_eq!(options.model, AccrualModel::Month);
    }

    #[test]
    fn test_explicit_cap_beats_tiered_rule() {
        let args = Args {
            max_accum_days: Some(40),
            tiered_accum: true,
            ..args_with_date()
        };

        let options = Options::resolve(args, FileConfig::default()).expect("should resolve");
        assert_eq!(options.policy.cap, CapRule::Fixed(40));

        let args = Args {
            tiered_accum: true,
            ..args_with_date()
        };
        let options = Options::resolve(args, FileConfig::default()).expect("should resolve");
        assert_eq!(options.policy.cap, CapRule::Tiered);
    }

    #[test]
    fn test_work_day_hours_from_config() {
        let defaults = FileConfig {
            work_day_hours: Some(accrual::PAYROLL_WORK_DAY_HOURS),
            ..FileConfig::default()
        };

        let options = Options::resolve(args_with_date(), defaults).expect("should resolve");
        assert_eq!(
            options.policy.work_day_hours,
            accrual::PAYROLL_WORK_DAY_HOURS
        );
    }
}
