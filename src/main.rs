use std::env;
use std::ffi::OsStr;
use std::io::{self, BufRead as _, Write as _};

use anyhow::Context as _;
use log::{error, info};
use seahorse::{App, Context, Flag, FlagType};

use vacation_days::accrual::{self, stats, ProjectionInput};
use vacation_days::input::{AccrualModel, Args, FileConfig, Options};
use vacation_days::report::{AccumulationReport, Report};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [flags]", args[0]))
        .flag(
            Flag::new("annual-days", FlagType::Int)
                .alias("d")
                .description("Annual vacation days (default: 24). Mutually exclusive with --annual-hours."),
        )
        .flag(
            Flag::new("annual-hours", FlagType::Int)
                .alias("A")
                .description("Annual vacation hours. Mutually exclusive with --annual-days."),
        )
        .flag(
            Flag::new("max-accum", FlagType::Int)
                .alias("m")
                .description("Maximum accumulated days (default: 36)."),
        )
        .flag(
            Flag::new("current-hours", FlagType::Float)
                .alias("c")
                .description("Current accumulated vacation hours. Prompted for when absent."),
        )
        .flag(
            Flag::new("vacation-extra", FlagType::Float)
                .alias("v")
                .description("Extra vacation days to consume before year end (X or X.5)."),
        )
        .flag(
            Flag::new("monday-start", FlagType::Bool)
                .alias("M")
                .description("Use Monday as the first working day of the week (default: Sunday)."),
        )
        .flag(
            Flag::new("tiered-accum", FlagType::Bool)
                .description("Derive the accumulation cap from the allotment size."),
        )
        .flag(
            Flag::new("strict-allotment", FlagType::Bool)
                .description("Only accept allotments from the validated payroll table."),
        )
        .flag(
            Flag::new("model", FlagType::String)
                .description("Accrual model: \"month\" (default) or \"elapsed\"."),
        )
        .flag(
            Flag::new("date", FlagType::String)
                .description("Reference date as YYYY-MM-DD instead of today."),
        )
        .flag(
            Flag::new("config", FlagType::String)
                .description("Path to a TOML file with default values."),
        )
        .action(|context: &Context| {
            if let Err(e) = run(context) {
                error!("{:?}", e);
                ::std::process::exit(1);
            }
        });

    app.run(args);
}

mod seahorse_exts {
    use anyhow::Context as _;
    use seahorse::{error::FlagError, Context};

    /// Optional typed flag access: absent flags become `None` instead of an
    /// error, while present-but-malformed values still fail.
    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_int_flag(&self, name: &str) -> Result<Option<isize>, anyhow::Error> {
            match self.context().int_flag(name) {
                Ok(value) => Ok(Some(value)),
                Err(FlagError::NotFound) => Ok(None),
                Err(e) => Err(anyhow::anyhow!(
                    "invalid value for flag \"{}\": {:?}",
                    name,
                    e
                )),
            }
        }

        fn optional_uint_flag(&self, name: &str) -> Result<Option<u32>, anyhow::Error> {
            self.optional_int_flag(name)?
                .map(|value| {
                    u32::try_from(value)
                        .with_context(|| format!("flag \"{}\" cannot be negative", name))
                })
                .transpose()
        }

        fn optional_float_flag(&self, name: &str) -> Result<Option<f64>, anyhow::Error> {
            match self.context().float_flag(name) {
                Ok(value) => Ok(Some(value)),
                Err(FlagError::NotFound) => Ok(None),
                Err(e) => Err(anyhow::anyhow!(
                    "invalid value for flag \"{}\": {:?}",
                    name,
                    e
                )),
            }
        }

        fn optional_string_flag(&self, name: &str) -> Result<Option<String>, anyhow::Error> {
            match self.context().string_flag(name) {
                Ok(value) => Ok(Some(value)),
                Err(FlagError::NotFound) => Ok(None),
                Err(e) => Err(anyhow::anyhow!(
                    "invalid value for flag \"{}\": {:?}",
                    name,
                    e
                )),
            }
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt as _;

fn prompt_current_hours() -> anyhow::Result<f64> {
    print!("Enter current accumulated vacation hours: ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;

    if read == 0 {
        anyhow::bail!("failed to read input: end of input");
    }

    line.trim()
        .parse::<f64>()
        .with_context(|| format!("invalid number format for current hours: \"{}\"", line.trim()))
}

fn parse_args(context: &Context) -> anyhow::Result<Args> {
    Ok(Args {
        annual_days: context.optional_uint_flag("annual-days")?,
        annual_hours: context.optional_uint_flag("annual-hours")?,
        max_accum_days: context.optional_uint_flag("max-accum")?,
        current_hours: context.optional_float_flag("current-hours")?,
        extra_days: context.optional_float_flag("vacation-extra")?,
        monday_start: context.bool_flag("monday-start"),
        tiered_accum: context.bool_flag("tiered-accum"),
        strict_allotment: context.bool_flag("strict-allotment"),
        model: context
            .optional_string_flag("model")?
            .map(|value| value.parse())
            .transpose()?,
        date: context
            .optional_string_flag("date")?
            .map(|value| value.parse())
            .transpose()?,
    })
}

fn run(context: &Context) -> anyhow::Result<()> {
    let defaults = match context.optional_string_flag("config")? {
        Some(path) => FileConfig::from_toml_file(&path)?,
        None => FileConfig::default(),
    };

    let options = Options::resolve(parse_args(context)?, defaults)?;
    info!("projecting from {}", options.today);

    let current_hours = match options.current_hours {
        Some(hours) => hours,
        None => prompt_current_hours()?,
    };

    if let Some(extra) = options.extra_days {
        let schedulable = accrual::working_days_from_previous_month_start(
            options.today.year(),
            options.today.month(),
            options.policy.week_start,
        );
        accrual::validate_extra_days(extra, schedulable)?;
    }

    match options.model {
        AccrualModel::Month => {
            let input = ProjectionInput {
                policy: options.policy,
                current_hours,
                today: options.today,
                extra_days: options.extra_days.unwrap_or(0.0),
            };
            let projection = accrual::project(&input);

            println!(
                "{}",
                Report {
                    input: &input,
                    projection: &projection,
                }
            );
        }
        AccrualModel::Elapsed => {
            let result = stats::accumulate(&options.policy, current_hours, options.today);

            println!(
                "{}",
                AccumulationReport {
                    policy: &options.policy,
                    today: options.today,
                    stats: &result,
                }
            );
        }
    }

    Ok(())
}
