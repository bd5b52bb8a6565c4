// File: crates/chart-core/src/ticks.rs
// Summary: Tick generators: nice linear ticks, percent-formatted value ticks and calendar-month time ticks.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, LocalResult, Months, NaiveDate, Offset, TimeZone};

/// One axis tick. Minor ticks carry no label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    pub minor: bool,
}

impl Tick {
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into(), minor: false }
    }

    pub fn minor(value: f64) -> Self {
        Self { value, label: String::new(), minor: true }
    }
}

/// Stateless tick policy over a `[min, max]` axis range.
pub trait Ticker {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick>;
}

/// Evenly spaced ticks with a 1/2/5 x 10^k step, minor ticks halfway between.
#[derive(Clone, Copy, Debug)]
pub struct DefaultTicks {
    /// Upper bound on the number of major intervals.
    pub target: usize,
}

impl Default for DefaultTicks {
    fn default() -> Self {
        Self { target: 7 }
    }
}

/// Smallest 1/2/5 x 10^k step that splits `span` into at most `target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let target = target.max(1) as f64;
    let raw = span / target;
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 5.0] {
        let step = m * mag;
        if span / step <= target {
            return step;
        }
    }
    10.0 * mag
}

impl Ticker for DefaultTicks {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Vec::new();
        }
        let step = nice_step(max - min, self.target);
        let decimals = (-step.log10().floor()).max(0.0) as usize;
        let eps = 1e-9;
        let first = (min / step - eps).ceil() as i64;
        let last = (max / step + eps).floor() as i64;

        let mut ticks: Vec<Tick> = (first..=last)
            .map(|k| {
                let v = k as f64 * step;
                Tick::major(v, format!("{v:.decimals$}"))
            })
            .collect();

        let half = step / 2.0;
        for i in (2 * first - 1)..=(2 * last + 1) {
            if i % 2 == 0 {
                continue;
            }
            let v = i as f64 * half;
            if v >= min && v <= max {
                ticks.push(Tick::minor(v));
            }
        }
        ticks
    }
}

/// Default tick positions relabelled as whole percentages (`"-20%"`).
#[derive(Clone, Copy, Debug, Default)]
pub struct PercentTicks {
    pub inner: DefaultTicks,
}

impl Ticker for PercentTicks {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        let mut ticks = self.inner.ticks(min, max);
        for t in ticks.iter_mut().filter(|t| !t.label.is_empty()) {
            t.label = format!("{:.0}%", t.value);
        }
        ticks
    }
}

/// One tick per calendar-month start inside the range, in `zone`.
/// Values are Unix seconds.
#[derive(Clone, Debug)]
pub struct MonthTicks<Tz: TimeZone> {
    pub zone: Tz,
    /// chrono format for labels; `"%b %Y"` gives `"Jan 2024"`.
    pub format: String,
    /// Localized month abbreviations, January first. Used instead of
    /// `format` when exactly 12 are given.
    pub month_names: Option<Vec<String>>,
}

impl<Tz: TimeZone> MonthTicks<Tz> {
    pub fn new(zone: Tz) -> Self {
        Self { zone, format: "%b %Y".to_string(), month_names: None }
    }

    pub fn with_month_names(mut self, names: Vec<String>) -> Self {
        self.month_names = Some(names);
        self
    }

    /// First instant of the month in the zone. When local midnight is skipped
    /// by a clock change, the pre-transition offset is applied, which lands on
    /// the first instant after the gap.
    fn month_start(&self, first: NaiveDate) -> Option<DateTime<Tz>> {
        let midnight = first.and_hms_opt(0, 0, 0)?;
        match self.zone.from_local_datetime(&midnight) {
            LocalResult::None => {
                let before = self.zone.from_local_datetime(&(midnight - Duration::hours(3))).earliest()?;
                let offset = Duration::seconds(i64::from(before.offset().fix().local_minus_utc()));
                Some(self.zone.from_utc_datetime(&(midnight - offset)))
            }
            local => local.earliest(),
        }
    }
}

impl<Tz> MonthTicks<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn label(&self, at: &DateTime<Tz>) -> String {
        match &self.month_names {
            Some(names) if names.len() == 12 => {
                format!("{} {}", names[at.month0() as usize], at.year())
            }
            _ => at.format(&self.format).to_string(),
        }
    }
}

impl<Tz> Ticker for MonthTicks<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        if !min.is_finite() || !max.is_finite() {
            return Vec::new();
        }
        let (min_ts, max_ts) = (min as i64, max as i64);
        let Some(min_dt) = DateTime::from_timestamp(min_ts, 0) else {
            return Vec::new();
        };
        let local = min_dt.with_timezone(&self.zone);
        let Some(mut month) = NaiveDate::from_ymd_opt(local.year(), local.month(), 1) else {
            return Vec::new();
        };

        let mut ticks = Vec::new();
        loop {
            if let Some(at) = self.month_start(month) {
                let ts = at.timestamp();
                if ts > max_ts {
                    break;
                }
                if ts >= min_ts {
                    ticks.push(Tick::major(ts as f64, self.label(&at)));
                }
            }
            match month.checked_add_months(Months::new(1)) {
                Some(next) => month = next,
                None => break,
            }
        }
        ticks
    }
}
