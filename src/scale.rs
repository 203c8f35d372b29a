//! Scales mapping data values onto pixel positions and colors.

use crate::color::{Rgb, interpolate_rgb_basis};
use chrono::{Datelike, NaiveDate};

/// Minimum and maximum of `values`, skipping anything unordered (NaN).
pub fn extent<T, I>(values: I) -> Option<(T, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .filter(|v| v.partial_cmp(v).is_some())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((
                if v < lo { v } else { lo },
                if v > hi { v } else { hi },
            )),
        })
}

fn normalize(value: f64, d0: f64, d1: f64) -> f64 {
    let span = d1 - d0;
    if span == 0.0 {
        0.5
    } else {
        (value - d0) / span
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let t = normalize(value, self.domain.0, self.domain.1);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Continuous scale over calendar dates, linear in days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let days = (
            f64::from(domain.0.num_days_from_ce()),
            f64::from(domain.1.num_days_from_ce()),
        );
        Self {
            domain,
            inner: LinearScale::new(days, range),
        }
    }

    pub fn apply(&self, date: NaiveDate) -> f64 {
        self.inner.apply(f64::from(date.num_days_from_ce()))
    }

    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    /// January 1st of every year divisible by `step` that falls inside the domain.
    pub fn year_ticks(&self, step: i32) -> Vec<NaiveDate> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        (lo.year()..=hi.year())
            .filter(|year| year.rem_euclid(step.max(1)) == 0)
            .filter_map(year_start)
            .filter(|date| *date >= lo && *date <= hi)
            .collect()
    }
}

pub fn year_start(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Discrete scale giving each domain value an equal-width slot of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
    positions: Vec<f64>,
    step: f64,
}

impl<T: PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f64, f64)) -> Self {
        let (r0, r1) = range;
        let reverse = r1 < r0;
        let (start, stop) = if reverse { (r1, r0) } else { (r0, r1) };
        let n = domain.len();
        let step = (stop - start) / n.max(1) as f64;
        let mut positions: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
        if reverse {
            positions.reverse();
        }
        Self {
            domain,
            range,
            positions,
            step,
        }
    }

    pub fn position(&self, key: &T) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.positions[i])
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Maps a numeric domain onto `[0, 1]` and through an ordered list of color stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialColorScale {
    domain: (f64, f64),
    stops: &'static [Rgb],
}

impl SequentialColorScale {
    pub fn new(domain: (f64, f64), stops: &'static [Rgb]) -> Self {
        Self { domain, stops }
    }

    pub fn apply(&self, value: f64) -> Rgb {
        interpolate_rgb_basis(self.stops, normalize(value, self.domain.0, self.domain.1))
    }
}

/// Human-friendly tick values: roughly `count` steps of 1, 2 or 5 times a power of ten.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let mut out: Vec<f64> = (i1..=i2)
        .map(|i| {
            let i = i as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count;
    if !(step > 0.0) {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    // Negative powers keep an inverted increment so tick values come from a
    // division, which avoids drift like 0.30000000000000004.
    let (i1, i2, inc) = if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        let mut i1 = (start * scale).round() as i64;
        let mut i2 = (stop * scale).round() as i64;
        if (i1 as f64) / scale < start {
            i1 += 1;
        }
        if (i2 as f64) / scale > stop {
            i2 -= 1;
        }
        (i1, i2, -scale)
    } else {
        let scale = 10f64.powf(power) * factor;
        let mut i1 = (start / scale).round() as i64;
        let mut i2 = (stop / scale).round() as i64;
        if (i1 as f64) * scale < start {
            i1 += 1;
        }
        if (i2 as f64) * scale > stop {
            i2 -= 1;
        }
        (i1, i2, scale)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::THERMAL_RAMP;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn extent_ignores_nan() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(extent(Vec::<f64>::new()), None);
        assert_eq!(extent([f64::NAN]), None);
        assert_eq!(extent([1900, 1753, 2015]), Some((1753, 2015)));
    }

    #[test]
    fn linear_scale_maps_endpoints_and_degenerate_domain() {
        let scale = LinearScale::new((-2.0, 6.0), (0.0, 400.0));
        assert!(approx(scale.apply(-2.0), 0.0));
        assert!(approx(scale.apply(6.0), 400.0));
        assert!(approx(scale.apply(2.0), 200.0));

        let flat = LinearScale::new((1.5, 1.5), (0.0, 400.0));
        assert!(approx(flat.apply(1.5), 200.0));
    }

    #[test]
    fn time_scale_is_linear_in_days() {
        let scale = TimeScale::new(
            (year_start(1753).unwrap(), year_start(2015).unwrap()),
            (60.0, 1580.0),
        );
        assert!(approx(scale.apply(year_start(1753).unwrap()), 60.0));
        assert!(approx(scale.apply(year_start(2015).unwrap()), 1580.0));
        let a = scale.apply(year_start(1800).unwrap());
        let b = scale.apply(year_start(1801).unwrap());
        assert!(b > a);
    }

    #[test]
    fn year_ticks_land_on_decades_inside_domain() {
        let scale = TimeScale::new(
            (year_start(1753).unwrap(), year_start(2015).unwrap()),
            (60.0, 1580.0),
        );
        let ticks = scale.year_ticks(10);
        assert_eq!(ticks.first().map(|d| d.year()), Some(1760));
        assert_eq!(ticks.last().map(|d| d.year()), Some(2010));
        assert_eq!(ticks.len(), 26);
    }

    #[test]
    fn band_scale_reversed_range_puts_last_domain_value_at_bottom() {
        let scale = BandScale::new(vec!["c", "b", "a"], (120.0, 0.0));
        assert!(approx(scale.bandwidth(), 40.0));
        assert_eq!(scale.position(&"a"), Some(0.0));
        assert_eq!(scale.position(&"b"), Some(40.0));
        assert_eq!(scale.position(&"c"), Some(80.0));
        assert_eq!(scale.position(&"z"), None);
    }

    #[test]
    fn ticks_pick_round_steps() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks(-6.976, 5.228, 8), vec![-6.0, -4.0, -2.0, 0.0, 2.0, 4.0]);
        assert_eq!(ticks(1.0, 1.0, 8), vec![1.0]);
        assert_eq!(ticks(0.0, 1.0, 0), Vec::<f64>::new());

        let small = ticks(-1.2, 0.3, 8);
        assert_eq!(small.first().copied(), Some(-1.2));
        assert_eq!(small.last().copied(), Some(0.2));
    }

    #[test]
    fn sequential_scale_spans_the_ramp() {
        let scale = SequentialColorScale::new((-2.0, 2.0), &THERMAL_RAMP);
        assert_eq!(scale.apply(-2.0), THERMAL_RAMP[0]);
        assert_eq!(scale.apply(2.0), THERMAL_RAMP[7]);
        assert_ne!(scale.apply(-1.0), scale.apply(1.0));
    }
}
