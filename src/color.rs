use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn channels(&self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Diverging cold-to-warm ramp, coldest first.
pub const THERMAL_RAMP: [Rgb; 8] = [
    Rgb::from_hex(0x4575b4),
    Rgb::from_hex(0x74add1),
    Rgb::from_hex(0xabd9e9),
    Rgb::from_hex(0xe0f3f8),
    Rgb::from_hex(0xffffbf),
    Rgb::from_hex(0xfdae61),
    Rgb::from_hex(0xf46d43),
    Rgb::from_hex(0xd73027),
];

/// Interpolates through `stops` with a uniform cubic B-spline per channel.
///
/// `t` is clamped to `[0, 1]`. The curve starts and ends exactly on the first
/// and last stop but only approximates the stops in between.
pub fn interpolate_rgb_basis(stops: &[Rgb], t: f64) -> Rgb {
    match stops {
        [] => Rgb::from_hex(0),
        [only] => *only,
        _ => {
            let mut out = [0u8; 3];
            for (channel, slot) in out.iter_mut().enumerate() {
                let values: Vec<f64> = stops.iter().map(|c| c.channels()[channel]).collect();
                *slot = basis_spline(&values, t).round().clamp(0.0, 255.0) as u8;
            }
            Rgb {
                r: out[0],
                g: out[1],
                b: out[2],
            }
        }
    }
}

fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t.is_nan() || t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}
