// core/src/live.rs
//! Løpende akkumulering under pågående opptak. UI-et leser kun løpende
//! summer herfra; full batch-analyse kjøres ved avslutning av økten.

use crate::metrics::{incremental_load, is_moving, RoundTo};
use crate::types::TrackPoint;

#[derive(Debug, Clone, Default)]
pub struct LiveTotals {
    samples: usize,
    moving: usize,
    watt_sum: f64,
    watt_n: usize,
    hr_sum: f64,
    hr_n: usize,
    cadence_sum: f64,
    cadence_n: usize,
    load_accum: f64,
    last_altitude: Option<f64>,
    ascent: f64,
    descent: f64,
}

impl LiveTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ta inn ett nytt sample. Rekkefølgen må være kronologisk; høydedeltaer
    /// regnes mot forrige registrerte høyde.
    pub fn push(&mut self, p: &TrackPoint, ftp: Option<f64>, gap_sec: f64) {
        self.samples += 1;
        if is_moving(p) {
            self.moving += 1;
        }

        if let Some(w) = p.watts {
            self.watt_sum += w;
            self.watt_n += 1;
            if let Some(f) = ftp {
                if f > 0.0 {
                    self.load_accum += incremental_load(w, f, gap_sec);
                }
            }
        }
        if let Some(h) = p.hr {
            self.hr_sum += h;
            self.hr_n += 1;
        }
        if let Some(c) = p.cadence {
            self.cadence_sum += c;
            self.cadence_n += 1;
        }
        if let Some(alt) = p.altitude {
            if let Some(prev) = self.last_altitude {
                let d = alt - prev;
                if d > 0.0 {
                    self.ascent += d;
                } else {
                    self.descent -= d;
                }
            }
            self.last_altitude = Some(alt);
        }
    }

    pub fn sample_count(&self) -> usize {
        self.samples
    }

    pub fn moving_time_sec(&self, gap_sec: f64) -> f64 {
        self.moving as f64 * gap_sec
    }

    pub fn avg_power(&self) -> Option<f64> {
        if self.watt_n == 0 {
            None
        } else {
            Some(self.watt_sum / self.watt_n as f64)
        }
    }

    pub fn avg_hr(&self) -> Option<f64> {
        if self.hr_n == 0 {
            None
        } else {
            Some(self.hr_sum / self.hr_n as f64)
        }
    }

    pub fn avg_cadence(&self) -> Option<f64> {
        if self.cadence_n == 0 {
            None
        } else {
            Some(self.cadence_sum / self.cadence_n as f64)
        }
    }

    /// Akkumulert treningsbelastning så langt, 1 desimal.
    pub fn load(&self) -> f64 {
        self.load_accum.round_to(1)
    }

    pub fn ascent_m(&self) -> f64 {
        self.ascent.round_to(1)
    }

    pub fn descent_m(&self) -> f64 {
        self.descent.round_to(1)
    }
}
