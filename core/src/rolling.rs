// core/src/rolling.rs
//! Rullende og segmentvise snitt for serier, pluss valg av diagram-akse.

use log::warn;

/// Kandidatbredder (sek) for segmentering av tidsaksen i diagrammer.
pub const AXIS_GAP_CANDIDATES: [f64; 9] = [
    10.0, 15.0, 30.0, 60.0, 120.0, 300.0, 600.0, 900.0, 1800.0,
];

const MAX_AXIS_BUCKETS: f64 = 8.0;

/// Kausalt rullende snitt: element i er snittet av de siste opptil `window`
/// verdiene t.o.m. i. Vinduet fylles gradvis i starten (1, 2, … window).
/// Lazy, endelig og ikke-restartbar; gir like mange elementer som input.
pub struct RollingAverage<'a> {
    xs: &'a [f64],
    window: usize,
    idx: usize,
    sum: f64,
}

impl<'a> RollingAverage<'a> {
    pub fn new(xs: &'a [f64], window: usize) -> Self {
        Self {
            xs,
            window: window.max(1),
            idx: 0,
            sum: 0.0,
        }
    }
}

impl Iterator for RollingAverage<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.idx >= self.xs.len() {
            return None;
        }
        self.sum += self.xs[self.idx];
        if self.idx >= self.window {
            self.sum -= self.xs[self.idx - self.window];
        }
        let denom = (self.idx + 1).min(self.window) as f64;
        self.idx += 1;
        Some(self.sum / denom)
    }
}

/// Samle hele den rullende serien i én vektor.
pub fn rolling_average(xs: &[f64], window: usize) -> Vec<f64> {
    RollingAverage::new(xs, window).collect()
}

/// Segmentvis snitt: del tidsaksen i buckets på `segment_sec` og gi hvert
/// sample sin buckets snittverdi. Med `midpoint_markers` returneres i stedet
/// en 0/1-serie som flagger midtsamplet i hver bucket (tick-plassering).
/// Eksakte nuller holdes utenfor snittet når `include_zeros` er false.
/// Ulik lengde på aksene gir tom output.
pub fn segment_average_series(
    segment_sec: f64,
    x_axis_sec: &[f64],
    values: &[f64],
    include_zeros: bool,
    midpoint_markers: bool,
) -> Vec<f64> {
    if x_axis_sec.len() != values.len() {
        warn!(
            "segment_average_series: ulik lengde på akser ({} vs {})",
            x_axis_sec.len(),
            values.len()
        );
        return Vec::new();
    }
    if x_axis_sec.is_empty() || segment_sec <= 0.0 {
        return Vec::new();
    }

    let bucket_of = |x: f64| (x / segment_sec).floor().max(0.0) as usize;
    let last_bucket = bucket_of(x_axis_sec[x_axis_sec.len() - 1]);

    let mut sums = vec![0.0f64; last_bucket + 1];
    let mut counts = vec![0usize; last_bucket + 1];
    let mut first_idx = vec![usize::MAX; last_bucket + 1];
    let mut last_idx = vec![0usize; last_bucket + 1];

    for (i, (&x, &v)) in x_axis_sec.iter().zip(values.iter()).enumerate() {
        let b = bucket_of(x).min(last_bucket);
        if first_idx[b] == usize::MAX {
            first_idx[b] = i;
        }
        last_idx[b] = i;
        if include_zeros || v != 0.0 {
            sums[b] += v;
            counts[b] += 1;
        }
    }

    if midpoint_markers {
        let mut out = vec![0.0; values.len()];
        for b in 0..=last_bucket {
            if first_idx[b] == usize::MAX {
                continue;
            }
            out[(first_idx[b] + last_idx[b]) / 2] = 1.0;
        }
        return out;
    }

    // Bucket uten bidrag (alt filtrert vekk) får snitt 0.
    let means: Vec<f64> = sums
        .iter()
        .zip(counts.iter())
        .map(|(s, &c)| if c > 0 { s / c as f64 } else { 0.0 })
        .collect();

    x_axis_sec
        .iter()
        .map(|&x| means[bucket_of(x).min(last_bucket)])
        .collect()
}

/// Velg en lesbar segmentbredde: minste kandidat som dekker hele varigheten
/// med maks 8 buckets, ellers største kandidat.
pub fn axis_time_gap(elapsed_sec: &[f64]) -> f64 {
    let duration = match (elapsed_sec.first(), elapsed_sec.last()) {
        (Some(a), Some(b)) => (b - a).max(0.0),
        _ => 0.0,
    };
    for c in AXIS_GAP_CANDIDATES {
        if duration <= MAX_AXIS_BUCKETS * c {
            return c;
        }
    }
    AXIS_GAP_CANDIDATES[AXIS_GAP_CANDIDATES.len() - 1]
}
