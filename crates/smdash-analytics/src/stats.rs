/// Round to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accumulates present values for a mean; missing values are skipped.
///
/// Values are summed in sorted order so the result does not depend on the
/// order rows arrived in.
#[derive(Debug, Default, Clone)]
pub(crate) struct Samples {
    values: Vec<f64>,
}

impl Samples {
    pub(crate) fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| !v.is_nan()) {
            self.values.push(v);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn push_count(&mut self, value: u64) {
        self.values.push(value as f64);
    }

    pub(crate) fn sum(&self) -> f64 {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted.iter().sum()
    }

    /// `None` when no value was present.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let count = self.values.len() as f64;
        Some(self.sum() / count)
    }
}

/// First key with the strictly largest value. Keys must arrive in sort
/// order, so ties resolve to the smallest key. Missing values never win.
pub(crate) fn arg_max<K, I>(entries: I) -> Option<K>
where
    I: IntoIterator<Item = (K, Option<f64>)>,
{
    let mut best: Option<(K, f64)> = None;
    for (key, value) in entries {
        let Some(value) = value else { continue };
        match &best {
            Some((_, top)) if value <= *top => {}
            _ => best = Some((key, value)),
        }
    }
    best.map(|(key, _)| key)
}
