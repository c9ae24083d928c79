use crate::tariff::Tariff;

/// In-memory ordered collection of tariffs. Insertion order is kept
/// until an explicit [`Catalog::sort_by_fee`]; records are never
/// mutated or removed, only read and reordered.
#[derive(Debug, Default)]
pub struct Catalog {
    tariffs: Vec<Tariff>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    pub fn append(&mut self, tariff: Tariff) {
        self.tariffs.push(tariff);
    }

    pub fn count(&self) -> usize {
        self.tariffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }

    /// Sum of client counts across all records.
    pub fn total_clients(&self) -> u64 {
        self.tariffs.iter().map(|t| u64::from(t.clients())).sum()
    }

    /// Ascending in-place sort on the monthly fee. Stable: equal fees
    /// keep their relative insertion order.
    pub fn sort_by_fee(&mut self) {
        self.tariffs
            .sort_by(|a, b| a.monthly_fee().total_cmp(&b.monthly_fee()));
    }

    /// Tariffs with `min <= fee <= max`, in catalog order. The catalog
    /// itself is left untouched.
    pub fn filter_by_fee(&self, min: f64, max: f64) -> Vec<&Tariff> {
        self.tariffs
            .iter()
            .filter(|t| t.monthly_fee() >= min && t.monthly_fee() <= max)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tariff> {
        self.tariffs.iter()
    }
}

// ── Tests ──
