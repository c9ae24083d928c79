use std::fmt;

/// Category-specific payload. The tag is fixed when the tariff is built
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum TariffKind {
    Basic { minutes: u32 },
    Internet { gigabytes: u32 },
    Premium { roaming: bool },
}

/// A single tariff record. Constructed through [`Tariff::from_fields`]
/// and read-only from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    name: String,
    monthly_fee: f64,
    clients: u32,
    kind: TariffKind,
}

impl Tariff {
    /// Build a tariff from raw document fields. The kind is matched
    /// case-insensitively; an unknown kind yields `None` so the caller
    /// can skip the record without treating it as an error.
    ///
    /// For premium tariffs `param` is a flag: roaming is on iff it is 1.
    pub fn from_fields(
        kind: &str,
        name: String,
        monthly_fee: f64,
        clients: u32,
        param: u32,
    ) -> Option<Tariff> {
        let kind = match kind.to_lowercase().as_str() {
            "basic" => TariffKind::Basic { minutes: param },
            "internet" => TariffKind::Internet { gigabytes: param },
            "premium" => TariffKind::Premium { roaming: param == 1 },
            _ => return None,
        };
        Some(Tariff {
            name,
            monthly_fee,
            clients,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monthly_fee(&self) -> f64 {
        self.monthly_fee
    }

    pub fn clients(&self) -> u32 {
        self.clients
    }

    pub fn kind(&self) -> &TariffKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            TariffKind::Basic { .. } => "basic",
            TariffKind::Internet { .. } => "internet",
            TariffKind::Premium { .. } => "premium",
        }
    }

    /// Free-form summary of the category payload.
    pub fn describe(&self) -> String {
        match &self.kind {
            TariffKind::Basic { minutes } => format!("{} min included", minutes),
            TariffKind::Internet { gigabytes } => format!("{} GB data", gigabytes),
            TariffKind::Premium { roaming } => {
                format!("roaming {}", if *roaming { "on" } else { "off" })
            }
        }
    }
}

impl fmt::Display for Tariff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {:<16} | {:>8.2} | {:>7} | {}",
            self.name,
            self.monthly_fee,
            self.clients,
            self.describe()
        )
    }
}

// ── Tests ──
