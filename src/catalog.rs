use time::OffsetDateTime;

use crate::model::Establishment;

mod collation;
pub use self::collation::compare_names;

const DEFAULT_ESTABLISHMENTS: &[(&str, &str, &str, &str)] = &[
    (
        "neopdv1",
        "NeoPDV 1",
        "Primeiro estabelecimento",
        "https://neopdv1.vercel.app/",
    ),
    (
        "neopdv2",
        "NeoPDV 2",
        "Segundo estabelecimento",
        "https://neopdv2.vercel.app/",
    ),
    (
        "neopdv3",
        "NeoPDV 3",
        "Terceiro estabelecimento",
        "https://neopdv3.vercel.app/",
    ),
    (
        "neopdv4",
        "NeoPDV 4",
        "Quarto estabelecimento",
        "https://neopdv4.vercel.app/",
    ),
    (
        "neopdv5",
        "NeoPDV 5",
        "Quinto estabelecimento",
        "https://neopdv5.vercel.app/",
    ),
];

/// Built-in fallback list, ordered by display name.
pub fn default_catalog() -> Vec<Establishment> {
    let mut out: Vec<Establishment> = DEFAULT_ESTABLISHMENTS
        .iter()
        .map(|(id, name, desc, url)| Establishment::new(id, name, Some(desc), url))
        .collect();
    out.sort_by(|a, b| compare_names(&a.display_name, &b.display_name));
    out
}

/// The establishments currently shown to the user.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<Establishment>,
    synced_at: Option<OffsetDateTime>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: default_catalog(),
            synced_at: None,
        }
    }
}

impl Catalog {
    /// Swaps in a server list as-is; nothing from the previous list survives.
    pub fn replace(&mut self, entries: Vec<Establishment>) {
        self.entries = entries;
        self.synced_at = Some(OffsetDateTime::now_utc());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn entries(&self) -> &[Establishment] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Establishment> {
        self.entries.iter()
    }

    pub fn find(&self, id: &str) -> Option<&Establishment> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When the list was last replaced from the server; `None` while the
    /// fallback list is shown.
    pub fn synced_at(&self) -> Option<OffsetDateTime> {
        self.synced_at
    }

    pub fn is_fallback(&self) -> bool {
        self.synced_at.is_none()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
