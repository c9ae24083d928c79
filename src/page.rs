use std::cmp::Ordering;
use std::fmt;

/// A site page from the XML catalog. Filled in by the parser while its
/// element is open, read-only once extraction returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub id: String,
    pub authorize: bool,
    pub title: String,
    pub kind: String,
    // Characteristics block
    pub email: String,
    pub has_news: bool,
    pub has_archive: bool,
    pub voting: String, // Anonymous, Authorized, None
    pub paid: bool,
}

/// Title ordering, passed explicitly to `sort_by`.
pub fn by_title(a: &Page, b: &Page) -> Ordering {
    a.title.cmp(&b.title)
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page[ID={}, Type={}, Title='{}', Auth={}, Paid={}]",
            self.id, self.kind, self.title, self.authorize, self.paid
        )
    }
}

// ── Tests ──
