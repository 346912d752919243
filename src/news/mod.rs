mod locator;
mod scanner;

pub use locator::collect_tables;
pub use scanner::scan;

/// One article discovered on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsEntry {
    pub id: u64,
    pub title: String,
    pub link: String,
}

/// Hands out strictly increasing entry ids.
///
/// One generator is threaded through every scan of a run so ids stay unique
/// across scans.
#[derive(Debug, Default)]
pub struct EntryIds {
    next: u64,
}

impl EntryIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_from_zero() {
        let mut ids = EntryIds::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }
}
