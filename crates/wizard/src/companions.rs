use shared::domain::{AgeBand, GroupId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionEntry {
    id: GroupId,
    age_band: AgeBand,
    count: u32,
}

impl CompanionEntry {
    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn age_band(&self) -> AgeBand {
        self.age_band
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Ordered (age band, headcount) entries. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionGroup {
    entries: Vec<CompanionEntry>,
    next_id: i64,
}

impl Default for CompanionGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanionGroup {
    pub fn new() -> Self {
        let mut group = Self {
            entries: Vec::with_capacity(1),
            next_id: 1,
        };
        group.add_group();
        group
    }

    pub fn entries(&self) -> &[CompanionEntry] {
        &self.entries
    }

    pub fn entry(&self, id: GroupId) -> Option<&CompanionEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn add_group(&mut self) -> GroupId {
        let id = GroupId(self.next_id);
        self.next_id += 1;
        self.entries.push(CompanionEntry {
            id,
            age_band: AgeBand::COMPANION_DEFAULT,
            count: 0,
        });
        id
    }

    /// Returns false when `id` is unknown or it is the only remaining entry.
    pub fn remove_group(&mut self, id: GroupId) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn set_age_band(&mut self, id: GroupId, age_band: AgeBand) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.age_band = age_band;
                true
            }
            None => false,
        }
    }

    pub fn increment(&mut self, id: GroupId) -> Option<u32> {
        let entry = self.entry_mut(id)?;
        entry.count = entry.count.saturating_add(1);
        Some(entry.count)
    }

    /// Clamps at zero.
    pub fn decrement(&mut self, id: GroupId) -> Option<u32> {
        let entry = self.entry_mut(id)?;
        entry.count = entry.count.saturating_sub(1);
        Some(entry.count)
    }

    pub fn total_headcount(&self) -> u32 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// One age band per counted head, in entry order.
    pub fn flatten(&self) -> Vec<AgeBand> {
        self.entries
            .iter()
            .flat_map(|entry| std::iter::repeat(entry.age_band).take(entry.count as usize))
            .collect()
    }

    fn entry_mut(&mut self, id: GroupId) -> Option<&mut CompanionEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_empty_default_entry() {
        let group = CompanionGroup::new();
        assert_eq!(group.entries().len(), 1);
        assert_eq!(group.entries()[0].age_band(), AgeBand::Twenties);
        assert_eq!(group.total_headcount(), 0);
    }

    #[test]
    fn removing_last_entry_is_a_no_op() {
        let mut group = CompanionGroup::new();
        let only = group.entries()[0].id();
        assert!(!group.remove_group(only));
        assert_eq!(group.entries().len(), 1);
    }

    #[test]
    fn removes_by_identity_when_more_than_one_entry() {
        let mut group = CompanionGroup::new();
        let first = group.entries()[0].id();
        let second = group.add_group();
        group.set_age_band(second, AgeBand::Fifties);

        assert!(group.remove_group(first));
        assert_eq!(group.entries().len(), 1);
        assert_eq!(group.entries()[0].id(), second);
        assert_eq!(group.entries()[0].age_band(), AgeBand::Fifties);
        assert!(!group.remove_group(first));
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let mut group = CompanionGroup::new();
        let id = group.entries()[0].id();
        assert_eq!(group.increment(id), Some(1));
        assert_eq!(group.decrement(id), Some(0));
        assert_eq!(group.decrement(id), Some(0));
        assert_eq!(group.entry(id).map(CompanionEntry::count), Some(0));
    }

    #[test]
    fn changing_age_band_keeps_count_and_other_entries() {
        let mut group = CompanionGroup::new();
        let first = group.entries()[0].id();
        let second = group.add_group();
        group.increment(first);
        group.increment(first);
        group.increment(second);

        assert!(group.set_age_band(first, AgeBand::Forties));
        assert_eq!(group.entry(first).map(CompanionEntry::count), Some(2));
        assert_eq!(
            group.entry(second).map(CompanionEntry::age_band),
            Some(AgeBand::Twenties)
        );
    }

    #[test]
    fn flatten_repeats_band_per_head() {
        let mut group = CompanionGroup::new();
        let adults = group.entries()[0].id();
        let kids = group.add_group();
        let empty = group.add_group();
        group.set_age_band(kids, AgeBand::Child);
        group.set_age_band(empty, AgeBand::Infant);
        for _ in 0..3 {
            group.increment(adults);
        }
        group.increment(kids);

        let flat = group.flatten();
        assert_eq!(flat.len() as u32, group.total_headcount());
        assert_eq!(
            flat,
            vec![
                AgeBand::Twenties,
                AgeBand::Twenties,
                AgeBand::Twenties,
                AgeBand::Child
            ]
        );
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut group = CompanionGroup::new();
        let second = group.add_group();
        group.remove_group(second);
        let third = group.add_group();
        assert_ne!(second, third);
    }
}
