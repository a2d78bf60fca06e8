//! In-memory credential rows backing the main window table

use tracing::{debug, info};

/// Site name given to rows appended by the "Add" button
pub const NEW_SITE_NAME: &str = "New site";

/// Password given to rows appended by the "Add" button
pub const NEW_PASSWORD: &str = "New password";

/// A single table row: site name, checkbox state and password
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialRow {
    pub site_name: String,
    pub selected: bool,
    pub password: String,
}

impl CredentialRow {
    pub fn new(site_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            selected: false,
            password: password.into(),
        }
    }

    /// Row appended by the "Add" action
    pub fn placeholder() -> Self {
        Self::new(NEW_SITE_NAME, NEW_PASSWORD)
    }
}

/// Ordered list of rows. Rows have no identity beyond their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialTable {
    rows: Vec<CredentialRow>,
}

impl CredentialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table pre-filled with `count` numbered placeholder rows
    pub fn seeded(count: usize) -> Self {
        let rows = (0..count)
            .map(|i| CredentialRow::new(format!("Site {i}"), format!("Password {i}")))
            .collect();
        debug!(rows = count, "Seeded credential table");
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CredentialRow> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CredentialRow> {
        self.rows.iter()
    }

    pub fn checked_count(&self) -> usize {
        self.rows.iter().filter(|row| row.selected).count()
    }

    /// Append a placeholder row, returning its index
    pub fn add_placeholder(&mut self) -> usize {
        self.rows.push(CredentialRow::placeholder());
        let index = self.rows.len() - 1;
        info!(index, rows = self.rows.len(), "Added placeholder row");
        index
    }

    /// Flip the checkbox of one row
    /// Returns the new state, or None if the index is out of range
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let row = self.rows.get_mut(index)?;
        row.selected = !row.selected;
        info!("Toggled {} to {}", index, row.selected);
        Some(row.selected)
    }

    /// Replace the site name of one row
    /// Returns false if the index is out of range
    pub fn rename(&mut self, index: usize, site_name: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.site_name = site_name.into();
                debug!(index, site_name = %row.site_name, "Renamed row");
                true
            }
            None => false,
        }
    }

    /// Replace the password of one row
    /// Returns false if the index is out of range
    pub fn set_password(&mut self, index: usize, password: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.password = password.into();
                debug!(index, "Changed row password");
                true
            }
            None => false,
        }
    }

    /// Delete every checked row. Survivors keep their relative order.
    /// Returns how many rows were removed.
    pub fn remove_checked(&mut self) -> usize {
        let checked: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.selected)
            .map(|(index, _)| index)
            .collect();

        // Back to front so earlier indices stay valid
        for &index in checked.iter().rev() {
            self.rows.remove(index);
        }

        if !checked.is_empty() {
            info!(removed = checked.len(), rows = self.rows.len(), "Removed checked rows");
        }
        checked.len()
    }
}

impl From<Vec<CredentialRow>> for CredentialTable {
    fn from(rows: Vec<CredentialRow>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(table: &CredentialTable) -> Vec<&str> {
        table.iter().map(|row| row.site_name.as_str()).collect()
    }

    #[test]
    fn test_seeded_rows_are_numbered_and_unchecked() {
        let table = CredentialTable::seeded(50);
        assert_eq!(table.len(), 50);
        assert_eq!(table.checked_count(), 0);

        let first = table.get(0).unwrap();
        assert_eq!(first.site_name, "Site 0");
        assert_eq!(first.password, "Password 0");

        let last = table.get(49).unwrap();
        assert_eq!(last.site_name, "Site 49");
        assert_eq!(last.password, "Password 49");
    }

    #[test]
    fn test_add_placeholder_appends_exactly_one_row() {
        let mut table = CredentialTable::seeded(3);
        let before = table.clone();

        let index = table.add_placeholder();

        assert_eq!(index, 3);
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(3), Some(&CredentialRow::placeholder()));
        // Existing rows untouched
        for i in 0..3 {
            assert_eq!(table.get(i), before.get(i));
        }
    }

    #[test]
    fn test_add_placeholder_on_empty_table() {
        let mut table = CredentialTable::new();
        assert!(table.is_empty());
        assert_eq!(table.add_placeholder(), 0);
        assert_eq!(table.get(0).unwrap().site_name, NEW_SITE_NAME);
        assert_eq!(table.get(0).unwrap().password, NEW_PASSWORD);
        assert!(!table.get(0).unwrap().selected);
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut table = CredentialTable::seeded(2);
        assert_eq!(table.toggle(1), Some(true));
        assert!(table.get(1).unwrap().selected);
        assert!(!table.get(0).unwrap().selected);

        assert_eq!(table.toggle(1), Some(false));
        assert!(!table.get(1).unwrap().selected);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut table = CredentialTable::seeded(2);
        assert_eq!(table.toggle(2), None);
        assert_eq!(table.checked_count(), 0);
    }

    #[test]
    fn test_remove_checked_keeps_survivor_order() {
        let mut table = CredentialTable::seeded(6);
        table.toggle(0);
        table.toggle(2);
        table.toggle(3);

        assert_eq!(table.remove_checked(), 3);
        assert_eq!(names(&table), vec!["Site 1", "Site 4", "Site 5"]);
        assert_eq!(table.checked_count(), 0);
    }

    #[test]
    fn test_remove_checked_with_nothing_checked() {
        let mut table = CredentialTable::seeded(4);
        assert_eq!(table.remove_checked(), 0);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_remove_checked_all_rows() {
        let mut table = CredentialTable::seeded(3);
        for i in 0..3 {
            table.toggle(i);
        }
        assert_eq!(table.remove_checked(), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_remove_checked_includes_added_rows() {
        let mut table = CredentialTable::seeded(2);
        let added = table.add_placeholder();
        table.toggle(added);

        assert_eq!(table.remove_checked(), 1);
        assert_eq!(names(&table), vec!["Site 0", "Site 1"]);
    }

    #[test]
    fn test_rename() {
        let mut table = CredentialTable::seeded(2);
        assert!(table.rename(1, "example.org"));
        assert_eq!(table.get(1).unwrap().site_name, "example.org");
        assert_eq!(table.get(1).unwrap().password, "Password 1");
        assert!(!table.rename(5, "nowhere"));
    }

    #[test]
    fn test_set_password() {
        let mut table = CredentialTable::seeded(2);
        assert!(table.set_password(0, "s3cret"));
        assert_eq!(table.get(0).unwrap().password, "s3cret");
        assert_eq!(table.get(0).unwrap().site_name, "Site 0");
        assert!(!table.set_password(2, "nowhere"));
    }

    #[test]
    fn test_duplicate_rows_allowed() {
        let mut table = CredentialTable::new();
        table.add_placeholder();
        table.add_placeholder();
        assert_eq!(table.get(0), table.get(1));

        table.toggle(1);
        assert_eq!(table.remove_checked(), 1);
        assert_eq!(table.len(), 1);
    }
}
