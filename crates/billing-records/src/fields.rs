//! Field tags and the populated-field set.
//!
//! Every settable field across the record types has one tag. Each record
//! instance tracks which of its fields currently hold an accepted value as a
//! set of tags; validity is an exact match against the record's required set,
//! which also catches a tag that has no business being there.

/// One tag per settable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Business-shaped fields
    BusinessName,
    Address,
    AreaCode,
    Town,
    Cellphone,
    Email,
    // Admin extensions
    BankName,
    BranchCode,
    AccountNumber,
    ClientMessage,
    Password,
    // Client extensions
    VatNumber,
    StatementSchedule,
    // Line item fields
    Quantity,
    Description,
    Amount,
    RowNumber,
    IsDescription,
    // Invoice fields
    InvoiceId,
    JobCardNumber,
    OrderNumber,
    InvoiceDate,
    Paid,
    DescriptionTotal,
    MaterialTotal,
    GrandTotal,
    // Statement fields
    StatementId,
    StatementDate,
    PeriodStart,
    PeriodEnd,
}

/// A set of field tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSet {
    bits: u64,
}

impl FieldSet {
    /// The empty set.
    pub const EMPTY: FieldSet = FieldSet { bits: 0 };

    /// Build a set from a list of tags.
    pub const fn of(fields: &[Field]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < fields.len() {
            bits |= 1u64 << fields[i] as u64;
            i += 1;
        }
        Self { bits }
    }

    /// Mark a field as populated.
    pub fn insert(&mut self, field: Field) {
        self.bits |= 1u64 << field as u64;
    }

    /// Store a setter outcome: an accepted value marks the field populated,
    /// a rejected one clears it. Returns the outcome for the caller.
    pub fn mark(&mut self, field: Field, accepted: bool) -> bool {
        if accepted {
            self.insert(field);
        } else {
            tracing::debug!(?field, "field value rejected");
            self.remove(field);
        }
        accepted
    }

    /// Clear a field's populated mark.
    pub fn remove(&mut self, field: Field) {
        self.bits &= !(1u64 << field as u64);
    }

    /// Whether a field is currently marked populated.
    pub const fn contains(&self, field: Field) -> bool {
        self.bits & (1u64 << field as u64) != 0
    }

    /// Exact-match check: every required field present and nothing else.
    pub const fn is_exactly(&self, required: FieldSet) -> bool {
        self.bits == required.bits
    }

    /// Whether no field is marked populated.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of populated fields.
    pub const fn len(&self) -> u32 {
        self.bits.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = FieldSet::EMPTY;
        assert!(set.is_empty());

        set.insert(Field::BusinessName);
        set.insert(Field::Email);
        assert!(set.contains(Field::BusinessName));
        assert!(set.contains(Field::Email));
        assert!(!set.contains(Field::Town));
        assert_eq!(set.len(), 2);

        set.remove(Field::Email);
        assert!(!set.contains(Field::Email));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_mark_tracks_outcome() {
        let mut set = FieldSet::EMPTY;
        assert!(set.mark(Field::Cellphone, true));
        assert!(set.contains(Field::Cellphone));

        assert!(!set.mark(Field::Cellphone, false));
        assert!(!set.contains(Field::Cellphone));
    }

    #[test]
    fn test_remove_absent_field_is_noop() {
        let mut set = FieldSet::of(&[Field::Quantity]);
        set.remove(Field::Amount);
        assert!(set.contains(Field::Quantity));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_is_exactly_requires_equality() {
        let required = FieldSet::of(&[Field::BusinessName, Field::Town]);

        let mut populated = FieldSet::EMPTY;
        populated.insert(Field::BusinessName);
        assert!(!populated.is_exactly(required));

        populated.insert(Field::Town);
        assert!(populated.is_exactly(required));

        // A stray member breaks the match even with all required present.
        populated.insert(Field::Paid);
        assert!(!populated.is_exactly(required));
    }

    #[test]
    fn test_of_matches_incremental_inserts() {
        let built = FieldSet::of(&[Field::InvoiceId, Field::Paid, Field::GrandTotal]);
        let mut incremental = FieldSet::EMPTY;
        incremental.insert(Field::InvoiceId);
        incremental.insert(Field::Paid);
        incremental.insert(Field::GrandTotal);
        assert_eq!(built, incremental);
    }
}
