//! Character-level typo injection.
//!
//! Each corruption pass edits at most one character of one field. A pass
//! draws, in order:
//!
//! 1. the field (`name`, `address`, `phone`);
//! 2. the edit (`delete`, `insert`, `swap`);
//! 3. the position within the field's current text;
//! 4. a character from the region's alphabet.
//!
//! The character is drawn even when the edit does not use it, so every pass
//! over a non-empty field consumes exactly four draws. A pass that lands on an
//! empty field stops after the first draw and changes nothing.
//!
//! Lengths and positions count `char`s, so diacritics are never split.

use crate::record::Record;
use crate::region::Region;
use crate::stream::DecisionStream;

/// A record field that corruption may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The full name.
    Name,
    /// The postal address.
    Address,
    /// The phone number.
    Phone,
}

impl Field {
    /// Fields in draw order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Address, Self::Phone];

    fn text_mut(self, record: &mut Record) -> &mut String {
        match self {
            Self::Name => &mut record.name,
            Self::Address => &mut record.address,
            Self::Phone => &mut record.phone,
        }
    }
}

/// A single-character edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Remove the character at the position.
    Delete,
    /// Insert the drawn character before the position.
    Insert,
    /// Exchange the character at the position with its successor.
    Swap,
}

impl Edit {
    /// Edits in draw order.
    pub const ALL: [Self; 3] = [Self::Delete, Self::Insert, Self::Swap];
}

/// What one pass decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corruption {
    /// Targeted field.
    pub field: Field,
    /// Chosen edit.
    pub edit: Edit,
    /// Character position within the field.
    pub position: usize,
    /// Drawn alphabet character; only inserted for [`Edit::Insert`].
    pub character: char,
}

/// Applies typo passes using one region's alphabet.
#[derive(Debug, Clone)]
pub struct CorruptionEngine {
    alphabet: Vec<char>,
}

impl CorruptionEngine {
    /// Builds an engine for a region's alphabet.
    #[must_use]
    pub fn for_region(region: Region) -> Self {
        Self {
            alphabet: region.alphabet().chars().collect(),
        }
    }

    /// Applies one corruption pass to the record.
    ///
    /// Returns `None` when the drawn field is empty; the pass is then
    /// silently dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::{
    ///     CombinedSeed, CorruptionEngine, DecisionStream, Record, RecordIndex, Region, RunSeed,
    /// };
    /// use uuid::Uuid;
    ///
    /// let mut record = Record {
    ///     index: 1,
    ///     identifier: Uuid::nil(),
    ///     name: "Ada Lovelace".to_owned(),
    ///     address: "12 Main St, Springfield, IL 62704".to_owned(),
    ///     phone: "(+1) 555-010-4477".to_owned(),
    /// };
    /// let index = RecordIndex::new(1).expect("non-zero");
    /// let mut stream = DecisionStream::new(&CombinedSeed::new(&RunSeed::from(42), index));
    ///
    /// let engine = CorruptionEngine::for_region(Region::Usa);
    /// let applied = engine.apply_one_error(&mut record, &mut stream);
    ///
    /// assert!(applied.is_some());
    /// assert_eq!(stream.draws(), 4);
    /// assert_eq!(record.identifier, Uuid::nil());
    /// ```
    pub fn apply_one_error(
        &self,
        record: &mut Record,
        stream: &mut DecisionStream,
    ) -> Option<Corruption> {
        let field = pick(&Field::ALL, stream)?;
        let text = field.text_mut(record);
        let length = text.chars().count();
        if length == 0 {
            return None;
        }

        let edit = pick(&Edit::ALL, stream)?;
        let position = stream.next_index(length);
        let drawn = stream.next_index(self.alphabet.len());
        let character = self.alphabet.get(drawn).copied()?;

        *text = apply_edit(text, edit, position, character);
        Some(Corruption {
            field,
            edit,
            position,
            character,
        })
    }

    /// Applies `count` independent passes in sequence.
    ///
    /// Later passes see the text left by earlier ones and may hit the same
    /// field and position again.
    pub fn apply_errors(
        &self,
        record: &mut Record,
        stream: &mut DecisionStream,
        count: u64,
    ) -> Vec<Corruption> {
        (0..count)
            .filter_map(|_| self.apply_one_error(record, stream))
            .collect()
    }

    /// Applies `count` passes like [`Self::apply_errors`] and returns how
    /// many changed a field.
    ///
    /// Nothing is buffered per pass, so very large counts stay cheap.
    pub fn corrupt(&self, record: &mut Record, stream: &mut DecisionStream, count: u64) -> u64 {
        (0..count).fold(0, |applied: u64, _| {
            applied.saturating_add(u64::from(self.apply_one_error(record, stream).is_some()))
        })
    }
}

fn pick<T: Copy>(options: &[T], stream: &mut DecisionStream) -> Option<T> {
    options.get(stream.next_index(options.len())).copied()
}

/// Applies one edit to `text` at a `char` position.
///
/// Out-of-range positions leave the text unchanged, as does a swap on the last
/// character.
///
/// # Example
///
/// ```
/// use identity_forge::{Edit, apply_edit};
///
/// assert_eq!(apply_edit("abc", Edit::Delete, 1, 'x'), "ac");
/// assert_eq!(apply_edit("abc", Edit::Insert, 1, 'x'), "axbc");
/// assert_eq!(apply_edit("abc", Edit::Swap, 1, 'x'), "acb");
/// assert_eq!(apply_edit("a", Edit::Swap, 0, 'x'), "a");
/// ```
#[must_use]
pub fn apply_edit(text: &str, edit: Edit, position: usize, character: char) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if position >= chars.len() {
        return text.to_owned();
    }
    match edit {
        Edit::Delete => {
            chars.remove(position);
        }
        Edit::Insert => chars.insert(position, character),
        Edit::Swap => {
            let next = position.saturating_add(1);
            if next < chars.len() {
                chars.swap(position, next);
            }
        }
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    //! Covers single edits, pass draw accounting and boundary cases.

    use rstest::rstest;
    use uuid::Uuid;

    use super::*;
    use crate::seed::{CombinedSeed, RecordIndex, RunSeed};

    fn record() -> Record {
        Record {
            index: 1,
            identifier: Uuid::from_u128(7),
            name: "Zofia Anna Nowak".to_owned(),
            address: "ul. Leśna 4, Łódź, łódzkie 90-001".to_owned(),
            phone: "+48-123-456-7890".to_owned(),
        }
    }

    fn stream(run_seed: &str, index: u64) -> DecisionStream {
        let record_index = RecordIndex::new(index).expect("non-zero");
        DecisionStream::new(&CombinedSeed::new(&RunSeed::from(run_seed), record_index))
    }

    #[rstest]
    #[case("abc", Edit::Delete, 0, "bc")]
    #[case("abc", Edit::Delete, 2, "ab")]
    #[case("abc", Edit::Insert, 0, "xabc")]
    #[case("abc", Edit::Insert, 2, "abxc")]
    #[case("abc", Edit::Swap, 0, "bac")]
    #[case("abc", Edit::Swap, 2, "abc")]
    #[case("a", Edit::Swap, 0, "a")]
    #[case("a", Edit::Delete, 0, "")]
    #[case("", Edit::Insert, 0, "")]
    #[case("", Edit::Delete, 0, "")]
    fn edits_follow_their_definitions(
        #[case] text: &str,
        #[case] edit: Edit,
        #[case] position: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(apply_edit(text, edit, position, 'x'), expected);
    }

    #[test]
    fn edits_respect_multibyte_characters() {
        assert_eq!(apply_edit("Łódź", Edit::Swap, 1, 'x'), "Łdóź");
        assert_eq!(apply_edit("Łódź", Edit::Delete, 3, 'x'), "Łód");
        assert_eq!(apply_edit("Łódź", Edit::Insert, 4, 'ż'), "Łódź");
    }

    #[test]
    fn non_empty_pass_consumes_four_draws() {
        let engine = CorruptionEngine::for_region(Region::Poland);
        let mut target = record();
        let mut decisions = stream("draws", 1);

        for pass in 1..=50_u64 {
            engine.apply_one_error(&mut target, &mut decisions);
            assert_eq!(decisions.draws(), pass * 4);
        }
    }

    #[test]
    fn empty_field_pass_consumes_one_draw_and_changes_nothing() {
        let engine = CorruptionEngine::for_region(Region::Usa);
        let mut target = Record {
            index: 1,
            identifier: Uuid::nil(),
            name: String::new(),
            address: String::new(),
            phone: String::new(),
        };
        let mut decisions = stream("empty", 1);

        assert_eq!(engine.apply_one_error(&mut target, &mut decisions), None);
        assert_eq!(decisions.draws(), 1);
        assert!(target.name.is_empty() && target.address.is_empty() && target.phone.is_empty());
    }

    #[test]
    fn passes_are_reproducible() {
        let engine = CorruptionEngine::for_region(Region::Germany);
        let mut first = record();
        let mut second = record();

        let applied_first = engine.apply_errors(&mut first, &mut stream("repeat", 3), 10);
        let applied_second = engine.apply_errors(&mut second, &mut stream("repeat", 3), 10);

        assert_eq!(applied_first, applied_second);
        assert_eq!(first, second);
    }

    #[test]
    fn counted_passes_match_reported_passes() {
        let engine = CorruptionEngine::for_region(Region::Germany);
        let mut reported = record();
        let mut counted = record();
        reported.phone.clear();
        counted.phone.clear();

        let applied = engine.apply_errors(&mut reported, &mut stream("count", 4), 400);
        let total = engine.corrupt(&mut counted, &mut stream("count", 4), 400);

        assert_eq!(counted, reported);
        assert_eq!(total, u64::try_from(applied.len()).expect("small count"));
        assert!(total < 400, "passes on the empty phone are dropped");
    }

    #[test]
    fn corruption_never_touches_identifier_or_index() {
        let engine = CorruptionEngine::for_region(Region::Poland);
        let mut target = record();
        engine.apply_errors(&mut target, &mut stream("heavy", 1), 500);

        assert_eq!(target.identifier, Uuid::from_u128(7));
        assert_eq!(target.index, 1);
    }

    #[test]
    fn reported_corruptions_describe_the_edit() {
        let engine = CorruptionEngine::for_region(Region::Poland);
        let alphabet = Region::Poland.alphabet();
        let mut target = record();

        for corruption in engine.apply_errors(&mut target, &mut stream("report", 2), 200) {
            assert!(alphabet.contains(corruption.character));
        }
    }

    #[test]
    fn length_changes_match_applied_edits() {
        let engine = CorruptionEngine::for_region(Region::Usa);
        let original = record();
        let mut target = original.clone();
        let applied = engine.apply_errors(&mut target, &mut stream("insert", 5), 300);

        let inserts = applied
            .iter()
            .filter(|corruption| corruption.edit == Edit::Insert)
            .count();
        let deletes = applied
            .iter()
            .filter(|corruption| corruption.edit == Edit::Delete)
            .count();
        let before = original.name.chars().count()
            + original.address.chars().count()
            + original.phone.chars().count();
        let after = target.name.chars().count()
            + target.address.chars().count()
            + target.phone.chars().count();

        assert_eq!(after + deletes, before + inserts);
    }

    #[test]
    fn all_fields_and_edits_get_chosen() {
        let engine = CorruptionEngine::for_region(Region::Usa);
        let mut target = record();
        let applied = engine.apply_errors(&mut target, &mut stream("coverage", 1), 300);

        for field in Field::ALL {
            assert!(applied.iter().any(|corruption| corruption.field == field));
        }
        for edit in Edit::ALL {
            assert!(applied.iter().any(|corruption| corruption.edit == edit));
        }
    }
}
