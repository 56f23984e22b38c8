use crate::common::is_hangul_syllable;
use crate::ucd::CharacterRecord;

pub trait CodepointFilter
{
    /// true, если декомпозиция кодпоинта попадает в таблицы
    fn filter(&self, record: &CharacterRecord) -> bool;
}

/// только непустые канонические декомпозиции
pub struct CanonicalFilter;

impl CodepointFilter for CanonicalFilter
{
    fn filter(&self, record: &CharacterRecord) -> bool
    {
        record.is_canonical_decomposition()
    }
}

/// слоги хангыль раскладываются алгоритмически, в таблицах им места нет
pub struct HangulSyllablesFilter;

impl CodepointFilter for HangulSyllablesFilter
{
    fn filter(&self, record: &CharacterRecord) -> bool
    {
        !is_hangul_syllable(record.code)
    }
}

/// фильтры записей для таблиц декомпозиции
pub const DECOMPOSITION_FILTERS: &[&dyn CodepointFilter] = &[&CanonicalFilter, &HangulSyllablesFilter];

pub fn passes(filters: &[&dyn CodepointFilter], record: &CharacterRecord) -> bool
{
    filters.iter().all(|f| f.filter(record))
}
