use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::common::{plane, plane_offset};
use crate::error::{Error, Result};
use crate::filter::{passes, DECOMPOSITION_FILTERS};
use crate::stats::EncodeStats;
use crate::ucd::CharacterRecord;

pub mod u32;
pub mod u64;

#[cfg(test)]
mod tests;

/// синглтон, плоскость 0
pub const STATS_SINGLETON_P0: &str = "синглтон (плоскость 0)";
/// синглтон, плоскость 2
pub const STATS_SINGLETON_P2: &str = "синглтон (плоскость 2)";
/// пара, 32 бита
pub const STATS_PAIR_U32: &str = "пара (32 бита)";
/// пара, 64 бита
pub const STATS_PAIR_U64: &str = "пара (64 бита)";
/// пара, пригодная для композиции
pub const STATS_RECOMPOSABLE: &str = "пара, комбинируется";
/// слоги хангыль, пропущенные фильтром
pub const STATS_HANGUL: &str = "слог хангыль";

/// запись пары: декомпозиция (base, combiner) и кодпоинт, получаемый композицией;
/// order = 0 - пара не собирается обратно.
/// порядок полей задаёт порядок сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairEntry
{
    pub base: u32,
    pub combiner: u32,
    pub order: u32,
}

/// таблицы канонических декомпозиций
///
/// значение dm кодпоинта:
///     0 - нет декомпозиции,
///     1 ..= синглтоны плоскости 0, затем синглтоны плоскости 2,
///     далее - пары в порядке сортировки: сначала 32-битные, затем 64-битные
#[derive(Debug, Clone)]
pub struct Decompositions
{
    /// синглтоны плоскости 0 (младшие 16 бит)
    pub singletons_p0: Vec<u16>,
    /// синглтоны плоскости 2 (младшие 16 бит)
    pub singletons_p2: Vec<u16>,
    /// все пары в порядке сортировки
    pub pairs: Vec<PairEntry>,
    pub pairs_u32: Vec<u32>,
    pub pairs_u64: Vec<u64>,
    /// значение dm для каждого кодпоинта
    pub dm: Vec<u32>,
    pub stats: EncodeStats,
}

impl Decompositions
{
    pub fn build(records: &[CharacterRecord]) -> Result<Self>
    {
        let mut stats = EncodeStats::new();

        let mut singletons = BTreeSet::new();
        let mut pairs = vec![];

        for record in records {
            if record.is_canonical_decomposition() && !passes(DECOMPOSITION_FILTERS, record) {
                stats.touch(STATS_HANGUL).inc(record.code);
            }

            if !passes(DECOMPOSITION_FILTERS, record) {
                continue;
            }

            match record.decomposition.as_slice() {
                &[target] => {
                    match plane(target) {
                        0 => stats.touch(STATS_SINGLETON_P0).inc(record.code),
                        2 => stats.touch(STATS_SINGLETON_P2).inc(record.code),
                        _ => {
                            return Err(Error::DecompositionPlane {
                                code: record.code,
                                target,
                            })
                        }
                    }

                    singletons.insert(target);
                }
                &[base, combiner] => {
                    pairs.push((pair_entry(records, record.code, base, combiner), record.code));
                }
                decomposition => {
                    return Err(Error::DecompositionArity {
                        code: record.code,
                        len: decomposition.len(),
                    })
                }
            }
        }

        // плоскость 0 идёт раньше плоскости 2, т.к. синглтоны отсортированы
        let singletons: Vec<u32> = singletons.into_iter().collect();

        let singletons_p0 = singletons
            .iter()
            .filter(|&&c| plane(c) == 0)
            .map(|&c| plane_offset(c))
            .collect();

        let singletons_p2 = singletons
            .iter()
            .filter(|&&c| plane(c) == 2)
            .map(|&c| plane_offset(c))
            .collect();

        pairs.sort();

        let mut pairs_u32 = vec![];
        let mut pairs_u64 = vec![];

        for (entry, code) in pairs.iter() {
            if entry.order != 0 {
                stats.touch(STATS_RECOMPOSABLE).inc(*code);
            }

            match self::u32::encode(entry) {
                Some(value) => {
                    // поиск по dm рассчитывает, что все 32-битные пары идут до 64-битных
                    if !pairs_u64.is_empty() {
                        return Err(Error::PairOrder {
                            base: entry.base,
                            combiner: entry.combiner,
                        });
                    }

                    stats.touch(STATS_PAIR_U32).inc(*code);
                    pairs_u32.push(value);
                }
                None => {
                    stats.touch(STATS_PAIR_U64).inc(*code);
                    pairs_u64.push(self::u64::encode(entry));
                }
            }
        }

        // dm_order: 0 - нет декомпозиции, синглтоны, затем пары
        let mut singleton_order = HashMap::new();
        for (i, &target) in singletons.iter().enumerate() {
            singleton_order.insert(target, i as u32 + 1);
        }

        let pairs_start = 1 + singletons.len() as u32;
        let mut pair_order = HashMap::new();
        for (i, (entry, _)) in pairs.iter().enumerate() {
            pair_order.insert((entry.base, entry.combiner), pairs_start + i as u32);
        }

        let mut dm = vec![0; records.len()];

        for (entry, code) in pairs.iter() {
            dm[*code as usize] = pair_order[&(entry.base, entry.combiner)];
        }

        for record in records.iter().filter(|r| passes(DECOMPOSITION_FILTERS, r)) {
            if let &[target] = record.decomposition.as_slice() {
                dm[record.code as usize] = singleton_order[&target];
            }
        }

        let decompositions = Self {
            singletons_p0,
            singletons_p2,
            pairs: pairs.into_iter().map(|(entry, _)| entry).collect(),
            pairs_u32,
            pairs_u64,
            dm,
            stats,
        };

        decompositions.verify(records)?;

        Ok(decompositions)
    }

    /// декомпозиция по значению dm; None - значение за пределами таблиц
    pub fn decompose(&self, dm: u32) -> Option<Vec<u32>>
    {
        if dm == 0 {
            return Some(vec![]);
        }

        let mut i = dm as usize - 1;

        if i < self.singletons_p0.len() {
            return Some(vec![self.singletons_p0[i] as u32]);
        }
        i -= self.singletons_p0.len();

        if i < self.singletons_p2.len() {
            return Some(vec![0x20000 | self.singletons_p2[i] as u32]);
        }
        i -= self.singletons_p2.len();

        let entry = match i < self.pairs_u32.len() {
            true => self::u32::decode(self.pairs_u32[i]),
            false => self::u64::decode(*self.pairs_u64.get(i - self.pairs_u32.len())?),
        };

        Some(vec![entry.base, entry.combiner])
    }

    /// композиция пары; None, если пара не собирается
    pub fn compose(&self, base: u32, combiner: u32) -> Option<u32>
    {
        let order = match self::u32::key(base, combiner) {
            Some(key) => {
                let index = self
                    .pairs_u32
                    .binary_search_by(|probe| (probe & self::u32::KEY_MASK).cmp(&key))
                    .ok()?;

                self::u32::decode(self.pairs_u32[index]).order
            }
            None => {
                let key = self::u64::key(base, combiner);
                let index = self
                    .pairs_u64
                    .binary_search_by(|probe| (probe & self::u64::KEY_MASK).cmp(&key))
                    .ok()?;

                self::u64::decode(self.pairs_u64[index]).order
            }
        };

        match order {
            0 => None,
            order => Some(order),
        }
    }

    /// проверка: запечённые пары и значения dm раскодируются в исходные данные
    fn verify(&self, records: &[CharacterRecord]) -> Result<()>
    {
        let packed = self
            .pairs_u32
            .iter()
            .map(|&v| self::u32::decode(v))
            .chain(self.pairs_u64.iter().map(|&v| self::u64::decode(v)));

        for (entry, decoded) in self.pairs.iter().zip(packed) {
            let recomposed = self.compose(entry.base, entry.combiner).unwrap_or(0);

            if *entry != decoded || recomposed != entry.order {
                return Err(Error::PairEncoding {
                    base: entry.base,
                    combiner: entry.combiner,
                    order: entry.order,
                });
            }
        }

        for record in records.iter().filter(|r| passes(DECOMPOSITION_FILTERS, r)) {
            let decoded = self.decompose(self.dm[record.code as usize]);

            if decoded.as_ref() != Some(&record.decomposition) {
                debug!("U+{:04X}: {:X?} != {:X?}", record.code, decoded, record.decomposition);

                return Err(Error::PairEncoding {
                    base: record.decomposition[0],
                    combiner: record.decomposition.get(1).copied().unwrap_or(0),
                    order: record.code,
                });
            }
        }

        Ok(())
    }
}

/// запись пары; кодпоинт собирается обратно, только если он - стартер и не исключение композиции
fn pair_entry(records: &[CharacterRecord], code: u32, base: u32, combiner: u32) -> PairEntry
{
    let record = &records[code as usize];

    let order = match record.ccc == 0 && !record.composition_exclusion {
        true => code,
        false => 0,
    };

    PairEntry {
        base,
        combiner,
        order,
    }
}
