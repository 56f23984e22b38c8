use tracing::info;

use super::{Compression, PackedTable};
use crate::encode::properties::PropertyStreams;
use crate::encode::Dataset;

/// размер блока, в пределах которого сглаживаются неназначенные значения
pub const SLOPPY_BLOCK_SIZE: usize = 128;

/// вариант таблиц: компромисс между размером и точностью
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionProfile
{
    /// умеренное сжатие, точные значения
    Default,
    /// максимальное сжатие, точные значения
    Compact,
    /// максимальное сжатие, неназначенные gc / sc заменены соседними значениями
    Sloppy,
}

impl CompressionProfile
{
    /// порядок записи вариантов в файл
    pub const ALL: [CompressionProfile; 3] = [Self::Default, Self::Compact, Self::Sloppy];

    pub fn compression(&self) -> Compression
    {
        match self {
            Self::Default => Compression::new(5),
            Self::Compact | Self::Sloppy => Compression::new(9),
        }
    }

    /// теряются ли точные значения неназначенных кодпоинтов
    pub fn is_lossy(&self) -> bool
    {
        *self == Self::Sloppy
    }
}

/// упакованные таблицы одного варианта
#[derive(Debug, Clone)]
pub struct ProfileTables
{
    pub profile: CompressionProfile,
    /// gc, ccc, bmg, sc, dm
    pub tables: Vec<PackedTable>,
}

impl ProfileTables
{
    pub fn build(profile: CompressionProfile, streams: &PropertyStreams) -> Self
    {
        let compression = profile.compression();

        info!("  compression={}:", compression.level());

        let tables = streams
            .datasets()
            .iter()
            .map(|&dataset| {
                let table = match profile.is_lossy() && is_smoothed(dataset) {
                    true => PackedTable::pack(&smoothed(dataset), compression),
                    false => PackedTable::pack(dataset, compression),
                };

                info!("      dataset={:<8} full_cost={}", table.name, table.full_cost);

                table
            })
            .collect();

        Self { profile, tables }
    }

    pub fn size(&self) -> usize
    {
        self.tables.iter().map(|t| t.size()).sum()
    }
}

/// все три варианта, независимо друг от друга
pub fn pack_profiles(streams: &PropertyStreams) -> Vec<ProfileTables>
{
    CompressionProfile::ALL
        .iter()
        .map(|&profile| ProfileTables::build(profile, streams))
        .collect()
}

/// сглаживаются только общая категория и письменность
fn is_smoothed(dataset: &Dataset) -> bool
{
    matches!(dataset.name, "gc" | "sc")
}

fn smoothed(dataset: &Dataset) -> Dataset
{
    let mut values = dataset.values.clone();

    fill_forward(&mut values, dataset.default);
    fill_backward(&mut values, dataset.default);

    Dataset::new(dataset.name, values, dataset.default)
}

/// неназначенное значение берётся у предыдущего кодпоинта того же блока;
/// первый кодпоинт блока не заполняется
pub fn fill_forward(values: &mut [i32], unassigned: i32)
{
    for i in 0 .. values.len() {
        if i % SLOPPY_BLOCK_SIZE != 0 && values[i] == unassigned {
            values[i] = values[i - 1];
        }
    }
}

/// неназначенное значение берётся у следующего кодпоинта того же блока;
/// последний кодпоинт блока не заполняется
pub fn fill_backward(values: &mut [i32], unassigned: i32)
{
    for i in (0 .. values.len().saturating_sub(1)).rev() {
        if (i + 1) % SLOPPY_BLOCK_SIZE != 0 && values[i] == unassigned {
            values[i] = values[i + 1];
        }
    }
}
