use std::collections::HashMap;

use crate::encode::Dataset;

pub mod profile;


/// минимальный размер блока ступени - 2^MIN_SHIFT
const MIN_SHIFT: u32 = 2;
/// максимальный размер блока ступени - 2^MAX_SHIFT
const MAX_SHIFT: u32 = 8;

/// уровень сжатия 1 ..= 9: чем выше, тем больше ступеней допускается
/// и тем дешевле каждый дополнительный поиск
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compression(u8);

impl Compression
{
    pub fn new(level: u8) -> Self
    {
        assert!((1 ..= 9).contains(&level));

        Self(level)
    }

    pub fn level(&self) -> u8
    {
        self.0
    }

    /// максимальное количество ступеней
    fn max_stages(&self) -> usize
    {
        2 + (self.0 as usize - 1) / 3
    }

    /// цена одного дополнительного поиска, в байтах
    fn lookup_weight(&self) -> usize
    {
        1 << (2 * (9 - self.0 as usize))
    }
}

/// целочисленный тип элементов ступени
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntType
{
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
}

impl IntType
{
    /// самый узкий тип, в который помещаются значения
    pub fn fit(values: &[i64]) -> Self
    {
        let min = values.iter().min().copied().unwrap_or(0);
        let max = values.iter().max().copied().unwrap_or(0);

        if min >= 0 {
            return match max {
                ..= 0xFF => Self::U8,
                ..= 0xFFFF => Self::U16,
                _ => Self::U32,
            };
        }

        if min >= -0x80 && max <= 0x7F {
            return Self::I8;
        }

        match min >= -0x8000 && max <= 0x7FFF {
            true => Self::I16,
            false => Self::I32,
        }
    }

    pub fn size(&self) -> usize
    {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
        }
    }

    /// имя типа в сгенерированном коде
    pub fn c_name(&self) -> &'static str
    {
        match self {
            Self::U8 => "uint8_t",
            Self::I8 => "int8_t",
            Self::U16 => "uint16_t",
            Self::I16 => "int16_t",
            Self::U32 => "uint32_t",
            Self::I32 => "int32_t",
        }
    }
}

/// ступень таблицы: значение = values[предыдущее значение + ((u >> shift) & mask)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage
{
    pub values: Vec<i64>,
    pub shift: u32,
    pub mask: usize,
    pub int_type: IntType,
}

impl Stage
{
    fn new(values: Vec<i64>, shift: u32, mask: usize) -> Self
    {
        let int_type = IntType::fit(&values);

        Self {
            values,
            shift,
            mask,
            int_type,
        }
    }

    pub fn size(&self) -> usize
    {
        self.values.len() * self.int_type.size()
    }

    /// первая ступень индексируется самим кодпоинтом
    pub fn is_top(&self) -> bool
    {
        self.mask == usize::MAX
    }
}

/// упакованный поток свойства: многоступенчатая таблица.
/// кодпоинты от len и выше (хвост из значений по умолчанию) в таблицу не попадают
#[derive(Debug, Clone)]
pub struct PackedTable
{
    pub name: &'static str,
    pub default: i64,
    pub len: usize,
    /// от первой (индекс по старшим битам) до последней (значения)
    pub stages: Vec<Stage>,
    /// размер + цена поисков
    pub full_cost: usize,
}

impl PackedTable
{
    /// упаковать поток, перебрав размеры блоков в пределах уровня сжатия
    pub fn pack(dataset: &Dataset, compression: Compression) -> Self
    {
        let default = dataset.default as i64;

        let len = dataset
            .values
            .iter()
            .rposition(|&v| v as i64 != default)
            .map_or(0, |p| p + 1);

        let values: Vec<i64> = dataset.values[.. len].iter().map(|&v| v as i64).collect();

        let (full_cost, stages) = match values.is_empty() {
            true => (0, vec![]),
            false => best_stages(&values, 0, compression.max_stages() - 1, compression),
        };

        let table = Self {
            name: dataset.name,
            default,
            len,
            stages,
            full_cost,
        };

        table.verify(dataset);

        table
    }

    /// значение для кодпоинта
    pub fn get(&self, code: usize) -> i64
    {
        if code >= self.len {
            return self.default;
        }

        let mut value = 0;

        for stage in &self.stages {
            value = stage.values[value as usize + ((code >> stage.shift) & stage.mask)];
        }

        value
    }

    /// тип значений таблицы
    pub fn int_type(&self) -> IntType
    {
        match self.stages.last() {
            Some(stage) => stage.int_type,
            None => IntType::fit(&[self.default]),
        }
    }

    /// размер в байтах
    pub fn size(&self) -> usize
    {
        self.stages.iter().map(|s| s.size()).sum()
    }

    /// проверка: таблица возвращает исходные значения для всех кодпоинтов
    fn verify(&self, dataset: &Dataset)
    {
        for (code, &expected) in dataset.values.iter().enumerate() {
            assert_eq!(
                expected as i64,
                self.get(code),
                "{}: packed table check failed for U+{:04X}",
                self.name,
                code
            );
        }
    }
}

/// лучшая (по цене) раскладка values в ступени; levels - сколько раз ещё можно разбить массив
fn best_stages(
    values: &[i64],
    shift: u32,
    levels: usize,
    compression: Compression,
) -> (usize, Vec<Stage>)
{
    let top = Stage::new(values.to_vec(), shift, usize::MAX);
    let mut best = (top.size(), vec![top]);

    if levels == 0 {
        return best;
    }

    for block_shift in MIN_SHIFT ..= MAX_SHIFT {
        let block_size = 1 << block_shift;

        if block_size >= values.len() {
            break;
        }

        let (compressed, offsets) = split(values, block_size);
        let stage = Stage::new(compressed, shift, block_size - 1);

        let (upper_cost, mut upper) =
            best_stages(&offsets, shift + block_shift, levels - 1, compression);

        let cost = stage.size() + compression.lookup_weight() + upper_cost;

        if cost < best.0 {
            upper.push(stage);
            best = (cost, upper);
        }
    }

    best
}

/// разбить массив на блоки: одинаковые блоки хранятся один раз,
/// новый блок накладывается на совпадающий хвост уже записанных данных
fn split(values: &[i64], block_size: usize) -> (Vec<i64>, Vec<i64>)
{
    let mut cache: HashMap<&[i64], i64> = HashMap::new();
    let mut compressed = vec![];
    let mut offsets = vec![];

    for block in values.chunks(block_size) {
        let offset = *cache.entry(block).or_insert_with(|| {
            let overlap = measure_overlap(&compressed, block);
            compressed.extend_from_slice(&block[overlap ..]);

            (compressed.len() - block.len()) as i64
        });

        offsets.push(offset);
    }

    (compressed, offsets)
}

/// длина совпадения конца prev с началом next
fn measure_overlap(prev: &[i64], next: &[i64]) -> usize
{
    (0 .. prev.len().min(next.len()))
        .rev()
        .find(|&i| prev[prev.len() - i ..] == next[.. i])
        .unwrap_or(0)
}
