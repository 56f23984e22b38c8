use super::PairEntry;

/// маска ключа (base, combiner) в записи
pub const KEY_MASK: u64 = !0x1F_FFFF;

const FIELD_MASK: u64 = 0x1F_FFFF;

/// пара в 64 битах (HB_CODEPOINT_ENCODE3), по 21 биту на поле:
///
/// ____ ____  ____ ____    ____ ____  __bb bbbb    bbbb bbbb  bbbb bbbc    cccc cccc  cccc cccc
/// cccc oooo  oooo oooo    oooo oooo  oooo oooo
///
/// (старшие биты слева)
///
/// где:
///     b.. - первый кодпоинт
///     c.. - второй кодпоинт
///     o.. - кодпоинт, получаемый при композиции, 0 - не комбинируется
pub fn encode(entry: &PairEntry) -> u64
{
    ((entry.base as u64) << 42) | ((entry.combiner as u64) << 21) | (entry.order as u64)
}

pub fn decode(value: u64) -> PairEntry
{
    PairEntry {
        base: ((value >> 42) & FIELD_MASK) as u32,
        combiner: ((value >> 21) & FIELD_MASK) as u32,
        order: (value & FIELD_MASK) as u32,
    }
}

pub fn key(base: u32, combiner: u32) -> u64
{
    encode(&PairEntry {
        base,
        combiner,
        order: 0,
    })
}
