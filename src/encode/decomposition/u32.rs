use super::PairEntry;
use crate::blocking_checks;

/// маска ключа (base, combiner) в записи
pub const KEY_MASK: u32 = 0xFFFF_C000;

/// пара в 32 битах (HB_CODEPOINT_ENCODE3_11_7_14):
///
/// bbbb bbbb  bbbc cccc    ccoo oooo  oooo oooo
///
/// где:
///     b.. - (11 бит) - первый кодпоинт, < 0x0800
///     c.. - (7 бит) - второй кодпоинт, смещение от 0x0300
///     o.. - (14 бит) - кодпоинт, получаемый при композиции
///
/// None, если пара не помещается в 32 бита
pub fn encode(entry: &PairEntry) -> Option<u32>
{
    blocking_checks!(
        (entry.base & 0xFFFF_F800) != 0,
        (entry.combiner & 0xFFFF_FF80) != 0x0300,
        (entry.order & 0xFFF0_C000) != 0
    );

    Some(((entry.base & 0x07FF) << 21) | ((entry.combiner & 0x007F) << 14) | (entry.order & 0x3FFF))
}

pub fn decode(value: u32) -> PairEntry
{
    PairEntry {
        base: value >> 21,
        combiner: 0x0300 + ((value >> 14) & 0x7F),
        order: value & 0x3FFF,
    }
}

/// ключ для поиска пары; None, если пара не может храниться в 32 битах
pub fn key(base: u32, combiner: u32) -> Option<u32>
{
    encode(&PairEntry {
        base,
        combiner,
        order: 0,
    })
}
