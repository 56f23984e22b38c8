/// первый слог хангыль
pub const HANGUL_SYLLABLES_FIRST: u32 = 0xAC00;
/// количество слогов хангыль
pub const HANGUL_SYLLABLES_COUNT: u32 = 11172;

/// слог хангыль - декомпозиция вычисляется алгоритмически
pub fn is_hangul_syllable(code: u32) -> bool
{
    (HANGUL_SYLLABLES_FIRST .. HANGUL_SYLLABLES_FIRST + HANGUL_SYLLABLES_COUNT).contains(&code)
}

/// плоскость Unicode
pub fn plane(code: u32) -> u32
{
    code >> 16
}

/// младшие 16 бит кодпоинта (позиция внутри плоскости)
pub fn plane_offset(code: u32) -> u16
{
    (code & 0xFFFF) as u16
}
