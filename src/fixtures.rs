//! небольшой синтетический репертуар для тестов

use crate::ucd::{CharacterRecord, DecompositionType, GeneralCategory, CODEPOINTS_COUNT};

pub const DECLARATIONS: &str = r#"
typedef enum
{
  HB_SCRIPT_COMMON			= HB_TAG ('Z','y','y','y'),
  HB_SCRIPT_INHERITED			= HB_TAG ('Z','i','n','h'),
  HB_SCRIPT_UNKNOWN			= HB_TAG ('Z','z','z','z'),

  HB_SCRIPT_ARABIC			= HB_TAG ('A','r','a','b'),
  /*1.1*/ HB_SCRIPT_LATIN		= HB_TAG ('L','a','t','n'),

  /* No script set. */
  HB_SCRIPT_INVALID			= HB_TAG_NONE,
  _HB_SCRIPT_MAX_VALUE			= HB_TAG_MAX_SIGNED,
} hb_script_t;
"#;

pub fn unassigned_records() -> Vec<CharacterRecord>
{
    (0 .. CODEPOINTS_COUNT as u32)
        .map(CharacterRecord::unassigned)
        .collect()
}

pub fn assign(
    records: &mut [CharacterRecord],
    code: u32,
    gc: GeneralCategory,
    ccc: u8,
    script: &str,
)
{
    let record = &mut records[code as usize];

    record.general_category = gc;
    record.ccc = ccc;
    record.script = script.to_owned();
}

pub fn decompose(records: &mut [CharacterRecord], code: u32, mapping: &[u32])
{
    let record = &mut records[code as usize];

    record.decomposition_type = DecompositionType::Canonical;
    record.decomposition = mapping.to_vec();
}

/// латиница с комбинируемыми знаками, скобки, синглтоны обеих плоскостей, хангыль
pub fn sample_records() -> Vec<CharacterRecord>
{
    use GeneralCategory::*;

    let mut records = unassigned_records();

    for code in [0x41, 0xC0, 0xC1, 0xC5, 0x1E00, 0x212B] {
        assign(&mut records, code, Lu, 0, "Latn");
    }

    for code in [0x300, 0x301, 0x308, 0x30A, 0x325, 0x344] {
        assign(&mut records, code, Mn, 230, "Zinh");
    }
    records[0x325].ccc = 220;

    assign(&mut records, 0x28, Ps, 0, "Zyyy");
    assign(&mut records, 0x29, Pe, 0, "Zyyy");
    records[0x28].mirroring = Some(0x29);
    records[0x29].mirroring = Some(0x28);

    assign(&mut records, 0x627, Lo, 0, "Arab");

    for code in [0x958, 0x1109A, 0x2F800, 0x2F81C, 0xAC00] {
        assign(&mut records, code, Lo, 0, "Zyyy");
    }

    decompose(&mut records, 0xC0, &[0x41, 0x300]);
    decompose(&mut records, 0xC1, &[0x41, 0x301]);
    decompose(&mut records, 0xC5, &[0x41, 0x30A]);
    decompose(&mut records, 0x1E00, &[0x41, 0x325]);
    decompose(&mut records, 0x212B, &[0xC5]);
    decompose(&mut records, 0x344, &[0x308, 0x301]);
    records[0x344].composition_exclusion = true;

    decompose(&mut records, 0x958, &[0x915, 0x93C]);
    records[0x958].composition_exclusion = true;
    decompose(&mut records, 0x1109A, &[0x11099, 0x110BA]);

    decompose(&mut records, 0x2F800, &[0x4E3D]);
    decompose(&mut records, 0x2F81C, &[0x2051C]);

    // слоги хангыль раскладываются алгоритмически
    decompose(&mut records, 0xAC00, &[0x1100, 0x1161]);

    records
}
