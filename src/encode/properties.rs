use crate::encode::decomposition::Decompositions;
use crate::encode::scripts::ScriptOrder;
use crate::encode::Dataset;
use crate::error::{Error, Result};
use crate::ucd::{CharacterRecord, GeneralCategory, UNKNOWN_SCRIPT};

/// потоки свойств, которые пакуются в таблицы
#[derive(Debug, Clone)]
pub struct PropertyStreams
{
    /// General_Category, индекс категории
    pub gc: Dataset,
    /// Canonical_Combining_Class
    pub ccc: Dataset,
    /// Bidi_Mirroring_Glyph, разница с кодпоинтом
    pub bmg: Dataset,
    /// Script, индекс письменности
    pub sc: Dataset,
    /// индекс декомпозиции
    pub dm: Dataset,
}

impl PropertyStreams
{
    pub fn extract(
        records: &[CharacterRecord],
        scripts: &ScriptOrder,
        decompositions: &Decompositions,
    ) -> Result<Self>
    {
        Ok(Self {
            gc: general_category(records),
            ccc: ccc(records),
            bmg: bmg(records),
            sc: sc(records, scripts)?,
            dm: Dataset::new(
                "dm",
                decompositions.dm.iter().map(|&v| v as i32).collect(),
                0,
            ),
        })
    }

    /// потоки в порядке записи в таблицы
    pub fn datasets(&self) -> [&Dataset; 5]
    {
        [&self.gc, &self.ccc, &self.bmg, &self.sc, &self.dm]
    }
}

fn general_category(records: &[CharacterRecord]) -> Dataset
{
    Dataset::new(
        "gc",
        records
            .iter()
            .map(|r| r.general_category.index() as i32)
            .collect(),
        GeneralCategory::UNASSIGNED.index() as i32,
    )
}

fn ccc(records: &[CharacterRecord]) -> Dataset
{
    Dataset::new("ccc", records.iter().map(|r| r.ccc as i32).collect(), 0)
}

/// разница между зеркальным кодпоинтом и самим кодпоинтом; 0 - зеркального нет
fn bmg(records: &[CharacterRecord]) -> Dataset
{
    Dataset::new(
        "bmg",
        records
            .iter()
            .map(|r| match r.mirroring {
                Some(mirroring) => mirroring as i32 - r.code as i32,
                None => 0,
            })
            .collect(),
        0,
    )
}

fn sc(records: &[CharacterRecord], scripts: &ScriptOrder) -> Result<Dataset>
{
    let values = records
        .iter()
        .map(|r| match scripts.index(&r.script) {
            Some(index) => Ok(index as i32),
            None => Err(Error::UndeclaredScript {
                tag: r.script.clone(),
                code: Some(r.code),
            }),
        })
        .collect::<Result<Vec<i32>>>()?;

    let default = scripts
        .index(UNKNOWN_SCRIPT)
        .ok_or_else(|| Error::UndeclaredScript {
            tag: UNKNOWN_SCRIPT.to_owned(),
            code: None,
        })?;

    Ok(Dataset::new("sc", values, default as i32))
}
