use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::{Error, Result};

pub use general_category::GeneralCategory;

pub mod general_category;

/// количество кодпоинтов Unicode
pub const CODEPOINTS_COUNT: usize = 0x110000;

/// тег письменности для кодпоинтов без письменности
pub const UNKNOWN_SCRIPT: &str = "Zzzz";

const UCD_NAMESPACE: &str = "http://www.unicode.org/ns/2003/ucd/1.0";

/// тип декомпозиции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecompositionType
{
    #[default]
    None,
    Canonical,
    Compatibility,
}

impl DecompositionType
{
    fn parse(dt: &str) -> Self
    {
        match dt {
            "can" => Self::Canonical,
            "" | "none" => Self::None,
            _ => Self::Compatibility,
        }
    }
}

/// свойства одного кодпоинта, прочитанные из UCD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord
{
    pub code: u32,
    pub general_category: GeneralCategory,
    pub ccc: u8,
    /// зеркальный кодпоинт (Bidi_Mirroring_Glyph)
    pub mirroring: Option<u32>,
    /// 4-символьный тег письменности
    pub script: String,
    pub decomposition_type: DecompositionType,
    pub decomposition: Vec<u32>,
    pub composition_exclusion: bool,
}

impl CharacterRecord
{
    /// запись для кодпоинта, не упомянутого в репертуаре
    pub fn unassigned(code: u32) -> Self
    {
        Self {
            code,
            general_category: GeneralCategory::UNASSIGNED,
            ccc: 0,
            mirroring: None,
            script: UNKNOWN_SCRIPT.to_owned(),
            decomposition_type: DecompositionType::None,
            decomposition: vec![],
            composition_exclusion: false,
        }
    }

    pub fn is_canonical_decomposition(&self) -> bool
    {
        self.decomposition_type == DecompositionType::Canonical && !self.decomposition.is_empty()
    }
}

/// репертуар: по одной записи на каждый кодпоинт, индекс записи - кодпоинт
pub struct Repertoire
{
    /// описание файла UCD
    pub description: String,
    pub records: Vec<CharacterRecord>,
}

impl Repertoire
{
    /// прочитать ucd.nounihan.grouped.xml
    pub fn load(path: &Path) -> Result<Self>
    {
        let input = fs::read_to_string(path)
            .map_err(|e| Error::load(format!("{}: {}", path.display(), e)))?;

        Self::parse(&input)
    }

    pub fn parse(input: &str) -> Result<Self>
    {
        let doc = roxmltree::Document::parse(input)?;
        let root = doc.root_element();

        let description = root
            .children()
            .find(|n| n.has_tag_name((UCD_NAMESPACE, "description")))
            .and_then(|n| n.text())
            .unwrap_or_default()
            .to_string();

        let repertoire = root
            .children()
            .find(|n| n.has_tag_name((UCD_NAMESPACE, "repertoire")))
            .ok_or_else(|| Error::load("missing ucd repertoire"))?;

        let mut records: Vec<CharacterRecord> = (0 .. CODEPOINTS_COUNT as u32)
            .map(CharacterRecord::unassigned)
            .collect();

        for node in repertoire.children().filter(|n| n.is_element()) {
            match node.tag_name().name() == "group" {
                true => {
                    let group_attributes = Attributes::extract(&node, &Attributes::DEFAULT);

                    for element in node.children().filter(|n| n.is_element()) {
                        let attributes = Attributes::extract(&element, &group_attributes);
                        attributes.fill(&mut records, range(&element)?)?;
                    }
                }
                false => {
                    let attributes = Attributes::extract(&node, &Attributes::DEFAULT);
                    attributes.fill(&mut records, range(&node)?)?;
                }
            }
        }

        Ok(Self {
            description,
            records,
        })
    }
}

/// атрибуты элемента; отсутствующие наследуются от группы
struct Attributes<'a>
{
    general_category: &'a str,
    ccc: &'a str,
    mirroring: &'a str,
    script: &'a str,
    decomposition_type: &'a str,
    decomposition: &'a str,
    composition_exclusion: &'a str,
}

impl<'a> Attributes<'a>
{
    const DEFAULT: Attributes<'static> = Attributes {
        general_category: "Cn",
        ccc: "0",
        mirroring: "",
        script: UNKNOWN_SCRIPT,
        decomposition_type: "none",
        decomposition: "#",
        composition_exclusion: "N",
    };

    fn extract(node: &'a roxmltree::Node, default: &Attributes<'a>) -> Self
    {
        Self {
            general_category: node.attribute("gc").unwrap_or(default.general_category),
            ccc: node.attribute("ccc").unwrap_or(default.ccc),
            mirroring: node.attribute("bmg").unwrap_or(default.mirroring),
            script: node.attribute("sc").unwrap_or(default.script),
            decomposition_type: node.attribute("dt").unwrap_or(default.decomposition_type),
            decomposition: node.attribute("dm").unwrap_or(default.decomposition),
            composition_exclusion: node
                .attribute("Comp_Ex")
                .unwrap_or(default.composition_exclusion),
        }
    }

    /// заполнить записи диапазона кодпоинтов
    fn fill(&self, records: &mut [CharacterRecord], range: RangeInclusive<u32>) -> Result<()>
    {
        let general_category = GeneralCategory::from_abbr(self.general_category)?;

        let ccc = self
            .ccc
            .parse::<u8>()
            .map_err(|_| Error::load(format!("bad ccc '{}' at U+{:04X}", self.ccc, range.start())))?;

        let mirroring = match self.mirroring.is_empty() {
            true => None,
            false => Some(parse_code(self.mirroring)?),
        };

        // "#" - кодпоинт отображается сам в себя
        let decomposition = match self.decomposition {
            "" | "#" => vec![],
            dm => dm.split_whitespace().map(parse_code).collect::<Result<Vec<u32>>>()?,
        };

        for code in range {
            records[code as usize] = CharacterRecord {
                code,
                general_category,
                ccc,
                mirroring,
                script: self.script.to_owned(),
                decomposition_type: DecompositionType::parse(self.decomposition_type),
                decomposition: decomposition.clone(),
                composition_exclusion: self.composition_exclusion == "Y",
            };
        }

        Ok(())
    }
}

fn parse_code(hex: &str) -> Result<u32>
{
    let code = u32::from_str_radix(hex, 16)
        .map_err(|_| Error::load(format!("bad codepoint '{}'", hex)))?;

    match (code as usize) < CODEPOINTS_COUNT {
        true => Ok(code),
        false => Err(Error::load(format!("codepoint '{}' out of range", hex))),
    }
}

/// кодпоинт (cp) или диапазон (first-cp, last-cp) элемента
fn range(node: &roxmltree::Node) -> Result<RangeInclusive<u32>>
{
    if let Some(cp) = node.attribute("cp") {
        let code = parse_code(cp)?;
        return Ok(code ..= code);
    }

    match (node.attribute("first-cp"), node.attribute("last-cp")) {
        (Some(first), Some(last)) => Ok(parse_code(first)? ..= parse_code(last)?),
        _ => Err(Error::load(format!(
            "<{}> without codepoint",
            node.tag_name().name()
        ))),
    }
}
