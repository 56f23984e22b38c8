use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    /// объявление письменности: HB_SCRIPT_LATIN = HB_TAG ('L','a','t','n'),
    static ref SCRIPT_DECLARATION: Regex =
        Regex::new(r"\b(HB_SCRIPT_[_A-Z]*).*HB_TAG [(]'(.)','(.)','(.)','(.)'[)]").unwrap();
}

/// порядок письменностей, определённый файлом объявлений
#[derive(Debug, Default, Clone)]
pub struct ScriptOrder
{
    /// идентификаторы письменностей в порядке появления
    pub names: Vec<String>,
    /// теги в порядке появления
    pub tags: Vec<String>,
    index: HashMap<String, u32>,
}

impl ScriptOrder
{
    /// прочитать объявления из файла
    pub fn load(path: &Path) -> Result<Self>
    {
        let source = fs::read_to_string(path)?;
        let order = Self::parse(&source);

        if order.is_empty() {
            return Err(Error::NoScriptDeclarations {
                path: path.to_path_buf(),
            });
        }

        Ok(order)
    }

    /// по одной паре (идентификатор, тег) с каждой подходящей строки
    pub fn parse(source: &str) -> Self
    {
        let mut order = Self::default();

        for line in source.lines() {
            let captures = match SCRIPT_DECLARATION.captures(line) {
                Some(captures) => captures,
                None => continue,
            };

            let name = captures[1].to_owned();
            let tag: String = (2 ..= 5).map(|i| &captures[i]).collect();

            // при повторе тега остаётся последний индекс
            order.index.insert(tag.clone(), order.names.len() as u32);

            order.names.push(name);
            order.tags.push(tag);
        }

        order
    }

    /// индекс письменности по тегу
    pub fn index(&self, tag: &str) -> Option<u32>
    {
        self.index.get(tag).copied()
    }

    pub fn len(&self) -> usize
    {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.names.is_empty()
    }
}
