pub mod decomposition;
pub mod properties;
pub mod scripts;

/// поток значений свойства - по значению на кодпоинт
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset
{
    pub name: &'static str,
    pub values: Vec<i32>,
    /// значение по умолчанию (нет свойства / не назначен)
    pub default: i32,
}

impl Dataset
{
    pub fn new(name: &'static str, values: Vec<i32>, default: i32) -> Self
    {
        Self {
            name,
            values,
            default,
        }
    }
}
