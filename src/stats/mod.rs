use tracing::{debug, info};

/// статистика, собираемая при кодировании: количество кодпоинтов каждого вида
#[derive(Debug, Clone, Default)]
pub struct EncodeStats
{
    pub blocks: Vec<EncodeStatsBlock>,
}

#[derive(Debug, Clone)]
pub struct EncodeStatsBlock
{
    pub name: String,
    pub codes: Vec<u32>,
}

impl EncodeStats
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// блок статистики по ключу; порядок блоков - порядок первого обращения
    pub fn touch(&mut self, key: impl AsRef<str>) -> &mut EncodeStatsBlock
    {
        let key = key.as_ref();

        let position = match self.blocks.iter().position(|b| b.name == key) {
            Some(position) => position,
            None => {
                self.blocks.push(EncodeStatsBlock {
                    name: key.to_owned(),
                    codes: vec![],
                });
                self.blocks.len() - 1
            }
        };

        &mut self.blocks[position]
    }

    pub fn count(&self, key: impl AsRef<str>) -> usize
    {
        self.blocks
            .iter()
            .find(|b| b.name == key.as_ref())
            .map_or(0, |b| b.codes.len())
    }

    /// вывести статистику в лог
    pub fn log(&self, title: &str)
    {
        info!("{}:", title);

        for block in &self.blocks {
            info!("    {:<28} {}", block.name, self.count(&block.name));
            debug!(
                "    {}: {}",
                block.name,
                block
                    .codes
                    .iter()
                    .map(|c| format!("U+{:04X}", c))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
    }
}

impl EncodeStatsBlock
{
    pub fn inc(&mut self, code: u32)
    {
        self.codes.push(code);
    }
}
