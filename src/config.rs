use std::path::{Path, PathBuf};

use pico_args::Arguments;

/// файл объявлений письменностей по умолчанию
pub const DEFAULT_DECLARATIONS: &str = "hb-common.h";

pub const HELP: &str = "\
Usage: ucd_table_bakery <ucd.nounihan.grouped.xml> [/path/to/hb-common.h]
  -h, --help            Prints help information

The generated tables are written to standard output.

Download ucd.nounihan.grouped.xml at:
  https://www.unicode.org/Public/UCD/latest/ucdxml/ucd.nounihan.grouped.zip
";

/// параметры запуска
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeConfig
{
    /// репертуар UCD (XML)
    pub ucd: PathBuf,
    /// файл с объявлениями HB_SCRIPT_*
    pub declarations: PathBuf,
}

/// что делать с командной строкой
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation
{
    Bake(BakeConfig),
    Help,
    /// неверное количество аргументов
    Usage,
}

impl Invocation
{
    pub fn parse(mut args: Arguments) -> Self
    {
        if args.contains(["-h", "--help"]) {
            return Self::Help;
        }

        let free: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();

        match free.as_slice() {
            [ucd] => Self::Bake(BakeConfig {
                ucd: ucd.clone(),
                declarations: PathBuf::from(DEFAULT_DECLARATIONS),
            }),
            [ucd, declarations] => Self::Bake(BakeConfig {
                ucd: ucd.clone(),
                declarations: declarations.clone(),
            }),
            _ => Self::Usage,
        }
    }
}

impl BakeConfig
{
    /// строка запуска для заголовка сгенерированного файла
    pub fn invocation(&self) -> String
    {
        let name = self
            .ucd
            .file_name()
            .map(Path::new)
            .unwrap_or(self.ucd.as_path());

        format!("./ucd_table_bakery {}", name.display())
    }
}

#[cfg(test)]
mod tests
{
    use std::ffi::OsString;

    use super::*;

    fn parse(args: &[&str]) -> Invocation
    {
        Invocation::parse(Arguments::from_vec(args.iter().map(OsString::from).collect()))
    }

    #[test]
    fn test_default_declarations()
    {
        assert_eq!(
            parse(&["ucd.nounihan.grouped.xml"]),
            Invocation::Bake(BakeConfig {
                ucd: PathBuf::from("ucd.nounihan.grouped.xml"),
                declarations: PathBuf::from("hb-common.h"),
            })
        );
    }

    #[test]
    fn test_declarations_override()
    {
        assert_eq!(
            parse(&["ucd.xml", "src/hb-common.h"]),
            Invocation::Bake(BakeConfig {
                ucd: PathBuf::from("ucd.xml"),
                declarations: PathBuf::from("src/hb-common.h"),
            })
        );
    }

    #[test]
    fn test_usage()
    {
        assert_eq!(parse(&[]), Invocation::Usage);
        assert_eq!(parse(&["a", "b", "c"]), Invocation::Usage);
    }

    #[test]
    fn test_help()
    {
        assert_eq!(parse(&["-h"]), Invocation::Help);
        assert_eq!(parse(&["ucd.xml", "--help"]), Invocation::Help);
    }

    #[test]
    fn test_invocation()
    {
        let config = BakeConfig {
            ucd: PathBuf::from("/tmp/ucd/ucd.nounihan.grouped.xml"),
            declarations: PathBuf::from(DEFAULT_DECLARATIONS),
        };

        assert_eq!(config.invocation(), "./ucd_table_bakery ucd.nounihan.grouped.xml");
    }
}
