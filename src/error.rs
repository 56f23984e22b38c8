use std::fmt;
use std::io;
use std::path::PathBuf;

/// ошибка генерации таблиц; любая из них прерывает запуск целиком
#[derive(Debug)]
pub enum Error
{
    /// репертуар отсутствует или повреждён
    Load(String),
    /// декомпозиция длиной не 1 и не 2 кодпоинта
    DecompositionArity
    {
        code: u32,
        len: usize,
    },
    /// синглтон вне плоскостей 0 и 2
    DecompositionPlane
    {
        code: u32,
        target: u32,
    },
    /// короткие записи пар не предшествуют длинным в отсортированном списке
    PairOrder
    {
        base: u32,
        combiner: u32,
    },
    /// запечённая пара не раскодируется в исходные значения
    PairEncoding
    {
        base: u32,
        combiner: u32,
        order: u32,
    },
    /// в файле объявлений не нашлось ни одной письменности
    NoScriptDeclarations
    {
        path: PathBuf,
    },
    /// тег письменности кодпоинта не объявлен
    UndeclaredScript
    {
        tag: String,
        code: Option<u32>,
    },
    Io(io::Error),
}

impl Error
{
    pub fn load(message: impl Into<String>) -> Self
    {
        Self::Load(message.into())
    }
}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::Load(message) => write!(f, "failed to load UCD repertoire: {}", message),
            Self::DecompositionArity { code, len } => write!(
                f,
                "U+{:04X}: canonical decomposition of length {} (only 1 and 2 are encodable)",
                code, len
            ),
            Self::DecompositionPlane { code, target } => write!(
                f,
                "U+{:04X}: singleton decomposition to U+{:04X} outside planes 0 and 2",
                code, target
            ),
            Self::PairOrder { base, combiner } => write!(
                f,
                "pair U+{:04X} U+{:04X} breaks the 32-bit / 64-bit split order",
                base, combiner
            ),
            Self::PairEncoding { base, combiner, order } => write!(
                f,
                "pair U+{:04X} U+{:04X} (order 0x{:04X}) does not survive packing",
                base, combiner, order
            ),
            Self::NoScriptDeclarations { path } => write!(
                f,
                "no script declarations found in {}",
                path.display()
            ),
            Self::UndeclaredScript { tag, code } => match code {
                Some(code) => write!(f, "U+{:04X}: script '{}' is not declared", code, tag),
                None => write!(f, "script '{}' is not declared", tag),
            },
            Self::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error
{
    fn from(err: io::Error) -> Self
    {
        Self::Io(err)
    }
}

impl From<roxmltree::Error> for Error
{
    fn from(err: roxmltree::Error) -> Self
    {
        Self::Load(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
