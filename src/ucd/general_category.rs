use crate::error::{Error, Result};

macro_rules! general_categories {
    ($($variant:ident),+ $(,)?) => {
        /// общая категория (General_Category); порядок вариантов - порядок индексов в таблице
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum GeneralCategory
        {
            $($variant,)+
        }

        impl GeneralCategory
        {
            pub const ALL: &'static [GeneralCategory] = &[$(GeneralCategory::$variant,)+];

            /// разбор сокращённого названия категории (Lu, Mn, ...)
            pub fn from_abbr(abbr: &str) -> Result<Self>
            {
                Self::ALL
                    .iter()
                    .find(|gc| gc.abbr() == abbr)
                    .copied()
                    .ok_or_else(|| Error::load(format!("unknown general category '{}'", abbr)))
            }

            pub fn abbr(&self) -> &'static str
            {
                match self {
                    $(GeneralCategory::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

general_categories!(
    Cc, Cf, Cn, Co, Cs, Ll, Lm, Lo, Lt, Lu, Mc, Me, Mn, Nd, Nl, No, Pc, Pd, Pe, Pf, Pi, Po, Ps, Sc,
    Sk, Sm, So, Zl, Zp, Zs,
);

impl GeneralCategory
{
    /// неназначенный кодпоинт
    pub const UNASSIGNED: GeneralCategory = GeneralCategory::Cn;

    /// индекс категории в таблице
    pub fn index(&self) -> u32
    {
        *self as u32
    }
}

impl Default for GeneralCategory
{
    fn default() -> Self
    {
        Self::UNASSIGNED
    }
}
