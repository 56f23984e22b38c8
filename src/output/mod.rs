use std::fmt::{self, Display, Write};

use indoc::writedoc;

use crate::encode::decomposition::{self as dm, Decompositions, PairEntry};
use crate::encode::scripts::ScriptOrder;
use crate::tables::profile::{CompressionProfile, ProfileTables};
use crate::tables::PackedTable;

use format::{format_list, hex};

pub mod format;

/// длина строки в файле с подготовленными данными
pub const FORMAT_STRING_LENGTH: usize = 120;

/// префикс имён массивов и функций
pub const PREFIX: &str = "_hb_ucd";

pub const HEADER_GUARD: &str = "HB_UCD_TABLE_HH";

/// всё, что попадает в файл с таблицами
pub struct Artifact<'a>
{
    /// как был запущен генератор
    pub invocation: &'a str,
    /// описание файла UCD
    pub description: &'a str,
    pub scripts: &'a ScriptOrder,
    pub decompositions: &'a Decompositions,
    /// варианты в порядке CompressionProfile::ALL
    pub profiles: &'a [ProfileTables],
}

impl Artifact<'_>
{
    /// текст файла целиком
    pub fn render(&self) -> Result<String, fmt::Error>
    {
        let mut output = String::new();

        writedoc!(
            output,
            "
            /* == Start of generated table == */
            /*
             * The following table is generated by running:
             *
             *   {invocation}
             *
             * on file with this description: {description}
             */

            #ifndef {guard}
            #define {guard}

            #include \"hb.hh\"
            ",
            invocation = self.invocation,
            description = self.description,
            guard = HEADER_GUARD,
        )?;

        for tables in self.profiles {
            write!(output, "\n{}\n", guard(tables.profile))?;

            self.write_maps(&mut output)?;

            for table in &tables.tables {
                write_table(&mut output, table)?;
            }
        }

        writedoc!(
            output,
            "

            #endif


            #endif /* {guard} */

            /* == End of generated table == */
            ",
            guard = HEADER_GUARD,
        )?;

        Ok(output)
    }

    /// вспомогательные массивы: письменности и декомпозиции
    fn write_maps(&self, output: &mut String) -> fmt::Result
    {
        let decompositions = self.decompositions;

        let dm1_p0: Vec<String> = decompositions.singletons_p0.iter().map(|&v| hex(v)).collect();
        let dm1_p2: Vec<String> = decompositions.singletons_p2.iter().map(|&v| hex(v)).collect();

        let dm2_u32: Vec<String> = decompositions
            .pairs_u32
            .iter()
            .map(|&v| encode3("HB_CODEPOINT_ENCODE3_11_7_14", dm::u32::decode(v)))
            .collect();

        let dm2_u64: Vec<String> = decompositions
            .pairs_u64
            .iter()
            .map(|&v| encode3("HB_CODEPOINT_ENCODE3", dm::u64::decode(v)))
            .collect();

        write_array(output, "hb_script_t", "sc_map", &self.scripts.names)?;
        write_array(output, "uint16_t", "dm1_p0_map", &dm1_p0)?;
        write_array(output, "uint16_t", "dm1_p2_map", &dm1_p2)?;
        write_array(output, "uint32_t", "dm2_u32_map", &dm2_u32)?;
        write_array(output, "uint64_t", "dm2_u64_map", &dm2_u64)
    }
}

/// условие, под которым действует вариант; варианты идут цепочкой #ifndef / #elif / #else
pub fn guard(profile: CompressionProfile) -> &'static str
{
    match profile {
        CompressionProfile::Default => "#ifndef HB_OPTIMIZE_SIZE",
        CompressionProfile::Compact => "#elif !defined(HB_NO_UCD_UNASSIGNED)",
        CompressionProfile::Sloppy => "#else",
    }
}

fn encode3(wrapper: &str, entry: PairEntry) -> String
{
    format!(
        "{} ({}, {}, {})",
        wrapper,
        hex(entry.base),
        hex(entry.combiner),
        hex(entry.order)
    )
}

fn write_array<T: Display>(output: &mut String, c_type: &str, name: &str, values: &[T]) -> fmt::Result
{
    writedoc!(
        output,
        "

        static const {c_type} {PREFIX}_{name}[{len}] =
        {{{values}}};
        ",
        len = values.len(),
        values = format_list(values, FORMAT_STRING_LENGTH),
    )
}

/// ступени таблицы и функция доступа к ней
fn write_table(output: &mut String, table: &PackedTable) -> fmt::Result
{
    for (k, stage) in table.stages.iter().enumerate() {
        write_array(
            output,
            stage.int_type.c_name(),
            &format!("{}_s{}", table.name, k),
            &stage.values,
        )?;
    }

    let body = match table.stages.is_empty() {
        true => format!("(void) u;\n  return {};", table.default),
        false => format!(
            "return u<{}u ? {} : {};",
            table.len,
            lookup_expression(table),
            table.default
        ),
    };

    writedoc!(
        output,
        "

        static inline {c_type} {PREFIX}_{name} (unsigned u)
        {{
          {body}
        }}
        ",
        c_type = table.int_type().c_name(),
        name = table.name,
    )
}

/// обращение к ступеням, от первой к последней
fn lookup_expression(table: &PackedTable) -> String
{
    let mut expression = String::new();

    for (k, stage) in table.stages.iter().enumerate() {
        let index = match (stage.is_top(), stage.shift) {
            (true, 0) => "u".to_owned(),
            (true, shift) => format!("u>>{}", shift),
            (false, 0) => format!("{}+(u&{}u)", expression, stage.mask),
            (false, shift) => format!("{}+((u>>{})&{}u)", expression, shift, stage.mask),
        };

        expression = format!("{}_{}_s{}[{}]", PREFIX, table.name, k, index);
    }

    expression
}
