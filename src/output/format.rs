use std::fmt::{Display, UpperHex};

/// начало строки массива
const INDENT: &str = "\n  ";

/// элементы массива через запятую, строки не длиннее boundary
pub fn format_list<T: Display>(input: &[T], boundary: usize) -> String
{
    let mut output = String::new();
    let mut line = String::new();

    for e in input {
        let e_str = format!("{},", e);

        if !line.is_empty() && INDENT.len() + line.len() + 1 + e_str.len() > boundary {
            output.push_str(INDENT);
            output.push_str(line.as_str());
            line.clear();
        }

        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(e_str.as_str());
    }

    if !line.is_empty() {
        output.push_str(INDENT);
        output.push_str(line.as_str());
    }
    output.push('\n');

    output
}

/// шестнадцатеричная беззнаковая константа: 0x00C5u
pub fn hex<T: UpperHex>(value: T) -> String
{
    format!("0x{:04X}u", value)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_hex()
    {
        assert_eq!(hex(0xC5u32), "0x00C5u");
        assert_eq!(hex(0x2F800u32), "0x2F800u");
    }

    #[test]
    fn test_format_list()
    {
        assert_eq!(format_list(&[1, 2, 3], 120), "\n  1, 2, 3,\n");
        assert_eq!(format_list::<u8>(&[], 120), "\n");

        // перенос строки по границе
        let output = format_list(&[100, 200, 300], 12);
        assert_eq!(output, "\n  100, 200,\n  300,\n");
    }
}
