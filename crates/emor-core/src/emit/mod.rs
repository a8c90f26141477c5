use crate::domain::ParameterTable;
use crate::keys::EmissionPlan;
use std::io::{self, Write};

pub const DEFAULT_CLASS_NAME: &str = "GammaEMOR";
pub const VALUES_PER_ROW: usize = 8;

const ATTRIBUTION: &str = "\
*
* The EMOR model was proposed and described by  M.D. Grossberg
* and S.K. Nayar from the University of Columbia (Computer
* Vision Laboratory). For more information on EMoR please visit
*
* http://www.cs.columbia.edu/CAVE/software/softlib/dorf.php
*
*/";

/// Shortest representation that reads back to the same `f64`, always with a
/// decimal point or exponent (`1.0`, `-3.2e-5`).
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

pub fn format_value_list(values: &[f64]) -> String {
    let mut rendered = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            rendered.push_str(", ");
        }
        if index % VALUES_PER_ROW == 0 {
            rendered.push('\n');
        }
        rendered.push_str(&format_value(*value));
    }
    rendered
}

pub fn write_array_declaration<W: Write>(
    sink: &mut W,
    class_name: &str,
    name: &str,
    values: &[f64],
) -> io::Result<()> {
    writeln!(
        sink,
        "const double {}::{}_[] = {{{}}};",
        class_name,
        name,
        format_value_list(values)
    )
}

pub fn write_header<W: Write>(sink: &mut W, basename: &str) -> io::Result<()> {
    writeln!(sink, "/*")?;
    writeln!(sink, "*")?;
    writeln!(
        sink,
        "* Sensor response curve data converted from '{}.txt'",
        basename
    )?;
    writeln!(sink, "{}", ATTRIBUTION)?;
    writeln!(sink, "/// @cond")
}

pub fn write_footer<W: Write>(sink: &mut W) -> io::Result<()> {
    writeln!(sink, "/// @endcond")
}

/// Writes the complete header file for one table and returns the number of
/// array declarations emitted.
pub fn write_parameter_header<W: Write>(
    sink: &mut W,
    table: &ParameterTable,
    basename: &str,
    class_name: &str,
    index_width: usize,
) -> io::Result<usize> {
    write_header(sink, basename)?;

    let plan = EmissionPlan::new(table, index_width);
    for emission in plan.iter() {
        let values = table.get(emission.key).unwrap_or_default();
        write_array_declaration(sink, class_name, emission.name, values)?;
    }

    write_footer(sink)?;
    Ok(plan.len())
}
