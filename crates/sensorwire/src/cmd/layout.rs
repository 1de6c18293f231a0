use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use sensorwire_layout::{Field, Layout};
use serde::Serialize;

use crate::cmd::LayoutArgs;
use crate::exit::{decode_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct FieldOutput {
    index: usize,
    r#type: &'static str,
    size: usize,
    offset: usize,
}

#[derive(Serialize)]
struct LayoutOutput {
    layout: String,
    size: usize,
    values: usize,
    fields: Vec<FieldOutput>,
}

pub fn run(args: LayoutArgs, format: OutputFormat) -> CliResult<i32> {
    let layout = match &args.spec {
        Some(spec) => Layout::parse(spec).map_err(|err| decode_error("invalid layout", err))?,
        None => Layout::default(),
    };

    let fields: Vec<FieldOutput> = layout
        .offsets()
        .enumerate()
        .map(|(index, (offset, field))| FieldOutput {
            index,
            r#type: field_name(field),
            size: field.size(),
            offset,
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let out = LayoutOutput {
                layout: layout.to_string(),
                size: layout.size(),
                values: layout.value_count(),
                fields,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "FIELD", "SIZE", "OFFSET"]);
            for field in &fields {
                table.add_row(vec![
                    field.index.to_string(),
                    field.r#type.to_string(),
                    field.size.to_string(),
                    field.offset.to_string(),
                ]);
            }
            println!("{table}");
            println!("total: {} bytes, {} values", layout.size(), layout.value_count());
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            println!(
                "layout={} size={} fields={} values={}",
                layout,
                layout.size(),
                layout.fields().len(),
                layout.value_count()
            );
        }
    }

    Ok(SUCCESS)
}

fn field_name(field: Field) -> &'static str {
    match field {
        Field::Float32 => "float32",
        Field::Int32 => "int32",
        Field::Pad => "pad",
    }
}
