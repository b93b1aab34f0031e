use crate::model::shape_record::ShapeRecord;

pub const LEGEND: &str = "b: batch size\nc: channels\nw: width\nh: height\n";
pub const HEADER: &str = " id,   b,   c,   w,   h";

pub fn format_record(record: &ShapeRecord) -> String {
    format!(
        "{:>3}, {:>3}, {:>3}, {:>3}, {:>3}",
        record.index, record.batch, record.channels, record.width, record.height
    )
}

/// Legend, blank line, header, then one right-aligned row per record.
pub fn format_plan(records: &[ShapeRecord]) -> String {
    let mut out = format!("{}\n{}\n", LEGEND, HEADER);
    for record in records {
        out.push_str(&format_record(record));
        out.push('\n');
    }
    out
}

pub fn print_plan(records: &[ShapeRecord]) {
    println!("Starting...\n");
    print!("{}", format_plan(records));
    println!("\nFinished!");
}
