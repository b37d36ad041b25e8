use std::path::PathBuf;

use fwc_core::util::human;
use fwc_core::{Container, ExtractMode, ExtractOptions, TracingReporter, extract, info, list};
use serde::Serialize;

use super::error::Result;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub fn handle_extract(
    container: PathBuf,
    dest: PathBuf,
    exact: bool,
    dry_run: bool,
) -> Result<()> {
    let reporter = TracingReporter;
    let c = Container::open(&container, &reporter)?;
    let opts = ExtractOptions {
        mode: if exact {
            ExtractMode::Exact
        } else {
            ExtractMode::Chunk
        },
        dry_run,
    };
    let summary = extract(&c, &dest, Some(&opts), &reporter)?;
    eprintln!(
        "extract: {} files ({}) {} {}",
        summary.count(),
        human::bytes(summary.bytes()),
        if dry_run { "checked for" } else { "written to" },
        dest.display()
    );
    Ok(())
}

pub fn handle_list(container: PathBuf, json: bool) -> Result<()> {
    let c = Container::open(&container, &TracingReporter)?;
    let rows = list(&c);
    if json {
        return print_json(&rows);
    }
    let root = info(&c);
    println!(
        "root {} entries={} blocks={} data_start={}",
        root.name, root.entries, root.declared_blocks, root.data_start
    );
    for r in rows {
        println!(
            "#{:<5} {:>10} chunk={:<10} off={:<10} sig={} {}",
            r.ordinal, r.file_size, r.chunk_size, r.start_offset, r.signature, r.name
        );
    }
    Ok(())
}

pub fn handle_info(container: PathBuf, json: bool) -> Result<()> {
    let c = Container::open(&container, &TracingReporter)?;
    let i = info(&c);
    if json {
        return print_json(&i);
    }
    println!("name:           {}", i.name);
    println!("entries:        {}", i.entries);
    println!(
        "declared size:  {} blocks ({} bytes)",
        i.declared_blocks, i.declared_size
    );
    println!("data start:     {}", i.data_start);
    println!("computed size:  {}", i.computed_size);
    println!("file size:      {}", i.buffer_size);
    println!(
        "size check:     {}",
        if i.size_consistent { "ok" } else { "mismatch" }
    );
    Ok(())
}
