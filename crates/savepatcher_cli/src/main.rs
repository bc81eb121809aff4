use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use savepatcher_core::SaveFile;
use savepatcher_render::{render_slot_lines, render_slots_json};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Print the slots of a save file
    #[arg(
        long,
        value_name = "SAVE",
        conflicts_with = "from",
        conflicts_with = "to",
        conflicts_with = "append",
        conflicts_with = "output"
    )]
    read: Option<PathBuf>,
    /// The save file to copy a character from
    #[arg(long, value_name = "SAVE", requires = "to")]
    from: Option<PathBuf>,
    /// The save file to copy a character into
    #[arg(long, value_name = "SAVE", requires = "from")]
    to: Option<PathBuf>,
    /// Copy the character in this source slot into the same slot of the target
    #[arg(long, value_name = "SLOT", requires = "from")]
    append: Option<usize>,
    /// The path to write the generated save file to
    #[arg(long, value_name = "PATH", requires = "to")]
    output: Option<PathBuf>,
    /// Emit the slot listing as JSON
    #[arg(long, requires = "read")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = cli.read.as_deref() {
        let save = open_or_exit(path);
        if cli.json {
            let rendered = serde_json::to_string_pretty(&render_slots_json(save.slots()))
                .unwrap_or_else(|e| {
                    eprintln!("Error rendering JSON output: {e}");
                    process::exit(1);
                });
            println!("{rendered}");
        } else {
            println!("Savefile '{}':", path.display());
            print!("{}", render_slot_lines(save.slots()));
        }
        return;
    }

    let (Some(source_path), Some(target_path)) = (cli.from.as_deref(), cli.to.as_deref()) else {
        eprintln!("either --read <SAVE> or both --from <SAVE> and --to <SAVE> are required");
        process::exit(2);
    };

    let source = open_or_exit(source_path);
    let mut target = open_or_exit(target_path);

    println!("Savefile to copy from:");
    print!("{}", render_slot_lines(source.slots()));
    println!();

    println!("Savefile to copy to:");
    print!("{}", render_slot_lines(target.slots()));
    println!();

    if let Some(slot) = cli.append {
        target.append_slot(&source, slot).unwrap_or_else(|e| {
            eprintln!("Error appending slot {slot}: {e}");
            process::exit(1);
        });

        println!("Generated file:");
        print!("{}", render_slot_lines(target.slots()));
        println!();
    }

    if let Some(output) = cli.output.as_deref() {
        target.write(output).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", output.display());
            process::exit(1);
        });
        println!("Successfully wrote output to file '{}'", output.display());
    }
}

fn open_or_exit(path: &Path) -> SaveFile {
    SaveFile::open(path).unwrap_or_else(|e| {
        eprintln!("Error loading save file {}: {e}", path.display());
        process::exit(1);
    })
}
