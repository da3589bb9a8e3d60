//! Text-Export für die Spiel-Engine.
//!
//! Vier Dateien (`stairs.txt`, `poles.txt`, `walls.txt`, `flag.txt`), je eine
//! Zeile pro Element. Der Parser liest sie zurück und ist Fuzz-Ziel.

pub mod parser;
pub mod writer;

pub use parser::{
    parse_file, parse_flag, parse_poles, parse_records, parse_stairs, parse_walls, ExportParseError,
};
pub use writer::{
    write_all_to_dir, write_flag, write_poles, write_stairs, write_walls, ExportFile,
};
