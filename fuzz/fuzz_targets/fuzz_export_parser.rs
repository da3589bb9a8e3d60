#![no_main]

use libfuzzer_sys::fuzz_target;
use maze_config_editor::core::validation::validate_element;
use maze_config_editor::core::ElementIdGenerator;
use maze_config_editor::export::{
    parse_file, parse_flag, parse_poles, parse_stairs, parse_walls, ExportFile,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        for file in ExportFile::ALL {
            if let Ok(records) = parse_file(file, text) {
                assert!(records.iter().all(|r| r.len() == file.field_count()));
            }
        }

        // Erfolgreich gelesene Elemente müssen die Modell-Invarianten erfüllen
        let mut ids = ElementIdGenerator::default();
        let mut parsed = Vec::new();
        parsed.extend(parse_stairs(text, &mut ids).unwrap_or_default());
        parsed.extend(parse_poles(text, &mut ids).unwrap_or_default());
        parsed.extend(parse_walls(text, &mut ids).unwrap_or_default());
        parsed.extend(parse_flag(text, &mut ids).ok().flatten());
        assert!(parsed.iter().all(|el| validate_element(el).is_ok()));
    }
});
