use maze_config_editor::core::ElementIdGenerator;
use maze_config_editor::export::{
    parse_file, parse_flag, parse_poles, parse_stairs, parse_walls, write_all_to_dir, ExportFile,
};
use maze_config_editor::{ElementType, GridPos, MazeElement, MazeLayout};

fn sample_layout() -> MazeLayout {
    let mut layout = MazeLayout::with_seed_players();

    let id = layout.next_id(ElementType::Stair);
    layout.add(MazeElement::stair(id, 0, GridPos::new(5, 5), 1, GridPos::new(5, 5)));
    let id = layout.next_id(ElementType::Stair);
    layout.add(MazeElement::stair(id, 1, GridPos::new(20, 8), 0, GridPos::new(3, 2)));
    let id = layout.next_id(ElementType::Pole);
    layout.add(MazeElement::pole(id, 0, GridPos::new(3, 4), 2));
    let id = layout.next_id(ElementType::Wall);
    layout.add(MazeElement::wall(id, 0, GridPos::new(2, 3), GridPos::new(2, 7)));
    let id = layout.next_id(ElementType::Wall);
    layout.add(MazeElement::wall(id, 1, GridPos::new(20, 1), GridPos::new(24, 1)));
    let id = layout.next_id(ElementType::Flag);
    layout.add(MazeElement::flag(id, 2, GridPos::new(12, 4)));
    let id = layout.next_id(ElementType::Flag);
    layout.add(MazeElement::flag(id, 0, GridPos::new(1, 1)));

    layout
}

#[test]
fn test_export_lines_reparse_to_element_fields() {
    let layout = sample_layout();

    let stairs = parse_file(ExportFile::Stairs, &ExportFile::Stairs.render(&layout))
        .expect("stairs.txt parsebar");
    assert_eq!(stairs, vec![vec![0, 5, 5, 1, 5, 5], vec![1, 20, 8, 0, 3, 2]]);

    let poles = parse_file(ExportFile::Poles, &ExportFile::Poles.render(&layout))
        .expect("poles.txt parsebar");
    assert_eq!(poles, vec![vec![0, 2, 3, 4]]);

    let walls = parse_file(ExportFile::Walls, &ExportFile::Walls.render(&layout))
        .expect("walls.txt parsebar");
    assert_eq!(walls, vec![vec![0, 2, 3, 2, 7], vec![1, 20, 1, 24, 1]]);

    // Nur die erste Flagge wird exportiert
    let flag = parse_file(ExportFile::Flag, &ExportFile::Flag.render(&layout))
        .expect("flag.txt parsebar");
    assert_eq!(flag, vec![vec![2, 12, 4]]);
}

#[test]
fn test_export_has_no_trailing_newline_and_skips_players() {
    let layout = sample_layout();

    for file in ExportFile::ALL {
        let content = file.render(&layout);
        assert!(!content.ends_with('\n'), "{} endet mit Zeilenumbruch", file.file_name());
    }

    let seeded = MazeLayout::with_seed_players();
    for file in ExportFile::ALL {
        assert_eq!(file.render(&seeded), "");
    }
}

#[test]
fn test_write_all_to_dir_creates_four_files() {
    let layout = sample_layout();
    let dir = std::env::temp_dir().join(format!("maze_config_export_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Temp-Ordner anlegbar");

    write_all_to_dir(&dir, &layout).expect("Export sollte gelingen");

    for file in ExportFile::ALL {
        let written = std::fs::read_to_string(dir.join(file.file_name()))
            .unwrap_or_else(|e| panic!("{} fehlt: {e}", file.file_name()));
        assert_eq!(written, file.render(&layout));
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_reimported_elements_render_identical_files() {
    let layout = sample_layout();
    let mut ids = ElementIdGenerator::default();
    let mut reimported = MazeLayout::new();

    let stairs = parse_stairs(&ExportFile::Stairs.render(&layout), &mut ids).expect("stairs");
    let poles = parse_poles(&ExportFile::Poles.render(&layout), &mut ids).expect("poles");
    let walls = parse_walls(&ExportFile::Walls.render(&layout), &mut ids).expect("walls");
    let flag = parse_flag(&ExportFile::Flag.render(&layout), &mut ids).expect("flag");

    for element in stairs.into_iter().chain(poles).chain(walls).chain(flag) {
        reimported.add(element);
    }

    for file in ExportFile::ALL {
        assert_eq!(file.render(&reimported), file.render(&layout));
    }
}
