//! Zentrale Konfiguration für den Maze-Config-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Kantenlänge einer Rasterzelle in Pixeln.
pub const CELL_SIZE_PX: f32 = 36.0;
/// Kleinste einstellbare Zellgröße.
pub const CELL_SIZE_MIN_PX: f32 = 20.0;
/// Größte einstellbare Zellgröße.
pub const CELL_SIZE_MAX_PX: f32 = 72.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrund freier Zellen (RGBA: Hellgrau).
pub const CELL_COLOR_EMPTY: [f32; 4] = [0.94, 0.94, 0.94, 1.0];
/// Unzugängliche Zellen (RGBA: Dunkelgrau).
pub const CELL_COLOR_INACCESSIBLE: [f32; 4] = [0.35, 0.35, 0.38, 1.0];
/// Belegte Zellen (RGBA: Hellblau).
pub const CELL_COLOR_OCCUPIED: [f32; 4] = [0.70, 0.85, 1.0, 1.0];
/// Startpunkt einer laufenden Wand/Treppe (RGBA: Gelb).
pub const CELL_COLOR_PENDING: [f32; 4] = [1.0, 0.90, 0.35, 1.0];
/// Treppen-Startpunkt auf einem anderen Stockwerk (RGBA: Orange).
pub const CELL_COLOR_STAIR_ANCHOR: [f32; 4] = [1.0, 0.65, 0.25, 1.0];
/// Rasterlinien (RGBA: Grau).
pub const GRID_LINE_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "maze_config_editor.toml";

/// Laufzeit-Optionen, persistiert als TOML.
///
/// Wird als `maze_config_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────────
    /// Kantenlänge einer Zelle in Pixeln
    pub cell_size_px: f32,
    /// Tooltip mit Zeile/Spalte beim Überfahren einer Zelle
    #[serde(default = "default_true")]
    pub show_cell_tooltips: bool,

    // ── Farben ──────────────────────────────────────────────────────
    pub cell_color_empty: [f32; 4],
    pub cell_color_inaccessible: [f32; 4],
    pub cell_color_occupied: [f32; 4],
    pub cell_color_pending: [f32; 4],
    pub cell_color_stair_anchor: [f32; 4],
    pub grid_line_color: [f32; 4],

    // ── Verhalten ───────────────────────────────────────────────────
    /// Zurücksetzen erst nach Bestätigung ausführen
    #[serde(default = "default_true")]
    pub confirm_reset: bool,
    /// Zuletzt verwendeter Export-Ordner (Startordner der Dateidialoge)
    #[serde(default)]
    pub last_export_dir: Option<String>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            cell_size_px: CELL_SIZE_PX,
            show_cell_tooltips: true,
            cell_color_empty: CELL_COLOR_EMPTY,
            cell_color_inaccessible: CELL_COLOR_INACCESSIBLE,
            cell_color_occupied: CELL_COLOR_OCCUPIED,
            cell_color_pending: CELL_COLOR_PENDING,
            cell_color_stair_anchor: CELL_COLOR_STAIR_ANCHOR,
            grid_line_color: GRID_LINE_COLOR,
            confirm_reset: true,
            last_export_dir: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("maze_config_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Begrenzt Werte aus Hand-editierten Dateien auf gültige Bereiche.
    pub fn sanitized(mut self) -> Self {
        self.cell_size_px = if self.cell_size_px.is_finite() {
            self.cell_size_px.clamp(CELL_SIZE_MIN_PX, CELL_SIZE_MAX_PX)
        } else {
            CELL_SIZE_PX
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roundtrips_through_toml() {
        let options = EditorOptions {
            last_export_dir: Some("/tmp/maze".to_string()),
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let defaults = EditorOptions::default();
        let mut text = toml::to_string_pretty(&defaults).expect("serialisierbar");
        text = text
            .lines()
            .filter(|line| !line.starts_with("confirm_reset") && !line.starts_with("show_cell_tooltips"))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert!(parsed.confirm_reset);
        assert!(parsed.show_cell_tooltips);
        assert_eq!(parsed.last_export_dir, None);
    }

    #[test]
    fn load_from_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("maze_config_editor_does_not_exist.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn save_and_load_preserve_values() {
        let path = std::env::temp_dir().join(format!(
            "maze_config_editor_options_{}.toml",
            std::process::id()
        ));
        let options = EditorOptions {
            cell_size_px: 48.0,
            confirm_reset: false,
            ..EditorOptions::default()
        };
        options.save_to_file(&path).expect("speicherbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, options);
    }

    #[test]
    fn sanitized_clamps_cell_size() {
        let options = EditorOptions {
            cell_size_px: 500.0,
            ..EditorOptions::default()
        };
        assert_eq!(options.sanitized().cell_size_px, CELL_SIZE_MAX_PX);

        let options = EditorOptions {
            cell_size_px: f32::NAN,
            ..EditorOptions::default()
        };
        assert_eq!(options.sanitized().cell_size_px, CELL_SIZE_PX);
    }
}
