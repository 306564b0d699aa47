use serde::{Deserialize, Serialize};

use crate::error::{DrawError, Result};

/// Background color id of the reference palette (white)
pub const DEFAULT_BACKGROUND: u8 = 9;

/// One palette slot: id, name and RGB triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub id: u8,
    pub name: String,
    pub rgb: [u8; 3],
}

impl PaletteEntry {
    pub fn new(id: u8, name: &str, rgb: [u8; 3]) -> Self {
        Self {
            id,
            name: name.to_string(),
            rgb,
        }
    }
}

/// Immutable mapping from color ids to RGB values.
///
/// Built once and handed to every canvas that needs it; nothing mutates a
/// palette after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    background: u8,
}

impl Palette {
    /// Build a palette from explicit entries.
    ///
    /// Ids must be unique and `background` must be one of them.
    pub fn from_entries(entries: Vec<PaletteEntry>, background: u8) -> Result<Self> {
        let mut entries = entries;
        entries.sort_by_key(|e| e.id);

        for pair in entries.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(DrawError::DuplicateColor(pair[0].id));
            }
        }

        let palette = Self { entries, background };
        if !palette.contains(background) {
            return Err(DrawError::UnknownColor(background));
        }

        Ok(palette)
    }

    /// Same table with a different background id
    pub fn with_background(&self, background: u8) -> Result<Self> {
        Self::from_entries(self.entries.clone(), background)
    }

    pub fn lookup(&self, id: u8) -> Option<(u8, u8, u8)> {
        self.entry(id).map(|e| (e.rgb[0], e.rgb[1], e.rgb[2]))
    }

    pub fn contains(&self, id: u8) -> bool {
        self.entry(id).is_some()
    }

    /// Case-insensitive name lookup
    pub fn id_for_name(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.id)
    }

    pub fn background(&self) -> u8 {
        self.background
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// RGB triple for export; ids outside the table map to black
    pub fn get_rgb(&self, id: u8) -> (u8, u8, u8) {
        self.lookup(id).unwrap_or((0, 0, 0))
    }

    fn entry(&self, id: u8) -> Option<&PaletteEntry> {
        self.entries
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|idx| &self.entries[idx])
    }
}

impl Default for Palette {
    fn default() -> Self {
        let entries = vec![
            PaletteEntry::new(1, "red", [255, 0, 0]),
            PaletteEntry::new(2, "green", [0, 255, 0]),
            PaletteEntry::new(3, "blue", [0, 0, 255]),
            PaletteEntry::new(4, "yellow", [255, 255, 0]),
            PaletteEntry::new(5, "orange", [255, 164, 0]),
            PaletteEntry::new(6, "purple", [128, 0, 128]),
            PaletteEntry::new(7, "brown", [165, 42, 42]),
            PaletteEntry::new(8, "black", [0, 0, 0]),
            PaletteEntry::new(9, "white", [255, 255, 255]),
        ];

        Self {
            entries,
            background: DEFAULT_BACKGROUND,
        }
    }
}
