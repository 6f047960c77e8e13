//! Protokoll der Marker- und Kamera-Commands.
//!
//! Hält fest, welche Commands der Controller ausgeführt hat (Start, Auswahlwechsel,
//! Platzierungen, Kamera). Dient der Fehlersuche und den Ablauf-Tests.

use super::AppCommand;

/// Ausgeführte Commands in Ausführungsreihenfolge.
///
/// Ein Kartenklick im Idle-Modus erzeugt keine Commands und taucht daher nicht auf.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Anzahl der geloggten Marker-Platzierungen.
    pub fn placements(&self) -> usize {
        self.entries
            .iter()
            .filter(|c| matches!(c, AppCommand::CreateMarker { .. }))
            .count()
    }
}
