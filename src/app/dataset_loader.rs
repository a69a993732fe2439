//! Laden des Blockseiten-Datensatzes (HTTP im Hintergrund oder lokale Datei).

use crate::core::BlockfaceSet;
use anyhow::Context;
use std::io::Read;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

/// Ergebnis eines abgeschlossenen Ladevorgangs
#[derive(Debug)]
pub struct LoadedDataset {
    /// Herkunft (URL oder Pfad) für Status und Logs
    pub source: String,
    /// Geparste Blockseiten
    pub blockfaces: BlockfaceSet,
}

/// Lädt den Datensatz in einem Hintergrund-Thread und liefert das Ergebnis
/// über einen Channel, der einmal pro Frame abgefragt wird.
#[derive(Default)]
pub struct DatasetLoader {
    receiver: Option<Receiver<anyhow::Result<LoadedDataset>>>,
}

impl DatasetLoader {
    /// Erstellt einen Loader ohne laufenden Abruf.
    pub fn new() -> Self {
        Self { receiver: None }
    }

    /// Gibt `true` zurück, solange ein Abruf läuft.
    pub fn is_loading(&self) -> bool {
        self.receiver.is_some()
    }

    /// Startet den Abruf von `url`. Ein laufender Abruf wird verworfen.
    pub fn start_fetch(&mut self, url: String, id_property: String, timeout: Duration) {
        let (sender, receiver) = mpsc::channel();
        self.receiver = Some(receiver);

        log::info!("Lade Blockseiten von {}", url);
        std::thread::spawn(move || {
            let result = fetch_geojson(&url, timeout).and_then(|content| {
                let blockfaces = BlockfaceSet::from_geojson_str(&content, &id_property)?;
                Ok(LoadedDataset {
                    source: url,
                    blockfaces,
                })
            });
            // Empfänger kann bereits verworfen sein (neuer Abruf gestartet)
            let _ = sender.send(result);
        });
    }

    /// Fragt das Ergebnis ab, ohne zu blockieren.
    pub fn poll(&mut self) -> Option<anyhow::Result<LoadedDataset>> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                Some(Err(anyhow::anyhow!(
                    "Lade-Thread wurde ohne Ergebnis beendet"
                )))
            }
        }
    }
}

/// Ruft GeoJSON per HTTP GET ab (kein Retry).
pub fn fetch_geojson(url: &str, timeout: Duration) -> anyhow::Result<String> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(timeout)
        .timeout_read(timeout)
        .build();

    let response = match agent.get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let text = response.into_string().unwrap_or_default();
            anyhow::bail!("HTTP {code} beim Abruf von {url}: {text}");
        }
        Err(err) => return Err(err).with_context(|| format!("Abruf von {url} fehlgeschlagen")),
    };

    // `into_string` ist auf 10 MB begrenzt; der Datensatz ist größer
    let mut content = String::new();
    response
        .into_reader()
        .read_to_string(&mut content)
        .with_context(|| format!("Antwort von {url} nicht lesbar"))?;
    Ok(content)
}

/// Lädt den Datensatz synchron aus einer lokalen GeoJSON-Datei.
pub fn load_file(path: &Path, id_property: &str) -> anyhow::Result<LoadedDataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei {} nicht lesbar", path.display()))?;
    let blockfaces = BlockfaceSet::from_geojson_str(&content, id_property)
        .with_context(|| format!("Datei {} ist kein gültiges GeoJSON", path.display()))?;
    Ok(LoadedDataset {
        source: path.display().to_string(),
        blockfaces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_loader_polls_nothing() {
        let mut loader = DatasetLoader::new();
        assert!(!loader.is_loading());
        assert!(loader.poll().is_none());
    }

    #[test]
    fn load_file_reports_missing_file() {
        let err = load_file(Path::new("/nonexistent/blockfaces.geojson"), "globalid")
            .expect_err("Datei fehlt");
        assert!(format!("{err:#}").contains("nicht lesbar"));
    }

    #[test]
    fn fetch_from_unreachable_host_fails_and_clears_loader() {
        let mut loader = DatasetLoader::new();
        loader.start_fetch(
            "http://127.0.0.1:9/blockfaces.geojson".into(),
            "globalid".into(),
            Duration::from_millis(200),
        );
        assert!(loader.is_loading());

        let result = loop {
            if let Some(result) = loader.poll() {
                break result;
            }
            std::thread::sleep(Duration::from_millis(10));
        };
        assert!(result.is_err());
        assert!(!loader.is_loading());
    }
}
