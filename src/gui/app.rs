//! Main application structure

use chantier_ciment::config::Config;
use chantier_ciment::storage::FileStorage;
use chantier_ciment::store::LedgerStore;
use eframe::egui;

use crate::ledger_panel::LedgerPanel;

/// Main application state
pub struct CimentApp {
    /// Persistent ledger store
    store: LedgerStore<FileStorage>,
    /// Ledger panel state
    panel: LedgerPanel,
}

impl CimentApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_default();

        Self {
            store: open_store(&config),
            panel: LedgerPanel::new(),
        }
    }
}

impl eframe::App for CimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.ui(ui, &mut self.store);
        });
    }
}

/// Open the ledger store, falling back to a temp-dir ledger when the
/// configured location is unusable
fn open_store(config: &Config) -> LedgerStore<FileStorage> {
    let data_dir = config
        .data_dir()
        .unwrap_or_else(|_| std::env::temp_dir().join("chantier-ciment"));

    FileStorage::open(&data_dir)
        .and_then(LedgerStore::open)
        .unwrap_or_else(|_| {
            let storage = FileStorage::open(std::env::temp_dir().join("chantier-ciment"))
                .expect("Failed to open fallback storage");
            LedgerStore::open(storage).expect("Failed to open fallback store")
        })
}
