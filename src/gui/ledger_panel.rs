//! Ledger panel: entry form, record table and running total

use chantier_ciment::storage::FileStorage;
use chantier_ciment::store::LedgerStore;
use chantier_ciment::types::RecordForm;
use chantier_ciment::view::{LedgerView, EMPTY_MESSAGE};
use eframe::egui::{self, Color32, RichText, Ui};

/// Common cement types offered for quick entry
const CEMENT_TYPES: &[&str] = &["CEM I 52,5", "CEM II 32,5", "CEM II 42,5", "CEM III 32,5"];

/// Panel state
pub struct LedgerPanel {
    /// Entry form fields, raw text validated on submit
    date_input: String,
    quantity_input: String,
    type_input: String,
    supplier_input: String,
    comment_input: String,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl LedgerPanel {
    pub fn new() -> Self {
        Self {
            // Pre-fill with today so consecutive entries default to it
            date_input: today(),
            quantity_input: String::new(),
            type_input: String::new(),
            supplier_input: String::new(),
            comment_input: String::new(),
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, store: &mut LedgerStore<FileStorage>) {
        ui.heading("Consommation de ciment");
        ui.add_space(10.0);

        self.render_entry_form(ui, store);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        self.render_record_table(ui, store);

        // Status message
        if let Some((ref msg, is_error)) = self.status_message {
            ui.add_space(10.0);
            let color = if is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.colored_label(color, msg);
        }
    }

    fn render_entry_form(&mut self, ui: &mut Ui, store: &mut LedgerStore<FileStorage>) {
        ui.label(RichText::new("Nouvelle consommation").strong());
        ui.add_space(5.0);

        egui::Grid::new("entry_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Date:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.date_input)
                        .hint_text("AAAA-MM-JJ")
                        .desired_width(120.0),
                );
                ui.end_row();

                ui.label("Quantité:");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.quantity_input)
                            .hint_text("ex: 12.5")
                            .desired_width(80.0),
                    );
                    ui.label("sacs");
                });
                ui.end_row();

                ui.label("Type:");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.type_input)
                            .hint_text("ex: CEM II 32,5")
                            .desired_width(160.0),
                    );
                    for cement_type in CEMENT_TYPES {
                        let selected = self.type_input == *cement_type;
                        if ui.selectable_label(selected, *cement_type).clicked() {
                            self.type_input = cement_type.to_string();
                        }
                    }
                });
                ui.end_row();

                ui.label("Fournisseur:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.supplier_input)
                        .hint_text("ex: Lafarge")
                        .desired_width(200.0),
                );
                ui.end_row();

                ui.label("Commentaire:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.comment_input)
                        .hint_text("facultatif")
                        .desired_width(260.0),
                );
                ui.end_row();
            });

        ui.add_space(8.0);

        if ui.button("Ajouter").clicked() {
            self.submit_entry(store);
        }
    }

    fn submit_entry(&mut self, store: &mut LedgerStore<FileStorage>) {
        let form = RecordForm {
            date: self.date_input.clone(),
            quantity: self.quantity_input.clone(),
            cement_type: self.type_input.clone(),
            supplier: self.supplier_input.clone(),
            comment: self.comment_input.clone(),
        };

        match store.submit(&form) {
            Ok(_) => {
                self.status_message = Some(("Consommation enregistrée".to_string(), false));
                // Clear the form; the date field goes back to today
                self.quantity_input.clear();
                self.type_input.clear();
                self.supplier_input.clear();
                self.comment_input.clear();
                self.date_input = today();
            }
            Err(e) => {
                self.status_message = Some((e.to_string(), true));
            }
        }
    }

    fn render_record_table(&mut self, ui: &mut Ui, store: &mut LedgerStore<FileStorage>) {
        ui.label(RichText::new("Historique").strong());
        ui.add_space(5.0);

        let view = LedgerView::build(store.records());

        if view.is_empty() {
            ui.label(RichText::new(EMPTY_MESSAGE).italics().color(Color32::GRAY));
            ui.add_space(8.0);
            ui.label(RichText::new(view.total_label()).strong());
            return;
        }

        // Collect the id to delete, processed after the grid borrow ends
        let mut to_delete: Option<String> = None;

        egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            egui::Grid::new("record_table")
                .num_columns(6)
                .spacing([12.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new("Date").strong());
                    ui.label(RichText::new("Sacs").strong());
                    ui.label(RichText::new("Type").strong());
                    ui.label(RichText::new("Fournisseur").strong());
                    ui.label(RichText::new("Commentaire").strong());
                    ui.label("");
                    ui.end_row();

                    for row in &view.rows {
                        ui.label(&row.date);
                        ui.label(&row.quantity);
                        ui.label(&row.cement_type);
                        ui.label(&row.supplier);
                        ui.label(&row.comment);

                        if ui.small_button("Supprimer").clicked() {
                            to_delete = Some(row.id.clone());
                        }
                        ui.end_row();
                    }
                });
        });

        ui.add_space(8.0);
        ui.label(RichText::new(view.total_label()).strong());

        if let Some(id) = to_delete {
            match store.remove(&id) {
                Ok(true) => {
                    self.status_message = Some(("Consommation supprimée".to_string(), false));
                }
                Ok(false) => {
                    self.status_message = Some(("Entrée introuvable".to_string(), true));
                }
                Err(e) => {
                    self.status_message = Some((format!("Erreur: {}", e), true));
                }
            }
        }
    }
}

impl Default for LedgerPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Today's date as the form's text value
fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
