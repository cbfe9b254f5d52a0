// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Un seul écran : affichage + pavé 5×4
// - Le pavé est une table de libellés : chaque libellé passe par `Touche::from_str`,
//   aucune logique par bouton ici
// - Avis d’erreur transitoire sous l’affichage

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Touche;

/// Pavé : "" = case vide.
const PAVE: [[&str; 4]; 5] = [
    ["C", "±", "%", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "=", ""],
];

const TAILLE_BOUTON: [f32; 2] = [72.0, 56.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        self.ui_avis(ui);
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // hauteur stable même sans opération en attente
                    let attente = self.moteur.expression_en_attente();
                    ui.label(egui::RichText::new(format!("{attente} ")).size(18.0).weak());

                    ui.label(
                        egui::RichText::new(self.moteur.affichage())
                            .size(44.0)
                            .monospace(),
                    );
                });
            });
    }

    fn ui_avis(&self, ui: &mut egui::Ui) {
        match &self.avis {
            Some(avis) => {
                ui.colored_label(ui.visuals().error_fg_color, &avis.message);
            }
            None => {
                ui.label("");
            }
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculadora")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for libelle in ligne {
                        self.bouton(ui, libelle);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str) {
        if libelle.is_empty() {
            ui.label("");
            return;
        }

        let texte = egui::RichText::new(libelle).size(24.0);
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte));
        if !resp.clicked() {
            return;
        }

        match libelle.parse::<Touche>() {
            Ok(touche) => {
                let maintenant = ui.input(|i| i.time);
                self.appuyer(touche, maintenant);
            }
            Err(e) => tracing::warn!(erreur = %e, "bouton sans touche"),
        }
    }
}
