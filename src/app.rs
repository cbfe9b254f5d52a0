// src/app.rs
//
// Calculadora — module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : les caractères tapés passent par `Touche::depuis_caractere`,
// Enter = "=", Escape = "C". Même chemin que les boutons (AppCalc::appuyer).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

use crate::noyau::Touche;

/// Touches du clavier physique -> touches du moteur.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|ev| match ev {
                egui::Event::Text(t) => Some(t.chars().filter_map(Touche::depuis_caractere).collect()),
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => Some(vec![Touche::Egal]),
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => Some(vec![Touche::Effacer]),
                _ => None,
            })
            .flatten()
            .collect()
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        for touche in touches_clavier(ctx) {
            self.appuyer(touche, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });

        // L’avis doit disparaître même sans nouvelle entrée.
        if let Some(reste) = self.expirer_avis(maintenant) {
            ctx.request_repaint_after(Duration::from_secs_f64(reste));
        }
    }
}
